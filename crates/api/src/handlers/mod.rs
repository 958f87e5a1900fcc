pub mod client;
pub mod employee;
pub mod favour;
pub mod pages;
pub mod project;
pub mod project_service;
pub mod review;
pub mod user;
pub mod user_profile;
