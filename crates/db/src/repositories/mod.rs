//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or any Postgres executor, where the method must
//! also run inside a transaction) as the first argument. Lists are ordered
//! by ascending id, i.e. insertion order.

pub mod client_repo;
pub mod employee_repo;
pub mod favour_repo;
pub mod project_repo;
pub mod project_service_repo;
pub mod review_repo;
pub mod user_profile_repo;
pub mod user_repo;

pub use client_repo::ClientRepo;
pub use employee_repo::EmployeeRepo;
pub use favour_repo::FavourRepo;
pub use project_repo::ProjectRepo;
pub use project_service_repo::ProjectServiceRepo;
pub use review_repo::ReviewRepo;
pub use user_profile_repo::UserProfileRepo;
pub use user_repo::UserRepo;
