//! Favour (sellable service offering) model and DTOs.

use agency_core::types::{DbId, Timestamp};
use agency_core::validation::{money_amount, not_blank};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `favours` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Favour {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating (or fully replacing) a favour.
///
/// `category` is free text; see [`agency_core::catalog::FAVOUR_CATEGORIES`]
/// for the known values.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFavour {
    #[validate(length(max = 100), custom(function = "not_blank"))]
    pub name: String,
    #[validate(length(max = 50), custom(function = "not_blank"))]
    pub category: String,
    pub description: Option<String>,
    #[validate(custom(function = "money_amount"))]
    pub price: Decimal,
}

pub type UpdateFavour = CreateFavour;
