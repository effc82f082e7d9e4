use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::category::CategoryDto;

/// Full car representation used on detail pages, including live availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarDto {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub slug: String,
    pub category: CategoryDto,
    pub quantity: i32,
    pub cleaning_time: i32,
    pub transmission: String,
    pub seats: i32,
    pub doors: i32,
    pub fuel_type: String,
    pub daily_rate: Decimal,
    pub twelve_hour_rate: Decimal,
    pub status: String,
    pub image: Option<String>,
    pub is_featured: bool,
    pub features: String,
    pub created_at: DateTime<Utc>,
    pub is_available: bool,
    pub live_status: String,
    pub status_color: String,
    pub next_available_date: Option<NaiveDate>,
}

/// Lightweight car representation for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarListItemDto {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub slug: String,
    pub category_name: String,
    pub daily_rate: Decimal,
    pub twelve_hour_rate: Decimal,
    pub transmission: String,
    pub fuel_type: String,
    pub seats: i32,
    pub image: Option<String>,
    pub status: String,
    pub is_available: bool,
    pub live_status: String,
    pub status_color: String,
}

/// Autosuggest entry for the search box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarSuggestionDto {
    pub id: i32,
    pub label: String,
    pub url: String,
    pub image: Option<String>,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedCarsDto {
    pub cars: Vec<CarListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCarDto {
    pub name: String,
    pub brand: String,
    pub category_id: i32,
    pub quantity: Option<i32>,
    pub cleaning_time: Option<i32>,
    pub transmission: String,
    pub seats: Option<i32>,
    pub doors: Option<i32>,
    pub fuel_type: Option<String>,
    pub daily_rate: Decimal,
    pub twelve_hour_rate: Decimal,
    pub status: Option<String>,
    pub image: Option<String>,
    pub is_featured: Option<bool>,
    pub features: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateCarDto {
    pub name: String,
    pub brand: String,
    pub category_id: i32,
    pub quantity: i32,
    pub cleaning_time: i32,
    pub transmission: String,
    pub seats: i32,
    pub doors: i32,
    pub fuel_type: String,
    pub daily_rate: Decimal,
    pub twelve_hour_rate: Decimal,
    pub status: String,
    pub image: Option<String>,
    pub is_featured: bool,
    pub features: String,
}
