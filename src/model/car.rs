//! Domain models for the car fleet.
//!
//! Defines the car domain model, typed enums for the string columns, live
//! availability info, and parameter types for search and admin operations.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    dto::car::{
        CarDto, CarListItemDto, CarSuggestionDto, CreateCarDto, PaginatedCarsDto, UpdateCarDto,
    },
    error::internal::InternalError,
    model::category::Category,
};

/// Gearbox type offered by a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transmission {
    Auto,
    Manual,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Manual => "MANUAL",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "AUTO" => Some(Self::Auto),
            "MANUAL" => Some(Self::Manual),
            _ => None,
        }
    }
}

/// Admin-controlled fleet status override.
///
/// `Rented` and `Maintenance` force a car off the listings regardless of what
/// the booking table says; `Available` defers to live booking counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarStatus {
    Available,
    Rented,
    Maintenance,
}

impl CarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Rented => "RENTED",
            Self::Maintenance => "MAINTENANCE",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "AVAILABLE" => Some(Self::Available),
            "RENTED" => Some(Self::Rented),
            "MAINTENANCE" => Some(Self::Maintenance),
            _ => None,
        }
    }
}

/// Bootstrap-style color class attached to a live status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Success,
    Warning,
    Danger,
    Secondary,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Secondary => "secondary",
        }
    }
}

/// A rentable car model with specs, rate tiers, and fleet metadata.
///
/// `quantity` is the number of identical vehicles backing this listing;
/// availability is computed against it rather than per physical vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub category_id: i32,
    pub slug: String,
    pub quantity: i32,
    /// Hours needed for cleaning between trips.
    pub cleaning_time: i32,
    pub transmission: Transmission,
    pub seats: i32,
    pub doors: i32,
    pub fuel_type: String,
    pub daily_rate: Decimal,
    pub twelve_hour_rate: Decimal,
    pub status: CarStatus,
    pub image: Option<String>,
    pub is_featured: bool,
    pub features: String,
    pub created_at: DateTime<Utc>,
}

impl Car {
    /// Converts an entity model to a car domain model at the repository boundary.
    ///
    /// Fails if the stored transmission or status strings are unrecognized.
    pub fn from_entity(entity: entity::car::Model) -> Result<Self, InternalError> {
        let transmission = Transmission::from_str(&entity.transmission).ok_or_else(|| {
            InternalError::UnknownEnumValue {
                column: "car.transmission",
                value: entity.transmission.clone(),
            }
        })?;
        let status =
            CarStatus::from_str(&entity.status).ok_or_else(|| InternalError::UnknownEnumValue {
                column: "car.status",
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            brand: entity.brand,
            category_id: entity.category_id,
            slug: entity.slug,
            quantity: entity.quantity,
            cleaning_time: entity.cleaning_time,
            transmission,
            seats: entity.seats,
            doors: entity.doors,
            fuel_type: entity.fuel_type,
            daily_rate: entity.daily_rate,
            twelve_hour_rate: entity.twelve_hour_rate,
            status,
            image: entity.image,
            is_featured: entity.is_featured,
            features: entity.features,
            created_at: entity.created_at,
        })
    }

    /// Display label combining brand and model name.
    pub fn label(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }
}

/// Live availability computed from the booking table at request time.
#[derive(Debug, Clone, PartialEq)]
pub struct CarAvailability {
    pub is_available: bool,
    /// Client-facing status message ("Available", "2 Left", "Sold Out", ...).
    pub live_status: String,
    pub status_color: StatusColor,
    /// Earliest date a vehicle frees up, only set when fully booked.
    pub next_available_date: Option<NaiveDate>,
}

/// Car with its category name and live availability, as shown in listings.
#[derive(Debug, Clone, PartialEq)]
pub struct CarListing {
    pub car: Car,
    pub category_name: String,
    pub availability: CarAvailability,
}

impl CarListing {
    pub fn into_dto(self) -> CarListItemDto {
        CarListItemDto {
            id: self.car.id,
            name: self.car.name,
            brand: self.car.brand,
            slug: self.car.slug,
            category_name: self.category_name,
            daily_rate: self.car.daily_rate,
            twelve_hour_rate: self.car.twelve_hour_rate,
            transmission: self.car.transmission.as_str().to_string(),
            fuel_type: self.car.fuel_type,
            seats: self.car.seats,
            image: self.car.image,
            status: self.car.status.as_str().to_string(),
            is_available: self.availability.is_available,
            live_status: self.availability.live_status,
            status_color: self.availability.status_color.as_str().to_string(),
        }
    }
}

/// Car with full category info and live availability, as shown on detail pages.
#[derive(Debug, Clone, PartialEq)]
pub struct CarDetails {
    pub car: Car,
    pub category: Category,
    pub availability: CarAvailability,
}

impl CarDetails {
    pub fn into_dto(self) -> CarDto {
        CarDto {
            id: self.car.id,
            name: self.car.name,
            brand: self.car.brand,
            slug: self.car.slug,
            category: self.category.into_dto(),
            quantity: self.car.quantity,
            cleaning_time: self.car.cleaning_time,
            transmission: self.car.transmission.as_str().to_string(),
            seats: self.car.seats,
            doors: self.car.doors,
            fuel_type: self.car.fuel_type,
            daily_rate: self.car.daily_rate,
            twelve_hour_rate: self.car.twelve_hour_rate,
            status: self.car.status.as_str().to_string(),
            image: self.car.image,
            is_featured: self.car.is_featured,
            features: self.car.features,
            created_at: self.car.created_at,
            is_available: self.availability.is_available,
            live_status: self.availability.live_status,
            status_color: self.availability.status_color.as_str().to_string(),
            next_available_date: self.availability.next_available_date,
        }
    }
}

/// Autosuggest entry for the search box.
#[derive(Debug, Clone, PartialEq)]
pub struct CarSuggestion {
    pub id: i32,
    pub label: String,
    pub url: String,
    pub image: Option<String>,
    pub price: Decimal,
}

impl CarSuggestion {
    pub fn into_dto(self) -> CarSuggestionDto {
        CarSuggestionDto {
            id: self.id,
            label: self.label,
            url: self.url,
            image: self.image,
            price: self.price.to_string(),
        }
    }
}

/// Parameters for the unified search + availability engine.
///
/// All filters are optional; `start_time`/`end_time` only take effect when both
/// are present. `category` and `transmission` treat the literal value "All" as
/// no filter, mirroring the search form.
#[derive(Debug, Clone, Default)]
pub struct CarSearchParams {
    pub query: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub transmission: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub page: u64,
    pub per_page: u64,
}

/// Paginated collection of car listings with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedCars {
    pub cars: Vec<CarListing>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedCars {
    pub fn into_dto(self) -> PaginatedCarsDto {
        PaginatedCarsDto {
            cars: self.cars.into_iter().map(|c| c.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for creating a new car (admin).
///
/// The slug is derived from brand, name, and the assigned id after insertion
/// and is not part of the input.
#[derive(Debug, Clone)]
pub struct CreateCarParams {
    pub name: String,
    pub brand: String,
    pub category_id: i32,
    pub quantity: i32,
    pub cleaning_time: i32,
    pub transmission: Transmission,
    pub seats: i32,
    pub doors: i32,
    pub fuel_type: String,
    pub daily_rate: Decimal,
    pub twelve_hour_rate: Decimal,
    pub status: CarStatus,
    pub image: Option<String>,
    pub is_featured: bool,
    pub features: String,
}

impl CreateCarParams {
    pub fn from_dto(dto: CreateCarDto) -> Result<Self, crate::error::AppError> {
        let transmission = Transmission::from_str(&dto.transmission).ok_or_else(|| {
            crate::error::AppError::BadRequest(format!(
                "Invalid transmission: {}",
                dto.transmission
            ))
        })?;
        let status = match dto.status {
            Some(ref value) => CarStatus::from_str(value).ok_or_else(|| {
                crate::error::AppError::BadRequest(format!("Invalid car status: {}", value))
            })?,
            None => CarStatus::Available,
        };

        Ok(Self {
            name: dto.name,
            brand: dto.brand,
            category_id: dto.category_id,
            quantity: dto.quantity.unwrap_or(1),
            cleaning_time: dto.cleaning_time.unwrap_or(1),
            transmission,
            seats: dto.seats.unwrap_or(5),
            doors: dto.doors.unwrap_or(4),
            fuel_type: dto.fuel_type.unwrap_or_else(|| "Petrol".to_string()),
            daily_rate: dto.daily_rate,
            twelve_hour_rate: dto.twelve_hour_rate,
            status,
            image: dto.image,
            is_featured: dto.is_featured.unwrap_or(false),
            features: dto.features.unwrap_or_default(),
        })
    }
}

/// Parameters for updating an existing car (admin).
///
/// The slug is never rewritten so existing links stay valid.
#[derive(Debug, Clone)]
pub struct UpdateCarParams {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub category_id: i32,
    pub quantity: i32,
    pub cleaning_time: i32,
    pub transmission: Transmission,
    pub seats: i32,
    pub doors: i32,
    pub fuel_type: String,
    pub daily_rate: Decimal,
    pub twelve_hour_rate: Decimal,
    pub status: CarStatus,
    pub image: Option<String>,
    pub is_featured: bool,
    pub features: String,
}

impl UpdateCarParams {
    pub fn from_dto(id: i32, dto: UpdateCarDto) -> Result<Self, crate::error::AppError> {
        let transmission = Transmission::from_str(&dto.transmission).ok_or_else(|| {
            crate::error::AppError::BadRequest(format!(
                "Invalid transmission: {}",
                dto.transmission
            ))
        })?;
        let status = CarStatus::from_str(&dto.status).ok_or_else(|| {
            crate::error::AppError::BadRequest(format!("Invalid car status: {}", dto.status))
        })?;

        Ok(Self {
            id,
            name: dto.name,
            brand: dto.brand,
            category_id: dto.category_id,
            quantity: dto.quantity,
            cleaning_time: dto.cleaning_time,
            transmission,
            seats: dto.seats,
            doors: dto.doors,
            fuel_type: dto.fuel_type,
            daily_rate: dto.daily_rate,
            twelve_hour_rate: dto.twelve_hour_rate,
            status,
            image: dto.image,
            is_featured: dto.is_featured,
            features: dto.features,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_transmission_round_trip() {
        assert_eq!(Transmission::from_str("AUTO"), Some(Transmission::Auto));
        assert_eq!(Transmission::from_str("MANUAL"), Some(Transmission::Manual));
        assert_eq!(Transmission::from_str("CVT"), None);
        assert_eq!(Transmission::Auto.as_str(), "AUTO");
    }

    #[test]
    fn parses_car_status_round_trip() {
        assert_eq!(CarStatus::from_str("AVAILABLE"), Some(CarStatus::Available));
        assert_eq!(CarStatus::from_str("RENTED"), Some(CarStatus::Rented));
        assert_eq!(
            CarStatus::from_str("MAINTENANCE"),
            Some(CarStatus::Maintenance)
        );
        assert_eq!(CarStatus::from_str("available"), None);
    }
}
