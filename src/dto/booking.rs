use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Car summary nested inside booking responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingCarDto {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub slug: String,
    pub daily_rate: Decimal,
    pub twelve_hour_rate: Decimal,
    pub transmission: String,
    pub fuel_type: String,
    pub seats: i32,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    /// Username of the account that made the booking.
    pub user: String,
    pub car: BookingCarDto,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_price: Decimal,
    pub status: String,
    pub status_display: String,
    pub created_at: DateTime<Utc>,
}

/// Flexible booking creation request.
///
/// `booking_type` selects which pair of fields is read: hourly bookings use
/// the timestamp pair, daily bookings use the date pair.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub car_slug: String,
    /// Either "hourly" or "daily".
    pub booking_type: String,
    pub hourly_start: Option<DateTime<Utc>>,
    pub hourly_end: Option<DateTime<Utc>>,
    pub daily_start: Option<NaiveDate>,
    pub daily_end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CancelBookingResponseDto {
    pub message: String,
    pub booking: BookingDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedBookingsDto {
    pub bookings: Vec<BookingDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
