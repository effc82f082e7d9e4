//! Booking domain models, status machine, and time-window resolution.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    dto::booking::{BookingCarDto, BookingDto, PaginatedBookingsDto},
    error::{booking::BookingError, internal::InternalError},
    model::car::Car,
};

/// Lifecycle states of a booking.
///
/// `Pending`, `Approved`, and `Maintenance` consume a vehicle slot and take
/// part in availability checks. `Cancelled` and `Completed` are history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Approved,
    Maintenance,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Statuses that consume a car slot.
    pub const BLOCKING: [BookingStatus; 3] = [Self::Pending, Self::Approved, Self::Maintenance];

    /// Statuses shown on the user's active dashboard.
    pub const ACTIVE: [BookingStatus; 2] = [Self::Pending, Self::Approved];

    /// Statuses archived into booking history.
    pub const HISTORY: [BookingStatus; 2] = [Self::Completed, Self::Cancelled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Maintenance => "MAINTENANCE",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Human-readable label, as shown next to the raw status in responses.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Maintenance => "Maintenance",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(Self::Pending),
            "APPROVED" => Some(Self::Approved),
            "MAINTENANCE" => Some(Self::Maintenance),
            "CANCELLED" => Some(Self::Cancelled),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn is_blocking(&self) -> bool {
        Self::BLOCKING.contains(self)
    }
}

/// A reservation of one vehicle slot of a car for a time interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub car_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Derived once at creation from duration and the car's rate tiers.
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, InternalError> {
        let status = BookingStatus::from_str(&entity.status).ok_or_else(|| {
            InternalError::UnknownEnumValue {
                column: "booking.status",
                value: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            car_id: entity.car_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            total_price: entity.total_price,
            status,
            created_at: entity.created_at,
        })
    }
}

/// Booking joined with its car and the owning user's name for API responses.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithCar {
    pub booking: Booking,
    pub car: Car,
    pub username: String,
}

impl BookingWithCar {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.booking.id,
            user: self.username,
            car: BookingCarDto {
                id: self.car.id,
                name: self.car.name,
                brand: self.car.brand,
                slug: self.car.slug,
                daily_rate: self.car.daily_rate,
                twelve_hour_rate: self.car.twelve_hour_rate,
                transmission: self.car.transmission.as_str().to_string(),
                fuel_type: self.car.fuel_type,
                seats: self.car.seats,
                image: self.car.image,
            },
            start_time: self.booking.start_time,
            end_time: self.booking.end_time,
            total_price: self.booking.total_price,
            status: self.booking.status.as_str().to_string(),
            status_display: self.booking.status.display_name().to_string(),
            created_at: self.booking.created_at,
        }
    }
}

/// Requested rental window before resolution into concrete timestamps.
///
/// Hourly bookings carry explicit timestamps; daily bookings carry dates and
/// get their times filled in during resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingWindow {
    Hourly {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    Daily {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}

impl BookingWindow {
    /// Minimum duration for hourly bookings.
    const MIN_HOURLY_HOURS: i64 = 12;

    /// Default pick-up time for daily bookings that don't start today.
    const DAILY_PICKUP_HOUR: u32 = 9;

    /// Resolves the window into concrete start and end timestamps.
    ///
    /// Hourly windows are validated for ordering, minimum duration, and not
    /// starting in the past. Daily windows starting today begin at `now` (so
    /// they can never be in the past); other daily windows begin at the
    /// default pick-up time and end at the same time of day on the end date.
    ///
    /// # Arguments
    /// - `now` - The current time, captured once by the caller so the
    ///   resolved start and the past-check agree on "now"
    ///
    /// # Returns
    /// - `Ok((start, end))` - Resolved rental interval
    /// - `Err(BookingError)` - Validation failure with a client-facing message
    pub fn resolve(&self, now: DateTime<Utc>) -> Result<(DateTime<Utc>, DateTime<Utc>), BookingError> {
        match self {
            Self::Hourly { start, end } => {
                if start >= end {
                    return Err(BookingError::InvalidTimeRange);
                }
                if (*end - *start).num_hours() < Self::MIN_HOURLY_HOURS {
                    return Err(BookingError::MinimumHourlyDuration);
                }
                if *start < now {
                    return Err(BookingError::StartInPast);
                }
                Ok((*start, *end))
            }
            Self::Daily {
                start_date,
                end_date,
            } => {
                if end_date <= start_date {
                    return Err(BookingError::InvalidDateRange);
                }

                let start = if *start_date == now.date_naive() {
                    now
                } else {
                    let pickup = start_date
                        .and_hms_opt(Self::DAILY_PICKUP_HOUR, 0, 0)
                        .expect("valid pick-up time")
                        .and_utc();
                    if pickup < now {
                        return Err(BookingError::StartInPast);
                    }
                    pickup
                };
                let end = end_date.and_time(start.time()).and_utc();

                Ok((start, end))
            }
        }
    }
}

/// Parameters for creating a booking through the flexible creation endpoint.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub user_id: i32,
    pub car_slug: String,
    pub window: BookingWindow,
}

/// Admin booking list filter mirroring the active/history split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingView {
    Active,
    History,
}

impl BookingView {
    pub fn statuses(&self) -> &'static [BookingStatus] {
        match self {
            Self::Active => &BookingStatus::BLOCKING,
            Self::History => &BookingStatus::HISTORY,
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "history" => Some(Self::History),
            _ => None,
        }
    }
}

/// Paginated collection of bookings with metadata (admin listing).
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedBookings {
    pub bookings: Vec<BookingWithCar>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedBookings {
    pub fn into_dto(self) -> PaginatedBookingsDto {
        PaginatedBookingsDto {
            bookings: self.bookings.into_iter().map(|b| b.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
