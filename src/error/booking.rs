use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

/// Booking domain errors covering validation, availability, and lifecycle rules.
///
/// Every variant maps to a 400 Bad Request with a client-facing message; the
/// messages double as the API contract for booking failures.
#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// Requested interval has `start_time >= end_time`.
    #[error("End time must be after start time.")]
    InvalidTimeRange,

    /// Daily booking has `end_date <= start_date`.
    #[error("End date must be after start date.")]
    InvalidDateRange,

    /// Requested interval starts in the past.
    #[error("Cannot book a car in the past.")]
    StartInPast,

    /// Hourly bookings must span at least twelve hours.
    #[error("Minimum booking duration is 12 hours for hourly bookings.")]
    MinimumHourlyDuration,

    /// Capacity check failed: every vehicle of this model is taken for the
    /// requested window (including the cleaning buffer).
    #[error("This car is not available for the selected time period.")]
    CarUnavailable,

    /// An approved booking whose rental has started can no longer be cancelled.
    #[error("Cannot cancel a trip that has already started.")]
    AlreadyStarted,

    /// Only pending or approved bookings can be cancelled.
    #[error("This booking cannot be cancelled.")]
    NotCancellable,

    /// Unrecognized status value supplied to a status update.
    #[error("Invalid booking status: {0}")]
    InvalidStatus(String),
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
