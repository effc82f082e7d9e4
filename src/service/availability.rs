//! Car availability: overlap detection with a cleaning buffer and the
//! capacity-aware count-and-compare check.
//!
//! This is the single source of truth for whether a car can be booked for a
//! time range. The booking-creation path runs `is_car_available` inside a
//! transaction with the overlapping rows locked, so concurrent requests
//! cannot both pass the capacity check; the search path reuses the same
//! overlap predicate without locks.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect};

use crate::{
    error::{booking::BookingError, AppError},
    model::booking::BookingStatus,
};

/// Buffer applied around the requested window in search results, where the
/// per-car cleaning time is not consulted.
pub const SEARCH_BUFFER_HOURS: i64 = 1;

/// Widens a rental window by the buffer on both sides.
///
/// A booking conflicts with the window if it overlaps the widened interval,
/// which leaves the buffer free for cleaning before and after the rental.
pub fn buffered_window(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    buffer_hours: i64,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let buffer = Duration::hours(buffer_hours);
    (start_time - buffer, end_time + buffer)
}

/// Interval overlap predicate: a booking blocks the window when it starts
/// before the window ends and ends after the window starts.
pub fn overlaps(
    booking_start: DateTime<Utc>,
    booking_end: DateTime<Utc>,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> bool {
    booking_start < window_end && booking_end > window_start
}

/// Checks whether a car has a free vehicle slot for the requested window.
///
/// Widens the window by the car's cleaning time, locks the overlapping
/// blocking booking rows, and compares their count against the car's
/// quantity. Must be called inside the booking-creation transaction so the
/// locks hold until the new booking is inserted.
///
/// # Arguments
/// - `conn` - Transaction (or plain connection for read-only callers)
/// - `car` - The car row, itself already locked by the caller
/// - `start_time`/`end_time` - Requested rental interval
///
/// # Returns
/// - `Ok(true)` - A vehicle slot is free for the window
/// - `Ok(false)` - All vehicle slots are taken
/// - `Err(AppError)` - Invalid interval or database error
pub async fn is_car_available<C: ConnectionTrait>(
    conn: &C,
    car: &entity::car::Model,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<bool, AppError> {
    if start_time >= end_time {
        return Err(BookingError::InvalidTimeRange.into());
    }

    let (buffered_start, buffered_end) =
        buffered_window(start_time, end_time, car.cleaning_time.max(0) as i64);

    let blocking: Vec<&str> = BookingStatus::BLOCKING.iter().map(|s| s.as_str()).collect();

    // Lock the overlapping rows so capacity can't change while we count
    let active = entity::prelude::Booking::find()
        .filter(entity::booking::Column::CarId.eq(car.id))
        .filter(entity::booking::Column::Status.is_in(blocking))
        .filter(entity::booking::Column::StartTime.lt(buffered_end))
        .filter(entity::booking::Column::EndTime.gt(buffered_start))
        .lock_exclusive()
        .all(conn)
        .await?;

    Ok((active.len() as i64) < car.quantity as i64)
}
