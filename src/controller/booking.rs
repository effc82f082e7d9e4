use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        booking::{BookingDto, CancelBookingResponseDto, CreateBookingDto},
    },
    error::{booking::BookingError, AppError},
    middleware::auth::AuthGuard,
    model::booking::{BookingStatus, BookingWindow, CreateBookingParams},
    service::booking::BookingService,
    state::AppState,
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(Deserialize)]
pub struct ListBookingsQuery {
    pub status: Option<String>,
}

/// List the current user's bookings.
///
/// Returns the user's bookings newest first, optionally filtered by status.
///
/// # Access Control
/// - Authenticated users only; each user sees only their own bookings
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    params(
        ("status" = Option<String>, Query, description = "Status filter (PENDING, APPROVED, ...)")
    ),
    responses(
        (status = 200, description = "User's bookings", body = Vec<BookingDto>),
        (status = 400, description = "Invalid status filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListBookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = match query.status {
        Some(ref value) => Some(
            BookingStatus::from_str(value)
                .ok_or_else(|| BookingError::InvalidStatus(value.clone()))?,
        ),
        None => None,
    };

    let service = BookingService::new(&state.db);

    let bookings = service.get_for_user(user.id, status).await?;

    Ok((
        StatusCode::OK,
        Json(
            bookings
                .into_iter()
                .map(|b| b.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get one of the current user's bookings by id.
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking details", body = BookingDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let booking = service.get_by_id_for_user(user.id, id).await?;

    match booking {
        Some(booking) => Ok((StatusCode::OK, Json(booking.into_dto()))),
        None => Err(AppError::NotFound("Booking not found.".to_string())),
    }
}

/// Create a booking with flexible input (hourly or daily).
///
/// Hourly bookings take explicit timestamps and must span at least twelve
/// hours. Daily bookings take dates; a start date of today begins
/// immediately, other start dates begin at the default pick-up time. The car
/// is locked, the capacity check runs under row locks, and the total price is
/// derived from the car's rate tiers at creation.
///
/// # Access Control
/// - Authenticated users only
///
/// # Returns
/// - `201 Created` - Booking created as PENDING
/// - `400 Bad Request` - Validation failure or no free vehicle slot
/// - `404 Not Found` - Unknown car slug
#[utoipa::path(
    post,
    path = "/api/bookings/create",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Validation failure or car unavailable", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let window = match payload.booking_type.as_str() {
        "hourly" => {
            let (Some(start), Some(end)) = (payload.hourly_start, payload.hourly_end) else {
                return Err(AppError::BadRequest(
                    "Please provide both hourly_start and hourly_end for hourly bookings."
                        .to_string(),
                ));
            };
            BookingWindow::Hourly { start, end }
        }
        "daily" => {
            let (Some(start_date), Some(end_date)) = (payload.daily_start, payload.daily_end)
            else {
                return Err(AppError::BadRequest(
                    "Please provide both daily_start and daily_end for daily bookings."
                        .to_string(),
                ));
            };
            BookingWindow::Daily {
                start_date,
                end_date,
            }
        }
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown booking_type '{}', expected 'hourly' or 'daily'.",
                other
            )));
        }
    };

    let service = BookingService::new(&state.db);

    let booking = service
        .create(CreateBookingParams {
            user_id: user.id,
            car_slug: payload.car_slug,
            window,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Cancel a booking.
///
/// Only pending or approved bookings can be cancelled; an approved booking
/// whose rental has started cannot.
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = CancelBookingResponseDto),
        (status = 400, description = "Booking cannot be cancelled", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let booking = service.cancel(user.id, id).await?;

    Ok((
        StatusCode::OK,
        Json(CancelBookingResponseDto {
            message: "Booking cancelled successfully.".to_string(),
            booking: booking.into_dto(),
        }),
    ))
}

/// List the current user's active bookings (pending or approved), soonest first.
#[utoipa::path(
    get,
    path = "/api/bookings/active",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Active bookings", body = Vec<BookingDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn active_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let bookings = service.active_for_user(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            bookings
                .into_iter()
                .map(|b| b.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// List the current user's booking history (completed or cancelled), newest first.
#[utoipa::path(
    get,
    path = "/api/bookings/history",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Booking history", body = Vec<BookingDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn booking_history(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let bookings = service.history_for_user(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            bookings
                .into_iter()
                .map(|b| b.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
