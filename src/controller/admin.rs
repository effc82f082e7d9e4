//! Admin endpoints for fleet and booking management.
//!
//! These replace the out-of-band admin panel: category and car CRUD, the
//! all-bookings listing with its active/history views, and booking status
//! transitions (which drive user notifications).

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
        booking::{BookingDto, PaginatedBookingsDto, UpdateBookingStatusDto},
        car::{CarDto, CreateCarDto, UpdateCarDto},
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    error::{booking::BookingError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::{
        booking::{BookingStatus, BookingView},
        car::{CreateCarParams, UpdateCarParams},
        category::{CreateCategoryParams, UpdateCategoryParams},
    },
    service::{booking::BookingService, car::CarService, category::CategoryService},
    state::AppState,
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize)]
pub struct AdminBookingsQuery {
    pub view: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Create a new category.
///
/// # Access Control
/// - `Admin` - Only admins can manage categories
#[utoipa::path(
    post,
    path = "/api/admin/categories",
    tag = ADMIN_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CategoryService::new(&state.db);

    let category = service
        .create(CreateCategoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

/// Update a category.
///
/// # Access Control
/// - `Admin` - Only admins can manage categories
#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CategoryService::new(&state.db);

    let category = service
        .update(UpdateCategoryParams::from_dto(id, payload))
        .await?;

    match category {
        Some(category) => Ok((StatusCode::OK, Json(category.into_dto()))),
        None => Err(AppError::NotFound("Category not found".to_string())),
    }
}

/// Delete a category, cascading to its cars.
///
/// # Access Control
/// - `Admin` - Only admins can manage categories
#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CategoryService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Create a new car.
///
/// The unique slug is derived from brand, name, and the assigned id.
///
/// # Access Control
/// - `Admin` - Only admins can manage the fleet
#[utoipa::path(
    post,
    path = "/api/admin/cars",
    tag = ADMIN_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 201, description = "Car created", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CarService::new(&state.db);

    let params = CreateCarParams::from_dto(payload)?;
    let car = service.create(params).await?;

    // Re-read through the detail path so the response carries live status
    let details = service
        .get_by_slug(&car.slug)
        .await?
        .ok_or_else(|| AppError::InternalError("Car vanished after creation".to_string()))?;

    Ok((StatusCode::CREATED, Json(details.into_dto())))
}

/// Update a car. The slug is never rewritten.
///
/// # Access Control
/// - `Admin` - Only admins can manage the fleet
#[utoipa::path(
    put,
    path = "/api/admin/cars/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    request_body = UpdateCarDto,
    responses(
        (status = 200, description = "Car updated", body = CarDto),
        (status = 400, description = "Invalid car data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_car(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCarDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CarService::new(&state.db);

    let params = UpdateCarParams::from_dto(id, payload)?;
    let car = service.update(params).await?;

    let Some(car) = car else {
        return Err(AppError::NotFound("Car not found".to_string()));
    };

    let details = service
        .get_by_slug(&car.slug)
        .await?
        .ok_or_else(|| AppError::InternalError("Car vanished after update".to_string()))?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Delete a car, cascading to its bookings.
///
/// # Access Control
/// - `Admin` - Only admins can manage the fleet
#[utoipa::path(
    delete,
    path = "/api/admin/cars/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Car ID")
    ),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_car(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CarService::new(&state.db);

    let deleted = service.delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// List all bookings, paginated.
///
/// The optional `view` parameter restricts to `active` (pending, approved,
/// maintenance) or `history` (completed, cancelled) bookings.
///
/// # Access Control
/// - `Admin` - Only admins can list all bookings
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = ADMIN_TAG,
    params(
        ("view" = Option<String>, Query, description = "Optional view filter: active or history"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "All bookings", body = PaginatedBookingsDto),
        (status = 400, description = "Unknown view", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AdminBookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let view = match query.view {
        Some(ref value) => Some(BookingView::from_str(value).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unknown view '{}', expected 'active' or 'history'.",
                value
            ))
        })?),
        None => None,
    };

    let service = BookingService::new(&state.db);

    let bookings = service.admin_list(view, query.page, query.entries).await?;

    Ok((StatusCode::OK, Json(bookings.into_dto())))
}

/// Set a booking's status.
///
/// Transitions into APPROVED, CANCELLED, or COMPLETED notify the booking's
/// owner. Setting the current status again is a no-op.
///
/// # Access Control
/// - `Admin` - Only admins can change booking statuses
#[utoipa::path(
    put,
    path = "/api/admin/bookings/{id}/status",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Status updated", body = BookingDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let status = BookingStatus::from_str(&payload.status)
        .ok_or_else(|| BookingError::InvalidStatus(payload.status.clone()))?;

    let service = BookingService::new(&state.db);

    let booking = service.update_status(id, status).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
