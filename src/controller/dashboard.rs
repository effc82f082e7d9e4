use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        dashboard::{BookingHistoryDto, DashboardDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    service::booking::BookingService,
    state::AppState,
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get the current user's dashboard.
///
/// Returns the user's active bookings (pending or approved, soonest first)
/// together with the number of archived bookings.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard data", body = DashboardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let (active, history_count) = service.dashboard(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(DashboardDto {
            active_bookings: active.into_iter().map(|b| b.into_dto()).collect(),
            history_count,
        }),
    ))
}

/// Get the current user's booking history.
#[utoipa::path(
    get,
    path = "/api/history",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Booking history", body = BookingHistoryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn history(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let bookings = service.history_for_user(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(BookingHistoryDto {
            bookings: bookings.into_iter().map(|b| b.into_dto()).collect(),
        }),
    ))
}
