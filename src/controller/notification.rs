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
        notification::{
            MarkReadDto, MarkReadResponseDto, MarkSingleReadResponseDto, NotificationDto,
            UnreadCountDto,
        },
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::notification::MarkReadParams,
    service::notification::NotificationService,
    state::AppState,
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

#[derive(Deserialize)]
pub struct ListNotificationsQuery {
    pub is_read: Option<String>,
}

/// List the current user's notifications, newest first.
///
/// Optionally filtered by read state via `is_read=true|false`.
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("is_read" = Option<String>, Query, description = "Filter by read state (true/false)")
    ),
    responses(
        (status = 200, description = "User's notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let is_read = query
        .is_read
        .as_deref()
        .map(|value| value.eq_ignore_ascii_case("true"));

    let service = NotificationService::new(&state.db);

    let notifications = service.get_for_user(user.id, is_read).await?;

    Ok((
        StatusCode::OK,
        Json(
            notifications
                .into_iter()
                .map(|n| n.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get the count of unread notifications for the current user.
#[utoipa::path(
    get,
    path = "/api/notifications/unread-count",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Unread count", body = UnreadCountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unread_count(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);

    let count = service.unread_count(user.id).await?;

    Ok((StatusCode::OK, Json(UnreadCountDto { count })))
}

/// Mark notifications as read in bulk.
///
/// Either `mark_all` or a non-empty `notification_ids` list must be supplied;
/// requests with neither are rejected.
#[utoipa::path(
    post,
    path = "/api/notifications/mark-read",
    tag = NOTIFICATION_TAG,
    request_body = MarkReadDto,
    responses(
        (status = 200, description = "Notifications marked as read", body = MarkReadResponseDto),
        (status = 400, description = "Nothing to mark as read", body = MarkReadResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MarkReadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if !payload.mark_all && payload.notification_ids.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(MarkReadResponseDto {
                message: "No notifications to mark as read.".to_string(),
                updated_count: 0,
            }),
        ));
    }

    let service = NotificationService::new(&state.db);

    let updated = service
        .mark_read(MarkReadParams {
            user_id: user.id,
            notification_ids: payload.notification_ids,
            mark_all: payload.mark_all,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MarkReadResponseDto {
            message: format!("{} notifications marked as read.", updated),
            updated_count: updated,
        }),
    ))
}

/// Mark a single notification as read.
#[utoipa::path(
    post,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = MarkSingleReadResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Notification belongs to another user", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_single_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = NotificationService::new(&state.db);

    let notification = service.mark_single_read(user.id, id).await?;

    Ok((
        StatusCode::OK,
        Json(MarkSingleReadResponseDto {
            message: "Notification marked as read.".to_string(),
            notification: notification.into_dto(),
        }),
    ))
}
