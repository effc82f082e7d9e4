use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists in the database.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks the permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response. The detail string is logged
    /// server-side only.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Username/password combination did not match any account.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Registration attempted with a username that is already taken.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the full error is logged at debug level
/// for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required.".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Permission denied.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password.".to_string(),
                }),
            )
                .into_response(),
            Self::UsernameTaken(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "A user with that username already exists.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
