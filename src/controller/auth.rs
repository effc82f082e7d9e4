use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    dto::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, LoginResponseDto, RegisterDto, RegisterResponseDto, UserDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::user::RegisterUserParams,
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Session key under which the authenticated user's id is stored.
pub static SESSION_AUTH_USER_ID: &str = "auth:user_id";

/// Register a new user account.
///
/// Creates an account with the given username, email, and password. When a
/// valid admin bootstrap code is supplied the account is created with the
/// admin flag; the code is consumed on use.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Username taken, password too short, or missing fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = RegisterResponseDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .register(
            RegisterUserParams {
                username: payload.username,
                email: payload.email,
                password: payload.password,
                admin_code: payload.admin_code,
            },
            &state.admin_code_service,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseDto {
            message: format!("Account created for {}! You can now login.", user.username),
            username: user.username,
        }),
    ))
}

/// Log in with username and password.
///
/// Verifies the credentials and stores the user id in the session cookie.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `401 Unauthorized` - Invalid username or password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.login(&payload.username, &payload.password).await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            message: "Login successful.".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Log out the current user.
///
/// # Returns
/// - `200 OK` - Session cleared
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    session.flush().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logout successful.".to_string(),
        }),
    ))
}

/// Get the current authenticated user.
///
/// # Returns
/// - `200 OK` - Current user info
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(crate::model::user::User::from_entity(user).into_dto()),
    ))
}
