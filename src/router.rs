//! Axum route configuration and OpenAPI documentation.

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, dto, state::AppState};

#[derive(OpenApi)]
#[openapi(
    paths(
        controller::auth::register,
        controller::auth::login,
        controller::auth::logout,
        controller::auth::get_user,
        controller::category::get_categories,
        controller::category::get_category_by_id,
        controller::car::list_cars,
        controller::car::get_car_by_slug,
        controller::car::search_autosuggest,
        controller::booking::list_bookings,
        controller::booking::get_booking,
        controller::booking::create_booking,
        controller::booking::cancel_booking,
        controller::booking::active_bookings,
        controller::booking::booking_history,
        controller::dashboard::dashboard,
        controller::dashboard::history,
        controller::notification::list_notifications,
        controller::notification::unread_count,
        controller::notification::mark_read,
        controller::notification::mark_single_read,
        controller::admin::create_category,
        controller::admin::update_category,
        controller::admin::delete_category,
        controller::admin::create_car,
        controller::admin::update_car,
        controller::admin::delete_car,
        controller::admin::list_bookings,
        controller::admin::update_booking_status,
    ),
    components(schemas(
        dto::api::ErrorDto,
        dto::api::MessageDto,
        dto::auth::RegisterDto,
        dto::auth::LoginDto,
        dto::auth::UserDto,
        dto::auth::RegisterResponseDto,
        dto::auth::LoginResponseDto,
        dto::category::CategoryDto,
        dto::category::CreateCategoryDto,
        dto::category::UpdateCategoryDto,
        dto::car::CarDto,
        dto::car::CarListItemDto,
        dto::car::CarSuggestionDto,
        dto::car::PaginatedCarsDto,
        dto::car::CreateCarDto,
        dto::car::UpdateCarDto,
        dto::booking::BookingDto,
        dto::booking::BookingCarDto,
        dto::booking::CreateBookingDto,
        dto::booking::CancelBookingResponseDto,
        dto::booking::UpdateBookingStatusDto,
        dto::booking::PaginatedBookingsDto,
        dto::notification::NotificationDto,
        dto::notification::MarkReadDto,
        dto::notification::MarkReadResponseDto,
        dto::notification::MarkSingleReadResponseDto,
        dto::notification::UnreadCountDto,
        dto::dashboard::DashboardDto,
        dto::dashboard::BookingHistoryDto,
    )),
    tags(
        (name = "auth", description = "Registration, login, and session management"),
        (name = "category", description = "Car category browsing"),
        (name = "car", description = "Fleet search and availability"),
        (name = "booking", description = "Reservation creation and lifecycle"),
        (name = "dashboard", description = "User dashboard and history"),
        (name = "notification", description = "User notifications"),
        (name = "admin", description = "Fleet and booking administration"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    // Credential endpoints get a tighter rate limit than the rest of the API
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
            .expect("valid rate limiter configuration"),
    );

    let auth_routes = Router::new()
        .route("/api/auth/register", post(controller::auth::register))
        .route("/api/auth/login", post(controller::auth::login))
        .layer(GovernorLayer::new(governor_conf));

    Router::new()
        .route("/api/auth/logout", post(controller::auth::logout))
        .route("/api/auth/user", get(controller::auth::get_user))
        .route("/api/categories", get(controller::category::get_categories))
        .route(
            "/api/categories/{id}",
            get(controller::category::get_category_by_id),
        )
        .route("/api/cars", get(controller::car::list_cars))
        .route("/api/cars/search", get(controller::car::search_autosuggest))
        .route("/api/cars/{slug}", get(controller::car::get_car_by_slug))
        .route("/api/bookings", get(controller::booking::list_bookings))
        .route(
            "/api/bookings/create",
            post(controller::booking::create_booking),
        )
        .route(
            "/api/bookings/active",
            get(controller::booking::active_bookings),
        )
        .route(
            "/api/bookings/history",
            get(controller::booking::booking_history),
        )
        .route("/api/bookings/{id}", get(controller::booking::get_booking))
        .route(
            "/api/bookings/{id}/cancel",
            post(controller::booking::cancel_booking),
        )
        .route("/api/dashboard", get(controller::dashboard::dashboard))
        .route("/api/history", get(controller::dashboard::history))
        .route(
            "/api/notifications",
            get(controller::notification::list_notifications),
        )
        .route(
            "/api/notifications/unread-count",
            get(controller::notification::unread_count),
        )
        .route(
            "/api/notifications/mark-read",
            post(controller::notification::mark_read),
        )
        .route(
            "/api/notifications/{id}/read",
            post(controller::notification::mark_single_read),
        )
        .route(
            "/api/admin/categories",
            post(controller::admin::create_category),
        )
        .route(
            "/api/admin/categories/{id}",
            put(controller::admin::update_category).delete(controller::admin::delete_category),
        )
        .route("/api/admin/cars", post(controller::admin::create_car))
        .route(
            "/api/admin/cars/{id}",
            put(controller::admin::update_car).delete(controller::admin::delete_car),
        )
        .route(
            "/api/admin/bookings",
            get(controller::admin::list_bookings),
        )
        .route(
            "/api/admin/bookings/{id}/status",
            put(controller::admin::update_booking_status),
        )
        .merge(auth_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
