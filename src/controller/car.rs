use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    dto::{
        api::ErrorDto,
        car::{CarDto, CarSuggestionDto, PaginatedCarsDto},
    },
    error::{booking::BookingError, AppError},
    model::car::CarSearchParams,
    service::car::CarService,
    state::AppState,
    util::datetime::parse_flexible_date,
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

#[derive(Deserialize)]
pub struct CarSearchQuery {
    pub q: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub category: Option<String>,
    pub transmission: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

#[derive(Deserialize)]
pub struct SuggestQuery {
    pub term: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Search and list cars.
///
/// Unified search endpoint: free-text query over brand and name, sidebar
/// filters (category, transmission, daily-rate bounds), and an availability
/// filter when both `start` and `end` are given. Dates accept `YYYY-MM-DD`
/// (whole days) or timestamps. Results carry live status computed from the
/// booking table. Public endpoint.
///
/// # Returns
/// - `200 OK` - Paginated car listings
/// - `400 Bad Request` - `start >= end`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cars",
    tag = CAR_TAG,
    params(
        ("q" = Option<String>, Query, description = "Text search over brand and name"),
        ("start" = Option<String>, Query, description = "Rental start (YYYY-MM-DD or RFC 3339)"),
        ("end" = Option<String>, Query, description = "Rental end (YYYY-MM-DD or RFC 3339)"),
        ("category" = Option<String>, Query, description = "Category name (All = no filter)"),
        ("transmission" = Option<String>, Query, description = "AUTO or MANUAL (All = no filter)"),
        ("min_price" = Option<String>, Query, description = "Minimum daily rate"),
        ("max_price" = Option<String>, Query, description = "Maximum daily rate"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated car listings", body = PaginatedCarsDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<CarSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let start_time = query
        .start
        .as_deref()
        .and_then(|s| parse_flexible_date(s, false));
    let end_time = query.end.as_deref().and_then(|s| parse_flexible_date(s, true));

    if let (Some(start), Some(end)) = (start_time, end_time) {
        if start >= end {
            return Err(BookingError::InvalidTimeRange.into());
        }
    }

    let service = CarService::new(&state.db);

    let cars = service
        .search(CarSearchParams {
            query: query.q,
            start_time,
            end_time,
            category: query.category,
            transmission: query.transmission,
            min_price: query.min_price,
            max_price: query.max_price,
            page: query.page,
            per_page: query.entries,
        })
        .await?;

    Ok((StatusCode::OK, Json(cars.into_dto())))
}

/// Get a car by slug.
///
/// Returns the full car details with category, live status, and the next
/// available date when fully booked. Public endpoint.
#[utoipa::path(
    get,
    path = "/api/cars/{slug}",
    tag = CAR_TAG,
    params(
        ("slug" = String, Path, description = "Car slug")
    ),
    responses(
        (status = 200, description = "Car details", body = CarDto),
        (status = 404, description = "Car not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_car_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarService::new(&state.db);

    let car = service.get_by_slug(&slug).await?;

    match car {
        Some(car) => Ok((StatusCode::OK, Json(car.into_dto()))),
        None => Err(AppError::NotFound("Car not found".to_string())),
    }
}

/// Autosuggest for the search box.
///
/// Returns up to five matches for the term, availability-filtered when a
/// valid date range is supplied. An inverted date range is ignored rather
/// than rejected. Public endpoint.
#[utoipa::path(
    get,
    path = "/api/cars/search",
    tag = CAR_TAG,
    params(
        ("term" = Option<String>, Query, description = "Search term"),
        ("start" = Option<String>, Query, description = "Rental start"),
        ("end" = Option<String>, Query, description = "Rental end")
    ),
    responses(
        (status = 200, description = "Search suggestions", body = Vec<CarSuggestionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_autosuggest(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> Result<impl IntoResponse, AppError> {
    let start_time = query
        .start
        .as_deref()
        .and_then(|s| parse_flexible_date(s, false));
    let end_time = query.end.as_deref().and_then(|s| parse_flexible_date(s, true));

    let service = CarService::new(&state.db);

    let suggestions = service
        .suggestions(query.term.as_deref().unwrap_or(""), start_time, end_time)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            suggestions
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
