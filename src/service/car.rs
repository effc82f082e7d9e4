//! Fleet service: unified search + availability engine, live status
//! computation, and admin fleet management.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    data::{booking::BookingRepository, car::CarRepository, category::CategoryRepository},
    error::AppError,
    model::car::{
        Car, CarAvailability, CarDetails, CarListing, CarSearchParams, CarStatus, CarSuggestion,
        CreateCarParams, PaginatedCars, StatusColor, UpdateCarParams,
    },
    model::category::Category,
    service::availability::{buffered_window, SEARCH_BUFFER_HOURS},
};

/// Maximum number of autosuggest entries returned.
const SUGGESTION_LIMIT: usize = 5;

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Unified search + availability engine behind the car listing endpoint.
    ///
    /// Applies the cheap filters in the database (text, category,
    /// transmission, price bounds), ranks text matches by relevance, removes
    /// cars without a free slot for the requested window, and paginates the
    /// remainder with live status attached.
    pub async fn search(&self, params: CarSearchParams) -> Result<PaginatedCars, AppError> {
        let query = params
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());
        let category = normalize_all_filter(params.category.as_deref());
        let transmission = normalize_all_filter(params.transmission.as_deref());

        let repo = CarRepository::new(self.db);
        let mut cars = repo
            .find_filtered(
                query,
                category,
                transmission,
                params.min_price,
                params.max_price,
            )
            .await?;

        // Cheap text ranking first, expensive availability filter after
        if let Some(query) = query {
            rank_by_relevance(&mut cars, query);
        }

        if let (Some(start_time), Some(end_time)) = (params.start_time, params.end_time) {
            cars = self
                .exclude_unavailable(cars, start_time, end_time)
                .await?;
        }

        let per_page = if params.per_page == 0 { 10 } else { params.per_page };
        let total = cars.len() as u64;
        let total_pages = total.div_ceil(per_page);

        let page_items = cars
            .into_iter()
            .skip((params.page * per_page) as usize)
            .take(per_page as usize);

        let now = Utc::now();
        let mut listings = Vec::new();
        for (car, category) in page_items {
            let availability = self.live_availability(&car, false, now).await?;
            let category_name = category.map(|c| c.name).unwrap_or_default();
            listings.push(CarListing {
                car: Car::from_entity(car)?,
                category_name,
                availability,
            });
        }

        Ok(PaginatedCars {
            cars: listings,
            total,
            page: params.page,
            per_page,
            total_pages,
        })
    }

    /// Gets a car by slug with its category and live availability, including
    /// the next date a vehicle frees up when fully booked.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<CarDetails>, AppError> {
        let repo = CarRepository::new(self.db);

        let Some((car, category)) = repo.get_by_slug_with_category(slug).await? else {
            return Ok(None);
        };

        let category = category.ok_or_else(|| {
            AppError::InternalError(format!("Car {} has no category", car.id))
        })?;

        let availability = self.live_availability(&car, true, Utc::now()).await?;

        Ok(Some(CarDetails {
            car: Car::from_entity(car)?,
            category: Category::from_entity(category),
            availability,
        }))
    }

    /// Autosuggest for the search box: top matches for a term, availability
    /// filtered when a valid date range is supplied.
    ///
    /// An inverted date range degrades to a pure text search instead of
    /// erroring, since suggestions are fired on every keystroke.
    pub async fn suggestions(
        &self,
        term: &str,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
    ) -> Result<Vec<CarSuggestion>, AppError> {
        let (start_time, end_time) = match (start_time, end_time) {
            (Some(start), Some(end)) if start >= end => (None, None),
            other => other,
        };

        let term = term.trim();
        let query = (!term.is_empty()).then_some(term);

        let repo = CarRepository::new(self.db);
        let mut cars = repo.find_filtered(query, None, None, None, None).await?;

        if let Some(query) = query {
            rank_by_relevance(&mut cars, query);
        }

        if let (Some(start_time), Some(end_time)) = (start_time, end_time) {
            cars = self
                .exclude_unavailable(cars, start_time, end_time)
                .await?;
        }

        Ok(cars
            .into_iter()
            .take(SUGGESTION_LIMIT)
            .map(|(car, _)| CarSuggestion {
                id: car.id,
                label: format!("{} {}", car.brand, car.name),
                url: format!("/cars/{}", car.slug),
                image: car.image,
                price: car.daily_rate,
            })
            .collect())
    }

    /// Creates a new car (admin)
    pub async fn create(&self, params: CreateCarParams) -> Result<Car, AppError> {
        let category_repo = CategoryRepository::new(self.db);
        if !category_repo.exists(params.category_id).await? {
            return Err(AppError::BadRequest("Category does not exist.".to_string()));
        }

        let repo = CarRepository::new(self.db);
        let car = repo.create(params).await?;

        Ok(Car::from_entity(car)?)
    }

    /// Updates a car (admin)
    /// Returns None if the car doesn't exist
    pub async fn update(&self, params: UpdateCarParams) -> Result<Option<Car>, AppError> {
        let repo = CarRepository::new(self.db);
        if repo.get_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        let category_repo = CategoryRepository::new(self.db);
        if !category_repo.exists(params.category_id).await? {
            return Err(AppError::BadRequest("Category does not exist.".to_string()));
        }

        let car = repo.update(params).await?;

        Ok(Some(Car::from_entity(car)?))
    }

    /// Deletes a car (admin), cascading to its bookings
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CarRepository::new(self.db);
        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }

    /// Removes cars that have no free vehicle slot for the requested window.
    ///
    /// Uses the fixed search buffer rather than per-car cleaning time, and a
    /// single batched booking query so the listing stays one round trip.
    async fn exclude_unavailable(
        &self,
        cars: Vec<(entity::car::Model, Option<entity::category::Model>)>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Vec<(entity::car::Model, Option<entity::category::Model>)>, AppError> {
        let (window_start, window_end) = buffered_window(start_time, end_time, SEARCH_BUFFER_HOURS);

        let car_ids: Vec<i32> = cars.iter().map(|(car, _)| car.id).collect();
        let booking_repo = BookingRepository::new(self.db);
        let overlapping = booking_repo
            .find_overlapping_blocking_for_cars(&car_ids, window_start, window_end)
            .await?;

        let mut counts: HashMap<i32, i64> = HashMap::new();
        for booking in overlapping {
            *counts.entry(booking.car_id).or_insert(0) += 1;
        }

        Ok(cars
            .into_iter()
            .filter(|(car, _)| counts.get(&car.id).copied().unwrap_or(0) < car.quantity as i64)
            .collect())
    }

    /// Computes the live status shown on listings and detail pages.
    ///
    /// Admin overrides win; otherwise pending/approved bookings covering this
    /// instant are counted against the quantity. The next-available date is
    /// only looked up when requested and the car is sold out.
    async fn live_availability(
        &self,
        car: &entity::car::Model,
        with_next_date: bool,
        now: DateTime<Utc>,
    ) -> Result<CarAvailability, AppError> {
        let status = CarStatus::from_str(&car.status).ok_or_else(|| {
            crate::error::internal::InternalError::UnknownEnumValue {
                column: "car.status",
                value: car.status.clone(),
            }
        })?;

        match status {
            CarStatus::Maintenance => Ok(CarAvailability {
                is_available: false,
                live_status: "Under Maintenance".to_string(),
                status_color: StatusColor::Danger,
                next_available_date: None,
            }),
            CarStatus::Rented => Ok(CarAvailability {
                is_available: false,
                live_status: "Sold Out".to_string(),
                status_color: StatusColor::Secondary,
                next_available_date: None,
            }),
            CarStatus::Available => {
                let booking_repo = BookingRepository::new(self.db);
                let active_count = booking_repo.count_active_at(car.id, now).await?;

                if active_count >= car.quantity.max(0) as u64 {
                    let next_available_date = if with_next_date {
                        booking_repo
                            .next_end_after(car.id, now)
                            .await?
                            .map(|end| end.date_naive())
                    } else {
                        None
                    };

                    Ok(CarAvailability {
                        is_available: false,
                        live_status: "Sold Out".to_string(),
                        status_color: StatusColor::Secondary,
                        next_available_date,
                    })
                } else if active_count > 0 {
                    let remaining = car.quantity as u64 - active_count;
                    Ok(CarAvailability {
                        is_available: true,
                        live_status: format!("{} Left", remaining),
                        status_color: StatusColor::Warning,
                        next_available_date: None,
                    })
                } else {
                    Ok(CarAvailability {
                        is_available: true,
                        live_status: "Available".to_string(),
                        status_color: StatusColor::Success,
                        next_available_date: None,
                    })
                }
            }
        }
    }
}

/// Treats missing, empty, and the literal "All" as no filter.
fn normalize_all_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != "All")
}

/// Sorts cars by text-match relevance: brand prefix first, then name prefix,
/// then remaining substring matches, ties broken alphabetically.
fn rank_by_relevance(
    cars: &mut [(entity::car::Model, Option<entity::category::Model>)],
    query: &str,
) {
    let query = query.to_lowercase();

    cars.sort_by(|(a, _), (b, _)| {
        let priority_a = match_priority(a, &query);
        let priority_b = match_priority(b, &query);

        priority_a
            .cmp(&priority_b)
            .then_with(|| a.brand.to_lowercase().cmp(&b.brand.to_lowercase()))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}

fn match_priority(car: &entity::car::Model, lowercase_query: &str) -> u8 {
    if car.brand.to_lowercase().starts_with(lowercase_query) {
        0
    } else if car.name.to_lowercase().starts_with(lowercase_query) {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: i32, brand: &str, name: &str) -> (entity::car::Model, Option<entity::category::Model>) {
        (
            entity::car::Model {
                id,
                name: name.to_string(),
                brand: brand.to_string(),
                category_id: 1,
                slug: format!("{}-{}-{}", brand.to_lowercase(), name.to_lowercase(), id),
                quantity: 1,
                cleaning_time: 1,
                transmission: "AUTO".to_string(),
                seats: 5,
                doors: 4,
                fuel_type: "Petrol".to_string(),
                daily_rate: Default::default(),
                twelve_hour_rate: Default::default(),
                status: "AVAILABLE".to_string(),
                image: None,
                is_featured: false,
                features: String::new(),
                created_at: Utc::now(),
            },
            None,
        )
    }

    #[test]
    fn ranks_brand_prefix_above_name_prefix_above_substring() {
        let mut cars = vec![
            car(1, "Honda", "Tesla Edition"),
            car(2, "Tesla", "Model 3"),
            car(3, "Ford", "Contessa"),
        ];

        rank_by_relevance(&mut cars, "tes");

        let ids: Vec<i32> = cars.iter().map(|(c, _)| c.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn breaks_ties_alphabetically() {
        let mut cars = vec![
            car(1, "Toyota", "Corolla"),
            car(2, "Tesla", "Model 3"),
            car(3, "Toyota", "Camry"),
        ];

        rank_by_relevance(&mut cars, "t");

        let ids: Vec<i32> = cars.iter().map(|(c, _)| c.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn all_filter_is_dropped() {
        assert_eq!(normalize_all_filter(Some("All")), None);
        assert_eq!(normalize_all_filter(Some("")), None);
        assert_eq!(normalize_all_filter(Some("SUV")), Some("SUV"));
        assert_eq!(normalize_all_filter(None), None);
    }
}
