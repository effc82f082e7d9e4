use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::model::booking::{BookingStatus, BookingView};

/// Status strings that consume a car slot, as stored in the database.
fn blocking_status_strings() -> Vec<&'static str> {
    BookingStatus::BLOCKING.iter().map(|s| s.as_str()).collect()
}

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Gets a booking by id together with its car
    pub async fn get_by_id_with_car(
        &self,
        id: i32,
    ) -> Result<Option<(entity::booking::Model, entity::car::Model)>, DbErr> {
        let result = entity::prelude::Booking::find_by_id(id)
            .find_also_related(entity::prelude::Car)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(booking, car)| car.map(|car| (booking, car))))
    }

    /// Gets a user's bookings with their cars, newest first
    ///
    /// # Arguments
    /// - `user_id`: Owning user id
    /// - `status`: Optional status filter
    ///
    /// # Returns
    /// - `Ok(Vec<(booking, car)>)`: Bookings with related cars
    /// - `Err(DbErr)`: Database error
    pub async fn get_for_user(
        &self,
        user_id: i32,
        status: Option<BookingStatus>,
    ) -> Result<Vec<(entity::booking::Model, entity::car::Model)>, DbErr> {
        let mut select = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Car)
            .order_by_desc(entity::booking::Column::CreatedAt);

        if let Some(status) = status {
            select = select.filter(entity::booking::Column::Status.eq(status.as_str()));
        }

        let results = select.all(self.db).await?;

        Ok(results
            .into_iter()
            .filter_map(|(booking, car)| car.map(|car| (booking, car)))
            .collect())
    }

    /// Gets a user's bookings in the given statuses
    ///
    /// Active views are ordered by start time (soonest first), history views
    /// by creation time (newest first).
    pub async fn get_for_user_in_statuses(
        &self,
        user_id: i32,
        statuses: &[BookingStatus],
        upcoming_first: bool,
    ) -> Result<Vec<(entity::booking::Model, entity::car::Model)>, DbErr> {
        let status_strings: Vec<&str> = statuses.iter().map(|s| s.as_str()).collect();

        let mut select = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::Status.is_in(status_strings))
            .find_also_related(entity::prelude::Car);

        if upcoming_first {
            select = select.order_by_asc(entity::booking::Column::StartTime);
        } else {
            select = select.order_by_desc(entity::booking::Column::CreatedAt);
        }

        let results = select.all(self.db).await?;

        Ok(results
            .into_iter()
            .filter_map(|(booking, car)| car.map(|car| (booking, car)))
            .collect())
    }

    /// Counts a user's bookings in the given statuses
    pub async fn count_for_user_in_statuses(
        &self,
        user_id: i32,
        statuses: &[BookingStatus],
    ) -> Result<u64, DbErr> {
        let status_strings: Vec<&str> = statuses.iter().map(|s| s.as_str()).collect();

        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::Status.is_in(status_strings))
            .count(self.db)
            .await
    }

    /// Gets all bookings paginated, optionally restricted to the active or
    /// history view, with cars and owning usernames (admin listing).
    pub async fn get_all_paginated(
        &self,
        view: Option<BookingView>,
        page: u64,
        per_page: u64,
    ) -> Result<
        (
            Vec<(entity::booking::Model, entity::car::Model, String)>,
            u64,
        ),
        DbErr,
    > {
        let mut select = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Car)
            .order_by_desc(entity::booking::Column::CreatedAt);

        if let Some(view) = view {
            let status_strings: Vec<&str> = view.statuses().iter().map(|s| s.as_str()).collect();
            select = select.filter(entity::booking::Column::Status.is_in(status_strings));
        }

        let paginator = select.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let bookings = paginator.fetch_page(page).await?;

        // Fetch all owning users in one query
        let user_ids: Vec<i32> = bookings.iter().map(|(b, _)| b.user_id).collect();
        let users_map: HashMap<i32, String> = if user_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(user_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|u| (u.id, u.username))
                .collect()
        };

        let results = bookings
            .into_iter()
            .filter_map(|(booking, car)| {
                let car = car?;
                let username = users_map.get(&booking.user_id).cloned()?;
                Some((booking, car, username))
            })
            .collect();

        Ok((results, total))
    }

    /// Sets a booking's status and returns the updated row
    pub async fn set_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<entity::booking::Model, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Booking with id {} not found",
                id
            )))?;

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());

        active_model.update(self.db).await
    }

    /// Counts blocking bookings of a car overlapping the given window.
    ///
    /// Two intervals overlap when the existing booking starts before the
    /// window ends and ends after the window starts. Callers are expected to
    /// have widened the window by the relevant buffer already.
    pub async fn count_overlapping_blocking(
        &self,
        car_id: i32,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CarId.eq(car_id))
            .filter(entity::booking::Column::Status.is_in(blocking_status_strings()))
            .filter(entity::booking::Column::StartTime.lt(window_end))
            .filter(entity::booking::Column::EndTime.gt(window_start))
            .count(self.db)
            .await
    }

    /// Gets blocking bookings overlapping the window for a set of cars in one
    /// query, for batch availability filtering in search results.
    pub async fn find_overlapping_blocking_for_cars(
        &self,
        car_ids: &[i32],
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        if car_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CarId.is_in(car_ids.to_vec()))
            .filter(entity::booking::Column::Status.is_in(blocking_status_strings()))
            .filter(entity::booking::Column::StartTime.lt(window_end))
            .filter(entity::booking::Column::EndTime.gt(window_start))
            .all(self.db)
            .await
    }

    /// Counts pending/approved bookings of a car covering the given instant,
    /// used for the live status shown on listings.
    pub async fn count_active_at(
        &self,
        car_id: i32,
        instant: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let status_strings: Vec<&str> = BookingStatus::ACTIVE.iter().map(|s| s.as_str()).collect();

        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CarId.eq(car_id))
            .filter(entity::booking::Column::Status.is_in(status_strings))
            .filter(entity::booking::Column::StartTime.lte(instant))
            .filter(entity::booking::Column::EndTime.gte(instant))
            .count(self.db)
            .await
    }

    /// Gets the earliest end time of a pending/approved booking ending after
    /// the given instant, i.e. when the next vehicle frees up.
    pub async fn next_end_after(
        &self,
        car_id: i32,
        instant: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>, DbErr> {
        let status_strings: Vec<&str> = BookingStatus::ACTIVE.iter().map(|s| s.as_str()).collect();

        let booking = entity::prelude::Booking::find()
            .filter(entity::booking::Column::CarId.eq(car_id))
            .filter(entity::booking::Column::Status.is_in(status_strings))
            .filter(entity::booking::Column::EndTime.gt(instant))
            .order_by_asc(entity::booking::Column::EndTime)
            .one(self.db)
            .await?;

        Ok(booking.map(|b| b.end_time))
    }

    /// Gets approved bookings whose rental is underway at the given instant,
    /// with their cars, for the rental-started notification job.
    pub async fn get_approved_started(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<(entity::booking::Model, entity::car::Model)>, DbErr> {
        let results = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved.as_str()))
            .filter(entity::booking::Column::StartTime.lte(now))
            .filter(entity::booking::Column::EndTime.gt(now))
            .find_also_related(entity::prelude::Car)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .filter_map(|(booking, car)| car.map(|car| (booking, car)))
            .collect())
    }

    /// Gets approved bookings ending within the given lead time, with their
    /// cars, for the rental-ending notification job.
    pub async fn get_approved_ending_within(
        &self,
        now: DateTime<Utc>,
        lead: Duration,
    ) -> Result<Vec<(entity::booking::Model, entity::car::Model)>, DbErr> {
        let results = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved.as_str()))
            .filter(entity::booking::Column::EndTime.gt(now))
            .filter(entity::booking::Column::EndTime.lte(now + lead))
            .find_also_related(entity::prelude::Car)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .filter_map(|(booking, car)| car.map(|car| (booking, car)))
            .collect())
    }
}
