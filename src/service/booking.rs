//! Booking lifecycle: transactional creation with the capacity check,
//! cancellation rules, dashboards, and admin status transitions.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QuerySelect, TransactionTrait,
};

use crate::{
    data::{booking::BookingRepository, user::UserRepository},
    error::{auth::AuthError, booking::BookingError, AppError},
    model::booking::{
        Booking, BookingStatus, BookingView, BookingWithCar, CreateBookingParams,
        PaginatedBookings,
    },
    model::car::Car,
    service::{availability, notification::NotificationService, pricing},
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking for the requested window.
    ///
    /// Window resolution and validation happen before touching the database.
    /// The critical section then runs in one transaction: the car row is
    /// locked, the capacity check counts overlapping blocking bookings under
    /// row locks, the price is quoted from the car's rate tiers, and the
    /// booking is inserted as PENDING. Concurrent requests for the last free
    /// slot serialize on the car row, so capacity can't be oversold.
    pub async fn create(&self, params: CreateBookingParams) -> Result<BookingWithCar, AppError> {
        let now = Utc::now();
        let (start_time, end_time) = params.window.resolve(now)?;

        let username = self.username(params.user_id).await?;

        let user_id = params.user_id;
        let car_slug = params.car_slug;

        let (booking, car) = self
            .db
            .transaction::<_, (entity::booking::Model, entity::car::Model), AppError>(
                move |txn| {
                    Box::pin(async move {
                        // Lock the car row for the duration of the capacity check
                        let car = entity::prelude::Car::find()
                            .filter(entity::car::Column::Slug.eq(car_slug.as_str()))
                            .lock_exclusive()
                            .one(txn)
                            .await?
                            .ok_or_else(|| AppError::NotFound("Car not found.".to_string()))?;

                        if !availability::is_car_available(txn, &car, start_time, end_time).await? {
                            return Err(BookingError::CarUnavailable.into());
                        }

                        let total_price = pricing::quote_total_price(
                            start_time,
                            end_time,
                            car.twelve_hour_rate,
                            car.daily_rate,
                        );

                        let booking = entity::booking::ActiveModel {
                            user_id: ActiveValue::Set(user_id),
                            car_id: ActiveValue::Set(car.id),
                            start_time: ActiveValue::Set(start_time),
                            end_time: ActiveValue::Set(end_time),
                            total_price: ActiveValue::Set(total_price),
                            status: ActiveValue::Set(
                                BookingStatus::Pending.as_str().to_string(),
                            ),
                            created_at: ActiveValue::Set(now),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await?;

                        Ok((booking, car))
                    })
                },
            )
            .await?;

        to_booking_with_car(booking, car, username)
    }

    /// Cancels a user's booking.
    ///
    /// Only pending or approved bookings can be cancelled, and an approved
    /// booking whose rental has started cannot. Emits a cancellation
    /// notification on success.
    pub async fn cancel(&self, user_id: i32, booking_id: i32) -> Result<BookingWithCar, AppError> {
        let repo = BookingRepository::new(self.db);

        let (booking, car) = repo
            .get_by_id_with_car(booking_id)
            .await?
            .filter(|(booking, _)| booking.user_id == user_id)
            .ok_or_else(|| AppError::NotFound("Booking not found.".to_string()))?;

        let status = parse_status(&booking.status)?;

        if status == BookingStatus::Approved && booking.start_time <= Utc::now() {
            return Err(BookingError::AlreadyStarted.into());
        }

        if !matches!(status, BookingStatus::Pending | BookingStatus::Approved) {
            return Err(BookingError::NotCancellable.into());
        }

        let updated = repo.set_status(booking_id, BookingStatus::Cancelled).await?;

        NotificationService::new(self.db)
            .booking_status_changed(&updated, &car, BookingStatus::Cancelled)
            .await?;

        let username = self.username(user_id).await?;
        to_booking_with_car(updated, car, username)
    }

    /// Gets a user's bookings, newest first, optionally filtered by status
    pub async fn get_for_user(
        &self,
        user_id: i32,
        status: Option<BookingStatus>,
    ) -> Result<Vec<BookingWithCar>, AppError> {
        let username = self.username(user_id).await?;
        let repo = BookingRepository::new(self.db);

        let bookings = repo.get_for_user(user_id, status).await?;

        bookings
            .into_iter()
            .map(|(booking, car)| to_booking_with_car(booking, car, username.clone()))
            .collect()
    }

    /// Gets one of the user's bookings by id
    pub async fn get_by_id_for_user(
        &self,
        user_id: i32,
        booking_id: i32,
    ) -> Result<Option<BookingWithCar>, AppError> {
        let repo = BookingRepository::new(self.db);

        let Some((booking, car)) = repo
            .get_by_id_with_car(booking_id)
            .await?
            .filter(|(booking, _)| booking.user_id == user_id)
        else {
            return Ok(None);
        };

        let username = self.username(user_id).await?;
        to_booking_with_car(booking, car, username).map(Some)
    }

    /// Gets the user's pending/approved bookings, soonest first
    pub async fn active_for_user(&self, user_id: i32) -> Result<Vec<BookingWithCar>, AppError> {
        let username = self.username(user_id).await?;
        let repo = BookingRepository::new(self.db);

        let bookings = repo
            .get_for_user_in_statuses(user_id, &BookingStatus::ACTIVE, true)
            .await?;

        bookings
            .into_iter()
            .map(|(booking, car)| to_booking_with_car(booking, car, username.clone()))
            .collect()
    }

    /// Gets the user's completed/cancelled bookings, newest first
    pub async fn history_for_user(&self, user_id: i32) -> Result<Vec<BookingWithCar>, AppError> {
        let username = self.username(user_id).await?;
        let repo = BookingRepository::new(self.db);

        let bookings = repo
            .get_for_user_in_statuses(user_id, &BookingStatus::HISTORY, false)
            .await?;

        bookings
            .into_iter()
            .map(|(booking, car)| to_booking_with_car(booking, car, username.clone()))
            .collect()
    }

    /// Dashboard payload: active bookings plus the history count
    pub async fn dashboard(
        &self,
        user_id: i32,
    ) -> Result<(Vec<BookingWithCar>, u64), AppError> {
        let active = self.active_for_user(user_id).await?;

        let repo = BookingRepository::new(self.db);
        let history_count = repo
            .count_for_user_in_statuses(user_id, &BookingStatus::HISTORY)
            .await?;

        Ok((active, history_count))
    }

    /// Gets all bookings paginated for the admin listing, optionally
    /// restricted to the active or history view
    pub async fn admin_list(
        &self,
        view: Option<BookingView>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBookings, AppError> {
        let repo = BookingRepository::new(self.db);

        let (bookings, total) = repo.get_all_paginated(view, page, per_page).await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        let bookings: Result<Vec<_>, _> = bookings
            .into_iter()
            .map(|(booking, car, username)| to_booking_with_car(booking, car, username))
            .collect();

        Ok(PaginatedBookings {
            bookings: bookings?,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Sets a booking's status (admin).
    ///
    /// Transitions into APPROVED, CANCELLED, or COMPLETED emit the matching
    /// notification. Setting the current status again is a no-op.
    pub async fn update_status(
        &self,
        booking_id: i32,
        new_status: BookingStatus,
    ) -> Result<BookingWithCar, AppError> {
        let repo = BookingRepository::new(self.db);

        let (booking, car) = repo
            .get_by_id_with_car(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found.".to_string()))?;

        let current = parse_status(&booking.status)?;
        let username = self.username(booking.user_id).await?;

        if current == new_status {
            return to_booking_with_car(booking, car, username);
        }

        let updated = repo.set_status(booking_id, new_status).await?;

        if matches!(
            new_status,
            BookingStatus::Approved | BookingStatus::Cancelled | BookingStatus::Completed
        ) {
            NotificationService::new(self.db)
                .booking_status_changed(&updated, &car, new_status)
                .await?;
        }

        to_booking_with_car(updated, car, username)
    }

    async fn username(&self, user_id: i32) -> Result<String, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotInDatabase(user_id))?;

        Ok(user.username)
    }
}

fn parse_status(value: &str) -> Result<BookingStatus, AppError> {
    BookingStatus::from_str(value)
        .ok_or_else(|| {
            crate::error::internal::InternalError::UnknownEnumValue {
                column: "booking.status",
                value: value.to_string(),
            }
            .into()
        })
}

fn to_booking_with_car(
    booking: entity::booking::Model,
    car: entity::car::Model,
    username: String,
) -> Result<BookingWithCar, AppError> {
    Ok(BookingWithCar {
        booking: Booking::from_entity(booking)?,
        car: Car::from_entity(car)?,
        username,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::booking::BookingWindow;
    use chrono::Duration;
    use rust_decimal::Decimal;
    use sea_orm::DbErr;
    use test_utils::{builder::TestBuilder, factory};

    fn hourly_window(hours_from_now: i64, duration_hours: i64) -> BookingWindow {
        let start = Utc::now() + Duration::hours(hours_from_now);
        BookingWindow::Hourly {
            start,
            end: start + Duration::hours(duration_hours),
        }
    }

    /// A twelve-hour rental books successfully as PENDING at the twelve-hour rate.
    #[tokio::test]
    async fn creates_pending_booking_at_quoted_price() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_notification_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let (_category, car) = factory::helpers::create_car_with_dependencies(db).await?;

        let service = BookingService::new(db);
        let booking = service
            .create(CreateBookingParams {
                user_id: user.id,
                car_slug: car.slug.clone(),
                window: hourly_window(24, 12),
            })
            .await
            .unwrap();

        assert_eq!(booking.booking.status, BookingStatus::Pending);
        // Factory cars charge 45.00 for the twelve-hour tier
        assert_eq!(booking.booking.total_price, Decimal::new(4500, 2));
        assert_eq!(booking.car.id, car.id);
        assert_eq!(booking.username, user.username);

        Ok(())
    }

    /// A three-day rental is charged three daily rates.
    #[tokio::test]
    async fn multi_day_booking_charges_daily_rate_per_day() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_notification_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let (_category, car) = factory::helpers::create_car_with_dependencies(db).await?;

        let service = BookingService::new(db);
        let booking = service
            .create(CreateBookingParams {
                user_id: user.id,
                car_slug: car.slug.clone(),
                window: hourly_window(24, 72),
            })
            .await
            .unwrap();

        // Factory cars charge 79.99 per day
        assert_eq!(
            booking.booking.total_price,
            Decimal::new(7999, 2) * Decimal::from(3)
        );

        Ok(())
    }

    /// Booking fails when every vehicle slot is taken for the window.
    #[tokio::test]
    async fn rejects_booking_when_capacity_taken() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_notification_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let (_category, car) = factory::helpers::create_car_with_dependencies(db).await?;

        let start = Utc::now() + Duration::hours(24);
        factory::booking::BookingFactory::new(db, user.id, car.id)
            .start_time(start)
            .end_time(start + Duration::hours(12))
            .build()
            .await?;

        let service = BookingService::new(db);
        let result = service
            .create(CreateBookingParams {
                user_id: user.id,
                car_slug: car.slug.clone(),
                window: BookingWindow::Hourly {
                    start,
                    end: start + Duration::hours(12),
                },
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::BookingErr(BookingError::CarUnavailable))
        ));

        Ok(())
    }

    /// Unknown car slugs produce a not-found error.
    #[tokio::test]
    async fn rejects_unknown_car_slug() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_notification_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;

        let service = BookingService::new(db);
        let result = service
            .create(CreateBookingParams {
                user_id: user.id,
                car_slug: "no-such-car".to_string(),
                window: hourly_window(24, 12),
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Cancelling a pending booking flips it to CANCELLED and notifies the user.
    #[tokio::test]
    async fn cancels_pending_booking_with_notification() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_notification_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, _category, _car, booking) =
            factory::helpers::create_booking_with_dependencies(db).await?;

        let service = BookingService::new(db);
        let cancelled = service.cancel(user.id, booking.id).await.unwrap();

        assert_eq!(cancelled.booking.status, BookingStatus::Cancelled);

        let notifications = crate::data::notification::NotificationRepository::new(db)
            .get_for_user(user.id, None)
            .await?;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].notification_type, "BOOKING_CANCELLED");
        assert_eq!(notifications[0].booking_id, Some(booking.id));

        Ok(())
    }

    /// An approved booking whose rental has started cannot be cancelled.
    #[tokio::test]
    async fn rejects_cancelling_started_rental() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_notification_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let (_category, car) = factory::helpers::create_car_with_dependencies(db).await?;

        let booking = factory::booking::BookingFactory::new(db, user.id, car.id)
            .start_time(Utc::now() - Duration::hours(1))
            .end_time(Utc::now() + Duration::hours(11))
            .status("APPROVED")
            .build()
            .await?;

        let service = BookingService::new(db);
        let result = service.cancel(user.id, booking.id).await;

        assert!(matches!(
            result,
            Err(AppError::BookingErr(BookingError::AlreadyStarted))
        ));

        Ok(())
    }

    /// Completed bookings are past cancellation.
    #[tokio::test]
    async fn rejects_cancelling_completed_booking() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_notification_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;
        let (_category, car) = factory::helpers::create_car_with_dependencies(db).await?;

        let booking = factory::booking::BookingFactory::new(db, user.id, car.id)
            .status("COMPLETED")
            .build()
            .await?;

        let service = BookingService::new(db);
        let result = service.cancel(user.id, booking.id).await;

        assert!(matches!(
            result,
            Err(AppError::BookingErr(BookingError::NotCancellable))
        ));

        Ok(())
    }

    /// Users cannot cancel bookings belonging to someone else.
    #[tokio::test]
    async fn hides_other_users_bookings_from_cancel() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_notification_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (owner, _category, _car, booking) =
            factory::helpers::create_booking_with_dependencies(db).await?;
        let intruder = factory::user::create_user(db).await?;
        assert_ne!(owner.id, intruder.id);

        let service = BookingService::new(db);
        let result = service.cancel(intruder.id, booking.id).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Approving a booking emits the approval notification exactly once.
    #[tokio::test]
    async fn status_update_notifies_once() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_notification_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, _category, _car, booking) =
            factory::helpers::create_booking_with_dependencies(db).await?;

        let service = BookingService::new(db);

        let approved = service
            .update_status(booking.id, BookingStatus::Approved)
            .await
            .unwrap();
        assert_eq!(approved.booking.status, BookingStatus::Approved);

        // Re-applying the same status is a no-op
        service
            .update_status(booking.id, BookingStatus::Approved)
            .await
            .unwrap();

        let notifications = crate::data::notification::NotificationRepository::new(db)
            .get_for_user(user.id, None)
            .await?;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].notification_type, "BOOKING_APPROVED");

        Ok(())
    }
}
