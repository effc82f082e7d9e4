//! Booking factory for creating test booking entities.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, user.id, car.id)
///     .status("APPROVED")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    car_id: i32,
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    total_price: Decimal,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start_time: 1 hour from now
    /// - end_time: 13 hours from now (a twelve-hour rental)
    /// - total_price: `45.00`
    /// - status: `"PENDING"`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, car_id: i32) -> Self {
        let start_time = Utc::now() + Duration::hours(1);
        Self {
            db,
            user_id,
            car_id,
            start_time,
            end_time: start_time + Duration::hours(12),
            total_price: Decimal::new(4500, 2),
            status: "PENDING".to_string(),
        }
    }

    pub fn start_time(mut self, start_time: chrono::DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn end_time(mut self, end_time: chrono::DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn total_price(mut self, total_price: Decimal) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            car_id: ActiveValue::Set(self.car_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            total_price: ActiveValue::Set(self.total_price),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values for the given user and car.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    car_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, car_id).build().await
}
