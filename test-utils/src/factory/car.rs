//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db, category.id)
///     .brand("Toyota")
///     .name("Corolla")
///     .quantity(3)
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    brand: String,
    category_id: i32,
    slug: String,
    quantity: i32,
    cleaning_time: i32,
    transmission: String,
    seats: i32,
    doors: i32,
    fuel_type: String,
    daily_rate: Decimal,
    twelve_hour_rate: Decimal,
    status: String,
    image: Option<String>,
    is_featured: bool,
    features: String,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Car {id}"`, brand: `"Brand {id}"`, slug: `"car-{id}"`
    /// - quantity: `1`, cleaning_time: `1` hour
    /// - transmission: `"AUTO"`, seats: `5`, doors: `4`, fuel_type: `"Petrol"`
    /// - daily_rate: `79.99`, twelve_hour_rate: `45.00`
    /// - status: `"AVAILABLE"`, not featured, no features
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Car {}", id),
            brand: format!("Brand {}", id),
            category_id,
            slug: format!("car-{}", id),
            quantity: 1,
            cleaning_time: 1,
            transmission: "AUTO".to_string(),
            seats: 5,
            doors: 4,
            fuel_type: "Petrol".to_string(),
            daily_rate: Decimal::new(7999, 2),
            twelve_hour_rate: Decimal::new(4500, 2),
            status: "AVAILABLE".to_string(),
            image: None,
            is_featured: false,
            features: String::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn cleaning_time(mut self, cleaning_time: i32) -> Self {
        self.cleaning_time = cleaning_time;
        self
    }

    pub fn transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = transmission.into();
        self
    }

    pub fn daily_rate(mut self, daily_rate: Decimal) -> Self {
        self.daily_rate = daily_rate;
        self
    }

    pub fn twelve_hour_rate(mut self, twelve_hour_rate: Decimal) -> Self {
        self.twelve_hour_rate = twelve_hour_rate;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn is_featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    /// Builds and inserts the car entity into the database.
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            name: ActiveValue::Set(self.name),
            brand: ActiveValue::Set(self.brand),
            category_id: ActiveValue::Set(self.category_id),
            slug: ActiveValue::Set(self.slug),
            quantity: ActiveValue::Set(self.quantity),
            cleaning_time: ActiveValue::Set(self.cleaning_time),
            transmission: ActiveValue::Set(self.transmission),
            seats: ActiveValue::Set(self.seats),
            doors: ActiveValue::Set(self.doors),
            fuel_type: ActiveValue::Set(self.fuel_type),
            daily_rate: ActiveValue::Set(self.daily_rate),
            twelve_hour_rate: ActiveValue::Set(self.twelve_hour_rate),
            status: ActiveValue::Set(self.status),
            image: ActiveValue::Set(self.image),
            is_featured: ActiveValue::Set(self.is_featured),
            features: ActiveValue::Set(self.features),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values in the given category.
pub async fn create_car(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, category_id).build().await
}
