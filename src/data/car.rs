use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use rust_decimal::Decimal;

use crate::{
    model::car::{CreateCarParams, UpdateCarParams},
    util::slug::car_slug,
};

pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new car and derives its unique slug from brand, name, and the
    /// assigned id.
    ///
    /// The insert and the slug update run in one transaction; the provisional
    /// slug only exists to satisfy the unique constraint until the id is known.
    pub async fn create(&self, params: CreateCarParams) -> Result<entity::car::Model, DbErr> {
        let txn = self.db.begin().await?;

        let provisional = format!(
            "{}-{}",
            car_slug(&params.brand, &params.name, 0),
            Utc::now().timestamp_micros()
        );

        let car = entity::car::ActiveModel {
            name: ActiveValue::Set(params.name),
            brand: ActiveValue::Set(params.brand),
            category_id: ActiveValue::Set(params.category_id),
            slug: ActiveValue::Set(provisional),
            quantity: ActiveValue::Set(params.quantity),
            cleaning_time: ActiveValue::Set(params.cleaning_time),
            transmission: ActiveValue::Set(params.transmission.as_str().to_string()),
            seats: ActiveValue::Set(params.seats),
            doors: ActiveValue::Set(params.doors),
            fuel_type: ActiveValue::Set(params.fuel_type),
            daily_rate: ActiveValue::Set(params.daily_rate),
            twelve_hour_rate: ActiveValue::Set(params.twelve_hour_rate),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            image: ActiveValue::Set(params.image),
            is_featured: ActiveValue::Set(params.is_featured),
            features: ActiveValue::Set(params.features),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let slug = car_slug(&car.brand, &car.name, car.id);
        let mut active_model: entity::car::ActiveModel = car.into();
        active_model.slug = ActiveValue::Set(slug);
        let car = active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(car)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::car::Model>, DbErr> {
        entity::prelude::Car::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::car::Model>, DbErr> {
        entity::prelude::Car::find()
            .filter(entity::car::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets a car by slug together with its category
    pub async fn get_by_slug_with_category(
        &self,
        slug: &str,
    ) -> Result<Option<(entity::car::Model, Option<entity::category::Model>)>, DbErr> {
        entity::prelude::Car::find()
            .filter(entity::car::Column::Slug.eq(slug))
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await
    }

    /// Applies the cheap search filters and returns matching cars with their
    /// categories, newest first.
    ///
    /// Covers the text query (substring over brand or name), category name,
    /// transmission, and daily-rate price bounds. Availability filtering and
    /// relevance ranking happen in the service layer on top of this result.
    ///
    /// # Arguments
    /// - `query`: Text filter over brand and name (case-insensitive substring)
    /// - `category`: Category name, `None` for all
    /// - `transmission`: Transmission value, `None` for all
    /// - `min_price`/`max_price`: Bounds on the daily rate
    ///
    /// # Returns
    /// - `Ok(Vec<(car, category)>)`: Matching cars with related categories
    /// - `Err(DbErr)`: Database error
    pub async fn find_filtered(
        &self,
        query: Option<&str>,
        category: Option<&str>,
        transmission: Option<&str>,
        min_price: Option<Decimal>,
        max_price: Option<Decimal>,
    ) -> Result<Vec<(entity::car::Model, Option<entity::category::Model>)>, DbErr> {
        let mut select = entity::prelude::Car::find()
            .find_also_related(entity::prelude::Category)
            .order_by_desc(entity::car::Column::CreatedAt);

        if let Some(query) = query {
            select = select.filter(
                Condition::any()
                    .add(entity::car::Column::Brand.contains(query))
                    .add(entity::car::Column::Name.contains(query)),
            );
        }

        if let Some(category) = category {
            select = select.filter(entity::category::Column::Name.eq(category));
        }

        if let Some(transmission) = transmission {
            select = select.filter(entity::car::Column::Transmission.eq(transmission));
        }

        if let Some(min_price) = min_price {
            select = select.filter(entity::car::Column::DailyRate.gte(min_price));
        }

        if let Some(max_price) = max_price {
            select = select.filter(entity::car::Column::DailyRate.lte(max_price));
        }

        select.all(self.db).await
    }

    /// Updates a car's fields, leaving the slug untouched
    pub async fn update(&self, params: UpdateCarParams) -> Result<entity::car::Model, DbErr> {
        let car = entity::prelude::Car::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Car with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::car::ActiveModel = car.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.brand = ActiveValue::Set(params.brand);
        active_model.category_id = ActiveValue::Set(params.category_id);
        active_model.quantity = ActiveValue::Set(params.quantity);
        active_model.cleaning_time = ActiveValue::Set(params.cleaning_time);
        active_model.transmission = ActiveValue::Set(params.transmission.as_str().to_string());
        active_model.seats = ActiveValue::Set(params.seats);
        active_model.doors = ActiveValue::Set(params.doors);
        active_model.fuel_type = ActiveValue::Set(params.fuel_type);
        active_model.daily_rate = ActiveValue::Set(params.daily_rate);
        active_model.twelve_hour_rate = ActiveValue::Set(params.twelve_hour_rate);
        active_model.status = ActiveValue::Set(params.status.as_str().to_string());
        active_model.image = ActiveValue::Set(params.image);
        active_model.is_featured = ActiveValue::Set(params.is_featured);
        active_model.features = ActiveValue::Set(params.features);

        active_model.update(self.db).await
    }

    /// Deletes a car, cascading to its bookings
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Car::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
