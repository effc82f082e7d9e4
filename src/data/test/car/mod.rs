use crate::data::car::CarRepository;
use crate::model::car::{CarStatus, CreateCarParams, Transmission, UpdateCarParams};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_filtered;
mod update;

fn create_params(category_id: i32, brand: &str, name: &str) -> CreateCarParams {
    CreateCarParams {
        name: name.to_string(),
        brand: brand.to_string(),
        category_id,
        quantity: 1,
        cleaning_time: 1,
        transmission: Transmission::Auto,
        seats: 5,
        doors: 4,
        fuel_type: "Petrol".to_string(),
        daily_rate: Decimal::new(7999, 2),
        twelve_hour_rate: Decimal::new(4500, 2),
        status: CarStatus::Available,
        image: None,
        is_featured: false,
        features: String::new(),
    }
}
