//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a car with its category dependency.
///
/// # Returns
/// - `Ok((category, car))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_car_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::car::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let car = crate::factory::car::create_car(db, category.id).await?;

    Ok((category, car))
}

/// Creates a complete booking hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as booking owner)
/// 2. Category
/// 3. Car
/// 4. Booking
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Returns
/// - `Ok((user, category, car, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::car::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let car = crate::factory::car::create_car(db, category.id).await?;
    let booking = crate::factory::booking::create_booking(db, user.id, car.id).await?;

    Ok((user, category, car, booking))
}
