use super::*;

/// Tests that updating a car changes its fields but never the slug.
#[tokio::test]
async fn updates_fields_without_touching_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let repo = CarRepository::new(db);
    let car = repo
        .create(create_params(category.id, "Toyota", "Corolla"))
        .await?;

    let updated = repo
        .update(UpdateCarParams {
            id: car.id,
            name: "Corolla Hybrid".to_string(),
            brand: "Toyota".to_string(),
            category_id: category.id,
            quantity: 3,
            cleaning_time: 2,
            transmission: Transmission::Manual,
            seats: 5,
            doors: 4,
            fuel_type: "Hybrid".to_string(),
            daily_rate: Decimal::new(8999, 2),
            twelve_hour_rate: Decimal::new(4999, 2),
            status: CarStatus::Maintenance,
            image: None,
            is_featured: true,
            features: "GPS, Bluetooth".to_string(),
        })
        .await?;

    assert_eq!(updated.name, "Corolla Hybrid");
    assert_eq!(updated.quantity, 3);
    assert_eq!(updated.status, "MAINTENANCE");
    assert_eq!(updated.slug, car.slug);

    Ok(())
}

/// Tests that deleting a car removes it.
#[tokio::test]
async fn deletes_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    let car = factory::car::create_car(db, category.id).await?;

    let repo = CarRepository::new(db);
    repo.delete(car.id).await?;

    assert!(repo.get_by_id(car.id).await?.is_none());

    Ok(())
}
