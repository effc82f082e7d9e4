use super::*;

/// Tests that creating a car derives its slug from brand, name, and id.
#[tokio::test]
async fn derives_slug_from_brand_name_and_id() -> Result<(), DbErr> {
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

    assert_eq!(car.slug, format!("toyota-corolla-{}", car.id));
    assert_eq!(car.brand, "Toyota");
    assert_eq!(car.status, "AVAILABLE");

    Ok(())
}

/// Tests that two cars of the same brand and model get distinct slugs.
#[tokio::test]
async fn same_model_twice_gets_unique_slugs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = CarRepository::new(db);
    let first = repo
        .create(create_params(category.id, "Toyota", "Corolla"))
        .await?;
    let second = repo
        .create(create_params(category.id, "Toyota", "Corolla"))
        .await?;

    assert_ne!(first.slug, second.slug);

    Ok(())
}

/// Tests the foreign key constraint on category_id.
#[tokio::test]
async fn fails_for_nonexistent_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let result = repo.create(create_params(999999, "Toyota", "Corolla")).await;

    assert!(result.is_err());

    Ok(())
}
