use super::*;

/// Tests the text filter over brand and name.
#[tokio::test]
async fn matches_brand_or_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    factory::car::CarFactory::new(db, category.id)
        .brand("Toyota")
        .name("Corolla")
        .build()
        .await?;
    factory::car::CarFactory::new(db, category.id)
        .brand("Honda")
        .name("Civic Toy Edition")
        .build()
        .await?;
    factory::car::CarFactory::new(db, category.id)
        .brand("Ford")
        .name("Focus")
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let results = repo
        .find_filtered(Some("toy"), None, None, None, None)
        .await?;

    assert_eq!(results.len(), 2);

    Ok(())
}

/// Tests filtering by category name via the join.
#[tokio::test]
async fn filters_by_category_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let suv = factory::category::CategoryFactory::new(db)
        .name("SUV")
        .build()
        .await?;
    let sedan = factory::category::CategoryFactory::new(db)
        .name("Sedan")
        .build()
        .await?;

    factory::car::create_car(db, suv.id).await?;
    factory::car::create_car(db, sedan.id).await?;

    let repo = CarRepository::new(db);
    let results = repo
        .find_filtered(None, Some("SUV"), None, None, None)
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].0.category_id, suv.id);
    assert_eq!(results[0].1.as_ref().map(|c| c.name.as_str()), Some("SUV"));

    Ok(())
}

/// Tests transmission and daily-rate bounds.
#[tokio::test]
async fn filters_by_transmission_and_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;
    factory::car::CarFactory::new(db, category.id)
        .transmission("MANUAL")
        .daily_rate(Decimal::new(5000, 2))
        .build()
        .await?;
    factory::car::CarFactory::new(db, category.id)
        .transmission("AUTO")
        .daily_rate(Decimal::new(12000, 2))
        .build()
        .await?;

    let repo = CarRepository::new(db);

    let manual = repo
        .find_filtered(None, None, Some("MANUAL"), None, None)
        .await?;
    assert_eq!(manual.len(), 1);
    assert_eq!(manual[0].0.transmission, "MANUAL");

    let cheap = repo
        .find_filtered(None, None, None, None, Some(Decimal::new(10000, 2)))
        .await?;
    assert_eq!(cheap.len(), 1);
    assert_eq!(cheap[0].0.daily_rate, Decimal::new(5000, 2));

    let expensive = repo
        .find_filtered(None, None, None, Some(Decimal::new(10000, 2)), None)
        .await?;
    assert_eq!(expensive.len(), 1);
    assert_eq!(expensive[0].0.daily_rate, Decimal::new(12000, 2));

    Ok(())
}
