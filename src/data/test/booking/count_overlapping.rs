use super::*;

/// Tests counting blocking bookings that overlap a window.
///
/// A pending booking inside the window counts; a booking entirely before the
/// window does not.
#[tokio::test]
async fn counts_only_overlapping_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let car = factory::car::create_car(db, category.id).await?;

    let base = Utc::now() + Duration::days(1);

    // Overlapping booking
    factory::booking::BookingFactory::new(db, user.id, car.id)
        .start_time(base)
        .end_time(base + Duration::hours(4))
        .build()
        .await?;

    // Booking well before the window
    factory::booking::BookingFactory::new(db, user.id, car.id)
        .start_time(base - Duration::hours(20))
        .end_time(base - Duration::hours(10))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let count = repo
        .count_overlapping_blocking(car.id, base + Duration::hours(2), base + Duration::hours(6))
        .await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests that cancelled and completed bookings never block a window.
#[tokio::test]
async fn ignores_non_blocking_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let car = factory::car::create_car(db, category.id).await?;

    let base = Utc::now() + Duration::days(1);

    for status in ["CANCELLED", "COMPLETED"] {
        factory::booking::BookingFactory::new(db, user.id, car.id)
            .start_time(base)
            .end_time(base + Duration::hours(4))
            .status(status)
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let count = repo
        .count_overlapping_blocking(car.id, base, base + Duration::hours(4))
        .await?;

    assert_eq!(count, 0);

    Ok(())
}

/// Tests that maintenance bookings block a window like pending and approved ones.
#[tokio::test]
async fn maintenance_counts_as_blocking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let car = factory::car::create_car(db, category.id).await?;

    let base = Utc::now() + Duration::days(1);

    factory::booking::BookingFactory::new(db, user.id, car.id)
        .start_time(base)
        .end_time(base + Duration::hours(4))
        .status(BookingStatus::Maintenance.as_str())
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let count = repo
        .count_overlapping_blocking(car.id, base, base + Duration::hours(4))
        .await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests counting pending/approved bookings covering an instant.
#[tokio::test]
async fn counts_active_bookings_at_instant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let car = factory::car::create_car(db, category.id).await?;

    let now = Utc::now();

    // Spans the instant
    factory::booking::BookingFactory::new(db, user.id, car.id)
        .start_time(now - Duration::hours(1))
        .end_time(now + Duration::hours(3))
        .status(BookingStatus::Approved.as_str())
        .build()
        .await?;

    // Upcoming, doesn't cover the instant
    factory::booking::BookingFactory::new(db, user.id, car.id)
        .start_time(now + Duration::hours(5))
        .end_time(now + Duration::hours(9))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    assert_eq!(repo.count_active_at(car.id, now).await?, 1);

    Ok(())
}

/// Tests the batched overlap query used by search availability filtering.
#[tokio::test]
async fn finds_overlaps_for_multiple_cars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let car_a = factory::car::create_car(db, category.id).await?;
    let car_b = factory::car::create_car(db, category.id).await?;

    let base = Utc::now() + Duration::days(1);

    factory::booking::BookingFactory::new(db, user.id, car_a.id)
        .start_time(base)
        .end_time(base + Duration::hours(4))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let overlapping = repo
        .find_overlapping_blocking_for_cars(
            &[car_a.id, car_b.id],
            base,
            base + Duration::hours(4),
        )
        .await?;

    assert_eq!(overlapping.len(), 1);
    assert_eq!(overlapping[0].car_id, car_a.id);

    // Empty id list short-circuits without querying
    let none = repo
        .find_overlapping_blocking_for_cars(&[], base, base + Duration::hours(4))
        .await?;
    assert!(none.is_empty());

    Ok(())
}
