use super::*;

/// Tests that only the requesting user's bookings are returned, with cars.
#[tokio::test]
async fn returns_only_own_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let car = factory::car::create_car(db, category.id).await?;

    factory::booking::create_booking(db, user.id, car.id).await?;
    factory::booking::create_booking(db, other.id, car.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_for_user(user.id, None).await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].0.user_id, user.id);
    assert_eq!(bookings[0].1.id, car.id);

    Ok(())
}

/// Tests the status filter on the user's booking list.
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let car = factory::car::create_car(db, category.id).await?;

    factory::booking::BookingFactory::new(db, user.id, car.id)
        .status("APPROVED")
        .build()
        .await?;
    factory::booking::create_booking(db, user.id, car.id).await?;

    let repo = BookingRepository::new(db);

    let approved = repo
        .get_for_user(user.id, Some(BookingStatus::Approved))
        .await?;
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].0.status, "APPROVED");

    let all = repo.get_for_user(user.id, None).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests the active/history split used by the dashboard.
#[tokio::test]
async fn splits_active_and_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let car = factory::car::create_car(db, category.id).await?;

    for status in ["PENDING", "APPROVED", "COMPLETED", "CANCELLED"] {
        factory::booking::BookingFactory::new(db, user.id, car.id)
            .status(status)
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);

    let active = repo
        .get_for_user_in_statuses(user.id, &BookingStatus::ACTIVE, true)
        .await?;
    assert_eq!(active.len(), 2);

    let history = repo
        .get_for_user_in_statuses(user.id, &BookingStatus::HISTORY, false)
        .await?;
    assert_eq!(history.len(), 2);

    let history_count = repo
        .count_for_user_in_statuses(user.id, &BookingStatus::HISTORY)
        .await?;
    assert_eq!(history_count, 2);

    Ok(())
}

/// Tests that active bookings come back soonest first.
#[tokio::test]
async fn orders_active_bookings_by_start_time() -> Result<(), DbErr> {
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

    let later = factory::booking::BookingFactory::new(db, user.id, car.id)
        .start_time(base + Duration::hours(10))
        .end_time(base + Duration::hours(24))
        .build()
        .await?;
    let sooner = factory::booking::BookingFactory::new(db, user.id, car.id)
        .start_time(base)
        .end_time(base + Duration::hours(14))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let active = repo
        .get_for_user_in_statuses(user.id, &BookingStatus::ACTIVE, true)
        .await?;

    assert_eq!(active[0].0.id, sooner.id);
    assert_eq!(active[1].0.id, later.id);

    Ok(())
}
