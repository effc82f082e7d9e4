use super::*;

/// Tests the admin listing: all users' bookings with owning usernames.
#[tokio::test]
async fn lists_all_bookings_with_usernames() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user_a = factory::user::create_user(db).await?;
    let user_b = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let car = factory::car::create_car(db, category.id).await?;

    factory::booking::create_booking(db, user_a.id, car.id).await?;
    factory::booking::create_booking(db, user_b.id, car.id).await?;

    let repo = BookingRepository::new(db);
    let (bookings, total) = repo.get_all_paginated(None, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(bookings.len(), 2);

    let usernames: Vec<&str> = bookings.iter().map(|(_, _, name)| name.as_str()).collect();
    assert!(usernames.contains(&user_a.username.as_str()));
    assert!(usernames.contains(&user_b.username.as_str()));

    Ok(())
}

/// Tests the active and history views of the admin listing.
#[tokio::test]
async fn filters_by_view() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let car = factory::car::create_car(db, category.id).await?;

    for status in ["PENDING", "MAINTENANCE", "COMPLETED"] {
        factory::booking::BookingFactory::new(db, user.id, car.id)
            .status(status)
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);

    let (active, active_total) = repo
        .get_all_paginated(Some(BookingView::Active), 0, 10)
        .await?;
    assert_eq!(active_total, 2);
    assert_eq!(active.len(), 2);

    let (history, history_total) = repo
        .get_all_paginated(Some(BookingView::History), 0, 10)
        .await?;
    assert_eq!(history_total, 1);
    assert_eq!(history[0].0.status, "COMPLETED");

    Ok(())
}

/// Tests pagination bounds on the admin listing.
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let car = factory::car::create_car(db, category.id).await?;

    for _ in 0..5 {
        factory::booking::create_booking(db, user.id, car.id).await?;
    }

    let repo = BookingRepository::new(db);

    let (first_page, total) = repo.get_all_paginated(None, 0, 2).await?;
    assert_eq!(total, 5);
    assert_eq!(first_page.len(), 2);

    let (last_page, _) = repo.get_all_paginated(None, 2, 2).await?;
    assert_eq!(last_page.len(), 1);

    Ok(())
}
