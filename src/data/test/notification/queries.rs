use super::*;

/// Tests listing a user's notifications with the read-state filter.
#[tokio::test]
async fn filters_by_read_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    factory::notification::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .is_read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.get_for_user(user.id, None).await?.len(), 2);
    assert_eq!(repo.get_for_user(user.id, Some(false)).await?.len(), 1);
    assert_eq!(repo.get_for_user(user.id, Some(true)).await?.len(), 1);
    assert_eq!(repo.unread_count(user.id).await?, 1);

    Ok(())
}

/// Tests creating a notification linked to a booking.
#[tokio::test]
async fn creates_notification_with_booking_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, _car, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParams {
            user_id: user.id,
            notification_type: NotificationType::BookingApproved,
            title: "Booking Approved".to_string(),
            message: "Your booking has been approved!".to_string(),
            booking_id: Some(booking.id),
        })
        .await?;

    assert_eq!(notification.notification_type, "BOOKING_APPROVED");
    assert_eq!(notification.booking_id, Some(booking.id));
    assert!(!notification.is_read);

    Ok(())
}

/// Tests the per-booking deduplication check used by the scheduler.
#[tokio::test]
async fn detects_existing_notification_for_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, _car, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = NotificationRepository::new(db);

    assert!(
        !repo
            .exists_for_booking(booking.id, NotificationType::RentalStarted)
            .await?
    );

    repo.create(CreateNotificationParams {
        user_id: user.id,
        notification_type: NotificationType::RentalStarted,
        title: "Rental Started".to_string(),
        message: "Your rental has started.".to_string(),
        booking_id: Some(booking.id),
    })
    .await?;

    assert!(
        repo.exists_for_booking(booking.id, NotificationType::RentalStarted)
            .await?
    );
    // A different type for the same booking is still absent
    assert!(
        !repo
            .exists_for_booking(booking.id, NotificationType::RentalEnding)
            .await?
    );

    Ok(())
}
