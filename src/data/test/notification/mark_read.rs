use super::*;

/// Tests marking all of a user's unread notifications as read.
#[tokio::test]
async fn marks_all_unread_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::notification::create_notification(db, user.id).await?;
    factory::notification::create_notification(db, user.id).await?;
    // Already read, must not count toward the update
    factory::notification::NotificationFactory::new(db, user.id)
        .is_read(true)
        .build()
        .await?;
    // Another user's notification stays untouched
    let others = factory::notification::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_read(user.id, None).await?;

    assert_eq!(updated, 2);
    assert_eq!(repo.unread_count(user.id).await?, 0);

    let other_notification = repo.get_by_id(others.id).await?.unwrap();
    assert!(!other_notification.is_read);

    Ok(())
}

/// Tests marking a specific set of notifications as read.
#[tokio::test]
async fn marks_only_listed_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let first = factory::notification::create_notification(db, user.id).await?;
    let second = factory::notification::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_read(user.id, Some(&[first.id])).await?;

    assert_eq!(updated, 1);
    assert!(repo.get_by_id(first.id).await?.unwrap().is_read);
    assert!(!repo.get_by_id(second.id).await?.unwrap().is_read);

    Ok(())
}

/// Tests marking a single notification as read.
#[tokio::test]
async fn marks_single_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_single_read(notification.id).await?;

    assert!(updated.is_read);

    Ok(())
}
