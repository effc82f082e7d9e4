use super::*;

/// Tests updating a booking's status.
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _category, _car, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let updated = repo.set_status(booking.id, BookingStatus::Approved).await?;

    assert_eq!(updated.status, "APPROVED");

    let stored = repo.get_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, "APPROVED");

    Ok(())
}

/// Tests that updating a nonexistent booking fails.
#[tokio::test]
async fn fails_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rental_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let result = repo.set_status(999999, BookingStatus::Approved).await;

    assert!(result.is_err());

    Ok(())
}
