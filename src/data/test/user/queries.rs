use super::*;
use entity::prelude::User;

/// Tests creating a user and finding it by username.
#[tokio::test]
async fn creates_and_finds_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "renter".to_string(),
            "renter@example.com".to_string(),
            "hash".to_string(),
            false,
        )
        .await?;

    let found = repo.find_by_username("renter").await?.unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.email, "renter@example.com");

    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}

/// Tests that duplicate usernames are rejected by the unique constraint.
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(
        "renter".to_string(),
        "a@example.com".to_string(),
        "hash".to_string(),
        false,
    )
    .await?;

    let duplicate = repo
        .create(
            "renter".to_string(),
            "b@example.com".to_string(),
            "hash".to_string(),
            false,
        )
        .await;

    assert!(duplicate.is_err());

    Ok(())
}

/// Tests the admin-existence check used by first-run bootstrap.
#[tokio::test]
async fn detects_admin_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    factory::user::create_user(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::user::create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
