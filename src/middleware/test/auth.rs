use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    controller::auth::SESSION_AUTH_USER_ID,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
};

/// Tests that a request without a session user is rejected.
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that the session's user is resolved and returned.
#[tokio::test]
async fn returns_authenticated_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    session.insert(SESSION_AUTH_USER_ID, user.id).await.unwrap();

    let authenticated = AuthGuard::new(db, session).require(&[]).await.unwrap();

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.username, user.username);

    Ok(())
}

/// Tests that a session referencing a deleted user is rejected.
#[tokio::test]
async fn rejects_stale_session_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    session.insert(SESSION_AUTH_USER_ID, 424242).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(424242)))
    ));

    Ok(())
}

/// Tests that the admin permission rejects regular users.
#[tokio::test]
async fn admin_permission_rejects_regular_user() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    session.insert(SESSION_AUTH_USER_ID, user.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that the admin permission passes for admin users.
#[tokio::test]
async fn admin_permission_allows_admin() -> Result<(), DbErr> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    session
        .insert(SESSION_AUTH_USER_ID, admin.id)
        .await
        .unwrap();

    let authenticated = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await
        .unwrap();

    assert!(authenticated.admin);

    Ok(())
}
