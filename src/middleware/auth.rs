use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    controller::auth::SESSION_AUTH_USER_ID,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
};

/// Permissions an endpoint can demand on top of being logged in.
pub enum Permission {
    Admin,
}

/// Session-backed authentication guard used at the top of protected handlers.
///
/// Resolves the session's user id to a database user and checks the required
/// permissions, returning the user so handlers don't query it again.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated user holding all given permissions.
    ///
    /// # Returns
    /// - `Ok(user)` - The authenticated user entity
    /// - `Err(AppError::AuthErr)` - Not logged in, user vanished, or a
    ///   permission is missing
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin operation without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
