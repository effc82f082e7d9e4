//! User service: registration, login verification, and account lookup.

use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{RegisterUserParams, User},
    service::{admin_code::AdminCodeService, password},
};

/// Minimum accepted password length for new accounts.
const MIN_PASSWORD_LENGTH: usize = 8;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Usernames must be unique; passwords are hashed with Argon2id before
    /// storage. A valid admin bootstrap code grants the admin flag and is
    /// consumed in the process.
    pub async fn register(
        &self,
        params: RegisterUserParams,
        admin_codes: &AdminCodeService,
    ) -> Result<User, AppError> {
        let username = params.username.trim().to_string();
        if username.is_empty() {
            return Err(AppError::BadRequest("Username is required.".to_string()));
        }
        if params.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters.",
                MIN_PASSWORD_LENGTH
            )));
        }

        let repo = UserRepository::new(self.db);

        if repo.find_by_username(&username).await?.is_some() {
            return Err(AuthError::UsernameTaken(username).into());
        }

        let admin = match params.admin_code {
            Some(ref code) => admin_codes.validate_and_consume(code).await,
            None => false,
        };

        let password_hash = password::hash_password(&params.password)?;

        let user = repo
            .create(username, params.email, password_hash, admin)
            .await?;

        Ok(User::from_entity(user))
    }

    /// Verifies credentials and returns the account on success.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the
    /// response doesn't reveal which accounts exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(user))
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_id(user_id).await?.map(User::from_entity))
    }
}
