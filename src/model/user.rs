//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::auth::UserDto;

/// An account holder with login identity and an admin flag.
///
/// The password hash never leaves the data layer; this model is what services
/// and controllers work with.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            admin: self.admin,
            date_joined: self.created_at,
        }
    }
}

/// Parameters for registering a new user.
///
/// `admin_code` redeems the one-time bootstrap code generated at startup when
/// no admin account exists yet.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub admin_code: Option<String>,
}
