//! Notification factory for creating test notification entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications with customizable fields.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    notification_type: String,
    title: String,
    message: String,
    is_read: bool,
    booking_id: Option<i32>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - notification_type: `"SYSTEM"`
    /// - title: `"Notification {id}"` where id is auto-incremented
    /// - message: a fixed test message
    /// - is_read: `false`
    /// - booking_id: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            notification_type: "SYSTEM".to_string(),
            title: format!("Notification {}", id),
            message: "Test notification message".to_string(),
            is_read: false,
            booking_id: None,
        }
    }

    pub fn notification_type(mut self, notification_type: impl Into<String>) -> Self {
        self.notification_type = notification_type.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn is_read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub fn booking_id(mut self, booking_id: Option<i32>) -> Self {
        self.booking_id = booking_id;
        self
    }

    /// Builds and inserts the notification entity into the database.
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            notification_type: ActiveValue::Set(self.notification_type),
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set(self.message),
            is_read: ActiveValue::Set(self.is_read),
            booking_id: ActiveValue::Set(self.booking_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a notification with default values for the given user.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_id).build().await
}
