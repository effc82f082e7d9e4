//! Notification domain models.

use chrono::{DateTime, Utc};

use crate::{dto::notification::NotificationDto, error::internal::InternalError};

/// Kind of event a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    BookingApproved,
    BookingCancelled,
    BookingCompleted,
    RentalStarted,
    RentalEnding,
    PaymentRequired,
    System,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BookingApproved => "BOOKING_APPROVED",
            Self::BookingCancelled => "BOOKING_CANCELLED",
            Self::BookingCompleted => "BOOKING_COMPLETED",
            Self::RentalStarted => "RENTAL_STARTED",
            Self::RentalEnding => "RENTAL_ENDING",
            Self::PaymentRequired => "PAYMENT_REQUIRED",
            Self::System => "SYSTEM",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "BOOKING_APPROVED" => Some(Self::BookingApproved),
            "BOOKING_CANCELLED" => Some(Self::BookingCancelled),
            "BOOKING_COMPLETED" => Some(Self::BookingCompleted),
            "RENTAL_STARTED" => Some(Self::RentalStarted),
            "RENTAL_ENDING" => Some(Self::RentalEnding),
            "PAYMENT_REQUIRED" => Some(Self::PaymentRequired),
            "SYSTEM" => Some(Self::System),
            _ => None,
        }
    }
}

/// A user-facing alert, optionally linked to the booking that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub booking_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, InternalError> {
        let notification_type = NotificationType::from_str(&entity.notification_type)
            .ok_or_else(|| InternalError::UnknownEnumValue {
                column: "notification.notification_type",
                value: entity.notification_type.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            notification_type,
            title: entity.title,
            message: entity.message,
            is_read: entity.is_read,
            booking_id: entity.booking_id,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            notification_type: self.notification_type.as_str().to_string(),
            title: self.title,
            message: self.message,
            is_read: self.is_read,
            booking_id: self.booking_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a notification.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: i32,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub booking_id: Option<i32>,
}

/// Parameters for bulk-marking notifications as read.
///
/// Either `mark_all` is set or specific ids are listed; the service rejects
/// requests providing neither.
#[derive(Debug, Clone)]
pub struct MarkReadParams {
    pub user_id: i32,
    pub notification_ids: Vec<i32>,
    pub mark_all: bool,
}
