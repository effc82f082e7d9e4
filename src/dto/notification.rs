use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub booking_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Bulk mark-read request: either all unread notifications or a specific set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkReadDto {
    #[serde(default)]
    pub notification_ids: Vec<i32>,
    #[serde(default)]
    pub mark_all: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkReadResponseDto {
    pub message: String,
    pub updated_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkSingleReadResponseDto {
    pub message: String,
    pub notification: NotificationDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UnreadCountDto {
    pub count: u64,
}
