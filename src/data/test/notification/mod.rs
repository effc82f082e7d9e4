use crate::data::notification::NotificationRepository;
use crate::model::notification::{CreateNotificationParams, NotificationType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod mark_read;
mod queries;
