use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::notification::{CreateNotificationParams, NotificationType};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new notification
    pub async fn create(
        &self,
        params: CreateNotificationParams,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            notification_type: ActiveValue::Set(params.notification_type.as_str().to_string()),
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            is_read: ActiveValue::Set(false),
            booking_id: ActiveValue::Set(params.booking_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets a user's notifications, newest first, optionally filtered by read state
    pub async fn get_for_user(
        &self,
        user_id: i32,
        is_read: Option<bool>,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        let mut select = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt);

        if let Some(is_read) = is_read {
            select = select.filter(entity::notification::Column::IsRead.eq(is_read));
        }

        select.all(self.db).await
    }

    /// Counts a user's unread notifications
    pub async fn unread_count(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    /// Marks a user's unread notifications as read.
    ///
    /// With `ids`, only those notifications are updated; without, all unread
    /// notifications of the user are. Returns the number of rows updated.
    pub async fn mark_read(&self, user_id: i32, ids: Option<&[i32]>) -> Result<u64, DbErr> {
        let mut update = entity::prelude::Notification::update_many()
            .col_expr(
                entity::notification::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false));

        if let Some(ids) = ids {
            update = update.filter(entity::notification::Column::Id.is_in(ids.to_vec()));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Marks a single notification as read and returns the updated row
    pub async fn mark_single_read(&self, id: i32) -> Result<entity::notification::Model, DbErr> {
        let notification = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Notification with id {} not found",
                id
            )))?;

        let mut active_model: entity::notification::ActiveModel = notification.into();
        active_model.is_read = ActiveValue::Set(true);

        active_model.update(self.db).await
    }

    /// Checks whether a notification of the given type already exists for a
    /// booking, used to deduplicate scheduler notifications.
    pub async fn exists_for_booking(
        &self,
        booking_id: i32,
        notification_type: NotificationType,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Notification::find()
            .filter(entity::notification::Column::BookingId.eq(booking_id))
            .filter(
                entity::notification::Column::NotificationType.eq(notification_type.as_str()),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
