//! Notification service: user alerts for booking lifecycle events.
//!
//! Status-change notifications fire when a booking transitions into a state
//! the user should hear about. The rental-started and rental-ending variants
//! are driven by the scheduler and deduplicated against existing
//! notifications so each booking produces at most one of each.

use sea_orm::DatabaseConnection;

use crate::{
    data::notification::NotificationRepository,
    error::{auth::AuthError, AppError},
    model::booking::BookingStatus,
    model::notification::{
        CreateNotificationParams, MarkReadParams, Notification, NotificationType,
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's notifications, newest first, optionally filtered by read state
    pub async fn get_for_user(
        &self,
        user_id: i32,
        is_read: Option<bool>,
    ) -> Result<Vec<Notification>, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notifications = repo.get_for_user(user_id, is_read).await?;

        notifications
            .into_iter()
            .map(|n| Notification::from_entity(n).map_err(Into::into))
            .collect()
    }

    /// Counts a user's unread notifications
    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        let repo = NotificationRepository::new(self.db);

        Ok(repo.unread_count(user_id).await?)
    }

    /// Marks notifications as read in bulk.
    ///
    /// With `mark_all` set every unread notification of the user is updated,
    /// otherwise only the listed ids (still restricted to the user's own
    /// unread notifications). Returns the number of rows updated.
    pub async fn mark_read(&self, params: MarkReadParams) -> Result<u64, AppError> {
        let repo = NotificationRepository::new(self.db);

        let updated = if params.mark_all {
            repo.mark_read(params.user_id, None).await?
        } else {
            repo.mark_read(params.user_id, Some(&params.notification_ids))
                .await?
        };

        Ok(updated)
    }

    /// Marks a single notification as read.
    ///
    /// Returns the updated notification, or an error if it doesn't exist or
    /// belongs to another user.
    pub async fn mark_single_read(
        &self,
        user_id: i32,
        notification_id: i32,
    ) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo
            .get_by_id(notification_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found.".to_string()))?;

        if notification.user_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!(
                    "User attempted to mark notification {} owned by user {}",
                    notification_id, notification.user_id
                ),
            )
            .into());
        }

        let updated = repo.mark_single_read(notification_id).await?;

        Ok(Notification::from_entity(updated)?)
    }

    /// Creates the notification for a booking status transition.
    ///
    /// Only APPROVED, CANCELLED, and COMPLETED transitions notify the user;
    /// other statuses are internal and produce nothing.
    pub async fn booking_status_changed(
        &self,
        booking: &entity::booking::Model,
        car: &entity::car::Model,
        new_status: BookingStatus,
    ) -> Result<(), AppError> {
        let car_label = format!("{} {}", car.brand, car.name);

        let (notification_type, title, message) = match new_status {
            BookingStatus::Approved => (
                NotificationType::BookingApproved,
                "Booking Approved",
                format!("Your booking for {} has been approved!", car_label),
            ),
            BookingStatus::Cancelled => (
                NotificationType::BookingCancelled,
                "Booking Cancelled",
                format!("Your booking for {} has been cancelled.", car_label),
            ),
            BookingStatus::Completed => (
                NotificationType::BookingCompleted,
                "Rental Completed",
                format!("Your rental of {} has been completed.", car_label),
            ),
            _ => return Ok(()),
        };

        let repo = NotificationRepository::new(self.db);
        repo.create(CreateNotificationParams {
            user_id: booking.user_id,
            notification_type,
            title: title.to_string(),
            message,
            booking_id: Some(booking.id),
        })
        .await?;

        Ok(())
    }

    /// Notifies the user that their rental has started.
    ///
    /// Deduplicated per booking; returns whether a notification was created.
    pub async fn notify_rental_started(
        &self,
        booking: &entity::booking::Model,
        car: &entity::car::Model,
    ) -> Result<bool, AppError> {
        let repo = NotificationRepository::new(self.db);

        if repo
            .exists_for_booking(booking.id, NotificationType::RentalStarted)
            .await?
        {
            return Ok(false);
        }

        repo.create(CreateNotificationParams {
            user_id: booking.user_id,
            notification_type: NotificationType::RentalStarted,
            title: "Rental Started".to_string(),
            message: format!("Your rental of {} {} has started.", car.brand, car.name),
            booking_id: Some(booking.id),
        })
        .await?;

        Ok(true)
    }

    /// Notifies the user that their rental ends soon.
    ///
    /// Deduplicated per booking; returns whether a notification was created.
    pub async fn notify_rental_ending(
        &self,
        booking: &entity::booking::Model,
        car: &entity::car::Model,
    ) -> Result<bool, AppError> {
        let repo = NotificationRepository::new(self.db);

        if repo
            .exists_for_booking(booking.id, NotificationType::RentalEnding)
            .await?
        {
            return Ok(false);
        }

        repo.create(CreateNotificationParams {
            user_id: booking.user_id,
            notification_type: NotificationType::RentalEnding,
            title: "Rental Ending Soon".to_string(),
            message: format!(
                "Your rental of {} {} ends at {}. Please return the car on time.",
                car.brand,
                car.name,
                booking.end_time.format("%Y-%m-%d %H:%M UTC")
            ),
            booking_id: Some(booking.id),
        })
        .await?;

        Ok(true)
    }
}
