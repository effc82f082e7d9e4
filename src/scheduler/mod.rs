//! Cron jobs for automated tasks.

pub mod rental_notifications;
