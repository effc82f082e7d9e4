use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::booking::BookingRepository, error::AppError,
    service::notification::NotificationService,
};

/// Lead time before the rental end at which the ending notification fires.
const ENDING_LEAD_HOURS: i64 = 1;

/// Starts the rental notification scheduler
///
/// This scheduler runs every minute and checks for:
/// - Approved bookings whose rental has started (RENTAL_STARTED)
/// - Approved bookings ending within the lead time (RENTAL_ENDING)
///
/// Both notifications are deduplicated per booking, so each fires at most
/// once no matter how many ticks observe the same state.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = process_rental_notifications(&db).await {
                tracing::error!("Error processing rental notifications: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Rental notification scheduler started");

    Ok(())
}

/// Processes rental-started and rental-ending notifications
async fn process_rental_notifications(db: &DatabaseConnection) -> Result<(), AppError> {
    let now = Utc::now();

    if let Err(e) = process_started(db, now).await {
        tracing::error!("Error processing rental starts: {}", e);
    }

    if let Err(e) = process_ending(db, now).await {
        tracing::error!("Error processing rental endings: {}", e);
    }

    Ok(())
}

/// Notifies users whose approved rentals are underway
async fn process_started(
    db: &DatabaseConnection,
    now: chrono::DateTime<Utc>,
) -> Result<(), AppError> {
    let repo = BookingRepository::new(db);
    let notification_service = NotificationService::new(db);

    let started = repo.get_approved_started(now).await?;

    for (booking, car) in started {
        match notification_service
            .notify_rental_started(&booking, &car)
            .await
        {
            Ok(true) => {
                tracing::info!(
                    "Sent rental-started notification for booking {} ({} {})",
                    booking.id,
                    car.brand,
                    car.name
                );
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!(
                    "Failed to send rental-started notification for booking {}: {}",
                    booking.id,
                    e
                );
            }
        }
    }

    Ok(())
}

/// Notifies users whose approved rentals end within the lead time
async fn process_ending(
    db: &DatabaseConnection,
    now: chrono::DateTime<Utc>,
) -> Result<(), AppError> {
    let repo = BookingRepository::new(db);
    let notification_service = NotificationService::new(db);

    let ending = repo
        .get_approved_ending_within(now, Duration::hours(ENDING_LEAD_HOURS))
        .await?;

    for (booking, car) in ending {
        match notification_service
            .notify_rental_ending(&booking, &car)
            .await
        {
            Ok(true) => {
                tracing::info!(
                    "Sent rental-ending notification for booking {} ({} {})",
                    booking.id,
                    car.brand,
                    car.name
                );
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!(
                    "Failed to send rental-ending notification for booking {}: {}",
                    booking.id,
                    e
                );
            }
        }
    }

    Ok(())
}
