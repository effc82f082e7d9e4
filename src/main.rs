mod config;
mod controller;
mod data;
mod dto;
mod error;
mod middleware;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, service::admin_code::AdminCodeService, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "driveline=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    let admin_code_service = AdminCodeService::new();

    tracing::info!("Starting server");

    // Generate a bootstrap admin code on first run
    startup::check_for_admin(&db, &admin_code_service).await?;

    // Start the rental notification scheduler
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::rental_notifications::start_scheduler(scheduler_db).await {
            tracing::error!("Rental notification scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(
            db,
            admin_code_service,
            config.app_url.clone(),
        ))
        .layer(session)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
