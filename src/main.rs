mod admin;
mod auth;
mod db;
mod error;
mod middleware;
mod notification;
mod routes;
mod state;
mod user;
mod views;

#[cfg(test)]
mod testing;

use db::{create_pool, run_migrations};
use notification::{NotificationService, PgNotificationRepository};
use routes::create_router;
use state::{AppState, Config};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user::PgUserRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,student_notifications=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env()?);

    tracing::info!("Connecting to database...");
    let db = create_pool(&config.database_url, config.database_max_connections).await?;

    tracing::info!("Running migrations...");
    run_migrations(&db).await?;

    // Create notification broadcaster
    let (notification_tx, _) = broadcast::channel(100);

    // Create repositories
    let user_repository = Arc::new(PgUserRepository::new(db.clone()));
    let notification_repository = Arc::new(PgNotificationRepository::new(db.clone()));

    // Create services
    let notification_service = NotificationService::new(
        notification_repository,
        user_repository.clone(),
        notification_tx,
    );

    let templates = Arc::new(views::create_registry()?);

    let state = AppState {
        config: config.clone(),
        user_repository,
        notification_service,
        templates,
    };

    let app = create_router(state);

    let addr = config.addr();
    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
