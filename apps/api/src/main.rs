use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use teapot_api::api::{self, AppState};
use teapot_api::config::Config;
use teapot_api::domain::repositories::TeapotRepository;
use teapot_api::infrastructure::repositories::{InMemoryTeapotRepository, PostgresTeapotRepository};
use teapot_api::services::TeapotCrudService;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Pick the backing store
    let repo: Arc<dyn TeapotRepository> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await
                .expect("Failed to connect to database");

            let repo = PostgresTeapotRepository::new(pool);
            repo.migrate().await.expect("Failed to prepare database");

            tracing::info!("Database connected successfully");
            Arc::new(repo)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store");
            Arc::new(InMemoryTeapotRepository::new())
        }
    };

    let teapots = TeapotCrudService::new(repo);

    // Install the seed teapots before accepting requests
    teapots.reset(&config.seeds).await;

    let app = api::router(AppState::new(teapots, config.seeds.clone()));

    // Start server
    let addr = config.socket_addr();
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
