use axum::http::HeaderValue;
use axum_helpers::middleware::{create_cors_layer, create_permissive_cors_layer};
use axum_helpers::server::{create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::UploadStore;
use std::time::Duration;
use tower_http::services::ServeDir;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Connect to MongoDB with retry; a connection that never comes up
    // aborts startup with a non-zero exit
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;

    // Get the database
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    // Prepare the image upload directory
    let uploads = UploadStore::create(&config.uploads_dir)
        .await
        .map_err(|e| eyre::eyre!("Failed to prepare uploads directory: {}", e))?;

    // Initialize indexes
    api::init_indexes(&db).await?;

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
        uploads,
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;

    // Lock CORS to the deployed front-end when one is configured,
    // otherwise stay open for local development
    let cors = match &state.config.frontend_url {
        Some(url) => {
            let origins: Vec<HeaderValue> = [
                url.as_str(),
                "http://localhost:3000",
                "http://localhost:5000",
            ]
            .iter()
            .map(|origin| {
                origin
                    .parse()
                    .map_err(|e| eyre::eyre!("Invalid CORS origin {origin}: {e}"))
            })
            .collect::<eyre::Result<_>>()?;
            create_cors_layer(origins)
        }
        None => create_permissive_cors_layer(),
    };

    // Root-level endpoints, uploaded images, and the front-end catch-all
    let app = router
        .merge(api::health::root_router())
        .nest_service("/uploads", ServeDir::new(state.uploads.dir()));
    let app = api::frontend::attach(app, &state.config.frontend_dir).layer(cors);

    let server_config = state.config.server.clone();

    info!("Starting BlueTech API with production-ready shutdown (30s timeout)");

    // Production-ready server with graceful shutdown
    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing MongoDB connections");
        // MongoDB client closes automatically on drop
        drop(state.mongo_client);
        info!("MongoDB connection closed successfully");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("BlueTech API shutdown complete");
    Ok(())
}
