use actix_web::HttpServer;
use log::{info, warn};
use mongodb::Client;
use std::io;
use std::sync::Arc;

use catalog_api::app::{build_app, AppState};
use catalog_api::config::{StorageBackend, CONFIG};
use catalog_api::models::{Category, ProductRecord};
use catalog_api::repositories::MongoRepository;
use catalog_api::services::TokenService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let tokens = TokenService::new(&CONFIG.jwt_secret, CONFIG.jwt_expiration_hours);

    let state = match CONFIG.storage_backend {
        StorageBackend::Memory => {
            warn!("Using in-memory storage; data will be lost on shutdown");
            AppState::in_memory(tokens)
        }
        StorageBackend::MongoDb => mongo_state(tokens).await?,
    };

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || build_app(state.clone()))
        .bind(&server_addr)?
        .run()
        .await
}

async fn mongo_state(tokens: TokenService) -> io::Result<AppState> {
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .map_err(|e| io::Error::other(format!("Failed to connect to MongoDB: {}", e)))?;

    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(mongodb::bson::doc! { "ping": 1 })
        .await
        .map_err(|e| io::Error::other(format!("Failed to ping MongoDB: {}", e)))?;
    info!("Connected to MongoDB successfully!");

    let categories = MongoRepository::<Category>::new(&db);
    let products = MongoRepository::<ProductRecord>::new(&db);
    categories
        .create_indexes()
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;
    products
        .create_indexes()
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(AppState::new(
        Arc::new(categories),
        Arc::new(products),
        tokens,
    ))
}
