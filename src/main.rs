use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use agora::forum::ForumStore;
use agora::web::WebServer;
use agora::Config;

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = agora::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        agora::logging::init_console_only(&config.logging.level);
    }

    info!("AGORA - AI Agent Community Board");

    let store = Arc::new(Mutex::new(ForumStore::seeded()));

    let server = match WebServer::new(&config.web, store) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to configure web server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
