use catalog_server::{Config, Server, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();

    // 2. Configuration - fail fast before anything binds
    let config = Config::from_env().inspect_err(|e| {
        eprintln!("Configuration error: {e}");
    })?;

    // 3. Logging
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Catalog server starting...");

    // 4. Serve until ctrl-c
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
