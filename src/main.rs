use std::process::ExitCode;

use tracing::{error, info};

use boardview::{Catalog, Config, Seed, WebServer};

#[tokio::main]
async fn main() -> ExitCode {
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
    if let Err(e) = boardview::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        boardview::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    info!("boardview starting");

    let catalog = match &config.seed.path {
        Some(path) => match Seed::load(path)
            .and_then(|seed| Catalog::from_seed(&config.listing, seed))
        {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(path = %path, "Failed to load seed: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            info!("No seed configured, starting with an empty catalog");
            Catalog::new(&config.listing)
        }
    };

    let server = match WebServer::new(&config.web, catalog) {
        Ok(server) => server,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server.run().await {
        error!("Web server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
