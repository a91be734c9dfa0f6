mod app_state;
mod cli;
mod commands;
mod console;
mod media;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use vigil_config::VigilConfig;

const DEFAULT_DIRECTIVE: &str = "vigil=info";

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config first so its log level can seed the filter
    let loaded = vigil_config::load_config(args.config.as_deref());

    // Initialize logging
    let log_directive = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok(config) => format!("vigil={}", config.logging.level.as_directive()),
        Err(_) => DEFAULT_DIRECTIVE.to_string(),
    });
    let mut filter = EnvFilter::from_default_env();
    match log_directive.parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(_) => {
            if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
                filter = filter.add_directive(directive);
            }
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Vigil v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            VigilConfig::default()
        }
    };
    // The loader ran before the subscriber existed
    if let Err(e) = vigil_config::validation::validate(&config) {
        tracing::warn!("Config has invalid values, keeping them: {e}");
    }
    tracing::info!("Config loaded (server: {})", config.server.base_url);

    match commands::run(args.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("vigil: {e}");
            ExitCode::FAILURE
        }
    }
}
