use std::error::Error;

mod app;
mod cli;
mod config;
mod error;
mod fetch;
mod models;
mod processor;
mod shutdown;

use app::App;
use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli_args = CliArgs::parse_args();
    cli_args.validate()?;

    let log_level = match cli_args.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    tracing::info!("Starting Netflix viewing-history stats");

    let shutdown_manager = shutdown::setup_shutdown_handler();

    let config = config::AppConfig::load_with_cli_args(&cli_args)?;

    let mut app = App::new_with_config(config, shutdown_manager.clone());

    tokio::select! {
        result = app.run() => {
            match result {
                Ok(()) => tracing::info!("Run completed successfully"),
                Err(e) => {
                    tracing::error!("Run failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        _ = shutdown_manager.wait_for_shutdown() => {
            tracing::info!("Shutdown requested before the run finished");
        }
    }

    Ok(())
}
