// src/main.rs
mod app;
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use fairway_finder::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    // The guard must stay alive for the whole run so logs are flushed
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.version {
        commands::handle_version_command();
        return Ok(());
    }

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if cli::is_config_update(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    if args.once {
        return commands::handle_once_command(&args).await;
    }

    app::run_interactive(&args).await
}
