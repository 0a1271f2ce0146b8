use crate::cli::Args;
use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use fairway_finder::config::Config;
use fairway_finder::data_fetcher::api::create_http_client_with_timeout;
use fairway_finder::error::AppError;
use fairway_finder::ui::run_interactive_ui;
use std::io::stdout;

/// Run the interactive application flow.
///
/// - Loads config (halting before any request when no credential is found)
/// - Sets up terminal raw mode and alternate screen
/// - Runs the interactive UI
/// - Cleans up terminal state
pub async fn run_interactive(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await?;
    if let Some(shape) = args.api_shape {
        config.api_shape = shape;
    }
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let mut out = stdout();
    execute!(out, SetTitle("GOLF COURSE FINDER"))?;

    // Debug mode skips raw mode and the alternate screen so the rendered
    // pages stay in terminal history.
    if !args.debug {
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen)?;
    }

    let result = run_interactive_ui(&client, &config, args.query.clone(), args.debug).await;

    if !args.debug {
        execute!(out, LeaveAlternateScreen)?;
        disable_raw_mode()?;
    }

    result
}
