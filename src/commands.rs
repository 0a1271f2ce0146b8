use crate::cli::Args;
use crossterm::{execute, terminal::SetTitle};
use fairway_finder::config::Config;
use fairway_finder::config::user_prompts::{prompt_for_api_domain, prompt_for_api_key};
use fairway_finder::constants::DEFAULT_SEARCH_QUERY;
use fairway_finder::data_fetcher::api::{
    create_http_client_with_timeout, fetch_course_detail, search_courses,
};
use fairway_finder::data_fetcher::projector::display_label;
use fairway_finder::error::AppError;
use fairway_finder::ui::state::SearchSession;
use fairway_finder::ui::{build_detail_page, build_error_page, build_results_page};
use std::io::stdout;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.course_id.is_some() && !args.once {
        return Err(AppError::config_error(
            "--course-id only makes sense with --once (interactive mode starts from a search)",
        ));
    }
    if args.course_id.is_some() && args.query.is_some() {
        return Err(AppError::config_error(
            "Cannot use both --query and --course-id in the same run",
        ));
    }
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

/// Handles the --list-config command.
///
/// Displays current configuration settings.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle("GOLF COURSE FINDER"))?;
    Config::display().await?;
    Ok(())
}

/// Handles configuration update commands (--config, --set-api-key,
/// --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves changes.
/// Flags given without a value prompt on stdin instead.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = if new_domain.is_empty() {
            prompt_for_api_domain().await?
        } else {
            new_domain.clone()
        };
    }

    if let Some(new_key) = &args.new_api_key {
        config.api_key = if new_key.is_empty() {
            prompt_for_api_key().await?
        } else {
            new_key.clone()
        };
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --once command (quick view mode).
///
/// Runs a single search-or-detail round-trip, prints the same screen the
/// interactive mode would show, and exits. A failed request prints an error
/// page instead of returning an error, so scripts see the message too.
pub async fn handle_once_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await?;
    if let Some(shape) = args.api_shape {
        config.api_shape = shape;
    }
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    execute!(stdout(), SetTitle("GOLF COURSE FINDER"))?;

    if let Some(id) = &args.course_id {
        match fetch_course_detail(&client, &config, id).await {
            Ok(detail) => {
                let label = display_label(&detail);
                build_detail_page(&label, &detail, false, true).render_buffered(&mut stdout())?;
            }
            Err(e) => {
                build_error_page(&format!("Request failed: {e}"), true)
                    .render_buffered(&mut stdout())?;
            }
        }
    } else {
        let query = args
            .query
            .clone()
            .unwrap_or_else(|| DEFAULT_SEARCH_QUERY.to_string())
            .trim()
            .to_string();

        let mut session = SearchSession::new(Some(query.clone()));
        match search_courses(&client, &config, &query).await {
            Ok(payload) => {
                session.set_results(query, payload);
                build_results_page(&session, None, true).render_buffered(&mut stdout())?;
            }
            Err(e) => {
                build_error_page(&format!("Request failed: {e}"), true)
                    .render_buffered(&mut stdout())?;
            }
        }
    }

    println!(); // Add a newline at the end
    Ok(())
}
