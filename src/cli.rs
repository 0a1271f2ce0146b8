use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use fairway_finder::config::ApiShape;
use fairway_finder::data_fetcher::models::CourseId;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (print one search or detail round-trip and exit)
/// - config operations are requested
/// - --version flag is set
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once || args.version || args.list_config || is_config_update(args)
}

/// True when any configuration update flag was given.
pub fn is_config_update(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_api_key.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Golf Course Finder
///
/// An interactive terminal lookup tool for the GolfCourseAPI course
/// directory. Search courses by name, pick one from the result table, and
/// browse its location, tee-box sets, and hole-by-hole layout.
///
/// In interactive mode (default):
/// - Type to edit the search query, press Enter to search
/// - Use arrow keys (↑/↓) to select a result row
/// - Press Enter on a row to load course details
/// - Press Esc to go back, 'q' to quit
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Print one search or detail round-trip and exit immediately. Useful
    /// for scripts. The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Course name to search for. Prefills the interactive search input;
    /// with --once, runs this search and prints the result table.
    #[arg(short = 'q', long = "query", help_heading = "Search")]
    pub query: Option<String>,

    /// Fetch details for one course id instead of searching. Requires --once.
    /// Numeric ids stay numeric; anything else is passed through as text.
    #[arg(long = "course-id", help_heading = "Search")]
    pub course_id: Option<CourseId>,

    /// Endpoint shape the remote service speaks ("courses" or "v1").
    /// Overrides the configured shape for this run.
    #[arg(long = "api-shape", help_heading = "Search")]
    pub api_shape: Option<ApiShape>,

    /// Update API domain in config. Will prompt for the new domain if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_domain: Option<String>,

    /// Update the GolfCourseAPI key in config. Will prompt for the key if not
    /// provided, keeping it out of shell history.
    #[arg(
        long = "set-api-key",
        help_heading = "Configuration",
        value_name = "API_KEY",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode which doesn't clear the terminal before drawing the UI.
    /// In this mode, info logs are written to the log file instead of being displayed in the terminal.
    /// The log file is created if it doesn't exist.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
