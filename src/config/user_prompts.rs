//! User interaction and prompts for configuration setup
//!
//! This module handles user prompts and input collection for configuration
//! updates that were requested without a value on the command line.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for API domain input and returns the trimmed input.
///
/// # Returns
/// * `Ok(String)` - The trimmed user input
/// * `Err(AppError)` - Error reading from stdin
pub async fn prompt_for_api_domain() -> Result<String, AppError> {
    println!("Please enter the directory service domain: ");
    read_trimmed_line().await
}

/// Prompts the user for the directory service credential.
///
/// The credential is read from stdin so it does not end up in shell history
/// the way a command-line value would.
pub async fn prompt_for_api_key() -> Result<String, AppError> {
    println!("Please enter your GolfCourseAPI key: ");
    read_trimmed_line().await
}

async fn read_trimmed_line() -> Result<String, AppError> {
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
