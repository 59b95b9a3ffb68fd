//! User interaction and prompts for configuration setup
//!
//! Used on first run, when no config file exists yet.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for a TheBlueAlliance read key and returns the trimmed input.
///
/// An empty answer is accepted; FTC commands work without a key and FRC
/// commands report `MissingApiKey` later.
///
/// # Example
/// ```no_run
/// use robostats::config::user_prompts::prompt_for_tba_api_key;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let key = prompt_for_tba_api_key().await?;
/// println!("Got {} characters", key.len());
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_tba_api_key() -> Result<String, AppError> {
    println!("Please enter your TheBlueAlliance read API key (leave empty to skip): ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
