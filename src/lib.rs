//! Audius Mood Radio Library
//!
//! This library gathers playable tracks from the Audius catalog by mood. A mood
//! maps to a handful of search tags; tracks found for those tags are
//! deduplicated, resolved to stream URLs and returned as a shuffled mix, either
//! over HTTP or from the command line.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints and the CORS response layer
//! - `audius` - Audius API client behind the `Catalog` trait
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `mood` - The mood to search tag table
//! - `radio` - Mood mix aggregation
//! - `server` - Router assembly and HTTP serving
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use audius_radio::{audius::AudiusClient, config, radio};
//!
//! #[tokio::main]
//! async fn main() -> audius_radio::Res<()> {
//!     config::load_env().await?;
//!     let catalog = AudiusClient::from_env()?;
//!     let tracks = radio::mix(&catalog, "happy", 5).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod audius;
pub mod cli;
pub mod config;
pub mod mood;
pub mod radio;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it can
/// travel across async boundaries.
///
/// # Example
///
/// ```
/// use audius_radio::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Using Audius API at {}", api_url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits with code 1.
///
/// Only for fatal problems while starting up. Request handlers must report
/// failures through their response instead.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems, including the failure path of a request.
///
/// # Example
///
/// ```
/// warning!("Audius API error: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
