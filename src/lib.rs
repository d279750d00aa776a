//! Spotify Top Tracks Library
//!
//! This library implements a small personal web service: it logs a single user
//! in with Spotify's authorization-code flow, collects their long-term top
//! tracks, keeps the latest set in a snapshot store and renders it as HTML.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the web server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by every layer
//! - `logging` - `tracing` subscriber setup
//! - `management` - Top tracks collection and snapshot storage
//! - `server` - Router, shared state and server startup
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use toptracks::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> toptracks::Res<()> {
//!     config::load_env().await?;
//!     cli::serve(None, false).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Boxed error result used by the binary and the CLI commands.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a console line prefixed with a blue `o`.
///
/// ```
/// info!("Found {} tracks for {}", count, user_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a console line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and exits the process with status 1.
///
/// Only for startup failures the service cannot run without, such as an
/// unreachable snapshot database.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a console line prefixed with a yellow `!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
