//! # CLI Module
//!
//! Command implementations of the `toptracks` binary.
//!
//! - [`serve`] - runs the web server that drives the login, collection and
//!   rendering of a user's top tracks
//! - [`history`] - prints a stored snapshot from the terminal, or lists the
//!   users that have one
//!
//! Shell completions are generated directly in `main.rs`.

mod history;
mod serve;

pub use history::history;
pub use serve::serve;
