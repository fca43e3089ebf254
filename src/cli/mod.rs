//! # CLI Module
//!
//! Command implementations for the `audius-radio` binary.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the HTTP service (see [`crate::server`])
//! - [`tracks`] - Builds one mood mix and prints it as a table, optionally opening
//!   the first track's embed player in the browser
//! - [`moods`] - Prints the supported moods and their search tags
//!
//! ## Usage Patterns
//!
//! ```bash
//! audius-radio serve --addr 0.0.0.0:8080
//! audius-radio tracks --mood happy --count 5
//! audius-radio tracks --mood focus --open
//! audius-radio moods
//! ```
//!
//! Fatal problems are reported with the `error!` macro, which exits the process.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

mod moods;
mod serve;
mod tracks;

pub use moods::moods;
pub use serve::serve;
pub use tracks::tracks;

pub(crate) fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
