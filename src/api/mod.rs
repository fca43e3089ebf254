//! # API Module
//!
//! This module provides the HTTP endpoints of the mood radio service.
//!
//! ## Endpoints
//!
//! ### Radio
//!
//! - [`tracks`] - Builds a shuffled mix of playable tracks for a mood. Accepts the
//!   `mood` (default `chill`) and `count` (default `10`) query parameters on both
//!   `GET` and `POST`. Responds with
//!   `{ success: true, mood, count, tracks: [...] }`, or with HTTP 500 and
//!   `{ success: false, error }` when the upstream search fails in a way that
//!   cannot be absorbed.
//! - [`preflight`] - `OPTIONS` on the tracks routes: HTTP 200, empty body.
//! - [`moods`] - Lists every supported mood with its search tags.
//!
//! ### Monitoring
//!
//! - [`health`] - Returns application status and version information.
//!
//! ## CORS
//!
//! [`cors_headers`] is applied as a response layer so every response carries
//! `Access-Control-Allow-Origin: *`, `Access-Control-Allow-Methods: GET, POST, OPTIONS`
//! and `Access-Control-Allow-Headers: Content-Type`.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use audius_radio::api::{health, tracks};
//!
//! let app = Router::new()
//!     .route("/tracks", get(tracks))
//!     .route("/health", get(health))
//!     .layer(Extension(catalog));
//! ```

mod cors;
mod health;
mod moods;
mod tracks;

pub use cors::cors_headers;
pub use health::health;
pub use moods::moods;
pub use tracks::{TracksQuery, preflight, tracks};
