//! Webserver library for the check-in tracker
//!
//! Exposes the dashboard read model and the check-in operation over HTTP.

pub mod error;
pub mod state;
pub mod types;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::{CheckInRequest, CheckInResponse};
pub use webserver_impl::WebServer;
