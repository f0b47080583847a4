//! HR attendance and records service.
//!
//! Two surfaces share this crate: the HTTP API (health, records, notes,
//! uploads, clock-in/out) served by the binary, and the client-interaction
//! layer (leave form, attendance strings, activity log panel) the browser
//! drafts implemented in page script. They only meet through the store.

pub mod activity_log;
pub mod attendance;
pub mod config;
pub mod database;
pub mod error;
pub mod handler;
pub mod leave;
pub mod model;
pub mod portal;
pub mod request;
pub mod response;
pub mod route;
pub mod validate;

use crate::{config::Config, database::Database};

/// Shared request state: the owned persistence handle plus the startup
/// configuration. Cloned nowhere; handlers see it behind an `Arc`.
pub struct AppState {
    pub db: Database,
    pub config: Config,
}
