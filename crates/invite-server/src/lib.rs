//! Small HTTP service next to the static site: appends browser log reports
//! to NDJSON files and relays portfolio contact messages by mail.

pub mod config;
pub mod logsink;
pub mod mail;
pub mod server;

pub use config::Settings;
pub use server::{router, serve_http, AppState};
