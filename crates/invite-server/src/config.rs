//! Configuration loading from the environment and optional `.env` files.

use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};

pub const DEFAULT_BIND_HTTP: &str = "127.0.0.1:3000";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Outbound mail relay settings. All four must be present to send mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    /// HTTPS endpoint of the transactional mail API.
    pub api_url: String,
    /// Bearer token for the mail API.
    pub api_key: String,
    /// Sender address.
    pub from: String,
    /// Recipient of contact-form messages.
    pub to: String,
}

/// Runtime settings derived from environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    /// HTTP bind address, e.g. `127.0.0.1:3000`.
    pub bind_http: SocketAddr,
    /// Directory holding `combined.log` and `error.log`.
    pub log_dir: PathBuf,
    /// Mail relay; `None` when any mail variable is missing.
    pub mail: Option<MailSettings>,
}

impl Settings {
    /// Load `.env` (or the file named by `ENV_FILE`) into the process
    /// environment, then read settings from it.
    pub fn load() -> Result<Self> {
        match env::var("ENV_FILE") {
            Ok(path) => {
                dotenvy::from_filename(&path).with_context(|| format!("reading env file {path}"))?;
            }
            Err(_) => {
                // a missing default .env is fine
                dotenvy::dotenv().ok();
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let bind_raw = non_empty("BIND_HTTP").unwrap_or_else(|| DEFAULT_BIND_HTTP.into());
        let bind_http: SocketAddr = bind_raw
            .parse()
            .with_context(|| format!("invalid BIND_HTTP: {bind_raw}"))?;
        let log_dir = PathBuf::from(non_empty("LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.into()));
        let mail = match (
            non_empty("MAIL_API_URL"),
            non_empty("MAIL_API_KEY"),
            non_empty("MAIL_FROM"),
            non_empty("MAIL_TO"),
        ) {
            (Some(api_url), Some(api_key), Some(from), Some(to)) => Some(MailSettings {
                api_url,
                api_key,
                from,
                to,
            }),
            _ => None,
        };
        Ok(Self {
            bind_http,
            log_dir,
            mail,
        })
    }
}
