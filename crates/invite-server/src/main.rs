use std::sync::Arc;

use invite_server::{logsink::LogSink, mail, serve_http, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Settings::load()?;
    log::info!(
        "invite-server starting: bind={} log_dir={} mail={}",
        cfg.bind_http,
        cfg.log_dir.display(),
        if cfg.mail.is_some() { "on" } else { "off" }
    );

    let state = Arc::new(AppState {
        sink: LogSink::new(cfg.log_dir.clone()),
        mailer: mail::mailer_from(cfg.mail.clone()),
    });

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("failed to listen for ctrl-c: {}", e);
        }
        log::info!("shutting down");
    };
    serve_http(cfg.bind_http, state, shutdown).await
}
