use async_trait::async_trait;
use invite_server::{
    logsink::{LogEntry, LogSink, COMBINED_FILE, ERROR_FILE},
    mail::{ContactMessage, MailError, Mailer},
    router, AppState,
};
use serde_json::{json, Value};
use std::{
    net::SocketAddr,
    path::Path,
    sync::{Arc, Mutex},
};
use tempfile::TempDir;
use tokio::task::JoinHandle;

#[derive(Clone, Default)]
struct RecordingMailer {
    sent: Arc<Mutex<Vec<ContactMessage>>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

struct RejectingMailer;

#[async_trait]
impl Mailer for RejectingMailer {
    async fn send(&self, _message: &ContactMessage) -> Result<(), MailError> {
        Err(MailError::Rejected(502))
    }
}

async fn spawn(dir: &Path, mailer: Box<dyn Mailer>) -> (SocketAddr, JoinHandle<()>) {
    let state = Arc::new(AppState {
        sink: LogSink::new(dir),
        mailer,
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router(state).into_make_service())
            .await
            .unwrap();
    });
    (addr, handle)
}

async fn post(addr: SocketAddr, path: &str, body: Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("http://{}{}", addr, path))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let body: Value = resp.json().await.unwrap();
    (status, body)
}

fn read_lines(path: &Path) -> Vec<LogEntry> {
    std::fs::read_to_string(path)
        .unwrap_or_default()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[tokio::test]
async fn health_is_ok() {
    let dir = TempDir::new().unwrap();
    let (addr, handle) = spawn(dir.path(), Box::new(RejectingMailer)).await;
    let body: Value = reqwest::get(format!("http://{}/healthz", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    handle.abort();
}

#[tokio::test]
async fn info_log_is_appended_to_combined() {
    let dir = TempDir::new().unwrap();
    let (addr, handle) = spawn(dir.path(), Box::new(RejectingMailer)).await;
    let (status, body) = post(
        addr,
        "/api/log",
        json!({ "level": "info", "message": "opened", "context": { "guest": "Ana" } }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let combined = read_lines(&dir.path().join(COMBINED_FILE));
    assert_eq!(combined.len(), 1);
    assert_eq!(combined[0].message, "opened");
    assert_eq!(combined[0].context.as_ref().unwrap()["guest"], "Ana");
    assert!(combined[0].timestamp.is_some());
    assert!(!dir.path().join(ERROR_FILE).exists());
    handle.abort();
}

#[tokio::test]
async fn error_level_is_partitioned() {
    let dir = TempDir::new().unwrap();
    let (addr, handle) = spawn(dir.path(), Box::new(RejectingMailer)).await;
    post(addr, "/api/log", json!({ "level": "ERROR", "message": "boom" })).await;
    post(
        addr,
        "/api/log/error",
        json!({ "level": "info", "message": "panic", "error": { "stack": "at x" } }),
    )
    .await;
    post(addr, "/api/log", json!({ "message": "default level" })).await;

    let errors = read_lines(&dir.path().join(ERROR_FILE));
    let combined = read_lines(&dir.path().join(COMBINED_FILE));
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.level == "error"));
    assert_eq!(combined.len(), 3);
    assert_eq!(combined[2].level, "info");
    handle.abort();
}

#[tokio::test]
async fn log_without_message_is_rejected() {
    let dir = TempDir::new().unwrap();
    let (addr, handle) = spawn(dir.path(), Box::new(RejectingMailer)).await;
    let (status, body) = post(addr, "/api/log", json!({ "level": "info" })).await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    handle.abort();
}

#[tokio::test]
async fn responses_are_same_origin_only() {
    let dir = TempDir::new().unwrap();
    let (addr, handle) = spawn(dir.path(), Box::new(RejectingMailer)).await;
    let client = reqwest::Client::new();
    for body in [json!({ "message": "ok" }), json!({ "level": "info" })] {
        let resp = client
            .post(format!("http://{}/api/log", addr))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert!(
            resp.headers().get("access-control-allow-origin").is_none(),
            "status {}",
            resp.status()
        );
    }
    handle.abort();
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let dir = TempDir::new().unwrap();
    let (addr, handle) = spawn(dir.path(), Box::new(RejectingMailer)).await;
    let resp = reqwest::Client::new()
        .post(format!("http://{}/api/log", addr))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    handle.abort();
}

#[tokio::test]
async fn contact_is_relayed() {
    let dir = TempDir::new().unwrap();
    let mailer = RecordingMailer::default();
    let (addr, handle) = spawn(dir.path(), Box::new(mailer.clone())).await;
    let (status, body) = post(
        addr,
        "/api/contact",
        json!({ "name": "Rina", "email": "rina@example.com", "message": "Hello!" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, "rina@example.com");
    assert!(sent[0].text_body().contains("Hello!"));
    handle.abort();
}

#[tokio::test]
async fn contact_missing_fields_is_400() {
    let dir = TempDir::new().unwrap();
    let mailer = RecordingMailer::default();
    let (addr, handle) = spawn(dir.path(), Box::new(mailer.clone())).await;
    let (status, body) = post(
        addr,
        "/api/contact",
        json!({ "name": "Rina", "email": "  ", "message": "Hello" }),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Missing required fields");
    assert!(mailer.sent.lock().unwrap().is_empty());
    handle.abort();
}

#[tokio::test]
async fn contact_relay_failure_is_500() {
    let dir = TempDir::new().unwrap();
    let (addr, handle) = spawn(dir.path(), Box::new(RejectingMailer)).await;
    let (status, body) = post(
        addr,
        "/api/contact",
        json!({ "name": "Rina", "email": "rina@example.com", "message": "Hello" }),
    )
    .await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    handle.abort();
}
