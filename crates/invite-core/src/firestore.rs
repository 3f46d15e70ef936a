//! Firestore REST request bodies and response decoding.
//!
//! Only the pieces the site needs: single-document creates through
//! `documents:commit` (with a server-assigned timestamp transform) and a
//! `runQuery` listing of recent comments.

use crate::records::{Comment, Rsvp, TrackingEvent};
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde_json::{json, Map, Value};
use thiserror::Error;

pub const COMMENTS: &str = "comments";
pub const RSVPS: &str = "wedding_rsvps";
pub const TRACKING: &str = "tracking";
pub const PROBE: &str = "test";

const AUTO_ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const AUTO_ID_LEN: usize = 20;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),
    #[error("document {doc} is missing field `{field}`")]
    MissingField { doc: String, field: &'static str },
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub api_key: String,
}

impl FirestoreConfig {
    pub fn documents_root(&self) -> String {
        format!(
            "projects/{}/databases/(default)/documents",
            self.project_id
        )
    }

    fn endpoint(&self, method: &str) -> String {
        format!(
            "https://firestore.googleapis.com/v1/{}:{}?key={}",
            self.documents_root(),
            method,
            self.api_key
        )
    }

    pub fn commit_url(&self) -> String {
        self.endpoint("commit")
    }

    pub fn run_query_url(&self) -> String {
        self.endpoint("runQuery")
    }
}

/// Random 20-character document id in the style of the Firestore SDKs.
pub fn auto_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..AUTO_ID_LEN)
        .map(|_| AUTO_ID_ALPHABET[rng.gen_range(0..AUTO_ID_ALPHABET.len())] as char)
        .collect()
}

pub fn string_value(s: &str) -> Value {
    json!({ "stringValue": s })
}

pub fn integer_value(i: i64) -> Value {
    json!({ "integerValue": i.to_string() })
}

pub fn bool_value(b: bool) -> Value {
    json!({ "booleanValue": b })
}

pub fn timestamp_value(ts: &DateTime<Utc>) -> Value {
    json!({ "timestampValue": ts.to_rfc3339_opts(SecondsFormat::Millis, true) })
}

pub fn null_value() -> Value {
    json!({ "nullValue": null })
}

/// A record that can be written as one Firestore document.
pub trait Document {
    const COLLECTION: &'static str;
    /// Field set to the server's request time on write.
    const SERVER_TIMESTAMP: &'static str;

    fn fields(&self) -> Map<String, Value>;
}

impl Document for Comment {
    const COLLECTION: &'static str = COMMENTS;
    const SERVER_TIMESTAMP: &'static str = "createdAt";

    fn fields(&self) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("name".into(), string_value(&self.name));
        m.insert("message".into(), string_value(&self.message));
        m.insert("approved".into(), bool_value(self.approved));
        m.insert("likes".into(), integer_value(self.likes as i64));
        m
    }
}

impl Document for Rsvp {
    const COLLECTION: &'static str = RSVPS;
    const SERVER_TIMESTAMP: &'static str = "submittedAt";

    fn fields(&self) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("name".into(), string_value(&self.name));
        m.insert("guests".into(), integer_value(self.guests as i64));
        m.insert("attendance".into(), string_value(self.attendance.as_str()));
        m.insert(
            "ip".into(),
            self.ip.as_deref().map(string_value).unwrap_or_else(null_value),
        );
        m.insert("userAgent".into(), string_value(&self.user_agent));
        m
    }
}

impl Document for TrackingEvent {
    const COLLECTION: &'static str = TRACKING;
    const SERVER_TIMESTAMP: &'static str = "createdAt";

    fn fields(&self) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("eventType".into(), string_value(self.event_type.as_str()));
        m.insert("guestName".into(), string_value(&self.guest_name));
        m.insert("sessionId".into(), string_value(&self.session_id));
        m.insert("pagePath".into(), string_value(&self.page_path));
        m.insert("userAgent".into(), string_value(&self.user_agent));
        m.insert("screenWidth".into(), integer_value(self.screen_width as i64));
        m.insert("clientTs".into(), timestamp_value(&self.client_ts));
        m
    }
}

/// Connectivity probe written to the `test` collection.
#[derive(Clone, Debug)]
pub struct Probe {
    pub client_ts: DateTime<Utc>,
}

impl Document for Probe {
    const COLLECTION: &'static str = PROBE;
    const SERVER_TIMESTAMP: &'static str = "createdAt";

    fn fields(&self) -> Map<String, Value> {
        let mut m = Map::new();
        m.insert("message".into(), string_value("probe"));
        m.insert("clientTs".into(), timestamp_value(&self.client_ts));
        m
    }
}

/// `documents:commit` body creating `doc` under a new id.
pub fn commit_body<D: Document>(cfg: &FirestoreConfig, doc_id: &str, doc: &D) -> Value {
    json!({
        "writes": [{
            "update": {
                "name": format!("{}/{}/{}", cfg.documents_root(), D::COLLECTION, doc_id),
                "fields": Value::Object(doc.fields()),
            },
            "updateTransforms": [{
                "fieldPath": D::SERVER_TIMESTAMP,
                "setToServerValue": "REQUEST_TIME",
            }],
            "currentDocument": { "exists": false },
        }]
    })
}

/// `runQuery` body for the newest comments.
pub fn recent_comments_query(limit: u32) -> Value {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": COMMENTS }],
            "orderBy": [{
                "field": { "fieldPath": "createdAt" },
                "direction": "DESCENDING",
            }],
            "limit": limit,
        }
    })
}

fn field<'a>(fields: &'a Value, key: &str) -> Option<&'a Value> {
    fields.get(key)
}

fn get_string(fields: &Value, key: &str) -> Option<String> {
    field(fields, key)?
        .get("stringValue")?
        .as_str()
        .map(str::to_string)
}

fn get_bool(fields: &Value, key: &str) -> Option<bool> {
    field(fields, key)?.get("booleanValue")?.as_bool()
}

fn get_integer(fields: &Value, key: &str) -> Option<i64> {
    let v = field(fields, key)?.get("integerValue")?;
    // integers arrive as decimal strings, but tolerate plain numbers
    v.as_str()
        .and_then(|s| s.parse().ok())
        .or_else(|| v.as_i64())
}

fn get_timestamp(fields: &Value, key: &str) -> Option<DateTime<Utc>> {
    let s = field(fields, key)?.get("timestampValue")?.as_str()?;
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Decode one Firestore document into a [`Comment`].
pub fn decode_comment(doc: &Value) -> Result<Comment, StoreError> {
    let name = doc
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let fields = doc.get("fields").ok_or(StoreError::Shape("document without fields"))?;
    let missing = |field: &'static str| StoreError::MissingField {
        doc: name.clone(),
        field,
    };
    Ok(Comment {
        name: get_string(fields, "name").ok_or_else(|| missing("name"))?,
        message: get_string(fields, "message").ok_or_else(|| missing("message"))?,
        created_at: get_timestamp(fields, "createdAt"),
        approved: get_bool(fields, "approved").unwrap_or(false),
        likes: get_integer(fields, "likes")
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
    })
}

/// Decode a `runQuery` response into approved comments, newest first as
/// returned by the store. Malformed documents are skipped.
pub fn decode_comments(body: &str) -> Result<Vec<Comment>, StoreError> {
    let value: Value = serde_json::from_str(body)?;
    let rows = value
        .as_array()
        .ok_or(StoreError::Shape("runQuery response is not an array"))?;
    let comments = rows
        .iter()
        .filter_map(|row| row.get("document"))
        .filter_map(|doc| match decode_comment(doc) {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("[store] skipping comment: {}", e);
                None
            }
        })
        .filter(|c| c.approved)
        .collect();
    Ok(comments)
}
