// Form validation and the Firestore document shapes written by the site.

use chrono::{TimeZone, Utc};
use invite_core::firestore::{
    commit_body, decode_comments, recent_comments_query, Document, FirestoreConfig, COMMENTS,
    RSVPS,
};
use invite_core::{Attendance, Comment, EventType, FormError, Rsvp, TrackingEvent};

fn cfg() -> FirestoreConfig {
    FirestoreConfig {
        project_id: "wedding-demo".into(),
        api_key: "k123".into(),
    }
}

#[test]
fn comment_requires_name_and_message() {
    assert_eq!(Comment::from_form("  ", "hi"), Err(FormError::MissingName));
    assert_eq!(Comment::from_form("Ana", " \n"), Err(FormError::MissingMessage));
    let c = Comment::from_form("  Ana ", " Selamat! ").unwrap();
    assert_eq!(c.name, "Ana");
    assert_eq!(c.message, "Selamat!");
    assert!(c.approved);
    assert_eq!(c.likes, 0);
    assert!(c.created_at.is_none());
}

#[test]
fn comment_length_limits() {
    let long_name = "x".repeat(61);
    assert_eq!(
        Comment::from_form(&long_name, "hi"),
        Err(FormError::NameTooLong(60))
    );
    let long_msg = "y".repeat(501);
    assert_eq!(
        Comment::from_form("Ana", &long_msg),
        Err(FormError::MessageTooLong(500))
    );
}

#[test]
fn rsvp_guests_only_count_when_attending() {
    let r = Rsvp::from_form("Budi", "3", "attending", "ua").unwrap();
    assert_eq!(r.guests, 3);
    assert_eq!(r.attendance, Attendance::Attending);

    let r = Rsvp::from_form("Budi", "3", "not_attending", "ua").unwrap();
    assert_eq!(r.guests, 0);

    let r = Rsvp::from_form("Budi", "", "maybe", "ua").unwrap();
    assert_eq!(r.guests, 0);
}

#[test]
fn rsvp_rejects_bad_input() {
    assert_eq!(
        Rsvp::from_form("Budi", "0", "attending", "ua"),
        Err(FormError::GuestCount(5))
    );
    assert_eq!(
        Rsvp::from_form("Budi", "9", "attending", "ua"),
        Err(FormError::GuestCount(5))
    );
    assert_eq!(
        Rsvp::from_form("Budi", "two", "attending", "ua"),
        Err(FormError::GuestCount(5))
    );
    assert!(matches!(
        Rsvp::from_form("Budi", "1", "later", "ua"),
        Err(FormError::UnknownAttendance(_))
    ));
}

#[test]
fn commit_body_creates_with_server_timestamp() {
    let c = Comment::from_form("Ana", "Selamat").unwrap();
    let body = commit_body(&cfg(), "abc", &c);
    let write = &body["writes"][0];
    assert_eq!(
        write["update"]["name"],
        "projects/wedding-demo/databases/(default)/documents/comments/abc"
    );
    assert_eq!(write["update"]["fields"]["name"]["stringValue"], "Ana");
    assert_eq!(write["update"]["fields"]["approved"]["booleanValue"], true);
    assert_eq!(write["update"]["fields"]["likes"]["integerValue"], "0");
    assert_eq!(write["updateTransforms"][0]["fieldPath"], "createdAt");
    assert_eq!(write["updateTransforms"][0]["setToServerValue"], "REQUEST_TIME");
    assert_eq!(write["currentDocument"]["exists"], false);
}

#[test]
fn rsvp_document_fields() {
    let mut r = Rsvp::from_form("Budi", "2", "attending", "Mozilla/5.0").unwrap();
    assert_eq!(<Rsvp as Document>::COLLECTION, RSVPS);
    let fields = r.fields();
    assert_eq!(fields["attendance"]["stringValue"], "attending");
    assert_eq!(fields["guests"]["integerValue"], "2");
    assert!(fields["ip"].get("nullValue").is_some());
    r.ip = Some("203.0.113.9".into());
    assert_eq!(r.fields()["ip"]["stringValue"], "203.0.113.9");
}

#[test]
fn tracking_document_fields() {
    let ev = TrackingEvent {
        event_type: EventType::PageView,
        guest_name: "Ana".into(),
        session_id: "0011223344556677".into(),
        page_path: "/".into(),
        user_agent: "ua".into(),
        screen_width: 390,
        client_ts: Utc.with_ymd_and_hms(2026, 5, 2, 9, 30, 0).unwrap(),
    };
    let fields = ev.fields();
    assert_eq!(fields["eventType"]["stringValue"], "page_view");
    assert_eq!(fields["screenWidth"]["integerValue"], "390");
    assert_eq!(
        fields["clientTs"]["timestampValue"],
        "2026-05-02T09:30:00.000Z"
    );
}

#[test]
fn recent_comments_query_orders_by_creation() {
    let q = recent_comments_query(50);
    let sq = &q["structuredQuery"];
    assert_eq!(sq["from"][0]["collectionId"], COMMENTS);
    assert_eq!(sq["orderBy"][0]["field"]["fieldPath"], "createdAt");
    assert_eq!(sq["orderBy"][0]["direction"], "DESCENDING");
    assert_eq!(sq["limit"], 50);
}

#[test]
fn decode_skips_unapproved_and_malformed() {
    let body = r#"[
        {"document": {"name": "c/1", "fields": {
            "name": {"stringValue": "Ana"},
            "message": {"stringValue": "Barakallah"},
            "approved": {"booleanValue": true},
            "likes": {"integerValue": "4"},
            "createdAt": {"timestampValue": "2026-05-01T10:00:00.123456Z"}
        }}},
        {"document": {"name": "c/2", "fields": {
            "name": {"stringValue": "Hidden"},
            "message": {"stringValue": "x"},
            "approved": {"booleanValue": false}
        }}},
        {"document": {"name": "c/3", "fields": {
            "message": {"stringValue": "no name"},
            "approved": {"booleanValue": true}
        }}},
        {"readTime": "2026-05-01T10:00:01Z"}
    ]"#;
    let comments = decode_comments(body).unwrap();
    assert_eq!(comments.len(), 1);
    let c = &comments[0];
    assert_eq!(c.name, "Ana");
    assert_eq!(c.likes, 4);
    assert!(c.created_at.is_some());
}

#[test]
fn decode_rejects_non_array() {
    assert!(decode_comments(r#"{"error": {"code": 403}}"#).is_err());
    assert!(decode_comments("not json").is_err());
}

#[test]
fn urls_carry_api_key() {
    let c = cfg();
    assert_eq!(
        c.commit_url(),
        "https://firestore.googleapis.com/v1/projects/wedding-demo/databases/(default)/documents:commit?key=k123"
    );
    assert!(c.run_query_url().contains("documents:runQuery?key=k123"));
}
