//! Persisted records and client-side form validation.

use crate::constants::{MESSAGE_MAX_CHARS, NAME_MAX_CHARS, RSVP_MAX_GUESTS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("name is required")]
    MissingName,
    #[error("message is required")]
    MissingMessage,
    #[error("name is longer than {0} characters")]
    NameTooLong(usize),
    #[error("message is longer than {0} characters")]
    MessageTooLong(usize),
    #[error("unknown attendance value: {0}")]
    UnknownAttendance(String),
    #[error("guest count must be between 1 and {0}")]
    GuestCount(u8),
}

fn clean_name(raw: &str) -> Result<String, FormError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FormError::MissingName);
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(FormError::NameTooLong(NAME_MAX_CHARS));
    }
    Ok(name.to_string())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub name: String,
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
    pub approved: bool,
    pub likes: u32,
}

impl Comment {
    /// Validate a comment form. `created_at` is assigned by the store.
    pub fn from_form(name: &str, message: &str) -> Result<Self, FormError> {
        let name = clean_name(name)?;
        let message = message.trim();
        if message.is_empty() {
            return Err(FormError::MissingMessage);
        }
        if message.chars().count() > MESSAGE_MAX_CHARS {
            return Err(FormError::MessageTooLong(MESSAGE_MAX_CHARS));
        }
        Ok(Self {
            name,
            message: message.to_string(),
            created_at: None,
            approved: true,
            likes: 0,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    Attending,
    NotAttending,
    Maybe,
}

impl Attendance {
    pub fn as_str(self) -> &'static str {
        match self {
            Attendance::Attending => "attending",
            Attendance::NotAttending => "not_attending",
            Attendance::Maybe => "maybe",
        }
    }

    pub fn parse(value: &str) -> Result<Self, FormError> {
        match value.trim() {
            "attending" | "hadir" => Ok(Attendance::Attending),
            "not_attending" | "tidak_hadir" => Ok(Attendance::NotAttending),
            "maybe" | "ragu" => Ok(Attendance::Maybe),
            other => Err(FormError::UnknownAttendance(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rsvp {
    pub name: String,
    pub guests: u8,
    pub attendance: Attendance,
    pub submitted_at: Option<DateTime<Utc>>,
    pub ip: Option<String>,
    pub user_agent: String,
}

impl Rsvp {
    /// Validate an RSVP form. Guests only count when attending.
    pub fn from_form(
        name: &str,
        guests: &str,
        attendance: &str,
        user_agent: &str,
    ) -> Result<Self, FormError> {
        let name = clean_name(name)?;
        let attendance = Attendance::parse(attendance)?;
        let guests = match attendance {
            Attendance::Attending => {
                let n: u8 = guests
                    .trim()
                    .parse()
                    .map_err(|_| FormError::GuestCount(RSVP_MAX_GUESTS))?;
                if n == 0 || n > RSVP_MAX_GUESTS {
                    return Err(FormError::GuestCount(RSVP_MAX_GUESTS));
                }
                n
            }
            Attendance::NotAttending | Attendance::Maybe => 0,
        };
        Ok(Self {
            name,
            guests,
            attendance,
            submitted_at: None,
            ip: None,
            user_agent: user_agent.to_string(),
        })
    }
}

/// Kinds of tracked interactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    PageView,
    OpenInvitation,
    RsvpSubmitted,
    CommentPosted,
    MusicToggled,
    ReachedEnd,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::PageView => "page_view",
            EventType::OpenInvitation => "open_invitation",
            EventType::RsvpSubmitted => "rsvp_submitted",
            EventType::CommentPosted => "comment_posted",
            EventType::MusicToggled => "music_toggled",
            EventType::ReachedEnd => "reached_end",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub event_type: EventType,
    pub guest_name: String,
    pub session_id: String,
    pub page_path: String,
    pub user_agent: String,
    pub screen_width: u32,
    pub client_ts: DateTime<Utc>,
}
