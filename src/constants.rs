/// Front-end tuning constants and page element ids.
///
/// Ids must match the static page markup; numeric values express intended
/// behavior (ramp times, scale factors) and keep magic numbers out of the code.

// Cover overlay
pub const COVER_ID: &str = "cover";
pub const COVER_PROGRESS_ID: &str = "cover-progress";
pub const COVER_PROGRESS_LABEL_ID: &str = "cover-progress-label";
pub const OPEN_BUTTON_ID: &str = "open-invitation";
pub const GUEST_NAME_ID: &str = "guest-name";

// Scene and content layers
pub const SCENE_VIEWPORT_ID: &str = "scene";
pub const SCENE_LAYER_ID: &str = "scene-layer";
pub const SCROLL_PROGRESS_ID: &str = "scroll-progress";

// Fallback view
pub const FATAL_FALLBACK_ID: &str = "fatal-fallback";
pub const FATAL_RELOAD_ID: &str = "fatal-reload";
pub const FATAL_MESSAGE_ID: &str = "fatal-message";

// Music
pub const MUSIC_SRC: &str = "assets/audio/backsound.mp3";
pub const MUSIC_TOGGLE_ID: &str = "music-toggle";
pub const MUSIC_VOLUME: f32 = 0.6;
pub const MUSIC_FADE_IN_SEC: f64 = 2.5;
pub const MUSIC_TOGGLE_RAMP_SEC: f64 = 0.35;

// RSVP form
pub const RSVP_NAME_ID: &str = "rsvp-name";
pub const RSVP_GUESTS_ID: &str = "rsvp-guests";
pub const RSVP_ATTENDANCE_ID: &str = "rsvp-attendance";
pub const RSVP_SUBMIT_ID: &str = "rsvp-submit";
pub const RSVP_STATUS_ID: &str = "rsvp-status";

// Comment form and list
pub const COMMENT_NAME_ID: &str = "comment-name";
pub const COMMENT_MESSAGE_ID: &str = "comment-message";
pub const COMMENT_SUBMIT_ID: &str = "comment-submit";
pub const COMMENT_STATUS_ID: &str = "comment-status";
pub const COMMENT_LIST_ID: &str = "comment-list";
pub const COMMENTS_PAGE_SIZE: u32 = 30;

// Gift section: buttons carry `data-copy="<account number>"`
pub const COPY_BUTTON_SELECTOR: &str = "[data-copy]";
pub const COPY_FEEDBACK_MS: i32 = 1_800;

// Portfolio contact form
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_STATUS_ID: &str = "contact-status";

// Page configuration
pub const META_FIREBASE_PROJECT: &str = "firebase-project-id";
pub const META_FIREBASE_API_KEY: &str = "firebase-api-key";
pub const I18N_ATTR: &str = "data-i18n";

// Endpoints served by invite-server
pub const LOG_ENDPOINT: &str = "/api/log";
pub const ERROR_LOG_ENDPOINT: &str = "/api/log/error";
pub const CONTACT_ENDPOINT: &str = "/api/contact";
pub const IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";

// Input
pub const TOUCH_DRAG_GAIN: f32 = 1.6; // touch travel is amplified relative to wheel pixels
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches

// Scene projection: world units to CSS pixels
pub const SCENE_UNIT_PX: f32 = 120.0;

// Tracking fires once when the scroll reaches this percent
pub const REACHED_END_PERCENT: f32 = 96.0;
