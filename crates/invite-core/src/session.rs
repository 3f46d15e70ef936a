//! Guest sessions for event tracking.

use crate::constants::NAME_MAX_CHARS;
use rand::Rng;

const SESSION_PREFIX: &str = "session_";
const SESSION_ID_BYTES: usize = 8;
pub const ANONYMOUS_GUEST: &str = "guest";

/// Lowercase ASCII slug: alphanumerics kept, every other run collapsed to a
/// single `-`, no leading or trailing dashes.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

/// Local-storage key holding a guest's session id.
pub fn storage_key(guest_name: &str) -> String {
    let slug = slugify(guest_name);
    if slug.is_empty() {
        format!("{}{}", SESSION_PREFIX, ANONYMOUS_GUEST)
    } else {
        format!("{}{}", SESSION_PREFIX, slug)
    }
}

/// Random 16-hex-character session id.
pub fn new_session_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; SESSION_ID_BYTES];
    rng.fill(&mut bytes[..]);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn is_valid_session_id(id: &str) -> bool {
    id.len() == SESSION_ID_BYTES * 2 && id.chars().all(|c| c.is_ascii_hexdigit())
}

/// Guest display name from the `to` query parameter, already URL-decoded.
pub fn guest_name_from_param(param: Option<&str>) -> String {
    match param.map(str::trim) {
        Some(name) if !name.is_empty() => name.chars().take(NAME_MAX_CHARS).collect(),
        _ => ANONYMOUS_GUEST.to_string(),
    }
}
