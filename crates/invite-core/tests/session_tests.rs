use invite_core::i18n::{t, Lang};
use invite_core::NAME_MAX_CHARS;
use invite_core::route::Route;
use invite_core::session::{
    guest_name_from_param, is_valid_session_id, new_session_id, slugify, storage_key,
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn slugify_collapses_separators() {
    assert_eq!(slugify("Ahmad & Siti"), "ahmad-siti");
    assert_eq!(slugify("  Dr. Budi  Santoso "), "dr-budi-santoso");
    assert_eq!(slugify("***"), "");
    assert_eq!(slugify("Ça va"), "a-va");
}

#[test]
fn storage_key_per_guest() {
    assert_eq!(storage_key("Ahmad & Siti"), "session_ahmad-siti");
    assert_eq!(storage_key(""), "session_guest");
}

#[test]
fn session_ids_are_hex_and_distinct() {
    let mut rng = StdRng::seed_from_u64(1);
    let a = new_session_id(&mut rng);
    let b = new_session_id(&mut rng);
    assert!(is_valid_session_id(&a));
    assert!(is_valid_session_id(&b));
    assert_ne!(a, b);
    assert!(!is_valid_session_id("xyz"));
}

#[test]
fn guest_name_defaults() {
    assert_eq!(guest_name_from_param(None), "guest");
    assert_eq!(guest_name_from_param(Some("   ")), "guest");
    assert_eq!(guest_name_from_param(Some(" Ana ")), "Ana");
}

#[test]
fn long_guest_names_are_cut_to_the_form_limit() {
    let long = "é".repeat(NAME_MAX_CHARS + 40);
    let name = guest_name_from_param(Some(&long));
    assert_eq!(name.chars().count(), NAME_MAX_CHARS);
    let exact = "a".repeat(NAME_MAX_CHARS);
    assert_eq!(guest_name_from_param(Some(&exact)), exact);
}

#[test]
fn lang_detection_prefers_param() {
    assert_eq!(Lang::detect(Some("en"), Some("id-ID")), Lang::En);
    assert_eq!(Lang::detect(None, Some("en-US")), Lang::En);
    assert_eq!(Lang::detect(Some("xx"), None), Lang::Id);
    assert_eq!(t(Lang::Id, "open_invitation"), "Buka Undangan");
}

#[test]
fn routes() {
    assert_eq!(Route::from_path("/"), Route::Invitation);
    assert_eq!(Route::from_path(""), Route::Invitation);
    assert_eq!(Route::from_path("/portfolio/"), Route::Portfolio);
    assert_eq!(Route::from_path("/admin"), Route::NotFound);
    assert!(Route::Invitation.has_scene());
    assert!(!Route::Portfolio.has_scene());
    assert_eq!(Route::Portfolio.sections().len(), 4);
    assert!(Route::NotFound.sections().is_empty());
}
