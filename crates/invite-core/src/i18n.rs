//! Static UI strings.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Id,
    En,
}

impl Lang {
    /// Parse a `lang` parameter or a BCP 47 tag such as `en-GB`.
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "id" | "in" => Some(Lang::Id),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// First recognized tag wins; Indonesian otherwise.
    pub fn detect(param: Option<&str>, navigator: Option<&str>) -> Self {
        param
            .and_then(Lang::parse)
            .or_else(|| navigator.and_then(Lang::parse))
            .unwrap_or_default()
    }
}

/// Look up `key`; unknown keys come back unchanged.
pub fn t(lang: Lang, key: &str) -> &str {
    let s = match (lang, key) {
        (Lang::Id, "open_invitation") => "Buka Undangan",
        (Lang::En, "open_invitation") => "Open Invitation",
        (Lang::Id, "loading") => "Memuat",
        (Lang::En, "loading") => "Loading",
        (Lang::Id, "dear") => "Kepada Yth.",
        (Lang::En, "dear") => "Dear",
        (Lang::Id, "event_title") => "Acara",
        (Lang::En, "event_title") => "The Event",
        (Lang::Id, "rsvp_title") => "Konfirmasi Kehadiran",
        (Lang::En, "rsvp_title") => "RSVP",
        (Lang::Id, "rsvp_thanks") => "Terima kasih atas konfirmasinya",
        (Lang::En, "rsvp_thanks") => "Thank you for your response",
        (Lang::Id, "gift_title") => "Tanda Kasih",
        (Lang::En, "gift_title") => "Wedding Gift",
        (Lang::Id, "copy") => "Salin",
        (Lang::En, "copy") => "Copy",
        (Lang::Id, "copied") => "Tersalin",
        (Lang::En, "copied") => "Copied",
        (Lang::Id, "comments_title") => "Ucapan & Doa",
        (Lang::En, "comments_title") => "Wishes",
        (Lang::Id, "comment_sent") => "Ucapan terkirim",
        (Lang::En, "comment_sent") => "Wish sent",
        (Lang::Id, "send_failed") => "Gagal mengirim, silakan coba lagi",
        (Lang::En, "send_failed") => "Could not send, please try again",
        (Lang::Id, "thanks_title") => "Terima Kasih",
        (Lang::En, "thanks_title") => "Thank You",
        (Lang::Id, "invalid_form") => "Mohon lengkapi formulir",
        (Lang::En, "invalid_form") => "Please complete the form",
        (Lang::Id, "reload") => "Muat ulang",
        (Lang::En, "reload") => "Reload",
        (Lang::Id, "not_found") => "Halaman tidak ditemukan",
        (Lang::En, "not_found") => "Page not found",
        (Lang::Id, "contact_sent") => "Pesan terkirim",
        (Lang::En, "contact_sent") => "Message sent",
        _ => return key,
    };
    s
}
