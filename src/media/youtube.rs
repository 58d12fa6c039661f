//! YouTube video id extraction.

use regex::Regex;
use std::sync::LazyLock;

/// `?v=` / `&v=` query parameter of a watch URL.
static WATCH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([A-Za-z0-9_-]{6,})").unwrap());

/// Short-link, embed, and shorts URL shapes.
static PATH_FORMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|youtube\.com/(?:embed/|shorts/))([A-Za-z0-9_-]{6,})").unwrap()
});

/// A bare video id with no URL around it.
static BARE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{6,}$").unwrap());

/// Extract the video id from a demo-video reference, if one is recognizable.
///
/// Accepts watch URLs (`?v=` parameter), `youtu.be`/`embed`/`shorts` URLs,
/// or a raw id. First matching form wins; anything else yields `None`.
pub fn video_id(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }
    if let Some(captures) = WATCH_PARAM.captures(url) {
        return Some(captures[1].to_owned());
    }
    if let Some(captures) = PATH_FORMS.captures(url) {
        return Some(captures[1].to_owned());
    }
    if BARE_ID.is_match(url) {
        return Some(url.to_owned());
    }
    None
}
