//! Share-link to direct-download URL rewriting.
//!
//! Google Drive hands out several share URL shapes that open a viewer page rather than the
//! file. `normalize` recognises them and rewrites the embedded file ID into the
//! `uc?export=download` form, which serves the bytes directly.

use std::sync::LazyLock;

use regex::Regex;

/// Host and path every recognised share link is rewritten to.
const DIRECT_DOWNLOAD_BASE: &str = "https://drive.google.com/uc?export=download&id=";

/// Share-link shapes, tried in order. The first capture group is the file ID.
static SHARE_LINK_RULES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r"https://drive\.google\.com/file/d/([a-zA-Z0-9_-]+)",
        r"https://drive\.google\.com/open\?id=([a-zA-Z0-9_-]+)",
        r"https://docs\.google\.com/.*?/d/([a-zA-Z0-9_-]+)",
    ]
    .map(|pattern| Regex::new(pattern).expect("share link pattern is valid"))
});

/// Rewrites a share URL into a direct-download URL.
///
/// The first rule that matches anywhere in `raw` decides the result; later rules are not
/// consulted. Input no rule recognises is returned unchanged, on the assumption that it is
/// already a direct link. The output of a successful rewrite matches none of the rules, so
/// normalizing twice gives the same result as normalizing once.
///
/// # Arguments
/// - `raw` - URL as the user supplied it
///
/// # Returns
/// - `String` - `https://drive.google.com/uc?export=download&id=<id>` or `raw` unchanged
pub fn normalize(raw: &str) -> String {
    SHARE_LINK_RULES
        .iter()
        .find_map(|rule| rule.captures(raw))
        .and_then(|captures| captures.get(1))
        .map(|file_id| format!("{}{}", DIRECT_DOWNLOAD_BASE, file_id.as_str()))
        .unwrap_or_else(|| raw.to_string())
}
