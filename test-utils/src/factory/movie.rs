//! Sample movie registry data.

use crate::factory::helpers::next_id;

/// Builds a Google Drive "file/d" share URL for the given file ID.
pub fn drive_share_url(file_id: &str) -> String {
    format!("https://drive.google.com/file/d/{}/view?usp=sharing", file_id)
}

/// Builds the direct-download URL a share link for `file_id` normalizes into.
pub fn drive_download_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={}", file_id)
}

/// Generates a unique Drive-like file ID.
pub fn unique_file_id() -> String {
    format!("file_{}-id", next_id())
}

/// A small registry in a fixed insertion order.
///
/// The order is deliberately not alphabetical so tests can tell insertion order apart from
/// sorted order.
pub fn sample_movies() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Superman",
            "https://drive.google.com/file/d/superman1/view?usp=sharing",
        ),
        (
            "The Matrix",
            "https://drive.google.com/open?id=matrix99",
        ),
        (
            "Alien",
            "https://docs.google.com/uc/d/alien_42/edit",
        ),
        ("superman returns", "/srv/movies/superman-returns.mkv"),
        ("Batman Begins", "https://example.com/batman.mp4"),
    ]
}
