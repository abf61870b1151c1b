//! Movie locators and registry entries.

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::service::locator;

/// Where a movie's bytes come from.
///
/// The registry file stores plain strings. Anything with an `http://` or `https://` scheme is
/// a hosted link; everything else is taken as a path on the machine running the bot. The
/// original string is kept so a load/save cycle writes back exactly what was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locator {
    /// A URL served by a remote host, usually a Google Drive share link.
    HostedLink(String),
    /// A media file on the local filesystem.
    LocalPath(PathBuf),
}

impl Locator {
    /// Classifies a raw locator string, trimming surrounding whitespace first.
    pub fn parse(raw: &str) -> Self {
        Self::from(raw.trim().to_string())
    }

    /// Returns the direct-fetch form of this locator.
    ///
    /// Hosted links go through the share-link normalizer; local paths are returned as-is.
    pub fn stream_source(&self) -> String {
        match self {
            Self::HostedLink(url) => locator::normalize(url.trim()),
            Self::LocalPath(path) => path.to_string_lossy().into_owned(),
        }
    }

    pub fn is_hosted(&self) -> bool {
        matches!(self, Self::HostedLink(_))
    }
}

impl From<String> for Locator {
    /// Classifies without modifying the text so a load/save cycle is byte-for-byte stable.
    fn from(raw: String) -> Self {
        let scheme = raw
            .trim_start()
            .chars()
            .take(8)
            .collect::<String>()
            .to_ascii_lowercase();
        if scheme.starts_with("https://") || scheme.starts_with("http://") {
            Self::HostedLink(raw)
        } else {
            Self::LocalPath(PathBuf::from(raw))
        }
    }
}

impl From<Locator> for String {
    fn from(locator: Locator) -> Self {
        match locator {
            Locator::HostedLink(url) => url,
            Locator::LocalPath(path) => path.to_string_lossy().into_owned(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostedLink(url) => f.write_str(url),
            Self::LocalPath(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A registry entry: the display name a movie was added under and its locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieEntry {
    pub name: String,
    pub locator: Locator,
}
