//! LinkOpener port - Interface for leaving the page.
//!
//! Used for the prefilled `mailto:` draft and the appointment booking page.

use url::Url;

/// Where an opened link should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    /// Replace the current location (mail client hand-off).
    SameWindow,
    /// Open alongside the current page (booking page).
    NewWindow,
}

/// Errors that can occur while opening a link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkOpenError {
    #[error("Unsupported link scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Link was blocked: {0}")]
    Blocked(String),
}

/// Port for opening external links.
pub trait LinkOpener: Send + Sync {
    /// Opens `url` in the given target.
    ///
    /// # Errors
    ///
    /// Returns `LinkOpenError` if the environment refuses the link.
    fn open(&self, url: &Url, target: LinkTarget) -> Result<(), LinkOpenError>;
}
