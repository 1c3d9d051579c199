//! Link opener that records instead of navigating.

use std::sync::{PoisonError, RwLock};

use url::Url;

use crate::ports::{LinkOpenError, LinkOpener, LinkTarget};

/// Accepts `mailto` and `https` links and remembers them.
///
/// `block_all` makes every open fail, for exercising refusal paths.
#[derive(Debug, Default)]
pub struct RecordingLinkOpener {
    opened: RwLock<Vec<(Url, LinkTarget)>>,
    blocked: bool,
}

impl RecordingLinkOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an opener that refuses every link.
    pub fn block_all() -> Self {
        Self {
            opened: RwLock::default(),
            blocked: true,
        }
    }

    /// Every link opened, in order.
    pub fn opened(&self) -> Vec<(Url, LinkTarget)> {
        self.opened
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recently opened link.
    pub fn last_opened(&self) -> Option<(Url, LinkTarget)> {
        self.opened().pop()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&self, url: &Url, target: LinkTarget) -> Result<(), LinkOpenError> {
        if self.blocked {
            return Err(LinkOpenError::Blocked(url.scheme().to_string()));
        }
        match url.scheme() {
            "mailto" | "https" => {
                self.opened
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push((url.clone(), target));
                Ok(())
            }
            other => Err(LinkOpenError::UnsupportedScheme(other.to_string())),
        }
    }
}
