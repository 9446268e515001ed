//! The normalized track record shared by every subsystem.
//!
//! Tracks are produced by the catalog adapter, selected in the UI, stored
//! in the session history and handed to the player. The shape must
//! round-trip through storage unchanged, so keep it plain serde data.

use serde::{Deserialize, Serialize};

/// Shown when a result carries no usable title.
pub const FALLBACK_TITLE: &str = "Unknown Title";
/// Shown when a result carries no artist information.
pub const FALLBACK_ARTIST: &str = "Unknown Artist";
/// Artwork placeholder for results without an image variant.
pub const FALLBACK_IMAGE: &str = "/fallback.jpg";

/// A playable item as the rest of the application sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Opaque identifier, unique within one result set.
    pub id: String,
    /// Artwork URL (placeholder when the API had none).
    pub image: String,
    pub title: String,
    /// Artist list, joined for display.
    pub subtitle: String,
    /// Audio stream URL. `None` means the track cannot be played and the
    /// UI must keep its play affordance disabled.
    pub audio: Option<String>,
}

impl Track {
    pub fn is_playable(&self) -> bool {
        self.audio.is_some()
    }
}
