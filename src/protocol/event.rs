//! Host-visible player notifications.
//!
//! Every notification the bridge delivers to the host is one [`PlayerEvent`].
//! All but [`PlayerEvent::OpenExternalLink`] originate from decoded bridge
//! callbacks; external links come from the navigation classifier.

// ============================================================================
// Imports
// ============================================================================

use url::Url;

use super::types::{ErrorCode, PlaybackQuality, PlayerState};

// ============================================================================
// PlayerEvent
// ============================================================================

/// A notification for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// The player is ready to accept commands.
    Ready,

    /// Playback state changed.
    StateChanged(PlayerState),

    /// Playback quality changed.
    QualityChanged(PlaybackQuality),

    /// The player reported a playback error.
    Error(ErrorCode),

    /// Current playback time in seconds.
    PlayTime(f64),

    /// The embedded document tried to open a link outside the player.
    OpenExternalLink(Url),
}

impl PlayerEvent {
    /// Returns a short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::StateChanged(_) => "state_changed",
            Self::QualityChanged(_) => "quality_changed",
            Self::Error(_) => "error",
            Self::PlayTime(_) => "play_time",
            Self::OpenExternalLink(_) => "open_external_link",
        }
    }
}
