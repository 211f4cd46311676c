//! Bridge callback decoding.
//!
//! The embedded document reports player events by navigating to pseudo-URLs
//! under the reserved `ytplayer` scheme:
//!
//! ```text
//! ytplayer://onStateChange?data=1
//! ytplayer://onError?data=150
//! ytplayer://onPlayTime?data=12.5
//! ytplayer://onReady
//! ```
//!
//! The host part is the callback name; the payload is whatever follows the
//! last `=` of the query. Decoding is best-effort: anything malformed decodes
//! to nothing rather than to an error.
//!
//! # Callbacks
//!
//! | Name | Decoded event |
//! |------|---------------|
//! | `onReady` | [`PlayerEvent::Ready`] |
//! | `onStateChange` | [`PlayerEvent::StateChanged`] |
//! | `onPlaybackQualityChange` | [`PlayerEvent::QualityChanged`] |
//! | `onError` | [`PlayerEvent::Error`] |
//! | `onPlayTime` | [`PlayerEvent::PlayTime`], dropped if not numeric |
//! | `onYouTubeIframeAPIReady` | none |
//! | `onYouTubeIframeAPIFailedToLoad` | none |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use url::Url;

use super::event::PlayerEvent;
use super::types::{ErrorCode, PlaybackQuality, PlayerState};

// ============================================================================
// Constants
// ============================================================================

/// Reserved scheme of bridge callback URLs.
pub const BRIDGE_SCHEME: &str = "ytplayer";

// ============================================================================
// CallbackName
// ============================================================================

/// Callback names the embedded document may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackName {
    /// Player finished loading and accepts commands.
    OnReady,
    /// Player state changed.
    OnStateChange,
    /// Playback quality changed.
    OnPlaybackQualityChange,
    /// Player reported an error.
    OnError,
    /// Periodic playback time report.
    OnPlayTime,
    /// IFrame API script loaded.
    OnIframeApiReady,
    /// IFrame API script failed to load.
    OnIframeApiFailedToLoad,
}

impl CallbackName {
    /// Parses a callback name. Names are case-sensitive.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "onReady" => Some(Self::OnReady),
            "onStateChange" => Some(Self::OnStateChange),
            "onPlaybackQualityChange" => Some(Self::OnPlaybackQualityChange),
            "onError" => Some(Self::OnError),
            "onPlayTime" => Some(Self::OnPlayTime),
            "onYouTubeIframeAPIReady" => Some(Self::OnIframeApiReady),
            "onYouTubeIframeAPIFailedToLoad" => Some(Self::OnIframeApiFailedToLoad),
            _ => None,
        }
    }

    /// Returns the wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnReady => "onReady",
            Self::OnStateChange => "onStateChange",
            Self::OnPlaybackQualityChange => "onPlaybackQualityChange",
            Self::OnError => "onError",
            Self::OnPlayTime => "onPlayTime",
            Self::OnIframeApiReady => "onYouTubeIframeAPIReady",
            Self::OnIframeApiFailedToLoad => "onYouTubeIframeAPIFailedToLoad",
        }
    }
}

impl fmt::Display for CallbackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CallbackEvent
// ============================================================================

/// One parsed bridge callback.
///
/// Transient: produced from a single intercepted URL and consumed at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackEvent {
    /// Callback name (URL host).
    pub name: String,
    /// Raw payload, empty when the URL has no query.
    pub payload: String,
}

impl CallbackEvent {
    /// Parses a bridge callback URL.
    ///
    /// Returns `None` if the scheme is not [`BRIDGE_SCHEME`] or there is no
    /// host to name the callback.
    #[must_use]
    pub fn parse(url: &Url) -> Option<Self> {
        if url.scheme() != BRIDGE_SCHEME {
            return None;
        }

        let name = url.host_str().filter(|host| !host.is_empty())?;
        let payload = url.query().map(last_value).unwrap_or_default();

        Some(Self {
            name: name.to_string(),
            payload,
        })
    }

    /// Returns the recognized callback name, if any.
    #[inline]
    #[must_use]
    pub fn callback(&self) -> Option<CallbackName> {
        CallbackName::parse(&self.name)
    }

    /// Decodes the host-visible event this callback carries.
    ///
    /// Returns `None` for unrecognized names, for the IFrame API lifecycle
    /// callbacks and for play-time reports that are not finite numbers.
    #[must_use]
    pub fn decode(&self) -> Option<PlayerEvent> {
        match self.callback()? {
            CallbackName::OnReady => Some(PlayerEvent::Ready),
            CallbackName::OnStateChange => {
                Some(PlayerEvent::StateChanged(PlayerState::from_wire(&self.payload)))
            }
            CallbackName::OnPlaybackQualityChange => Some(PlayerEvent::QualityChanged(
                PlaybackQuality::from_wire(&self.payload),
            )),
            CallbackName::OnError => Some(PlayerEvent::Error(ErrorCode::from_wire(&self.payload))),
            CallbackName::OnPlayTime => self
                .payload
                .parse::<f64>()
                .ok()
                .filter(|seconds| seconds.is_finite())
                .map(PlayerEvent::PlayTime),
            CallbackName::OnIframeApiReady | CallbackName::OnIframeApiFailedToLoad => None,
        }
    }
}

/// Returns the text after the last `=`, percent-decoded.
///
/// A query without `=` is taken whole. Text that is not valid percent-encoded
/// UTF-8 is returned raw.
fn last_value(query: &str) -> String {
    let raw = query.rsplit('=').next().unwrap_or_default();
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

// ============================================================================
// Tests
// ============================================================================
