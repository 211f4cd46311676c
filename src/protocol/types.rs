//! Enumerated player domain types.
//!
//! Every type decodes leniently: [`from_wire`](PlayerState::from_wire) is
//! total and maps anything it does not recognize onto `Unknown`, because the
//! embedded player may emit values from a newer or larger set than modelled
//! here.
//!
//! | Type | Wire form |
//! |------|-----------|
//! | [`PlayerState`] | numeric string (`"-1"`, `"0"`, `"1"`, ...) |
//! | [`PlaybackQuality`] | lowercase token (`"hd720"`, `"auto"`, ...) |
//! | [`ErrorCode`] | numeric string, several codes per variant |

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// PlayerState
// ============================================================================

/// Playback state reported by the embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    /// Not started yet (`-1`).
    Unstarted,
    /// Playback ended (`0`).
    Ended,
    /// Playing (`1`).
    Playing,
    /// Paused (`2`).
    Paused,
    /// Buffering (`3`).
    Buffering,
    /// Video cued (`5`).
    Cued,
    /// Anything the bridge does not recognize.
    #[default]
    Unknown,
}

impl PlayerState {
    /// All variants with a wire representation.
    pub const KNOWN: [PlayerState; 6] = [
        Self::Unstarted,
        Self::Ended,
        Self::Playing,
        Self::Paused,
        Self::Buffering,
        Self::Cued,
    ];

    /// Decodes a wire state code. Never fails.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "-1" => Self::Unstarted,
            "0" => Self::Ended,
            "1" => Self::Playing,
            "2" => Self::Paused,
            "3" => Self::Buffering,
            "5" => Self::Cued,
            _ => Self::Unknown,
        }
    }

    /// Decodes a numeric state code.
    #[inline]
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        Self::from_wire(&code.to_string())
    }

    /// Returns the wire code, or `None` for [`PlayerState::Unknown`].
    #[must_use]
    pub fn to_wire(&self) -> Option<&'static str> {
        match self {
            Self::Unstarted => Some("-1"),
            Self::Ended => Some("0"),
            Self::Playing => Some("1"),
            Self::Paused => Some("2"),
            Self::Buffering => Some("3"),
            Self::Cued => Some("5"),
            Self::Unknown => None,
        }
    }

    /// Returns a readable name.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unstarted => "unstarted",
            Self::Ended => "ended",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Buffering => "buffering",
            Self::Cued => "cued",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PlayerState {
    fn from(value: &str) -> Self {
        Self::from_wire(value)
    }
}

// ============================================================================
// PlaybackQuality
// ============================================================================

/// Playback quality level.
///
/// Also used as the `suggestedQuality` argument of load and cue commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackQuality {
    /// `small`
    Small,
    /// `medium`
    Medium,
    /// `large`
    Large,
    /// `hd720`
    Hd720,
    /// `hd1080`
    Hd1080,
    /// `highres`
    HighRes,
    /// `auto`
    Auto,
    /// `default`; lets the player choose.
    #[default]
    Default,
    /// Anything the bridge does not recognize.
    Unknown,
}

impl PlaybackQuality {
    /// All variants with a wire representation.
    pub const KNOWN: [PlaybackQuality; 8] = [
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Hd720,
        Self::Hd1080,
        Self::HighRes,
        Self::Auto,
        Self::Default,
    ];

    /// Decodes a wire quality token. Never fails.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            "hd720" => Self::Hd720,
            "hd1080" => Self::Hd1080,
            "highres" => Self::HighRes,
            "auto" => Self::Auto,
            "default" => Self::Default,
            _ => Self::Unknown,
        }
    }

    /// Returns the wire token, or `None` for [`PlaybackQuality::Unknown`].
    #[inline]
    #[must_use]
    pub fn to_wire(&self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            known => Some(known.as_str()),
        }
    }

    /// Returns the token sent in outbound commands.
    ///
    /// [`PlaybackQuality::Unknown`] has no wire token and is sent as
    /// `"default"`, letting the player pick.
    #[inline]
    #[must_use]
    pub fn to_wire_or_default(&self) -> &'static str {
        self.to_wire().unwrap_or("default")
    }

    /// Returns the display token; `"unknown"` for [`PlaybackQuality::Unknown`].
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Hd720 => "hd720",
            Self::Hd1080 => "hd1080",
            Self::HighRes => "highres",
            Self::Auto => "auto",
            Self::Default => "default",
            Self::Unknown => "unknown",
        }
    }

    /// Decodes a comma-joined list, keeping order, duplicates and unknowns.
    ///
    /// An empty string is an empty list.
    #[must_use]
    pub fn list_from_wire(joined: &str) -> Vec<Self> {
        if joined.is_empty() {
            return Vec::new();
        }
        joined.split(',').map(Self::from_wire).collect()
    }
}

impl fmt::Display for PlaybackQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PlaybackQuality {
    fn from(value: &str) -> Self {
        Self::from_wire(value)
    }
}

impl Serialize for PlaybackQuality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlaybackQuality {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

// ============================================================================
// ErrorCode
// ============================================================================

/// Playback error reported by the embedded player.
///
/// Several wire codes collapse onto one variant:
///
/// | Codes | Variant |
/// |-------|---------|
/// | `2` | [`ErrorCode::InvalidParam`] |
/// | `5` | [`ErrorCode::Html5Error`] |
/// | `100`, `105` | [`ErrorCode::VideoNotFound`] |
/// | `101`, `150` | [`ErrorCode::NotEmbeddable`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCode {
    /// The request contained an invalid parameter value.
    InvalidParam,
    /// The HTML5 player failed.
    Html5Error,
    /// The video was removed or is private.
    VideoNotFound,
    /// The owner does not allow embedded playback.
    NotEmbeddable,
    /// Anything the bridge does not recognize.
    #[default]
    Unknown,
}

impl ErrorCode {
    /// Decodes a wire error code. Never fails.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "2" => Self::InvalidParam,
            "5" => Self::Html5Error,
            "100" | "105" => Self::VideoNotFound,
            "101" | "150" => Self::NotEmbeddable,
            _ => Self::Unknown,
        }
    }

    /// Returns the canonical wire code, or `None` for [`ErrorCode::Unknown`].
    #[must_use]
    pub fn to_wire(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParam => Some("2"),
            Self::Html5Error => Some("5"),
            Self::VideoNotFound => Some("100"),
            Self::NotEmbeddable => Some("101"),
            Self::Unknown => None,
        }
    }

    /// Returns a readable name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidParam => "invalid_param",
            Self::Html5Error => "html5_error",
            Self::VideoNotFound => "video_not_found",
            Self::NotEmbeddable => "not_embeddable",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ErrorCode {
    fn from(value: &str) -> Self {
        Self::from_wire(value)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn state_wire() -> Vec<&'static str> {
        PlayerState::KNOWN.iter().filter_map(PlayerState::to_wire).collect()
    }

    fn quality_wire() -> Vec<&'static str> {
        PlaybackQuality::KNOWN
            .iter()
            .filter_map(PlaybackQuality::to_wire)
            .collect()
    }

    const ERROR_WIRE: [&str; 6] = ["2", "5", "100", "101", "105", "150"];

    #[test]
    fn test_state_round_trip() {
        assert_eq!(state_wire(), ["-1", "0", "1", "2", "3", "5"]);
        for wire in state_wire() {
            assert_eq!(PlayerState::from_wire(wire).to_wire(), Some(wire));
        }
        assert_eq!(PlayerState::Unknown.to_wire(), None);
    }

    #[test]
    fn test_state_from_code() {
        assert_eq!(PlayerState::from_code(1), PlayerState::Playing);
        assert_eq!(PlayerState::from_code(-1), PlayerState::Unstarted);
        assert_eq!(PlayerState::from_code(4), PlayerState::Unknown);
    }

    #[test]
    fn test_quality_round_trip() {
        assert_eq!(
            quality_wire(),
            ["small", "medium", "large", "hd720", "hd1080", "highres", "auto", "default"]
        );
        for wire in quality_wire() {
            assert_eq!(PlaybackQuality::from_wire(wire).to_wire(), Some(wire));
        }
        assert_eq!(PlaybackQuality::Unknown.to_wire(), None);
    }

    #[test]
    fn test_quality_outbound_token() {
        for quality in PlaybackQuality::KNOWN {
            assert_eq!(Some(quality.to_wire_or_default()), quality.to_wire());
        }
        assert_eq!(PlaybackQuality::Unknown.to_wire_or_default(), "default");
        assert_eq!(PlaybackQuality::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_quality_is_case_sensitive() {
        assert_eq!(PlaybackQuality::from_wire("HD720"), PlaybackQuality::Unknown);
    }

    #[test]
    fn test_quality_list() {
        assert_eq!(
            PlaybackQuality::list_from_wire("small,large,bogus"),
            vec![
                PlaybackQuality::Small,
                PlaybackQuality::Large,
                PlaybackQuality::Unknown
            ]
        );
        assert_eq!(
            PlaybackQuality::list_from_wire("auto,auto"),
            vec![PlaybackQuality::Auto, PlaybackQuality::Auto]
        );
        assert!(PlaybackQuality::list_from_wire("").is_empty());
    }

    #[test]
    fn test_quality_serde() {
        let json = serde_json::to_string(&PlaybackQuality::Hd1080).expect("serialize");
        assert_eq!(json, "\"hd1080\"");

        let parsed: PlaybackQuality = serde_json::from_str("\"tiny\"").expect("deserialize");
        assert_eq!(parsed, PlaybackQuality::Unknown);
    }

    #[test]
    fn test_error_code_collapsing() {
        assert_eq!(ErrorCode::from_wire("100"), ErrorCode::VideoNotFound);
        assert_eq!(ErrorCode::from_wire("105"), ErrorCode::VideoNotFound);
        assert_eq!(ErrorCode::from_wire("101"), ErrorCode::NotEmbeddable);
        assert_eq!(ErrorCode::from_wire("150"), ErrorCode::NotEmbeddable);
        assert_eq!(ErrorCode::from_wire("2"), ErrorCode::InvalidParam);
        assert_eq!(ErrorCode::from_wire("5"), ErrorCode::Html5Error);
    }

    #[test]
    fn test_error_code_canonical_wire() {
        for wire in ERROR_WIRE {
            let code = ErrorCode::from_wire(wire);
            let canonical = code.to_wire().expect("known code");
            assert_eq!(ErrorCode::from_wire(canonical), code);
        }
    }

    proptest! {
        #[test]
        fn prop_state_unknown_outside_wire_set(s in ".*") {
            prop_assume!(!state_wire().contains(&s.as_str()));
            prop_assert_eq!(PlayerState::from_wire(&s), PlayerState::Unknown);
        }

        #[test]
        fn prop_quality_unknown_outside_wire_set(s in ".*") {
            prop_assume!(!quality_wire().contains(&s.as_str()));
            prop_assert_eq!(PlaybackQuality::from_wire(&s), PlaybackQuality::Unknown);
        }

        #[test]
        fn prop_error_code_unknown_outside_wire_set(s in ".*") {
            prop_assume!(!ERROR_WIRE.contains(&s.as_str()));
            prop_assert_eq!(ErrorCode::from_wire(&s), ErrorCode::Unknown);
        }
    }
}
