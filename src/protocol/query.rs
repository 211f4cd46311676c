//! Player query definitions and result decoding.
//!
//! A query evaluates one accessor script and decodes the raw result. Decoding
//! is total: a transport failure or a result of the wrong shape produces the
//! type's default instead of an error.
//!
//! | Query | Decoded as | Default |
//! |-------|------------|---------|
//! | `getCurrentTime`, `getDuration`, `getVideoLoadedFraction` | `f64` | `0.0` |
//! | `getPlayerState` | [`PlayerState`] | `Unknown` |
//! | `getPlaybackQuality` | [`PlaybackQuality`] | `Unknown` |
//! | `isMuted` | `bool` | `false` |
//! | `getVolume`, `getPlaylistIndex` | `i64` | `0` |
//! | `getVideoUrl` | `Option<Url>` | `None` |
//! | `getVideoEmbedCode` | `Option<String>` | `None` |
//! | `getPlaylist` | `Option<Vec<String>>` | `None` |
//! | `getAvailableQualityLevels` | `Vec<PlaybackQuality>` | empty |

// ============================================================================
// Imports
// ============================================================================

use serde_json::Value;
use url::Url;

use crate::error::Result;

use super::command::PLAYER_OBJECT;
use super::types::{PlaybackQuality, PlayerState};

// ============================================================================
// PlayerQuery
// ============================================================================

/// A read-only accessor on the embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerQuery {
    /// Elapsed playback time in seconds.
    CurrentTime,
    /// Video duration in seconds.
    Duration,
    /// Current [`PlayerState`].
    PlayerState,
    /// Current [`PlaybackQuality`].
    PlaybackQuality,
    /// Whether audio is muted.
    IsMuted,
    /// Volume, `0..=100`.
    Volume,
    /// YouTube URL of the current video.
    VideoUrl,
    /// Embed code of the current video.
    VideoEmbedCode,
    /// Video ids of the current playlist.
    Playlist,
    /// Index of the current playlist entry.
    PlaylistIndex,
    /// Buffered fraction, `0.0..=1.0`.
    VideoLoadedFraction,
    /// Quality levels the current video offers.
    AvailableQualityLevels,
}

impl PlayerQuery {
    /// Returns the player method name.
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Self::CurrentTime => "getCurrentTime",
            Self::Duration => "getDuration",
            Self::PlayerState => "getPlayerState",
            Self::PlaybackQuality => "getPlaybackQuality",
            Self::IsMuted => "isMuted",
            Self::Volume => "getVolume",
            Self::VideoUrl => "getVideoUrl",
            Self::VideoEmbedCode => "getVideoEmbedCode",
            Self::Playlist => "getPlaylist",
            Self::PlaylistIndex => "getPlaylistIndex",
            Self::VideoLoadedFraction => "getVideoLoadedFraction",
            Self::AvailableQualityLevels => "getAvailableQualityLevels",
        }
    }

    /// Renders the query as a script expression.
    ///
    /// Quality levels are joined on the script side so the result crosses
    /// the bridge as a single string.
    #[must_use]
    pub fn to_script(&self) -> String {
        match self {
            Self::AvailableQualityLevels => {
                format!("{PLAYER_OBJECT}.{}().toString();", self.method())
            }
            _ => format!("{PLAYER_OBJECT}.{}();", self.method()),
        }
    }
}

// ============================================================================
// Decoders
// ============================================================================

/// Decodes a numeric result, `0.0` on failure.
#[must_use]
pub fn decode_f64(raw: Result<Value>) -> f64 {
    raw.ok().and_then(|v| v.as_f64()).unwrap_or_default()
}

/// Decodes an integer result, `0` on failure.
///
/// Integral floats such as `3.0` are accepted since script engines do not
/// distinguish the two.
#[must_use]
pub fn decode_i64(raw: Result<Value>) -> i64 {
    raw.ok().as_ref().and_then(value_as_i64).unwrap_or_default()
}

/// Decodes a boolean result, `false` on failure.
#[must_use]
pub fn decode_bool(raw: Result<Value>) -> bool {
    raw.ok().and_then(|v| v.as_bool()).unwrap_or_default()
}

/// Decodes a state code given as a number or numeric string.
#[must_use]
pub fn decode_player_state(raw: Result<Value>) -> PlayerState {
    match raw {
        Ok(Value::String(code)) => PlayerState::from_wire(&code),
        Ok(ref value) => value_as_i64(value)
            .map(PlayerState::from_code)
            .unwrap_or_default(),
        Err(_) => PlayerState::Unknown,
    }
}

/// Decodes a quality token, `Unknown` on failure.
#[must_use]
pub fn decode_playback_quality(raw: Result<Value>) -> PlaybackQuality {
    match raw {
        Ok(Value::String(token)) => PlaybackQuality::from_wire(&token),
        _ => PlaybackQuality::Unknown,
    }
}

/// Decodes a string result, `None` on failure.
#[must_use]
pub fn decode_string(raw: Result<Value>) -> Option<String> {
    match raw {
        Ok(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Decodes a URL string, `None` on failure or if it does not parse.
#[must_use]
pub fn decode_url(raw: Result<Value>) -> Option<Url> {
    decode_string(raw).and_then(|s| Url::parse(&s).ok())
}

/// Decodes a comma-joined quality list, empty on failure.
#[must_use]
pub fn decode_quality_levels(raw: Result<Value>) -> Vec<PlaybackQuality> {
    match raw {
        Ok(Value::String(joined)) => PlaybackQuality::list_from_wire(&joined),
        _ => Vec::new(),
    }
}

/// Decodes a playlist.
///
/// Tries a native array of strings first, then a string holding a JSON array
/// of strings.
#[must_use]
pub fn decode_playlist(raw: Result<Value>) -> Option<Vec<String>> {
    match raw.ok()? {
        Value::Array(items) => string_array(items),
        Value::String(encoded) => match serde_json::from_str::<Value>(&encoded).ok()? {
            Value::Array(items) => string_array(items),
            _ => None,
        },
        _ => None,
    }
}

/// Collects an array whose every element is a string.
fn string_array(items: Vec<Value>) -> Option<Vec<String>> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

fn value_as_i64(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::error::Error;

    fn transport_error() -> Result<Value> {
        Err(Error::script_error("player is not defined"))
    }

    #[test]
    fn test_query_scripts() {
        assert_eq!(
            PlayerQuery::CurrentTime.to_script(),
            "player.getCurrentTime();"
        );
        assert_eq!(PlayerQuery::IsMuted.to_script(), "player.isMuted();");
        assert_eq!(
            PlayerQuery::AvailableQualityLevels.to_script(),
            "player.getAvailableQualityLevels().toString();"
        );
    }

    #[test]
    fn test_transport_error_defaults() {
        assert_eq!(decode_f64(transport_error()), 0.0);
        assert!(!decode_bool(transport_error()));
        assert_eq!(decode_i64(transport_error()), 0);
        assert_eq!(decode_playlist(transport_error()), None);
        assert_eq!(decode_url(transport_error()), None);
        assert_eq!(decode_string(transport_error()), None);
        assert_eq!(decode_player_state(transport_error()), PlayerState::Unknown);
        assert_eq!(
            decode_playback_quality(transport_error()),
            PlaybackQuality::Unknown
        );
        assert!(decode_quality_levels(transport_error()).is_empty());
    }

    #[test]
    fn test_shape_mismatch_defaults() {
        assert_eq!(decode_f64(Ok(json!("12.5"))), 0.0);
        assert!(!decode_bool(Ok(json!(1))));
        assert_eq!(decode_i64(Ok(json!(2.5))), 0);
        assert_eq!(decode_url(Ok(json!("not a url"))), None);
        assert_eq!(decode_playback_quality(Ok(json!(720))), PlaybackQuality::Unknown);
        assert_eq!(decode_player_state(Ok(Value::Null)), PlayerState::Unknown);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(decode_f64(Ok(json!(12.5))), 12.5);
        assert_eq!(decode_f64(Ok(json!(3))), 3.0);
        assert_eq!(decode_i64(Ok(json!(4))), 4);
        assert_eq!(decode_i64(Ok(json!(4.0))), 4);
        assert!(decode_bool(Ok(json!(true))));
    }

    #[test]
    fn test_player_state() {
        assert_eq!(decode_player_state(Ok(json!(1))), PlayerState::Playing);
        assert_eq!(decode_player_state(Ok(json!(-1))), PlayerState::Unstarted);
        assert_eq!(decode_player_state(Ok(json!("2"))), PlayerState::Paused);
        assert_eq!(decode_player_state(Ok(json!(9))), PlayerState::Unknown);
    }

    #[test]
    fn test_playback_quality() {
        assert_eq!(
            decode_playback_quality(Ok(json!("hd1080"))),
            PlaybackQuality::Hd1080
        );
    }

    #[test]
    fn test_quality_levels() {
        assert_eq!(
            decode_quality_levels(Ok(json!("small,large,bogus"))),
            vec![
                PlaybackQuality::Small,
                PlaybackQuality::Large,
                PlaybackQuality::Unknown
            ]
        );
        assert!(decode_quality_levels(Ok(json!(""))).is_empty());
    }

    #[test]
    fn test_playlist_native_array() {
        assert_eq!(
            decode_playlist(Ok(json!(["a", "b"]))),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_playlist_json_string() {
        assert_eq!(
            decode_playlist(Ok(json!("[\"a\",\"b\"]"))),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_playlist_rejects_mixed_or_garbage() {
        assert_eq!(decode_playlist(Ok(json!(["a", 1]))), None);
        assert_eq!(decode_playlist(Ok(json!("a,b"))), None);
        assert_eq!(decode_playlist(Ok(json!("{\"a\":1}"))), None);
        assert_eq!(decode_playlist(Ok(Value::Null)), None);
    }

    #[test]
    fn test_video_url() {
        let url = decode_url(Ok(json!("https://www.youtube.com/watch?v=abc")));
        assert_eq!(
            url.map(|u| u.to_string()),
            Some("https://www.youtube.com/watch?v=abc".to_string())
        );
    }
}
