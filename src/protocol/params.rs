//! Embed load parameters.
//!
//! The parameter object is serialized into the embed template and handed to
//! the player constructor. It is an ordered JSON map; [`LoadParameters::finalize`]
//! applies the fixed keys:
//!
//! - `events` is always replaced by the bridge callback mapping
//! - `height` and `width` default to `"100%"` only when absent
//! - `playerVars` is inserted as `{}` when absent
//!
//! # Format
//!
//! ```json
//! {
//!   "videoId": "M7lc1UVf-VE",
//!   "playerVars": { "playsinline": 1, "origin": "https://example.com" },
//!   "height": "100%",
//!   "width": "100%",
//!   "events": {
//!     "onReady": "onReady",
//!     "onStateChange": "onStateChange",
//!     "onPlaybackQualityChange": "onPlaybackQualityChange",
//!     "onError": "onError"
//!   }
//! }
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::Serialize;
use serde_json::{Map, Value, json};
use url::Url;

use super::callback::CallbackName;

// ============================================================================
// Constants
// ============================================================================

/// Default player height and width.
pub const DEFAULT_DIMENSION: &str = "100%";

/// Callbacks advertised to the player through `events`.
const ADVERTISED_EVENTS: [CallbackName; 4] = [
    CallbackName::OnReady,
    CallbackName::OnStateChange,
    CallbackName::OnPlaybackQualityChange,
    CallbackName::OnError,
];

// ============================================================================
// Types
// ============================================================================

/// `playerVars` sub-mapping.
pub type PlayerVars = Map<String, Value>;

// ============================================================================
// LoadParameters
// ============================================================================

/// Parameters for (re)initializing the embedded player document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LoadParameters {
    map: Map<String, Value>,
}

impl LoadParameters {
    /// Creates empty parameters.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for a single video.
    #[must_use]
    pub fn video(video_id: impl Into<String>, player_vars: PlayerVars) -> Self {
        Self::new()
            .with("videoId", video_id.into())
            .with("playerVars", player_vars)
    }

    /// Parameters for a playlist.
    ///
    /// `listType` and `list` are written first so caller-supplied vars can
    /// override them.
    #[must_use]
    pub fn playlist(playlist_id: impl Into<String>, player_vars: PlayerVars) -> Self {
        let mut vars = PlayerVars::new();
        vars.insert("listType".into(), json!("playlist"));
        vars.insert("list".into(), json!(playlist_id.into()));
        vars.extend(player_vars);

        Self::new().with("playerVars", vars)
    }

    /// Sets a top-level parameter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map.insert(key.into(), value.into());
        self
    }

    /// Returns a top-level parameter.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Returns the `playerVars` mapping, if it is an object.
    #[inline]
    #[must_use]
    pub fn player_vars(&self) -> Option<&PlayerVars> {
        self.map.get("playerVars").and_then(Value::as_object)
    }

    /// Returns the origin declared in `playerVars.origin`.
    ///
    /// Missing, non-string or unparseable origins yield `None`.
    #[must_use]
    pub fn origin(&self) -> Option<Url> {
        self.player_vars()?
            .get("origin")?
            .as_str()
            .and_then(|origin| Url::parse(origin).ok())
    }

    /// Applies the fixed keys, using `"100%"` for missing dimensions.
    #[must_use]
    pub fn finalize(self) -> Self {
        self.finalize_with(DEFAULT_DIMENSION, DEFAULT_DIMENSION)
    }

    /// Applies the fixed keys with explicit default dimensions.
    #[must_use]
    pub fn finalize_with(mut self, default_width: &str, default_height: &str) -> Self {
        self.map
            .entry("height")
            .or_insert_with(|| json!(default_height));
        self.map
            .entry("width")
            .or_insert_with(|| json!(default_width));
        self.map
            .entry("playerVars")
            .or_insert_with(|| Value::Object(PlayerVars::new()));
        self.map.insert("events".into(), events_mapping());
        self
    }

    /// Serializes to pretty-printed JSON for template substitution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.map)?)
    }
}

impl From<Map<String, Value>> for LoadParameters {
    fn from(map: Map<String, Value>) -> Self {
        Self { map }
    }
}

/// `events` mapping advertising the bridge callbacks.
fn events_mapping() -> Value {
    let events = ADVERTISED_EVENTS
        .iter()
        .map(|name| (name.as_str().to_string(), json!(name.as_str())))
        .collect::<Map<_, _>>();
    Value::Object(events)
}

// ============================================================================
// Tests
// ============================================================================
