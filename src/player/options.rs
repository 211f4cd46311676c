//! Player configuration options.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use ytplayer_bridge::PlayerOptions;
//!
//! let options = PlayerOptions::new()
//!     .with_query_timeout(Duration::from_secs(2))
//!     .with_default_size("640", "360");
//!
//! assert_eq!(options.default_width, "640");
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::time::Duration;

use crate::protocol::params::DEFAULT_DIMENSION;

use super::assets::EMBED_HTML_TEMPLATE;

// ============================================================================
// PlayerOptions
// ============================================================================

/// Bridge configuration that does not involve host collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerOptions {
    /// Upper bound on how long a query waits for its result.
    ///
    /// `None` waits forever; a query whose completion is never invoked then
    /// stays pending.
    pub query_timeout: Option<Duration>,

    /// `width` used when load parameters carry none.
    pub default_width: String,

    /// `height` used when load parameters carry none.
    pub default_height: String,

    /// Embed document template; must contain the `%@` placeholder once.
    pub template: String,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl PlayerOptions {
    /// Creates options with no query timeout, full-size dimensions and the
    /// built-in template.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query_timeout: None,
            default_width: DEFAULT_DIMENSION.to_string(),
            default_height: DEFAULT_DIMENSION.to_string(),
            template: EMBED_HTML_TEMPLATE.to_string(),
        }
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl PlayerOptions {
    /// Sets the query timeout.
    #[inline]
    #[must_use]
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = Some(timeout);
        self
    }

    /// Sets the default player dimensions.
    #[inline]
    #[must_use]
    pub fn with_default_size(
        mut self,
        width: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        self.default_width = width.into();
        self.default_height = height.into();
        self
    }

    /// Replaces the embed template.
    #[inline]
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
