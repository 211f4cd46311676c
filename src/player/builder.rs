//! Builder pattern for player configuration.
//!
//! Provides a fluent API for wiring a [`Player`] to its host collaborators.
//!
//! # Example
//!
//! ```
//! use ytplayer_bridge::{Player, transport};
//! use url::Url;
//!
//! # fn example() -> ytplayer_bridge::Result<()> {
//! let (executor, _host) = transport::channel();
//! let player = Player::builder()
//!     .executor(executor)
//!     .page_loader(|_html: &str, _base: &Url| -> ytplayer_bridge::Result<()> { Ok(()) })
//!     .allow_pattern("cdn", r"^https://cdn\.example\.net/(.*)$")
//!     .build()?;
//! # let _ = player;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};
use crate::navigation::{AllowPattern, NavigationClassifier};
use crate::transport::{LinkOpener, LogLinkOpener, PageLoader, ScriptExecutor};

use super::assets::validate_template;
use super::core::Player;
use super::delegate::PlayerDelegate;
use super::options::PlayerOptions;

// ============================================================================
// PlayerBuilder
// ============================================================================

/// Builder for configuring a [`Player`].
///
/// Use [`Player::builder()`] to create a new builder. An executor and a page
/// loader are required.
pub struct PlayerBuilder {
    /// Script evaluation.
    executor: Option<Arc<dyn ScriptExecutor>>,
    /// Embed document loading.
    page_loader: Option<Arc<dyn PageLoader>>,
    /// External link fallback.
    link_opener: Option<Arc<dyn LinkOpener>>,
    /// Initial delegate.
    delegate: Option<Arc<dyn PlayerDelegate>>,
    /// Options.
    options: PlayerOptions,
    /// Extra allow-list entries as (description, pattern).
    patterns: Vec<(String, String)>,
    /// Whether the built-in allow-list is included.
    default_patterns: bool,
}

impl fmt::Debug for PlayerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerBuilder")
            .field("executor", &self.executor.is_some())
            .field("page_loader", &self.page_loader.is_some())
            .field("link_opener", &self.link_opener.is_some())
            .field("delegate", &self.delegate.is_some())
            .field("options", &self.options)
            .field("patterns", &self.patterns)
            .field("default_patterns", &self.default_patterns)
            .finish()
    }
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// PlayerBuilder Implementation
// ============================================================================

impl PlayerBuilder {
    /// Creates a builder with default options and the built-in allow-list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            executor: None,
            page_loader: None,
            link_opener: None,
            delegate: None,
            options: PlayerOptions::new(),
            patterns: Vec::new(),
            default_patterns: true,
        }
    }

    /// Sets the script executor.
    #[inline]
    #[must_use]
    pub fn executor(mut self, executor: impl ScriptExecutor + 'static) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    /// Sets the page loader.
    #[inline]
    #[must_use]
    pub fn page_loader(mut self, loader: impl PageLoader + 'static) -> Self {
        self.page_loader = Some(Arc::new(loader));
        self
    }

    /// Sets the link opener used when no delegate is attached.
    ///
    /// Defaults to [`LogLinkOpener`].
    #[inline]
    #[must_use]
    pub fn link_opener(mut self, opener: impl LinkOpener + 'static) -> Self {
        self.link_opener = Some(Arc::new(opener));
        self
    }

    /// Sets the initial delegate.
    #[inline]
    #[must_use]
    pub fn delegate<D: PlayerDelegate + 'static>(mut self, delegate: Arc<D>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    /// Replaces all options.
    #[inline]
    #[must_use]
    pub fn options(mut self, options: PlayerOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the query timeout.
    #[inline]
    #[must_use]
    pub fn query_timeout(mut self, timeout: Duration) -> Self {
        self.options.query_timeout = Some(timeout);
        self
    }

    /// Replaces the embed template. It must contain `%@` exactly once.
    #[inline]
    #[must_use]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.options.template = template.into();
        self
    }

    /// Appends an allow-list pattern, matched case-insensitively.
    #[inline]
    #[must_use]
    pub fn allow_pattern(
        mut self,
        description: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        self.patterns.push((description.into(), pattern.into()));
        self
    }

    /// Leaves out the built-in allow-list.
    #[inline]
    #[must_use]
    pub fn without_default_patterns(mut self) -> Self {
        self.default_patterns = false;
        self
    }

    /// Builds the player with validation.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the executor or page loader is not set
    /// - [`Error::Template`] if the template placeholder is missing or repeated
    /// - [`Error::InvalidPattern`] if an allow-list pattern does not compile
    pub fn build(self) -> Result<Player> {
        let executor = self
            .executor
            .ok_or_else(|| Error::config("script executor is required"))?;
        let page_loader = self
            .page_loader
            .ok_or_else(|| Error::config("page loader is required"))?;

        validate_template(&self.options.template)?;

        let mut patterns = if self.default_patterns {
            AllowPattern::defaults()?
        } else {
            Vec::new()
        };
        for (description, pattern) in &self.patterns {
            patterns.push(AllowPattern::new(description.as_str(), pattern)?);
        }

        debug!(
            patterns = patterns.len(),
            query_timeout_ms = self.options.query_timeout.map(|t| t.as_millis() as u64),
            delegate = self.delegate.is_some(),
            "Building player"
        );

        let link_opener = self
            .link_opener
            .unwrap_or_else(|| Arc::new(LogLinkOpener));

        Ok(Player::from_parts(
            executor,
            page_loader,
            link_opener,
            self.delegate,
            NavigationClassifier::new(patterns),
            self.options,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
