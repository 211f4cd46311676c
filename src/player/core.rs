//! Core Player struct and accessors.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use url::Url;

use crate::navigation::NavigationClassifier;
use crate::transport::{LinkOpener, PageLoader, ScriptExecutor};

use super::builder::PlayerBuilder;
use super::delegate::PlayerDelegate;
use super::options::PlayerOptions;

// ============================================================================
// Types
// ============================================================================

/// Per-player mutable bridge state.
///
/// Loads are last-write-wins: each load overwrites the origin and clears
/// readiness.
#[derive(Debug, Default)]
pub(crate) struct Session {
    /// Origin of the current embed document, if `playerVars.origin` was set.
    pub origin: Option<Url>,
    /// Set on `onReady`, cleared on every load.
    pub ready: bool,
    /// Number of page loads so far.
    pub loads: u64,
}

/// Internal shared state for a player.
pub(crate) struct PlayerInner {
    /// Script evaluation.
    pub executor: Arc<dyn ScriptExecutor>,
    /// Embed document loading.
    pub page_loader: Arc<dyn PageLoader>,
    /// External link fallback when no delegate is set.
    pub link_opener: Arc<dyn LinkOpener>,
    /// Notification target.
    pub delegate: RwLock<Option<Arc<dyn PlayerDelegate>>>,
    /// Navigation classification.
    pub classifier: NavigationClassifier,
    /// Origin and readiness.
    pub session: Mutex<Session>,
    /// Validated options.
    pub options: PlayerOptions,
}

// ============================================================================
// Player
// ============================================================================

/// A handle to one embedded player.
///
/// Cheap to clone; clones share the same session and delegate.
#[derive(Clone)]
pub struct Player {
    pub(crate) inner: Arc<PlayerInner>,
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.inner.session.lock();
        f.debug_struct("Player")
            .field("origin", &session.origin.as_ref().map(Url::as_str))
            .field("ready", &session.ready)
            .field("loads", &session.loads)
            .field("patterns", &self.inner.classifier.patterns().len())
            .finish_non_exhaustive()
    }
}

impl Player {
    /// Returns a builder for configuring a player.
    #[inline]
    #[must_use]
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub(crate) fn from_parts(
        executor: Arc<dyn ScriptExecutor>,
        page_loader: Arc<dyn PageLoader>,
        link_opener: Arc<dyn LinkOpener>,
        delegate: Option<Arc<dyn PlayerDelegate>>,
        classifier: NavigationClassifier,
        options: PlayerOptions,
    ) -> Self {
        Self {
            inner: Arc::new(PlayerInner {
                executor,
                page_loader,
                link_opener,
                delegate: RwLock::new(delegate),
                classifier,
                session: Mutex::new(Session::default()),
                options,
            }),
        }
    }
}

// ============================================================================
// Player - Accessors
// ============================================================================

impl Player {
    /// Returns the origin of the current embed document.
    #[must_use]
    pub fn origin(&self) -> Option<Url> {
        self.inner.session.lock().origin.clone()
    }

    /// Returns `true` once the player reported `onReady` for the current load.
    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.inner.session.lock().ready
    }

    /// Returns the number of page loads performed.
    #[inline]
    #[must_use]
    pub fn load_count(&self) -> u64 {
        self.inner.session.lock().loads
    }

    /// Returns the options the player was built with.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &PlayerOptions {
        &self.inner.options
    }

    /// Returns the navigation classifier.
    #[inline]
    #[must_use]
    pub fn classifier(&self) -> &NavigationClassifier {
        &self.inner.classifier
    }

    /// Replaces the delegate. `None` detaches it.
    pub fn set_delegate(&self, delegate: Option<Arc<dyn PlayerDelegate>>) {
        *self.inner.delegate.write() = delegate;
    }

    /// Returns `true` if a delegate is attached.
    #[inline]
    #[must_use]
    pub fn has_delegate(&self) -> bool {
        self.inner.delegate.read().is_some()
    }

    /// Clones the delegate out so no lock is held while it runs.
    pub(crate) fn delegate(&self) -> Option<Arc<dyn PlayerDelegate>> {
        self.inner.delegate.read().clone()
    }

    /// Returns the host of the current origin.
    pub(crate) fn origin_host(&self) -> Option<String> {
        self.inner
            .session
            .lock()
            .origin
            .as_ref()
            .and_then(|origin| origin.host_str().map(str::to_owned))
    }
}

// ============================================================================
// Tests
// ============================================================================
