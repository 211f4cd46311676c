//! Host collaborator traits.
//!
//! The bridge never touches a web view directly. The host implements these
//! traits on top of whatever embedding it uses; closures work too.
//!
//! | Trait | Called for |
//! |-------|------------|
//! | [`ScriptExecutor`] | every command and query |
//! | [`PageLoader`] | every page load of the embed document |
//! | [`LinkOpener`] | external links when no delegate is set |

// ============================================================================
// Imports
// ============================================================================

use serde_json::Value;
use tracing::info;
use url::Url;

use crate::error::Result;
use crate::identifiers::ScriptId;

// ============================================================================
// Types
// ============================================================================

/// Completion callback for a script evaluation.
///
/// Receives the raw script result or the transport error. Invoked at most
/// once, on whatever context the executor completes on.
pub type ScriptCompletion = Box<dyn FnOnce(Result<Value>) + Send + 'static>;

// ============================================================================
// ScriptExecutor
// ============================================================================

/// Evaluates script inside the embedded document.
///
/// Implementations must not block. Commands arrive with no completion and
/// are fire-and-forget; if the document is not ready yet the executor may
/// drop them. A completion that is never invoked leaves the matching query
/// pending until it times out or is dropped, at which point the bridge
/// calls [`cancel`](Self::cancel) with the same id.
pub trait ScriptExecutor: Send + Sync {
    /// Evaluates `script`, reporting the result to `completion` if present.
    ///
    /// `id` is unique per evaluation and is the key later passed to
    /// [`cancel`](Self::cancel).
    fn evaluate(&self, id: ScriptId, script: String, completion: Option<ScriptCompletion>);

    /// Releases whatever is held for `id`. The completion must not be
    /// invoked afterwards. Unknown ids are ignored.
    fn cancel(&self, id: ScriptId) {
        let _ = id;
    }
}

impl<F> ScriptExecutor for F
where
    F: Fn(ScriptId, String, Option<ScriptCompletion>) + Send + Sync,
{
    fn evaluate(&self, id: ScriptId, script: String, completion: Option<ScriptCompletion>) {
        self(id, script, completion)
    }
}

// ============================================================================
// PageLoader
// ============================================================================

/// Loads an HTML document into the web view.
pub trait PageLoader: Send + Sync {
    /// Loads `html` with `base_url` as its base URL.
    ///
    /// # Errors
    ///
    /// Whatever the host reports; it is propagated to the load caller.
    fn load_html(&self, html: &str, base_url: &Url) -> Result<()>;
}

impl<F> PageLoader for F
where
    F: Fn(&str, &Url) -> Result<()> + Send + Sync,
{
    fn load_html(&self, html: &str, base_url: &Url) -> Result<()> {
        self(html, base_url)
    }
}

// ============================================================================
// LinkOpener
// ============================================================================

/// Opens an external link outside the player.
pub trait LinkOpener: Send + Sync {
    /// Opens `url`.
    fn open(&self, url: &Url);
}

impl<F> LinkOpener for F
where
    F: Fn(&Url) + Send + Sync,
{
    fn open(&self, url: &Url) {
        self(url)
    }
}

/// Default [`LinkOpener`]: logs the link and does nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLinkOpener;

impl LinkOpener for LogLinkOpener {
    fn open(&self, url: &Url) {
        info!(url = %url, "External link requested; no link opener configured");
    }
}

// ============================================================================
// Tests
// ============================================================================
