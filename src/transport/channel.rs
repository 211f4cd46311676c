//! Channel-backed script transport.
//!
//! [`ChannelExecutor`] turns script evaluations into [`ScriptRequest`]s on an
//! unbounded channel. The host drains them from the paired [`ScriptHost`],
//! runs them in its web view, and reports results back by id.
//!
//! ```text
//! Player ──evaluate──► ChannelExecutor ──ScriptRequest──► ScriptHost ──► web view
//!   ▲                        │ pending[id] = completion          │
//!   └────── completion ◄─────┴─────────── complete(id, result) ◄─┘
//! ```
//!
//! Commands carry no completion and are never tracked. If the host side is
//! gone, commands are dropped and queries fail with
//! [`Error::ConnectionClosed`]. A cancelled query is removed from the pending
//! map, so a late [`ScriptHost::complete`] for it returns `false`.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::identifiers::ScriptId;

use super::collaborator::{ScriptCompletion, ScriptExecutor};

// ============================================================================
// Constants
// ============================================================================

/// Maximum queries awaiting a result before new ones are rejected.
pub const MAX_PENDING_SCRIPTS: usize = 256;

// ============================================================================
// Types
// ============================================================================

/// Map of script ids to their completions.
type CompletionMap = FxHashMap<ScriptId, ScriptCompletion>;

// ============================================================================
// ScriptRequest
// ============================================================================

/// A script the host should evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRequest {
    /// Correlation id for [`ScriptHost::complete`].
    pub id: ScriptId,
    /// Script source.
    pub script: String,
    /// `false` for fire-and-forget commands; no result is expected.
    pub expects_result: bool,
}

// ============================================================================
// Construction
// ============================================================================

/// Creates a connected executor/host pair.
#[must_use]
pub fn channel() -> (ChannelExecutor, ScriptHost) {
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let pending = Arc::new(Mutex::new(CompletionMap::default()));

    let executor = ChannelExecutor {
        request_tx,
        pending: Arc::clone(&pending),
    };
    let host = ScriptHost {
        request_rx,
        pending,
    };

    (executor, host)
}

// ============================================================================
// ChannelExecutor
// ============================================================================

/// [`ScriptExecutor`] that forwards scripts to a [`ScriptHost`].
#[derive(Clone)]
pub struct ChannelExecutor {
    request_tx: mpsc::UnboundedSender<ScriptRequest>,
    pending: Arc<Mutex<CompletionMap>>,
}

impl fmt::Debug for ChannelExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelExecutor")
            .field("pending", &self.pending.lock().len())
            .field("closed", &self.request_tx.is_closed())
            .finish()
    }
}

impl ChannelExecutor {
    /// Returns the number of queries awaiting a result.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }

    /// Returns `true` if the host side has been dropped.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.request_tx.is_closed()
    }
}

impl ScriptExecutor for ChannelExecutor {
    fn evaluate(&self, id: ScriptId, script: String, completion: Option<ScriptCompletion>) {
        let expects_result = completion.is_some();

        if let Some(completion) = completion {
            let mut pending = self.pending.lock();
            if pending.len() >= MAX_PENDING_SCRIPTS {
                let count = pending.len();
                drop(pending);
                warn!(
                    pending = count,
                    max = MAX_PENDING_SCRIPTS,
                    "Too many pending scripts"
                );
                completion(Err(Error::protocol(format!(
                    "Too many pending scripts: {count}/{MAX_PENDING_SCRIPTS}"
                ))));
                return;
            }
            pending.insert(id, completion);
        }

        let script_len = script.len();
        let request = ScriptRequest {
            id,
            script,
            expects_result,
        };

        if self.request_tx.send(request).is_err() {
            trace!(%id, "Script host closed, dropping script");
            let completion = self.pending.lock().remove(&id);
            if let Some(completion) = completion {
                completion(Err(Error::ConnectionClosed));
            }
            return;
        }

        trace!(%id, script_len, expects_result, "Script forwarded");
    }

    fn cancel(&self, id: ScriptId) {
        if self.pending.lock().remove(&id).is_some() {
            debug!(%id, "Removed cancelled script");
        }
    }
}

// ============================================================================
// ScriptHost
// ============================================================================

/// Host side of the channel transport.
///
/// Dropping the host fails every pending query with
/// [`Error::ConnectionClosed`].
pub struct ScriptHost {
    request_rx: mpsc::UnboundedReceiver<ScriptRequest>,
    pending: Arc<Mutex<CompletionMap>>,
}

impl fmt::Debug for ScriptHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptHost")
            .field("pending", &self.pending.lock().len())
            .finish_non_exhaustive()
    }
}

impl ScriptHost {
    /// Waits for the next script.
    ///
    /// Returns `None` once every executor has been dropped and the queue is
    /// drained.
    pub async fn recv(&mut self) -> Option<ScriptRequest> {
        self.request_rx.recv().await
    }

    /// Returns the next queued script without waiting.
    pub fn try_recv(&mut self) -> Option<ScriptRequest> {
        self.request_rx.try_recv().ok()
    }

    /// Reports the result of a script.
    ///
    /// Returns `false` if no query with this id is pending, which includes
    /// commands and ids that were already completed.
    pub fn complete(&self, id: ScriptId, result: Result<Value>) -> bool {
        let completion = self.pending.lock().remove(&id);

        match completion {
            Some(completion) => {
                completion(result);
                true
            }
            None => {
                debug!(%id, "Result for unknown script");
                false
            }
        }
    }

    /// Returns the number of queries awaiting a result.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }

    /// Fails every pending query with [`Error::ConnectionClosed`].
    pub fn fail_pending(&self) {
        let pending: Vec<_> = self.pending.lock().drain().collect();
        let count = pending.len();

        for (_, completion) in pending {
            completion(Err(Error::ConnectionClosed));
        }

        if count > 0 {
            debug!(count, "Failed pending scripts");
        }
    }
}

impl Drop for ScriptHost {
    fn drop(&mut self) {
        self.fail_pending();
    }
}

// ============================================================================
// Tests
// ============================================================================
