//! Script transport layer.
//!
//! This module defines how the bridge reaches the embedding host: script
//! evaluation, page loading and link hand-off.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐                              ┌─────────────────┐
//! │  Player (Rust)  │      ScriptExecutor          │  Web view       │
//! │                 │─────────────────────────────►│  (embed page)   │
//! │                 │◄──── ScriptCompletion ───────│                 │
//! │                 │                              │                 │
//! │  decide_policy  │◄──── navigation requests ────│  ytplayer://    │
//! └─────────────────┘                              └─────────────────┘
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `collaborator` | Host collaborator traits |
//! | `channel` | mpsc-backed executor with id correlation |

// ============================================================================
// Submodules
// ============================================================================

/// mpsc-backed script transport.
pub mod channel;

/// Host collaborator traits.
pub mod collaborator;

// ============================================================================
// Re-exports
// ============================================================================

pub use channel::{ChannelExecutor, MAX_PENDING_SCRIPTS, ScriptHost, ScriptRequest, channel};
pub use collaborator::{LinkOpener, LogLinkOpener, PageLoader, ScriptCompletion, ScriptExecutor};
