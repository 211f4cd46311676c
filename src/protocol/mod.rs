//! Bridge protocol message types.
//!
//! This module defines what crosses the bridge between the host (Rust) and
//! the embedded player document.
//!
//! # Protocol Overview
//!
//! | Message | Direction | Carrier |
//! |---------|-----------|---------|
//! | `PlayerCommand` | Host → Player | evaluated script, no result |
//! | `PlayerQuery` | Host → Player → Host | evaluated script, one async result |
//! | `CallbackEvent` | Player → Host | intercepted `ytplayer://` navigation |
//! | `LoadParameters` | Host → Player | JSON substituted into the embed page |
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `types` | Player state, quality and error enums |
//! | `command` | Command definitions and script rendering |
//! | `query` | Query definitions and result decoders |
//! | `callback` | Callback URL parsing and decoding |
//! | `event` | Host-visible notifications |
//! | `params` | Embed load parameters |

// ============================================================================
// Submodules
// ============================================================================

/// Bridge callback decoding.
pub mod callback;

/// Command definitions.
pub mod command;

/// Host-visible notifications.
pub mod event;

/// Embed load parameters.
pub mod params;

/// Query definitions and decoding.
pub mod query;

/// Enumerated domain types.
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use callback::{BRIDGE_SCHEME, CallbackEvent, CallbackName};
pub use command::{PlayerCommand, PlaylistCue, PlaylistSource, VideoCue};
pub use event::PlayerEvent;
pub use params::{LoadParameters, PlayerVars};
pub use query::PlayerQuery;
pub use types::{ErrorCode, PlaybackQuality, PlayerState};
