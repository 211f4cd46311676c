//! YouTube player bridge - drive an embedded IFrame player from Rust.
//!
//! This library controls a player document hosted in a web view the caller
//! owns. It renders commands and queries as script, loads the embed
//! document, and decodes the `ytplayer://` callbacks the document emits by
//! navigation.
//!
//! # Architecture
//!
//! The bridge sits between the host application and its web view:
//!
//! - **Host (Rust)**: Calls [`Player`] methods, forwards navigation requests
//!   to [`Player::decide_policy`], receives notifications via
//!   [`PlayerDelegate`]
//! - **Embed document**: Runs the IFrame API, reports events by navigating
//!   to bridge callback URLs
//!
//! Key design principles:
//!
//! - The web view is abstracted behind [`ScriptExecutor`], [`PageLoader`] and
//!   [`LinkOpener`]
//! - Commands are fire-and-forget; queries resolve to typed defaults on
//!   any failure
//! - Navigation decisions are synchronous and never block on the document
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use url::Url;
//! use ytplayer_bridge::{ChannelDelegate, Player, PlayerVars, Result, transport};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // The host drains scripts from `host` into its web view
//!     let (executor, _host) = transport::channel();
//!     let (delegate, mut events) = ChannelDelegate::new();
//!
//!     let player = Player::builder()
//!         .executor(executor)
//!         .page_loader(|html: &str, base: &Url| -> Result<()> {
//!             println!("load {} bytes at {base}", html.len());
//!             Ok(())
//!         })
//!         .delegate(Arc::new(delegate))
//!         .build()?;
//!
//!     player.load_video("M7lc1UVf-VE", PlayerVars::new())?;
//!
//!     // Forward the web view's navigation requests
//!     let callback = Url::parse("ytplayer://onReady")?;
//!     player.decide_policy(&callback);
//!
//!     if let Some(event) = events.recv().await {
//!         println!("event: {event:?}");
//!         player.play_video();
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`player`] | [`Player`], builder, delegate |
//! | [`protocol`] | Commands, queries, callbacks, load parameters |
//! | [`navigation`] | Navigation classification and allow-list |
//! | [`transport`] | Host collaborator traits and channel transport |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |

// ============================================================================
// Modules
// ============================================================================

/// Error types and result aliases.
///
/// Only configuration and page loads return [`Result<T>`]; queries absorb
/// failures into defaults.
pub mod error;

/// Type-safe identifiers.
pub mod identifiers;

/// Navigation request classification.
///
/// Decides whether a navigation is allowed, decoded as a callback, or
/// handed off as an external link.
pub mod navigation;

/// Embedded player bridge.
///
/// Use [`Player::builder()`] to create a configured player.
pub mod player;

/// Bridge protocol message types.
pub mod protocol;

/// Host collaborator traits and script transport.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Player types
pub use player::{ChannelDelegate, Player, PlayerBuilder, PlayerDelegate, PlayerOptions};

// Protocol types
pub use protocol::{
    CallbackEvent, ErrorCode, LoadParameters, PlaybackQuality, PlayerCommand, PlayerEvent,
    PlayerQuery, PlayerState, PlayerVars, VideoCue,
};

// Navigation types
pub use navigation::{Classification, NavigationClassifier, NavigationPolicy};

// Transport types
pub use transport::{LinkOpener, PageLoader, ScriptExecutor};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::ScriptId;
