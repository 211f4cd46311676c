//! Embedded player bridge.
//!
//! A [`Player`] drives one embedded player document through the host's
//! collaborators and turns intercepted navigations into notifications.
//!
//! # Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | `core` | Player struct, session and accessors |
//! | `builder` | Fluent configuration |
//! | `options` | Timeouts, default size, template |
//! | `control` | Page loads and fire-and-forget commands |
//! | `queries` | Async accessors |
//! | `intercept` | Navigation policy and callback dispatch |
//! | `delegate` | Notification trait and channel adapter |
//! | `assets` | Embed document template |
//!
//! # Example
//!
//! ```ignore
//! let player = Player::builder()
//!     .executor(executor)
//!     .page_loader(loader)
//!     .delegate(Arc::new(delegate))
//!     .build()?;
//!
//! player.load_video("M7lc1UVf-VE", PlayerVars::new())?;
//!
//! // From the web view's navigation hook
//! let policy = player.decide_policy(&url);
//!
//! // Once ready
//! player.play_video();
//! let duration = player.duration().await;
//! ```

// ============================================================================
// Submodules
// ============================================================================

pub mod assets;
mod builder;
mod control;
mod core;
mod delegate;
mod intercept;
mod options;
mod queries;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::PlayerBuilder;
pub use self::core::Player;
pub use delegate::{ChannelDelegate, PlayerDelegate};
pub use options::PlayerOptions;

// ============================================================================
// Test Support
// ============================================================================
