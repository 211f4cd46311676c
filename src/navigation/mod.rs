//! Navigation request interception.
//!
//! | Classification | Condition | Policy |
//! |----------------|-----------|--------|
//! | `SameOrigin` | request host == origin host | allow |
//! | `BridgeCallback` | scheme `ytplayer` | cancel, decode |
//! | `AllowedExternal` | `http(s)` and allow-list match | allow |
//! | `ExternalLink` | `http(s)`, no match | cancel, hand off |
//! | `Other` | any other scheme | allow |
//!
//! # Example
//!
//! ```
//! use url::Url;
//! use ytplayer_bridge::navigation::{NavigationClassifier, NavigationPolicy};
//!
//! let classifier = NavigationClassifier::with_default_patterns().unwrap();
//! let url = Url::parse("ytplayer://onStateChange?data=1").unwrap();
//! let policy = classifier.classify(&url, Some("www.example.com")).policy();
//! assert_eq!(policy, NavigationPolicy::CancelAndDecode);
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Request classification.
pub mod classifier;

/// Allow-list patterns.
pub mod pattern;

// ============================================================================
// Re-exports
// ============================================================================

pub use classifier::{Classification, NavigationClassifier, NavigationPolicy};
pub use pattern::{AllowPattern, DEFAULT_ALLOW_PATTERNS};
