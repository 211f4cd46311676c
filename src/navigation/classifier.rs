//! Navigation request classification.
//!
//! Every navigation the embedded document attempts is classified before the
//! web view may proceed. Classification is pure and synchronous; acting on
//! the result is the player's job.

// ============================================================================
// Imports
// ============================================================================

use url::Url;

use crate::error::Result;
use crate::protocol::BRIDGE_SCHEME;

use super::pattern::AllowPattern;

// ============================================================================
// NavigationPolicy
// ============================================================================

/// What the web view should do with a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// Let the navigation proceed.
    Allow,
    /// Cancel it; the URL was a bridge callback and has been decoded.
    CancelAndDecode,
    /// Cancel it; the URL has been handed to the host as an external link.
    CancelAndHandoff,
}

impl NavigationPolicy {
    /// Returns `true` if the web view should proceed.
    #[inline]
    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Why a navigation request was classified the way it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Host equals the origin host.
    SameOrigin,
    /// `ytplayer://` callback.
    BridgeCallback,
    /// `http(s)` URL on the allow-list.
    AllowedExternal {
        /// Description of the matching pattern.
        pattern: String,
    },
    /// `http(s)` URL not on the allow-list.
    ExternalLink,
    /// Any other scheme.
    Other,
}

impl Classification {
    /// Maps the classification onto a navigation policy.
    #[must_use]
    pub fn policy(&self) -> NavigationPolicy {
        match self {
            Self::SameOrigin | Self::AllowedExternal { .. } | Self::Other => {
                NavigationPolicy::Allow
            }
            Self::BridgeCallback => NavigationPolicy::CancelAndDecode,
            Self::ExternalLink => NavigationPolicy::CancelAndHandoff,
        }
    }
}

// ============================================================================
// NavigationClassifier
// ============================================================================

/// Classifies navigation requests against an origin and an allow-list.
#[derive(Debug, Clone)]
pub struct NavigationClassifier {
    patterns: Vec<AllowPattern>,
}

impl NavigationClassifier {
    /// Creates a classifier with an explicit allow-list.
    #[inline]
    #[must_use]
    pub fn new(patterns: Vec<AllowPattern>) -> Self {
        Self { patterns }
    }

    /// Creates a classifier with the built-in allow-list.
    ///
    /// # Errors
    ///
    /// Propagates pattern compilation errors.
    pub fn with_default_patterns() -> Result<Self> {
        Ok(Self::new(AllowPattern::defaults()?))
    }

    /// Appends a pattern to the allow-list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) if the
    /// pattern does not compile.
    pub fn push_pattern(&mut self, description: impl Into<String>, pattern: &str) -> Result<()> {
        self.patterns.push(AllowPattern::new(description, pattern)?);
        Ok(())
    }

    /// Returns the allow-list.
    #[inline]
    #[must_use]
    pub fn patterns(&self) -> &[AllowPattern] {
        &self.patterns
    }

    /// Classifies a navigation request.
    ///
    /// `origin_host` is the host of the current origin, `None` when no origin
    /// is set. A request whose host equals it is always same-origin,
    /// whatever its scheme; two absent hosts compare equal.
    #[must_use]
    pub fn classify(&self, url: &Url, origin_host: Option<&str>) -> Classification {
        if url.host_str() == origin_host {
            return Classification::SameOrigin;
        }

        match url.scheme() {
            BRIDGE_SCHEME => Classification::BridgeCallback,
            "http" | "https" => self
                .matching_pattern(url.as_str())
                .map(|pattern| Classification::AllowedExternal {
                    pattern: pattern.description().to_string(),
                })
                .unwrap_or(Classification::ExternalLink),
            _ => Classification::Other,
        }
    }

    fn matching_pattern(&self, url: &str) -> Option<&AllowPattern> {
        self.patterns.iter().find(|pattern| pattern.is_match(url))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> NavigationClassifier {
        NavigationClassifier::with_default_patterns().expect("defaults")
    }

    fn classify(url: &str, origin_host: Option<&str>) -> Classification {
        classifier().classify(&Url::parse(url).expect("url"), origin_host)
    }

    #[test]
    fn test_same_origin_wins_over_scheme() {
        let origin = Some("www.example.com");
        assert_eq!(
            classify("https://www.example.com/any/path", origin),
            Classification::SameOrigin
        );
        assert_eq!(
            classify("http://www.example.com/", origin),
            Classification::SameOrigin
        );
        assert_eq!(
            classify("ftp://www.example.com/file", origin),
            Classification::SameOrigin
        );
    }

    #[test]
    fn test_bridge_callback() {
        let c = classify("ytplayer://onReady", Some("www.example.com"));
        assert_eq!(c, Classification::BridgeCallback);
        assert_eq!(c.policy(), NavigationPolicy::CancelAndDecode);
    }

    #[test]
    fn test_allowed_external() {
        let c = classify(
            "https://www.youtube.com/embed/abc?enablejsapi=1",
            Some("www.example.com"),
        );
        assert_eq!(
            c,
            Classification::AllowedExternal {
                pattern: "embed".into()
            }
        );
        assert!(c.policy().is_allow());
    }

    #[test]
    fn test_external_link() {
        let c = classify("https://www.youtube.com/watch?v=abc", Some("www.example.com"));
        assert_eq!(c, Classification::ExternalLink);
        assert_eq!(c.policy(), NavigationPolicy::CancelAndHandoff);
    }

    #[test]
    fn test_other_scheme_allowed() {
        let c = classify("about:blank", Some("www.example.com"));
        assert_eq!(c, Classification::Other);
        assert!(c.policy().is_allow());

        let c = classify("data:text/html,hi", Some("www.example.com"));
        assert_eq!(c, Classification::Other);
    }

    #[test]
    fn test_no_origin_matches_hostless_urls() {
        assert_eq!(classify("about:blank", None), Classification::SameOrigin);
        assert_eq!(
            classify("https://example.com/", None),
            Classification::ExternalLink
        );
    }

    #[test]
    fn test_custom_pattern() {
        let mut classifier = NavigationClassifier::new(Vec::new());
        classifier
            .push_pattern("cdn", r"^https://cdn\.example\.net/")
            .expect("valid pattern");

        let url = Url::parse("https://CDN.example.net/player.js").expect("url");
        assert_eq!(
            classifier.classify(&url, None),
            Classification::AllowedExternal {
                pattern: "cdn".into()
            }
        );

        assert!(classifier.push_pattern("broken", "[").is_err());
        assert_eq!(classifier.patterns().len(), 1);
    }
}
