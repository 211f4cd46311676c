//! External URL allow-list patterns.
//!
//! The embedded player loads some of its own sub-resources and auth flows
//! through top-level navigations. Those must be let through instead of being
//! handed to the host as external links.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::Result;

// ============================================================================
// Default Patterns
// ============================================================================

/// Built-in allow-list as `(description, pattern)` pairs.
///
/// The patterns are mutually exclusive, so match order does not matter.
/// Keep it that way when adding one.
pub const DEFAULT_ALLOW_PATTERNS: [(&str, &str); 5] = [
    ("embed", r"^http(s)://(www.)youtube.com/embed/(.*)$"),
    (
        "ad-conversion",
        r"^http(s)://pubads.g.doubleclick.net/pagead/conversion/",
    ),
    (
        "syndication",
        r"^https://tpc.googlesyndication.com/sodar/(.*).html$",
    ),
    ("oauth", r"^http(s)://accounts.google.com/o/oauth2/(.*)$"),
    (
        "static-proxy",
        r"^https://content.googleapis.com/static/proxy.html(.*)$",
    ),
];

// ============================================================================
// AllowPattern
// ============================================================================

/// A compiled, case-insensitive URL pattern with a description.
#[derive(Clone)]
pub struct AllowPattern {
    regex: Regex,
    description: String,
}

impl AllowPattern {
    /// Compiles a case-insensitive pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) if the
    /// pattern does not compile.
    pub fn new(description: impl Into<String>, pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            regex,
            description: description.into(),
        })
    }

    /// Returns the built-in allow-list.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in patterns; the `Result` comes from
    /// [`AllowPattern::new`].
    pub fn defaults() -> Result<Vec<Self>> {
        DEFAULT_ALLOW_PATTERNS
            .iter()
            .map(|(description, pattern)| Self::new(*description, pattern))
            .collect()
    }

    /// Returns `true` if the full URL string matches.
    #[inline]
    #[must_use]
    pub fn is_match(&self, url: &str) -> bool {
        self.regex.is_match(url)
    }

    /// Returns the description.
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the source pattern.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl fmt::Debug for AllowPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllowPattern")
            .field("description", &self.description)
            .field("pattern", &self.regex.as_str())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn matching(url: &str) -> Vec<String> {
        AllowPattern::defaults()
            .expect("defaults compile")
            .into_iter()
            .filter(|p| p.is_match(url))
            .map(|p| p.description().to_string())
            .collect()
    }

    #[test]
    fn test_defaults_compile() {
        assert_eq!(AllowPattern::defaults().expect("compile").len(), 5);
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            matching("https://www.youtube.com/embed/M7lc1UVf-VE?enablejsapi=1"),
            vec!["embed"]
        );
        // Both groups are mandatory in the pattern.
        assert!(matching("http://www.youtube.com/embed/abc").is_empty());
        assert!(matching("https://youtube.com/embed/abc").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            matching("HTTPS://WWW.YOUTUBE.COM/EMBED/abc"),
            vec!["embed"]
        );
    }

    #[test]
    fn test_other_defaults() {
        assert_eq!(
            matching("https://pubads.g.doubleclick.net/pagead/conversion/123/?label=x"),
            vec!["ad-conversion"]
        );
        assert_eq!(
            matching("https://tpc.googlesyndication.com/sodar/sodar2/225/runner.html"),
            vec!["syndication"]
        );
        assert_eq!(
            matching("https://accounts.google.com/o/oauth2/auth?client_id=x"),
            vec!["oauth"]
        );
        assert_eq!(
            matching("https://content.googleapis.com/static/proxy.html?usegapi=1"),
            vec!["static-proxy"]
        );
    }

    #[test]
    fn test_external_urls_do_not_match() {
        assert!(matching("https://www.youtube.com/watch?v=abc").is_empty());
        assert!(matching("https://example.com/").is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(AllowPattern::new("broken", "(").is_err());
    }
}
