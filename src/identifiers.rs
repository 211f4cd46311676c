//! Type-safe identifiers.
//!
//! Newtype wrappers keep script correlation ids distinct from any other
//! string or integer the host passes around.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use uuid::Uuid;

// ============================================================================
// ScriptId
// ============================================================================

/// Identifier correlating a script evaluation with its completion.
///
/// Generated per [`ScriptRequest`](crate::transport::ScriptRequest) by the
/// channel transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptId(Uuid);

impl ScriptId {
    /// Generates a new random identifier.
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[inline]
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_id_unique() {
        let a = ScriptId::generate();
        let b = ScriptId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_script_id_display() {
        let id = ScriptId::generate();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
