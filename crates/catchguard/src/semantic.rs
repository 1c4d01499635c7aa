//! Per-file semantic availability.

use serde::{Deserialize, Serialize};

/// Whether the host resolved types and symbols for the file being linted.
///
/// Rules that anchor issues on resolved nodes must not run on an
/// unresolved tree; they check [`Semantics::is_available`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Semantics {
    /// Semantic analysis completed for this file.
    Resolved,
    /// Syntax only (resolution failed or was not run).
    Unresolved,
}

impl Semantics {
    pub fn is_available(self) -> bool {
        matches!(self, Semantics::Resolved)
    }
}

impl From<bool> for Semantics {
    fn from(available: bool) -> Self {
        if available {
            Semantics::Resolved
        } else {
            Semantics::Unresolved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability() {
        assert!(Semantics::Resolved.is_available());
        assert!(!Semantics::Unresolved.is_available());
        assert_eq!(Semantics::from(false), Semantics::Unresolved);
    }
}
