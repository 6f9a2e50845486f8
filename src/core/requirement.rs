//! Requirement declarations.
//!
//! The recipe declares build requirements only for testing, and only when
//! the test toggle is on. The declarator is a pure function of that toggle:
//! no other state is consulted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pinned unit-testing framework.
pub const CATCH2_PIN: (&str, &str) = ("catch2", "2.13.9");

/// Pinned mocking framework.
pub const TROMPELOEIL_PIN: (&str, &str) = ("trompeloeil", "42");

/// What a requirement is needed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementKind {
    /// Needed only to build and run the package's tests.
    Test,
}

/// A declared requirement: a package name at an exact pinned version.
///
/// Versions are opaque strings here, not parsed constraints; the pins
/// include versions like `42` that no constraint grammar accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    name: String,
    version: String,
    kind: RequirementKind,
}

impl Requirement {
    /// Declare a test-only requirement at an exact version.
    pub fn test(name: impl Into<String>, version: impl Into<String>) -> Self {
        Requirement {
            name: name.into(),
            version: version.into(),
            kind: RequirementKind::Test,
        }
    }

    /// The required package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The exact pinned version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// What the requirement is needed for.
    pub fn kind(&self) -> RequirementKind {
        self.kind
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

/// Declare the recipe's build requirements.
///
/// With the toggle off this is empty; with it on it is exactly the two
/// test-framework pins. Idempotent by construction.
pub fn build_requirements(run_tests: bool) -> Vec<Requirement> {
    if !run_tests {
        return Vec::new();
    }

    vec![
        Requirement::test(CATCH2_PIN.0, CATCH2_PIN.1),
        Requirement::test(TROMPELOEIL_PIN.0, TROMPELOEIL_PIN.1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_off_declares_nothing() {
        assert!(build_requirements(false).is_empty());
    }

    #[test]
    fn test_toggle_on_declares_both_pins() {
        let reqs = build_requirements(true);
        assert_eq!(reqs.len(), 2);

        assert_eq!(reqs[0].name(), "catch2");
        assert_eq!(reqs[0].version(), "2.13.9");
        assert_eq!(reqs[1].name(), "trompeloeil");
        assert_eq!(reqs[1].version(), "42");
        assert!(reqs.iter().all(|r| r.kind() == RequirementKind::Test));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(build_requirements(true), build_requirements(true));
        assert_eq!(build_requirements(false), build_requirements(false));
    }

    #[test]
    fn test_display() {
        let req = Requirement::test("catch2", "2.13.9");
        assert_eq!(req.to_string(), "catch2/2.13.9");
    }
}
