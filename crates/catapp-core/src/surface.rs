//! Surface contexts and the legacy termination fix-up.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Termination value found in historical records.
pub const LEGACY_TERMINATION: &str = "1";
/// Canonical spelling of [`LEGACY_TERMINATION`].
pub const CANONICAL_TERMINATION: &str = "0001";

/// Returns the canonical termination for a raw stored value.
///
/// Applying it twice is the same as applying it once.
pub fn normalize_termination(raw: &str) -> &str {
    if raw == LEGACY_TERMINATION {
        CANONICAL_TERMINATION
    } else {
        raw
    }
}

/// The `(Surface, Termination)` pair observations are aligned on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SurfaceContext {
    /// Surface identifier, e.g. `Pt`.
    pub surface: String,
    /// Normalized facet termination, e.g. `0001`.
    pub termination: String,
}

impl SurfaceContext {
    /// Builds a context, normalizing the termination.
    pub fn new(surface: impl Into<String>, termination: &str) -> Self {
        Self {
            surface: surface.into(),
            termination: normalize_termination(termination).to_string(),
        }
    }

    /// Tooltip heading, e.g. `Pt(0001)`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl Display for SurfaceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.surface, self.termination)
    }
}
