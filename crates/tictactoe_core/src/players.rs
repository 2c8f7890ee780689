//! Player name registry.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// Display names keyed by mark.
///
/// Names are stored verbatim. An empty name is valid; front-ends substitute
/// their own label through [`PlayerNames::display_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    x: String,
    o: String,
}

impl PlayerNames {
    /// Creates a registry with both names empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored name for `mark`.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Overwrites the name for `mark`.
    pub fn set(&mut self, mark: Mark, name: impl Into<String>) {
        let slot = match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        };
        *slot = name.into();
    }

    /// Returns the name for `mark`, or `fallback` when the name is blank.
    pub fn display_name<'a>(&'a self, mark: Mark, fallback: &'a str) -> &'a str {
        let name = self.name(mark);
        if name.trim().is_empty() { fallback } else { name }
    }

    /// Returns true if neither player has a name.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }
}
