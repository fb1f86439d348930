use serde::{Deserialize, Serialize};

/// A single short tandem repeat marker of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrMarker {
    /// Repeat unit searched for in the unknown sequences (e.g. "AGAT")
    pub repeat_unit: String,

    /// Total number of occurrences expected across both unknown sequences
    pub expected_occurrences: u32,
}

impl StrMarker {
    pub fn new(repeat_unit: impl Into<String>, expected_occurrences: u32) -> Self {
        Self {
            repeat_unit: repeat_unit.into(),
            expected_occurrences,
        }
    }
}

impl std::fmt::Display for StrMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.repeat_unit, self.expected_occurrences)
    }
}
