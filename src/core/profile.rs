use serde::{Deserialize, Serialize};

use crate::core::marker::StrMarker;

/// The STR markers recorded for one person, plus whether the profile is of interest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Markers in the order they were provided
    markers: Vec<StrMarker>,

    /// Set by the flagging pass once enough markers agree with the unknown sequences
    #[serde(skip_deserializing)]
    of_interest: bool,
}

impl Profile {
    #[must_use]
    pub fn new(markers: Vec<StrMarker>) -> Self {
        Self {
            markers,
            of_interest: false,
        }
    }

    /// Build a profile from `(repeat_unit, expected_occurrences)` pairs
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, u32)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(unit, count)| StrMarker::new(unit, count))
                .collect(),
        )
    }

    pub fn markers(&self) -> &[StrMarker] {
        &self.markers
    }

    pub fn is_of_interest(&self) -> bool {
        self.of_interest
    }

    /// Flags only ever go from false to true.
    pub(crate) fn mark_of_interest(&mut self) {
        self.of_interest = true;
    }
}
