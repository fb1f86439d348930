use serde::Serialize;

use crate::core::marker::StrMarker;
use crate::core::profile::Profile;
use crate::matching::occurrences::count_occurrences;

/// Minimum number of satisfied markers needed to flag a profile with
/// `marker_count` markers: half, rounded up.
///
/// A profile without markers has a threshold of zero and is always flagged.
#[must_use]
pub fn majority_threshold(marker_count: usize) -> usize {
    marker_count.div_ceil(2)
}

/// Observed occurrences of one marker's repeat unit in both unknown sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerCount {
    pub repeat_unit: String,
    pub expected: u32,
    pub in_first: usize,
    pub in_second: usize,
}

impl MarkerCount {
    pub fn observed(&self) -> usize {
        self.in_first + self.in_second
    }

    /// The marker agrees with the sequences when the combined count equals the expected count
    pub fn is_satisfied(&self) -> bool {
        usize::try_from(self.expected).is_ok_and(|expected| expected == self.observed())
    }
}

/// Result of checking one profile against the unknown sequences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileEvaluation {
    /// Per-marker counts, in profile order
    pub markers: Vec<MarkerCount>,

    /// Number of satisfied markers
    pub satisfied: usize,

    /// Number of satisfied markers required for a match
    pub threshold: usize,
}

impl ProfileEvaluation {
    pub fn total(&self) -> usize {
        self.markers.len()
    }

    pub fn is_match(&self) -> bool {
        self.satisfied >= self.threshold
    }
}

/// Checks profiles against the two unknown sequences
#[derive(Debug, Clone, Copy)]
pub struct MatchingEngine<'a> {
    first_sequence: &'a str,
    second_sequence: &'a str,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(first_sequence: &'a str, second_sequence: &'a str) -> Self {
        Self {
            first_sequence,
            second_sequence,
        }
    }

    /// Count a single marker's repeat unit in both sequences
    pub fn count_marker(&self, marker: &StrMarker) -> MarkerCount {
        MarkerCount {
            repeat_unit: marker.repeat_unit.clone(),
            expected: marker.expected_occurrences,
            in_first: count_occurrences(self.first_sequence, &marker.repeat_unit),
            in_second: count_occurrences(self.second_sequence, &marker.repeat_unit),
        }
    }

    /// Full breakdown of how a profile compares with the sequences
    pub fn evaluate(&self, profile: &Profile) -> ProfileEvaluation {
        let markers: Vec<MarkerCount> = profile
            .markers()
            .iter()
            .map(|marker| self.count_marker(marker))
            .collect();
        let satisfied = markers.iter().filter(|m| m.is_satisfied()).count();

        ProfileEvaluation {
            threshold: majority_threshold(markers.len()),
            markers,
            satisfied,
        }
    }

    /// Whether a profile should be flagged as of interest
    pub fn is_match(&self, profile: &Profile) -> bool {
        let satisfied = profile
            .markers()
            .iter()
            .filter(|marker| self.count_marker(marker).is_satisfied())
            .count();
        satisfied >= majority_threshold(profile.markers().len())
    }
}
