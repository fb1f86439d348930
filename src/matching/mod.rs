//! STR matching of profiles against the two unknown sequences.
//!
//! - [`count_occurrences`]: non-overlapping repeat-unit counting
//! - [`MatchingEngine`]: evaluates profiles against a pair of sequences
//! - [`ProfileEvaluation`]: per-marker breakdown and majority decision
//!
//! ## Matching Rule
//!
//! 1. For each marker, count its repeat unit in both sequences (non-overlapping)
//! 2. A marker is satisfied when the two counts add up to its expected count
//! 3. A profile matches when at least half of its markers, rounded up, are satisfied
//!
//! ## Example
//!
//! ```rust
//! use str_match::core::Profile;
//! use str_match::matching::MatchingEngine;
//!
//! let engine = MatchingEngine::new("AAAGAAAGAAAGTTT", "AATGAAAGAAAGTTT");
//! let profile = Profile::from_pairs([("AAAG", 5)]);
//!
//! let evaluation = engine.evaluate(&profile);
//! assert_eq!(evaluation.satisfied, 1);
//! assert!(evaluation.is_match());
//! ```

pub mod engine;
pub mod occurrences;

pub use engine::{majority_threshold, MarkerCount, MatchingEngine, ProfileEvaluation};
pub use occurrences::count_occurrences;
