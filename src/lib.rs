//! # str-match
//!
//! A library for narrowing a set of genetic profiles down to those consistent
//! with two unknown DNA sequences, using short tandem repeat (STR) counts.
//!
//! Each profile lists STR markers: a repeat unit such as `AGAT` and the number
//! of times it is expected to occur. A marker agrees with the evidence when the
//! non-overlapping occurrences of its unit in the first sequence plus those in
//! the second add up to the expected count. A profile is *of interest* when at
//! least half of its markers, rounded up, agree.
//!
//! ## Features
//!
//! - **Ordered registry**: Profiles keyed by "last, first" in a binary search tree
//! - **Flagging pass**: Marks every profile that matches the two sequences
//! - **Level-order listing**: Names of profiles not of interest, breadth-first
//! - **Cleanup**: Removes every profile not of interest
//! - **Case files**: JSON input with validation at the boundary
//!
//! ## Example
//!
//! ```rust
//! use str_match::{Profile, ProfileRegistry};
//!
//! let mut registry = ProfileRegistry::new();
//! registry.load("AAAGAAAGAAAGTTT", "AATGAAAGAAAGTTT");
//! registry.insert("Franklin, Rosalind", Profile::from_pairs([("AAAG", 5)]));
//!
//! registry.flag_all();
//! assert_eq!(registry.count_matching(true), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`](crate::core): Markers, profiles and person names
//! - [`registry`]: The profile tree and its operations
//! - [`matching`]: Occurrence counting and the majority rule
//! - [`parsing`]: JSON case file loading
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod registry;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::marker::StrMarker;
pub use crate::core::profile::Profile;
pub use crate::core::types::PersonName;
pub use matching::engine::{MatchingEngine, ProfileEvaluation};
pub use registry::node::TreeNode;
pub use registry::store::{ProfileRegistry, RegistryError};
