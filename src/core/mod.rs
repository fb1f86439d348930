//! Core data types for STR profile matching.
//!
//! - [`StrMarker`]: a repeat unit and the number of times it is expected to occur
//! - [`Profile`]: the ordered markers recorded for one person plus an interest flag
//! - [`PersonName`]: first/last name pair producing the "last, first" registry key
//!
//! ## Markers
//!
//! A marker is checked against *both* unknown sequences at once: it agrees with
//! them when the non-overlapping occurrences of its repeat unit in the first
//! sequence plus those in the second add up to its expected count.
//!
//! | Repeat unit | Expected | Sequence 1 | Sequence 2 | Satisfied |
//! |-------------|----------|------------|------------|-----------|
//! | AAAG        | 5        | 3          | 2          | yes       |
//! | AAAG        | 4        | 3          | 2          | no        |

pub mod marker;
pub mod profile;
pub mod types;

pub use marker::StrMarker;
pub use profile::Profile;
pub use types::PersonName;
