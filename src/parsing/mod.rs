//! Loading case files into a [`ProfileRegistry`](crate::registry::ProfileRegistry).
//!
//! A case file is a JSON document with the two unknown sequences and the
//! candidate profiles. Validation happens here, before anything is inserted:
//! empty names, empty or whitespace-containing repeat units, duplicate names
//! and oversized inputs are rejected with a
//! [`ValidationError`](crate::utils::validation::ValidationError).
//!
//! ## Example
//!
//! ```rust,no_run
//! use str_match::parsing::case_file::load_case_file;
//! use std::path::Path;
//!
//! let mut registry = load_case_file(Path::new("case.json")).unwrap();
//! registry.flag_all();
//! println!("{} profiles of interest", registry.count_matching(true));
//! ```
//!
//! ## Format
//!
//! ```json
//! {
//!   "first_sequence": "AAAGAAAGAAAGTTT",
//!   "second_sequence": "AATGAAAGAAAGTTT",
//!   "profiles": [
//!     {
//!       "first_name": "Rosalind",
//!       "last_name": "Franklin",
//!       "markers": [{ "repeat_unit": "AAAG", "expected_occurrences": 5 }]
//!     }
//!   ]
//! }
//! ```
//!
//! Profiles are keyed "last, first" and inserted in file order, which fixes
//! the shape of the tree.

pub mod case_file;
