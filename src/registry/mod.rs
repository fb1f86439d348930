//! Profile storage in an ordered, unbalanced binary search tree.
//!
//! The registry keys each [`Profile`](crate::core::Profile) by the person's full
//! name ("last, first") and keeps the two unknown sequences the profiles are
//! checked against.
//!
//! ## Operations
//!
//! | Operation | Traversal | Notes |
//! |-----------|-----------|-------|
//! | `insert` | descent | equal names go left; no rebalancing |
//! | `remove` | descent | in-order successor replaces a node with two children |
//! | `count_matching` | pre-order | counts by interest flag |
//! | `list_matching` | level order | unflagged names, breadth-first |
//! | `flag_all` | pre-order | marks profiles that match the sequences |
//! | `cleanup` | level order | snapshot unflagged names, then remove each |
//!
//! All traversals use explicit stacks or queues, so insertion order that
//! degenerates the tree into a list costs time but not call-stack depth.
//!
//! ## Example
//!
//! ```rust
//! use str_match::core::Profile;
//! use str_match::registry::ProfileRegistry;
//!
//! let mut registry = ProfileRegistry::new();
//! registry.load("AAAGAAAGAAAGTTT", "AATGAAAGAAAGTTT");
//! registry.insert("Franklin, Rosalind", Profile::from_pairs([("AAAG", 5)]));
//! registry.insert("Crick, Francis", Profile::from_pairs([("AAAG", 2)]));
//!
//! registry.flag_all();
//! assert_eq!(registry.list_matching(), ["Crick, Francis"]);
//!
//! registry.cleanup();
//! assert_eq!(registry.names(), ["Franklin, Rosalind"]);
//! ```

pub mod node;
pub mod store;

pub use node::TreeNode;
pub use store::{ProfileRegistry, RegistryError};
