use std::cmp::Ordering;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::profile::Profile;
use crate::matching::engine::MatchingEngine;
use crate::registry::node::{InOrderIter, LevelOrderIter, PreOrderIter, TreeNode};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Cannot remove '{0}': registry is empty")]
    EmptyRegistry(String),
}

type Link = Option<Box<TreeNode>>;

/// Profiles keyed by full name in an unbalanced binary search tree,
/// together with the two unknown sequences they are checked against
#[derive(Debug, Default)]
pub struct ProfileRegistry {
    root: Link,

    /// Number of nodes in the tree
    len: usize,

    first_sequence: String,
    second_sequence: String,
}

impl ProfileRegistry {
    /// Create an empty registry with empty sequences
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the two unknown sequences used by [`flag_all`](Self::flag_all)
    pub fn load(
        &mut self,
        first_sequence: impl Into<String>,
        second_sequence: impl Into<String>,
    ) {
        self.first_sequence = first_sequence.into();
        self.second_sequence = second_sequence.into();
        debug!(
            first_len = self.first_sequence.len(),
            second_len = self.second_sequence.len(),
            "Loaded unknown sequences"
        );
    }

    pub fn first_sequence(&self) -> &str {
        &self.first_sequence
    }

    pub fn second_sequence(&self) -> &str {
        &self.second_sequence
    }

    /// Root of the tree, for callers that walk it themselves
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Number of profiles in the registry
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a profile under `name`.
    ///
    /// Descends right only when `name` sorts after the visited key; equal keys
    /// go left, so inserting an existing name adds a second node rather than
    /// replacing the first. No rebalancing is done.
    pub fn insert(&mut self, name: impl Into<String>, profile: Profile) {
        let name = name.into();
        let mut depth = 0usize;
        let mut slot = &mut self.root;

        while let Some(node) = slot {
            if name == node.name {
                warn!(name = %name, "Inserting duplicate name; existing profile is kept");
            }
            slot = if name > node.name {
                &mut node.right
            } else {
                &mut node.left
            };
            depth += 1;
        }

        debug!(name = %name, depth, "Inserted profile");
        *slot = Some(Box::new(TreeNode::new(name, profile)));
        self.len += 1;
    }

    /// Look up a profile by name
    pub fn get(&self, name: &str) -> Option<&Profile> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match name.cmp(node.name()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node.profile()),
            };
        }
        None
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove the profile stored under `name`, returning it.
    ///
    /// Removing a name that is not present is a no-op and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::EmptyRegistry` if the registry has no profiles.
    pub fn remove(&mut self, name: &str) -> Result<Option<Profile>, RegistryError> {
        if self.is_empty() {
            return Err(RegistryError::EmptyRegistry(name.to_string()));
        }
        Ok(self.delete(name))
    }

    fn delete(&mut self, name: &str) -> Option<Profile> {
        let Some(removed) = detach(locate(&mut self.root, name)) else {
            debug!(name, "No profile to remove");
            return None;
        };
        self.len -= 1;
        debug!(name, "Removed profile");
        Some(removed.profile)
    }

    /// Count profiles whose interest flag equals `of_interest`
    pub fn count_matching(&self, of_interest: bool) -> usize {
        self.pre_order_iter()
            .filter(|node| node.profile.is_of_interest() == of_interest)
            .count()
    }

    /// Names of all profiles not flagged as of interest, in level order
    pub fn list_matching(&self) -> Vec<String> {
        LevelOrderIter::new(self.root())
            .filter(|node| !node.profile.is_of_interest())
            .map(|node| node.name.clone())
            .collect()
    }

    /// Flag every profile that agrees with the unknown sequences.
    ///
    /// Existing flags are never cleared. Returns the number of profiles newly
    /// flagged by this pass.
    pub fn flag_all(&mut self) -> usize {
        let engine = MatchingEngine::new(&self.first_sequence, &self.second_sequence);
        let mut newly_flagged = 0usize;
        let mut stack: Vec<&mut TreeNode> = self.root.as_deref_mut().into_iter().collect();

        while let Some(node) = stack.pop() {
            if !node.profile.is_of_interest() && engine.is_match(&node.profile) {
                node.profile.mark_of_interest();
                newly_flagged += 1;
            }
            stack.extend(node.right.as_deref_mut());
            stack.extend(node.left.as_deref_mut());
        }

        info!(newly_flagged, total = self.len, "Flagged profiles of interest");
        newly_flagged
    }

    /// Remove every profile not flagged as of interest.
    ///
    /// Names are collected first and then removed one by one in level order,
    /// since removal restructures the tree. Returns the number removed.
    ///
    /// Afterwards no unflagged profile remains only if names are unique: removal
    /// by name takes the first equal key, so with a flagged and an unflagged
    /// profile under the same name the flagged one is removed instead.
    pub fn cleanup(&mut self) -> usize {
        let unflagged = self.list_matching();
        let mut removed = 0usize;
        for name in &unflagged {
            if self.delete(name).is_some() {
                removed += 1;
            }
        }

        info!(removed, remaining = self.len, "Removed profiles not of interest");
        removed
    }

    /// All names in key order
    pub fn names(&self) -> Vec<&str> {
        self.in_order_iter().map(TreeNode::name).collect()
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&TreeNode, usize)> =
            self.root().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|child| (child, depth + 1)));
            stack.extend(node.right().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Iterate nodes parents-first
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self.root())
    }

    /// Iterate nodes in key order
    pub fn in_order_iter(&self) -> InOrderIter<'_> {
        InOrderIter::new(self.root())
    }

    /// Iterate nodes breadth-first
    pub fn level_order_iter(&self) -> LevelOrderIter<'_> {
        LevelOrderIter::new(self.root())
    }
}

impl Drop for ProfileRegistry {
    // Iterative teardown: a recursive drop of a long spine overflows the stack
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Find the link holding `name`, or the empty link where the search ended.
///
/// Less goes left, greater goes right, and the first equal key stops the search.
fn locate<'a>(mut slot: &'a mut Link, name: &str) -> &'a mut Link {
    loop {
        match slot.as_deref().map(|node| name.cmp(node.name())) {
            Some(Ordering::Less) => {
                if let Some(node) = slot {
                    slot = &mut node.left;
                }
            }
            Some(Ordering::Greater) => {
                if let Some(node) = slot {
                    slot = &mut node.right;
                }
            }
            Some(Ordering::Equal) | None => return slot,
        }
    }
}

/// Unlink the node held by `slot`, splicing its subtrees back in its place.
///
/// With two children, the in-order successor (leftmost node of the right
/// subtree) takes over the removed node's position and both of its subtrees.
fn detach(slot: &mut Link) -> Option<Box<TreeNode>> {
    let mut node = slot.take()?;

    *slot = match (node.left.take(), node.right.take()) {
        (left, None) => left,
        (None, right) => right,
        (Some(left), Some(right)) => {
            let mut rest = Some(right);
            take_min(&mut rest).map(|mut successor| {
                successor.left = Some(left);
                successor.right = rest;
                successor
            })
        }
    };

    Some(node)
}

/// Unlink the leftmost node under `slot`, promoting its right subtree.
fn take_min(mut slot: &mut Link) -> Option<Box<TreeNode>> {
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        if let Some(node) = slot {
            slot = &mut node.left;
        }
    }

    let mut min = slot.take()?;
    *slot = min.right.take();
    Some(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_profile() -> Profile {
        Profile::new(Vec::new())
    }

    fn registry_with(names: &[&str]) -> ProfileRegistry {
        let mut registry = ProfileRegistry::new();
        for name in names {
            registry.insert(*name, empty_profile());
        }
        registry
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = ProfileRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.root().is_none());
        assert_eq!(registry.first_sequence(), "");
        assert_eq!(registry.height(), 0);
    }

    #[test]
    fn test_load_sequences() {
        let mut registry = ProfileRegistry::new();
        registry.load("AGAT", "TCTA");
        assert_eq!(registry.first_sequence(), "AGAT");
        assert_eq!(registry.second_sequence(), "TCTA");
    }

    #[test]
    fn test_insert_first_becomes_root() {
        let registry = registry_with(&["Lee, Ann"]);
        assert_eq!(registry.root().unwrap().name(), "Lee, Ann");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_insert_positions() {
        let registry = registry_with(&["m", "d", "t", "a"]);
        let root = registry.root().unwrap();
        assert_eq!(root.name(), "m");
        assert_eq!(root.left().unwrap().name(), "d");
        assert_eq!(root.right().unwrap().name(), "t");
        assert_eq!(root.left().unwrap().left().unwrap().name(), "a");
        assert_eq!(registry.height(), 3);
    }

    #[test]
    fn test_duplicate_goes_left() {
        let registry = registry_with(&["m", "m"]);
        let root = registry.root().unwrap();
        assert_eq!(root.left().unwrap().name(), "m");
        assert!(root.right().is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_get() {
        let mut registry = registry_with(&["m", "d"]);
        registry.insert("t", Profile::from_pairs([("AGAT", 3)]));

        assert_eq!(registry.get("t").unwrap().markers().len(), 1);
        assert!(registry.contains("d"));
        assert!(!registry.contains("x"));
    }

    #[test]
    fn test_remove_from_empty_is_error() {
        let mut registry = ProfileRegistry::new();
        assert_eq!(
            registry.remove("Lee, Ann"),
            Err(RegistryError::EmptyRegistry("Lee, Ann".to_string()))
        );
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut registry = registry_with(&["m", "d", "t"]);
        assert_eq!(registry.remove("q"), Ok(None));
        assert_eq!(registry.names(), ["d", "m", "t"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_remove_leaf() {
        let mut registry = registry_with(&["m", "d", "t"]);
        assert!(registry.remove("d").unwrap().is_some());
        assert!(registry.root().unwrap().left().is_none());
        assert_eq!(registry.names(), ["m", "t"]);
    }

    #[test]
    fn test_remove_node_with_only_left_child() {
        let mut registry = registry_with(&["m", "d", "a"]);
        registry.remove("d").unwrap();
        assert_eq!(registry.root().unwrap().left().unwrap().name(), "a");
    }

    #[test]
    fn test_remove_node_with_only_right_child() {
        let mut registry = registry_with(&["m", "t", "z"]);
        registry.remove("t").unwrap();
        assert_eq!(registry.root().unwrap().right().unwrap().name(), "z");
    }

    #[test]
    fn test_remove_root_with_two_children() {
        //        m
        //      /   \
        //     d     t
        //          / \
        //         p   z
        //          \
        //           r
        let mut registry = registry_with(&["m", "d", "t", "p", "z", "r"]);
        registry.remove("m").unwrap();

        let root = registry.root().unwrap();
        assert_eq!(root.name(), "p");
        assert_eq!(root.left().unwrap().name(), "d");
        let right = root.right().unwrap();
        assert_eq!(right.name(), "t");
        assert_eq!(right.left().unwrap().name(), "r");
        assert_eq!(registry.names(), ["d", "p", "r", "t", "z"]);
    }

    #[test]
    fn test_remove_successor_is_direct_right_child() {
        let mut registry = registry_with(&["m", "d", "t", "z"]);
        registry.remove("m").unwrap();

        let root = registry.root().unwrap();
        assert_eq!(root.name(), "t");
        assert_eq!(root.left().unwrap().name(), "d");
        assert_eq!(root.right().unwrap().name(), "z");
    }

    #[test]
    fn test_remove_last_node() {
        let mut registry = registry_with(&["m"]);
        assert!(registry.remove("m").unwrap().is_some());
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_remove_returns_profile() {
        let mut registry = ProfileRegistry::new();
        registry.insert("m", Profile::from_pairs([("AGAT", 3)]));
        let removed = registry.remove("m").unwrap().unwrap();
        assert_eq!(removed.markers()[0].repeat_unit, "AGAT");
    }

    #[test]
    fn test_flag_all_and_counts() {
        let mut registry = ProfileRegistry::new();
        registry.load("AAAGAAAGAAAGTTT", "AATGAAAGAAAGTTT");
        registry.insert("m", Profile::from_pairs([("AAAG", 5)]));
        registry.insert("d", Profile::from_pairs([("AAAG", 1)]));
        registry.insert("t", Profile::from_pairs([("AAAG", 5), ("TTT", 2), ("GGG", 1)]));

        assert_eq!(registry.count_matching(false), 3);
        assert_eq!(registry.flag_all(), 2);
        assert_eq!(registry.count_matching(true), 2);
        assert_eq!(registry.count_matching(false), 1);
        assert_eq!(registry.list_matching(), ["d"]);
    }

    #[test]
    fn test_flag_all_is_idempotent() {
        let mut registry = ProfileRegistry::new();
        registry.load("AGATAGAT", "");
        registry.insert("m", Profile::from_pairs([("AGAT", 2)]));
        registry.insert("d", Profile::from_pairs([("AGAT", 3)]));

        assert_eq!(registry.flag_all(), 1);
        assert_eq!(registry.flag_all(), 0);
        assert!(registry.get("m").unwrap().is_of_interest());
        assert!(!registry.get("d").unwrap().is_of_interest());
    }

    #[test]
    fn test_flags_survive_new_sequences() {
        let mut registry = ProfileRegistry::new();
        registry.load("AGAT", "");
        registry.insert("m", Profile::from_pairs([("AGAT", 1)]));
        registry.flag_all();

        registry.load("GGGG", "");
        registry.flag_all();
        assert!(registry.get("m").unwrap().is_of_interest());
    }

    #[test]
    fn test_list_matching_level_order() {
        let registry = registry_with(&["m", "d", "t", "a", "g", "z"]);
        assert_eq!(registry.list_matching(), ["m", "d", "t", "a", "g", "z"]);
    }

    #[test]
    fn test_cleanup_removes_unflagged() {
        let mut registry = ProfileRegistry::new();
        registry.load("AGATAGAT", "TCTA");
        registry.insert("m", Profile::from_pairs([("AGAT", 9)]));
        registry.insert("d", Profile::from_pairs([("AGAT", 2)]));
        registry.insert("t", Profile::from_pairs([("TCTA", 1)]));
        registry.insert("a", Profile::from_pairs([("TCTA", 5)]));

        registry.flag_all();
        assert_eq!(registry.cleanup(), 2);
        assert_eq!(registry.names(), ["d", "t"]);
        assert_eq!(registry.count_matching(false), 0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_cleanup_on_empty_registry() {
        let mut registry = ProfileRegistry::new();
        assert_eq!(registry.cleanup(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_cleanup_with_duplicate_names() {
        let mut registry = registry_with(&["m", "m", "d"]);
        assert_eq!(registry.cleanup(), 3);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_cleanup_with_flagged_duplicate() {
        let mut registry = ProfileRegistry::new();
        registry.load("AGAT", "");
        registry.insert("m", Profile::from_pairs([("AGAT", 1)]));
        registry.insert("m", Profile::from_pairs([("AGAT", 7)]));

        assert_eq!(registry.flag_all(), 1);
        assert_eq!(registry.cleanup(), 1);

        // The first equal key is the flagged root, so the unflagged copy survives
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.count_matching(false), 1);
        assert_eq!(registry.count_matching(true), 0);
    }

    #[test]
    fn test_degenerate_tree() {
        // Sorted insertion builds a single right spine
        let mut registry = ProfileRegistry::new();
        for i in 0..10_000 {
            registry.insert(format!("{i:05}"), empty_profile());
        }
        assert_eq!(registry.height(), 10_000);
        assert_eq!(registry.count_matching(false), 10_000);
        assert_eq!(registry.flag_all(), 10_000);
        assert!(registry.remove("00000").unwrap().is_some());
        assert!(registry.remove("09999").unwrap().is_some());
        assert_eq!(registry.len(), 9_998);
    }
}
