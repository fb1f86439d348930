use std::collections::VecDeque;

use crate::core::profile::Profile;

/// A node of the profile tree, keyed by the person's full name.
///
/// Children are owned exclusively by their parent; the registry owns the root.
#[derive(Debug)]
pub struct TreeNode {
    pub(crate) name: String,
    pub(crate) profile: Profile,
    pub(crate) left: Option<Box<TreeNode>>,
    pub(crate) right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub(crate) fn new(name: String, profile: Profile) -> Self {
        Self {
            name,
            profile,
            left: None,
            right: None,
        }
    }

    /// Full name, formatted "last, first"
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }
}

/// Pre-order traversal (node, then left subtree, then right subtree).
///
/// Uses an explicit stack so degenerate trees cannot exhaust the call stack.
pub struct PreOrderIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> PreOrderIter<'a> {
    pub(crate) fn new(root: Option<&'a TreeNode>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Right first, so left is processed first
        self.stack.extend(node.right());
        self.stack.extend(node.left());

        Some(node)
    }
}

/// In-order traversal, yielding nodes in key order.
pub struct InOrderIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> InOrderIter<'a> {
    pub(crate) fn new(root: Option<&'a TreeNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

/// Level-order (breadth-first) traversal: root, then each level left to right.
pub struct LevelOrderIter<'a> {
    queue: VecDeque<&'a TreeNode>,
}

impl<'a> LevelOrderIter<'a> {
    pub(crate) fn new(root: Option<&'a TreeNode>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}
