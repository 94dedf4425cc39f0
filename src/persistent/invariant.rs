//! Structural checks for [`PersistentRedBlackTree`](super::PersistentRedBlackTree).

use thiserror::Error;

/// A broken Red-Black Tree invariant, as reported by
/// [`PersistentRedBlackTree::validate`](super::PersistentRedBlackTree::validate).
///
/// Depths count edges from the root, which is at depth 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The root node is red.
    #[error("root node is red")]
    RedRoot,
    /// A red node has a red child.
    #[error("red node at depth {depth} has a red parent")]
    ConsecutiveReds {
        /// Depth of the child node.
        depth: usize,
    },
    /// The two subtrees of a node contain different numbers of black nodes.
    #[error("unbalanced black height at depth {depth}: left {left}, right {right}")]
    UnbalancedBlackHeight {
        /// Depth of the node whose subtrees disagree.
        depth: usize,
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },
    /// A node is not strictly between the bounds set by its ancestors.
    #[error("node at depth {depth} breaks the search order")]
    OrderViolation {
        /// Depth of the misplaced node.
        depth: usize,
    },
    /// The cached element count disagrees with the reachable node count.
    #[error("tree reports {expected} elements but {actual} nodes are reachable")]
    LengthMismatch {
        /// The cached length.
        expected: usize,
        /// The number of reachable nodes.
        actual: usize,
    },
}

/// Shape of a tree that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStatistics {
    /// Number of elements.
    pub length: usize,
    /// Nodes on the longest root-to-leaf path.
    pub height: usize,
    /// Black nodes on every root-to-leaf path.
    pub black_height: usize,
}

impl TreeStatistics {
    /// Upper bound on the height of a valid tree holding `length` elements:
    /// `2 * log2(length + 1)`.
    #[must_use]
    pub fn height_bound(length: usize) -> usize {
        2 * (usize::BITS - length.saturating_add(1).leading_zeros()) as usize
    }

    /// Returns `true` if the height is within [`height_bound`](Self::height_bound).
    #[must_use]
    pub fn is_logarithmic(&self) -> bool {
        self.height <= Self::height_bound(self.length)
    }
}
