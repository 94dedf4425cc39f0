//! Persistent (immutable) ordered set based on a left-leaning Red-Black Tree.
//!
//! This module provides [`PersistentRedBlackTree`], an immutable ordered set
//! that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! Every insertion returns a new tree. The input tree is never touched: only
//! the nodes on the path from the root to the insertion point (plus the few
//! nodes produced by rotations and recoloring on that path) are allocated,
//! and every other subtree is shared by reference with the input.
//!
//! - O(log N) insert
//! - O(log N) contains
//! - O(log N) min/max
//! - O(N) in-order traversal
//! - O(1) len, `is_empty` and clone
//!
//! # Examples
//!
//! ```rust
//! use wordtree::persistent::PersistentRedBlackTree;
//!
//! let tree = PersistentRedBlackTree::new()
//!     .insert(5)
//!     .insert(3)
//!     .insert(8);
//!
//! // Elements are always in sorted order
//! assert_eq!(tree.in_order(), vec![3, 5, 8]);
//!
//! // Inserting a present element is a no-op
//! let same = tree.insert(3);
//! assert!(same.ptr_eq(&tree));
//! ```
//!
//! # Internal Structure
//!
//! The tree maintains the following invariants:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. Red nodes have only black children
//! 4. Every path from root to an empty subtree has the same number of black nodes
//! 5. Values are strictly ordered, so there are no duplicates
//!
//! Red links only ever lean left, which keeps the fix-up after an insert to
//! three local steps per level.

use super::ReferenceCounter;
use super::invariant::{InvariantViolation, TreeStatistics};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::typeclass::{Foldable, TypeConstructor};

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a Red-Black Tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Color {
    Red,
    Black,
}

// =============================================================================
// Node Definition
// =============================================================================

type Link<T> = Option<ReferenceCounter<Node<T>>>;

/// Internal node structure. Never modified once it is reachable from a tree.
struct Node<T> {
    value: T,
    color: Color,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new red leaf.
    const fn new_red(value: T) -> Self {
        Self {
            value,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

impl<T: Clone> Node<T> {
    /// Creates a copy of this node with a new color, sharing both children.
    fn with_color(&self, color: Color) -> Self {
        Self {
            value: self.value.clone(),
            color,
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }

    /// Creates a copy of this node with new children, keeping its color.
    fn with_children(&self, left: Link<T>, right: Link<T>) -> Self {
        Self {
            value: self.value.clone(),
            color: self.color,
            left,
            right,
        }
    }
}

/// Helper function to check if an optional node is red.
fn is_red<T>(node: Option<&ReferenceCounter<Node<T>>>) -> bool {
    node.is_some_and(|node| node.is_red())
}

// =============================================================================
// PersistentRedBlackTree Definition
// =============================================================================

/// A persistent (immutable) ordered set based on a Red-Black Tree.
///
/// Elements must implement `Ord`; the tree relies on it being a strict total
/// order. Cloning a tree is O(1) and yields a handle to the same version.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `insert`       | O(log N)   |
/// | `contains`     | O(log N)   |
/// | `min`/`max`    | O(log N)   |
/// | `in_order`     | O(N)       |
/// | `len`          | O(1)       |
///
/// # Examples
///
/// ```rust
/// use wordtree::persistent::PersistentRedBlackTree;
///
/// let before = PersistentRedBlackTree::new().insert("quick").insert("the");
/// let after = before.insert("fox");
///
/// assert_eq!(before.in_order(), vec!["quick", "the"]); // Original unchanged
/// assert_eq!(after.in_order(), vec!["fox", "quick", "the"]);
/// ```
pub struct PersistentRedBlackTree<T> {
    /// Root node of the tree
    root: Link<T>,
    /// Number of elements
    length: usize,
}

impl<T> PersistentRedBlackTree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordtree::persistent::PersistentRedBlackTree;
    ///
    /// let tree: PersistentRedBlackTree<i32> = PersistentRedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Creates a new empty tree. Alias for [`new`](Self::new).
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Returns the number of elements in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// The empty tree has height 0 and a singleton has height 1.
    #[must_use]
    pub fn height(&self) -> usize {
        Self::height_of(self.root.as_ref())
    }

    fn height_of(node: Option<&ReferenceCounter<Node<T>>>) -> usize {
        node.map_or(0, |node_ref| {
            1 + Self::height_of(node_ref.left.as_ref()).max(Self::height_of(node_ref.right.as_ref()))
        })
    }

    /// Returns the number of black nodes on the path from the root to the
    /// leftmost empty subtree.
    ///
    /// For a valid tree every root-to-leaf path yields this same number.
    #[must_use]
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut current = self.root.as_ref();
        while let Some(node_ref) = current {
            if !node_ref.is_red() {
                count += 1;
            }
            current = node_ref.left.as_ref();
        }
        count
    }

    /// Returns `true` if both trees are the same version, i.e. they share
    /// their root node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordtree::persistent::PersistentRedBlackTree;
    ///
    /// let tree = PersistentRedBlackTree::new().insert(1).insert(2);
    /// assert!(tree.insert(2).ptr_eq(&tree));
    /// assert!(!tree.insert(3).ptr_eq(&tree));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (Some(root), Some(other_root)) => ReferenceCounter::ptr_eq(root, other_root),
            (None, None) => true,
            _ => false,
        }
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// The iterator walks the tree lazily and holds at most `height()`
    /// pending nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordtree::persistent::PersistentRedBlackTree;
    ///
    /// let tree: PersistentRedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// let elements: Vec<&i32> = tree.iter().collect();
    /// assert_eq!(elements, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentRedBlackTreeIterator<'_, T> {
        PersistentRedBlackTreeIterator::new(self.root.as_ref(), self.length)
    }
}

impl<T: Clone> PersistentRedBlackTree<T> {
    /// Returns the elements in ascending order as a materialized sequence.
    ///
    /// Visits the left subtree, then the node, then the right subtree.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordtree::persistent::PersistentRedBlackTree;
    ///
    /// let tree: PersistentRedBlackTree<i32> =
    ///     [5, 3, 8, 1, 4, 7, 9, 2, 6, 0].into_iter().collect();
    /// assert_eq!(tree.in_order(), (0..10).collect::<Vec<_>>());
    ///
    /// let empty: PersistentRedBlackTree<i32> = PersistentRedBlackTree::empty();
    /// assert!(empty.in_order().is_empty());
    /// ```
    #[must_use]
    pub fn in_order(&self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.length);
        Self::collect_in_order(self.root.as_ref(), &mut elements);
        elements
    }

    fn collect_in_order(node: Option<&ReferenceCounter<Node<T>>>, elements: &mut Vec<T>) {
        if let Some(node_ref) = node {
            Self::collect_in_order(node_ref.left.as_ref(), elements);
            elements.push(node_ref.value.clone());
            Self::collect_in_order(node_ref.right.as_ref(), elements);
        }
    }
}

impl<T: Clone + Ord> PersistentRedBlackTree<T> {
    /// Creates a tree containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self::new().insert(value)
    }

    /// Returns `true` if the tree contains the value.
    ///
    /// The value may be any borrowed form of the element type, but the
    /// ordering on the borrowed form must match the ordering on the element
    /// type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordtree::persistent::PersistentRedBlackTree;
    ///
    /// let tree = PersistentRedBlackTree::new().insert("fox".to_string());
    /// assert!(tree.contains("fox"));
    /// assert!(!tree.contains("Fox"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_ref();
        while let Some(node_ref) = current {
            match value.cmp(node_ref.value.borrow()) {
                Ordering::Less => current = node_ref.left.as_ref(),
                Ordering::Greater => current = node_ref.right.as_ref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Inserts a value into the tree.
    ///
    /// Returns a new tree containing every element of `self` plus `value`.
    /// If `value` is already present the result is the same version as
    /// `self` and no node is allocated.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordtree::persistent::PersistentRedBlackTree;
    ///
    /// let tree1 = PersistentRedBlackTree::new().insert(1);
    /// let tree2 = tree1.insert(2);
    ///
    /// assert_eq!(tree1.len(), 1); // Original unchanged
    /// assert_eq!(tree2.len(), 2); // New version
    /// ```
    #[must_use]
    pub fn insert(&self, value: T) -> Self {
        let Some(new_root) = Self::insert_into_node(self.root.as_ref(), value) else {
            return self.clone();
        };

        // Make root black
        let black_root = if new_root.is_red() {
            Node {
                color: Color::Black,
                ..new_root
            }
        } else {
            new_root
        };

        Self {
            root: Some(ReferenceCounter::new(black_root)),
            length: self.length + 1,
        }
    }

    /// Recursive helper for insert.
    ///
    /// Returns the rebuilt subtree root, or `None` if the value was already
    /// present and the subtree is unchanged.
    fn insert_into_node(node: Option<&ReferenceCounter<Node<T>>>, value: T) -> Option<Node<T>> {
        let Some(node_ref) = node else {
            return Some(Node::new_red(value));
        };

        let rebuilt = match value.cmp(&node_ref.value) {
            Ordering::Less => {
                let new_left = Self::insert_into_node(node_ref.left.as_ref(), value)?;
                node_ref.with_children(
                    Some(ReferenceCounter::new(new_left)),
                    node_ref.right.clone(),
                )
            }
            Ordering::Greater => {
                let new_right = Self::insert_into_node(node_ref.right.as_ref(), value)?;
                node_ref.with_children(
                    node_ref.left.clone(),
                    Some(ReferenceCounter::new(new_right)),
                )
            }
            Ordering::Equal => return None,
        };

        Some(Self::fix_up(rebuilt))
    }

    /// Restores the local invariants of a freshly rebuilt node.
    fn fix_up(node: Node<T>) -> Node<T> {
        let node = if is_red(node.right.as_ref()) && !is_red(node.left.as_ref()) {
            Self::rotate_left(node)
        } else {
            node
        };

        let left_left_is_red = node
            .left
            .as_ref()
            .is_some_and(|left| left.is_red() && is_red(left.left.as_ref()));
        let node = if left_left_is_red {
            Self::rotate_right(node)
        } else {
            node
        };

        if is_red(node.left.as_ref()) && is_red(node.right.as_ref()) {
            Self::flip_colors(node)
        } else {
            node
        }
    }

    /// Rotates the tree to the left around the given node.
    ///
    /// The right child is lifted into the node's position and keeps the
    /// node's color; the node itself is lowered to a red left child.
    fn rotate_left(node: Node<T>) -> Node<T> {
        let Node {
            value,
            color,
            left,
            right,
        } = node;
        let Some(right) = right else {
            return Node {
                value,
                color,
                left,
                right: None,
            };
        };

        let lowered = Node {
            value,
            color: Color::Red,
            left,
            right: right.left.clone(),
        };
        Node {
            value: right.value.clone(),
            color,
            left: Some(ReferenceCounter::new(lowered)),
            right: right.right.clone(),
        }
    }

    /// Rotates the tree to the right around the given node.
    fn rotate_right(node: Node<T>) -> Node<T> {
        let Node {
            value,
            color,
            left,
            right,
        } = node;
        let Some(left) = left else {
            return Node {
                value,
                color,
                left: None,
                right,
            };
        };

        let lowered = Node {
            value,
            color: Color::Red,
            left: left.right.clone(),
            right,
        };
        Node {
            value: left.value.clone(),
            color,
            left: left.left.clone(),
            right: Some(ReferenceCounter::new(lowered)),
        }
    }

    /// Turns the node red and both of its children black.
    fn flip_colors(node: Node<T>) -> Node<T> {
        let darken =
            |child: Link<T>| child.map(|child| ReferenceCounter::new(child.with_color(Color::Black)));
        Node {
            value: node.value,
            color: Color::Red,
            left: darken(node.left),
            right: darken(node.right),
        }
    }

    /// Returns the smallest element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordtree::persistent::PersistentRedBlackTree;
    ///
    /// let tree: PersistentRedBlackTree<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.min(), Some(&1));
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root.as_ref()?;
        while let Some(left) = current.left.as_ref() {
            current = left;
        }
        Some(&current.value)
    }

    /// Returns the largest element.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root.as_ref()?;
        while let Some(right) = current.right.as_ref() {
            current = right;
        }
        Some(&current.value)
    }

    /// Checks every Red-Black invariant and the cached length.
    ///
    /// Returns the tree's shape on success.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found, searching depth first
    /// from the root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordtree::persistent::PersistentRedBlackTree;
    ///
    /// let tree: PersistentRedBlackTree<i32> = (0..100).collect();
    /// let statistics = tree.validate().unwrap();
    /// assert_eq!(statistics.length, 100);
    /// ```
    pub fn validate(&self) -> Result<TreeStatistics, InvariantViolation> {
        if is_red(self.root.as_ref()) {
            return Err(InvariantViolation::RedRoot);
        }

        let mut counted = 0;
        let black_height =
            Self::validate_node(self.root.as_ref(), None, None, false, 0, &mut counted)?;
        if counted != self.length {
            return Err(InvariantViolation::LengthMismatch {
                expected: self.length,
                actual: counted,
            });
        }

        Ok(TreeStatistics {
            length: counted,
            height: self.height(),
            black_height,
        })
    }

    /// Recursive helper for validate. Returns the black height of the subtree.
    fn validate_node<'a>(
        node: Option<&'a ReferenceCounter<Node<T>>>,
        lower: Option<&'a T>,
        upper: Option<&'a T>,
        parent_is_red: bool,
        depth: usize,
        counted: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        let Some(node_ref) = node else {
            return Ok(0);
        };

        if parent_is_red && node_ref.is_red() {
            return Err(InvariantViolation::ConsecutiveReds { depth });
        }

        let above_lower = lower.is_none_or(|bound| *bound < node_ref.value);
        let below_upper = upper.is_none_or(|bound| node_ref.value < *bound);
        if !(above_lower && below_upper) {
            return Err(InvariantViolation::OrderViolation { depth });
        }
        *counted += 1;

        let left_blacks = Self::validate_node(
            node_ref.left.as_ref(),
            lower,
            Some(&node_ref.value),
            node_ref.is_red(),
            depth + 1,
            counted,
        )?;
        let right_blacks = Self::validate_node(
            node_ref.right.as_ref(),
            Some(&node_ref.value),
            upper,
            node_ref.is_red(),
            depth + 1,
            counted,
        )?;
        if left_blacks != right_blacks {
            return Err(InvariantViolation::UnbalancedBlackHeight {
                depth,
                left: left_blacks,
                right: right_blacks,
            });
        }

        Ok(left_blacks + usize::from(!node_ref.is_red()))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A lazy in-order iterator over the elements of a [`PersistentRedBlackTree`].
pub struct PersistentRedBlackTreeIterator<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> PersistentRedBlackTreeIterator<'a, T> {
    fn new(root: Option<&'a ReferenceCounter<Node<T>>>, length: usize) -> Self {
        let mut iterator = Self {
            stack: Vec::new(),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut node: Option<&'a ReferenceCounter<Node<T>>>) {
        while let Some(node_ref) = node {
            self.stack.push(node_ref);
            node = node_ref.left.as_ref();
        }
    }
}

impl<'a, T> Iterator for PersistentRedBlackTreeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_ref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentRedBlackTreeIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An owning iterator over the elements of a [`PersistentRedBlackTree`].
///
/// Nodes may be shared with other versions, so elements are cloned out.
pub struct PersistentRedBlackTreeIntoIterator<T> {
    elements: std::vec::IntoIter<T>,
}

impl<T> Iterator for PersistentRedBlackTreeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> DoubleEndedIterator for PersistentRedBlackTreeIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl<T> ExactSizeIterator for PersistentRedBlackTreeIntoIterator<T> {
    fn len(&self) -> usize {
        self.elements.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentRedBlackTree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for PersistentRedBlackTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for PersistentRedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, element| tree.insert(element))
    }
}

impl<T: Clone> IntoIterator for PersistentRedBlackTree<T> {
    type Item = T;
    type IntoIter = PersistentRedBlackTreeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        PersistentRedBlackTreeIntoIterator {
            elements: self.in_order().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a PersistentRedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = PersistentRedBlackTreeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentRedBlackTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentRedBlackTree<T> {}

/// Hashes the length followed by every element in ascending order, so trees
/// with equal content hash equally whatever their insertion order.
impl<T: Hash> Hash for PersistentRedBlackTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentRedBlackTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentRedBlackTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for PersistentRedBlackTree<T> {
    type Inner = T;
}

impl<T: Clone> Foldable for PersistentRedBlackTree<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentRedBlackTree<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct PersistentRedBlackTreeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentRedBlackTreeVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    type Value = PersistentRedBlackTree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut tree = PersistentRedBlackTree::new();
        while let Some(element) = access.next_element()? {
            tree = tree.insert(element);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentRedBlackTree<T>
where
    T: serde::Deserialize<'de> + Clone + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentRedBlackTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentRedBlackTree<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentRedBlackTree<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn leaf(value: i32, color: Color) -> Link<i32> {
        Some(ReferenceCounter::new(Node {
            value,
            color,
            left: None,
            right: None,
        }))
    }

    fn node_addresses<T>(tree: &PersistentRedBlackTree<T>) -> HashSet<*const Node<T>> {
        fn visit<T>(node: Option<&ReferenceCounter<Node<T>>>, addresses: &mut HashSet<*const Node<T>>) {
            if let Some(node_ref) = node {
                addresses.insert(ReferenceCounter::as_ptr(node_ref));
                visit(node_ref.left.as_ref(), addresses);
                visit(node_ref.right.as_ref(), addresses);
            }
        }
        let mut addresses = HashSet::new();
        visit(tree.root.as_ref(), &mut addresses);
        addresses
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_tree() {
        let tree: PersistentRedBlackTree<i32> = PersistentRedBlackTree::new();
        assert_eq!(format!("{tree}"), "{}");
    }

    #[rstest]
    fn test_display_multiple_elements_sorted() {
        let tree = PersistentRedBlackTree::new().insert(3).insert(1).insert(2);
        assert_eq!(format!("{tree}"), "{1, 2, 3}");
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    }

    // =========================================================================
    // Insert Structure Tests
    // =========================================================================

    #[rstest]
    fn test_insert_into_empty_yields_single_black_node() {
        let tree = PersistentRedBlackTree::new().insert(42);
        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.value, 42);
        assert_eq!(root.color, Color::Black);
        assert!(root.left.is_none());
        assert!(root.right.is_none());
    }

    #[rstest]
    fn test_second_insert_leans_left() {
        let tree = PersistentRedBlackTree::new().insert(1).insert(2);
        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.value, 2);
        assert_eq!(root.color, Color::Black);
        let left = root.left.as_ref().unwrap();
        assert_eq!(left.value, 1);
        assert_eq!(left.color, Color::Red);
        assert!(root.right.is_none());
    }

    #[rstest]
    fn test_three_ascending_inserts_balance() {
        let tree = PersistentRedBlackTree::new().insert(1).insert(2).insert(3);
        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.value, 2);
        assert_eq!(root.color, Color::Black);
        assert_eq!(root.left.as_ref().unwrap().color, Color::Black);
        assert_eq!(root.right.as_ref().unwrap().color, Color::Black);
        assert_eq!(tree.height(), 2);
    }

    #[rstest]
    fn test_duplicate_insert_shares_root() {
        let tree: PersistentRedBlackTree<i32> = (0..50).collect();
        let before = node_addresses(&tree);
        let same = tree.insert(25);
        assert!(same.ptr_eq(&tree));
        assert_eq!(node_addresses(&same), before);
        assert_eq!(same.len(), 50);
    }

    #[rstest]
    fn test_insert_rebuilds_only_the_search_path() {
        let tree: PersistentRedBlackTree<i32> = (0..1000).map(|index| index * 2).collect();
        let updated = tree.insert(777);

        let old_nodes = node_addresses(&tree);
        let new_nodes = node_addresses(&updated);
        let fresh = new_nodes.difference(&old_nodes).count();

        assert_eq!(new_nodes.len(), 1001);
        assert!(fresh <= 5 * (tree.height() + 1), "fresh nodes: {fresh}");
        assert!(new_nodes.len() - fresh > 900);
    }

    #[rstest]
    fn test_insert_leaves_input_nodes_untouched() {
        let tree: PersistentRedBlackTree<i32> = (0..64).collect();
        let before = node_addresses(&tree);
        let elements_before = tree.in_order();

        let _updated = tree.insert(100).insert(-1).insert(33);

        assert_eq!(node_addresses(&tree), before);
        assert_eq!(tree.in_order(), elements_before);
        assert!(tree.validate().is_ok());
    }

    // =========================================================================
    // Rotation Tests
    // =========================================================================

    #[rstest]
    fn test_rotate_left_lifts_right_child() {
        let right_right = leaf(40, Color::Black);
        let node = Node {
            value: 20,
            color: Color::Black,
            left: leaf(10, Color::Black),
            right: Some(ReferenceCounter::new(Node {
                value: 30,
                color: Color::Red,
                left: leaf(25, Color::Black),
                right: right_right.clone(),
            })),
        };

        let rotated = PersistentRedBlackTree::rotate_left(node);

        assert_eq!(rotated.value, 30);
        assert_eq!(rotated.color, Color::Black);
        let lowered = rotated.left.as_ref().unwrap();
        assert_eq!(lowered.value, 20);
        assert_eq!(lowered.color, Color::Red);
        assert_eq!(lowered.left.as_ref().unwrap().value, 10);
        assert_eq!(lowered.right.as_ref().unwrap().value, 25);
        assert!(ReferenceCounter::ptr_eq(
            rotated.right.as_ref().unwrap(),
            right_right.as_ref().unwrap()
        ));
    }

    #[rstest]
    fn test_rotate_right_lifts_left_child() {
        let left_left = leaf(1, Color::Red);
        let node = Node {
            value: 3,
            color: Color::Black,
            left: Some(ReferenceCounter::new(Node {
                value: 2,
                color: Color::Red,
                left: left_left.clone(),
                right: None,
            })),
            right: leaf(4, Color::Black),
        };

        let rotated = PersistentRedBlackTree::rotate_right(node);

        assert_eq!(rotated.value, 2);
        assert_eq!(rotated.color, Color::Black);
        assert!(ReferenceCounter::ptr_eq(
            rotated.left.as_ref().unwrap(),
            left_left.as_ref().unwrap()
        ));
        let lowered = rotated.right.as_ref().unwrap();
        assert_eq!(lowered.value, 3);
        assert_eq!(lowered.color, Color::Red);
        assert!(lowered.left.is_none());
        assert_eq!(lowered.right.as_ref().unwrap().value, 4);
    }

    #[rstest]
    fn test_flip_colors_copies_children_black() {
        let left = leaf(1, Color::Red);
        let node = Node {
            value: 2,
            color: Color::Black,
            left: left.clone(),
            right: leaf(3, Color::Red),
        };

        let flipped = PersistentRedBlackTree::flip_colors(node);

        assert_eq!(flipped.color, Color::Red);
        assert_eq!(flipped.left.as_ref().unwrap().color, Color::Black);
        assert_eq!(flipped.right.as_ref().unwrap().color, Color::Black);
        // The original child keeps its color
        assert_eq!(left.as_ref().unwrap().color, Color::Red);
    }

    // =========================================================================
    // Validation Tests
    // =========================================================================

    #[rstest]
    fn test_validate_detects_red_root() {
        let tree = PersistentRedBlackTree {
            root: leaf(1, Color::Red),
            length: 1,
        };
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRoot));
    }

    #[rstest]
    fn test_validate_detects_consecutive_reds() {
        let tree = PersistentRedBlackTree {
            root: Some(ReferenceCounter::new(Node {
                value: 3,
                color: Color::Black,
                left: Some(ReferenceCounter::new(Node {
                    value: 2,
                    color: Color::Red,
                    left: leaf(1, Color::Red),
                    right: None,
                })),
                right: None,
            })),
            length: 3,
        };
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::ConsecutiveReds { depth: 2 })
        );
    }

    #[rstest]
    fn test_validate_detects_unbalanced_black_height() {
        let tree = PersistentRedBlackTree {
            root: Some(ReferenceCounter::new(Node {
                value: 2,
                color: Color::Black,
                left: leaf(1, Color::Black),
                right: None,
            })),
            length: 2,
        };
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::UnbalancedBlackHeight {
                depth: 0,
                left: 1,
                right: 0,
            })
        );
    }

    #[rstest]
    fn test_validate_detects_order_violation() {
        let tree = PersistentRedBlackTree {
            root: Some(ReferenceCounter::new(Node {
                value: 2,
                color: Color::Black,
                left: leaf(5, Color::Red),
                right: None,
            })),
            length: 2,
        };
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::OrderViolation { depth: 1 })
        );
    }

    #[rstest]
    fn test_validate_detects_length_mismatch() {
        let tree = PersistentRedBlackTree {
            root: leaf(1, Color::Black),
            length: 2,
        };
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::LengthMismatch {
                expected: 2,
                actual: 1,
            })
        );
    }
}

// =============================================================================
// Multithread Tests (arc feature only)
// =============================================================================
