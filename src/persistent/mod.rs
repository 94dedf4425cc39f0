//! Persistent (immutable) data structures.
//!
//! This module provides [`PersistentRedBlackTree`], an immutable ordered set
//! that uses structural sharing to minimize copying.
//!
//! # Structural Sharing
//!
//! An insert copies only the nodes on the search path. Every subtree off
//! that path is shared by reference between the old and the new version,
//! and a node lives for as long as any version still reaches it.
//!
//! # Examples
//!
//! ```rust
//! use wordtree::persistent::PersistentRedBlackTree;
//!
//! let words = PersistentRedBlackTree::new()
//!     .insert("the")
//!     .insert("quick")
//!     .insert("fox")
//!     .insert("the");
//!
//! assert_eq!(words.in_order(), vec!["fox", "quick", "the"]);
//!
//! // Structural sharing: the original tree is preserved
//! let extended = words.insert("brown");
//! assert_eq!(words.len(), 3);    // Original unchanged
//! assert_eq!(extended.len(), 4); // New version
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// so trees are `Send + Sync` and can be read from many threads.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod invariant;
mod red_black_tree;

pub use invariant::InvariantViolation;
pub use invariant::TreeStatistics;
pub use red_black_tree::PersistentRedBlackTree;
pub use red_black_tree::PersistentRedBlackTreeIntoIterator;
pub use red_black_tree::PersistentRedBlackTreeIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
