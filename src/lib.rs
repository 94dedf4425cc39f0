//! # wordtree
//!
//! A persistent red-black tree and a sorted unique word index built on it.
//!
//! ## Overview
//!
//! - **Persistent Data Structures**: [`PersistentRedBlackTree`](persistent::PersistentRedBlackTree),
//!   an immutable ordered set where every insert returns a new version and
//!   shares all untouched subtrees with the old one
//! - **Type Classes**: `TypeConstructor` and `Foldable`, used to express the
//!   index as a left fold
//! - **Word Index**: tokenizing, case folding, indexing and writing the
//!   sorted distinct words of a text file
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (`TypeConstructor`, `Foldable`)
//! - `persistent`: The persistent red-black tree
//! - `index`: The word index pipeline (pulls in `regex` and `tracing`)
//! - `arc`: Use `Arc` instead of `Rc` so trees are `Send + Sync`
//! - `serde`: Serialize trees as ascending sequences
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use wordtree::prelude::*;
//!
//! let tree = build_index(vec!["the", "quick", "fox", "the", "Fox"]);
//! assert_eq!(tree.in_order(), vec!["Fox", "fox", "quick", "the"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use wordtree::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "index")]
    pub use crate::index::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "index")]
pub mod index;
