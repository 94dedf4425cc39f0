//! Type class traits for functional programming abstractions.
//!
//! - [`TypeConstructor`]: Names the element type of a container
//! - [`Foldable`]: Folding over structures to produce summary values
//!
//! [`Foldable`] is defined over any [`TypeConstructor`], so the same fold
//! works for `Vec`, `Option` and the persistent tree alike.
//!
//! # Examples
//!
//! ```rust
//! use wordtree::typeclass::Foldable;
//!
//! let lines = vec!["a b", "c"];
//! let words = lines.fold_left(0, |count, line| count + line.split(' ').count());
//! assert_eq!(words, 3);
//! ```

mod foldable;
mod higher;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
