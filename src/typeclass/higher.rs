//! Containers and the element type they are applied to.
//!
//! A container such as `Vec<_>` cannot be named on its own in Rust, only
//! once it is applied to an element type. [`TypeConstructor`] records that
//! element type, which is what [`Foldable`](super::Foldable) needs to
//! describe "a sequence of tokens" without committing to a concrete
//! collection.
//!
//! # Example
//!
//! ```rust
//! use wordtree::typeclass::TypeConstructor;
//!
//! fn first_token<C>(tokens: C) -> Option<C::Inner>
//! where
//!     C: TypeConstructor + IntoIterator<Item = <C as TypeConstructor>::Inner>,
//! {
//!     tokens.into_iter().next()
//! }
//!
//! assert_eq!(first_token(vec!["the", "fox"]), Some("the"));
//! assert_eq!(first_token(None::<&str>), None);
//! ```

/// A container applied to an element type.
pub trait TypeConstructor {
    /// The element type.
    type Inner;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
}
