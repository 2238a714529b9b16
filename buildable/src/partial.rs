//! Partials and the per-record context tying a record to its partial

use crate::builder::Builder;
use crate::semigroup::Semigroup;

/// A record with every field optional, built up incrementally.
///
/// `Default` is the all-unset partial: the identity of [`Semigroup::combine`], which
/// makes every partial type a monoid.
pub trait Partial: Semigroup + Default + Clone {
    /// The record this partial builds
    type Target;

    /// The record, when every field is set. Never panics: an incomplete partial yields
    /// `None`.
    fn build(&self) -> Option<Self::Target>;

    /// Whether [`Partial::build`] would succeed
    fn is_complete(&self) -> bool;
}

/// A record with a generated partial type.
///
/// Implemented once per record by `#[derive(GenBuildable)]`; generic code reaches the
/// partial, its empty value, and a builder through this trait.
pub trait Buildable: Sized {
    /// The generated partial type
    type Partial: Partial<Target = Self>;

    /// The partial with every field set from this record
    fn as_partial(&self) -> Self::Partial;

    /// The all-unset partial
    fn empty() -> Self::Partial { Self::Partial::default() }

    /// A builder starting from the all-unset partial
    fn builder() -> Builder<Self> { Builder::new() }

    /// A builder starting from this record's values
    fn to_builder(&self) -> Builder<Self> { Builder::from_partial(self.as_partial()) }
}

/// `empty.combine(first).combine(second).build()`
pub fn combine_two<P: Partial>(first: P, second: P) -> Option<P::Target> {
    P::default().combine(first).combine(second).build()
}

/// Fold every partial into the empty one, in order, and build the result.
///
/// Each field takes the first value set across `partials`.
pub fn combine_all<P: Partial>(partials: impl IntoIterator<Item = P>) -> Option<P::Target> {
    partials
        .into_iter()
        .fold(P::default(), Semigroup::combine)
        .build()
}
