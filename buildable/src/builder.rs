//! The typesafe incremental builder

use std::fmt;

use crate::field::Field;
use crate::partial::Buildable;
use crate::partial::Partial;
use crate::semigroup::Semigroup;

/// A typesafe builder for `T`, holding one partial.
///
/// Owned by one caller and used sequentially; every method consumes and returns the
/// builder.
pub struct Builder<T: Buildable> {
    partial: T::Partial,
}

impl<T: Buildable> Builder<T> {
    /// A builder with no field set
    pub fn new() -> Self { Self::from_partial(T::empty()) }

    /// A builder starting from an existing partial
    pub const fn from_partial(partial: T::Partial) -> Self { Self { partial } }

    /// Set a field
    #[must_use]
    pub fn set<A, O>(self, field: Field<T, A, T::Partial, O>, value: A) -> Self {
        let value = field.lift(value);
        Self::from_partial(field.partial().set(self.partial, value))
    }

    /// Clear a field
    #[must_use]
    pub fn unset<A, O: Default>(self, field: Field<T, A, T::Partial, O>) -> Self {
        Self::from_partial(field.partial().set(self.partial, O::default()))
    }

    /// Fill unset fields from `other`; fields already set are kept
    #[must_use]
    pub fn merge(self, other: T::Partial) -> Self { Self::from_partial(self.partial.combine(other)) }

    /// The partial built so far
    pub const fn partial(&self) -> &T::Partial { &self.partial }

    /// Give up the builder, keeping the partial
    pub fn into_partial(self) -> T::Partial { self.partial }

    /// Whether every field is set
    pub fn is_complete(&self) -> bool { self.partial.is_complete() }

    /// The record, when every field is set
    pub fn build(&self) -> Option<T> { self.partial.build() }
}

impl<T: Buildable> Default for Builder<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Buildable> Clone for Builder<T> {
    fn clone(&self) -> Self { Self::from_partial(self.partial.clone()) }
}

impl<T> fmt::Debug for Builder<T>
where
    T: Buildable,
    T::Partial: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("partial", &self.partial)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::PartialPoint;
    use crate::fixtures::Point;
    use crate::partial::Buildable;

    #[test]
    fn test_set_then_build() {
        let point = Point::builder()
            .set(Point::label(), "a".to_string())
            .set(Point::x(), 4)
            .build();
        assert_eq!(
            point,
            Some(Point {
                x:     4,
                label: "a".to_string(),
            })
        );
    }

    #[test]
    fn test_incomplete_builds_nothing() {
        let builder = Point::builder().set(Point::x(), 4);
        assert!(!builder.is_complete());
        assert_eq!(builder.build(), None);
    }

    #[test]
    fn test_later_set_overwrites() {
        let builder = Point::builder().set(Point::x(), 1).set(Point::x(), 2);
        assert_eq!(builder.partial().x, Some(2));
    }

    #[test]
    fn test_unset() {
        let builder = Point::builder().set(Point::x(), 1).unset(Point::x());
        assert_eq!(builder.into_partial(), PartialPoint::default());
    }

    #[test]
    fn test_merge_keeps_set_fields() {
        let builder = Point::builder().set(Point::x(), 1).merge(PartialPoint {
            x:     Some(9),
            label: Some("b".to_string()),
        });
        assert_eq!(builder.partial().x, Some(1));
        assert_eq!(builder.partial().label.as_deref(), Some("b"));
    }
}
