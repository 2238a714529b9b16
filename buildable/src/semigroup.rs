//! Associative combination

/// A type with an associative binary operation.
///
/// Implementations must satisfy `a.combine(b).combine(c) == a.combine(b.combine(c))`.
pub trait Semigroup {
    /// Merge `other` into `self`
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Option<T> {
    /// The first `Some` wins
    fn combine(self, other: Self) -> Self { self.or(other) }
}

#[cfg(test)]
mod tests {
    use proptest::option;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_option_first_some_wins() {
        assert_eq!(Some(1).combine(Some(2)), Some(1));
        assert_eq!(None.combine(Some(2)), Some(2));
        assert_eq!(Some(1).combine(None), Some(1));
        assert_eq!(None::<i32>.combine(None), None);
    }

    proptest! {
        #[test]
        fn prop_option_combine_is_associative(
            a in option::of(any::<i8>()),
            b in option::of(any::<i8>()),
            c in option::of(any::<i8>()),
        ) {
            prop_assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
        }

        #[test]
        fn prop_none_is_identity(a in option::of(any::<i8>())) {
            prop_assert_eq!(None.combine(a), a);
            prop_assert_eq!(a.combine(None), a);
        }
    }
}
