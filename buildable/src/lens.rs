//! Lenses over plain function pointers

use std::fmt;

/// A pair of functions focusing on one part `A` of a whole `S`.
///
/// Lawful lenses satisfy `get(&set(s, v)) == v` and `set(s.clone(), get(&s)) == s`.
pub struct Lens<S, A> {
    get: fn(&S) -> A,
    set: fn(S, A) -> S,
}

impl<S, A> Lens<S, A> {
    /// Create a lens from a getter and a copy-on-write setter
    pub const fn new(get: fn(&S) -> A, set: fn(S, A) -> S) -> Self { Self { get, set } }

    /// Read the focused part
    pub fn get(&self, source: &S) -> A { (self.get)(source) }

    /// Replace the focused part, keeping everything else
    #[must_use]
    pub fn set(&self, source: S, value: A) -> S { (self.set)(source, value) }

    /// Replace the focused part with a function of its current value
    #[must_use]
    pub fn modify(&self, source: S, f: impl FnOnce(A) -> A) -> S {
        let value = f((self.get)(&source));
        (self.set)(source, value)
    }
}

impl<S, A> Clone for Lens<S, A> {
    fn clone(&self) -> Self { *self }
}

impl<S, A> Copy for Lens<S, A> {}

impl<S, A> fmt::Debug for Lens<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens").finish_non_exhaustive()
    }
}
