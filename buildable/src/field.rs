//! Record fields that read and write both the record and its partial

use std::fmt;

use crate::lens::Lens;

/// A record field, usable on the record `S` and on its partial `P`.
///
/// `A` is the field's type on the record and `O` its type on the partial. `O` is
/// `Option<A>` except for fields that are already optional, where both are the same
/// type.
pub struct Field<S, A, P, O = Option<A>> {
    name:    &'static str,
    record:  Lens<S, A>,
    partial: Lens<P, O>,
    lift:    fn(A) -> O,
}

impl<S, A, P, O> Field<S, A, P, O> {
    /// Create a field from its two lenses and the conversion of a record value into a
    /// partial value
    pub const fn new(
        name: &'static str,
        record: Lens<S, A>,
        partial: Lens<P, O>,
        lift: fn(A) -> O,
    ) -> Self {
        Self {
            name,
            record,
            partial,
            lift,
        }
    }

    /// The field's name as declared
    pub const fn name(&self) -> &'static str { self.name }

    /// Read the field from a record
    pub fn get(&self, source: &S) -> A { self.record.get(source) }

    /// A copy of the record with this field replaced
    #[must_use]
    pub fn set(&self, source: S, value: A) -> S { self.record.set(source, value) }

    /// The lens on the record
    pub const fn record(&self) -> &Lens<S, A> { &self.record }

    /// The lens on the partial
    pub const fn partial(&self) -> &Lens<P, O> { &self.partial }

    /// A record value as the partial holds it
    pub fn lift(&self, value: A) -> O { (self.lift)(value) }
}

impl<S, A, P, O> Clone for Field<S, A, P, O> {
    fn clone(&self) -> Self { *self }
}

impl<S, A, P, O> Copy for Field<S, A, P, O> {}

impl<S, A, P, O> fmt::Debug for Field<S, A, P, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish_non_exhaustive()
    }
}
