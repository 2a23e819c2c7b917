use std::{
    fmt,
    marker::PhantomData,
    ops::{Deref, Index},
};

use log::trace;

use crate::{
    Absent, BorrowGetter, Capability, Category, Getter, Kind, ReadableProperty, Setter,
    TypedProperty, WritableProperty, short_type_name,
};

use super::macros::impl_property_ops;

/// Typed view of an entity the accessor does not own.
///
/// The getter slot `G` and setter slot `S` each hold a strategy or [`Absent`].
/// What an accessor can do follows from which slots are filled:
///
/// - reading ([`ReadableProperty`], `Deref` for reference getters, the
///   forwarding operators) needs `G: Getter<T>`
/// - writing ([`WritableProperty`]) needs `S: Setter<T>`
/// - read-modify-write (compound assignment, increments) needs both
///
/// Missing capabilities are missing trait impls, so misuse is a compile error.
/// The entity type `T` is never stored; both strategies agree on it through
/// their own trait parameters.
pub struct Accessor<T, G = Absent, S = Absent> {
    getter: G,
    setter: S,
    _entity: PhantomData<fn() -> T>,
}

impl<T, G, S> Accessor<T, G, S>
where
    G: Capability,
    S: Capability,
{
    /// Shape of this accessor type. Evaluating it for an accessor with two
    /// empty slots is a compile error.
    pub const KIND: Kind = Kind::from_capabilities(G::PRESENT, S::PRESENT);

    fn bind(getter: G, setter: S) -> Self {
        let kind = Self::KIND;
        trace!("Bound {kind} accessor of `{}`", short_type_name::<T>());
        Self {
            getter,
            setter,
            _entity: PhantomData,
        }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        Self::KIND
    }

    #[inline]
    pub fn has_getter(&self) -> bool {
        G::PRESENT
    }

    #[inline]
    pub fn has_setter(&self) -> bool {
        S::PRESENT
    }

    #[inline]
    pub fn getter(&self) -> &G {
        &self.getter
    }

    #[inline]
    pub fn setter(&self) -> &S {
        &self.setter
    }

    /// Splits the accessor back into its strategies.
    pub fn into_parts(self) -> (G, S) {
        (self.getter, self.setter)
    }
}

impl<T, G, S> Accessor<T, G, S>
where
    G: Getter<T>,
    S: Setter<T>,
{
    pub fn read_write(getter: G, setter: S) -> Self {
        Self::bind(getter, setter)
    }
}

impl<T, G> Accessor<T, G, Absent>
where
    G: Getter<T>,
{
    pub fn read_only(getter: G) -> Self {
        Self::bind(getter, Absent)
    }
}

impl<T, S> Accessor<T, Absent, S>
where
    S: Setter<T>,
{
    pub fn write_only(setter: S) -> Self {
        Self::bind(Absent, setter)
    }
}

impl<T, G, S> TypedProperty for Accessor<T, G, S> {
    type T = T;
}

impl<T, G, S> ReadableProperty for Accessor<T, G, S>
where
    G: Getter<T>,
{
    type Output<'s>
        = G::Output
    where
        Self: 's;

    const CATEGORY: Category = G::CATEGORY;

    #[inline]
    fn read(&self) -> G::Output {
        self.getter.get()
    }

    #[inline]
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.getter.inspect(f)
    }
}

impl<T, G, S> WritableProperty for Accessor<T, G, S>
where
    S: Setter<T>,
{
    type Error = S::Error;

    #[inline]
    fn write(&mut self, value: T) -> Result<(), S::Error> {
        self.setter.set(value)
    }
}

impl<T, G, S> Deref for Accessor<T, G, S>
where
    G: BorrowGetter<T>,
{
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.getter.get_ref()
    }
}

impl<T, G, S, I> Index<I> for Accessor<T, G, S>
where
    G: BorrowGetter<T>,
    T: Index<I>,
{
    type Output = T::Output;

    #[inline]
    fn index(&self, index: I) -> &T::Output {
        &self.getter.get_ref()[index]
    }
}

impl<T, G, S> fmt::Debug for Accessor<T, G, S>
where
    G: Capability,
    S: Capability,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("entity", &short_type_name::<T>())
            .field("kind", &Self::KIND)
            .finish()
    }
}

impl<T, G, S> fmt::Display for Accessor<T, G, S>
where
    G: Getter<T>,
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.getter.inspect(|value| fmt::Display::fmt(value, f))
    }
}

impl_property_ops!([T, G, S] Accessor<T, G, S>);
