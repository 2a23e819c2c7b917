use std::{convert::Infallible, marker::PhantomData};

use crate::{Capability, StorageMut};

/// Write strategy of an accessor.
///
/// `Error` is reported by `write` and everything built on it, unchanged.
pub trait Setter<T>: Capability {
    type Error;

    fn set(&mut self, value: T) -> Result<(), Self::Error>;
}

// ── Function strategies ────────────────────────────────────────────

/// Setter that always accepts its value.
pub struct FnSetter<T, F> {
    f: F,
    _entity: PhantomData<fn(T)>,
}

pub type DynSetter<'a, T> = FnSetter<T, Box<dyn FnMut(T) + 'a>>;

impl<T, F> FnSetter<T, F>
where
    F: FnMut(T),
{
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _entity: PhantomData,
        }
    }
}

impl<'a, T> DynSetter<'a, T> {
    pub fn boxed(f: impl FnMut(T) + 'a) -> Self {
        Self::new(Box::new(f))
    }
}

impl<T, F> Capability for FnSetter<T, F> {}

impl<T, F> Setter<T> for FnSetter<T, F>
where
    F: FnMut(T),
{
    type Error = Infallible;

    #[inline]
    fn set(&mut self, value: T) -> Result<(), Infallible> {
        (self.f)(value);
        Ok(())
    }
}

/// Setter that may reject its value.
pub struct TrySetter<T, E, F> {
    f: F,
    _entity: PhantomData<fn(T) -> E>,
}

pub type DynTrySetter<'a, T, E = crate::Error> =
    TrySetter<T, E, Box<dyn FnMut(T) -> Result<(), E> + 'a>>;

impl<T, E, F> TrySetter<T, E, F>
where
    F: FnMut(T) -> Result<(), E>,
{
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _entity: PhantomData,
        }
    }
}

impl<'a, T, E> DynTrySetter<'a, T, E> {
    pub fn boxed(f: impl FnMut(T) -> Result<(), E> + 'a) -> Self {
        Self::new(Box::new(f))
    }
}

impl<T, E, F> Capability for TrySetter<T, E, F> {}

impl<T, E, F> Setter<T> for TrySetter<T, E, F>
where
    F: FnMut(T) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn set(&mut self, value: T) -> Result<(), E> {
        (self.f)(value)
    }
}

// ── Direct strategy ────────────────────────────────────────────────

/// Setter assigning straight into a [`StorageMut`] location.
pub struct DirectSetter<'a, C: ?Sized> {
    storage: &'a C,
}

impl<'a, C: StorageMut + ?Sized> DirectSetter<'a, C> {
    #[inline]
    pub fn new(storage: &'a C) -> Self {
        Self { storage }
    }

    #[inline]
    pub fn storage(&self) -> &'a C {
        self.storage
    }
}

impl<C: ?Sized> Capability for DirectSetter<'_, C> {}

impl<C> Setter<C::Entity> for DirectSetter<'_, C>
where
    C: StorageMut + ?Sized,
{
    type Error = Infallible;

    #[inline]
    fn set(&mut self, value: C::Entity) -> Result<(), Infallible> {
        self.storage.store(value);
        Ok(())
    }
}
