use std::{
    convert::Infallible,
    fmt,
    ops::{Deref, Index},
};

use log::trace;

use crate::{Category, Kind, ReadableProperty, TypedProperty, WritableProperty, short_type_name};

use super::macros::impl_property_ops;

/// Accessor that owns its entity.
///
/// Reads borrow the stored value, writes replace it. Cloning duplicates the
/// value, so two instances never share state.
#[derive(Debug, Clone, Default)]
pub struct SelfStorage<T> {
    value: T,
}

impl<T> SelfStorage<T> {
    pub const KIND: Kind = Kind::SelfStorage;

    pub fn new(value: T) -> Self {
        trace!("Bound self-storage accessor of `{}`", short_type_name::<T>());
        Self { value }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        Self::KIND
    }

    #[inline]
    pub fn has_getter(&self) -> bool {
        true
    }

    #[inline]
    pub fn has_setter(&self) -> bool {
        true
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for SelfStorage<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> TypedProperty for SelfStorage<T> {
    type T = T;
}

impl<T> ReadableProperty for SelfStorage<T> {
    type Output<'s>
        = &'s T
    where
        Self: 's;

    const CATEGORY: Category = Category::ConstReference;

    #[inline]
    fn read(&self) -> &T {
        &self.value
    }

    #[inline]
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value)
    }
}

impl<T> WritableProperty for SelfStorage<T> {
    type Error = Infallible;

    #[inline]
    fn write(&mut self, value: T) -> Result<(), Infallible> {
        self.value = value;
        Ok(())
    }
}

impl<T> Deref for SelfStorage<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, I> Index<I> for SelfStorage<T>
where
    T: Index<I>,
{
    type Output = T::Output;

    #[inline]
    fn index(&self, index: I) -> &T::Output {
        &self.value[index]
    }
}

impl<T: fmt::Display> fmt::Display for SelfStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl_property_ops!([T] SelfStorage<T>);
