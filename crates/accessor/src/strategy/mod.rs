//! Getter and setter strategies plus the builders call sites use to pick one.
//!
//! The builder chosen for the getter decides the accessor's value category:
//!
//! | Builder | Getter | `read()` returns |
//! |---------|--------|------------------|
//! | [`get`] | [`FnGetter`] | `T` |
//! | [`get_ref`] | [`RefGetter`] | `&'a T` |
//! | [`get_guard`] | [`GuardGetter`] | a `Deref` guard |
//! | [`get_mut`] | [`MutGetter`] | a `DerefMut` guard |
//! | [`direct_get`] | [`DirectGetter`] | the storage's shared guard |

use std::ops::{Deref, DerefMut};

use crate::{Storage, StorageMut};

mod getter;
mod setter;

pub use getter::*;
pub use setter::*;

#[inline]
pub fn get<T, F>(f: F) -> FnGetter<T, F>
where
    F: Fn() -> T,
{
    FnGetter::new(f)
}

#[inline]
pub fn get_ref<'a, T, F>(f: F) -> RefGetter<'a, T, F>
where
    T: ?Sized + 'a,
    F: Fn() -> &'a T,
{
    RefGetter::new(f)
}

#[inline]
pub fn get_guard<T, D, F>(f: F) -> GuardGetter<T, F>
where
    T: ?Sized,
    D: Deref<Target = T>,
    F: Fn() -> D,
{
    GuardGetter::new(f)
}

#[inline]
pub fn get_mut<T, D, F>(f: F) -> MutGetter<T, F>
where
    T: ?Sized,
    D: DerefMut<Target = T>,
    F: Fn() -> D,
{
    MutGetter::new(f)
}

#[inline]
pub fn direct_get<C>(storage: &C) -> DirectGetter<'_, C>
where
    C: Storage + ?Sized,
{
    DirectGetter::new(storage)
}

#[inline]
pub fn set<T, F>(f: F) -> FnSetter<T, F>
where
    F: FnMut(T),
{
    FnSetter::new(f)
}

#[inline]
pub fn try_set<T, E, F>(f: F) -> TrySetter<T, E, F>
where
    F: FnMut(T) -> Result<(), E>,
{
    TrySetter::new(f)
}

#[inline]
pub fn direct_set<C>(storage: &C) -> DirectSetter<'_, C>
where
    C: StorageMut + ?Sized,
{
    DirectSetter::new(storage)
}
