use std::{
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use crate::{Capability, Category, Storage};

/// Read strategy of an accessor.
///
/// `Output` is what callers of `read()` observe; its shape is the accessor's
/// value category. `inspect` gives scoped access to the entity regardless of
/// that shape, and is what every forwarding operator goes through.
pub trait Getter<T>: Capability {
    type Output;

    const CATEGORY: Category;

    fn get(&self) -> Self::Output;

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

/// Getter able to lend `&T` for as long as the accessor itself is borrowed.
///
/// Only getters of this kind back `Deref` and `Index` on an accessor.
pub trait BorrowGetter<T>: Getter<T> {
    fn get_ref(&self) -> &T;
}

// ── Function strategies ────────────────────────────────────────────

/// Getter producing a fresh value on every call.
pub struct FnGetter<T, F> {
    f: F,
    _entity: PhantomData<fn() -> T>,
}

/// Boxed [`FnGetter`] with a nameable type, for owner struct fields.
pub type DynGetter<'a, T> = FnGetter<T, Box<dyn Fn() -> T + 'a>>;

impl<T, F> FnGetter<T, F>
where
    F: Fn() -> T,
{
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _entity: PhantomData,
        }
    }
}

impl<'a, T> DynGetter<'a, T> {
    pub fn boxed(f: impl Fn() -> T + 'a) -> Self {
        Self::new(Box::new(f))
    }
}

impl<T, F> Capability for FnGetter<T, F> {}

impl<T, F> Getter<T> for FnGetter<T, F>
where
    F: Fn() -> T,
{
    type Output = T;

    const CATEGORY: Category = Category::Value;

    #[inline]
    fn get(&self) -> T {
        (self.f)()
    }

    #[inline]
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&(self.f)())
    }
}

/// Getter returning a shared reference into storage that outlives `'a`.
///
/// The `'a` bound is the dangling-reference check: a closure that returns a
/// reference to a value it created itself cannot produce `&'a T`.
pub struct RefGetter<'a, T: ?Sized, F> {
    f: F,
    _entity: PhantomData<fn() -> &'a T>,
}

pub type DynRefGetter<'a, T> = RefGetter<'a, T, Box<dyn Fn() -> &'a T + 'a>>;

impl<'a, T, F> RefGetter<'a, T, F>
where
    T: ?Sized + 'a,
    F: Fn() -> &'a T,
{
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _entity: PhantomData,
        }
    }
}

impl<'a, T: ?Sized + 'a> DynRefGetter<'a, T> {
    pub fn boxed(f: impl Fn() -> &'a T + 'a) -> Self {
        Self::new(Box::new(f))
    }
}

impl<T: ?Sized, F> Capability for RefGetter<'_, T, F> {}

impl<'a, T, F> Getter<T> for RefGetter<'a, T, F>
where
    T: 'a,
    F: Fn() -> &'a T,
{
    type Output = &'a T;

    const CATEGORY: Category = Category::ConstReference;

    #[inline]
    fn get(&self) -> &'a T {
        (self.f)()
    }

    #[inline]
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f((self.f)())
    }
}

impl<'a, T, F> BorrowGetter<T> for RefGetter<'a, T, F>
where
    T: 'a,
    F: Fn() -> &'a T,
{
    #[inline]
    fn get_ref(&self) -> &T {
        (self.f)()
    }
}

/// Getter returning a shared guard (`Ref`, read guards).
pub struct GuardGetter<T: ?Sized, F> {
    f: F,
    _entity: PhantomData<fn() -> *const T>,
}

impl<T, D, F> GuardGetter<T, F>
where
    T: ?Sized,
    D: Deref<Target = T>,
    F: Fn() -> D,
{
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _entity: PhantomData,
        }
    }
}

impl<T: ?Sized, F> Capability for GuardGetter<T, F> {}

impl<T, D, F> Getter<T> for GuardGetter<T, F>
where
    D: Deref<Target = T>,
    F: Fn() -> D,
{
    type Output = D;

    const CATEGORY: Category = Category::ConstReference;

    #[inline]
    fn get(&self) -> D {
        (self.f)()
    }

    #[inline]
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = (self.f)();
        f(&*guard)
    }
}

/// Getter returning a mutable guard (`RefMut`, write guards).
///
/// Callers may mutate through the result of `read()`; the setter slot is
/// bypassed when they do.
pub struct MutGetter<T: ?Sized, F> {
    f: F,
    _entity: PhantomData<fn() -> *mut T>,
}

impl<T, D, F> MutGetter<T, F>
where
    T: ?Sized,
    D: DerefMut<Target = T>,
    F: Fn() -> D,
{
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            _entity: PhantomData,
        }
    }
}

impl<T: ?Sized, F> Capability for MutGetter<T, F> {}

impl<T, D, F> Getter<T> for MutGetter<T, F>
where
    D: DerefMut<Target = T>,
    F: Fn() -> D,
{
    type Output = D;

    const CATEGORY: Category = Category::Reference;

    #[inline]
    fn get(&self) -> D {
        (self.f)()
    }

    #[inline]
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = (self.f)();
        f(&*guard)
    }
}

// ── Direct strategy ────────────────────────────────────────────────

/// Getter reading straight from a [`Storage`] location.
pub struct DirectGetter<'a, C: ?Sized> {
    storage: &'a C,
}

impl<'a, C: Storage + ?Sized> DirectGetter<'a, C> {
    #[inline]
    pub fn new(storage: &'a C) -> Self {
        Self { storage }
    }

    #[inline]
    pub fn storage(&self) -> &'a C {
        self.storage
    }
}

impl<C: ?Sized> Capability for DirectGetter<'_, C> {}

impl<'a, C> Getter<C::Entity> for DirectGetter<'a, C>
where
    C: Storage + ?Sized,
{
    type Output = C::Guard<'a>;

    const CATEGORY: Category = Category::ConstReference;

    #[inline]
    fn get(&self) -> C::Guard<'a> {
        self.storage.load()
    }

    #[inline]
    fn inspect<R>(&self, f: impl FnOnce(&C::Entity) -> R) -> R {
        let guard = self.storage.load();
        f(&*guard)
    }
}
