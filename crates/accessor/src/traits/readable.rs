use std::ops::Index;

use crate::{Category, Operand, TypedProperty};

/// Read half of a property.
///
/// Implemented only by properties that carry a getter, so every operation
/// below simply does not exist on write-only accessors.
///
/// # Method overview
///
/// | Method | Returns |
/// |--------|---------|
/// | `read` | whatever the getter produces, category preserved |
/// | `inspect` | result of a closure run against a scoped `&T` |
/// | `read_cloned` | an owned copy of the entity |
/// | `at` | an owned copy of `entity[index]` |
/// | `logical_and` / `logical_or` | `bool`, both sides always evaluated |
///
/// Forwarding operators are built on `inspect` and `read_cloned`: any guard a
/// direct getter hands out is released before the operator returns, so a
/// subsequent write never trips over a live borrow.
pub trait ReadableProperty: TypedProperty {
    /// What `read` hands back: `T`, `&T`, or a guard over the storage.
    type Output<'s>
    where
        Self: 's;

    /// Value category of [`Self::Output`].
    const CATEGORY: Category;

    /// Invokes the getter and returns its result unchanged.
    fn read(&self) -> Self::Output<'_>;

    /// Runs `f` against a borrow of the current value.
    fn inspect<R>(&self, f: impl FnOnce(&Self::T) -> R) -> R;

    #[inline]
    fn category(&self) -> Category {
        Self::CATEGORY
    }

    #[inline]
    fn read_cloned(&self) -> Self::T
    where
        Self::T: Clone,
    {
        self.inspect(Clone::clone)
    }

    /// Indexes into the current value and clones the element out.
    ///
    /// Unlike [`Index`] on the accessor itself this works for every getter,
    /// including ones producing fresh values or guards.
    #[inline]
    fn at<I>(&self, index: I) -> <Self::T as Index<I>>::Output
    where
        Self::T: Index<I>,
        <Self::T as Index<I>>::Output: Clone,
    {
        self.inspect(|value| value[index].clone())
    }

    /// `read() && rhs`. `rhs` is only read when the left side is `true`.
    fn logical_and<K>(&self, rhs: K) -> bool
    where
        Self::T: Clone + Into<bool>,
        K: Operand,
        K::Value: Into<bool>,
    {
        let left: bool = self.read_cloned().into();
        if !left {
            return false;
        }
        rhs.into_value().into()
    }

    /// `read() || rhs`. `rhs` is only read when the left side is `false`.
    fn logical_or<K>(&self, rhs: K) -> bool
    where
        Self::T: Clone + Into<bool>,
        K: Operand,
        K::Value: Into<bool>,
    {
        let left: bool = self.read_cloned().into();
        if left {
            return true;
        }
        rhs.into_value().into()
    }
}
