use crate::{Operand, ReadableProperty, Step, WritableProperty};

/// Read-modify-write operations, available when both halves exist.
///
/// Every method reads the current value, computes the next one, hands it to
/// the setter, and reports the setter's error unchanged. The compound
/// assignment operators (`+=`, `<<=`, ...) are thin wrappers over
/// [`compound`](Self::compound) for properties whose setter cannot fail.
pub trait MutableProperty: ReadableProperty + WritableProperty {
    /// Replaces the value with `f(current)` and returns the written value.
    #[inline]
    fn update<F>(&mut self, f: F) -> Result<Self::T, Self::Error>
    where
        Self::T: Clone,
        F: FnOnce(Self::T) -> Self::T,
    {
        let next = f(self.read_cloned());
        self.write_cloned(next)
    }

    /// `current = op(current, rhs)`, returning the written value.
    #[inline]
    fn compound<K, F>(&mut self, rhs: K, op: F) -> Result<Self::T, Self::Error>
    where
        Self::T: Clone,
        K: Operand,
        F: FnOnce(Self::T, K::Value) -> Self::T,
    {
        let rhs = rhs.into_value();
        self.update(|current| op(current, rhs))
    }

    /// Post-increment: writes `current + 1`, returns `current`.
    fn post_inc(&mut self) -> Result<Self::T, Self::Error>
    where
        Self::T: Clone + Step,
    {
        let prev = self.read_cloned();
        self.write(prev.clone() + <Self::T as Step>::ONE)?;
        Ok(prev)
    }

    /// Post-decrement: writes `current - 1`, returns `current`.
    fn post_dec(&mut self) -> Result<Self::T, Self::Error>
    where
        Self::T: Clone + Step,
    {
        let prev = self.read_cloned();
        self.write(prev.clone() - <Self::T as Step>::ONE)?;
        Ok(prev)
    }

    /// Pre-increment: writes `current + 1`, returns the written value.
    #[inline]
    fn pre_inc(&mut self) -> Result<Self::T, Self::Error>
    where
        Self::T: Clone + Step,
    {
        self.update(|current| current + <Self::T as Step>::ONE)
    }

    /// Pre-decrement: writes `current - 1`, returns the written value.
    #[inline]
    fn pre_dec(&mut self) -> Result<Self::T, Self::Error>
    where
        Self::T: Clone + Step,
    {
        self.update(|current| current - <Self::T as Step>::ONE)
    }
}

impl<P> MutableProperty for P where P: ReadableProperty + WritableProperty {}
