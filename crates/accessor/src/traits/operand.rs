use std::{borrow::Cow, rc::Rc, sync::Arc};

/// Anything that can stand on one side of a forwarded operator.
///
/// Plain values are their own operand value. Readable accessors reduce to a
/// clone of what their getter reports, which lets a single operator impl cover
/// both `accessor op value` and `accessor op accessor`. Write-only accessors
/// are deliberately not operands.
///
/// Use [`plain_operand!`](crate::plain_operand) to make a user type usable on
/// the right-hand side of accessor operators. Standard containers and smart
/// pointers (`Vec`, `Box`, `Rc`, `Arc`, `Option`, `Cow`, arrays and tuples up
/// to three elements) are operands already.
pub trait Operand {
    type Value;

    /// Consumes the operand, yielding its value.
    fn into_value(self) -> Self::Value;

    /// Runs `f` against a borrow of the operand's value.
    fn with_value<R>(&self, f: impl FnOnce(&Self::Value) -> R) -> R;

    /// Owned copy of the operand's value.
    ///
    /// For accessors any guard taken to produce the copy is released before
    /// this returns.
    #[inline]
    fn to_value(&self) -> Self::Value
    where
        Self::Value: Clone,
    {
        self.with_value(Clone::clone)
    }
}

/// Implements [`Operand`] for types that are their own value.
///
/// ```
/// use accessor::{Operand, plain_operand};
///
/// #[derive(Clone, Copy)]
/// struct Meters(f64);
///
/// plain_operand!(Meters);
///
/// assert_eq!(Meters(2.0).into_value().0, 2.0);
/// assert_eq!(Meters(3.0).to_value().0, 3.0);
/// ```
#[macro_export]
macro_rules! plain_operand {
    ($($t:ty),* $(,)?) => ($(
        impl $crate::Operand for $t {
            type Value = $t;

            #[inline]
            fn into_value(self) -> Self::Value {
                self
            }

            #[inline]
            fn with_value<R>(&self, f: impl FnOnce(&Self::Value) -> R) -> R {
                f(self)
            }
        }
    )*)
}

plain_operand!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    (),
);

/// Same as [`plain_operand!`], for generic std types. Generics go in brackets.
macro_rules! generic_operand {
    ($([$($g:tt)*] $t:ty),* $(,)?) => ($(
        impl<$($g)*> Operand for $t {
            type Value = $t;

            #[inline]
            fn into_value(self) -> Self::Value {
                self
            }

            #[inline]
            fn with_value<R>(&self, f: impl FnOnce(&Self::Value) -> R) -> R {
                f(self)
            }
        }
    )*)
}

generic_operand!(
    ['s] &'s str,
    [T] Option<T>,
    [T] Vec<T>,
    [T: ?Sized] Box<T>,
    [T: ?Sized] Rc<T>,
    [T: ?Sized] Arc<T>,
    [T, const N: usize] [T; N],
    ['a, B: ToOwned + ?Sized] Cow<'a, B>,
    [A] (A,),
    [A, B] (A, B),
    [A, B, C] (A, B, C),
);
