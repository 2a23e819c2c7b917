/// Generates the forwarding operator surface for a property wrapper.
///
/// # Usage
/// ```ignore
/// impl_property_ops!([T, G, S] Accessor<T, G, S>);
/// impl_property_ops!([T] SelfStorage<T>);
/// ```
///
/// The generic list is passed as one bracketed token tree so it can travel
/// through the per-operator arms untouched.
///
/// This generates implementations for:
/// - `Operand` for `&Wrapper` and `Wrapper` (gated on a getter)
/// - `Add Sub Mul Div Rem BitAnd BitOr BitXor Shl Shr` for `&Wrapper` with any
///   `Operand` on the right
/// - the same ten operators with each primitive on the left
/// - `Neg` / `Not` for `&Wrapper`
/// - `PartialEq<K>` / `PartialOrd<K>` for any `Operand` `K`, and with each
///   primitive on the left
/// - every compound assignment operator, for wrappers whose setter cannot fail
macro_rules! impl_property_ops {
    ($gens:tt $ty:ty) => {
        impl_property_ops!(@operand $gens $ty);

        impl_property_ops!(@binary $gens $ty;
            Add add, Sub sub, Mul mul, Div div, Rem rem,
            BitAnd bitand, BitOr bitor, BitXor bitxor, Shl shl, Shr shr
        );

        impl_property_ops!(@assign $gens $ty;
            AddAssign add_assign Add add,
            SubAssign sub_assign Sub sub,
            MulAssign mul_assign Mul mul,
            DivAssign div_assign Div div,
            RemAssign rem_assign Rem rem,
            BitAndAssign bitand_assign BitAnd bitand,
            BitOrAssign bitor_assign BitOr bitor,
            BitXorAssign bitxor_assign BitXor bitxor,
            ShlAssign shl_assign Shl shl,
            ShrAssign shr_assign Shr shr
        );

        impl_property_ops!(@unary $gens $ty; Neg neg, Not not);

        impl_property_ops!(@compare $gens $ty);

        impl_property_ops!(@lhs $gens $ty;
            bool, char, i8, i16, i32, i64, i128, isize,
            u8, u16, u32, u64, u128, usize, f32, f64
        );
    };

    // ── Operand ──────────────────────────────────────────────────────

    (@operand [$($g:ident),*] $ty:ty) => {
        impl<'r, $($g),*> $crate::Operand for &'r $ty
        where
            $ty: $crate::ReadableProperty,
            <$ty as $crate::TypedProperty>::T: Clone,
        {
            type Value = <$ty as $crate::TypedProperty>::T;

            #[inline]
            fn into_value(self) -> Self::Value {
                $crate::ReadableProperty::read_cloned(self)
            }

            #[inline]
            fn with_value<R>(&self, f: impl FnOnce(&Self::Value) -> R) -> R {
                $crate::ReadableProperty::inspect(*self, f)
            }
        }

        impl<$($g),*> $crate::Operand for $ty
        where
            $ty: $crate::ReadableProperty,
            <$ty as $crate::TypedProperty>::T: Clone,
        {
            type Value = <$ty as $crate::TypedProperty>::T;

            #[inline]
            fn into_value(self) -> Self::Value {
                $crate::ReadableProperty::read_cloned(&self)
            }

            #[inline]
            fn with_value<R>(&self, f: impl FnOnce(&Self::Value) -> R) -> R {
                $crate::ReadableProperty::inspect(self, f)
            }
        }
    };

    // ── Binary, wrapper on the left ──────────────────────────────────

    (@binary $gens:tt $ty:ty; $($tr:ident $m:ident),*) => {
        $(impl_property_ops!(@binary_one $gens $ty; $tr $m);)*
    };

    (@binary_one [$($g:ident),*] $ty:ty; $tr:ident $m:ident) => {
        impl<'r, $($g,)* K> ::std::ops::$tr<K> for &'r $ty
        where
            $ty: $crate::ReadableProperty,
            <$ty as $crate::TypedProperty>::T: Clone + ::std::ops::$tr<K::Value>,
            K: $crate::Operand,
        {
            type Output =
                <<$ty as $crate::TypedProperty>::T as ::std::ops::$tr<K::Value>>::Output;

            #[inline]
            fn $m(self, rhs: K) -> Self::Output {
                ::std::ops::$tr::$m(
                    $crate::ReadableProperty::read_cloned(self),
                    $crate::Operand::into_value(rhs),
                )
            }
        }
    };

    // ── Compound assignment ──────────────────────────────────────────

    (@assign $gens:tt $ty:ty; $($tr:ident $m:ident $op:ident $opm:ident),*) => {
        $(impl_property_ops!(@assign_one $gens $ty; $tr $m $op $opm);)*
    };

    (@assign_one [$($g:ident),*] $ty:ty; $tr:ident $m:ident $op:ident $opm:ident) => {
        impl<$($g,)* K> ::std::ops::$tr<K> for $ty
        where
            $ty: $crate::ReadableProperty
                + $crate::WritableProperty<Error = ::std::convert::Infallible>,
            <$ty as $crate::TypedProperty>::T: Clone
                + ::std::ops::$op<K::Value, Output = <$ty as $crate::TypedProperty>::T>,
            K: $crate::Operand,
        {
            #[inline]
            fn $m(&mut self, rhs: K) {
                match $crate::MutableProperty::compound(self, rhs, ::std::ops::$op::$opm) {
                    Ok(_) => {}
                    Err(never) => match never {},
                }
            }
        }
    };

    // ── Unary ────────────────────────────────────────────────────────

    (@unary $gens:tt $ty:ty; $($tr:ident $m:ident),*) => {
        $(impl_property_ops!(@unary_one $gens $ty; $tr $m);)*
    };

    (@unary_one [$($g:ident),*] $ty:ty; $tr:ident $m:ident) => {
        impl<'r, $($g),*> ::std::ops::$tr for &'r $ty
        where
            $ty: $crate::ReadableProperty,
            <$ty as $crate::TypedProperty>::T: Clone + ::std::ops::$tr,
        {
            type Output = <<$ty as $crate::TypedProperty>::T as ::std::ops::$tr>::Output;

            #[inline]
            fn $m(self) -> Self::Output {
                ::std::ops::$tr::$m($crate::ReadableProperty::read_cloned(self))
            }
        }
    };

    // ── Comparison, wrapper on the left ──────────────────────────────

    (@compare [$($g:ident),*] $ty:ty) => {
        impl<$($g,)* K> ::std::cmp::PartialEq<K> for $ty
        where
            $ty: $crate::ReadableProperty,
            <$ty as $crate::TypedProperty>::T: ::std::cmp::PartialEq<K::Value>,
            K: $crate::Operand,
            K::Value: Clone,
        {
            // The right side is copied out first: both sides may guard the
            // same storage.
            #[inline]
            fn eq(&self, other: &K) -> bool {
                let rhs = $crate::Operand::to_value(other);
                $crate::ReadableProperty::inspect(self, |lhs| *lhs == rhs)
            }
        }

        impl<$($g,)* K> ::std::cmp::PartialOrd<K> for $ty
        where
            $ty: $crate::ReadableProperty,
            <$ty as $crate::TypedProperty>::T: ::std::cmp::PartialOrd<K::Value>,
            K: $crate::Operand,
            K::Value: Clone,
        {
            #[inline]
            fn partial_cmp(&self, other: &K) -> Option<::std::cmp::Ordering> {
                let rhs = $crate::Operand::to_value(other);
                $crate::ReadableProperty::inspect(self, |lhs| lhs.partial_cmp(&rhs))
            }
        }
    };

    // ── Primitive on the left ────────────────────────────────────────

    (@lhs $gens:tt $ty:ty; $($prim:ty),*) => {
        $(impl_property_ops!(@lhs_prim $gens $ty; $prim);)*
    };

    (@lhs_prim $gens:tt $ty:ty; $prim:ty) => {
        impl_property_ops!(@lhs_one $gens $ty; $prim; Add add);
        impl_property_ops!(@lhs_one $gens $ty; $prim; Sub sub);
        impl_property_ops!(@lhs_one $gens $ty; $prim; Mul mul);
        impl_property_ops!(@lhs_one $gens $ty; $prim; Div div);
        impl_property_ops!(@lhs_one $gens $ty; $prim; Rem rem);
        impl_property_ops!(@lhs_one $gens $ty; $prim; BitAnd bitand);
        impl_property_ops!(@lhs_one $gens $ty; $prim; BitOr bitor);
        impl_property_ops!(@lhs_one $gens $ty; $prim; BitXor bitxor);
        impl_property_ops!(@lhs_one $gens $ty; $prim; Shl shl);
        impl_property_ops!(@lhs_one $gens $ty; $prim; Shr shr);
        impl_property_ops!(@lhs_compare $gens $ty; $prim);
    };

    (@lhs_one [$($g:ident),*] $ty:ty; $prim:ty; $tr:ident $m:ident) => {
        impl<'r, $($g),*> ::std::ops::$tr<&'r $ty> for $prim
        where
            $ty: $crate::ReadableProperty,
            <$ty as $crate::TypedProperty>::T: Clone,
            $prim: ::std::ops::$tr<<$ty as $crate::TypedProperty>::T>,
        {
            type Output = <$prim as ::std::ops::$tr<<$ty as $crate::TypedProperty>::T>>::Output;

            #[inline]
            fn $m(self, rhs: &'r $ty) -> Self::Output {
                ::std::ops::$tr::$m(self, $crate::ReadableProperty::read_cloned(rhs))
            }
        }
    };

    (@lhs_compare [$($g:ident),*] $ty:ty; $prim:ty) => {
        impl<$($g),*> ::std::cmp::PartialEq<$ty> for $prim
        where
            $ty: $crate::ReadableProperty,
            $prim: ::std::cmp::PartialEq<<$ty as $crate::TypedProperty>::T>,
        {
            #[inline]
            fn eq(&self, other: &$ty) -> bool {
                $crate::ReadableProperty::inspect(other, |rhs| self == rhs)
            }
        }

        impl<$($g),*> ::std::cmp::PartialOrd<$ty> for $prim
        where
            $ty: $crate::ReadableProperty,
            $prim: ::std::cmp::PartialOrd<<$ty as $crate::TypedProperty>::T>,
        {
            #[inline]
            fn partial_cmp(&self, other: &$ty) -> Option<::std::cmp::Ordering> {
                $crate::ReadableProperty::inspect(other, |rhs| self.partial_cmp(rhs))
            }
        }
    };
}

pub(crate) use impl_property_ops;
