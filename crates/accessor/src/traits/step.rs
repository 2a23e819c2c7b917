use std::ops::{Add, Sub};

/// Types with a unit step, used by increment and decrement.
pub trait Step: Sized + Add<Output = Self> + Sub<Output = Self> {
    const ONE: Self;
}

macro_rules! impl_step {
    ($($t:ty => $one:expr),* $(,)?) => ($(
        impl Step for $t {
            const ONE: Self = $one;
        }
    )*)
}

impl_step! {
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
    f32 => 1.0, f64 => 1.0,
}
