/// Marks a strategy slot as populated or empty.
///
/// Every getter and setter strategy is `PRESENT`; [`Absent`] is not. The
/// constants feed [`Kind`](crate::Kind) and the `has_getter` / `has_setter`
/// queries, while the actual gating of operations is done by trait bounds.
pub trait Capability {
    const PRESENT: bool = true;
}

/// Empty strategy slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absent;

impl Capability for Absent {
    const PRESENT: bool = false;
}
