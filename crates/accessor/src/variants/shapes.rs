use crate::{Absent, Getter, Setter};

use super::{Accessor, SelfStorage};

pub type ReadWriteAccessor<T, G, S> = Accessor<T, G, S>;
pub type ReadOnlyAccessor<T, G> = Accessor<T, G, Absent>;
pub type WriteOnlyAccessor<T, S> = Accessor<T, Absent, S>;
pub type SelfStorageAccessor<T> = SelfStorage<T>;

/// Builds a read-write accessor. The entity type is inferred from the
/// strategies, which must agree on it.
#[inline]
pub fn make_accessor<T, G, S>(getter: G, setter: S) -> ReadWriteAccessor<T, G, S>
where
    G: Getter<T>,
    S: Setter<T>,
{
    Accessor::read_write(getter, setter)
}

#[inline]
pub fn make_read_only<T, G>(getter: G) -> ReadOnlyAccessor<T, G>
where
    G: Getter<T>,
{
    Accessor::read_only(getter)
}

#[inline]
pub fn make_write_only<T, S>(setter: S) -> WriteOnlyAccessor<T, S>
where
    S: Setter<T>,
{
    Accessor::write_only(setter)
}

#[inline]
pub fn make_self_storage<T>(value: T) -> SelfStorageAccessor<T> {
    SelfStorage::new(value)
}
