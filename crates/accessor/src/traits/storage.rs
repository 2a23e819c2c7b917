use std::{
    cell::{Ref, RefCell},
    ops::Deref,
};

/// A storage location a direct strategy can point at.
///
/// `load` only ever hands out a shared view, which is what keeps the direct
/// getter route read-only: there is no way to obtain `&mut Entity` through it.
pub trait Storage {
    type Entity;

    type Guard<'s>: Deref<Target = Self::Entity>
    where
        Self: 's;

    fn load(&self) -> Self::Guard<'_>;
}

/// A storage location a direct setter can assign into.
///
/// Assignment goes through `&self`, so one location can back both the getter
/// and the setter of an accessor, and several accessors at once.
pub trait StorageMut: Storage {
    fn store(&self, value: Self::Entity);
}

/// Panics on `store` while a guard from `load` is still alive.
impl<T> Storage for RefCell<T> {
    type Entity = T;

    type Guard<'s>
        = Ref<'s, T>
    where
        Self: 's;

    #[inline]
    fn load(&self) -> Self::Guard<'_> {
        self.borrow()
    }
}

impl<T> StorageMut for RefCell<T> {
    #[inline]
    fn store(&self, value: T) {
        *self.borrow_mut() = value;
    }
}

#[cfg(feature = "parking_lot")]
mod locks {
    use parking_lot::{Mutex, MutexGuard, RwLock, RwLockReadGuard};

    use super::{Storage, StorageMut};

    impl<T> Storage for RwLock<T> {
        type Entity = T;

        type Guard<'s>
            = RwLockReadGuard<'s, T>
        where
            Self: 's;

        #[inline]
        fn load(&self) -> Self::Guard<'_> {
            self.read()
        }
    }

    impl<T> StorageMut for RwLock<T> {
        #[inline]
        fn store(&self, value: T) {
            *self.write() = value;
        }
    }

    /// Deadlocks on `store` while a guard from `load` is held by the same thread.
    impl<T> Storage for Mutex<T> {
        type Entity = T;

        type Guard<'s>
            = MutexGuard<'s, T>
        where
            Self: 's;

        #[inline]
        fn load(&self) -> Self::Guard<'_> {
            self.lock()
        }
    }

    impl<T> StorageMut for Mutex<T> {
        #[inline]
        fn store(&self, value: T) {
            *self.lock() = value;
        }
    }
}
