use std::{borrow::Cow, convert::Infallible, error, result};

use thiserror::Error;

use crate::short_type_name;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Ready-made error type for fallible setters.
///
/// The accessor layer never produces errors of its own: whatever a
/// [`TrySetter`](crate::TrySetter) returns is propagated unchanged. This type
/// exists so owners have something to return when a setter validates input.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Value rejected by setter of `{entity}`: {reason}")]
    Rejected {
        entity: &'static str,
        reason: Cow<'static, str>,
    },
    #[error(transparent)]
    Other(#[from] Box<dyn error::Error + Send + Sync>),
}

impl Error {
    /// Builds [`Error::Rejected`] for a setter of entity type `T`.
    pub fn rejected<T: ?Sized>(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Rejected {
            entity: short_type_name::<T>(),
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
