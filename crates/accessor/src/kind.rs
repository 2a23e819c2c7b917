use std::fmt;

/// Shape of an accessor, derived from which strategy slots are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    ReadWrite,
    ReadOnly,
    WriteOnly,
    SelfStorage,
}

impl Kind {
    /// Maps slot capabilities to a shape.
    ///
    /// Panics when neither capability is present. Used in const context, so an
    /// accessor type with two empty slots fails to compile once its kind is
    /// queried.
    pub const fn from_capabilities(has_getter: bool, has_setter: bool) -> Self {
        match (has_getter, has_setter) {
            (true, true) => Self::ReadWrite,
            (true, false) => Self::ReadOnly,
            (false, true) => Self::WriteOnly,
            (false, false) => panic!("accessor needs a getter, a setter, or both"),
        }
    }

    #[inline]
    pub const fn can_read(self) -> bool {
        !matches!(self, Self::WriteOnly)
    }

    #[inline]
    pub const fn can_write(self) -> bool {
        !matches!(self, Self::ReadOnly)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadWrite => "read-write",
            Self::ReadOnly => "read-only",
            Self::WriteOnly => "write-only",
            Self::SelfStorage => "self-storage",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value category observed by callers of `read()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A fresh value produced on every read.
    Value,
    /// A mutable view into storage (`RefMut`, lock write guards).
    Reference,
    /// A shared view into storage (`&T`, `Ref`, read guards).
    ConstReference,
}

impl Category {
    #[inline]
    pub const fn is_reference(self) -> bool {
        !matches!(self, Self::Value)
    }
}
