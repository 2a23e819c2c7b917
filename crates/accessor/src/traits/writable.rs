use log::debug;

use crate::{Operand, TypedProperty, short_type_name};

/// Write half of a property.
///
/// Implemented only by properties that carry a setter. Errors are whatever the
/// setter itself reports; infallible setters use [`std::convert::Infallible`].
pub trait WritableProperty: TypedProperty {
    /// Error produced by the setter.
    type Error;

    /// Hands `value` to the setter.
    fn write(&mut self, value: Self::T) -> Result<(), Self::Error>;

    /// Writes a copy of `value` and returns the copy.
    ///
    /// The returned value is what was handed to the setter, not what the
    /// getter reports afterwards.
    fn write_cloned(&mut self, value: Self::T) -> Result<Self::T, Self::Error>
    where
        Self::T: Clone,
    {
        let right = value.clone();
        if let Err(error) = self.write(value) {
            debug!("Setter of `{}` rejected a value", short_type_name::<Self::T>());
            return Err(error);
        }
        Ok(right)
    }

    /// Assignment from a plain value or from another readable accessor.
    ///
    /// Captures the right-hand value, writes a converted copy and returns the
    /// captured value. Assigning from a write-only accessor does not compile:
    /// it is not an [`Operand`].
    fn assign<K>(&mut self, rhs: K) -> Result<K::Value, Self::Error>
    where
        K: Operand,
        K::Value: Clone + Into<Self::T>,
    {
        let right = rhs.into_value();
        if let Err(error) = self.write(right.clone().into()) {
            debug!("Setter of `{}` rejected an assignment", short_type_name::<Self::T>());
            return Err(error);
        }
        Ok(right)
    }
}
