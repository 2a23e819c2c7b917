/// A property with a statically-known entity type.
///
/// Every getter and setter bound to one property agrees on `T`, the
/// unqualified value type that is ultimately read or written.
pub trait TypedProperty {
    /// The entity type exposed by this property.
    type T;
}
