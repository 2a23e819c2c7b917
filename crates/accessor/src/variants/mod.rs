mod accessor;
mod macros;
mod self_storage;
mod shapes;

pub use accessor::*;
pub use self_storage::*;
pub use shapes::*;
