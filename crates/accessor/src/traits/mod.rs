mod capability;
mod mutable;
mod operand;
mod readable;
mod step;
mod storage;
mod typed;
mod writable;

pub use capability::*;
pub use mutable::*;
pub use operand::*;
pub use readable::*;
pub use step::*;
pub use storage::*;
pub use typed::*;
pub use writable::*;
