#![doc = include_str!("../README.md")]

mod error;
mod kind;
mod traits;
mod util;
mod variants;

pub mod strategy;

pub use error::*;
pub use kind::*;
pub use strategy::*;
pub use traits::*;
pub use util::*;
pub use variants::*;
