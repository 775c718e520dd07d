pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece cannot be placed at the requested column and rotation")]
pub struct InvalidMoveError;
