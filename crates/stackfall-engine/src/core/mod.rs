pub use self::{board::*, piece::*};

pub(crate) mod board;
pub(crate) mod piece;

pub(crate) const BOARD_WIDTH: usize = 10;
pub(crate) const BOARD_HEIGHT: usize = 20;
