//! Headless game logic built on top of the core data structures.
//!
//! - [`GameSession`] - board, current/next pieces, and move application
//! - [`PieceSource`] - seeded random piece generation
//! - [`SessionStats`] - score and line-clear bookkeeping
//!
//! A session advances one locked piece at a time: the caller (typically an
//! agent) picks a column and rotation, [`GameSession::lock_piece`] drops the
//! piece, clears full lines, updates statistics, and promotes the next piece.

pub use self::{piece_source::*, session::*, stats::*};

mod piece_source;
mod session;
mod stats;
