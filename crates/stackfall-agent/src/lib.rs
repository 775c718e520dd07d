//! Placement decision agents for stackfall.
//!
//! This crate turns a board snapshot plus the current and next piece kinds
//! into a single placement decision (anchor column and rotation). The
//! pipeline has three levels:
//!
//! 1. **Move generation** ([`placement`]) - enumerate every valid
//!    (rotation, column) drop for a piece kind, producing simulated
//!    post-drop board snapshots.
//! 2. **Evaluation** ([`metrics`], [`weights`]) - reduce each snapshot to
//!    stack features (lines, height, holes, bumpiness) and then to a scalar
//!    score via a configurable weight set.
//! 3. **Search** ([`beam`], [`greedy`]) - pick one top-level placement,
//!    either greedily or with a beam-pruned two-ply lookahead.
//!
//! Agents never mutate the caller's board; every simulated branch works on
//! its own clone. Decisions are fully deterministic: identical inputs always
//! yield the identical move.

pub use self::{
    beam::{BEAM_WIDTH, BeamAgent, SEARCH_DEPTH},
    greedy::GreedyAgent,
    weights::FeatureWeights,
};

use stackfall_engine::{Board, PieceKind, Rotation};

pub mod beam;
pub mod greedy;
pub mod metrics;
pub mod placement;
pub mod weights;

/// The current piece cannot be placed anywhere: the stack has reached the
/// spawn row. Terminal for the game, not a transient failure.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("no legal placement for the current piece")]
pub struct NoLegalPlacementError;

/// A placement decision: anchor column and rotation for the current piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Anchor column. May be negative after alignment correction while all
    /// occupied cells stay on the board.
    pub x: i32,
    pub rotation: Rotation,
}

/// Something that can decide where to drop the current piece.
pub trait Agent {
    /// Chooses a placement for `current` on `board`, knowing that `next`
    /// follows.
    fn select_best_move(
        &self,
        board: &Board,
        current: PieceKind,
        next: PieceKind,
    ) -> Result<Move, NoLegalPlacementError>;
}
