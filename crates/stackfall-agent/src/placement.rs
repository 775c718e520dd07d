//! Move generation: enumerating every valid drop for a piece kind.

use arrayvec::ArrayVec;
use stackfall_engine::{Board, Piece, PieceKind, Rotation};

use crate::{metrics::StackMetrics, weights::FeatureWeights};

/// Upper bound on raw candidates per kind: 4 rotations × 10 columns.
pub const MAX_PLACEMENTS: usize = Rotation::ALL.len() * Board::WIDTH;

/// One simulated (rotation, column) drop outcome.
///
/// Owns its post-drop board snapshot exclusively; candidates never share
/// grid storage and are discarded once a decision is returned.
#[derive(Debug, Clone)]
pub struct PlacementCandidate {
    x: i32,
    rotation: Rotation,
    board: Board,
    metrics: StackMetrics,
    score: f32,
}

impl PlacementCandidate {
    /// Anchor column of the placement.
    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The simulated board after the drop and any line clears.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn metrics(&self) -> &StackMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn score(&self) -> f32 {
        self.score
    }
}

/// Enumerates all valid placements of `kind` on `board`, scored by `weights`.
///
/// Iteration is rotation-major, column-minor: for each rotation, each board
/// column `c` yields the anchor `x = c - x_offset(rotation)`; pairs without
/// a drop position are skipped. Each emitted candidate clones the board,
/// stamps the piece, and measures the result (clearing completed lines on
/// the clone). The caller's board is never touched.
#[must_use]
pub fn enumerate_placements(
    board: &Board,
    kind: PieceKind,
    weights: &FeatureWeights,
) -> ArrayVec<PlacementCandidate, MAX_PLACEMENTS> {
    let mut candidates = ArrayVec::new();
    for rotation in Rotation::ALL {
        for c in 0..i32::try_from(Board::WIDTH).unwrap() {
            let x = c - kind.x_offset(rotation);
            let Some(y) = board.drop_position(kind, rotation, x) else {
                continue;
            };
            let mut snapshot = board.clone();
            snapshot.fill_piece(Piece::new(kind, rotation, x, y));
            let metrics = StackMetrics::measure(&mut snapshot);
            let score = weights.score(&metrics);
            candidates.push(PlacementCandidate {
                x,
                rotation,
                board: snapshot,
                metrics,
                score,
            });
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_candidates_are_legal(board: &Board, kind: PieceKind) {
        let weights = FeatureWeights::default();
        for candidate in enumerate_placements(board, kind, &weights) {
            let y = board
                .drop_position(kind, candidate.rotation(), candidate.x())
                .expect("emitted candidate must have a drop position");
            let piece = Piece::new(kind, candidate.rotation(), candidate.x(), y);
            for (x, y) in piece.cells() {
                assert!(x >= 0 && x < 10 && y >= 0 && y < 20, "cell out of bounds");
                assert_eq!(board.get(x, y), None, "cell overlaps existing stack");
            }
        }
    }

    #[test]
    fn test_candidates_within_bounds_and_non_overlapping() {
        let jagged = Board::from_ascii(
            r"
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..#.......
            ..#....#..
            .##..###..
            .##..####.
            ###.#####.
            ###.######
            ",
        );
        for kind in PieceKind::ALL {
            assert_candidates_are_legal(&Board::new(), kind);
            assert_candidates_are_legal(&jagged, kind);
        }
    }

    #[test]
    fn test_generation_order_is_rotation_major() {
        let weights = FeatureWeights::default();
        let candidates = enumerate_placements(&Board::new(), PieceKind::I, &weights);
        // Rotation 0 admits anchors 0..=6, rotation 1 (offset 2) admits
        // anchors -2..=7, and rotations 2 and 3 mirror them.
        let head: Vec<_> = candidates
            .iter()
            .take(8)
            .map(|c| (c.rotation().index(), c.x()))
            .collect();
        assert_eq!(
            head,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (0, 5),
                (0, 6),
                (1, -2),
            ]
        );
        assert_eq!(candidates.len(), 7 + 10 + 7 + 10);
    }

    #[test]
    fn test_full_board_has_no_candidates() {
        let full = Board::from_ascii(&"##########\n".repeat(Board::HEIGHT));
        for kind in PieceKind::ALL {
            let candidates = enumerate_placements(&full, kind, &FeatureWeights::default());
            assert!(candidates.is_empty(), "{}", kind.as_char());
        }
    }

    #[test]
    fn test_candidate_board_reflects_line_clear() {
        let mut art = String::new();
        for _ in 0..Board::HEIGHT - 1 {
            art.push_str("..........\n");
        }
        art.push_str("######....\n");
        let board = Board::from_ascii(&art);
        let weights = FeatureWeights::default();
        let clearing = enumerate_placements(&board, PieceKind::I, &weights)
            .into_iter()
            .find(|c| c.metrics().complete_lines == 1)
            .expect("horizontal I at the right edge completes the row");
        assert_eq!(clearing.x(), 6);
        assert_eq!(clearing.metrics().aggregate_height, 0);
        assert_eq!(*clearing.board(), Board::new());
    }
}
