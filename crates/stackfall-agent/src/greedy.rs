//! One-ply greedy placement selection.

use stackfall_engine::{Board, PieceKind};

use crate::{
    Agent, Move, NoLegalPlacementError, placement::enumerate_placements, weights::FeatureWeights,
};

/// Greedy agent: scores every placement of the current piece and takes the
/// best, ignoring the next piece entirely.
///
/// Cheaper than [`BeamAgent`](crate::beam::BeamAgent) (at most 40
/// evaluations per decision) and noticeably weaker, since it cannot trade a
/// mediocre placement now for a clear on the following piece.
#[derive(Debug, Clone, Default)]
pub struct GreedyAgent {
    weights: FeatureWeights,
}

impl GreedyAgent {
    #[must_use]
    pub fn new(weights: FeatureWeights) -> Self {
        Self { weights }
    }
}

impl Agent for GreedyAgent {
    fn select_best_move(
        &self,
        board: &Board,
        current: PieceKind,
        _next: PieceKind,
    ) -> Result<Move, NoLegalPlacementError> {
        let mut best: Option<(Move, f32)> = None;
        for candidate in enumerate_placements(board, current, &self.weights) {
            // Same tie-break as the beam agent: the last equal-scoring
            // candidate in generation order wins.
            if best.is_none_or(|(_, best_score)| candidate.score() >= best_score) {
                let chosen = Move {
                    x: candidate.x(),
                    rotation: candidate.rotation(),
                };
                best = Some((chosen, candidate.score()));
            }
        }
        best.map(|(chosen, _score)| chosen)
            .ok_or(NoLegalPlacementError)
    }
}

#[cfg(test)]
mod tests {
    use stackfall_engine::Rotation;

    use super::*;

    #[test]
    fn test_ties_resolve_to_last_generated_candidate() {
        // All-zero weights make every candidate tie; the O piece admits
        // anchors 0..=8 in each of its four (identical) rotations, so the
        // winner is rotation 3 at anchor 8.
        let agent = GreedyAgent::new(FeatureWeights {
            height: 0.0,
            complete_lines: 0.0,
            holes: 0.0,
            bumpiness: 0.0,
        });
        let chosen = agent
            .select_best_move(&Board::new(), PieceKind::O, PieceKind::O)
            .unwrap();
        assert_eq!(
            chosen,
            Move {
                x: 8,
                rotation: Rotation::ALL[3],
            }
        );
    }

    #[test]
    fn test_takes_an_immediate_clear() {
        let mut art = String::new();
        for _ in 0..Board::HEIGHT - 1 {
            art.push_str("..........\n");
        }
        art.push_str("######....\n");
        let board = Board::from_ascii(&art);
        let chosen = GreedyAgent::default()
            .select_best_move(&board, PieceKind::I, PieceKind::I)
            .unwrap();
        assert_eq!(chosen.x, 6);
    }

    #[test]
    fn test_blocked_spawn_reports_no_legal_placement() {
        let full = Board::from_ascii(&"##########\n".repeat(Board::HEIGHT));
        let agent = GreedyAgent::default();
        assert!(
            agent
                .select_best_move(&full, PieceKind::S, PieceKind::Z)
                .is_err()
        );
    }
}
