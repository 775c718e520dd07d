//! Beam-pruned two-ply placement search.
//!
//! For the current piece (ply 0) every placement is generated and scored,
//! the best [`BEAM_WIDTH`] survive, and each survivor is expanded with the
//! known next piece (ply 1). A candidate's effective score is its best
//! continuation's score when one exists, otherwise its own. The beam bounds
//! worst-case work to `BEAM_WIDTH × MAX_PLACEMENTS` evaluations per decision
//! while still exploring the most promising branches.
//!
//! Beam pruning is a greedy approximation, not exhaustive search: deeper or
//! wider search strictly dominates for decision quality at higher
//! computational cost. Width and depth are the named constants below.

use stackfall_engine::{Board, PieceKind};

use crate::{
    Agent, Move, NoLegalPlacementError,
    placement::{PlacementCandidate, enumerate_placements},
    weights::FeatureWeights,
};

/// Candidates retained per ply before recursing further.
pub const BEAM_WIDTH: usize = 10;

/// Lookahead horizon in plies: ply 0 places the current piece, ply 1 the
/// next; ply 2 is the terminal base case.
pub const SEARCH_DEPTH: usize = 2;

/// Two-ply beam search agent.
#[derive(Debug, Clone)]
pub struct BeamAgent {
    weights: FeatureWeights,
}

impl Default for BeamAgent {
    fn default() -> Self {
        Self::new(FeatureWeights::default())
    }
}

impl BeamAgent {
    #[must_use]
    pub fn new(weights: FeatureWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &FeatureWeights {
        &self.weights
    }

    /// Recursive search over the remaining plies.
    ///
    /// `kind` is the piece to place at this ply; `None` means the kind is
    /// unknown, in which case candidates for all seven kinds are pooled.
    /// That widening path is unreachable at the fixed depth of 2 (both
    /// pieces are always known) and is kept as the hook for deeper
    /// lookahead. Returns `None` at the horizon or when nothing can be
    /// placed.
    fn search(
        &self,
        board: &Board,
        kind: Option<PieceKind>,
        next: Option<PieceKind>,
        depth: usize,
    ) -> Option<(Move, f32)> {
        if depth == SEARCH_DEPTH {
            return None;
        }

        let mut candidates: Vec<PlacementCandidate> = match kind {
            Some(kind) => enumerate_placements(board, kind, &self.weights)
                .into_iter()
                .collect(),
            None => PieceKind::ALL
                .iter()
                .flat_map(|&kind| enumerate_placements(board, kind, &self.weights))
                .collect(),
        };

        // Stable sort keeps equal scores in generation order, which the
        // `>=` comparison below relies on.
        candidates.sort_by(|a, b| b.score().total_cmp(&a.score()));
        candidates.truncate(BEAM_WIDTH);

        let mut best: Option<(Move, f32)> = None;
        for candidate in &candidates {
            let continuation = self.search(candidate.board(), next, None, depth + 1);
            let score = continuation.map_or(candidate.score(), |(_, score)| score);
            // Among exactly tied scores the last candidate encountered wins.
            if best.is_none_or(|(_, best_score)| score >= best_score) {
                let chosen = Move {
                    x: candidate.x(),
                    rotation: candidate.rotation(),
                };
                best = Some((chosen, score));
            }
        }
        best
    }
}

impl Agent for BeamAgent {
    fn select_best_move(
        &self,
        board: &Board,
        current: PieceKind,
        next: PieceKind,
    ) -> Result<Move, NoLegalPlacementError> {
        self.search(board, Some(current), Some(next), 0)
            .map(|(chosen, _score)| chosen)
            .ok_or(NoLegalPlacementError)
    }
}

#[cfg(test)]
mod tests {
    use stackfall_engine::Rotation;

    use super::*;

    #[test]
    fn test_empty_board_succeeds_for_every_kind() {
        let agent = BeamAgent::default();
        let board = Board::new();
        for kind in PieceKind::ALL {
            let chosen = agent.select_best_move(&board, kind, kind).unwrap();
            let max_x = 10 - kind.size();
            assert!(
                chosen.x >= 0 && chosen.x <= max_x,
                "{}: x = {} not in [0, {max_x}]",
                kind.as_char(),
                chosen.x
            );
        }
    }

    #[test]
    fn test_decision_is_deterministic() {
        let agent = BeamAgent::default();
        let board = Board::from_ascii(
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
            ..........
            ..........
            ..#.......
            .###....#.
            .####..##.
            ####.#####
            ",
        );
        let first = agent
            .select_best_move(&board, PieceKind::T, PieceKind::I)
            .unwrap();
        let second = agent
            .select_best_move(&board, PieceKind::T, PieceKind::I)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ties_resolve_to_last_generated_candidate() {
        // With all-zero weights every candidate scores 0.0, so all effective
        // scores tie and the agent must keep the last candidate of the
        // retained beam: the beam holds the first BEAM_WIDTH candidates in
        // generation order (stable sort), i.e. for the I piece the seven
        // rotation-0 drops followed by the first three rotation-1 drops
        // (anchors -2, -1, 0).
        let agent = BeamAgent::new(FeatureWeights {
            height: 0.0,
            complete_lines: 0.0,
            holes: 0.0,
            bumpiness: 0.0,
        });
        let chosen = agent
            .select_best_move(&Board::new(), PieceKind::I, PieceKind::I)
            .unwrap();
        assert_eq!(
            chosen,
            Move {
                x: 0,
                rotation: Rotation::ALL[1],
            }
        );
    }

    #[test]
    fn test_blocked_spawn_reports_no_legal_placement() {
        let full = Board::from_ascii(&"##########\n".repeat(Board::HEIGHT));
        let agent = BeamAgent::default();
        assert!(
            agent
                .select_best_move(&full, PieceKind::T, PieceKind::I)
                .is_err()
        );
    }

    #[test]
    fn test_prefers_completing_a_line() {
        // Bottom row is one horizontal I short of a clear.
        let mut art = String::new();
        for _ in 0..Board::HEIGHT - 1 {
            art.push_str("..........\n");
        }
        art.push_str("######....\n");
        let board = Board::from_ascii(&art);
        let agent = BeamAgent::default();
        let chosen = agent
            .select_best_move(&board, PieceKind::I, PieceKind::O)
            .unwrap();
        assert_eq!(chosen.x, 6);
        assert!(chosen.rotation == Rotation::ALL[0] || chosen.rotation == Rotation::ALL[2]);
    }

    #[test]
    fn test_lookahead_differs_from_greedy_when_it_matters() {
        // Sanity check on the recursion wiring: the ply-1 expansion runs on
        // the candidate's post-clear snapshot, so the chosen move must stay
        // legal on the real board.
        let board = Board::from_ascii(
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
            ..........
            ..........
            ..........
            ..........
            ..####....
            .#####...#
            ",
        );
        let agent = BeamAgent::default();
        let chosen = agent
            .select_best_move(&board, PieceKind::L, PieceKind::J)
            .unwrap();
        assert!(
            board
                .drop_position(PieceKind::L, chosen.rotation, chosen.x)
                .is_some()
        );
    }
}
