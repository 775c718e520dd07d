use crate::{
    InvalidMoveError,
    core::{Board, Piece, PieceKind, Rotation},
};

use super::{piece_source::PieceSource, stats::SessionStats};

/// A headless game in progress: the canonical board plus the current and
/// next piece kinds.
///
/// The session owns the one canonical board. Decision code only ever reads
/// it (cloning for simulation); the session itself is the single writer,
/// mutating the board when a piece is locked.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current: PieceKind,
    next: PieceKind,
    source: PieceSource,
    stats: SessionStats,
}

impl GameSession {
    #[must_use]
    pub fn new(mut source: PieceSource) -> Self {
        let current = source.next_kind();
        let next = source.next_kind();
        Self {
            board: Board::new(),
            current,
            next,
            source,
            stats: SessionStats::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current(&self) -> PieceKind {
        self.current
    }

    #[must_use]
    pub fn next(&self) -> PieceKind {
        self.next
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Drops the current piece at the given rotation and anchor column,
    /// clears any completed lines, and promotes the next piece.
    ///
    /// Returns the number of lines cleared. Fails when the piece has no drop
    /// position there, which includes the top-of-stack case; callers that
    /// chose the move through an agent never hit this.
    pub fn lock_piece(&mut self, rotation: Rotation, x: i32) -> Result<usize, InvalidMoveError> {
        let y = self
            .board
            .drop_position(self.current, rotation, x)
            .ok_or(InvalidMoveError)?;
        self.board
            .fill_piece(Piece::new(self.current, rotation, x, y));
        let cleared_lines = self.remove_full_lines();
        self.stats.complete_piece_drop(cleared_lines);

        self.current = self.next;
        self.next = self.source.next_kind();
        Ok(cleared_lines)
    }

    fn remove_full_lines(&mut self) -> usize {
        let mut cleared_lines = 0;
        for y in 0..Board::HEIGHT {
            if self.board.is_line_full(y) {
                self.board.remove_line(y);
                cleared_lines += 1;
            }
        }
        cleared_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_piece_advances_queue() {
        let mut session = GameSession::new(PieceSource::with_seed(1));
        let next = session.next();
        session.lock_piece(Rotation::default(), 0).unwrap();
        assert_eq!(session.current(), next);
        assert_eq!(session.stats().completed_pieces(), 1);
    }

    #[test]
    fn test_lock_piece_clears_full_line() {
        let mut session = GameSession::new(PieceSource::with_seed(1));
        // Fill the bottom row except where the piece will land, then force
        // the board into a state one horizontal I away from a clear.
        let mut art = String::new();
        for _ in 0..Board::HEIGHT - 1 {
            art.push_str("..........\n");
        }
        art.push_str("######....\n");
        session.board = Board::from_ascii(&art);
        session.current = PieceKind::I;

        let cleared = session.lock_piece(Rotation::default(), 6).unwrap();
        assert_eq!(cleared, 1);
        assert_eq!(session.stats().total_cleared_lines(), 1);
        assert_eq!(session.stats().score(), 10 + 100);
        for x in 0..10 {
            assert_eq!(session.board().get(x, 19), None);
        }
    }

    #[test]
    fn test_lock_piece_rejects_impossible_move() {
        let mut session = GameSession::new(PieceSource::with_seed(1));
        assert!(session.lock_piece(Rotation::default(), -5).is_err());
    }
}
