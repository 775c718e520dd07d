/// Points awarded for locking a piece.
const DROP_SCORE: usize = 10;

/// Points for clearing `n` lines at once: `100 * 2^(n - 1)`.
///
/// - 1 line: 100 points
/// - 2 lines: 200 points
/// - 3 lines: 400 points
/// - 4 lines: 800 points
const fn line_clear_score(cleared_lines: usize) -> usize {
    if cleared_lines == 0 {
        0
    } else {
        100 << (cleared_lines - 1)
    }
}

/// Game statistics tracking score, lines cleared, and piece count.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    score: usize,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl SessionStats {
    /// Creates a new statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Total number of pieces locked into place.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Histogram of line clears: index `n` counts the drops that cleared
    /// exactly `n` lines.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Updates statistics after a piece drop.
    pub const fn complete_piece_drop(&mut self, cleared_lines: usize) {
        self.completed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if cleared_lines < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared_lines] += 1;
        }
        self.score += DROP_SCORE + line_clear_score(cleared_lines);
    }
}
