//! Stack feature extraction from a simulated board snapshot.
//!
//! [`StackMetrics::measure`] is a pure numeric reduction with one twist: it
//! removes completed lines from the snapshot in place, so every later
//! feature describes the post-clear stack. That is legal because each
//! snapshot is exclusively owned by its placement candidate.

use stackfall_engine::Board;

/// Features of one candidate's post-drop stack.
///
/// Field order mirrors the measurement order; `complete_lines` is counted
/// (and the lines removed) before anything else is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackMetrics {
    /// Rows that were fully occupied after the drop, removed from the
    /// snapshot before the remaining features were measured.
    pub complete_lines: u32,
    /// Distance from the top of each column's topmost occupied cell to the
    /// board floor; 0 for an empty column.
    pub column_heights: [u32; Board::WIDTH],
    /// Sum of `column_heights`.
    pub aggregate_height: u32,
    /// Empty cells with at least one occupied cell above them in the same
    /// column.
    pub holes: u32,
    /// Sum of absolute height differences between adjacent columns.
    pub bumpiness: u32,
}

impl StackMetrics {
    /// Measures the snapshot, clearing its completed lines in place.
    #[must_use]
    pub fn measure(board: &mut Board) -> Self {
        let complete_lines = clear_complete_lines(board);
        let column_heights = column_heights(board);
        let aggregate_height = column_heights.iter().sum();
        let holes = holes(board);
        let bumpiness = bumpiness(&column_heights);
        Self {
            complete_lines,
            column_heights,
            aggregate_height,
            holes,
            bumpiness,
        }
    }
}

fn clear_complete_lines(board: &mut Board) -> u32 {
    let mut complete_lines = 0;
    for y in 0..Board::HEIGHT {
        if board.is_line_full(y) {
            board.remove_line(y);
            complete_lines += 1;
        }
    }
    complete_lines
}

fn column_heights(board: &Board) -> [u32; Board::WIDTH] {
    let mut heights = [0; Board::WIDTH];
    let (width, height) = board_dimensions();
    for (x, column_height) in (0..width).zip(&mut heights) {
        for y in 0..height {
            if board.get(x, y).is_some() {
                *column_height = (height - y).unsigned_abs();
                break;
            }
        }
    }
    heights
}

fn holes(board: &Board) -> u32 {
    let mut holes = 0;
    let (width, height) = board_dimensions();
    for x in 0..width {
        let mut block_found = false;
        for y in 0..height {
            if board.get(x, y).is_some() {
                block_found = true;
            } else if block_found {
                holes += 1;
            }
        }
    }
    holes
}

fn bumpiness(column_heights: &[u32]) -> u32 {
    column_heights
        .windows(2)
        .map(|pair| pair[0].abs_diff(pair[1]))
        .sum()
}

fn board_dimensions() -> (i32, i32) {
    (
        i32::try_from(Board::WIDTH).unwrap(),
        i32::try_from(Board::HEIGHT).unwrap(),
    )
}
