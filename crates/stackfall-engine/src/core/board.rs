use std::fmt;

use super::{
    BOARD_HEIGHT, BOARD_WIDTH,
    piece::{Piece, PieceKind, Rotation},
};

/// Fixed 10×20 playing field.
///
/// Cells hold either `None` (empty) or the [`PieceKind`] that occupies them;
/// the kind only matters for display, never for legality or scoring. The grid
/// is one flat row-major array, so cloning a board is a single bulk copy.
///
/// All accesses are bounds-checked: out-of-bounds reads return empty and
/// out-of-bounds writes are ignored, never an error.
///
/// Boards are value-like. The one canonical board is owned by the caller;
/// search code clones it for every simulated branch, so no two live
/// candidates ever share mutable grid storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PieceKind>; BOARD_WIDTH * BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; BOARD_WIDTH * BOARD_HEIGHT],
        }
    }

    fn cell_index(x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < Self::WIDTH)?;
        let y = usize::try_from(y).ok().filter(|&y| y < Self::HEIGHT)?;
        Some(y * Self::WIDTH + x)
    }

    /// Returns the cell at `(x, y)`, or `None` when empty or out of bounds.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<PieceKind> {
        Self::cell_index(x, y).and_then(|i| self.cells[i])
    }

    /// Sets the cell at `(x, y)`; writes outside the board are ignored.
    pub fn set(&mut self, x: i32, y: i32, block: Option<PieceKind>) {
        if let Some(i) = Self::cell_index(x, y) {
            self.cells[i] = block;
        }
    }

    /// Checks whether the piece overlaps an occupied cell or leaves the board.
    ///
    /// Doubles as the legality test: an out-of-bounds cell counts as occupied.
    #[must_use]
    pub fn occupied(&self, piece: Piece) -> bool {
        piece.cells().any(|(x, y)| match Self::cell_index(x, y) {
            Some(i) => self.cells[i].is_some(),
            None => true,
        })
    }

    #[must_use]
    pub fn unoccupied(&self, piece: Piece) -> bool {
        !self.occupied(piece)
    }

    /// Computes the resting row for a piece dropped at anchor column `x`.
    ///
    /// Starting from row 0, the piece advances while the next row down keeps
    /// it unoccupied. A piece that cannot fall even one row yields `None`,
    /// whether the placement is illegal or the piece is already resting at
    /// the very top; the two cases are deliberately indistinguishable here
    /// and callers treat both as "no placement".
    #[must_use]
    pub fn drop_position(&self, kind: PieceKind, rotation: Rotation, x: i32) -> Option<i32> {
        let mut y = 0;
        while self.unoccupied(Piece::new(kind, rotation, x, y + 1)) {
            y += 1;
        }
        (y > 0).then_some(y)
    }

    /// Stamps the piece's cells onto the board.
    pub fn fill_piece(&mut self, piece: Piece) {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind()));
        }
    }

    /// Checks whether every cell of row `y` is occupied.
    #[must_use]
    pub fn is_line_full(&self, y: usize) -> bool {
        assert!(y < Self::HEIGHT);
        self.cells[y * Self::WIDTH..][..Self::WIDTH]
            .iter()
            .all(Option::is_some)
    }

    /// Removes row `y`: every row above shifts down one, row 0 is cleared.
    ///
    /// Call once per fully-occupied row, lowest affected index first.
    pub fn remove_line(&mut self, y: usize) {
        assert!(y < Self::HEIGHT);
        self.cells.copy_within(0..y * Self::WIDTH, Self::WIDTH);
        self.cells[..Self::WIDTH].fill(None);
    }

    /// Creates a `Board` from ASCII art for testing.
    ///
    /// `'#'` is an occupied cell, `'.'` an empty one. Rows are given top to
    /// bottom and each must contain exactly [`Board::WIDTH`] cells; trailing
    /// empty rows may be omitted. Occupied cells are stamped as I-pieces
    /// since the kind is irrelevant to legality and scoring.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut board = Self::new();
        let lines = art.lines().filter(|line| !line.trim().is_empty());

        for (y, line) in lines.enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| *c == '#' || *c == '.').collect();
            assert_eq!(
                cells.len(),
                Self::WIDTH,
                "Each row must have exactly {} cells, got {} at row {}",
                Self::WIDTH,
                cells.len(),
                y
            );
            assert!(y < Self::HEIGHT, "Too many rows");

            for (x, &ch) in cells.iter().enumerate() {
                if ch == '#' {
                    board.cells[y * Self::WIDTH + x] = Some(PieceKind::I);
                }
            }
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..Self::HEIGHT {
            for cell in &self.cells[y * Self::WIDTH..][..Self::WIDTH] {
                let ch = match cell {
                    Some(kind) => kind.as_char(),
                    None => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
