use serde::{Deserialize, Serialize};

/// Rotation state of a piece.
///
/// One of four orientations: `0` (spawn), `1` (90° clockwise), `2` (180°),
/// `3` (270° clockwise). Rotation operations wrap around modulo 4.
/// Deserialization rejects indices outside that range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "u8")]
pub struct Rotation(u8);

/// Error for rotation indices outside `0..=3`.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("rotation index must be in 0..=3")]
pub struct InvalidRotationError;

impl TryFrom<u8> for Rotation {
    type Error = InvalidRotationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if usize::from(value) < Self::ALL.len() {
            Ok(Rotation(value))
        } else {
            Err(InvalidRotationError)
        }
    }
}

impl Rotation {
    /// All four rotation states, in rotation order.
    pub const ALL: [Rotation; 4] = [Rotation(0), Rotation(1), Rotation(2), Rotation(3)];

    #[must_use]
    pub fn rotated_right(self) -> Self {
        Rotation((self.0 + 1) % 4)
    }

    #[must_use]
    pub fn rotated_left(self) -> Self {
        Rotation((self.0 + 3) % 4)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Enum representing the type of piece.
///
/// Variants are ordered as in the classic shape table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// J-piece.
    J = 1,
    /// L-piece.
    L = 2,
    /// O-piece.
    O = 3,
    /// S-piece.
    S = 4,
    /// T-piece.
    T = 5,
    /// Z-piece.
    Z = 6,
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All seven piece types, in shape-table order.
    pub const ALL: [PieceKind; Self::LEN] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Side length of the effective bounding box (4 for I, 2 for O, 3 otherwise).
    #[must_use]
    pub const fn size(self) -> i32 {
        SHAPES[self as usize].size
    }

    /// Occupancy mask of this piece in the given rotation.
    #[must_use]
    pub const fn mask(self, rotation: Rotation) -> u16 {
        SHAPES[self as usize].masks[rotation.index()]
    }

    /// Horizontal alignment correction for the given rotation.
    ///
    /// Subtracting this from a board column yields the anchor column that
    /// places the piece's leftmost occupied cell at that board column,
    /// normalizing column indexing across rotations.
    #[must_use]
    pub const fn x_offset(self, rotation: Rotation) -> i32 {
        SHAPES[self as usize].x_offsets[rotation.index()]
    }

    /// Returns the single character representation of this piece kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }
}

/// A piece at a specific anchor position and orientation.
///
/// The anchor is the top-left corner of the piece's 4×4 template. It may be
/// negative after alignment correction: what matters is that every occupied
/// cell decoded from the rotation mask lies on the board, which is the
/// [`Board::occupied`](super::board::Board::occupied) check's job.
///
/// Pieces are ephemeral values: movement produces a new `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    rotation: Rotation,
    x: i32,
    y: i32,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, rotation: Rotation, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn rotation(self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Decodes the occupied cells of this piece as board coordinates.
    ///
    /// The rotation mask is read row-major, most significant bit first, over
    /// the 4×4 template, offsetting each set bit by the anchor. Pure and
    /// deterministic.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        let mask = self.kind.mask(self.rotation);
        let (x, y) = (self.x, self.y);
        (0..16i32)
            .filter(move |i| mask & (0x8000 >> i) != 0)
            .map(move |i| (x + i % 4, y + i / 4))
    }
}

struct Shape {
    size: i32,
    masks: [u16; 4],
    x_offsets: [i32; 4],
}

/// Classic piece shape table.
///
/// Each mask is a 16-bit integer where the bits describe a 4×4 set of cells,
/// e.g. `J` at rotation 0 is `0x44C0`:
///
/// ```text
/// 0100 = 0x4 << 3 = 0x4000
/// 0100 = 0x4 << 2 = 0x0400
/// 1100 = 0xC << 1 = 0x00C0
/// 0000 = 0x0 << 0 = 0x0000
///                   ------
///                   0x44C0
/// ```
const SHAPES: [Shape; PieceKind::LEN] = [
    // I
    Shape {
        size: 4,
        masks: [0x0F00, 0x2222, 0x00F0, 0x4444],
        x_offsets: [0, 2, 0, 1],
    },
    // J
    Shape {
        size: 3,
        masks: [0x44C0, 0x8E00, 0x6440, 0x0E20],
        x_offsets: [0, 0, 1, 0],
    },
    // L
    Shape {
        size: 3,
        masks: [0x4460, 0x0E80, 0xC440, 0x2E00],
        x_offsets: [1, 0, 0, 0],
    },
    // O
    Shape {
        size: 2,
        masks: [0xCC00, 0xCC00, 0xCC00, 0xCC00],
        x_offsets: [0, 0, 0, 0],
    },
    // S
    Shape {
        size: 3,
        masks: [0x06C0, 0x8C40, 0x6C00, 0x4620],
        x_offsets: [0, 0, 0, 1],
    },
    // T
    Shape {
        size: 3,
        masks: [0x0E40, 0x4C40, 0x4E00, 0x4640],
        x_offsets: [0, 0, 0, 1],
    },
    // Z
    Shape {
        size: 3,
        masks: [0x0C60, 0x4C80, 0xC600, 0x2640],
        x_offsets: [0, 0, 0, 1],
    },
];
