/// Value types shared by the board, the move generators and the game state.
///
/// Coordinates are `(row, col)` pairs. Row 0 is Black's back rank at setup and
/// row 7 is White's, so White moves toward decreasing row indices.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

use std::fmt;

pub const BOARD_SIZE: u8 = 8;

/// A board coordinate, always inside `0..8` on both axes once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Caller-checked constructor. Internal callers always pre-filter bounds.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    #[inline]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index (`0..64`).
    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }

    /// Step by a signed delta, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of one pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns of this color start on.
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Closed set of piece kinds; movement is a total function of the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece on the board. Only `has_moved` ever changes, and only false -> true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn view(self) -> PieceView {
        PieceView {
            kind: self.kind,
            color: self.color,
        }
    }
}

/// What a front end needs to draw a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceView {
    pub kind: PieceKind,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideCastlingRights {
    pub kingside: bool,
    pub queenside: bool,
}

impl SideCastlingRights {
    pub const FULL: SideCastlingRights = SideCastlingRights {
        kingside: true,
        queenside: true,
    };
    pub const NONE: SideCastlingRights = SideCastlingRights {
        kingside: false,
        queenside: false,
    };
}

/// Per-color castling eligibility. Tracked as state only; no move consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    sides: [SideCastlingRights; 2],
}

impl CastlingRights {
    pub const FULL: CastlingRights = CastlingRights {
        sides: [SideCastlingRights::FULL; 2],
    };
    pub const NONE: CastlingRights = CastlingRights {
        sides: [SideCastlingRights::NONE; 2],
    };

    #[inline]
    pub const fn for_color(&self, color: Color) -> SideCastlingRights {
        self.sides[color.index()]
    }

    #[inline]
    pub fn for_color_mut(&mut self, color: Color) -> &mut SideCastlingRights {
        &mut self.sides[color.index()]
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::FULL
    }
}
