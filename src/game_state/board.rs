//! 8x8 piece placement.
//!
//! `Board` owns every `Piece` value. Moving a piece is always a take from the
//! source cell followed by a place at the destination, so a piece lives in
//! exactly one cell at a time. No legality checking happens here.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// Standard initial layout: Black on rows 0-1, White on rows 6-7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let col = col as u8;
            board.place(Square::new(0, col), Some(Piece::new(*kind, Color::Black)));
            board.place(
                Square::new(Color::Black.pawn_home_row(), col),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
            board.place(
                Square::new(Color::White.pawn_home_row(), col),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
            board.place(Square::new(7, col), Some(Piece::new(*kind, Color::White)));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    /// Overwrite a cell. Used for setup.
    #[inline]
    pub fn place(&mut self, square: Square, occupant: Option<Piece>) {
        self.cells[square.index()] = occupant;
    }

    /// Remove and return the occupant of a cell.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    /// Move whatever occupies `from` onto `to`, marking it as moved.
    ///
    /// Returns the previous occupant of `to` so speculative moves can be undone
    /// with a reverse `relocate` followed by `restore`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.take(from).map(|mut piece| {
            piece.has_moved = true;
            piece
        });
        std::mem::replace(&mut self.cells[to.index()], moving)
    }

    /// Put back an occupant displaced by `relocate`.
    #[inline]
    pub fn restore(&mut self, square: Square, occupant: Option<Piece>) {
        self.place(square, occupant);
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    /// First king of `color` in row-major scan order.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }
}
