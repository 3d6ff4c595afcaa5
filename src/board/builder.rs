//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//! Intended for tests and embedders; the builder performs no legality
//! validation.
//!
//! # Example
//! ```
//! use chess_perft::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::new(0, 4), Color::White, Piece::King)
//!     .piece(Square::new(7, 4), Color::Black, Piece::King)
//!     .piece(Square::new(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::{Board, CastlingRights, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Option<Color>,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: Option<u32>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder::default()
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = Some(color);
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock.
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number (defaults to 1).
    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = Some(number);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }

        board.white_to_move = self.side_to_move.unwrap_or(Color::White) == Color::White;
        board.castling_rights = self.castling_rights;
        board.en_passant_target = self.en_passant_target;
        board.halfmove_clock = self.halfmove_clock;
        board.fullmove_number = self.fullmove_number.unwrap_or(1);
        board.hash = board.calculate_initial_hash();

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_kings() {
        let board = BoardBuilder::new()
            .piece(Square::new(0, 4), Color::White, Piece::King)
            .piece(Square::new(7, 4), Color::Black, Piece::King)
            .build();

        assert_eq!(board.piece_on(Square::new(0, 4)), Some(Piece::King));
        assert_eq!(board.piece_on(Square::new(7, 4)), Some(Piece::King));
        assert!(board.piece_on(Square::new(0, 0)).is_none());
        assert!(board.castling_rights().is_empty());
    }

    #[test]
    fn test_piece_replaces_existing() {
        let board = BoardBuilder::new()
            .piece(Square::new(3, 3), Color::White, Piece::Queen)
            .piece(Square::new(3, 3), Color::Black, Piece::Knight)
            .piece(Square::new(0, 4), Color::White, Piece::King)
            .piece(Square::new(7, 4), Color::Black, Piece::King)
            .build();

        assert_eq!(
            board.piece_at(Square::new(3, 3)),
            Some((Color::Black, Piece::Knight))
        );
    }

    #[test]
    fn test_builder_matches_fen() {
        let built = BoardBuilder::new()
            .piece(Square::new(0, 4), Color::White, Piece::King)
            .piece(Square::new(0, 7), Color::White, Piece::Rook)
            .piece(Square::new(7, 4), Color::Black, Piece::King)
            .castle_kingside(Color::White)
            .side_to_move(Color::Black)
            .build();

        let parsed = Board::try_from_fen("4k3/8/8/8/8/8/8/4K2R b K - 0 1").unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_side_to_move_and_clocks() {
        let board = BoardBuilder::new()
            .piece(Square::new(0, 4), Color::White, Piece::King)
            .piece(Square::new(7, 4), Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .halfmove_clock(12)
            .fullmove_number(34)
            .build();

        assert!(!board.white_to_move());
        assert_eq!(board.halfmove_clock(), 12);
        assert_eq!(board.fullmove_number(), 34);
    }
}
