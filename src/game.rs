//! Game-state collaborator wrapping the board core.
//!
//! Tracks what the move-generation core deliberately does not: the move
//! history, repetition counts, and the draw rules. A presenter drives a
//! game through this type: it reads the board and the legal move list,
//! submits moves (structured or UCI text), and is told the resulting
//! status, including terminal states.

use std::collections::HashMap;

use crate::board::{
    Bitboard, Board, Color, FenError, Move, MoveList, MoveParseError, Piece, UnmakeInfo,
};

/// The state of a game from the perspective of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Side to move is in check but has legal moves.
    Check,
    /// Side to move is in check with no legal moves.
    Checkmate,
    /// Side to move has no legal moves but is not in check.
    Stalemate,
    /// Fifty-move rule, threefold repetition, or insufficient material.
    Draw,
}

/// A playable game: a board plus history and draw bookkeeping.
pub struct Game {
    board: Board,
    history: Vec<(Move, UnmakeInfo)>,
    repetition_counts: HashMap<u64, u32>,
}

impl Game {
    /// Start a game from the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new())
    }

    /// Start a game from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Game::from_board(Board::try_from_fen(fen)?))
    }

    fn from_board(board: Board) -> Self {
        let mut repetition_counts = HashMap::new();
        repetition_counts.insert(board.hash(), 1);
        Game {
            board,
            history: Vec::new(),
            repetition_counts,
        }
    }

    /// Read-only view of the current position.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&mut self) -> MoveList {
        self.board.generate_moves()
    }

    /// Number of half-moves played so far.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Submit a move. Moves not in the legal move list are rejected.
    pub fn make(&mut self, mv: Move) -> Result<(), MoveParseError> {
        if !self.board.generate_moves().contains(mv) {
            return Err(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            });
        }
        self.make_unchecked(mv);
        Ok(())
    }

    /// Submit a move in UCI notation (e.g. "e2e4", "e7e8q").
    pub fn make_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.board.parse_move(uci)?;
        self.make_unchecked(mv);
        Ok(mv)
    }

    fn make_unchecked(&mut self, mv: Move) {
        let info = self.board.make_move(mv);
        self.history.push((mv, info));
        *self.repetition_counts.entry(self.board.hash()).or_insert(0) += 1;
    }

    /// Take back the last move. Returns it, or `None` at the start.
    pub fn undo(&mut self) -> Option<Move> {
        let (mv, info) = self.history.pop()?;
        let hash = self.board.hash();
        if let Some(count) = self.repetition_counts.get_mut(&hash) {
            *count -= 1;
            if *count == 0 {
                self.repetition_counts.remove(&hash);
            }
        }
        self.board.unmake_move(mv, info);
        Some(mv)
    }

    /// Current game status for the side to move.
    #[must_use]
    pub fn status(&mut self) -> GameStatus {
        let side = self.board.side_to_move();
        let in_check = self.board.is_in_check(side);
        if self.board.generate_moves().is_empty() {
            return if in_check {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            };
        }
        if self.is_draw() {
            return GameStatus::Draw;
        }
        if in_check {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }

    /// Fifty-move rule, threefold repetition, or insufficient material.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.is_fifty_move_draw() || self.is_threefold_repetition() || self.is_insufficient_material()
    }

    /// 100 halfmoves without a capture or pawn move.
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// The current position has occurred at least three times.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_counts
            .get(&self.board.hash())
            .copied()
            .unwrap_or(0)
            >= 3
    }

    /// Neither side can possibly deliver mate (bare kings, a lone minor
    /// piece, or same-colored bishops only).
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let board = &self.board;

        let pawns = board.pieces_of(Color::White, Piece::Pawn).0
            | board.pieces_of(Color::Black, Piece::Pawn).0;
        let rooks = board.pieces_of(Color::White, Piece::Rook).0
            | board.pieces_of(Color::Black, Piece::Rook).0;
        let queens = board.pieces_of(Color::White, Piece::Queen).0
            | board.pieces_of(Color::Black, Piece::Queen).0;

        if pawns != 0 || rooks != 0 || queens != 0 {
            return false;
        }

        let knights = board.pieces_of(Color::White, Piece::Knight).0
            | board.pieces_of(Color::Black, Piece::Knight).0;
        let bishops = board.pieces_of(Color::White, Piece::Bishop).0
            | board.pieces_of(Color::Black, Piece::Bishop).0;

        let minors = knights.count_ones() + bishops.count_ones();
        if minors <= 1 {
            return true;
        }

        if knights == 0 {
            return bishops_all_same_color(bishops);
        }

        false
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

fn bishops_all_same_color(bishops: u64) -> bool {
    (bishops & Bitboard::LIGHT_SQUARES.0 == 0) || (bishops & Bitboard::DARK_SQUARES.0 == 0)
}
