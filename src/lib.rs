//! Chess move generation and position-enumeration (perft) engine.
//!
//! Provides:
//! - Full legal move generation (castling, en passant, promotions, check
//!   legality) over a bitboard position
//! - Make/unmake with exact state restoration
//! - A perft driver with divide mode, root-level parallelism, and an
//!   optional memoization table
//! - FEN parsing and emission with typed errors
//!
//! # Counting positions
//!
//! ```
//! use chess_perft::board::Board;
//! use chess_perft::perft::perft;
//!
//! let mut board = Board::new();
//! assert_eq!(perft(&mut board, 3), 8_902);
//! ```
//!
//! # Custom positions
//!
//! ```
//! use chess_perft::board::Board;
//! use chess_perft::perft::perft_divide;
//!
//! let mut board =
//!     Board::try_from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
//! let (per_move, total) = perft_divide(&mut board, 2);
//! assert_eq!(per_move.len(), 14);
//! assert_eq!(total, 191);
//! ```
//!
//! # Playing a game
//!
//! ```
//! use chess_perft::game::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! game.make_uci("e2e4").unwrap();
//! game.make_uci("e7e5").unwrap();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Piece`, `Color`, `Square`, `Move`,
//!   and `CastlingRights`

// Enable pedantic lints with sensible domain-specific exceptions
#![warn(clippy::pedantic)]
// Bitboard hex literals are clearer without separators (bit patterns visible)
#![allow(clippy::unreadable_literal)]
// Index casts are ubiquitous and safe in chess (board indices, square indices)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod game;
pub mod perft;
pub mod tt;
pub mod zobrist;
