//! Zobrist position fingerprinting.
//!
//! Each (color, piece, square) combination, each castling-rights mask, each
//! en passant file, and the side to move get an independent random 64-bit
//! key. A position's hash is the XOR of the keys for everything true about
//! it, so make/unmake can update the hash incrementally.

use once_cell::sync::Lazy;
use rand::Rng;

pub struct Zobrist {
    /// Indexed [color][piece][square]
    pub piece_keys: [[[u64; 64]; 6]; 2],
    /// Indexed by the 4-bit castling rights mask
    pub castling_keys: [u64; 16],
    /// Indexed by en passant file
    pub en_passant_keys: [u64; 8],
    pub black_to_move_key: u64,
}

pub static ZOBRIST: Lazy<Zobrist> = Lazy::new(|| {
    let mut rng = rand::thread_rng();

    let mut piece_keys = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_keys {
        for piece in color.iter_mut() {
            for key in piece.iter_mut() {
                *key = rng.gen();
            }
        }
    }

    let mut castling_keys = [0u64; 16];
    for key in &mut castling_keys {
        *key = rng.gen();
    }

    let mut en_passant_keys = [0u64; 8];
    for key in &mut en_passant_keys {
        *key = rng.gen();
    }

    Zobrist {
        piece_keys,
        castling_keys,
        en_passant_keys,
        black_to_move_key: rng.gen(),
    }
});
