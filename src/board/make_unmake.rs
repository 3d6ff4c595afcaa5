use crate::zobrist::ZOBRIST;

use super::{bit_for_square, Board, Color, Move, Piece, Square, UnmakeInfo};

/// Home and castled rook files for a king landing on the given file.
const fn castle_rook_files(king_to_file: usize) -> (usize, usize) {
    if king_to_file == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}

impl Board {
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq).0;
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 |= bit;
        self.occupied[c_idx].0 |= bit;
        self.all_occupied.0 |= bit;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq).0;
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 &= !bit;
        self.occupied[c_idx].0 &= !bit;
        self.all_occupied.0 &= !bit;
    }

    pub(crate) fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = bit_for_square(sq).0;
        if self.all_occupied.0 & bit == 0 {
            return None;
        }

        let color = if self.occupied[0].0 & bit != 0 {
            Color::White
        } else {
            Color::Black
        };
        for piece in Piece::ALL {
            if self.pieces[color.index()][piece.index()].0 & bit != 0 {
                return Some((color, piece));
            }
        }

        None
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// Recompute the Zobrist hash from scratch. Used when a position is
    /// constructed; moves maintain the hash incrementally.
    pub(crate) fn calculate_initial_hash(&self) -> u64 {
        let mut hash: u64 = 0;

        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.pieces_of(color, piece).iter() {
                    hash ^= ZOBRIST.piece_keys[color.index()][piece.index()][sq.as_index()];
                }
            }
        }

        if !self.white_to_move {
            hash ^= ZOBRIST.black_to_move_key;
        }

        hash ^= ZOBRIST.castling_keys[self.castling_rights.as_u8() as usize];

        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant_keys[ep.file()];
        }

        hash
    }

    /// Apply a move to the position and return the undo snapshot.
    ///
    /// The move must come from this position's move generator; feeding an
    /// arbitrary move is a programmer error caught by debug assertions.
    pub fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let color = self.side_to_move();
        let c_idx = color.index();

        let previous_hash = self.hash;
        let previous_en_passant_target = self.en_passant_target;
        let previous_castling_rights = self.castling_rights;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;

        let mut hash = self.hash ^ ZOBRIST.black_to_move_key;
        if let Some(old_ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant_keys[old_ep.file()];
        }

        // Remove whatever the move captures. En passant takes a pawn that is
        // not on the destination square; castling never captures.
        let mut captured_piece_info: Option<(Color, Piece)> = None;
        if m.is_en_passant() {
            let victim_rank = if color == Color::White {
                m.to().rank() - 1
            } else {
                m.to().rank() + 1
            };
            let victim_sq = Square::new(victim_rank, m.to().file());
            captured_piece_info = self.piece_at(victim_sq);
            if let Some((cap_color, cap_piece)) = captured_piece_info {
                self.remove_piece(victim_sq, cap_color, cap_piece);
                hash ^= ZOBRIST.piece_keys[cap_color.index()][cap_piece.index()]
                    [victim_sq.as_index()];
            }
        } else if !m.is_castling() {
            captured_piece_info = self.piece_at(m.to());
            if let Some((cap_color, cap_piece)) = captured_piece_info {
                self.remove_piece(m.to(), cap_color, cap_piece);
                hash ^=
                    ZOBRIST.piece_keys[cap_color.index()][cap_piece.index()][m.to().as_index()];
            }
        }

        let (moving_color, moving_piece) =
            self.piece_at(m.from()).expect("make_move: 'from' square empty");
        debug_assert_eq!(moving_color, color, "make_move: piece of the wrong color");

        self.remove_piece(m.from(), color, moving_piece);
        hash ^= ZOBRIST.piece_keys[c_idx][moving_piece.index()][m.from().as_index()];

        let placed_piece = m.promotion().unwrap_or(moving_piece);
        self.set_piece(m.to(), color, placed_piece);
        hash ^= ZOBRIST.piece_keys[c_idx][placed_piece.index()][m.to().as_index()];

        if m.is_castling() {
            let back_rank = m.to().rank();
            let (rook_from_file, rook_to_file) = castle_rook_files(m.to().file());
            let rook_from = Square::new(back_rank, rook_from_file);
            let rook_to = Square::new(back_rank, rook_to_file);
            debug_assert_eq!(
                self.piece_at(rook_from),
                Some((color, Piece::Rook)),
                "make_move: castling without a rook"
            );
            self.remove_piece(rook_from, color, Piece::Rook);
            self.set_piece(rook_to, color, Piece::Rook);
            hash ^= ZOBRIST.piece_keys[c_idx][Piece::Rook.index()][rook_from.as_index()];
            hash ^= ZOBRIST.piece_keys[c_idx][Piece::Rook.index()][rook_to.as_index()];
        }

        // Castling rights: lost when the king moves, when a rook leaves its
        // home square, and when a rook is captured on its home square.
        let mut rights = self.castling_rights;
        if moving_piece == Piece::King {
            rights.remove(color, true);
            rights.remove(color, false);
        } else if moving_piece == Piece::Rook {
            if m.from() == Square::new(color.back_rank(), 0) {
                rights.remove(color, false);
            } else if m.from() == Square::new(color.back_rank(), 7) {
                rights.remove(color, true);
            }
        }
        if let Some((cap_color, Piece::Rook)) = captured_piece_info {
            if m.to() == Square::new(cap_color.back_rank(), 0) {
                rights.remove(cap_color, false);
            } else if m.to() == Square::new(cap_color.back_rank(), 7) {
                rights.remove(cap_color, true);
            }
        }
        if rights != self.castling_rights {
            hash ^= ZOBRIST.castling_keys[self.castling_rights.as_u8() as usize]
                ^ ZOBRIST.castling_keys[rights.as_u8() as usize];
            self.castling_rights = rights;
        }

        self.en_passant_target = None;
        if m.is_double_pawn_push() {
            let skipped = Square::new((m.from().rank() + m.to().rank()) / 2, m.from().file());
            self.en_passant_target = Some(skipped);
            hash ^= ZOBRIST.en_passant_keys[skipped.file()];
        }

        if moving_piece == Piece::Pawn || captured_piece_info.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }

        self.white_to_move = !self.white_to_move;
        self.hash = hash;

        UnmakeInfo {
            captured_piece_info,
            previous_en_passant_target,
            previous_castling_rights,
            previous_halfmove_clock,
            previous_fullmove_number,
            previous_hash,
        }
    }

    /// Reverse a move made by `make_move`, restoring the position exactly.
    pub fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        self.white_to_move = !self.white_to_move;
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
        self.hash = info.previous_hash;

        let color = self.side_to_move();

        if m.is_castling() {
            self.remove_piece(m.to(), color, Piece::King);
            self.set_piece(m.from(), color, Piece::King);

            let back_rank = m.to().rank();
            let (rook_home_file, rook_castled_file) = castle_rook_files(m.to().file());
            self.remove_piece(Square::new(back_rank, rook_castled_file), color, Piece::Rook);
            self.set_piece(Square::new(back_rank, rook_home_file), color, Piece::Rook);
            return;
        }

        let (moved_color, moved_piece) = self
            .piece_at(m.to())
            .expect("unmake_move: 'to' square empty");
        debug_assert_eq!(moved_color, color, "unmake_move: piece of the wrong color");

        self.remove_piece(m.to(), color, moved_piece);
        let original_piece = if m.promotion().is_some() {
            Piece::Pawn
        } else {
            moved_piece
        };
        self.set_piece(m.from(), color, original_piece);

        if m.is_en_passant() {
            let victim_rank = if color == Color::White {
                m.to().rank() - 1
            } else {
                m.to().rank() + 1
            };
            if let Some((cap_color, cap_piece)) = info.captured_piece_info {
                self.set_piece(Square::new(victim_rank, m.to().file()), cap_color, cap_piece);
            }
        } else if let Some((cap_color, cap_piece)) = info.captured_piece_info {
            self.set_piece(m.to(), cap_color, cap_piece);
        }

        debug_assert!(
            self.pieces_of(Color::White, Piece::King).popcount() == 1
                && self.pieces_of(Color::Black, Piece::King).popcount() == 1,
            "unmake_move: king count corrupted"
        );
    }
}
