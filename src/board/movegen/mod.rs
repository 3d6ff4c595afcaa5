mod kings;
mod knights;
mod pawns;
mod sliders;

use self::sliders::SliderType;
use super::{Board, Move, MoveList, Piece, Square};

impl Board {
    /// Classify a non-pawn, non-castling move as quiet or capture.
    pub(crate) fn create_simple_move(&self, from: Square, to: Square) -> Move {
        if self.piece_at(to).is_some() {
            Move::capture(from, to)
        } else {
            Move::quiet(from, to)
        }
    }

    /// Enumerate every move that obeys piece geometry for the side to move,
    /// before filtering for self-check.
    pub(crate) fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let c_idx = self.side_to_move().index();

        for from in self.pieces[c_idx][Piece::Pawn.index()].iter() {
            self.generate_pawn_moves(from, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Knight.index()].iter() {
            self.generate_knight_moves(from, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Bishop.index()].iter() {
            self.generate_slider_moves(from, SliderType::Bishop, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Rook.index()].iter() {
            self.generate_slider_moves(from, SliderType::Rook, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Queen.index()].iter() {
            self.generate_slider_moves(from, SliderType::Queen, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::King.index()].iter() {
            self.generate_king_moves(from, &mut moves);
        }

        moves
    }

    /// Generate all legal moves for the side to move.
    ///
    /// A pseudo-legal move survives iff the mover's king is not attacked
    /// after it. Castling additionally requires the king's start, transit,
    /// and landing squares to be safe before the move is made.
    #[must_use]
    pub fn generate_moves(&mut self) -> MoveList {
        let color = self.side_to_move();
        let opponent = color.opponent();
        let pseudo_moves = self.generate_pseudo_moves();
        let mut legal_moves = MoveList::new();

        for m in &pseudo_moves {
            if m.is_castling() {
                let from = m.from();
                let to = m.to();
                let transit = Square::new(from.rank(), (from.file() + to.file()) / 2);

                if self.is_square_attacked(from, opponent)
                    || self.is_square_attacked(transit, opponent)
                    || self.is_square_attacked(to, opponent)
                {
                    continue;
                }
            }

            let info = self.make_move(*m);
            if !self.is_in_check(color) {
                legal_moves.push(*m);
            }
            self.unmake_move(*m, info);
        }

        legal_moves
    }

    /// Returns true if the side to move is checkmated.
    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        let color = self.side_to_move();
        self.is_in_check(color) && self.generate_moves().is_empty()
    }

    /// Returns true if the side to move is stalemated.
    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        let color = self.side_to_move();
        !self.is_in_check(color) && self.generate_moves().is_empty()
    }
}
