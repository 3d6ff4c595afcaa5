use super::super::{Board, Move, MoveList, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let dir = color.pawn_direction();
        let start_rank = color.pawn_start_rank();
        let promotion_rank = color.pawn_promotion_rank();

        let r = from.rank() as isize;
        let f = from.file() as isize;

        // A pawn never stands on its promotion rank, so one step forward is
        // always on the board.
        let forward_r = (r + dir) as usize;
        let forward = Square::new(forward_r, from.file());
        if self.is_empty(forward) {
            if forward_r == promotion_rank {
                for promo in PROMOTION_PIECES {
                    moves.push(Move::new_promotion(from, forward, promo));
                }
            } else {
                moves.push(Move::quiet(from, forward));
                if from.rank() == start_rank {
                    let double = Square::new((r + 2 * dir) as usize, from.file());
                    if self.is_empty(double) {
                        moves.push(Move::double_pawn_push(from, double));
                    }
                }
            }
        }

        for df in [-1, 1] {
            let capture_f = f + df;
            if !(0..8).contains(&capture_f) {
                continue;
            }
            let target = Square::new(forward_r, capture_f as usize);
            if let Some((target_color, _)) = self.piece_at(target) {
                if target_color != color {
                    if forward_r == promotion_rank {
                        for promo in PROMOTION_PIECES {
                            moves.push(Move::new_promotion_capture(from, target, promo));
                        }
                    } else {
                        moves.push(Move::capture(from, target));
                    }
                }
            } else if Some(target) == self.en_passant_target {
                moves.push(Move::en_passant(from, target));
            }
        }
    }
}
