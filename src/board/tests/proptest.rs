//! Property-based tests using proptest.

use crate::board::{Board, Move, UnmakeInfo};
use crate::perft::perft;
use proptest::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=20usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play `num_moves` random legal moves from the initial position.
fn random_playout(seed: u64, num_moves: usize) -> (Board, Vec<(Move, UnmakeInfo)>) {
    use rand::prelude::*;

    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut history = Vec::new();

    for _ in 0..num_moves {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        let info = board.make_move(mv);
        history.push((mv, info));
    }

    (board, history)
}

proptest! {
    /// make_move followed by unmake_move restores the position exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let initial = Board::new();
        let (mut board, mut history) = random_playout(seed, num_moves);

        while let Some((mv, info)) = history.pop() {
            board.unmake_move(mv, info);
        }

        prop_assert_eq!(board, initial);
    }

    /// The incremental hash always equals a from-scratch recompute
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_playout(seed, num_moves);
        prop_assert_eq!(board.hash(), board.calculate_initial_hash());
    }

    /// FEN round-trip preserves the reachable position exactly
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_playout(seed, num_moves);

        let fen = board.to_fen();
        let restored = Board::try_from_fen(&fen).unwrap();

        prop_assert_eq!(&restored, &board);
        prop_assert_eq!(restored.to_fen(), fen);
    }

    /// No legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut board, _) = random_playout(seed, num_moves);

        let mover = board.side_to_move();
        let moves = board.generate_moves();
        for mv in moves.iter() {
            let info = board.make_move(*mv);
            prop_assert!(!board.is_in_check(mover),
                "legal move left king in check: {:?}", mv);
            board.unmake_move(*mv, info);
        }
    }

    /// Every pseudo-legal move that survives a make/check probe is in the
    /// legal list (legality completeness)
    #[test]
    fn prop_legal_list_is_complete(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (mut board, _) = random_playout(seed, num_moves);

        let mover = board.side_to_move();
        let opponent = mover.opponent();
        let legal = board.generate_moves();
        let pseudo = board.generate_pseudo_moves();

        for mv in pseudo.iter() {
            if mv.is_castling() {
                let transit = crate::board::Square::new(
                    mv.from().rank(),
                    (mv.from().file() + mv.to().file()) / 2,
                );
                if board.is_square_attacked(mv.from(), opponent)
                    || board.is_square_attacked(transit, opponent)
                    || board.is_square_attacked(mv.to(), opponent)
                {
                    prop_assert!(!legal.contains(*mv));
                    continue;
                }
            }
            let info = board.make_move(*mv);
            let keeps_king_safe = !board.is_in_check(mover);
            board.unmake_move(*mv, info);
            prop_assert_eq!(keeps_king_safe, legal.contains(*mv),
                "legality filter disagrees on {:?}", mv);
        }
    }

    /// Counting is order-independent: perft from a reachable position is
    /// stable across repeated runs on the same board
    #[test]
    fn prop_perft_deterministic(seed in seed_strategy()) {
        let (mut board, _) = random_playout(seed, 8);
        let first = perft(&mut board, 2);
        let second = perft(&mut board, 2);
        prop_assert_eq!(first, second);
    }
}
