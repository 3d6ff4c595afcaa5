//! Perft driver: exhaustive legal-move tree counting.
//!
//! `perft(p, d)` counts the leaf positions reachable from `p` in exactly
//! `d` half-moves. The count is the standard correctness benchmark for move
//! generation: a single missing or extra move anywhere in the tree shows up
//! in the totals.

use rayon::prelude::*;

use crate::board::{Board, Move, Piece};
use crate::tt::PerftTable;

/// Count leaf positions at the given depth.
///
/// Depth 0 counts the position itself. At depth 1 the legal move count is
/// returned directly without make/unmake; the result is identical either
/// way.
#[must_use]
pub fn perft(board: &mut Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.generate_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for m in &moves {
        let info = board.make_move(*m);
        nodes += perft(board, depth - 1);
        board.unmake_move(*m, info);
    }

    nodes
}

/// Perft broken down by root move, for diffing against reference counts.
///
/// Returns the per-root-move subtotals sorted by (from, to, promotion)
/// square index, and the overall total.
///
/// # Panics
/// Panics if `depth` is 0; divide needs at least one ply to attribute
/// counts to moves.
#[must_use]
pub fn perft_divide(board: &mut Board, depth: usize) -> (Vec<(Move, u64)>, u64) {
    assert!(depth >= 1, "perft_divide requires depth >= 1");

    let moves = board.generate_moves();
    let mut results: Vec<(Move, u64)> = Vec::with_capacity(moves.len());

    for m in &moves {
        let info = board.make_move(*m);
        let nodes = perft(board, depth - 1);
        board.unmake_move(*m, info);
        results.push((*m, nodes));
    }

    results.sort_by_key(|&(m, _)| (m.from(), m.to(), m.promotion().map(Piece::index)));
    let total = results.iter().map(|&(_, nodes)| nodes).sum();
    (results, total)
}

/// Perft with the set of root moves split across worker threads.
///
/// Each root move's subtree is counted by an independent worker owning its
/// own clone of the position; no state is shared inside the recursion, and
/// the summed result equals single-threaded [`perft`] for every position
/// and depth.
///
/// `threads` selects the pool size; 0 uses one thread per core.
#[must_use]
pub fn perft_parallel(board: &Board, depth: usize, threads: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = {
        let mut root = board.clone();
        root.generate_moves()
    };
    if depth == 1 {
        return moves.len() as u64;
    }

    let count_subtree = |m: &Move| {
        let mut worker = board.clone();
        worker.make_move(*m);
        perft(&mut worker, depth - 1)
    };

    if threads == 0 {
        moves.as_slice().par_iter().map(count_subtree).sum()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("failed to build perft thread pool");
        pool.install(|| moves.as_slice().par_iter().map(count_subtree).sum())
    }
}

/// Perft with subtree counts memoized in a shared table.
///
/// Entries are keyed by the position's Zobrist fingerprint and the
/// remaining depth, so a transposition reached at the same depth reuses its
/// already-counted subtree. Counts are identical to plain [`perft`].
#[must_use]
pub fn perft_with_table(board: &mut Board, depth: usize, table: &PerftTable) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.generate_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    if let Some(nodes) = table.probe(board.hash(), depth) {
        return nodes;
    }

    let mut nodes = 0;
    for m in &moves {
        let info = board.make_move(*m);
        nodes += perft_with_table(board, depth - 1, table);
        board.unmake_move(*m, info);
    }

    table.store(board.hash(), depth, nodes);
    nodes
}
