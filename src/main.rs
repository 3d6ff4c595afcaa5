use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use chess_perft::board::Board;
use chess_perft::perft::{perft, perft_divide, perft_parallel, perft_with_table};
use chess_perft::tt::PerftTable;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Count leaf positions reachable in exactly DEPTH half-moves.
#[derive(Parser)]
#[command(name = "chess-perft", version)]
struct Args {
    /// Search depth in plies
    depth: usize,

    /// Position in FEN, quoted or as separate fields; initial position if omitted
    fen: Vec<String>,

    /// Print one subtotal per root move before the total
    #[arg(long)]
    divide: bool,

    /// Worker threads for the root split (0 = all cores, 1 = serial)
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Memoize subtree counts in a table of this many megabytes
    #[arg(long, value_name = "MB")]
    table_mb: Option<usize>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprint!("{err}");
            return ExitCode::from(1);
        }
    };

    if args.divide && args.depth == 0 {
        eprintln!("error: --divide requires a depth of at least 1");
        return ExitCode::from(1);
    }

    let fen = if args.fen.is_empty() {
        START_FEN.to_string()
    } else {
        args.fen.join(" ")
    };
    let mut board = match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();
    if args.divide {
        let (per_move, total) = perft_divide(&mut board, args.depth);
        for (mv, nodes) in per_move {
            println!("{mv}: {nodes}");
        }
        println!("total: {total}");
    } else {
        let nodes = if args.threads != 1 {
            perft_parallel(&board, args.depth, args.threads)
        } else if let Some(table_mb) = args.table_mb {
            let table = PerftTable::new(table_mb);
            perft_with_table(&mut board, args.depth, &table)
        } else {
            perft(&mut board, args.depth)
        };
        println!("{nodes}");
    }

    let elapsed = start.elapsed().as_secs_f64();
    eprintln!("{elapsed:.3}s");
    ExitCode::SUCCESS
}
