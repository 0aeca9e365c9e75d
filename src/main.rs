use std::env;
use std::process::ExitCode;

use rand::RngExt;

use shuffle_chess::setup::enumerator::SetupEnumerator;
use shuffle_chess::setup::start_position::StartPosition;
use shuffle_chess::utils::pgn::write_setup_pgn;
use shuffle_chess::utils::render_setup::render_start_position;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let Some(selection_arg) = args.first() else {
        eprintln!("usage: shuffle_chess <selection|random> [--board] [--pgn]");
        return ExitCode::FAILURE;
    };

    let enumerator = SetupEnumerator::new();

    let selection = if selection_arg == "random" {
        rand::rng().random_range(1..=enumerator.len())
    } else {
        match selection_arg.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("invalid selection '{selection_arg}' (expected a number or 'random')");
                return ExitCode::FAILURE;
            }
        }
    };

    let position = match StartPosition::from_selection(selection, &enumerator) {
        Ok(position) => position,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", position.get_fen());

    if args.iter().any(|a| a == "--board") {
        println!("{}", render_start_position(&position));
    }

    if args.iter().any(|a| a == "--pgn") {
        print!("{}", write_setup_pgn(&position, selection));
    }

    ExitCode::SUCCESS
}
