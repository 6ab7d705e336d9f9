use std::env;
use std::process::ExitCode;

use chess_match::board::Color;
use chess_match::game::Match;
use chess_match::notation::MoveRequest;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: match_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Match::new();
    for text in args.iter().skip(1) {
        let played = MoveRequest::parse(text)
            .map_err(|err| err.to_string())
            .and_then(|mv| {
                game.attempt_move(mv.from, mv.to)
                    .map_err(|err| err.to_string())
            });
        if let Err(err) = played {
            eprintln!("{text}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let side = game.side_to_move();
    let name = |color: Color| color.to_string().to_lowercase();
    println!("side_to_move: {}", name(side));
    println!(
        "check: {}",
        game.is_in_check().map_or_else(|| "none".to_string(), name)
    );
    println!("checkmate: {}", game.is_checkmate(side));
    println!("fen: {}", game.to_fen());
    println!("{}", game.board());
    ExitCode::SUCCESS
}
