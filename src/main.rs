use anyhow::Result;
use clap::Parser;

use std::io::{stdin, stdout, Write};

use qirkat_ai::search::{is_win_score, DEFAULT_MAX_DEPTH};
use qirkat_ai::*;

mod display;
use display::*;

/// Play Qirkat in the terminal against another person or the computer
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Search depth of AI players in plies
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u32,

    /// Start from this 25-character layout (b, w, -) instead of the initial position
    #[arg(long)]
    layout: Option<String>,

    /// Side to move when starting from --layout
    #[arg(long, default_value = "white")]
    side: String,
}

/// Asks a yes/no question until a recognisable answer is given
fn ask(question: &str) -> Result<bool> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Plies a human on `side` takes back with `undo`
///
/// Against an AI opponent the AI's reply is taken back as well, so the same
/// human gets to move again.
fn plies_to_undo(side: Color, ai_players: (bool, bool), history_len: usize) -> usize {
    let opponent_is_ai = match side {
        Color::White => ai_players.1,
        Color::Black => ai_players.0,
    };
    let plies = if opponent_is_ai { 2 } else { 1 };
    plies.min(history_len)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut position = match &args.layout {
        Some(layout) => Position::from_layout(layout, args.side.parse()?)?,
        None => Position::new(),
    };
    let config = SearchConfig::default().with_max_depth(args.depth);

    println!("Welcome to Qirkat\n");

    let ai_players = (ask("Is White AI controlled?")?, ask("Is Black AI controlled?")?);

    let stdin = stdin();

    // game loop
    loop {
        display(&position)?;

        if let Some(winner) = position.winner() {
            println!("{} wins!", winner);
            break;
        }

        let side = position.side_to_move();
        let next_move =
            // AI player
            if (side == Color::White && ai_players.0) || (side == Color::Black && ai_players.1) {
                println!("AI is thinking...");
                stdout().flush().expect("Failed to flush to stdout!");

                // slow down play if both players are AI
                if ai_players == (true, true) {
                    std::thread::sleep(std::time::Duration::new(1, 0));
                }

                let mut search = Search::with_config(config);
                let (score, best_move) = search.search(&mut position);
                if is_win_score(score) {
                    let winner = if score > 0 { Color::White } else { Color::Black };
                    println!("{} can force a win.", winner);
                }
                println!("{} moves {}.", side, best_move);
                best_move

            // human player
            } else {
                print!("{} move > ", side);
                stdout().flush().expect("Failed to flush to stdout!");
                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    break;
                }

                match input_str.trim() {
                    "quit" => break,
                    "undo" => {
                        for _ in 0..plies_to_undo(side, ai_players, position.history_len()) {
                            position.undo();
                        }
                        continue;
                    }
                    text => match Move::parse(text) {
                        Err(err) => {
                            println!("{}", err);
                            continue;
                        }
                        Ok(mv) => mv,
                    },
                }
            };

        if !position.is_legal(&next_move) {
            println!("Illegal move.");
            // try the move again
            continue;
        }
        position.apply(&next_move);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn undo_against_ai_takes_back_its_reply() {
        assert_eq!(plies_to_undo(Color::White, (false, true), 5), 2);
        assert_eq!(plies_to_undo(Color::Black, (true, false), 5), 2);
        assert_eq!(plies_to_undo(Color::White, (false, false), 5), 1);
        // nothing of the human's own to take back yet
        assert_eq!(plies_to_undo(Color::Black, (true, false), 1), 1);
        assert_eq!(plies_to_undo(Color::White, (false, true), 0), 0);
    }

    #[test]
    fn undo_against_ai_returns_the_turn() -> Result<()> {
        let mut position = Position::new();
        position.apply(&Move::parse("c2-c3")?);
        let reply = Search::with_config(SearchConfig::default().with_max_depth(2)).best_move(&mut position);
        position.apply(&reply);

        for _ in 0..plies_to_undo(Color::White, (false, true), position.history_len()) {
            position.undo();
        }
        assert_eq!(position, Position::new());
        assert_eq!(position.side_to_move(), Color::White);
        Ok(())
    }
}
