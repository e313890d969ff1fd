//! Counts move sequences from a position, splitting the work across root moves

use anyhow::Result;
use clap::Parser;
use indicatif::*;
use rayon::prelude::*;

use std::sync::mpsc::*;
use std::thread;
use std::time::*;

use qirkat_ai::perft::perft;
use qirkat_ai::{Color, Move, Position};

/// Count the move sequences of a given length from a Qirkat position
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of plies to enumerate
    depth: u32,

    /// 25-character layout (b, w, -) to start from instead of the initial position
    #[arg(long)]
    layout: Option<String>,

    /// Side to move when starting from --layout
    #[arg(long, default_value = "white")]
    side: String,
}

enum Message {
    Counted((Move, u64)),
    Finish,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let position = match &args.layout {
        Some(layout) => Position::from_layout(layout, args.side.parse::<Color>()?)?,
        None => Position::new(),
    };
    println!("{}\n", position.to_string_with_legend());

    let start = Instant::now();
    let root_moves = position.legal_moves();
    if args.depth == 0 || root_moves.is_empty() {
        println!("Nodes: 1");
        return Ok(());
    }

    let progress = ProgressBar::new(root_moves.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Counting root moves: {bar:40.cyan/blue} {pos}/{len} {msg}")
            .progress_chars("█▓▒░  "),
    );

    let (tx, rx) = channel();
    let depth = args.depth;
    thread::spawn(move || {
        // each worker owns its own copy of the position
        root_moves.par_iter().for_each_with(tx.clone(), |tx, mv| {
            let mut branch = position.clone();
            branch.apply(mv);
            let nodes = perft(&mut branch, depth - 1);
            let _ = tx.send(Message::Counted((mv.clone(), nodes)));
        });
        let _ = tx.send(Message::Finish);
    });

    let mut counts = Vec::new();
    loop {
        match rx.recv()? {
            Message::Finish => break,
            Message::Counted(entry) => {
                progress.set_message(&entry.0.to_string());
                progress.inc(1);
                counts.push(entry);
            }
        }
    }
    progress.finish();

    counts.sort_by_key(|(mv, _)| mv.to_string());
    for (mv, nodes) in counts.iter() {
        println!("{}: {}", mv, nodes);
    }
    println!(
        "\nNodes: {} in {}",
        counts.iter().map(|(_, nodes)| nodes).sum::<u64>(),
        HumanDuration(start.elapsed())
    );
    Ok(())
}
