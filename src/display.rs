use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use qirkat_ai::{Piece, Position, Square, SIDE};

/// Draws `position` to the terminal, row 5 at the top, with a legend
pub fn display(position: &Position) -> Result<()> {
    let mut stdout = stdout();

    stdout.queue(PrintStyledContent(style("\n")))?;
    for row in (0..SIDE as i32).rev() {
        stdout.queue(PrintStyledContent(style(format!("{}  ", row + 1))))?;
        for col in 0..SIDE as i32 {
            let piece = Square::from_coords(col, row).map_or(Piece::Empty, |sq| position.get(sq));
            stdout.queue(PrintStyledContent(
                style(format!("{} ", piece.to_char()))
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match piece {
                        Piece::White => Color::Yellow,
                        Piece::Black => Color::Red,
                        Piece::Empty => Color::Grey,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.queue(PrintStyledContent(style("   a b c d e \n")))?;
    stdout.flush()?;
    Ok(())
}
