//! The read-eval-print loop.

use std::io::{self, BufRead, Write};

use log::debug;
use rove_engine::Session;

use crate::render;

const PROMPT: &str = "What would you like to do? ";

fn io_error(e: io::Error) -> String {
    format!("I/O error: {e}")
}

/// Play `session` until the player quits or input runs out.
///
/// End of input on a terminal only reminds the player how to leave; on a
/// pipe or file it ends the session.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    interactive: bool,
) -> Result<(), String> {
    let start = session.look().map_err(|e| e.to_string())?;
    writeln!(out, "{}", render::room(&start)).map_err(io_error)?;

    let mut line = String::new();
    while !session.is_finished() {
        write!(out, "{PROMPT}").map_err(io_error)?;
        out.flush().map_err(io_error)?;

        line.clear();
        if input.read_line(&mut line).map_err(io_error)? == 0 {
            writeln!(out).map_err(io_error)?;
            if interactive {
                writeln!(out, "Use 'quit' to exit.").map_err(io_error)?;
                continue;
            }
            debug!("input closed");
            break;
        }

        let turn = session.process(&line).map_err(|e| e.to_string())?;
        if let Some(text) = render::turn(&turn) {
            let text = text.trim_end_matches('\n');
            writeln!(out, "{text}\n").map_err(io_error)?;
        }
    }

    Ok(())
}
