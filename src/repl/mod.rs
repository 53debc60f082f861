//! Read-eval-print loop
//!
//! Reads one line at a time, normalises it with [`clean_input`], dispatches
//! the first word to a [`Command`] and reports command errors inline. The
//! loop ends on `exit` or end of input.

pub mod commands;
mod input;
mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::error::Result;

pub use commands::{catch_escapes, Command, Flow};
pub use input::clean_input;
pub use session::{CaughtPokemon, Session};

pub const PROMPT: &str = "Pokedex > ";

/// Drives the REPL until `exit` or end of input.
///
/// Only output failures abort the loop; command errors are printed and the
/// loop carries on.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            info!("End of input, leaving REPL");
            writeln!(out)?;
            return Ok(());
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };
        writeln!(out)?;

        match Command::from_name(name) {
            None => {
                debug!("unknown command: {}", name);
                writeln!(out, "Unknown command")?;
            }
            Some(command) => match command.execute(session, args, out).await {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(out, "error running command: {}", e)?,
            },
        }
        writeln!(out)?;
    }
}
