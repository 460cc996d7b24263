//! Line-oriented driver for an exploration session.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use log::warn;

use crate::config::ExplorationConfig;
use crate::error::FictionResult;
use crate::narrator;
use crate::session::{ExplorationSession, SessionState};

/// Run a session to completion over `input` and `output`.
///
/// Each turn prints the current room, its exits and the prompt, then reads
/// one line. End of input and read errors both count as quitting. Returns the
/// terminal state the session ended in; only write failures are errors.
pub fn run<R: BufRead, W: Write>(
    session: &mut ExplorationSession<'_>,
    mut input: R,
    mut output: W,
    config: &ExplorationConfig,
) -> FictionResult<SessionState> {
    if config.show_banner {
        let at_entrance = config.start_room.is_none();
        write!(output, "{}", narrator::banner(session.cursor(), at_entrance))?;
    }

    let mut line = Vec::new();
    loop {
        write!(output, "{}", session.describe())?;

        if session.is_finished() {
            // Only reachable on the first pass, when the start room has no exits.
            write!(output, "{}", narrator::leaf_reached(session.cursor()))?;
            break;
        }

        write!(output, "{}", narrator::PROMPT)?;
        output.flush()?;

        let choice = read_choice(&mut input, &mut line);
        let response = session.process(choice.as_deref())?;
        write!(output, "{response}")?;

        if session.is_finished() {
            break;
        }
    }

    output.flush()?;
    Ok(session.state())
}

/// Read one line into `buf`. `None` when the input is exhausted or broken.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, since
/// only the first non-whitespace character of the line matters.
fn read_choice<'a, R: BufRead>(input: &mut R, buf: &'a mut Vec<u8>) -> Option<Cow<'a, str>> {
    buf.clear();
    match input.read_until(b'\n', buf) {
        Ok(0) => None,
        Ok(_) => Some(String::from_utf8_lossy(buf)),
        Err(e) => {
            warn!("failed to read input, ending session: {e}");
            None
        }
    }
}
