//! Interactive world definition over generic reader/writer streams.
//!
//! For each location in turn, the operator names blocks from the table
//! upward until a terminator. Generic over `BufRead`/`Write` so tests
//! drive it from strings instead of a live terminal.

use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};

use gantry_kernel::entity::{BlockId, EntityTable, LocationId};
use gantry_kernel::fact::Fact;

use crate::builder::{BuildError, WorldBuilder};

/// Typed failure for the console flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// Reading an answer or writing a prompt failed.
    Io { detail: String },
    /// The collected world was malformed.
    Build(BuildError),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "console I/O failed: {detail}"),
            Self::Build(err) => write!(f, "world definition rejected: {err}"),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<BuildError> for ConsoleError {
    fn from(err: BuildError) -> Self {
        Self::Build(err)
    }
}

/// Collect one world description by prompting for each location's stack.
///
/// For every location the prompt is
/// `Enter a block to stack on <name> (or clear): `; each answer is
/// upper-cased and looked up as a block name. Any token that is not a
/// known block — `clear` included — ends the current stack, as does end of
/// input.
///
/// # Errors
///
/// Returns [`ConsoleError::Io`] if the streams fail, or
/// [`ConsoleError::Build`] if the collected world places a block twice.
pub fn define_world<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    table: &EntityTable,
) -> Result<Vec<Fact>, ConsoleError> {
    let mut tokens = Tokens::new(input);
    let mut builder = WorldBuilder::new(table);
    for place in table.locations() {
        let column = define_stack(&mut tokens, output, table, place)?;
        builder.place(place, &column);
    }
    Ok(builder.build()?)
}

fn define_stack<R: BufRead, W: Write>(
    tokens: &mut Tokens<'_, R>,
    output: &mut W,
    table: &EntityTable,
    place: LocationId,
) -> Result<Vec<BlockId>, ConsoleError> {
    let mut column: Vec<BlockId> = Vec::new();
    loop {
        let top = column
            .last()
            .map_or_else(|| table.location_name(place), |&b| table.block_name(b));
        write!(output, "Enter a block to stack on {top} (or clear): ").map_err(io_error)?;
        output.flush().map_err(io_error)?;

        let Some(answer) = tokens.next().map_err(io_error)? else {
            break; // end of input ends the stack
        };
        match table.block(&answer.to_uppercase()) {
            Some(block) => column.push(block),
            None => break, // "clear" or any unknown token terminates
        }
    }
    Ok(column)
}

fn io_error(err: std::io::Error) -> ConsoleError {
    ConsoleError::Io {
        detail: err.to_string(),
    }
}

/// Whitespace-delimited token scanner over a buffered reader.
struct Tokens<'r, R: BufRead> {
    input: &'r mut R,
    pending: VecDeque<String>,
}

impl<'r, R: BufRead> Tokens<'r, R> {
    fn new(input: &'r mut R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
