//! Line-oriented command scripts driving an editing session
//!
//! One command per line, tokens separated by whitespace. Blank lines and lines
//! starting with `#` are ignored. Parsing is separate from execution, so a
//! whole script is validated before any file is touched.

use crate::generation::{Board, Country, Direction, Flag, Rainbow};
use crate::io::error::{ProcessingError, Result, script_error};
use crate::io::image::{is_supported_image, load_raster, save_raster};
use crate::pipeline::{Operation, Pattern, Session};
use crate::transform::Mosaic;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One parsed script command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Decode an image file into the session
    Load(PathBuf),
    /// Encode the current image to a file
    Save(PathBuf),
    /// Run an operation on the session
    Apply(Operation),
    /// Step back one snapshot
    Undo,
    /// Step forward one snapshot
    Redo,
}

/// Parse a whole script
///
/// `rng_seed` seeds every `mosaic` command so runs are reproducible.
///
/// # Errors
///
/// Returns a script error naming the first line that fails to parse
pub fn parse_script(source: &str, rng_seed: u64) -> Result<Vec<Command>> {
    let mut commands = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        commands.push(parse_line(trimmed, index + 1, rng_seed)?);
    }

    debug!(commands = commands.len(), "Parsed script");
    Ok(commands)
}

/// Parse a single non-empty line; `line_number` is used in error messages
///
/// # Errors
///
/// Returns a script error if the command is unknown, has the wrong number of
/// arguments, or its arguments fail validation
pub fn parse_line(line: &str, line_number: usize, rng_seed: u64) -> Result<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let fail = |reason: &dyn ToString| script_error(line_number, &reason.to_string());
    let number = |token: &str| -> Result<i64> {
        token
            .parse::<i64>()
            .map_err(|e| fail(&format!("'{token}' is not an integer: {e}")))
    };
    let file = |token: &str| -> Result<PathBuf> {
        let path = PathBuf::from(token);
        if is_supported_image(&path) {
            Ok(path)
        } else {
            Err(fail(&format!("'{token}' is not a jpg, png, bmp or gif path")))
        }
    };
    let checked = |result: Result<Operation>| result.map_err(|e| fail(&e));

    let command = match *tokens.as_slice() {
        ["load", path] => Command::Load(file(path)?),
        ["save", path] => Command::Save(file(path)?),
        ["undo"] => Command::Undo,
        ["redo"] => Command::Redo,
        ["mosaic", seeds] => Command::Apply(checked(
            Mosaic::new(number(seeds)?).map(|m| Operation::Mosaic(m.with_rng_seed(rng_seed))),
        )?),
        ["generate", "checkerboard", size] => Command::Apply(checked(
            Board::checkerboard(number(size)?).map(|b| Operation::Generate(Pattern::Board(b))),
        )?),
        ["generate", "board", height, width, size] => Command::Apply(checked(
            Board::new(number(height)?, number(width)?, number(size)?)
                .map(|b| Operation::Generate(Pattern::Board(b))),
        )?),
        ["generate", "flag", height, width, code] => {
            let country: Country = code.parse().map_err(|e| fail(&e))?;
            Command::Apply(checked(
                Flag::new(country, number(height)?, number(width)?)
                    .map(|f| Operation::Generate(Pattern::Flag(f))),
            )?)
        }
        ["generate", "rainbow", height, width, direction] => {
            let direction: Direction = direction.parse().map_err(|e| fail(&e))?;
            Command::Apply(checked(
                Rainbow::new(number(height)?, number(width)?, direction)
                    .map(|r| Operation::Generate(Pattern::Rainbow(r))),
            )?)
        }
        [word] => Command::Apply(checked(word.parse::<Operation>())?),
        _ => return Err(fail(&format!("unrecognized command '{line}'"))),
    };

    Ok(command)
}

/// Executes parsed commands against a session
#[derive(Debug, Default)]
pub struct ScriptRunner {
    session: Session,
}

impl ScriptRunner {
    /// Create a runner with an empty session
    pub const fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    /// Execute commands in order, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns the first load, save, operation or history error
    pub fn run(&mut self, commands: &[Command]) -> Result<()> {
        for command in commands {
            self.execute(command)?;
        }
        Ok(())
    }

    /// Execute one command
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, the operation
    /// has no image to work on, or there is nothing to undo or redo
    pub fn execute(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Load(path) => self.session.set_image(load_raster(path)?),
            Command::Save(path) => save_raster(self.session.image()?, path)?,
            Command::Apply(operation) => {
                self.session.apply(operation)?;
            }
            Command::Undo => {
                self.session.undo()?;
            }
            Command::Redo => {
                self.session.redo()?;
            }
        }
        Ok(())
    }

    /// The session being edited
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the runner, keeping the session
    pub fn into_session(self) -> Session {
        self.session
    }
}

/// Read, parse and run a script file
///
/// # Errors
///
/// Returns an error if the file cannot be read, fails to parse, or any command fails
pub fn run_script_file(path: &Path, rng_seed: u64) -> Result<Session> {
    let source = std::fs::read_to_string(path).map_err(|e| ProcessingError::FileSystem {
        path: path.to_path_buf(),
        operation: "read script",
        source: e,
    })?;

    let commands = parse_script(&source, rng_seed)?;
    info!(path = %path.display(), commands = commands.len(), "Running script");

    let mut runner = ScriptRunner::new();
    runner.run(&commands)?;
    Ok(runner.into_session())
}
