// logbook - app/repl.rs
//
// The contact bot's read-eval-print loop.
//
// Two states: Running until `close`/`exit` (or end of input), then
// Terminated. Single-threaded and fully blocking on each read. User
// mistakes never leave the loop; only terminal I/O errors do.

use crate::core::command::{parse_input, Command};
use crate::core::contacts::{add_contact, change_contact, show_all, show_phone, ContactRegistry};
use crate::util::constants;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplState {
    Running,
    Terminated,
}

/// Bot session: the registry plus the loop state.
#[derive(Debug)]
pub struct Repl {
    registry: ContactRegistry,
    state: ReplState,
    prompt: String,
}

impl Default for Repl {
    fn default() -> Self {
        Self::new(constants::DEFAULT_PROMPT)
    }
}

impl Repl {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            registry: ContactRegistry::new(),
            state: ReplState::Running,
            prompt: prompt.into(),
        }
    }

    pub fn state(&self) -> ReplState {
        self.state
    }

    pub fn registry(&self) -> &ContactRegistry {
        &self.registry
    }

    /// Evaluate one line of input and return the text to print.
    pub fn eval(&mut self, line: &str) -> String {
        let parsed = parse_input(line);
        let command = parsed.command();

        // Argument values are contact data; only their count is logged.
        tracing::debug!(?command, args = parsed.args.len(), "Dispatching command");

        match command {
            Command::Exit => {
                self.state = ReplState::Terminated;
                constants::BOT_FAREWELL.to_string()
            }
            Command::Hello => constants::BOT_GREETING.to_string(),
            Command::Add => add_contact(&parsed.args, &mut self.registry).to_string(),
            Command::Change => change_contact(&parsed.args, &mut self.registry).to_string(),
            Command::Phone => show_phone(&parsed.args, &self.registry).to_string(),
            Command::All => show_all(&self.registry).to_string(),
            Command::Unknown => constants::BOT_INVALID_COMMAND.to_string(),
        }
    }

    /// Drive the loop until the session terminates.
    ///
    /// End of input terminates the session without a farewell.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", constants::BOT_WELCOME)?;

        let mut line = String::new();
        while self.state == ReplState::Running {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("End of input; closing session");
                self.state = ReplState::Terminated;
                break;
            }

            let reply = self.eval(&line);
            writeln!(output, "{reply}")?;
        }

        output.flush()
    }
}
