// logbook - core/command.rs
//
// Tokenising one line of REPL input and naming the command it asks for.

/// A line of user input split into a command word and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedInput {
    /// First token, lower-cased. Empty for blank input.
    pub command: String,

    /// Remaining tokens, case preserved.
    pub args: Vec<String>,
}

/// Split `line` on whitespace into command and arguments.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().map(str::to_lowercase).unwrap_or_default();
    let args = tokens.map(str::to_string).collect();
    ParsedInput { command, args }
}

/// Commands understood by the contact bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `close` or `exit`.
    Exit,
    Hello,
    Add,
    Change,
    Phone,
    All,
    /// Anything else, including an empty command.
    Unknown,
}

impl Command {
    /// Map an already lower-cased command word to a `Command`.
    pub fn from_word(word: &str) -> Self {
        match word {
            "close" | "exit" => Self::Exit,
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            _ => Self::Unknown,
        }
    }
}

impl ParsedInput {
    pub fn command(&self) -> Command {
        Command::from_word(&self.command)
    }
}
