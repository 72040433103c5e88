//! Console command grammar.
//!
//! Lines are split with shell quoting rules (`shlex`) and parsed with a clap
//! derive definition, so `file 1 "Screen flickering"` and
//! `file 1 Screen flickering` both describe the same complaint.

use clap::{CommandFactory, Parser, Subcommand, error::ErrorKind};

use crate::domain::{Error, Role, StatusUpdate};

/// Parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Blank line or comment; nothing to do.
    Empty,
    /// A command to execute.
    Command(ConsoleCommand),
    /// Usage text requested with `--help`.
    Help(String),
}

#[derive(Debug, Parser)]
#[command(
    name = "complaint-desk",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct CommandLine {
    #[command(subcommand)]
    command: ConsoleCommand,
}

/// Commands understood by the console.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ConsoleCommand {
    /// Create an account.
    Register {
        /// customer or employee
        role: Role,
        /// Display name (at least 2 characters)
        name: String,
        email: String,
        /// At least 6 characters
        password: String,
        /// Must repeat the password
        confirm: String,
    },
    /// Log in as a customer or an employee.
    Login {
        /// customer or employee
        role: Role,
        email: String,
        password: String,
    },
    /// Forget the current login.
    Logout,
    /// Show the logged-in account.
    Whoami,
    /// List your products (customer).
    Products,
    /// File a complaint against one of your products (customer).
    File {
        /// Product id from `products`
        product: u64,
        /// What went wrong
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },
    /// List your complaints (customer).
    Complaints,
    /// Products and complaints in one view (customer).
    Dashboard,
    /// Assigned and unassigned complaints (employee).
    Queue,
    /// Take ownership of an unassigned complaint (employee).
    Claim {
        /// Complaint id from `queue`
        complaint: u64,
    },
    /// Move one of your complaints to "In Progress" or "Closed" (employee).
    Advance {
        /// Complaint id from `queue`
        complaint: u64,
        /// Target status; `In Progress`, `in_progress` and `closed` all work
        #[arg(required = true, num_args = 1..)]
        status: Vec<String>,
    },
    /// Show this help.
    Help,
    /// Leave the console.
    Quit,
}

impl ConsoleCommand {
    /// Join the free-text words of a `file` command.
    pub fn joined(words: &[String]) -> String {
        words.join(" ")
    }

    /// Parse the status words of an `advance` command.
    pub fn status_update(words: &[String]) -> Result<StatusUpdate, Error> {
        Self::joined(words)
            .parse::<StatusUpdate>()
            .map_err(|err| Error::invalid_input(err.to_string()))
    }
}

/// Usage text for every command.
pub fn usage() -> String {
    CommandLine::command().render_long_help().to_string()
}

/// Split and parse one input line.
///
/// Lines starting with `#` are comments.
pub fn parse_line(line: &str) -> Result<ParsedLine, Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(ParsedLine::Empty);
    }
    let words = shlex::split(trimmed)
        .ok_or_else(|| Error::invalid_input("unbalanced quotes in command"))?;

    match CommandLine::try_parse_from(words) {
        Ok(parsed) => Ok(ParsedLine::Command(parsed.command)),
        Err(err) if err.kind() == ErrorKind::DisplayHelp => Ok(ParsedLine::Help(err.to_string())),
        Err(err) => Err(Error::invalid_input(summarise(&err.to_string()))),
    }
}

fn summarise(rendered: &str) -> String {
    let first = rendered
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("invalid command");
    first.strip_prefix("error: ").unwrap_or(first).to_owned()
}
