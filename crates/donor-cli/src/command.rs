//! Shell command language shared by the REPL and one-shot subcommands.

use std::str::FromStr;

use donor_core::error::{DonorError, Result};
use donor_core::role::Role;

/// Command words, in help order. Used for completion.
pub const COMMAND_WORDS: [&str; 9] = [
    "status",
    "nav",
    "open",
    "dashboard",
    "login",
    "logout",
    "routes",
    "help",
    "quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Print the session and current path.
    Status,
    /// Re-render the current screen.
    Nav,
    /// Navigate to a path.
    Open(String),
    /// Follow the dashboard link, if one is visible.
    Dashboard,
    Login(Role),
    Logout,
    /// List every route.
    Routes,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = DonorError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(DonorError::invalid_input("empty command"));
        };
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(DonorError::invalid_input(format!(
                "unexpected argument '{}'",
                extra
            )));
        }

        let command = match (head, arg) {
            ("status", None) => ShellCommand::Status,
            ("nav", None) => ShellCommand::Nav,
            ("open", Some(path)) => ShellCommand::Open(path.to_string()),
            ("open", None) => return Err(DonorError::invalid_input("usage: open <path>")),
            ("dashboard", None) => ShellCommand::Dashboard,
            ("login", Some(role)) => ShellCommand::Login(parse_role(role)?),
            ("login", None) => return Err(DonorError::invalid_input("usage: login <role>")),
            ("logout", None) => ShellCommand::Logout,
            ("routes", None) => ShellCommand::Routes,
            ("help" | "?", None) => ShellCommand::Help,
            ("quit" | "exit", None) => ShellCommand::Quit,
            (word, Some(_)) if COMMAND_WORDS.contains(&word) => {
                return Err(DonorError::invalid_input(format!(
                    "'{}' takes no arguments",
                    word
                )));
            }
            (word, _) => {
                return Err(DonorError::invalid_input(format!(
                    "unknown command '{}' (try 'help')",
                    word
                )));
            }
        };
        Ok(command)
    }
}

/// Parses a role typed by the user. Unlike stored values, unknown roles are
/// rejected here rather than mapped to absent.
pub fn parse_role(raw: &str) -> Result<Role> {
    raw.parse::<Role>().map_err(|_| {
        DonorError::invalid_input(format!(
            "unknown role '{}' (expected government, hospital or user)",
            raw
        ))
    })
}

pub fn help_lines() -> Vec<String> {
    [
        "status            show the current session",
        "nav               redraw the current screen",
        "open <path>       go to a path, e.g. open /verify-donation",
        "dashboard         follow the Dashboard link",
        "login <role>      log in as government, hospital or user",
        "logout            log out",
        "routes            list every route",
        "help              show this help",
        "quit              leave the shell",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
