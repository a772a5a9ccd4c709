//! Interactive shell loop.
//!
//! Single-threaded: each line is parsed and executed to completion before
//! the next prompt.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use strum::IntoEnumIterator;

use donor_core::role::Role;
use donor_core::route::Route;

use crate::app::{App, Outcome};
use crate::command::{COMMAND_WORDS, ShellCommand};
use crate::render;

/// Completion and hints for command words, paths and roles.
struct ShellHelper {
    commands: Vec<String>,
    paths: Vec<String>,
    roles: Vec<String>,
}

impl ShellHelper {
    fn new() -> Self {
        Self {
            commands: COMMAND_WORDS.iter().map(|c| c.to_string()).collect(),
            paths: Route::iter().map(|r| r.path().to_string()).collect(),
            roles: Role::iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Candidate list and the byte offset where the word being completed
    /// starts.
    fn candidates<'a>(&'a self, line: &str) -> (usize, &'a [String], String) {
        match line.split_once(' ') {
            None => (0, self.commands.as_slice(), line.to_string()),
            Some((head, rest)) => {
                let start = head.len() + 1;
                let word = rest.trim_start();
                let start = start + (rest.len() - word.len());
                match head {
                    "open" => (start, self.paths.as_slice(), word.to_string()),
                    "login" => (start, self.roles.as_slice(), word.to_string()),
                    _ => (start, &[][..], word.to_string()),
                }
            }
        }
    }
}

impl Helper for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, pool, word) = self.candidates(&line[..pos]);
        let matches = pool
            .iter()
            .filter(|candidate| candidate.starts_with(&word))
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate.clone(),
            })
            .collect();
        Ok((start, matches))
    }
}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let head = line.split_whitespace().next().unwrap_or("");
        if COMMAND_WORDS.contains(&head) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (_, pool, word) = self.candidates(line);
        if word.is_empty() {
            return None;
        }
        pool.iter()
            .find(|candidate| candidate.starts_with(&word) && candidate.len() > word.len())
            .map(|candidate| candidate[word.len()..].to_string())
    }
}

impl Validator for ShellHelper {}

/// Runs the shell until `quit` or end of input.
pub fn run(app: &mut App) -> Result<()> {
    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ShellHelper::new()));

    println!("{}", "Type 'help' for commands, 'quit' to exit.".bright_black());
    render::print_screen(&app.screen());

    loop {
        let prompt = format!("{}> ", app.current_path());
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match trimmed.parse::<ShellCommand>() {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", e.to_string().red());
                        continue;
                    }
                };

                match app.execute(command) {
                    Outcome::Screen(screen) => render::print_screen(&screen),
                    Outcome::Message(lines) => render::print_message(&lines),
                    Outcome::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => {
                tracing::error!(error = %err, "readline failed");
                return Err(err.into());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_for_command_word() {
        let helper = ShellHelper::new();
        let (start, pool, word) = helper.candidates("log");
        assert_eq!(start, 0);
        assert_eq!(word, "log");
        let hits: Vec<&String> = pool.iter().filter(|c| c.starts_with(&word)).collect();
        assert_eq!(hits, vec!["login", "logout"]);
    }

    #[test]
    fn test_candidates_for_open_path() {
        let helper = ShellHelper::new();
        let (start, pool, word) = helper.candidates("open /re");
        assert_eq!(start, 5);
        assert_eq!(word, "/re");
        let hits: Vec<&String> = pool.iter().filter(|c| c.starts_with(&word)).collect();
        assert_eq!(hits, vec!["/register", "/redeem-nft"]);
    }

    #[test]
    fn test_candidates_for_login_role() {
        let helper = ShellHelper::new();
        let (start, pool, word) = helper.candidates("login  ho");
        assert_eq!(start, 7);
        assert_eq!(word, "ho");
        assert!(pool.iter().any(|c| c == "hospital"));
    }

    #[test]
    fn test_no_candidates_after_other_commands() {
        let helper = ShellHelper::new();
        let (_, pool, _) = helper.candidates("status x");
        assert!(pool.is_empty());
    }
}
