//! Page handler contract.
//!
//! Page bodies are collaborators outside the shell core. The shell only
//! invokes them for a path and displays what they return.

use crate::session::SessionContext;

/// Rendered output of a page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageView {
    pub title: String,
    pub lines: Vec<String>,
}

impl PageView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }
}

/// A page mounted at one route.
pub trait PageHandler {
    /// Stable identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Renders the page against the live session.
    fn render(&self, session: &mut dyn SessionContext) -> PageView;
}
