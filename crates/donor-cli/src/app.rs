//! Application wiring: one session store plus one shell controller.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use donor_application::{SessionStore, ShellController};
use donor_core::DonorError;
use donor_core::config::StorageSettings;
use donor_core::navigation::{NavAction, footer_links};
use donor_core::page::PageView;
use donor_core::route::Route;
use donor_core::session::Session;
use donor_core::storage::DurableStorage;
use donor_infrastructure::{MemoryStorage, TomlLocalStorage};
use strum::IntoEnumIterator;

use crate::command::{ShellCommand, help_lines};
use crate::pages;

/// Everything needed to draw one frame of the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub nav: Vec<NavAction>,
    pub path: String,
    /// `None` when nothing is mounted at `path`.
    pub content: Option<PageView>,
    pub footer: [Route; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Screen(Screen),
    Message(Vec<String>),
    Quit,
}

pub struct App {
    store: SessionStore,
    shell: ShellController,
}

impl App {
    /// Opens storage per `settings`, restores the session and mounts the pages.
    pub fn bootstrap(settings: &StorageSettings) -> Result<Self> {
        let storage: Arc<dyn DurableStorage> = if settings.ephemeral {
            tracing::info!("[Bootstrap] Using in-memory session storage");
            Arc::new(MemoryStorage::new())
        } else {
            let local = match &settings.path {
                Some(path) => TomlLocalStorage::with_path(path.clone()),
                None => TomlLocalStorage::new().context("Failed to locate session storage")?,
            };
            tracing::info!("[Bootstrap] Using session storage at {:?}", local.path());
            Arc::new(local)
        };

        Self::with_storage(storage)
    }

    pub fn with_storage(storage: Arc<dyn DurableStorage>) -> Result<Self> {
        let routes = pages::route_table().context("Failed to build route table")?;
        Ok(Self {
            store: SessionStore::initialize(storage),
            shell: ShellController::new(routes),
        })
    }

    pub fn session(&self) -> Session {
        self.store.session()
    }

    pub fn current_path(&self) -> &str {
        self.shell.current_path()
    }

    /// Draws the current path against the current session.
    pub fn screen(&mut self) -> Screen {
        let content = self.shell.render_current(&mut self.store);
        self.frame(content)
    }

    pub fn execute(&mut self, command: ShellCommand) -> Outcome {
        match command {
            ShellCommand::Status => Outcome::Message(self.status_lines()),
            ShellCommand::Nav => Outcome::Screen(self.screen()),
            ShellCommand::Open(path) => {
                let content = self.shell.navigate(&path, &mut self.store);
                Outcome::Screen(self.frame(content))
            }
            ShellCommand::Dashboard => {
                let session = self.store.session();
                let link = self
                    .shell
                    .visible_actions(&session)
                    .into_iter()
                    .find(|action| matches!(action, NavAction::Dashboard(_)));
                match link {
                    Some(action) => {
                        let content = self.shell.activate(action, &mut self.store);
                        Outcome::Screen(self.frame(content))
                    }
                    None => Outcome::Message(vec![
                        "No dashboard link while logged out. Use 'login <role>'.".to_string(),
                    ]),
                }
            }
            ShellCommand::Login(role) => {
                self.store.login(role);
                Outcome::Screen(self.screen())
            }
            ShellCommand::Logout => {
                let content = self.shell.activate(NavAction::Logout, &mut self.store);
                Outcome::Screen(self.frame(content))
            }
            ShellCommand::Routes => Outcome::Message(
                Route::iter()
                    .map(|route| format!("{:<20} {}", route.path(), route.title()))
                    .collect(),
            ),
            ShellCommand::Help => Outcome::Message(help_lines()),
            ShellCommand::Quit => Outcome::Quit,
        }
    }

    fn frame(&self, content: donor_core::Result<PageView>) -> Screen {
        let content = match content {
            Ok(view) => Some(view),
            Err(DonorError::RouteNotFound(path)) => {
                tracing::debug!(%path, "no page mounted");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "page render failed");
                None
            }
        };

        Screen {
            nav: self.shell.visible_actions(&self.store.session()),
            path: self.shell.current_path().to_string(),
            content,
            footer: footer_links(),
        }
    }

    fn status_lines(&self) -> Vec<String> {
        let session = self.store.session();
        let role = session
            .role
            .map(|role| role.to_string())
            .unwrap_or_else(|| "(none)".to_string());
        vec![
            format!("role:       {}", role),
            format!("logged in:  {}", session.is_logged_in),
            format!("dashboard:  {}", session.dashboard_path()),
            format!("path:       {}", self.shell.current_path()),
        ]
    }
}

/// Storage settings after applying command-line overrides.
pub fn storage_settings(
    mut settings: StorageSettings,
    storage_file: Option<PathBuf>,
    ephemeral: bool,
) -> StorageSettings {
    if storage_file.is_some() {
        settings.path = storage_file;
    }
    if ephemeral {
        settings.ephemeral = true;
    }
    settings
}
