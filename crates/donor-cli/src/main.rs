use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use donor_core::config::ShellConfig;
use donor_infrastructure::ConfigService;

mod app;
mod command;
mod logging;
mod pages;
mod render;
mod repl;

use app::{App, Outcome};
use command::{ShellCommand, parse_role};

#[derive(Parser)]
#[command(name = "donor")]
#[command(about = "BloodDonorNFT shell - role-aware dashboard navigation", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Session storage file, overriding the config
    #[arg(long, global = true)]
    storage_file: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Log filter, overriding the config (RUST_LOG still wins)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print screens without colors
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Repl,
    /// Show the current session
    Status,
    /// Draw the home screen with the current navigation
    Nav,
    /// Render the page at a path
    Open { path: String },
    /// Follow the dashboard link for the current role
    Dashboard,
    /// Log in as government, hospital or user
    Login { role: String },
    /// Log out and clear stored session keys
    Logout,
    /// List every route
    Routes,
}

fn load_config(cli: &Cli) -> Result<ShellConfig> {
    let service = match &cli.config {
        Some(path) => Some(ConfigService::with_path(path.clone())),
        None => ConfigService::new().ok(),
    };
    resolve_config(cli, service)
}

/// Loads the config through `service`, or starts from the defaults when there
/// is no config location, then applies the command-line overrides.
fn resolve_config(cli: &Cli, service: Option<ConfigService>) -> Result<ShellConfig> {
    let mut config = match service {
        Some(service) => service.load().context("Failed to load config")?,
        None => ShellConfig::default(),
    };

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    config.storage = app::storage_settings(config.storage, cli.storage_file.clone(), cli.ephemeral);
    Ok(config)
}

fn to_shell_command(command: Commands) -> Result<Option<ShellCommand>> {
    let command = match command {
        Commands::Repl => return Ok(None),
        Commands::Status => ShellCommand::Status,
        Commands::Nav => ShellCommand::Nav,
        Commands::Open { path } => ShellCommand::Open(path),
        Commands::Dashboard => ShellCommand::Dashboard,
        Commands::Login { role } => ShellCommand::Login(parse_role(&role)?),
        Commands::Logout => ShellCommand::Logout,
        Commands::Routes => ShellCommand::Routes,
    };
    Ok(Some(command))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let _log_guard = logging::init(&config.logging)?;

    let mut app = App::bootstrap(&config.storage)?;

    let command = match cli.command {
        Some(command) => to_shell_command(command)?,
        None => None,
    };

    let Some(command) = command else {
        return repl::run(&mut app);
    };

    match app.execute(command) {
        Outcome::Screen(screen) if cli.plain => {
            for line in render::screen_lines(&screen) {
                println!("{}", line);
            }
        }
        Outcome::Screen(screen) => render::print_screen(&screen),
        Outcome::Message(lines) if cli.plain => {
            for line in lines {
                println!("{}", line);
            }
        }
        Outcome::Message(lines) => render::print_message(&lines),
        Outcome::Quit => {}
    }

    Ok(())
}
