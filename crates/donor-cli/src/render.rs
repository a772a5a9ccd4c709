//! Text rendering of shell frames.

use colored::Colorize;
use donor_core::navigation::{BRAND_NAME, FOOTER_CONTACT, NavAction};

use crate::app::Screen;

/// Navigation bar entry as shown on screen, e.g. `Dashboard(/user-dashboard)`.
pub fn nav_entry(action: &NavAction) -> String {
    match action.target() {
        Some(route) => format!("{}({})", action.label(), route.path()),
        None => format!("[{}]", action.label()),
    }
}

/// Plain-text frame: nav bar, content area, footer.
pub fn screen_lines(screen: &Screen) -> Vec<String> {
    let mut lines = Vec::new();

    let nav: Vec<String> = screen.nav.iter().map(nav_entry).collect();
    lines.push(format!("{}  {}", BRAND_NAME, nav.join("  ")));
    lines.push(format!("@ {}", screen.path));

    match &screen.content {
        Some(view) => {
            lines.push(format!("# {}", view.title));
            lines.extend(view.lines.iter().map(|line| format!("  {}", line)));
        }
        None => lines.push(format!("(nothing mounted at {})", screen.path)),
    }

    let quick_links: Vec<&str> = screen.footer.iter().map(|route| route.title()).collect();
    lines.push(format!("Quick links: {}", quick_links.join(" | ")));
    lines.push(format!("Contact: {}", FOOTER_CONTACT.join(" / ")));
    lines
}

/// Prints a frame with colors.
pub fn print_screen(screen: &Screen) {
    let nav: Vec<String> = screen
        .nav
        .iter()
        .map(|action| match action {
            NavAction::Logout => nav_entry(action).red().to_string(),
            NavAction::Register => nav_entry(action).bright_magenta().to_string(),
            _ => nav_entry(action).bright_white().to_string(),
        })
        .collect();

    println!("{}  {}", BRAND_NAME.bright_magenta().bold(), nav.join("  "));
    println!("{}", format!("@ {}", screen.path).bright_black());
    println!();

    match &screen.content {
        Some(view) => {
            println!("{}", view.title.bold());
            for line in &view.lines {
                println!("  {}", line);
            }
        }
        None => println!("{}", format!("(nothing mounted at {})", screen.path).yellow()),
    }

    println!();
    let quick_links: Vec<&str> = screen.footer.iter().map(|route| route.title()).collect();
    println!(
        "{}",
        format!("Quick links: {}", quick_links.join(" | ")).bright_black()
    );
    println!(
        "{}",
        format!("Contact: {}", FOOTER_CONTACT.join(" / ")).bright_black()
    );
}

pub fn print_message(lines: &[String]) {
    for line in lines {
        println!("{}", line.bright_blue());
    }
}
