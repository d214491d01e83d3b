use std::process;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

use crate::interrupt;
use crate::nvm::activation::{self, ActivationScope};
use crate::nvm::{NodeVersion, VersionScanner};
use crate::tmux::PaneInput;

/// Top-level menu actions, parsed from the raw choice token exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    UseForSession,
    SetDefault,
    Quit,
}

impl MainAction {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::UseForSession),
            "2" => Some(Self::SetDefault),
            token if token.eq_ignore_ascii_case("q") => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Outcome of one selection-prompt line against a list of a given length.
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Pick(usize),
    Quit,
    Invalid(&'static str),
}

fn resolve_choice(input: &str, count: usize) -> Choice {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Choice::Quit;
    }
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Choice::Pick(n - 1),
        Ok(_) => Choice::Invalid("Invalid choice. Please enter a number from the list."),
        Err(_) => Choice::Invalid("Invalid input. Please enter a valid number."),
    }
}

/// Blocking interactive loop: main menu, then one selection flow.
///
/// Invalid main-menu input re-prompts; a completed (or aborted) selection
/// flow ends the program.
pub fn run(scanner: &VersionScanner, pane: &impl PaneInput) -> Result<()> {
    loop {
        println!();
        println!("Select an action:");
        println!("1. Change Node version for current session");
        println!("2. Change default Node version");
        println!("q. Quit");

        let input = prompt("Enter your choice")?;
        match MainAction::parse(&input) {
            Some(MainAction::UseForSession) => {
                return pick_and_apply(scanner, pane, ActivationScope::SessionOnly);
            }
            Some(MainAction::SetDefault) => {
                return pick_and_apply(scanner, pane, ActivationScope::Default);
            }
            Some(MainAction::Quit) => quit(),
            None => println!("Invalid choice. Please enter '1', '2', or 'q'."),
        }
    }
}

fn pick_and_apply(
    scanner: &VersionScanner,
    pane: &impl PaneInput,
    scope: ActivationScope,
) -> Result<()> {
    let versions = scanner.installed_versions();
    if versions.is_empty() {
        eprintln!("No Node.js versions detected. Install one with 'nvm install <version>'.");
        return Ok(());
    }

    render_version_list(&versions, scanner);
    let chosen = read_version_choice(&versions)?;

    // The list cannot shift underneath us today, but a stale pick must
    // abort before any keystrokes reach the pane.
    if !versions.contains(&chosen) {
        eprintln!("Selected version '{chosen}' not among installed versions.");
        return Ok(());
    }

    match scope {
        ActivationScope::SessionOnly => println!(
            "Switching Node.js version for this session to {}...",
            chosen.to_string().green()
        ),
        ActivationScope::Default => println!(
            "Setting default Node.js version to {} and applying now...",
            chosen.to_string().green()
        ),
    }

    for command in activation::plan(&chosen, scope) {
        pane.send_command(&command, true)?;
    }

    match scope {
        ActivationScope::SessionOnly => println!("Session updated."),
        ActivationScope::Default => println!("Default updated."),
    }
    Ok(())
}

fn render_version_list(versions: &[NodeVersion], scanner: &VersionScanner) {
    let active = scanner.active_version();
    let default = scanner.default_version();

    println!();
    println!("Installed Node.js versions:");
    for (index, version) in versions.iter().enumerate() {
        let mut line = format!("{}. {}", index + 1, version);
        if Some(version) == active.as_ref() {
            line = format!("{} {}", line, "(current)".green());
        }
        if Some(version) == default.as_ref() {
            line = format!("{} {}", line, "(default)".yellow());
        }
        println!("{line}");
    }
}

fn read_version_choice(versions: &[NodeVersion]) -> Result<NodeVersion> {
    loop {
        let input = prompt("Enter the number of the version you want to use (or 'q' to quit)")?;
        match resolve_choice(&input, versions.len()) {
            Choice::Pick(index) => return Ok(versions[index].clone()),
            Choice::Quit => quit(),
            Choice::Invalid(message) => println!("{message}"),
        }
    }
}

/// Read one line of input. A Ctrl-C recorded before the read, or one that
/// interrupts it, ends the program with status 0; this is the only place
/// cancellation is observed.
fn prompt(message: &str) -> Result<String> {
    if interrupt::interrupted() {
        graceful_shutdown();
    }

    let result = Input::<String>::new()
        .with_prompt(message)
        .allow_empty(true)
        .interact_text();

    match result {
        Ok(line) => Ok(line),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => {
            graceful_shutdown()
        }
        Err(e) => Err(e.into()),
    }
}

fn graceful_shutdown() -> ! {
    println!();
    println!("{}", "Graceful shutdown. Bye!".cyan());
    process::exit(0);
}

fn quit() -> ! {
    println!("Exiting.");
    process::exit(0);
}
