mod config;
mod interrupt;
mod menu;
mod nvm;
mod options;
mod tmux;

use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = options::Cli::parse();

    options::verbose::set_verbose(cli.verbose);

    if cli.verbose && cli.version {
        println!("Verbose mode: {}", "enabled".green());
        options::version::show();
        return;
    }

    if cli.version {
        options::version::show();
        return;
    }

    if let Err(e) = interrupt::install() {
        eprintln!("{} could not install Ctrl-C handler: {e}", "Warning:".yellow());
    }

    print_banner();

    let dirs = config::locate();
    let scanner = nvm::VersionScanner::new(dirs);

    let pane = match tmux::PaneController::locate() {
        Ok(pane) => pane,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            std::process::exit(1);
        }
    };

    if let Err(e) = menu::run(&scanner, &pane) {
        eprintln!("{} {e:#}", "Error:".red());
        std::process::exit(1);
    }
}

fn print_banner() {
    let title = concat!(env!("CARGO_PKG_NAME"), " · Node version picker for tmux");
    let border = "─".repeat(title.chars().count() + 2);
    println!("{}", format!("┌{border}┐").cyan());
    println!("{}", format!("│ {title} │").cyan());
    println!("{}", format!("└{border}┘").cyan());
}
