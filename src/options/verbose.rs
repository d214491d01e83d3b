use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

pub fn log(message: &str) {
    if is_verbose() {
        println!("{} {}", "[VERBOSE]".blue(), message);
    }
}

/// Trace an external command line before it is spawned.
pub fn log_command(program: &str, args: &[&str]) {
    if is_verbose() {
        println!("{} {} {}", "[VERBOSE]".blue(), program.bold(), args.join(" "));
    }
}
