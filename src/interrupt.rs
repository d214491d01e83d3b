use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install the process-wide Ctrl-C handler. It only records that the signal
/// arrived; the interactive reads check the flag and shut down cleanly.
///
/// The handler must exist even though it does nothing else: raw-mode key
/// reads re-raise SIGINT internally, and under the default disposition that
/// kills the process before the interrupted read is ever reported.
pub fn install() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst))
}

pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}
