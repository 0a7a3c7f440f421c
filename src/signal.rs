use std::sync::atomic::{AtomicBool, Ordering};

use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

/// Whether background requests are currently honored. Flipped only by the
/// SIGTSTP handler, read by the launcher; everything the handler touches
/// must stay async-signal safe, hence the atomic rather than ShellState.
static FG_ONLY: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
	Normal,
	ForegroundOnly,
}

pub fn exec_mode() -> ExecMode {
	if FG_ONLY.load(Ordering::SeqCst) {
		ExecMode::ForegroundOnly
	} else {
		ExecMode::Normal
	}
}

pub fn sig_handler_setup() {
	let flags = SaFlags::SA_RESTART;
	let sigint_action = SigAction::new(SigHandler::Handler(handle_sigint), flags, SigSet::all());
	let sigtstp_action = SigAction::new(SigHandler::Handler(handle_sigtstp), flags, SigSet::all());
	unsafe {
		sigaction(Signal::SIGINT, &sigint_action).unwrap();
		sigaction(Signal::SIGTSTP, &sigtstp_action).unwrap();
	}
}

// Fixed-size write straight to fd 1; println! is not reentrant-safe here
fn write_notice(msg: &[u8]) {
	unsafe {
		libc::write(libc::STDOUT_FILENO, msg.as_ptr() as *const libc::c_void, msg.len());
	}
}

extern "C" fn handle_sigint(_: libc::c_int) {
	// Acknowledge ^C without killing the shell. A foreground child gets the
	// same SIGINT under its default disposition and dies on its own.
	write_notice(b"\nCaught SIGINT\n");
}

extern "C" fn handle_sigtstp(_: libc::c_int) {
	let was_fg_only = FG_ONLY.fetch_xor(true, Ordering::SeqCst);
	if was_fg_only {
		write_notice(b"\nExiting foreground-only mode\n");
	} else {
		write_notice(b"\nEntering foreground-only mode (& is now ignored)\n");
	}
}

#[cfg(test)]
pub(crate) fn set_fg_only(on: bool) {
	FG_ONLY.store(on, Ordering::SeqCst);
}

// Tests that depend on the process-wide mode flag serialize on this
#[cfg(test)]
pub(crate) static MODE_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
