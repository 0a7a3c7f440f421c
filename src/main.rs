pub mod builtins;
pub mod error;
pub mod execute;
pub mod expand;
pub mod jobs;
pub mod parser;
pub mod prelude;
pub mod prompt;
pub mod redirect;
pub mod shellenv;
pub mod signal;
#[cfg(test)]
mod tests;

use log::debug;
use once_cell::sync::Lazy;

use crate::error::ShellError;
use crate::shellenv::{ShellState, SHELL_PID};

fn main() {
	env_logger::init();
	// Capture the shell pid before any fork can happen
	Lazy::force(&SHELL_PID);
	signal::sig_handler_setup();

	let mut state = ShellState::new();
	debug!("starting shell loop as pid {}", *SHELL_PID);
	std::process::exit(run(&mut state));
}

fn run(state: &mut ShellState) -> i32 {
	loop {
		execute::reap_background(state);

		let line = match prompt::read_line() {
			Ok(Some(line)) => line,
			Ok(None) => {
				// EOF ends the session the same way `exit` does
				state.jobs().terminate_all();
				return 0;
			}
			Err(e) => {
				eprintln!("marsh: {e}");
				return 1;
			}
		};

		let Some(cmd) = parser::parse_input(&line) else {
			continue;
		};
		debug!("parsed command: {cmd:?}");

		let result = if builtins::BUILTINS.contains(&cmd.program.as_str()) {
			builtins::exec_builtin(&cmd, state)
		} else {
			execute::launch(&cmd, state)
		};

		match result {
			Ok(()) => {}
			Err(ShellError::CleanExit(code)) => return code,
			Err(e) if e.is_fatal() => {
				eprintln!("marsh: {e}");
				return 1;
			}
			Err(e) => eprintln!("marsh: {e}"),
		}
	}
}
