use log::debug;
use nix::sys::signal::{signal as set_disposition, SigHandler};

use crate::parser::Command;
use crate::prelude::*;
use crate::shellenv::ShellState;
use crate::signal::{self, ExecMode};
use crate::{expand, redirect};

/// Forks and runs one external command.
///
/// The child rewires its descriptors, expands its argv and replaces itself
/// with the requested program; it never returns into shell logic. The
/// parent either registers the child as a background job or blocks until
/// it finishes and records its termination form. A background request is
/// silently demoted to foreground while the shell is in foreground-only
/// mode. Running out of fork capacity is fatal to the whole interpreter.
pub fn launch(cmd: &Command, state: &mut ShellState) -> ShellResult<()> {
	match unsafe { fork() } {
		Ok(ForkResult::Child) => run_child(cmd),
		Ok(ForkResult::Parent { child }) => handle_parent(child, cmd, state),
		Err(e) => {
			eprintln!("marsh: fork failed: {e}");
			std::process::exit(1);
		}
	}
}

fn run_child(cmd: &Command) -> ! {
	// The shell's handlers must not leak into the program we are about to
	// become; ^C should kill a foreground child the stock way.
	unsafe {
		let _ = set_disposition(Signal::SIGINT, SigHandler::SigDfl);
		let _ = set_disposition(Signal::SIGTSTP, SigHandler::SigDfl);
	}

	if let Err(e) = redirect::apply_redirection(cmd.infile.as_deref(), cmd.outfile.as_deref()) {
		eprintln!("marsh: {e}");
		std::process::exit(1);
	}

	let argv = expand::expand_argv(&cmd.program, &cmd.arguments);
	match execvp(&argv[0], &argv) {
		Err(Errno::ENOENT) => eprintln!("marsh: {}", ShellError::CommandNotFound(cmd.program.clone())),
		Err(Errno::EACCES) => eprintln!("marsh: {}", ShellError::PermissionDenied(cmd.program.clone())),
		Err(e) => eprintln!("marsh: {}: {e}", cmd.program),
		Ok(_) => unreachable!(),
	}
	std::process::exit(1);
}

fn handle_parent(child: Pid, cmd: &Command, state: &mut ShellState) -> ShellResult<()> {
	if cmd.background && signal::exec_mode() == ExecMode::Normal {
		state.jobs_mut().register(child);
		println!("background pid is {child}");
		return Ok(());
	}
	wait_foreground(child, state)
}

fn wait_foreground(child: Pid, state: &mut ShellState) -> ShellResult<()> {
	debug!("waiting on foreground pid {child}");
	loop {
		let status = match waitpid(child, None) {
			Ok(status) => status,
			Err(Errno::EINTR) => continue, // a handler ran; keep waiting on the same child
			Err(e) => return Err(e.into()),
		};
		match status {
			WaitStatus::Exited(..) | WaitStatus::Signaled(..) => {
				state.set_last_status(&status);
				if let WaitStatus::Signaled(_, sig, _) = status {
					println!("terminated by signal {}", sig as i32);
				}
				return Ok(());
			}
			_ => {}
		}
	}
}

/// One non-blocking sweep over the background registry, run once per loop
/// iteration before the next prompt. Jobs found terminated are reported
/// and dropped from the table; still-running jobs are re-checked next
/// pass. The foreground last-status slot is never touched here.
pub fn reap_background(state: &mut ShellState) {
	for pid in state.jobs().snapshot() {
		let status = match waitpid(pid, Some(WaitPidFlag::WNOHANG)) {
			Ok(status) => status,
			Err(e) => {
				// ECHILD: gone without a trace; drop the stale entry
				debug!("dropping background pid {pid} from the job table: {e}");
				state.jobs_mut().unregister(pid);
				continue;
			}
		};
		match status {
			WaitStatus::Exited(_, code) => {
				println!("background pid {pid} is done: exit value {code}");
				state.jobs_mut().unregister(pid);
			}
			WaitStatus::Signaled(_, sig, _) => {
				println!("background pid {pid} is done: terminated by signal {}", sig as i32);
				state.jobs_mut().unregister(pid);
			}
			_ => {} // StillAlive and the like: skip this pass
		}
	}
}
