use once_cell::sync::Lazy;

use crate::jobs::JobTable;
use crate::prelude::*;

/// The interpreter's own pid, captured once at startup so that `$$`
/// expansion inside a forked child still names the shell and not the child.
pub static SHELL_PID: Lazy<Pid> = Lazy::new(getpid);

/// Termination form of the most recently completed foreground command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastStatus {
	Exited(i32),
	Signaled(i32),
}

impl Display for LastStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LastStatus::Exited(code) => write!(f, "exit value {code}"),
			LastStatus::Signaled(sig) => write!(f, "terminated by signal {sig}"),
		}
	}
}

/// Process-wide interpreter state, passed by reference to every component.
/// The execution-mode flag lives in `signal.rs` instead because the
/// SIGTSTP handler must be able to flip it at arbitrary interruption points.
#[derive(Debug)]
pub struct ShellState {
	jobs: JobTable,
	last_status: LastStatus,
}

impl Default for ShellState {
	fn default() -> Self {
		Self::new()
	}
}

impl ShellState {
	pub fn new() -> Self {
		Self {
			jobs: JobTable::new(),
			last_status: LastStatus::Exited(0),
		}
	}

	pub fn jobs(&self) -> &JobTable {
		&self.jobs
	}

	pub fn jobs_mut(&mut self) -> &mut JobTable {
		&mut self.jobs
	}

	pub fn last_status(&self) -> LastStatus {
		self.last_status
	}

	/// Records the termination form of a foreground wait. Stopped and
	/// continued children never reach this; the launcher only hands over
	/// final statuses.
	pub fn set_last_status(&mut self, status: &WaitStatus) {
		match status {
			WaitStatus::Exited(_, code) => self.last_status = LastStatus::Exited(*code),
			WaitStatus::Signaled(_, sig, _) => self.last_status = LastStatus::Signaled(*sig as i32),
			_ => {}
		}
	}
}
