use log::error;

use crate::prelude::*;

/// Ordered table of live background process ids. Insertion order is launch
/// order, and membership is the only source of truth for "is this a
/// tracked background job".
#[derive(Debug, Default)]
pub struct JobTable {
	jobs: Vec<Pid>,
}

impl JobTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&mut self, pid: Pid) {
		self.jobs.push(pid);
	}

	/// No-op if the pid was never registered or was already reaped.
	pub fn unregister(&mut self, pid: Pid) {
		self.jobs.retain(|job| *job != pid);
	}

	/// Ordered copy for the reaper to sweep without holding a borrow
	/// across the table mutations it triggers.
	pub fn snapshot(&self) -> Vec<Pid> {
		self.jobs.clone()
	}

	pub fn len(&self) -> usize {
		self.jobs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.jobs.is_empty()
	}

	/// Shutdown path. Signals every registered job in registration order
	/// but does not wait for them or clear the table; the interpreter is
	/// about to exit anyway.
	pub fn terminate_all(&self) {
		for pid in &self.jobs {
			match kill(*pid, Signal::SIGINT) {
				Ok(()) | Err(Errno::ESRCH) => {} // ESRCH: already gone
				Err(e) => error!("failed to signal background pid {pid}: {e}"),
			}
		}
	}
}
