pub use std::{
	env,
	ffi::CString,
	fmt::{
		self,
		Display
	},
	io::{
		self,
		Write
	},
	path::{
		Path,
		PathBuf
	}
};

pub use nix::{
	errno::Errno,
	sys::{
		signal::{
			kill,
			Signal
		},
		wait::{
			waitpid,
			WaitPidFlag,
			WaitStatus
		}
	},
	unistd::{
		close,
		dup2,
		execvp,
		fork,
		getpid,
		ForkResult,
		Pid
	}
};
pub use crate::error::{
	ShellError,
	ShellResult
};
