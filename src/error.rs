use thiserror::Error;

pub type ShellResult<T> = Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
	#[error("cannot open {0} for input")]
	BadInputRedirect(String),

	#[error("cannot open {0} for output")]
	BadOutputRedirect(String),

	#[error("{0}: command not found")]
	CommandNotFound(String),

	#[error("{0}: permission denied")]
	PermissionDenied(String),

	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),

	#[error("{0}")]
	Sys(#[from] nix::errno::Errno),

	// Not an actual error, used to propagate the `exit` builtin back to the main loop
	#[error("exit {0}")]
	CleanExit(i32),
}

impl ShellError {
	pub fn is_fatal(&self) -> bool {
		matches!(self, ShellError::Io(..))
	}
}
