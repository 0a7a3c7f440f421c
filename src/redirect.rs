use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;

use crate::prelude::*;

/// Rewires the standard streams of a freshly forked child before exec.
/// Runs only in the child; a failure here is reported by the child path
/// and terminates the child, never the shell. With neither path present
/// this is a no-op and the parent's descriptors are inherited unchanged.
pub fn apply_redirection(infile: Option<&Path>, outfile: Option<&Path>) -> ShellResult<()> {
	if let Some(path) = infile {
		let fd = open(path, OFlag::O_RDONLY, Mode::empty())
			.map_err(|_| ShellError::BadInputRedirect(path.display().to_string()))?;
		dup2(fd, libc::STDIN_FILENO)?;
		close(fd)?;
	}

	if let Some(path) = outfile {
		let mode = Mode::S_IRUSR | Mode::S_IWUSR | Mode::S_IRGRP | Mode::S_IROTH;
		let fd = open(path, OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC, mode)
			.map_err(|_| ShellError::BadOutputRedirect(path.display().to_string()))?;
		dup2(fd, libc::STDOUT_FILENO)?;
		close(fd)?;
	}

	Ok(())
}
