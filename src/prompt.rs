use crate::prelude::*;

pub const PROMPT: &str = ": ";

/// Prints the prompt and reads one line of input. `None` means stdin hit
/// EOF and the session is over. A read interrupted by a signal counts as
/// an empty line, not an error, so the main loop simply re-prompts.
pub fn read_line() -> ShellResult<Option<String>> {
	print!("{PROMPT}");
	io::stdout().flush()?;

	let mut line = String::new();
	match io::stdin().read_line(&mut line) {
		Ok(0) => Ok(None),
		Ok(_) => Ok(Some(line)),
		Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Some(String::new())),
		Err(e) => Err(e.into()),
	}
}
