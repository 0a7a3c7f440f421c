use crate::prelude::*;
use crate::shellenv::SHELL_PID;

/// Builds the argv for exec from a command descriptor, applying the two
/// substitution rules: a token naming an existing environment variable
/// becomes that variable's value, and a bare `$$` becomes the shell's own
/// pid. Anything else passes through untouched. The result always holds
/// `1 + args.len()` entries; `execvp` supplies the trailing null required
/// by the exec contract.
pub fn expand_argv(program: &str, args: &[String]) -> Vec<CString> {
	let mut argv = Vec::with_capacity(args.len() + 1);
	argv.push(CString::new(program).unwrap());
	for arg in args {
		argv.push(CString::new(expand_token(arg)).unwrap());
	}
	argv
}

fn expand_token(token: &str) -> String {
	if let Ok(value) = env::var(token) {
		value
	} else if token == "$$" {
		SHELL_PID.to_string()
	} else {
		token.to_string()
	}
}
