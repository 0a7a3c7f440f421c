use crate::prelude::*;

/// One parsed line of input, ready for the launcher.
///
/// `arguments` never contains the control tokens `<`, `>` or `&`;
/// the parser consumes those before the descriptor is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Command {
	pub program: String,
	pub arguments: Vec<String>,
	pub infile: Option<PathBuf>,
	pub outfile: Option<PathBuf>,
	pub background: bool,
}

/// Splits a raw input line into a `Command`.
///
/// Blank lines and `#` comment lines produce `None`, which the main loop
/// treats as "nothing to do" rather than as an error. Tokens are separated
/// by whitespace; `<` and `>` take the next token as a redirection target,
/// and `&` marks the command for background execution.
pub fn parse_input(line: &str) -> Option<Command> {
	let line = line.trim();
	if line.is_empty() || line.starts_with('#') {
		return None;
	}

	let mut tokens = line.split_whitespace();
	let mut cmd = Command {
		program: tokens.next()?.to_string(),
		..Default::default()
	};

	while let Some(token) = tokens.next() {
		match token {
			"<" => cmd.infile = tokens.next().map(PathBuf::from),
			">" => cmd.outfile = tokens.next().map(PathBuf::from),
			"&" => cmd.background = true,
			arg => cmd.arguments.push(arg.to_string()),
		}
	}

	Some(cmd)
}
