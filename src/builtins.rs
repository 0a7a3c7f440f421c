use crate::parser::Command;
use crate::prelude::*;
use crate::shellenv::ShellState;

pub const BUILTINS: [&str; 3] = ["cd", "exit", "status"];

/// Builtins always run in the shell process itself, in the foreground,
/// and ignore any redirection or background request on the line.
pub fn exec_builtin(cmd: &Command, state: &mut ShellState) -> ShellResult<()> {
	match cmd.program.as_str() {
		"cd" => change_dir(&cmd.arguments),
		"status" => report_status(state),
		"exit" => exit_shell(state),
		_ => unreachable!("dispatch only routes known builtins here"),
	}
}

fn change_dir(args: &[String]) -> ShellResult<()> {
	let target = match args.first() {
		Some(dir) => PathBuf::from(dir),
		None => PathBuf::from(env::var("HOME").unwrap_or_else(|_| "/".to_string())),
	};
	if env::set_current_dir(&target).is_err() {
		eprintln!("cd: cannot find specified directory: {}", target.display());
	}
	Ok(())
}

fn report_status(state: &ShellState) -> ShellResult<()> {
	println!("{}", state.last_status());
	Ok(())
}

fn exit_shell(state: &ShellState) -> ShellResult<()> {
	state.jobs().terminate_all();
	Err(ShellError::CleanExit(0))
}
