// Process-level tests. These fork real children, so every test that cares
// about the execution mode holds MODE_LOCK for its whole body.

use std::fs;
use std::thread::sleep;
use std::time::{Duration, Instant};

use crate::execute;
use crate::parser::Command;
use crate::shellenv::{LastStatus, ShellState};
use crate::signal::{self, ExecMode, MODE_LOCK};

fn tmp_path(name: &str) -> std::path::PathBuf {
	std::env::temp_dir().join(format!("marsh-test-{}-{}", std::process::id(), name))
}

#[test]
fn foreground_echo_records_exit_status() {
	let out = tmp_path("echo.out");
	let cmd = Command {
		program: "echo".to_string(),
		arguments: vec!["hi".to_string()],
		outfile: Some(out.clone()),
		..Default::default()
	};
	let mut state = ShellState::new();
	execute::launch(&cmd, &mut state).unwrap();

	assert_eq!(state.last_status(), LastStatus::Exited(0));
	assert!(state.jobs().is_empty());
	assert_eq!(fs::read_to_string(&out).unwrap(), "hi\n");
	let _ = fs::remove_file(&out);
}

#[test]
fn missing_input_redirect_fails_only_the_child() {
	let cmd = Command {
		program: "cat".to_string(),
		infile: Some(tmp_path("never-created.in")),
		..Default::default()
	};
	let mut state = ShellState::new();
	execute::launch(&cmd, &mut state).unwrap();

	// The child reported the bad path on stderr and exited with 1;
	// the shell itself just records that and keeps going.
	assert_eq!(state.last_status(), LastStatus::Exited(1));
	assert!(state.jobs().is_empty());
}

#[test]
fn unknown_command_fails_only_the_child() {
	let cmd = Command {
		program: "definitely-not-a-real-command".to_string(),
		..Default::default()
	};
	let mut state = ShellState::new();
	execute::launch(&cmd, &mut state).unwrap();
	assert_eq!(state.last_status(), LastStatus::Exited(1));
}

#[test]
fn signaled_child_is_recorded_as_signaled() {
	let cmd = Command {
		program: "sh".to_string(),
		arguments: vec!["-c".to_string(), "kill -TERM $$".to_string()],
		..Default::default()
	};
	let mut state = ShellState::new();
	execute::launch(&cmd, &mut state).unwrap();
	assert_eq!(state.last_status(), LastStatus::Signaled(libc::SIGTERM));
}

#[test]
fn background_job_is_registered_then_reaped() {
	let _guard = MODE_LOCK.lock().unwrap();
	assert_eq!(signal::exec_mode(), ExecMode::Normal);

	let cmd = Command {
		program: "sleep".to_string(),
		arguments: vec!["1".to_string()],
		background: true,
		..Default::default()
	};
	let mut state = ShellState::new();
	let started = Instant::now();
	execute::launch(&cmd, &mut state).unwrap();

	// The launcher returned without waiting out the sleep
	assert!(started.elapsed() < Duration::from_secs(1));
	assert_eq!(state.jobs().len(), 1);
	// Background completion never touches the foreground status
	assert_eq!(state.last_status(), LastStatus::Exited(0));

	let deadline = Instant::now() + Duration::from_secs(10);
	while !state.jobs().is_empty() {
		assert!(Instant::now() < deadline, "background job was never reaped");
		execute::reap_background(&mut state);
		sleep(Duration::from_millis(50));
	}
}

#[test]
fn foreground_only_mode_demotes_background_requests() {
	let _guard = MODE_LOCK.lock().unwrap();
	signal::set_fg_only(true);

	let cmd = Command {
		program: "true".to_string(),
		background: true,
		..Default::default()
	};
	let mut state = ShellState::new();
	let result = execute::launch(&cmd, &mut state);
	signal::set_fg_only(false);
	result.unwrap();

	// Demoted to foreground: waited on, recorded, never registered
	assert!(state.jobs().is_empty());
	assert_eq!(state.last_status(), LastStatus::Exited(0));
}

#[test]
fn output_redirect_truncates_an_existing_file() {
	let out = tmp_path("truncate.out");
	fs::write(&out, "previous contents that should disappear\n").unwrap();

	let cmd = Command {
		program: "echo".to_string(),
		arguments: vec!["fresh".to_string()],
		outfile: Some(out.clone()),
		..Default::default()
	};
	let mut state = ShellState::new();
	execute::launch(&cmd, &mut state).unwrap();

	assert_eq!(fs::read_to_string(&out).unwrap(), "fresh\n");
	let _ = fs::remove_file(&out);
}

#[test]
fn expansion_reaches_the_child_argv() {
	let out = tmp_path("expand.out");
	std::env::set_var("MARSH_E2E_TOKEN", "from-the-environment");

	let cmd = Command {
		program: "echo".to_string(),
		arguments: vec!["MARSH_E2E_TOKEN".to_string()],
		outfile: Some(out.clone()),
		..Default::default()
	};
	let mut state = ShellState::new();
	execute::launch(&cmd, &mut state).unwrap();

	assert_eq!(fs::read_to_string(&out).unwrap(), "from-the-environment\n");
	let _ = fs::remove_file(&out);
}
