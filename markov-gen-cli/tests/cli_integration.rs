//! Integration tests for the markov-gen binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GETTYSBURG: &str = "Four score and seven years ago our fathers brought forth on this \
continent a new nation, conceived in liberty, and dedicated to the proposition that all men \
are created equal.";

fn corpus(text: &str) -> (TempDir, String) {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("corpus.txt");
	fs::write(&path, text).unwrap();
	(dir, path.to_string_lossy().to_string())
}

#[test]
fn test_generate_from_file() {
	let (_dir, path) = corpus(GETTYSBURG);
	let mut cmd = Command::cargo_bin("markov-gen").unwrap();
	cmd.arg(&path).arg("--seed").arg("7");

	// Every walk ends on the last pair of the source
	cmd.assert()
		.success()
		.stdout(predicate::str::ends_with("created equal.\n"));
}

#[test]
fn test_generate_from_stdin() {
	let mut cmd = Command::cargo_bin("markov-gen").unwrap();
	cmd.arg("-").write_stdin("hello world");

	cmd.assert().success().stdout("hello world\n");
}

#[test]
fn test_start_and_max_words() {
	let (_dir, path) = corpus(GETTYSBURG);
	let mut cmd = Command::cargo_bin("markov-gen").unwrap();
	cmd.arg(&path)
		.arg("--start")
		.arg("Four score")
		.arg("--max-words")
		.arg("4");

	cmd.assert().success().stdout("Four score and seven\n");
}

#[test]
fn test_same_seed_same_output() {
	let (_dir, path) = corpus(GETTYSBURG);
	let run = || {
		let output = Command::cargo_bin("markov-gen")
			.unwrap()
			.args([path.as_str(), "--seed", "42", "-n", "3"])
			.output()
			.unwrap();
		assert!(output.status.success());
		output.stdout
	};

	assert_eq!(run(), run());
}

#[test]
fn test_too_short_input_fails() {
	let mut cmd = Command::cargo_bin("markov-gen").unwrap();
	cmd.arg("-").write_stdin("alone");

	cmd.assert()
		.failure()
		.stderr(predicate::str::contains("input text too short to build a model"));
}

#[test]
fn test_missing_file_fails() {
	let mut cmd = Command::cargo_bin("markov-gen").unwrap();
	cmd.arg("does-not-exist.txt");

	cmd.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to open does-not-exist.txt"));
}

#[test]
fn test_stats_output() {
	let mut cmd = Command::cargo_bin("markov-gen").unwrap();
	cmd.arg("-")
		.arg("--stats")
		.write_stdin("hi there mary hi there juanita");

	cmd.assert()
		.success()
		.stdout(predicate::str::contains("\"branching_keys\": 1"))
		.stdout(predicate::str::contains("\"juanita\""));
}
