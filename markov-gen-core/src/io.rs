use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::ModelResult;

/// Reads a whole text file into memory.
pub fn read_file<P: AsRef<Path>>(filename: P) -> ModelResult<String> {
	Ok(fs::read_to_string(filename)?)
}

/// Reads everything from `reader` (stdin, a socket, ...).
pub fn read_all<R: Read>(mut reader: R) -> ModelResult<String> {
	let mut contents = String::new();
	reader.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Splits a text on whitespace.
///
/// Punctuation stays attached and case is preserved: `"end."` and `"End"`
/// are distinct words.
pub fn tokenize(text: &str) -> Vec<&str> {
	text.split_whitespace().collect()
}

/// Joins generated words into displayable text, separated by single spaces.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
	words.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(" ")
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/gettysburg.txt"` → `"gettysburg"`
/// - `"gettysburg.txt"` → `"gettysburg"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> std::io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> std::io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}
