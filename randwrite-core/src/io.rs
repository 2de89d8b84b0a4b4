use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::{fs, io};

/// Reads a text file and returns its full contents as a `Vec<char>`.
///
/// - Reads the entire file into memory
/// - Keeps every character, newlines included: the model operates on raw
///   character units
pub fn read_content<P: AsRef<Path>>(filename: P) -> io::Result<Vec<char>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.chars().collect())
}

/// Writes generated text to a file, creating or truncating it.
pub fn write_content<P: AsRef<Path>>(filename: P, text: &str) -> io::Result<()> {
	fs::write(filename, text)
}

/// Lists all files with a given extension in a directory.
///
/// Returns sorted file stems only (no paths, no extensions).
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(OsStr::new(extension)) {
			if let Some(stem) = path.file_stem() {
				files.push(stem.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}
