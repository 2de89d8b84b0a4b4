use std::error::Error;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use clap::Parser;

use randwrite_core::io;
use randwrite_core::model::frequency_table::FrequencyTable;
use randwrite_core::model::generator::generate_text;

/// Write pseudo-random text that statistically resembles a source text,
/// using an order-k Markov model over characters.
#[derive(Parser, Debug)]
#[command(version, about = "Write pseudo-random text imitating a source text", long_about = None)]
struct Args {
	/// Source text file the model is built from
	source: PathBuf,

	/// Destination file for the generated text
	output: PathBuf,

	/// Order of the model: how many characters of context each draw uses
	/// (0 means context-free uniform sampling)
	k: usize,

	/// Number of characters to generate
	length: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();

	let args = Args::parse();
	let text = run(&args)?;

	log::info!("wrote {} characters to {}", text.chars().count(), args.output.display());
	Ok(())
}

/// Runs the full pipeline: read, validate, build, generate, write.
///
/// Returns the generated text, which has also been written to `args.output`.
///
/// # Errors
/// - The source is not an existing regular readable file
/// - `k` is not strictly smaller than the source length in characters
/// - The destination cannot be created or written
fn run(args: &Args) -> Result<String, Box<dyn Error>> {
	let content = read_source(&args.source)?;
	validate_order(args.k, content.len())?;
	check_destination(&args.output)?;

	let table = FrequencyTable::build(&content, args.k);
	if args.k > 0 {
		log::info!(
			"model built: {} seeds, {} observed transitions",
			table.seed_count(),
			table.observations()
		);
	}

	let text = generate_text(&content, &table, args.k, args.length, &mut rand::rng());
	io::write_content(&args.output, &text)?;

	Ok(text)
}

/// Reads the source file after checking it is a regular file.
fn read_source(path: &Path) -> Result<Vec<char>, Box<dyn Error>> {
	if !path.is_file() {
		return Err(format!("source {} is not a regular readable file", path.display()).into());
	}
	Ok(io::read_content(path)?)
}

/// Rejects any order that leaves no room for a seed and its follower.
///
/// The inequality is strict: at `k == content_len` the seed start range
/// `[0, content_len - k)` would already be empty and sampling could not
/// begin.
fn validate_order(k: usize, content_len: usize) -> Result<(), String> {
	if k >= content_len {
		return Err(format!(
			"k must be smaller than the source length (k = {k}, source = {content_len} characters)"
		));
	}
	Ok(())
}

/// Verifies the destination can be created and written before any model work.
fn check_destination(path: &Path) -> Result<(), Box<dyn Error>> {
	OpenOptions::new()
		.write(true)
		.create(true)
		.truncate(false)
		.open(path)
		.map(|_| ())
		.map_err(|e| format!("cannot write to {}: {e}", path.display()).into())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn order_must_stay_strictly_below_content_length() {
		assert!(validate_order(3, 11).is_ok());
		assert!(validate_order(10, 11).is_ok());
		assert!(validate_order(11, 11).is_err());
		assert!(validate_order(100, 11).is_err());
		assert!(validate_order(0, 0).is_err());
	}

	#[test]
	fn missing_source_is_rejected() {
		assert!(read_source(Path::new("no/such/file.txt")).is_err());
	}

	#[test]
	fn directory_source_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		assert!(read_source(dir.path()).is_err());
	}

	#[test]
	fn pipeline_writes_exactly_the_requested_length() {
		let dir = tempfile::tempdir().unwrap();
		let source = dir.path().join("source.txt");
		let output = dir.path().join("output.txt");
		fs::write(&source, "simple test").unwrap();

		let args = Args {
			source,
			output: output.clone(),
			k: 3,
			length: 10,
		};

		let text = run(&args).unwrap();
		assert_eq!(text.chars().count(), 10);
		assert_eq!(fs::read_to_string(&output).unwrap(), text);
	}

	#[test]
	fn zero_length_produces_an_empty_file() {
		let dir = tempfile::tempdir().unwrap();
		let source = dir.path().join("source.txt");
		let output = dir.path().join("output.txt");
		fs::write(&source, "simple test").unwrap();

		let args = Args {
			source,
			output: output.clone(),
			k: 0,
			length: 0,
		};

		assert_eq!(run(&args).unwrap(), "");
		assert_eq!(fs::read_to_string(&output).unwrap(), "");
	}

	#[test]
	fn order_equal_to_source_length_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		let source = dir.path().join("source.txt");
		fs::write(&source, "simple test").unwrap();

		let args = Args {
			source,
			output: dir.path().join("output.txt"),
			k: 11,
			length: 100,
		};

		assert!(run(&args).is_err());
	}

	#[test]
	fn unwritable_destination_is_rejected_before_generation() {
		let dir = tempfile::tempdir().unwrap();
		let source = dir.path().join("source.txt");
		fs::write(&source, "simple test").unwrap();

		let args = Args {
			source,
			// Parent directory does not exist
			output: dir.path().join("missing").join("output.txt"),
			k: 3,
			length: 10,
		};

		assert!(run(&args).is_err());
	}
}
