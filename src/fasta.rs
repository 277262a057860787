//! Sequence file reader.
//!
//! Reads a nucleotide sequence from a plain text or FASTA file.
//! Header lines are dropped and every other line is trimmed and appended,
//! so multi-line and multi-record files collapse into one sequence.
//!
//! ## Accepted input
//!
//! ```text
//! >optional header, ignored
//! ACGTACGTACGT
//! TGCATGCA
//! ```
//!
//! The reader does not check the alphabet; validate the result with
//! [`crate::analysis::is_valid_sequence`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while reading a sequence file.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sequence file operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// Reads the sequence stored in a plain text or FASTA file.
///
/// Fails if the file cannot be opened or read in full (missing file,
/// permission denied, directory, non UTF-8 content). No partial sequence
/// is returned on failure.
///
/// # Examples
///
/// ```no_run
/// use dnastat::fasta::parse_sequence_file;
///
/// let sequence = parse_sequence_file("sample_dna.txt").unwrap();
/// println!("Loaded {} characters", sequence.len());
/// ```
pub fn parse_sequence_file<P: AsRef<Path>>(path: P) -> ReadResult<String> {
    let file = File::open(path)?;
    parse_sequence(BufReader::new(file))
}

/// Reads the sequence from any reader.
///
/// `\n`, `\r\n` and a bare `\r` all end a line.
pub fn parse_sequence<R: Read>(mut reader: R) -> ReadResult<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let sequence = content
        .split(['\r', '\n'])
        // Header: only a '>' in the very first column counts
        .filter(|line| !line.starts_with('>'))
        .map(str::trim)
        .collect();

    Ok(sequence)
}
