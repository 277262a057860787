//! Report output for the command line mode.
//!
//! [`run`] is the whole command line pipeline: pick the input (file or
//! literal sequence), validate and analyse it, write the report.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::analysis::{Analysis, AnalysisError};
use crate::fasta::{parse_sequence_file, ReadError};

/// Layout of a written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human readable, one statistic per line
    #[default]
    Text,
    /// Tab separated header and value row
    Tsv,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Tsv => write!(f, "tsv"),
        }
    }
}

/// Where the command line takes its sequence from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceInput<'a> {
    /// A plain text or FASTA file
    File(&'a Path),
    /// A sequence given directly; surrounding whitespace is ignored
    Literal(&'a str),
}

/// Errors that can occur while producing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("No input: give a sequence FILE or --sequence")]
    NoInput,

    #[error("Error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error(transparent)]
    Invalid(#[from] AnalysisError),

    #[error("Failed to write report: {0}")]
    Write(#[from] io::Error),
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

impl<'a> SequenceInput<'a> {
    /// Picks the input from the command line options, the file first.
    pub fn from_options(
        file: Option<&'a Path>,
        sequence: Option<&'a str>,
    ) -> ReportResult<Self> {
        match (file, sequence) {
            (Some(path), _) => Ok(SequenceInput::File(path)),
            (None, Some(sequence)) => Ok(SequenceInput::Literal(sequence)),
            (None, None) => Err(ReportError::NoInput),
        }
    }

    /// Returns the raw sequence, reading the file if needed.
    pub fn read(&self) -> ReportResult<String> {
        match self {
            SequenceInput::File(path) => {
                parse_sequence_file(path).map_err(|source| ReportError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
            SequenceInput::Literal(sequence) => Ok(sequence.trim().to_string()),
        }
    }
}

/// Reads `input`, analyses it and writes the report to `out`.
///
/// Nothing is written when reading or validation fails.
pub fn run<W: Write>(
    input: SequenceInput<'_>,
    out: &mut W,
    format: ReportFormat,
) -> ReportResult<Analysis> {
    let sequence = input.read()?;
    let analysis = Analysis::from_sequence(&sequence)?;
    write_report(out, &analysis, format)?;
    out.flush()?;
    Ok(analysis)
}

/// Writes `analysis` to `out` in the requested layout.
///
/// GC content is rounded to two decimals here; the analysis keeps full
/// precision.
pub fn write_report<W: Write>(
    out: &mut W,
    analysis: &Analysis,
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => {
            writeln!(out, "Length of sequence: {}", analysis.length)?;
            let counts: Vec<String> = analysis
                .counts
                .iter()
                .map(|(base, count)| format!("{}: {}", base, count))
                .collect();
            writeln!(out, "Base counts: {}", counts.join(", "))?;
            writeln!(out, "GC Content: {:.2}%", analysis.gc_content)?;
        }
        ReportFormat::Tsv => {
            writeln!(out, "length\tA\tC\tG\tT\tgc_content")?;
            let counts: Vec<String> = analysis
                .counts
                .iter()
                .map(|(_, count)| count.to_string())
                .collect();
            writeln!(
                out,
                "{}\t{}\t{:.2}",
                analysis.length,
                counts.join("\t"),
                analysis.gc_content
            )?;
        }
    }
    Ok(())
}
