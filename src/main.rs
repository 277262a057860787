//! dnastat - DNA Sequence Analyzer
//!
//! Reports length, base counts and GC content of a DNA sequence.
//!
//! ## Usage
//!
//! ```bash
//! dnastat                          # interactive mode
//! dnastat sample.fasta             # interactive mode, file pre-loaded
//! dnastat sample.fasta -o -        # print the report to stdout
//! dnastat -s ACGTTGCA -o - -F tsv  # analyse a literal sequence as TSV
//! ```
//!
//! ## Input
//!
//! Plain text or FASTA. Header lines (starting with `>`) are skipped and the
//! remaining lines are joined into one sequence.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env, Target};
use log::{debug, info};

use dnastat::controller::run_app;
use dnastat::model::AppState;
use dnastat::report::{run, ReportFormat, SequenceInput};

/// Report layout for command line output
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormatArg {
    /// One statistic per line
    Text,
    /// Tab separated header and values
    Tsv,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Text => ReportFormat::Text,
            ReportFormatArg::Tsv => ReportFormat::Tsv,
        }
    }
}

/// dnastat - Validate a DNA sequence and report length, base counts and GC content
///
/// When run without -o/--output, opens an interactive terminal analyzer.
/// With -o/--output, runs in CLI mode and writes the report to a file (or stdout with "-").
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sequence file to analyse (plain text or FASTA)
    #[arg(conflicts_with = "sequence")]
    file: Option<PathBuf>,

    /// Sequence to analyse, given directly
    #[arg(short = 's', long = "sequence")]
    sequence: Option<String>,

    /// Output file (enables CLI mode). Use "-" for stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Report layout in CLI mode
    #[arg(short = 'F', long = "report-format", value_enum, default_value = "text")]
    report_format: ReportFormatArg,

    /// Write log messages to this file (filter with RUST_LOG, default: warn)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Sets up logging.
///
/// CLI mode logs to stderr. The interactive mode owns the terminal, so it
/// logs to `log_file`, or to a temporary file when only RUST_LOG is set.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let env = Env::default().default_filter_or("warn");
    let mut builder = Builder::from_env(env);

    let path = match log_file {
        Some(path) => Some(path.to_path_buf()),
        None if interactive => {
            if std::env::var_os("RUST_LOG").is_none() {
                return Ok(());
            }
            let name = format!("dnastat-{:08x}.log", rand::random::<u32>());
            Some(std::env::temp_dir().join(name))
        }
        None => None,
    };

    if let Some(path) = &path {
        let file = File::create(path)
            .with_context(|| format!("Cannot create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;

    if let Some(path) = path {
        info!("Logging to {}", path.display());
    }
    Ok(())
}

/// Runs CLI mode: read the sequence, analyse it and write the report.
fn run_cli_mode(
    file_path: Option<&Path>,
    sequence: Option<&str>,
    output: &str,
    format: ReportFormat,
) -> Result<()> {
    let input = SequenceInput::from_options(file_path, sequence)?;
    info!("Analysing {:?}", input);

    let analysis = if output == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        run(input, &mut handle, format)?
    } else {
        let mut file = File::create(output)
            .with_context(|| format!("Cannot create output file {}", output))?;
        let analysis = run(input, &mut file, format)?;
        eprintln!("Wrote {} report to {}", format, output);
        analysis
    };
    debug!("Analysis: {:?}", analysis);

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let interactive = args.output.is_none();

    init_logging(args.log_file.as_deref(), interactive)?;

    if let Some(output) = &args.output {
        return run_cli_mode(
            args.file.as_deref(),
            args.sequence.as_deref(),
            output,
            args.report_format.into(),
        );
    }

    let mut state = AppState::new();
    if let Some(path) = &args.file {
        state.load_file(path);
    } else if let Some(sequence) = args.sequence {
        state.input = sequence;
        state.analyze_input();
    }

    run_app(state)
}
