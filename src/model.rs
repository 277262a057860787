//! Application state for the interactive analyzer.
//!
//! All state the terminal front end needs lives in [`AppState`], which is
//! passed explicitly to the event handler and the renderer:
//! - The sequence input buffer
//! - The last successful analysis and where it came from
//! - Input mode and status line

use std::path::Path;

use log::{debug, info, warn};

use crate::analysis::Analysis;
use crate::fasta::parse_sequence_file;

/// Status shown when an input fails validation.
pub const INVALID_SEQUENCE_MESSAGE: &str =
    "Invalid DNA sequence. Only A, C, G, and T are allowed.";

/// Where the analysed sequence came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Typed into the input panel or passed with `--sequence`
    Input,
    /// Loaded from a file (file name only)
    File(String),
}

/// The latest successful analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    /// The statistics
    pub analysis: Analysis,
    /// Origin of the sequence
    pub source: Source,
    /// The analysed sequence, for the preview line
    pub sequence: String,
}

/// Application mode for handling different input states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Typing a sequence into the input panel
    #[default]
    Insert,
    /// Command input mode (after pressing ':' or Esc)
    Command(String),
}

/// The complete application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Sequence being typed
    pub input: String,
    /// Last successful analysis
    pub result: Option<AnalysisView>,
    /// Current application mode
    pub mode: AppMode,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
}

impl AppState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self {
            status_message: Some("Ready".to_string()),
            ..Self::default()
        }
    }

    /// Appends a character to the input buffer.
    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Removes the last character of the input buffer.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Clears the input buffer.
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Analyses the input buffer.
    ///
    /// Surrounding whitespace is ignored and an empty input does nothing.
    /// An invalid sequence keeps the previous result.
    pub fn analyze_input(&mut self) {
        let sequence = self.input.trim().to_string();
        if sequence.is_empty() {
            return;
        }
        self.analyze(sequence, Source::Input);
    }

    /// Reads a sequence file and analyses its content.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        info!("Loading sequence file {}", path.display());

        match parse_sequence_file(path) {
            Ok(sequence) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.analyze(sequence, Source::File(name));
            }
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                self.status_message = Some(format!("Error reading file: {}", e));
            }
        }
    }

    fn analyze(&mut self, sequence: String, source: Source) {
        match Analysis::from_sequence(&sequence) {
            Ok(analysis) => {
                debug!(
                    "Analysed {} bases, GC {:.2}%",
                    analysis.length, analysis.gc_content
                );
                self.status_message = Some(match &source {
                    Source::Input => format!("Analyzed sequence of length {}", analysis.length),
                    Source::File(name) => format!("Analyzed file: {}", name),
                });
                self.result = Some(AnalysisView {
                    analysis,
                    source,
                    sequence,
                });
            }
            Err(e) => {
                debug!("Rejected sequence: {}", e);
                self.status_message = Some(INVALID_SEQUENCE_MESSAGE.to_string());
            }
        }
    }

    /// Enters command mode.
    pub fn enter_command_mode(&mut self) {
        self.mode = AppMode::Command(String::new());
    }

    /// Handles a character input in command mode.
    pub fn command_input(&mut self, c: char) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            cmd.push(c);
        }
    }

    /// Handles backspace in command mode.
    pub fn command_backspace(&mut self) {
        if let AppMode::Command(ref mut cmd) = self.mode {
            if cmd.pop().is_none() {
                self.mode = AppMode::Insert;
            }
        }
    }

    /// Executes the current command.
    pub fn execute_command(&mut self) {
        if let AppMode::Command(cmd) = std::mem::take(&mut self.mode) {
            let cmd = cmd.trim();
            let (name, arg) = match cmd.split_once(char::is_whitespace) {
                Some((name, arg)) => (name, arg.trim()),
                None => (cmd, ""),
            };

            match name {
                "" => {}
                "q" | "quit" => self.should_quit = true,
                "h" | "help" => self.show_help = true,
                "c" | "clear" => {
                    self.clear_input();
                    self.result = None;
                    self.status_message = Some("Cleared".to_string());
                }
                "e" | "open" => {
                    if arg.is_empty() {
                        self.status_message = Some(format!("Usage: :{} <file>", name));
                    } else {
                        self.load_file(arg);
                    }
                }
                _ => {
                    self.status_message = Some(format!("Unknown command: {}", cmd));
                }
            }
        }
        self.mode = AppMode::Insert;
    }

    /// Cancels command mode and returns to insert mode.
    pub fn cancel_command(&mut self) {
        self.mode = AppMode::Insert;
    }

    /// Hides the help overlay.
    pub fn dismiss_help(&mut self) {
        self.show_help = false;
    }
}
