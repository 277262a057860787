//! # dnastat - DNA Sequence Analyzer
//!
//! Validates a DNA sequence and reports its length, per-base counts and
//! GC content, from the command line or an interactive terminal UI.
//!
//! ## Architecture
//!
//! - `analysis`: validation, base counting and GC content (pure functions)
//! - `fasta`: reading a sequence from a plain text or FASTA file
//! - `report`: text/TSV output for the command line mode
//! - `model`: application state of the interactive mode
//! - `event`: keyboard event handling
//! - `ui`: TUI rendering with ratatui
//! - `controller`: terminal setup and the event loop
//!
//! ## Example
//!
//! ```
//! use dnastat::analysis::{is_valid_sequence, Analysis};
//!
//! assert!(is_valid_sequence("acgt"));
//! let analysis = Analysis::from_sequence("AGCT").unwrap();
//! assert_eq!(analysis.length, 4);
//! assert_eq!(analysis.gc_content, 50.0);
//! ```

pub mod analysis;
pub mod controller;
pub mod event;
pub mod fasta;
pub mod model;
pub mod report;
pub mod ui;
