//! End-to-end checks: sequence files on disk through reading, analysis and reports.

use std::io::Write;

use tempfile::{tempdir, NamedTempFile};

use dnastat::analysis::{count_bases, gc_content, is_valid_sequence, Analysis, BaseCounts};
use dnastat::fasta::{parse_sequence_file, ReadError};
use dnastat::model::{AppState, Source, INVALID_SEQUENCE_MESSAGE};
use dnastat::report::{run, ReportError, ReportFormat, SequenceInput};

fn write_temp(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_fasta_file_header_dropped() {
    let file = write_temp(b">header\nACGT\nTGCA\n");
    let sequence = parse_sequence_file(file.path()).unwrap();
    assert_eq!(sequence, "ACGTTGCA");
}

#[test]
fn test_plain_text_file_with_crlf() {
    let file = write_temp(b"acgt\r\nGGCC\r\n");
    let sequence = parse_sequence_file(file.path()).unwrap();
    assert_eq!(sequence, "acgtGGCC");
    assert!(is_valid_sequence(&sequence));
    assert_eq!(count_bases(&sequence), BaseCounts::new(1, 3, 3, 1));
    assert_eq!(gc_content(&sequence), 75.0);
}

#[test]
fn test_multi_record_file_concatenated() {
    let file = write_temp(b">r1\nAAAA\n>r2\nTTTT\n>r3\nGC\n");
    let sequence = parse_sequence_file(file.path()).unwrap();
    assert_eq!(sequence, "AAAATTTTGC");

    let analysis = Analysis::from_sequence(&sequence).unwrap();
    assert_eq!(analysis.length, 10);
    assert_eq!(analysis.counts.total(), analysis.length);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = parse_sequence_file(dir.path().join("absent.fasta"));
    assert!(matches!(result, Err(ReadError::Io(_))));
}

#[test]
fn test_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let result = parse_sequence_file(dir.path());
    assert!(matches!(result, Err(ReadError::Io(_))));
}

#[test]
fn test_file_with_foreign_characters_is_read_but_invalid() {
    let file = write_temp(b">x\nACGN\n");
    let sequence = parse_sequence_file(file.path()).unwrap();
    assert_eq!(sequence, "ACGN");
    assert!(!is_valid_sequence(&sequence));
    assert!(Analysis::from_sequence(&sequence).is_err());
}

#[test]
fn test_report_from_file() {
    let file = write_temp(b">sample\nAAGC\nTT\n");
    let mut out = Vec::new();
    let analysis = run(SequenceInput::File(file.path()), &mut out, ReportFormat::Text).unwrap();

    assert_eq!(analysis.length, 6);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Length of sequence: 6\nBase counts: A: 2, C: 1, G: 1, T: 2\nGC Content: 33.33%\n"
    );
}

#[test]
fn test_app_state_loads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample_dna.txt");
    std::fs::write(&path, ">demo\nGGCC\nAATT\n").unwrap();

    let mut state = AppState::new();
    state.load_file(&path);

    let view = state.result.as_ref().unwrap();
    assert_eq!(view.source, Source::File("sample_dna.txt".to_string()));
    assert_eq!(view.analysis.length, 8);
    assert_eq!(view.analysis.gc_content, 50.0);
    assert_eq!(
        state.status_message.as_deref(),
        Some("Analyzed file: sample_dna.txt")
    );
}

#[test]
fn test_app_state_rejects_invalid_file() {
    let file = write_temp(b"hello\n");
    let mut state = AppState::new();
    state.load_file(file.path());

    assert!(state.result.is_none());
    assert_eq!(state.status_message.as_deref(), Some(INVALID_SEQUENCE_MESSAGE));
}

#[test]
fn test_report_from_mac_line_endings() {
    let file = write_temp(b">h\rACGT\rTGCA\r");
    let mut out = Vec::new();
    let analysis = run(SequenceInput::File(file.path()), &mut out, ReportFormat::Tsv).unwrap();

    assert_eq!(analysis.length, 8);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "length\tA\tC\tG\tT\tgc_content\n8\t2\t2\t2\t2\t50.00\n"
    );
}

#[test]
fn test_report_missing_file_names_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.fasta");
    let mut out = Vec::new();

    let err = run(SequenceInput::File(&path), &mut out, ReportFormat::Text).unwrap_err();
    assert!(matches!(err, ReportError::Read { .. }));
    assert!(err.to_string().contains("absent.fasta"));
    assert!(out.is_empty());
}

#[test]
fn test_report_invalid_file_content() {
    let file = write_temp(b">x\nACGN\n");
    let mut out = Vec::new();

    let err = run(SequenceInput::File(file.path()), &mut out, ReportFormat::Text).unwrap_err();
    assert!(matches!(err, ReportError::Invalid(_)));
    assert!(out.is_empty());
}

#[test]
fn test_file_takes_precedence_over_literal() {
    let file = write_temp(b"GGGG\n");
    let input = SequenceInput::from_options(Some(file.path()), Some("AAAA")).unwrap();
    let mut out = Vec::new();

    let analysis = run(input, &mut out, ReportFormat::Text).unwrap();
    assert_eq!(analysis.gc_content, 100.0);
}

#[test]
fn test_no_input_is_rejected() {
    assert!(matches!(
        SequenceInput::from_options(None, None),
        Err(ReportError::NoInput)
    ));
}
