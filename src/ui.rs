//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Sequence input panel (wrapped, with cursor)
//! - Results panel: length, colored base counts, GC content gauge
//! - Status bar with mode and last message
//! - Help overlay

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::analysis::Base;
use crate::model::{AnalysisView, AppMode, AppState, Source};

/// Height of the input panel (including borders).
const INPUT_PANEL_HEIGHT: u16 = 7;
/// Height of the GC gauge (including borders).
const GAUGE_HEIGHT: u16 = 3;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;
/// Width of the count bars in the results panel.
const COUNT_BAR_WIDTH: usize = 30;

const HELP_LINES: &[&str] = &[
    "Type a DNA sequence (A, C, G, T) and press Enter.",
    "",
    "Backspace     delete last character",
    "Ctrl+L        clear input",
    ": or Esc      command mode",
    "",
    ":e <file>     load a text or FASTA file",
    ":c            clear input and results",
    ":h            show this help",
    ":q            quit",
    "",
    "Press any key to close.",
];

/// Color scheme for sequence characters.
pub trait ColorScheme {
    fn get_color(&self, c: char) -> Color;
}

/// DNA nucleotide color scheme.
pub struct DnaColorScheme;

impl ColorScheme for DnaColorScheme {
    fn get_color(&self, c: char) -> Color {
        match Base::from_char(c) {
            Some(Base::A) => Color::Red,
            Some(Base::C) => Color::Green,
            Some(Base::G) => Color::Blue,
            Some(Base::T) => Color::Magenta,
            None => Color::DarkGray,
        }
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_PANEL_HEIGHT),
            Constraint::Min(GAUGE_HEIGHT + 3),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    render_input_panel(frame, state, main_layout[0]);
    render_results_panel(frame, state, main_layout[1]);
    render_status_bar(frame, state, main_layout[2]);

    if state.show_help {
        render_help(frame, area);
    }
}

/// Renders the sequence input, colored and wrapped to the panel width.
fn render_input_panel(frame: &mut Frame, state: &AppState, area: Rect) {
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let is_editing = state.mode == AppMode::Insert && !state.show_help;
    let color_scheme = DnaColorScheme;

    let mut text = state.input.clone();
    if is_editing {
        text.push('_');
    }

    let options = textwrap::Options::new(inner_width).break_words(true);
    let visible_rows = area.height.saturating_sub(2) as usize;
    let wrapped = textwrap::wrap(&text, options);
    // Keep the end of the input (where the cursor is) in view
    let skip = wrapped.len().saturating_sub(visible_rows);

    let lines: Vec<Line> = wrapped
        .iter()
        .skip(skip)
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|c| {
                        let style = Style::default().fg(color_scheme.get_color(c));
                        Span::styled(c.to_string(), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let title = format!("Sequence [{} chars]", state.input.chars().count());
    let border_style = if is_editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Renders the statistics of the last analysis, or a welcome text.
fn render_results_panel(frame: &mut Frame, state: &AppState, area: Rect) {
    let Some(view) = &state.result else {
        render_welcome(frame, area);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(GAUGE_HEIGHT)])
        .split(area);

    let block = Block::default().borders(Borders::ALL).title("Results");
    let paragraph = Paragraph::new(result_lines(view, layout[0].width)).block(block);
    frame.render_widget(paragraph, layout[0]);

    let gc = view.analysis.gc_content;
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("GC Content"))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio((gc / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.2}%", gc));
    frame.render_widget(gauge, layout[1]);
}

/// Builds the text lines of the results panel.
fn result_lines(view: &AnalysisView, width: u16) -> Vec<Line<'static>> {
    let color_scheme = DnaColorScheme;
    let analysis = &view.analysis;
    let label = Style::default().add_modifier(Modifier::BOLD);

    let source = match &view.source {
        Source::Input => "typed sequence".to_string(),
        Source::File(name) => name.clone(),
    };

    let mut lines = vec![
        Line::from(vec![Span::styled("Source: ", label), Span::raw(source)]),
        Line::from(vec![
            Span::styled("Length of sequence: ", label),
            Span::raw(analysis.length.to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Base counts:", label)),
    ];

    for (base, count) in analysis.counts.iter() {
        let share = if analysis.length == 0 {
            0.0
        } else {
            count as f64 / analysis.length as f64
        };
        let bar_len = (share * COUNT_BAR_WIDTH as f64).round() as usize;
        let color = color_scheme.get_color(base.symbol());
        lines.push(Line::from(vec![
            Span::raw(format!("  {}: ", base)),
            Span::styled(
                format!("{:>10}", count),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {:>6.2}% ", share * 100.0)),
            Span::styled("█".repeat(bar_len), Style::default().fg(color)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(preview_line(&view.sequence, width.saturating_sub(2) as usize));
    lines
}

/// Colored preview of the start of the analysed sequence.
fn preview_line(sequence: &str, width: usize) -> Line<'static> {
    let color_scheme = DnaColorScheme;
    let prefix = "Preview: ";
    let room = width.saturating_sub(prefix.len());
    let total = sequence.chars().count();

    let mut spans = vec![Span::styled(
        prefix,
        Style::default().add_modifier(Modifier::BOLD),
    )];
    let shown = if total > room { room.saturating_sub(1) } else { total };
    spans.extend(sequence.chars().take(shown).map(|c| {
        Span::styled(
            c.to_ascii_uppercase().to_string(),
            Style::default().fg(color_scheme.get_color(c)),
        )
    }));
    if shown < total {
        spans.push(Span::raw("…"));
    }
    Line::from(spans)
}

fn render_welcome(frame: &mut Frame, area: Rect) {
    let title = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Welcome to DNA Sequence Analyzer", title)),
        Line::from(""),
        Line::from("Type a sequence and press Enter, or load a file with :e <file>."),
        Line::from(""),
        Line::from("You'll get information about:"),
        Line::from("• Sequence length"),
        Line::from("• Base counts (A, C, G, T)"),
        Line::from("• GC content percentage"),
    ];
    let block = Block::default().borders(Borders::ALL).title("Results");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let (mode_str, command_str) = match &state.mode {
        AppMode::Insert => ("INSERT", String::new()),
        AppMode::Command(cmd) => ("COMMAND", format!(":{}", cmd)),
    };

    let message = state.status_message.as_deref().unwrap_or("");

    let left_content = if command_str.is_empty() {
        format!(" {} | {} ", mode_str, message)
    } else {
        format!(" {} | {} ", mode_str, command_str)
    };
    let right_content = " :h help ";

    let left_len = left_content.chars().count();
    let status_line = Line::from(vec![
        Span::styled(
            left_content,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left_len + right_content.len())),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            right_content,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}

/// Renders the help overlay centered on `area`.
fn render_help(frame: &mut Frame, area: Rect) {
    let width = (HELP_LINES.iter().map(|l| l.len()).max().unwrap_or(0) as u16 + 4).min(area.width);
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    let popup = centered_rect(width, height, area);

    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(*l)).collect();
    let block = Block::default().borders(Borders::ALL).title("Help");

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Returns a rectangle of the given size centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analysis;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_dna_colors() {
        let scheme = DnaColorScheme;
        assert_eq!(scheme.get_color('A'), Color::Red);
        assert_eq!(scheme.get_color('a'), Color::Red); // Case insensitive
        assert_eq!(scheme.get_color('C'), Color::Green);
        assert_eq!(scheme.get_color('G'), Color::Blue);
        assert_eq!(scheme.get_color('T'), Color::Magenta);
        assert_eq!(scheme.get_color('N'), Color::DarkGray);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect(20, 10, area), Rect::new(40, 20, 20, 10));
        assert_eq!(centered_rect(200, 10, area), Rect::new(0, 20, 100, 10));
    }

    #[test]
    fn test_preview_truncates() {
        let line = preview_line("ACGTACGTACGT", 15);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Preview: ACGTA…");
    }

    #[test]
    fn test_render_welcome() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = AppState::new();
        terminal.draw(|frame| render(frame, &state)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Welcome to DNA Sequence Analyzer"));
        assert!(text.contains("INSERT"));
    }

    #[test]
    fn test_render_results() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut state = AppState::new();
        state.result = Some(AnalysisView {
            analysis: Analysis::from_sequence("AAGCTT").unwrap(),
            source: Source::Input,
            sequence: "AAGCTT".to_string(),
        });
        terminal.draw(|frame| render(frame, &state)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Length of sequence: 6"));
        assert!(text.contains("33.33%"));
    }
}
