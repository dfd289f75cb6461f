//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Info panel with the loaded sequence's metadata
//! - Content panel showing the active menu, prompt, or result view
//! - Status bar with mode and messages
//!
//! Sequence results are wrapped to the panel width and colored per base.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::session::{sequence_info_line, AppMode, AppState, PromptField};

/// Height of the sequence-info panel (including borders).
const INFO_PANEL_HEIGHT: u16 = 3;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;

/// Color scheme for sequence characters.
pub trait ColorScheme {
    fn get_color(&self, c: char) -> Color;
}

/// Nucleotide color scheme; uracil shares thymine's color.
pub struct NucleotideColorScheme;

impl ColorScheme for NucleotideColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            'A' => Color::Red,
            'C' => Color::Green,
            'G' => Color::Yellow,
            'T' | 'U' => Color::Blue,
            _ => Color::DarkGray,
        }
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INFO_PANEL_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    render_info_panel(frame, state, main_layout[0]);

    match &state.mode {
        AppMode::Menu(_) => render_menu(frame, state, main_layout[1]),
        AppMode::Prompt(field, buffer) => render_prompt(frame, *field, buffer, main_layout[1]),
        AppMode::Results => render_results(frame, state, main_layout[1]),
    }

    render_status_bar(frame, state, main_layout[2]);
}

/// Renders the sequence-info panel.
fn render_info_panel(frame: &mut Frame, state: &AppState, area: Rect) {
    let info = match &state.sequence {
        Some(seq) => sequence_info_line(seq),
        None => "No sequence loaded yet".to_string(),
    };

    let block = Block::default().borders(Borders::ALL).title("Sequence");
    let paragraph = Paragraph::new(Line::from(info)).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the active menu with its numbered items.
fn render_menu(frame: &mut Frame, state: &AppState, area: Rect) {
    let title = match state.mode {
        AppMode::Menu(kind) => kind.title(),
        _ => "",
    };

    let mut lines: Vec<Line> = Vec::new();
    for (idx, item) in state.menu_items().iter().enumerate() {
        let text = format!(" {}. {}", idx + 1, item);
        let style = if idx == state.selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    let block = Block::default().borders(Borders::ALL).title(title);
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the active prompt with its question and input buffer.
fn render_prompt(frame: &mut Frame, field: PromptField, buffer: &str, area: Rect) {
    let lines = vec![
        Line::from(field.question()),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(buffer.to_string()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ]),
    ];

    let block = Block::default().borders(Borders::ALL).title("Input");
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Renders the result view: optional info line, then wrapped body lines.
fn render_results(frame: &mut Frame, state: &AppState, area: Rect) {
    let width = (area.width.saturating_sub(2)) as usize; // -2 for borders
    let mut lines: Vec<Line> = Vec::new();

    if let Some(info) = &state.result_info {
        lines.push(Line::from(info.clone()));
        lines.push(Line::from(""));
    }

    let scheme = NucleotideColorScheme;
    for wrapped in wrap_result_lines(&state.result, width) {
        if state.result_is_sequence {
            let spans: Vec<Span> = wrapped
                .chars()
                .map(|c| Span::styled(c.to_string(), Style::default().fg(scheme.get_color(c))))
                .collect();
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(wrapped));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(state.result_title.clone());
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((state.scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Renders the status bar at the bottom.
fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let mode_str = match &state.mode {
        AppMode::Menu(_) => "MENU",
        AppMode::Prompt(_, _) => "INPUT",
        AppMode::Results => "RESULTS",
    };

    let position_info = match &state.mode {
        AppMode::Menu(_) => {
            format!("Option {}/{} ", state.selected + 1, state.menu_items().len())
        }
        AppMode::Prompt(_, _) => "Enter to submit, Esc to cancel ".to_string(),
        AppMode::Results => "j/k scroll, any key returns ".to_string(),
    };

    let message = state.status_message.as_deref().unwrap_or("");
    let left_content = format!(" {} | {} ", mode_str, message);

    let left_len = left_content.chars().count();
    let status_line = Line::from(vec![
        Span::styled(
            left_content,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::styled(
            " ".repeat(
                (area.width as usize).saturating_sub(left_len + position_info.chars().count()),
            ),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            position_info,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(status_line);
    frame.render_widget(paragraph, area);
}

/// Wraps each result line to the given display width.
///
/// Sequence data has no spaces, so long lines are hard-broken.
fn wrap_result_lines(lines: &[String], width: usize) -> Vec<String> {
    if width == 0 {
        return lines.to_vec();
    }

    let mut wrapped = Vec::new();
    for line in lines {
        if line.is_empty() {
            wrapped.push(String::new());
            continue;
        }
        for piece in textwrap::wrap(line, width) {
            wrapped.push(piece.into_owned());
        }
    }
    wrapped
}
