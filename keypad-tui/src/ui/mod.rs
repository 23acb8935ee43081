//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Render functions have no side effects beyond drawing to the frame.

use crate::app::keypad::{self, Button, ButtonKind};
use crate::app::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Split the screen into display, keypad and status bar
fn screen_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Trace + readout
            Constraint::Min(7),    // Keypad grid
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    [chunks[0], chunks[1], chunks[2]]
}

/// Area the keypad grid occupies for a given screen size
///
/// Shared with the event loop so mouse clicks are hit-tested against the
/// same rectangles that were drawn.
pub fn keypad_area(area: Rect) -> Rect {
    screen_layout(area)[1]
}

/// Render the application UI
///
/// Main rendering entry point.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();
    let [display, pad, status] = screen_layout(area);

    render_display(frame, display, state);
    render_keypad(frame, pad, state);
    render_status_bar(frame, status, state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Keep the rightmost `width` characters, marking the cut on the left
///
/// The least significant digits are the ones being typed, so they stay.
pub fn fit_display(text: &str, width: usize, unicode: bool) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }

    let marker = if unicode { "…" } else { "..." };
    let marker_len = marker.chars().count();
    if width <= marker_len {
        return text.chars().skip(len - width).collect();
    }

    let keep = width - marker_len;
    let tail: String = text.chars().skip(len - keep).collect();
    format!("{}{}", marker, tail)
}

/// Trace line above the main readout
fn render_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let calc = &state.calculator;
    let block = Block::default().borders(Borders::ALL).title(" Keypad ");
    let inner_width = block.inner(area).width as usize;
    let unicode = state.config.unicode_enabled;

    let trace = fit_display(&calc.trace.render(), inner_width, unicode);
    let readout = fit_display(calc.display(), inner_width, unicode);

    let trace_style = if state.config.colors_enabled {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
    };
    let mut readout_style = Style::default().add_modifier(Modifier::BOLD);
    if calc.readout.is_error() && state.config.colors_enabled {
        readout_style = readout_style.fg(Color::Red);
    }

    let lines = vec![
        Line::from(Span::styled(trace, trace_style)),
        Line::from(Span::styled(readout, readout_style)),
    ];

    let paragraph = Paragraph::new(lines).block(block).alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}

/// Button caption, with ASCII stand-ins when unicode is off
fn button_label(button: &Button, unicode: bool) -> &'static str {
    if unicode {
        return button.label;
    }
    match button.label {
        "√" => "sqrt",
        "x²" => "x^2",
        "÷" => "/",
        "×" => "*",
        other => other,
    }
}

fn button_style(state: &AppState, button: &Button) -> Style {
    let highlighted = state.is_highlighted(button.command);

    if !state.config.colors_enabled {
        return if highlighted {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
    }

    let color = match button.kind() {
        ButtonKind::Memory => Color::Magenta,
        ButtonKind::Clear => Color::Red,
        ButtonKind::Function => Color::Cyan,
        ButtonKind::Digit => Color::White,
        ButtonKind::Operator => Color::Yellow,
    };

    if highlighted {
        Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    }
}

/// Draw every keypad button into its grid rectangle
fn render_keypad(frame: &mut Frame, area: Rect, state: &AppState) {
    for button in keypad::BUTTONS.iter() {
        let rect = keypad::button_rect(area, button);
        if rect.width == 0 || rect.height == 0 {
            continue;
        }

        let style = button_style(state, button);
        let label = button_label(button, state.config.unicode_enabled);

        // Borders only once a button is tall enough to keep its caption
        let widget = if rect.height >= 3 {
            let top_pad = (rect.height - 2).saturating_sub(1) / 2;
            let mut lines = vec![Line::from(""); top_pad as usize];
            lines.push(Line::from(label));
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).border_style(style))
        } else {
            Paragraph::new(label)
        };

        frame.render_widget(widget.style(style).alignment(Alignment::Center), rect);
    }
}

/// Render status bar with memory indicator and hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let calc = &state.calculator;

    let memory = if calc.memory.is_set() { "M" } else { " " };
    let pending = calc.pending.map(|op| op.symbol()).unwrap_or(" ");
    let message = state.status.message.as_deref().unwrap_or("Ready");
    let mouse = if state.mouse_enabled { "m: Mouse off" } else { "m: Mouse on" };

    let accent = if state.config.colors_enabled {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::styled(memory, accent),
        Span::raw(" "),
        Span::styled(pending, accent),
        Span::raw(" | "),
        Span::raw(message),
        Span::raw(" | "),
        Span::raw(format!("F1: Help | {} | q: Quit", mouse)),
    ]);

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect, _state: &AppState) {
    let popup_area = centered_rect(70, 80, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("  0-9 .        - Digits and decimal point"),
        Line::from("  + - * x /    - Operators"),
        Line::from("  Enter =      - Equals"),
        Line::from("  Backspace    - Clear"),
        Line::from("  ( )          - Parentheses"),
        Line::from("  s c t        - sin cos tan (degrees)"),
        Line::from("  r w          - Square root, square"),
        Line::from("  l n e        - log, ln, e^x"),
        Line::from("  ! i          - Factorial, 1/x"),
        Line::from("  F5 F6 F7 F8  - MC MR M- M+"),
        Line::from(""),
        Line::from("  m            - Toggle mouse"),
        Line::from("  F1           - Toggle help"),
        Line::from("  q            - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
