//! TUI rendering with ratatui
//!
//! The game screen: root word up top, found words below, an entry line, and
//! a modal dialog when a word is rejected.

use super::app::{App, InputMode};
use crate::output::formatters::circled;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Found words
            Constraint::Percentage(35), // Round panel
        ])
        .split(chunks[1]);

    render_found_words(f, app, main_chunks[0]);
    render_round_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, chunks[3]);

    if app.error.is_some() {
        render_error_dialog(f, app);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.session.root_word().to_uppercase())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word Scramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_found_words(f: &mut Frame, app: &App, area: Rect) {
    // Newest first, as the session keeps them
    let items: Vec<ListItem> = app
        .session
        .used_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    circled(word.chars().count()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::raw(word.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Found Words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_round_panel(f: &mut Frame, app: &App, area: Rect) {
    let words_found = app.session.used_words().len();

    let mut content = Vec::new();
    if app.session.config().scoring {
        content.push(Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                app.session.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    content.push(Line::from(format!("Words: {words_found}")));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Round ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let style = match app.input_mode {
        InputMode::Entry => Style::default().fg(Color::Green),
        InputMode::ErrorDialog => Style::default().fg(Color::DarkGray),
    };

    let input = Paragraph::new(format!("> {}_", app.input_buffer)).block(
        Block::default()
            .title(" Enter a word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(style),
    );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let status = Paragraph::new("Enter: submit  ·  Ctrl-N: new round  ·  Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}

fn render_error_dialog(f: &mut Frame, app: &App) {
    let Some(rejection) = app.error else {
        return;
    };

    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);

    let dialog = Paragraph::new(vec![
        Line::from(""),
        Line::from(rejection.message()),
        Line::from(""),
        Line::from(Span::styled(
            "[ Ok ]",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .title(format!(" {} ", rejection.title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Red)),
    );
    f.render_widget(dialog, area);
}

/// Rect centered in `r`, sized as percentages of it
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}
