//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Clue, LetterState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn state_style(state: LetterState) -> Style {
    let bg = match state {
        LetterState::Correct => Color::LightGreen,
        LetterState::Present => Color::LightYellow,
        LetterState::Absent => Color::Gray,
    };
    Style::new()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// One clue as a row of colored letter tiles
fn clue_line(clue: &Clue) -> Line<'static> {
    let spans: Vec<Span> = clue
        .cells()
        .flat_map(|(letter, state)| {
            [
                Span::styled(
                    format!(" {} ", char::from(letter.to_ascii_uppercase())),
                    state_style(state),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDS VIRTUOSO")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.state();
    let mut lines: Vec<Line> = Vec::with_capacity(state.history().len() * 2 + 2);

    for clue in state.history() {
        lines.push(clue_line(clue));
        lines.push(Line::default());
    }

    if let Some(victory) = &app.victory {
        lines.push(clue_line(&Clue::solved(&victory.secret)));
    } else if lines.is_empty() {
        lines.push(Line::from("No guesses yet"));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Clues ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_pool(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_pool(f: &mut Frame, app: &App, area: Rect) {
    let letters = app.session.state().pool().to_uppercase_string();
    let pool = Paragraph::new(Line::from(Span::styled(
        letters,
        Style::default().fg(Color::Black).bg(Color::LightCyan),
    )))
    .block(
        Block::default()
            .title(" Not in the word ")
            .borders(Borders::ALL),
    );
    f.render_widget(pool, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (" Correct! | Enter or 'q' to leave ", "", Color::Green),
        InputMode::Guessing => (
            " Input a 5-letter word | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.state();
    let status = format!(
        "Attempt: {} | Elapsed: {}s | Esc: Quit",
        state.attempt(),
        state.elapsed_secs()
    );
    let status = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
