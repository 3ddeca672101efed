//! TUI rendering with ratatui
//!
//! Board, letter availability, and solver hint panels for trainer mode.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

use super::app::{App, InputMode, MessageStyle};
use crate::core::WORD_LEN;

// Tile palette matching the familiar game colors
const EXACT: Color = Color::Rgb(106, 170, 100);
const PRESENT: Color = Color::Rgb(201, 180, 88);
const ABSENT: Color = Color::Rgb(120, 124, 126);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Solver panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_solver_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORD TRAINER - Play Mode")
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
    let mut lines = vec![Line::from("")];

    for entry in &app.history {
        let digits = entry.pattern.digits();
        let mut spans = vec![Span::raw("  ")];
        for (i, letter) in entry.guess.chars().enumerate() {
            let bg = match digits[i] {
                2 => EXACT,
                1 => PRESENT,
                _ => ABSENT,
            };
            spans.push(Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                Style::default()
                    .fg(Color::White)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(
                "  {} → {}",
                entry.candidates_before, entry.candidates_after
            ),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Empty rows up to the attempt budget
    for _ in app.history.len()..app.session.max_attempts() {
        let mut spans = vec![Span::raw("  ")];
        for _ in 0..WORD_LEN {
            spans.push(Span::styled(
                " · ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_solver_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),      // Hint
            Constraint::Min(6),         // Candidates / availability
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    render_hint(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_search_progress(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(ref hint) = app.hint {
        let bar_len = (hint.entropy * 3.0).min(18.0) as usize;
        let entropy_bar = "█".repeat(bar_len) + &"░".repeat(18_usize.saturating_sub(bar_len));

        vec![
            Line::from(vec![
                Span::raw("Solver picks: "),
                Span::styled(
                    hint.word.to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Entropy:  [{}] {:.3} bits", entropy_bar, hint.entropy)),
            Line::from(format!(
                "Expected: {:.1} candidates remain",
                hint.expected_remaining
            )),
            Line::from(format!("Worst:    {} candidates", hint.max_partition)),
        ]
    } else {
        vec![Line::from("Press TAB for a hint")]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Solver Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let count = app.candidates_remaining();

    let content = if count <= 12 {
        let mut lines = vec![Line::from(format!("Remaining ({count}):"))];
        for candidate in app.session.candidates().iter().take(12) {
            lines.push(Line::from(vec![
                Span::raw("  • "),
                Span::styled(
                    candidate.text().to_uppercase(),
                    Style::default().fg(Color::Green),
                ),
            ]));
        }
        lines
    } else {
        // Too many to list; show per-position letter availability instead
        let mut lines = vec![
            Line::from(format!("{count} candidates remaining")),
            Line::from(""),
            Line::from("Letters still possible:"),
        ];
        for (position, letters) in app.session.available_letters().iter().enumerate() {
            let set: String = letters.iter().map(|&b| char::from(b)).collect();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", position + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(set),
            ]));
        }
        lines
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = (app.engine.vocabulary().len() as f64).log2().max(1.0);
    let remaining_bits = (app.candidates_remaining().max(1) as f64).log2();
    let gained = total_bits - remaining_bits;
    let progress_pct = ((gained / total_bits * 100.0).clamp(0.0, 100.0)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{gained:.1}/{total_bits:.1} bits | {} candidates remain",
            app.candidates_remaining()
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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
        InputMode::GameOver => (
            " Game Over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type your guess | TAB for hint | ESC to quit ",
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
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempts_text = format!(
        "Guess {} of {}",
        (app.history.len() + 1).min(app.session.max_attempts()),
        app.session.max_attempts()
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let win_rate = if app.stats.total_games > 0 {
        app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
    } else {
        0.0
    };
    let stats_text = format!("Games: {} | Win Rate: {win_rate:.0}%", app.stats.total_games);
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.candidates_remaining());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help = Paragraph::new("ESC: Quit | TAB: Hint | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
