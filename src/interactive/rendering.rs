//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{create_progress_bar, entropy_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Pools at or below this size are listed word by word
const LIST_LIMIT: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE SUGGEST - Interactive Mode")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Current guess and ranking
            Constraint::Percentage(30), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(ref guess) = app.current_guess else {
        let text = if app.input_mode == InputMode::WinCelebration {
            "Solved!"
        } else {
            "No suggestion available"
        };
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    };

    let candidates = app.candidates_count();
    let label = if guess.suggested { "Suggested: " } else { "Playing:   " };
    let metrics = &guess.metrics;

    let mut content = vec![
        Line::from(vec![
            Span::raw(label),
            Span::styled(
                guess.word.text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Entropy:   [{}] {:.3} bits",
            entropy_bar(metrics.entropy, candidates, 18),
            metrics.entropy
        )),
        Line::from(format!(
            "Expected:  {:.1} left, worst {}",
            metrics.expected_remaining, metrics.max_partition
        )),
    ];

    if app.suggestions.len() > 1 {
        let others = app
            .suggestions
            .iter()
            .skip(1)
            .map(|s| format!("{} {:.2}", s.word.text().to_uppercase(), s.entropy))
            .collect::<Vec<_>>()
            .join("  ");
        content.push(Line::from(Span::styled(
            format!("Also:      {others}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let pool = app.session.pool();

    let content = if pool.is_empty() {
        vec![Line::from("No candidates remain")]
    } else if pool.len() <= LIST_LIMIT {
        pool.iter()
            .map(|candidate| {
                let entropy = app
                    .suggestions
                    .iter()
                    .find(|s| s.word == candidate)
                    .map_or(0.0, |s| s.entropy);
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<5}", candidate.text().to_uppercase()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(format!(" {entropy:.2}b"), Style::default().fg(Color::Cyan)),
                ])
            })
            .collect()
    } else {
        vec![
            Line::from(format!("{} candidates remaining", pool.len())),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (pool.len() as f64).log2()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let items: Vec<ListItem> = history
        .iter()
        .zip(&app.turn_entropies)
        .enumerate()
        .rev()
        .take(5)
        .map(|(i, (turn, entropy))| {
            ListItem::new(format!(
                "{}: {} {} [{entropy:.1} bits] {} → {}",
                i + 1,
                turn.guess.text().to_uppercase(),
                turn.pattern.to_emoji(),
                turn.candidates_before,
                turn.candidates_after
            ))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = (app.session.dictionary().len().max(1) as f64).log2();
    let bits_gained = app.bits_gained();
    let current_candidates = app.candidates_count();
    let progress_pct = if total_bits > 0.0 {
        (bits_gained / total_bits * 100.0).clamp(0.0, 100.0) as u16
    } else {
        100
    };

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
            "{bits_gained:.1}/{total_bits:.1} bits | {current_candidates} candidates remain"
        ));

    f.render_widget(gauge, area);
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

    let list = List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback (G/2=Green Y/1=Yellow -/0=Gray, or emojis) | TAB for manual word ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Enter Word to Try (5 letters) | ESC to cancel ",
            app.manual_word.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
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

    let config = app.session.ranker().config();
    let sampling = format!(
        "Sample: {}{}",
        config.sample_size,
        if config.explore { " +explore" } else { "" }
    );
    f.render_widget(
        Paragraph::new(sampling).alignment(Alignment::Center),
        chunks[0],
    );

    let win_rate = if app.stats.total_games > 0 {
        app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
    } else {
        0.0
    };
    let stats = format!(
        "Won: {}/{} [{}]",
        app.stats.games_won,
        app.stats.total_games,
        create_progress_bar(win_rate, 100.0, 8)
    );
    f.render_widget(
        Paragraph::new(stats).alignment(Alignment::Center),
        chunks[1],
    );

    let candidates = format!("Candidates: {}", app.candidates_count());
    f.render_widget(
        Paragraph::new(candidates).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if app.candidates_count() == 0 {
        "q: Quit | n: New Game | u: Undo"
    } else {
        "q: Quit | u: Undo | Enter: Submit | TAB: Manual Word"
    };
    f.render_widget(
        Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}
