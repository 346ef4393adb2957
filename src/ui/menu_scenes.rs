//! Full-screen menus around a session: difficulty pick, welcome, game over,
//! and the leaderboard.

use super::game_common::{any_key_line, render_modal, GameResultType};
use crate::core::{Difficulty, STARTING_LIVES};
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MODAL_WIDTH: u16 = 48;

/// Difficulty selection: three numbered options.
pub fn render_difficulty_select(frame: &mut Frame, area: Rect) {
    let mut body: Vec<Line> = Difficulty::ALL
        .iter()
        .map(|d| {
            Line::from(vec![
                Span::styled(
                    format!("{}. ", d.hotkey()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(d.name(), Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();
    body.push(Line::from(""));
    body.push(any_key_line("[1-3] Choose"));

    frame.render_widget(Clear, area);
    render_modal(frame, area, "Select difficulty:", Color::Cyan, body, MODAL_WIDTH);
}

/// Intro screen shown once a difficulty has been picked.
pub fn render_welcome(frame: &mut Frame, area: Rect, name: &str, difficulty: Difficulty) {
    let greeting = if name.is_empty() {
        format!("Welcome! You have {} lives.", STARTING_LIVES)
    } else {
        format!("Welcome, {}! You have {} lives.", name, STARTING_LIVES)
    };
    let body = vec![
        Line::from(Span::styled(greeting, Style::default().fg(Color::White))),
        Line::from(Span::styled(
            format!("Difficulty: {}", difficulty.name()),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        any_key_line("Press any key to enter..."),
    ];

    frame.render_widget(Clear, area);
    render_modal(
        frame,
        area,
        "Welcome to Rock, Paper, Scissors!",
        Color::Yellow,
        body,
        MODAL_WIDTH,
    );
}

pub fn render_game_over(frame: &mut Frame, area: Rect, final_score: u32, rounds: u32) {
    let body = vec![
        Line::from(Span::styled(
            format!("Your final score: {}", final_score),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Rounds played: {}", rounds),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        any_key_line("[Press any key]"),
    ];

    frame.render_widget(Clear, area);
    render_modal(
        frame,
        area,
        "Game Over!",
        GameResultType::Loss.color(),
        body,
        MODAL_WIDTH,
    );
}

/// Plain-text line for one leaderboard entry.
pub fn format_entry(entry: &LeaderboardEntry) -> String {
    format!("{}: {}", entry.name(), entry.score())
}

/// Plain-text leaderboard, as printed after the terminal is restored.
pub fn leaderboard_lines(leaderboard: &Leaderboard) -> Vec<String> {
    let mut lines = vec!["--- Leaderboard ---".to_string()];
    lines.extend(leaderboard.top_scores().map(format_entry));
    lines
}

pub const LEADERBOARD_CONTROLS: &str = "[R] Play again   [Any other key] Quit";

/// Leaderboard screen, entries in the order they were recorded.
pub fn render_leaderboard(frame: &mut Frame, area: Rect, leaderboard: &Leaderboard) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Leaderboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<Line> = leaderboard
        .top_scores()
        .enumerate()
        .map(|(i, entry)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.name().to_string(), Style::default().fg(Color::White)),
                Span::styled(": ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    entry.score().to_string(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    // Keep the newest entries visible when the list outgrows the screen
    let visible = chunks[0].height as usize;
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let controls = Paragraph::new(LEADERBOARD_CONTROLS)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(controls, chunks[1]);
}
