//! Round screens: move selection, placeholder animation, round result.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_status_bar, score_lives_lines,
    GameResultType,
};
use crate::core::{verdict, Difficulty, GamePhase, Move, Outcome, RoundReport, COMPUTER_NAME};
use crate::players::{MoveCursor, RoundStatus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 22;

pub const SELECT_CONTROLS: &[(&str, &str)] = &[("[\u{2191}\u{2193}]", "Choose"), ("[Enter]", "Select")];

/// Glyph shown next to each move.
pub fn move_icon(m: Move) -> &'static str {
    match m {
        Move::Rock => "\u{270A}",
        Move::Paper => "\u{270B}",
        Move::Scissors => "\u{270C}",
    }
}

fn result_type(outcome: Outcome) -> GameResultType {
    match outcome {
        Outcome::AWins => GameResultType::Win,
        Outcome::BWins => GameResultType::Loss,
        Outcome::Draw => GameResultType::Draw,
    }
}

/// Render the move selection screen.
pub fn render_move_select(
    frame: &mut Frame,
    area: Rect,
    cursor: &MoveCursor,
    status: RoundStatus,
    difficulty: Difficulty,
) {
    let layout = create_game_layout(
        frame,
        area,
        " Rock, Paper, Scissors ",
        Color::Cyan,
        8,
        INFO_PANEL_WIDTH,
    );

    let mut lines = score_lives_lines(status);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Use the arrow keys to choose a move, and press Enter to select.",
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));

    for (i, m) in Move::ALL.iter().enumerate() {
        if i == cursor.selected() {
            lines.push(Line::from(Span::styled(
                format!("> {} {} <", move_icon(*m), m),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("  {} {}  ", move_icon(*m), m),
                Style::default().fg(Color::White),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), layout.content);
    render_status_bar(
        frame,
        layout.status_bar,
        "Your move",
        Color::Yellow,
        SELECT_CONTROLS,
    );
    render_info(frame, layout.info_panel, difficulty, status);
}

/// Placeholder frame shown while the moves "animate".
pub fn render_animation(frame: &mut Frame, area: Rect, difficulty: Difficulty, status: RoundStatus) {
    let layout = create_game_layout(
        frame,
        area,
        " Rock, Paper, Scissors ",
        Color::Cyan,
        8,
        INFO_PANEL_WIDTH,
    );

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Animating moves...",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        layout.content,
    );
    render_status_bar(frame, layout.status_bar, "", Color::Gray, &[]);
    render_info(frame, layout.info_panel, difficulty, status);
}

/// Render a resolved round: both moves and the verdict.
pub fn render_round_result(
    frame: &mut Frame,
    area: Rect,
    report: &RoundReport,
    difficulty: Difficulty,
) {
    let status = RoundStatus {
        score: report.score,
        lives: report.lives,
    };
    let layout = create_game_layout(
        frame,
        area,
        " Rock, Paper, Scissors ",
        Color::Cyan,
        8,
        INFO_PANEL_WIDTH,
    );

    let color = result_type(report.outcome).color();
    let mut lines = score_lives_lines(status);
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "You chose {}, {} chose {}.",
        report.human_move, COMPUTER_NAME, report.computer_move
    )));
    lines.push(Line::from(vec![
        Span::styled(
            format!("{}  ", move_icon(report.human_move)),
            Style::default().fg(Color::White),
        ),
        Span::styled("vs", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("  {}", move_icon(report.computer_move)),
            Style::default().fg(Color::White),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        verdict(report.outcome),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Paragraph::new(lines), layout.content);

    let status_text = if report.phase == GamePhase::GameOver {
        "No lives left..."
    } else {
        "Next round coming up"
    };
    render_status_bar(frame, layout.status_bar, status_text, Color::DarkGray, &[]);
    render_info(frame, layout.info_panel, difficulty, status);
}

fn render_info(frame: &mut Frame, area: Rect, difficulty: Difficulty, status: RoundStatus) {
    let inner = render_info_panel_frame(frame, area);

    let lives_color = if status.lives <= 1 {
        Color::Red
    } else {
        Color::White
    };
    let lines = vec![
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(Color::DarkGray)),
            Span::styled(difficulty.name(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "\u{2665} ".repeat(status.lives as usize),
                Style::default().fg(lives_color),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Beats:",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " rock > scissors",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " scissors > paper",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " paper > rock",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_move_select_highlights_cursor() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut cursor = MoveCursor::new();
        cursor.move_down();
        terminal
            .draw(|f| {
                let area = f.size();
                render_move_select(
                    f,
                    area,
                    &cursor,
                    RoundStatus { score: 2, lives: 3 },
                    Difficulty::Hard,
                )
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 2"));
        assert!(text.contains("Lives: 3"));
        assert!(text.contains("paper <"));
        assert!(text.contains("Hard"));
    }

    #[test]
    fn test_round_result_shows_verdict() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let report = RoundReport {
            round: 1,
            human_move: Move::Scissors,
            computer_move: Move::Rock,
            outcome: Outcome::BWins,
            score: 0,
            lives: 2,
            phase: GamePhase::InProgress,
        };
        terminal
            .draw(|f| {
                let area = f.size();
                render_round_result(f, area, &report, Difficulty::Easy)
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("You chose scissors, Computer chose rock."));
        assert!(text.contains("You lose this round."));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        let cursor = MoveCursor::new();
        terminal
            .draw(|f| {
                let area = f.size();
                render_move_select(f, area, &cursor, RoundStatus::default(), Difficulty::Easy);
                render_animation(f, area, Difficulty::Easy, RoundStatus::default());
            })
            .unwrap();
    }
}
