//! Round and session loop.
//!
//! Pulls one move from each chooser, resolves it against the session, and
//! repeats until the human runs out of lives.

use super::moves::Outcome;
use super::session::{RoundReport, Session};
use crate::players::MoveChooser;
use std::io;

/// Play a single round. Returns `None` without consulting either chooser
/// if the session is already over.
pub fn play_round(
    session: &mut Session,
    human: &mut dyn MoveChooser,
    computer: &mut dyn MoveChooser,
) -> io::Result<Option<RoundReport>> {
    if session.is_over() {
        return Ok(None);
    }

    let status = session.status();
    let human_move = human.choose_move(status)?;
    let computer_move = computer.choose_move(status)?;

    let report = session.apply_round(human_move, computer_move);
    if let Some(r) = &report {
        tracing::debug!(
            round = r.round,
            human = %r.human_move,
            computer = %r.computer_move,
            outcome = ?r.outcome,
            score = r.score,
            lives = r.lives,
            "round resolved"
        );
    }
    Ok(report)
}

/// Run rounds until game over, calling `on_round` after each one.
/// Returns the final score.
pub fn run_session<F>(
    session: &mut Session,
    human: &mut dyn MoveChooser,
    computer: &mut dyn MoveChooser,
    mut on_round: F,
) -> io::Result<u32>
where
    F: FnMut(&RoundReport) -> io::Result<()>,
{
    tracing::info!(
        player = %session.player.name,
        difficulty = %session.difficulty,
        "session started"
    );

    while let Some(report) = play_round(session, human, computer)? {
        on_round(&report)?;
    }

    tracing::info!(
        player = %session.player.name,
        score = session.score,
        rounds = session.rounds_played,
        "game over"
    );
    Ok(session.score)
}

/// Human-facing verdict line for a round.
pub fn verdict(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Draw => "It's a draw!",
        Outcome::AWins => "You win this round!",
        Outcome::BWins => "You lose this round.",
    }
}
