//! Interactive program flow.
//!
//! name -> difficulty -> welcome -> rounds until out of lives -> game over
//! -> leaderboard, optionally looping back to difficulty for another session.

use crate::core::{
    run_session, Difficulty, RoundReport, Session, ANIMATION_PAUSE_MS, RESULT_PAUSE_MS,
};
use crate::input::{
    interrupted, is_interrupt, is_play_again, map_cursor_input, map_difficulty_input,
    map_name_input, KeySource,
};
use crate::leaderboard::Leaderboard;
use crate::players::{ComputerChooser, CursorInput, HumanChooser, MoveCursor, RoundStatus};
use crate::ui;
use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use std::cell::RefCell;
use std::io;
use std::time::Duration;

/// Fixed pauses between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub animation: Duration,
    pub result: Duration,
}

impl Pacing {
    /// No waiting at all.
    pub fn instant() -> Self {
        Self {
            animation: Duration::ZERO,
            result: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            animation: Duration::from_millis(ANIMATION_PAUSE_MS),
            result: Duration::from_millis(RESULT_PAUSE_MS),
        }
    }
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        std::thread::sleep(duration);
    }
}

/// Startup choices. Anything left `None` is asked for interactively.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub name: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u64>,
    pub pacing: Pacing,
}

/// Terminal plus key source: everything that draws or waits on the player.
pub struct Console<B: Backend, K: KeySource> {
    terminal: Terminal<B>,
    keys: K,
}

impl<B: Backend, K: KeySource> Console<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K) -> Self {
        Self { terminal, keys }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    fn draw(&mut self, render: impl FnOnce(&mut Frame, Rect)) -> io::Result<()> {
        self.terminal.draw(|f| {
            let area = f.size();
            render(f, area);
        })?;
        Ok(())
    }

    fn next_key(&mut self) -> io::Result<KeyEvent> {
        let key = self.keys.next_key()?;
        if is_interrupt(&key) {
            return Err(interrupted());
        }
        Ok(key)
    }

    pub fn prompt_name(&mut self) -> io::Result<String> {
        let mut screen = ui::NameEntryScreen::new();
        loop {
            self.draw(|f, area| screen.draw(f, area))?;
            let key = self.next_key()?;
            if let Some(name) = screen.process_input(map_name_input(&key)) {
                return Ok(name);
            }
        }
    }

    pub fn select_difficulty(&mut self) -> io::Result<Difficulty> {
        self.draw(|f, area| ui::render_difficulty_select(f, area))?;
        loop {
            let key = self.next_key()?;
            if let Some(difficulty) = map_difficulty_input(&key) {
                tracing::debug!(%difficulty, "difficulty selected");
                return Ok(difficulty);
            }
        }
    }

    pub fn show_welcome(&mut self, name: &str, difficulty: Difficulty) -> io::Result<()> {
        self.draw(|f, area| ui::render_welcome(f, area, name, difficulty))?;
        self.next_key()?;
        Ok(())
    }

    /// Draw the selection screen and wait for one key.
    pub fn prompt_move(
        &mut self,
        cursor: &MoveCursor,
        status: RoundStatus,
        difficulty: Difficulty,
    ) -> io::Result<CursorInput> {
        self.draw(|f, area| ui::render_move_select(f, area, cursor, status, difficulty))?;
        let key = self.next_key()?;
        Ok(map_cursor_input(&key))
    }

    pub fn show_round(
        &mut self,
        report: &RoundReport,
        difficulty: Difficulty,
        pacing: Pacing,
    ) -> io::Result<()> {
        let before = RoundStatus {
            score: report.score,
            lives: report.lives,
        };
        self.draw(|f, area| ui::render_animation(f, area, difficulty, before))?;
        pause(pacing.animation);

        self.draw(|f, area| ui::render_round_result(f, area, report, difficulty))?;
        pause(pacing.result);

        // Keys mashed during the pause shouldn't leak into the next round
        self.keys.drain()
    }

    pub fn show_game_over(&mut self, session: &Session) -> io::Result<()> {
        let (score, rounds) = (session.score, session.rounds_played);
        self.draw(|f, area| ui::render_game_over(f, area, score, rounds))?;
        self.next_key()?;
        Ok(())
    }

    /// Returns true if the player wants another session.
    pub fn show_leaderboard(&mut self, leaderboard: &Leaderboard) -> io::Result<bool> {
        self.draw(|f, area| ui::render_leaderboard(f, area, leaderboard))?;
        let key = self.next_key()?;
        Ok(is_play_again(&key))
    }
}

pub struct App<B: Backend, K: KeySource> {
    console: RefCell<Console<B, K>>,
    leaderboard: Leaderboard,
    rng: StdRng,
    options: AppOptions,
}

impl<B: Backend, K: KeySource> App<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K, options: AppOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            console: RefCell::new(Console::new(terminal, keys)),
            leaderboard: Leaderboard::new(),
            rng,
            options,
        }
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn into_console(self) -> Console<B, K> {
        self.console.into_inner()
    }

    /// Run sessions until the player declines to play again.
    pub fn run(&mut self) -> io::Result<()> {
        let name = match self.options.name.clone() {
            Some(name) => name,
            None => self.console.get_mut().prompt_name()?,
        };

        loop {
            let difficulty = match self.options.difficulty {
                Some(d) => d,
                None => self.console.get_mut().select_difficulty()?,
            };
            self.console.get_mut().show_welcome(&name, difficulty)?;

            let session = self.play_session(&name, difficulty)?;
            self.leaderboard.add_entry(session.leaderboard_entry());

            let console = self.console.get_mut();
            console.show_game_over(&session)?;
            if !console.show_leaderboard(&self.leaderboard)? {
                return Ok(());
            }
            tracing::debug!(player = %name, "playing again");
        }
    }

    /// One full session: rounds until the human is out of lives.
    pub fn play_session(&mut self, name: &str, difficulty: Difficulty) -> io::Result<Session> {
        let mut session = Session::new(name, difficulty);
        let console = &self.console;
        let pacing = self.options.pacing;

        let mut human = HumanChooser::new(|cursor: &MoveCursor, status: RoundStatus| {
            console.borrow_mut().prompt_move(cursor, status, difficulty)
        });
        let mut computer = ComputerChooser::new(difficulty, &mut self.rng);

        run_session(&mut session, &mut human, &mut computer, |report| {
            console.borrow_mut().show_round(report, difficulty, pacing)
        })?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedKeys;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn app(keys: Vec<KeyCode>, options: AppOptions) -> App<TestBackend, ScriptedKeys> {
        let terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        App::new(terminal, ScriptedKeys::from_codes(keys), options)
    }

    fn easy_options() -> AppOptions {
        AppOptions {
            name: Some("Ada".to_string()),
            difficulty: Some(Difficulty::Easy),
            seed: Some(1),
            pacing: Pacing::instant(),
        }
    }

    #[test]
    fn test_session_against_easy_rock() {
        // Down+Enter = paper (win), Enter = rock (draw), then scissors x3 (lose)
        let mut keys = vec![KeyCode::Down, KeyCode::Enter, KeyCode::Enter];
        for _ in 0..3 {
            keys.extend([KeyCode::Up, KeyCode::Enter]);
        }
        let mut app = app(keys, easy_options());

        let session = app.play_session("Ada", Difficulty::Easy).unwrap();
        assert_eq!(session.score, 1);
        assert_eq!(session.lives(), 0);
        assert_eq!(session.rounds_played, 5);
        assert!(session.is_over());
    }

    #[test]
    fn test_full_run_records_one_entry() {
        let keys = vec![
            KeyCode::Char('A'),
            KeyCode::Char('l'),
            KeyCode::Enter, // name
            KeyCode::Char('9'),
            KeyCode::Char('1'), // difficulty
            KeyCode::Char(' '), // welcome
            KeyCode::Up,
            KeyCode::Enter,
            KeyCode::Up,
            KeyCode::Enter,
            KeyCode::Up,
            KeyCode::Enter,
            KeyCode::Enter,     // game over
            KeyCode::Char('q'), // leaderboard: quit
        ];
        let options = AppOptions {
            seed: Some(3),
            pacing: Pacing::instant(),
            ..AppOptions::default()
        };
        let mut app = app(keys, options);
        app.run().unwrap();

        let entries = app.leaderboard().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "Al");
        assert_eq!(entries[0].score(), 0);
        assert_eq!(app.into_console().keys().remaining(), 0);
    }

    #[test]
    fn test_play_again_appends_in_order() {
        let mut keys = Vec::new();
        // First session: one win then three losses
        keys.extend([KeyCode::Enter, KeyCode::Down, KeyCode::Enter]);
        for _ in 0..3 {
            keys.extend([KeyCode::Up, KeyCode::Enter]);
        }
        keys.extend([KeyCode::Enter, KeyCode::Char('r')]);
        // Second session: three straight losses
        keys.push(KeyCode::Enter);
        for _ in 0..3 {
            keys.extend([KeyCode::Up, KeyCode::Enter]);
        }
        keys.extend([KeyCode::Enter, KeyCode::Esc]);

        let mut app = app(keys, easy_options());
        app.run().unwrap();

        let scores: Vec<u32> = app.leaderboard().top_scores().map(|e| e.score()).collect();
        assert_eq!(scores, vec![1, 0]);
    }

    #[test]
    fn test_ctrl_c_interrupts_without_recording() {
        let terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let keys = ScriptedKeys::new([
            KeyEvent::from(KeyCode::Enter),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ]);
        let mut app = App::new(terminal, keys, easy_options());

        let err = app.run().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
        assert!(app.leaderboard().is_empty());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut app = app(vec![KeyCode::Enter], easy_options());
        let err = app.run().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
