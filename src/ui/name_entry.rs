//! Player name prompt.
//!
//! Free-form single line, no validation: an empty name is accepted.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Input events for the name prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameInput {
    Char(char),
    Backspace,
    Left,
    Right,
    Submit,
    Other,
}

pub struct NameEntryScreen {
    pub name_input: String,
    /// Cursor position in chars, not bytes
    pub cursor_position: usize,
}

impl Default for NameEntryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl NameEntryScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            cursor_position: 0,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(1), // Spacer
                Constraint::Length(4), // Label + field
                Constraint::Min(0),    // Filler
                Constraint::Length(1), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Rock, Paper, Scissors")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let label = Paragraph::new("Enter your name:");
        f.render_widget(label, chunks[2]);

        let input_area = Rect {
            x: chunks[2].x,
            y: chunks[2].y + 1,
            width: chunks[2].width,
            height: 3.min(chunks[2].height.saturating_sub(1)),
        };
        let input_widget = Paragraph::new(self.display_text())
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));
        f.render_widget(input_widget, input_area);

        let controls = Paragraph::new("[Enter] Continue")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[4]);
    }

    /// Input text with an underscore at the cursor.
    pub fn display_text(&self) -> String {
        let chars: Vec<char> = self.name_input.chars().collect();
        let before: String = chars[..self.cursor_position].iter().collect();
        let after: String = chars[self.cursor_position..].iter().collect();
        format!("{}_{}", before, after)
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.name_input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.name_input.len())
    }

    pub fn handle_char_input(&mut self, c: char) {
        let idx = self.byte_index(self.cursor_position);
        self.name_input.insert(idx, c);
        self.cursor_position += 1;
    }

    pub fn handle_backspace(&mut self) {
        if self.cursor_position > 0 {
            let idx = self.byte_index(self.cursor_position - 1);
            self.name_input.remove(idx);
            self.cursor_position -= 1;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_position < self.name_input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Apply one input. Returns the entered name on submit.
    pub fn process_input(&mut self, input: NameInput) -> Option<String> {
        match input {
            NameInput::Char(c) => self.handle_char_input(c),
            NameInput::Backspace => self.handle_backspace(),
            NameInput::Left => self.move_left(),
            NameInput::Right => self.move_right(),
            NameInput::Submit => return Some(self.get_name()),
            NameInput::Other => {}
        }
        None
    }

    pub fn get_name(&self) -> String {
        self.name_input.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(screen: &mut NameEntryScreen, s: &str) {
        for c in s.chars() {
            screen.process_input(NameInput::Char(c));
        }
    }

    #[test]
    fn test_typing_and_submit() {
        let mut screen = NameEntryScreen::new();
        type_str(&mut screen, "Alice");
        assert_eq!(
            screen.process_input(NameInput::Submit),
            Some("Alice".to_string())
        );
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let mut screen = NameEntryScreen::new();
        assert_eq!(screen.process_input(NameInput::Submit), Some(String::new()));
    }

    #[test]
    fn test_backspace() {
        let mut screen = NameEntryScreen::new();
        type_str(&mut screen, "Bobb");
        screen.process_input(NameInput::Backspace);
        assert_eq!(screen.get_name(), "Bob");

        let mut empty = NameEntryScreen::new();
        empty.process_input(NameInput::Backspace);
        assert_eq!(empty.cursor_position, 0);
    }

    #[test]
    fn test_insert_mid_string() {
        let mut screen = NameEntryScreen::new();
        type_str(&mut screen, "Bb");
        screen.process_input(NameInput::Left);
        screen.process_input(NameInput::Char('o'));
        assert_eq!(screen.get_name(), "Bob");
        assert_eq!(screen.display_text(), "Bo_b");
    }

    #[test]
    fn test_multibyte_chars() {
        let mut screen = NameEntryScreen::new();
        type_str(&mut screen, "Zoë");
        screen.process_input(NameInput::Backspace);
        type_str(&mut screen, "é");
        assert_eq!(screen.get_name(), "Zoé");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut screen = NameEntryScreen::new();
        type_str(&mut screen, "Al");
        screen.process_input(NameInput::Right);
        assert_eq!(screen.cursor_position, 2);
        for _ in 0..5 {
            screen.process_input(NameInput::Left);
        }
        assert_eq!(screen.cursor_position, 0);
    }

    #[test]
    fn test_name_is_trimmed() {
        let mut screen = NameEntryScreen::new();
        type_str(&mut screen, "  Eve ");
        assert_eq!(screen.get_name(), "Eve");
    }

    #[test]
    fn test_other_input_ignored() {
        let mut screen = NameEntryScreen::new();
        type_str(&mut screen, "Al");
        assert_eq!(screen.process_input(NameInput::Other), None);
        assert_eq!(screen.name_input, "Al");
    }
}
