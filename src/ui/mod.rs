pub mod game_common;
pub mod menu_scenes;
pub mod name_entry;
pub mod round_scene;

pub use menu_scenes::{
    leaderboard_lines, render_difficulty_select, render_game_over, render_leaderboard,
    render_welcome,
};
pub use name_entry::{NameEntryScreen, NameInput};
pub use round_scene::{render_animation, render_move_select, render_round_result};

/// Flatten a test terminal's buffer into text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_text(
    terminal: &ratatui::Terminal<ratatui::backend::TestBackend>,
) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}
