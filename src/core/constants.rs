/// Lives the human player starts each session with
pub const STARTING_LIVES: u32 = 3;

/// How long a round result stays on screen before the next round (ms)
pub const RESULT_PAUSE_MS: u64 = 2000;

/// Placeholder move animation length (ms)
pub const ANIMATION_PAUSE_MS: u64 = 500;

/// Key poll interval while waiting for input (ms)
pub const INPUT_POLL_MS: u64 = 50;

/// Name used for the computer opponent
pub const COMPUTER_NAME: &str = "Computer";
