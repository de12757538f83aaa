mod board;
mod bot_controller;
mod game_state;
mod session_rng;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::{BotRng, select_move};
pub use game_state::{GameState, Turn};
pub use session_rng::SessionRng;
pub use types::{Difficulty, Mark, Outcome};
pub use win_detector::{WINNING_LINES, evaluate, find_winning_line, is_winner};
