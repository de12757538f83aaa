use super::board::Board;
use super::bot_controller::{BotRng, select_move};
use super::types::{Difficulty, Mark, Outcome};
use super::win_detector::{evaluate, find_winning_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Human,
    Bot,
}

/// Single-player game lifecycle: the human opens, turns alternate, and a
/// terminal outcome is absorbing until `reset`.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    human_mark: Mark,
    bot_mark: Mark,
    current_turn: Turn,
    status: Outcome,
}

impl GameState {
    pub fn new(human_mark: Mark) -> Result<Self, String> {
        let bot_mark = human_mark
            .opponent()
            .ok_or_else(|| "Human mark must be X or O".to_string())?;

        Ok(Self {
            board: Board::new(),
            human_mark,
            bot_mark,
            current_turn: Turn::Human,
            status: Outcome::Ongoing,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }

    pub fn current_turn(&self) -> Turn {
        self.current_turn
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != Outcome::Ongoing
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        find_winning_line(&self.board)
    }

    pub fn place_human(&mut self, index: usize) -> Result<(), String> {
        if self.current_turn != Turn::Human {
            return Err("Not the human's turn".to_string());
        }
        self.place(index, self.human_mark)
    }

    /// Selects and applies the bot's move, returning the chosen cell.
    pub fn play_bot_turn(
        &mut self,
        difficulty: Difficulty,
        rng: &mut impl BotRng,
    ) -> Result<usize, String> {
        if self.status != Outcome::Ongoing {
            return Err("Game is already over".to_string());
        }
        if self.current_turn != Turn::Bot {
            return Err("Not the bot's turn".to_string());
        }

        let index = select_move(&self.board, difficulty, self.bot_mark, self.human_mark, rng)?;
        self.place(index, self.bot_mark)?;
        Ok(index)
    }

    fn place(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        if self.status != Outcome::Ongoing {
            return Err("Game is already over".to_string());
        }

        self.board.place(index, mark)?;
        self.status = evaluate(&self.board);

        if self.status == Outcome::Ongoing {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_turn = match self.current_turn {
            Turn::Human => Turn::Bot,
            Turn::Bot => Turn::Human,
        };
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Turn::Human;
        self.status = Outcome::Ongoing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the first available cell on the random path.
    struct FirstCellRng;

    impl BotRng for FirstCellRng {
        fn chance(&mut self) -> f64 {
            0.0
        }

        fn pick(&mut self, _upper: usize) -> usize {
            0
        }
    }

    #[test]
    fn test_new_game_requires_a_real_mark() {
        assert!(GameState::new(Mark::Empty).is_err());
        let state = GameState::new(Mark::X).unwrap();
        assert_eq!(state.bot_mark(), Mark::O);
        assert_eq!(state.current_turn(), Turn::Human);
        assert_eq!(state.status(), Outcome::Ongoing);
    }

    #[test]
    fn test_turns_alternate_after_placements() {
        let mut state = GameState::new(Mark::X).unwrap();
        state.place_human(0).unwrap();
        assert_eq!(state.current_turn(), Turn::Bot);
        assert!(state.place_human(1).is_err());

        state.play_bot_turn(Difficulty::Easy, &mut FirstCellRng).unwrap();
        assert_eq!(state.current_turn(), Turn::Human);
    }

    #[test]
    fn test_bot_turn_rejected_when_human_to_move() {
        let mut state = GameState::new(Mark::X).unwrap();
        assert!(state.play_bot_turn(Difficulty::Easy, &mut FirstCellRng).is_err());
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut state = GameState::new(Mark::X).unwrap();
        state.place_human(4).unwrap();
        state.play_bot_turn(Difficulty::Easy, &mut FirstCellRng).unwrap();
        assert!(state.place_human(4).is_err());
    }

    #[test]
    fn test_human_win_ends_the_game() {
        let mut state = GameState::new(Mark::X).unwrap();

        // Easy bot with FirstCellRng fills the lowest empty cell, so the
        // human walks the left column: 0, 3, 6.
        state.place_human(0).unwrap();
        state.play_bot_turn(Difficulty::Easy, &mut FirstCellRng).unwrap(); // bot takes 1
        state.place_human(3).unwrap();
        state.play_bot_turn(Difficulty::Easy, &mut FirstCellRng).unwrap(); // bot takes 2
        state.place_human(6).unwrap();

        assert_eq!(state.status(), Outcome::Win(Mark::X));
        assert!(state.is_over());
        assert_eq!(state.winning_line(), Some([0, 3, 6]));
        assert!(state.place_human(8).is_err());
        assert!(state.play_bot_turn(Difficulty::Easy, &mut FirstCellRng).is_err());
    }

    #[test]
    fn test_reset_starts_a_fresh_game() {
        let mut state = GameState::new(Mark::X).unwrap();
        state.place_human(0).unwrap();
        state.play_bot_turn(Difficulty::Easy, &mut FirstCellRng).unwrap();
        state.reset();

        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_turn(), Turn::Human);
        assert_eq!(state.status(), Outcome::Ongoing);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_full_game_against_hard_bot_is_never_a_human_win() {
        let mut state = GameState::new(Mark::X).unwrap();
        let mut rng = FirstCellRng;

        // Human plays the first available cell every turn; hard bot responds.
        while !state.is_over() {
            let index = state.board().available_moves()[0];
            state.place_human(index).unwrap();
            if state.is_over() {
                break;
            }
            state.play_bot_turn(Difficulty::Hard, &mut rng).unwrap();
        }

        assert_ne!(state.status(), Outcome::Win(Mark::X));
    }
}
