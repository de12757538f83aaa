use super::board::{Board, CELL_COUNT};
use super::types::{Difficulty, Mark};
use super::win_detector::is_winner;

/// Chance that the medium tier plays its win/block lookahead instead of a
/// random cell.
const LOOKAHEAD_CHANCE: f64 = 0.7;

/// Random source for the bot, injectable so tests can force branches.
pub trait BotRng {
    /// Uniform value in [0, 1).
    fn chance(&mut self) -> f64;
    /// Uniform index in [0, upper).
    fn pick(&mut self, upper: usize) -> usize;
}

/// Selects the cell the bot should occupy next. Errors when the board has
/// no empty cell left; the returned index is always an empty cell.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    bot_mark: Mark,
    human_mark: Mark,
    rng: &mut impl BotRng,
) -> Result<usize, String> {
    let available = board.available_moves();
    if available.is_empty() {
        return Err("No empty cell left on the board".to_string());
    }

    let index = match difficulty {
        Difficulty::Easy => random_move(&available, rng),
        Difficulty::Medium => medium_move(board, &available, bot_mark, human_mark, rng),
        Difficulty::Hard => minimax_move(board, &available, bot_mark, human_mark),
    };
    Ok(index)
}

fn random_move(available: &[usize], rng: &mut impl BotRng) -> usize {
    available[rng.pick(available.len())]
}

/// Human-like play: most of the time take an immediate win or block the
/// opponent's, the rest of the time pick at random.
fn medium_move(
    board: &Board,
    available: &[usize],
    bot_mark: Mark,
    human_mark: Mark,
    rng: &mut impl BotRng,
) -> usize {
    if rng.chance() < LOOKAHEAD_CHANCE {
        let mut scratch = board.clone();
        if let Some(index) = find_immediate_win(&mut scratch, available, bot_mark) {
            return index;
        }
        if let Some(index) = find_immediate_win(&mut scratch, available, human_mark) {
            return index;
        }
    }
    random_move(available, rng)
}

/// First cell in ascending order that completes a line for `mark`.
fn find_immediate_win(board: &mut Board, available: &[usize], mark: Mark) -> Option<usize> {
    for &index in available {
        board.put(index, mark);
        let wins = is_winner(board, mark);
        board.clear(index);
        if wins {
            return Some(index);
        }
    }
    None
}

/// Exhaustive minimax; never loses. Ties break on the first-encountered
/// index in ascending scan order.
fn minimax_move(board: &Board, available: &[usize], bot_mark: Mark, human_mark: Mark) -> usize {
    let mut scratch = board.clone();
    let mut best_score = i32::MIN;
    let mut best_move = available[0];

    for &index in available {
        scratch.put(index, bot_mark);
        let score = minimax(&mut scratch, 0, false, bot_mark, human_mark);
        scratch.clear(index);

        if score > best_score {
            best_score = score;
            best_move = index;
        }
    }

    best_move
}

/// Depth-adjusted scores prefer faster wins and slower losses.
fn minimax(board: &mut Board, depth: i32, maximizing: bool, bot_mark: Mark, human_mark: Mark) -> i32 {
    if is_winner(board, bot_mark) {
        return 10 - depth;
    }
    if is_winner(board, human_mark) {
        return depth - 10;
    }
    if board.is_full() {
        return 0;
    }

    if maximizing {
        let mut best = i32::MIN;
        for index in 0..CELL_COUNT {
            if board[index] != Mark::Empty {
                continue;
            }
            board.put(index, bot_mark);
            best = best.max(minimax(board, depth + 1, false, bot_mark, human_mark));
            board.clear(index);
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in 0..CELL_COUNT {
            if board[index] != Mark::Empty {
                continue;
            }
            board.put(index, human_mark);
            best = best.min(minimax(board, depth + 1, true, bot_mark, human_mark));
            board.clear(index);
        }
        best
    }
}
