use super::board::Board;
use super::types::{Mark, Outcome};

/// The eight winning triples: rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Stops at the first satisfied line; at most one mark can complete a line
/// in a legally played board.
pub fn evaluate(board: &Board) -> Outcome {
    for [a, b, c] in WINNING_LINES {
        let mark = board[a];
        if mark != Mark::Empty && board[b] == mark && board[c] == mark {
            return Outcome::Win(mark);
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

pub fn is_winner(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|&[a, b, c]| board[a] == mark && board[b] == mark && board[c] == mark)
}

pub fn find_winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        let mark = board[a];
        mark != Mark::Empty && board[b] == mark && board[c] == mark
    })
}
