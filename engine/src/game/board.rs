use super::types::Mark;
use std::ops::Index;

pub const CELL_COUNT: usize = 9;

/// 3x3 grid stored in row-major order: 0,1,2 top row, 3,4,5 middle, 6,7,8 bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Validated placement. A non-empty cell is never overwritten.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        if index >= CELL_COUNT {
            return Err(format!("Cell index {} is out of bounds", index));
        }
        if self.cells[index] != Mark::Empty {
            return Err(format!("Cell {} is already marked", index));
        }
        self.cells[index] = mark;
        Ok(())
    }

    // Unchecked put/clear pair for hypothetical placements during lookahead.
    // Every put is paired with a clear before the enclosing call returns.
    pub(crate) fn put(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, index: usize) -> &Mark {
        &self.cells[index]
    }
}
