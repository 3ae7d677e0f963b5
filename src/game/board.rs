use crate::BOARD_SIZE;

/// Row-major 4x4 grid. 0 is an empty cell, anything else is a tile value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub cells: [u32; BOARD_SIZE * BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [0; BOARD_SIZE * BOARD_SIZE],
        }
    }

    #[cfg(test)]
    pub fn from_rows(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.set(row, col, value);
            }
        }
        board
    }

    fn idx(row: usize, col: usize) -> usize {
        row * BOARD_SIZE + col
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[Self::idx(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[Self::idx(row, col)] = value;
    }

    pub fn rows(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, values) in rows.iter_mut().enumerate() {
            for (col, value) in values.iter_mut().enumerate() {
                *value = self.get(row, col);
            }
        }
        rows
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}
