use crate::BOARD_SIZE;

use super::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Board coordinates of line `line`, starting at the edge tiles slide toward.
    fn line_coords(self, line: usize) -> [(usize, usize); BOARD_SIZE] {
        let mut coords = [(0, 0); BOARD_SIZE];
        for (i, coord) in coords.iter_mut().enumerate() {
            let far = BOARD_SIZE - 1 - i;
            *coord = match self {
                Direction::Left => (line, i),
                Direction::Right => (line, far),
                Direction::Up => (i, line),
                Direction::Down => (far, line),
            };
        }
        coords
    }
}

/// Compacts a line toward index 0, merging each equal adjacent pair once.
pub fn slide_line(line: [u32; BOARD_SIZE]) -> [u32; BOARD_SIZE] {
    let mut out = [0; BOARD_SIZE];
    let mut write = 0;
    let mut merged_last = false;
    for value in line.into_iter().filter(|&v| v != 0) {
        if write > 0 && !merged_last && out[write - 1] == value {
            out[write - 1] = value * 2;
            merged_last = true;
        } else {
            out[write] = value;
            write += 1;
            merged_last = false;
        }
    }
    out
}

impl Board {
    /// Slides every line toward `direction`. Returns whether any cell changed.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let mut changed = false;
        for line in 0..BOARD_SIZE {
            let coords = direction.line_coords(line);
            let before = coords.map(|(row, col)| self.get(row, col));
            let after = slide_line(before);
            if after != before {
                changed = true;
                for ((row, col), value) in coords.into_iter().zip(after) {
                    self.set(row, col, value);
                }
            }
        }
        changed
    }
}
