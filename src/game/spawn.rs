use rand::Rng;

use crate::{BOARD_SIZE, SPAWN_VALUE};

use super::Board;

impl Board {
    /// Places a `SPAWN_VALUE` tile on a uniformly chosen empty cell.
    /// Returns the (row, col) it landed on, or `None` when the board is full.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        if self.is_full() {
            return None;
        }
        let pick = rng.gen_range(0..self.empty_count());
        let idx = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .nth(pick)
            .map(|(idx, _)| idx)?;
        self.cells[idx] = SPAWN_VALUE;
        Some((idx / BOARD_SIZE, idx % BOARD_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn spawn_fills_one_empty_cell_with_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new();
        let (row, col) = board.spawn(&mut rng).expect("empty board has room");
        assert_eq!(board.get(row, col), SPAWN_VALUE);
        assert_eq!(board.empty_count(), BOARD_SIZE * BOARD_SIZE - 1);
    }

    #[test]
    fn spawn_only_touches_empty_cells() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = Board::from_rows([
            [2, 4, 8, 16],
            [2, 4, 8, 16],
            [2, 4, 0, 16],
            [2, 4, 8, 16],
        ]);
        assert_eq!(board.spawn(&mut rng), Some((2, 2)));
        assert_eq!(board.get(2, 2), SPAWN_VALUE);
        assert!(board.is_full());
    }

    #[test]
    fn spawn_on_full_board_is_noop() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::from_rows([[2; BOARD_SIZE]; BOARD_SIZE]);
        let before = board.clone();
        assert_eq!(board.spawn(&mut rng), None);
        assert_eq!(board, before);
    }

    #[test]
    fn spawn_reaches_every_empty_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let mut board = Board::new();
            if let Some(pos) = board.spawn(&mut rng) {
                seen.insert(pos);
            }
        }
        assert_eq!(seen.len(), BOARD_SIZE * BOARD_SIZE);
    }

    #[test]
    fn repeated_spawns_fill_the_board() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut board = Board::new();
        for _ in 0..BOARD_SIZE * BOARD_SIZE {
            assert!(board.spawn(&mut rng).is_some());
        }
        assert!(board.is_full());
        assert!(board.cells.iter().all(|&v| v == SPAWN_VALUE));
    }
}
