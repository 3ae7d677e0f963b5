use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::game::{Board, Direction};

/// One running game: the board, the RNG that feeds spawns, and a turn counter.
pub struct Game {
    pub board: Board,
    rng: StdRng,
    moves: u64,
}

impl Game {
    pub fn new(rng: StdRng) -> Self {
        let mut game = Self {
            board: Board::new(),
            rng,
            moves: 0,
        };
        let first = game.board.spawn(&mut game.rng);
        debug!(?first, "initial tile");
        game
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }

    /// Plays one turn. A spawn follows only when the slide changed the board;
    /// the return value tells the caller whether a redraw is due.
    pub fn apply(&mut self, direction: Direction) -> bool {
        if !self.board.shift(direction) {
            debug!(?direction, "move blocked");
            return false;
        }
        self.moves += 1;
        let spawned = self.board.spawn(&mut self.rng);
        debug!(?direction, ?spawned, moves = self.moves, "move applied");
        true
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BOARD_SIZE;

    fn tile_count(board: &Board) -> usize {
        BOARD_SIZE * BOARD_SIZE - board.empty_count()
    }

    #[test]
    fn new_game_starts_with_one_tile() {
        let game = Game::from_seed(Some(5));
        assert_eq!(tile_count(&game.board), 1);
        assert_eq!(game.board.max_tile(), 1);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = Game::from_seed(Some(11));
        let mut b = Game::from_seed(Some(11));
        for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(a.apply(direction), b.apply(direction));
        }
        assert_eq!(a.board, b.board);
    }

    #[test]
    fn blocked_move_neither_spawns_nor_counts() {
        let mut game = Game::from_seed(Some(2));
        game.board = Board::from_rows([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let before = game.board.clone();
        assert!(!game.apply(Direction::Left));
        assert!(!game.apply(Direction::Up));
        assert_eq!(game.board, before);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn changing_move_spawns_exactly_one_tile() {
        let mut game = Game::from_seed(Some(2));
        game.board = Board::from_rows([[0, 0, 0, 1], [0; 4], [0; 4], [0; 4]]);
        assert!(game.apply(Direction::Left));
        assert_eq!(game.board.get(0, 0), 1);
        assert_eq!(tile_count(&game.board), 2);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn merge_then_spawn() {
        let mut game = Game::from_seed(Some(4));
        game.board = Board::from_rows([[1, 1, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(game.apply(Direction::Left));
        assert_eq!(game.board.get(0, 0), 2);
        assert_eq!(tile_count(&game.board), 2);
    }
}
