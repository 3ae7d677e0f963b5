pub mod board;
pub mod moves;
pub mod spawn;
pub mod state;

pub use board::Board;
pub use moves::Direction;
pub use state::Game;
