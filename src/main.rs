use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod config;
mod game;
mod logging;
mod ui;
pub use game::{Direction, Game};
pub use config::{
    BOARD_COLOR, BOARD_SIZE, CONTROLS_H, EMPTY_TILE_COLOR, GAP, INFO_H, MIN_PANE_HEIGHT,
    MIN_PANE_WIDTH, PLAY_H, PLAY_W, SPAWN_VALUE, TEXT_COLOR, TILE_COLORS, TILE_H, TILE_W,
};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.log_file.as_deref())?;
    app::run(cli.seed)
}
