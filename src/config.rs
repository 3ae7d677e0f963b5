// Shared game UI/constants.
use ratatui::style::Color;

pub const BOARD_SIZE: usize = 4;
pub const SPAWN_VALUE: u32 = 1;
pub const TILE_W: usize = 7; // wide enough for a five-digit label plus padding
pub const TILE_H: usize = 3; // label sits on the middle row
pub const GAP: usize = 1;
pub const PLAY_W: usize = BOARD_SIZE * (TILE_W + GAP) + GAP;
pub const PLAY_H: usize = BOARD_SIZE * (TILE_H + GAP) + GAP;
pub const INFO_H: u16 = 5;
pub const CONTROLS_H: u16 = 4;
// Playfield plus the cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 2;
pub const MIN_PANE_HEIGHT: u16 = (PLAY_H as u16) + INFO_H + CONTROLS_H + 2;

pub const BOARD_COLOR: Color = Color::Rgb(187, 173, 160);
pub const EMPTY_TILE_COLOR: Color = Color::Rgb(205, 192, 180);
pub const TEXT_COLOR: Color = Color::Rgb(119, 110, 101);
pub const TILE_COLORS: [Color; 12] = [
    Color::Rgb(238, 228, 218),
    Color::Rgb(237, 224, 200),
    Color::Rgb(242, 177, 121),
    Color::Rgb(245, 149, 99),
    Color::Rgb(246, 124, 95),
    Color::Rgb(246, 94, 59),
    Color::Rgb(237, 207, 114),
    Color::Rgb(237, 204, 97),
    Color::Rgb(237, 200, 80),
    Color::Rgb(237, 197, 63),
    Color::Rgb(237, 194, 46),
    Color::Rgb(60, 58, 50),
];
