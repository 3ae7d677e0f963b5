mod render;

use ratatui::style::{Color, Modifier, Style};

use crate::{EMPTY_TILE_COLOR, TEXT_COLOR, TILE_COLORS};

pub use render::draw_game;

/// Palette slot for a tile value: log2 of the value, clamped to the last color.
pub fn palette_index(value: u32) -> usize {
    let exp = value.max(1).ilog2() as usize;
    exp.min(TILE_COLORS.len() - 1)
}

pub fn tile_color(value: u32) -> Color {
    if value == 0 {
        EMPTY_TILE_COLOR
    } else {
        TILE_COLORS[palette_index(value)]
    }
}

pub fn tile_style(value: u32) -> Style {
    let style = Style::default().bg(tile_color(value));
    if value == 0 {
        style
    } else {
        style.fg(TEXT_COLOR).add_modifier(Modifier::BOLD)
    }
}

pub fn tile_label(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}
