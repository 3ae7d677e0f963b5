use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::{
    BOARD_COLOR, BOARD_SIZE, CONTROLS_H, GAP, Game, INFO_H, MIN_PANE_HEIGHT, MIN_PANE_WIDTH,
    PLAY_H, PLAY_W, TILE_H, TILE_W,
};

use super::{tile_label, tile_style};

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH || area.height < MIN_PANE_HEIGHT {
        let msg = Paragraph::new(format!(
            "RESIZE PANE (min {}x{})",
            MIN_PANE_WIDTH, MIN_PANE_HEIGHT
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("2048"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("2048")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(0),
        ])
        .split(cabinet_inner)[1];

    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(INFO_H),
            Constraint::Length(PLAY_H as u16),
            Constraint::Length(CONTROLS_H),
            Constraint::Min(0),
        ])
        .split(col_rect);

    draw_info(frame, game, stack[1]);
    draw_playfield(frame, game, stack[2]);
    draw_controls(frame, stack[3]);
}

fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let background = Block::default().style(Style::default().bg(BOARD_COLOR));
    frame.render_widget(background, play_rect);

    for (row, values) in game.board.rows().iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            let tile = tile_rect(play_rect, row, col);
            // Label on the middle row of the tile.
            let mut lines = vec![Line::raw(""); TILE_H / 2];
            lines.push(Line::raw(tile_label(value)));
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(tile_style(value));
            frame.render_widget(paragraph, tile);
        }
    }
}

fn tile_rect(play_rect: Rect, row: usize, col: usize) -> Rect {
    let x = GAP + col * (TILE_W + GAP);
    let y = GAP + row * (TILE_H + GAP);
    Rect {
        x: play_rect.x + x as u16,
        y: play_rect.y + y as u16,
        width: TILE_W as u16,
        height: TILE_H as u16,
    }
    .intersection(play_rect)
}

fn draw_info(frame: &mut Frame, game: &Game, area: Rect) {
    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let info = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "MOVES:", game.moves())),
        Line::raw(format!("{:<7} {}", "BEST:", game.board.max_tile())),
        Line::raw(format!(
            "{:<7} {}/{}",
            "FREE:",
            game.board.empty_count(),
            BOARD_SIZE * BOARD_SIZE
        )),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(info, inner);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let controls = Paragraph::new(vec![Line::raw("←↑↓→ slide"), Line::raw("q/esc quit")])
        .alignment(Alignment::Left);
    frame.render_widget(controls, inner);
}
