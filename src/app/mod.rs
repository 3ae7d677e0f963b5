use std::io::{Stdout, stdout};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::ui::draw_game;
use crate::{Direction, Game};

type Term = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Slide(Direction),
    Quit,
}

pub fn run(seed: Option<u64>) -> Result<()> {
    let mut tui = TuiGuard::new()?;
    let mut game = Game::from_seed(seed);
    info!(?seed, "game started");
    let result = run_loop(tui.terminal_mut(), &mut game);
    info!(moves = game.moves(), best = game.board.max_tile(), "game ended");
    result
}

fn run_loop(terminal: &mut Term, game: &mut Game) -> Result<()> {
    terminal
        .draw(|frame| draw_game(frame, game))
        .context("failed to draw board")?;

    loop {
        let redraw = match event::read().context("failed to read terminal event")? {
            Event::Key(key) => match map_key(key) {
                Some(Action::Quit) => break,
                Some(Action::Slide(direction)) => game.apply(direction),
                None => false,
            },
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                true
            }
            _ => false,
        };

        if redraw {
            terminal
                .draw(|frame| draw_game(frame, game))
                .context("failed to draw board")?;
        }
    }
    Ok(())
}

fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(Action::Slide(Direction::Up)),
        KeyCode::Down => Some(Action::Slide(Direction::Down)),
        KeyCode::Left => Some(Action::Slide(Direction::Left)),
        KeyCode::Right => Some(Action::Slide(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
