pub mod app;
pub mod input;
pub mod ui;

use anyhow::Result;
use ratatui::{backend::CrosstermBackend, prelude::*};
use std::io::{self, Stdout};
use std::time::Duration;

use crate::{
    config::UiConfig,
    tui::input::{map_key, Action},
};
use app::App;

/// Show the configuration panel for `slot_num` until the user quits.
pub fn start(slot_num: u32, config: UiConfig) -> Result<()> {
    log::info!("[TUI] panel for slot {slot_num} starting...");

    crossterm::terminal::enable_raw_mode()?;
    let res = run_session(slot_num, config);
    let restored = restore_terminal();

    log::info!("[TUI] panel for slot {slot_num} closed");
    res.and(restored)
}

fn run_session(slot_num: u32, config: UiConfig) -> Result<()> {
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(&mut stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(slot_num, config);
    run_app(&mut terminal, &app)
}

fn restore_terminal() -> Result<()> {
    restore_steps(
        || {
            let mut stdout = io::stdout();
            crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen)
        },
        crossterm::terminal::disable_raw_mode,
    )
}

/// Run both restore steps in order, even when the first one fails, and
/// report the first error.
fn restore_steps(
    leave_screen: impl FnOnce() -> io::Result<()>,
    disable_raw_mode: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    let left = leave_screen();
    let raw = disable_raw_mode();
    left.and(raw)?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<&mut Stdout>>, app: &App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render_ui(f, app))?;

        if crossterm::event::poll(Duration::from_millis(200))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                // Only react to the initial press, not Repeat/Release
                if key.kind != crossterm::event::KeyEventKind::Press {
                    continue;
                }
                match map_key(key) {
                    Action::Quit => break,
                    Action::None => {}
                }
            }
        }
    }

    terminal.clear()?;
    Ok(())
}
