use std::io;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use termfolio::app::Workbench;
use termfolio::core::{EventResult, InputEvent, View};
use termfolio::services::UiConfig;

fn main() -> io::Result<()> {
    let _logging = termfolio::logging::init();
    let config = UiConfig::from_env();
    let tick = Duration::from_millis(config.tick_ms);
    let mut workbench = Workbench::new(config).map_err(io::Error::other)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut workbench, tick);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workbench: &mut Workbench,
    tick: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            workbench.render(frame, area);
        })?;

        let event = if crossterm::event::poll(tick)? {
            InputEvent::from(crossterm::event::read()?)
        } else {
            InputEvent::Tick
        };

        if workbench.handle_input(&event) == EventResult::Quit {
            return Ok(());
        }
    }
}
