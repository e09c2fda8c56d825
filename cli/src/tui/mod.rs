pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use repcal_core::{Clock, WorkoutCalendar, WorkoutRepository};

use crate::tui::app::App;

/// How often the loop wakes up without input, which also bounds how late
/// the saved banner clears.
const TICK_RATE: Duration = Duration::from_millis(250);

pub fn run<R: WorkoutRepository, C: Clock>(calendar: WorkoutCalendar<R, C>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(calendar);
    let res = run_app(&mut terminal, &mut app);
    app.calendar.teardown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("tui exited with error: {:?}", err);
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend, R: WorkoutRepository, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<R, C>,
) -> io::Result<()> {
    loop {
        app.calendar.tick();
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        if app.is_editing() {
            match key.code {
                KeyCode::Enter => app.save(),
                KeyCode::Esc => app.cancel(),
                KeyCode::Tab | KeyCode::Down => app.calendar.focus_next(),
                KeyCode::BackTab | KeyCode::Up => app.calendar.focus_previous(),
                KeyCode::Backspace => app.calendar.delete_char(),
                KeyCode::Char(c) => app.calendar.input_char(c),
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => app.move_selection(-7),
            KeyCode::Down | KeyCode::Char('j') => app.move_selection(7),
            KeyCode::Char('p') | KeyCode::Char('[') | KeyCode::PageUp => app.previous_month(),
            KeyCode::Char('n') | KeyCode::Char(']') | KeyCode::PageDown => app.next_month(),
            KeyCode::Char('t') => app.go_to_today(),
            KeyCode::Enter | KeyCode::Char(' ') => app.open_editor(),
            KeyCode::Char('x') => app.calendar.dismiss_notice(),
            _ => {}
        }
    }
}
