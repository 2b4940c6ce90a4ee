//! End-to-end workbench flows driven through synthetic input events
//! against a test backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use termfolio::app::{UiTheme, Workbench};
use termfolio::core::{EventResult, InputEvent, View};
use termfolio::models::Location;
use termfolio::services::UiConfig;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn workbench() -> Workbench {
    Workbench::with_theme(UiConfig::default(), UiTheme::dark()).unwrap()
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap()
}

fn draw(terminal: &mut Terminal<TestBackend>, bench: &mut Workbench) {
    terminal
        .draw(|frame| {
            let area = frame.area();
            bench.render(frame, area);
        })
        .unwrap();
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let mut out = String::new();
    for (i, cell) in buffer.content.iter().enumerate() {
        out.push_str(cell.symbol());
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, modifiers))
}

fn click(column: u16, row: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn loc(s: &str) -> Location {
    Location::new(s)
}

/// Explorer rows start below the top bar (1) and the EXPLORER header (1).
fn explorer_row_y(index: u16) -> u16 {
    index + 2
}

#[test]
fn initial_screen_shows_workspace_chrome() {
    let mut bench = workbench();
    let mut term = terminal();
    draw(&mut term, &mut bench);
    let screen = screen_text(&term);

    assert!(screen.contains("EXPLORER"));
    assert!(screen.contains("PORTFOLIO"));
    assert!(screen.contains("Home.jsx"));
    assert!(screen.contains("JavaScript JSX"));
}

#[test]
fn clicking_a_leaf_opens_a_tab_and_navigates() {
    let mut bench = workbench();
    let mut term = terminal();
    draw(&mut term, &mut bench);

    // Rows: 0 PORTFOLIO, 1 Home.jsx, 2 Projects, 3 Skills.jsx, ...
    bench.handle_input(&click(4, explorer_row_y(3)));
    draw(&mut term, &mut bench);

    assert_eq!(bench.tabs().len(), 2);
    assert_eq!(bench.current_location(), &loc("/skills"));
    assert!(screen_text(&term).contains("Skills.jsx"));
}

#[test]
fn clicking_a_folder_expands_without_navigating() {
    let mut bench = workbench();
    let mut term = terminal();
    draw(&mut term, &mut bench);

    let before = bench.tree().flatten().len();
    bench.handle_input(&click(4, explorer_row_y(2)));
    draw(&mut term, &mut bench);

    assert!(bench.tree().flatten().len() > before);
    assert_eq!(bench.tabs().len(), 1);
    assert_eq!(bench.current_location(), &loc("/home"));
    assert!(screen_text(&term).contains("Frontend"));
}

#[test]
fn keyboard_navigation_opens_a_leaf() {
    let mut bench = workbench();
    let mut term = terminal();
    draw(&mut term, &mut bench);

    bench.handle_input(&key(KeyCode::Char('e'), KeyModifiers::CONTROL));
    for _ in 0..3 {
        bench.handle_input(&key(KeyCode::Down, KeyModifiers::NONE));
    }
    bench.handle_input(&key(KeyCode::Enter, KeyModifiers::NONE));

    assert_eq!(bench.current_location(), &loc("/skills"));
    assert_eq!(bench.tabs().len(), 2);
}

#[test]
fn tab_clicks_activate_and_close() {
    let mut bench = workbench();
    let mut term = terminal();
    draw(&mut term, &mut bench);

    bench.handle_input(&click(4, explorer_row_y(3)));
    draw(&mut term, &mut bench);
    assert_eq!(bench.current_location(), &loc("/skills"));

    // Tab row is at y=1, first tab starts at the sidebar edge (x=28):
    // " Home.jsx "x  is 12 columns, then a divider, then " Skills.jsx "x .
    bench.handle_input(&click(29, 1));
    assert_eq!(bench.current_location(), &loc("/home"));
    assert_eq!(bench.tabs().len(), 2);

    // Close the (inactive) skills tab via its close glyph.
    draw(&mut term, &mut bench);
    bench.handle_input(&click(53, 1));
    assert_eq!(bench.tabs().len(), 1);
    assert_eq!(bench.current_location(), &loc("/home"));
}

#[test]
fn closing_active_tab_with_ctrl_w_falls_back_left() {
    let mut bench = workbench();
    let mut term = terminal();
    draw(&mut term, &mut bench);

    bench.handle_input(&click(4, explorer_row_y(3)));
    assert_eq!(bench.current_location(), &loc("/skills"));

    bench.handle_input(&key(KeyCode::Char('w'), KeyModifiers::CONTROL));
    assert_eq!(bench.tabs().len(), 1);
    assert_eq!(bench.current_location(), &loc("/home"));
}

#[test]
fn typewriter_finishes_and_shows_full_heading() {
    let mut bench = workbench();
    let mut term = terminal();
    draw(&mut term, &mut bench);

    for _ in 0..100 {
        if bench.handle_input(&InputEvent::Tick) == EventResult::Ignored {
            break;
        }
        draw(&mut term, &mut bench);
    }
    draw(&mut term, &mut bench);

    assert!(screen_text(&term).contains("Hi, I'm Asha Verma"));
}

#[test]
fn small_terminal_shows_resize_notice() {
    let mut bench = workbench();
    let mut term = Terminal::new(TestBackend::new(40, 10)).unwrap();
    draw(&mut term, &mut bench);

    let screen = screen_text(&term);
    assert!(screen.contains("bigger terminal"));
    assert!(!screen.contains("EXPLORER"));
}

#[test]
fn quit_key_reports_quit() {
    let mut bench = workbench();
    assert_eq!(
        bench.handle_input(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
        EventResult::Quit
    );
}
