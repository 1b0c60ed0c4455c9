//! Interactive canvas: event loop tying input, the animation timer and drawing together

use crate::config::{resolve_seed, ShowConfig};
use crate::dispatch::dispatch_click;
use crate::help::{render_help_overlay, HELP_TEXT};
use crate::puddle::{AnimationSession, Redraw};
use crate::render::{draw_redraw, draw_static, Layout};
use crate::terminal::{Input, MouseCaptureGuard, Terminal};
use crossterm::event::{KeyCode, KeyModifiers};
use rand::prelude::*;
use std::io;
use std::time::{Duration, Instant};

/// Longest wait for input while nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    ToggleHelp,
    ToggleTable,
    Ignore,
}

fn handle_key(code: KeyCode, mods: KeyModifiers) -> Action {
    match normalize_key(code, mods) {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if mods.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('t') | KeyCode::Char('T') => Action::ToggleTable,
        _ => Action::Ignore,
    }
}

fn normalize_key(code: KeyCode, mods: KeyModifiers) -> KeyCode {
    if code == KeyCode::Char('/') && mods.contains(KeyModifiers::SHIFT) {
        KeyCode::Char('?')
    } else {
        code
    }
}

/// Run the interactive canvas until the user quits
pub fn run(config: ShowConfig) -> io::Result<()> {
    let seed = resolve_seed(config.seed);
    log::info!("canvas starting, seed={seed}, {:?}", config.animation);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut term = Terminal::new(true)?;
    let _mouse_guard = MouseCaptureGuard::enable()?;
    term.clear_screen()?;

    let mut session = AnimationSession::new(config.animation);
    let mut show_table = config.show_table;
    let mut show_help = false;
    let (width, height) = term.size();
    let mut layout = Layout::compute(width, height, show_table);
    let mut scene: Option<Redraw> = None;
    let mut dirty = true;

    loop {
        let wait = session
            .time_until_due(Instant::now())
            .map_or(IDLE_POLL, |d| d.min(IDLE_POLL));

        if let Some(input) = term.poll_input(wait)? {
            match input {
                Input::Key(code, mods) => match handle_key(code, mods) {
                    Action::Quit => break,
                    Action::ToggleHelp => {
                        show_help = !show_help;
                        dirty = true;
                    }
                    Action::ToggleTable => {
                        show_table = !show_table;
                        let (w, h) = term.size();
                        layout = Layout::compute(w, h, show_table);
                        dirty = true;
                    }
                    Action::Ignore => {}
                },
                Input::Click { column, row } => {
                    let coordinate = layout.canvas.to_plot(column, row);
                    if let Some(redraw) = dispatch_click(coordinate, &mut session, Instant::now(), &mut rng) {
                        scene = Some(redraw);
                        dirty = true;
                    }
                }
                Input::Resize(w, h) => {
                    term.resize(w, h);
                    term.clear_screen()?;
                    layout = Layout::compute(w, h, show_table);
                    dirty = true;
                }
            }
        }

        if let Some(redraw) = session.poll(Instant::now(), &mut rng) {
            scene = (!redraw.is_final()).then_some(redraw);
            dirty = true;
        }

        if dirty {
            term.clear();
            draw_static(&mut term, &layout);
            if let Some(redraw) = &scene {
                draw_redraw(&mut term, &layout.canvas, redraw);
            }
            if show_help {
                render_help_overlay(&mut term, HELP_TEXT);
            }
            term.present()?;
            dirty = false;
        }
    }

    session.teardown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        assert_eq!(handle_key(KeyCode::Char('q'), KeyModifiers::NONE), Action::Quit);
        assert_eq!(handle_key(KeyCode::Esc, KeyModifiers::NONE), Action::Quit);
        assert_eq!(handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit);
        assert_eq!(handle_key(KeyCode::Char('c'), KeyModifiers::NONE), Action::Ignore);
    }

    #[test]
    fn toggles() {
        assert_eq!(handle_key(KeyCode::Char('?'), KeyModifiers::NONE), Action::ToggleHelp);
        assert_eq!(handle_key(KeyCode::Char('/'), KeyModifiers::SHIFT), Action::ToggleHelp);
        assert_eq!(handle_key(KeyCode::Char('t'), KeyModifiers::NONE), Action::ToggleTable);
    }
}
