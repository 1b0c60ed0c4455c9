use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        poll, read, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, stdout, Write};
use std::time::Duration;

/// Terminal abstraction for rendering
pub struct Terminal {
    width: u16,
    height: u16,
    buffer: Vec<Vec<Cell>>,
    alternate_screen: bool,
}

/// A single cell in the terminal buffer
#[derive(Clone, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bold: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bold: false,
        }
    }
}

/// Input the event loop cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(KeyCode, KeyModifiers),
    /// Left button press at a screen cell
    Click { column: u16, row: u16 },
    Resize(u16, u16),
}

impl Terminal {
    /// Initialize the terminal for drawing
    pub fn new(alternate_screen: bool) -> io::Result<Self> {
        let (width, height) = size()?;

        if alternate_screen {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen, Hide)?;
        }

        Ok(Self::with_size(width, height, alternate_screen))
    }

    /// Off-screen buffer of a fixed size
    #[cfg(test)]
    pub fn headless(width: u16, height: u16) -> Self {
        Self::with_size(width, height, false)
    }

    fn with_size(width: u16, height: u16, alternate_screen: bool) -> Self {
        Self {
            width,
            height,
            buffer: vec![vec![Cell::default(); width as usize]; height as usize],
            alternate_screen,
        }
    }

    /// Get terminal dimensions
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.buffer = vec![vec![Cell::default(); width as usize]; height as usize];
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        for row in &mut self.buffer {
            row.fill(Cell::default());
        }
    }

    /// Clear the actual terminal
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(stdout(), Clear(ClearType::All))?;
        Ok(())
    }

    #[cfg(test)]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.buffer.get(y as usize).and_then(|row| row.get(x as usize))
    }

    /// Set a character at position with optional color
    pub fn set(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bold: bool) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize][x as usize] = Cell { ch, fg, bold };
        }
    }

    /// Set a string starting at position
    pub fn set_str(&mut self, x: i32, y: i32, s: &str, fg: Option<Color>, bold: bool) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i as i32, y, ch, fg, bold);
        }
    }

    /// Render the entire buffer to screen
    pub fn present(&self) -> io::Result<()> {
        let mut out = stdout();

        for (y, row) in self.buffer.iter().enumerate() {
            queue!(out, MoveTo(0, y as u16))?;

            for cell in row {
                if cell.bold {
                    queue!(out, SetAttribute(Attribute::Bold))?;
                }

                if let Some(color) = cell.fg {
                    queue!(out, SetForegroundColor(color), Print(cell.ch), ResetColor)?;
                } else {
                    queue!(out, Print(cell.ch))?;
                }

                if cell.bold {
                    queue!(out, SetAttribute(Attribute::Reset))?;
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Wait up to `timeout` for an input event
    pub fn poll_input(&self, timeout: Duration) -> io::Result<Option<Input>> {
        if !poll(timeout)? {
            return Ok(None);
        }
        let input = match read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                Some(Input::Key(key.code, key.modifiers))
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(Input::Click {
                    column: mouse.column,
                    row: mouse.row,
                }),
                _ => None,
            },
            Event::Resize(w, h) => Some(Input::Resize(w, h)),
            _ => None,
        };
        Ok(input)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.alternate_screen {
            let _ = execute!(stdout(), Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
    }
}

/// Mouse reporting for as long as the guard lives
pub struct MouseCaptureGuard;

impl MouseCaptureGuard {
    pub fn enable() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for MouseCaptureGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_ignores_out_of_bounds() {
        let mut term = Terminal::headless(4, 2);
        term.set(-1, 0, 'x', None, false);
        term.set(4, 1, 'x', None, false);
        term.set(1, 1, 'y', Some(Color::Blue), true);
        assert_eq!(term.get(1, 1).map(|c| c.ch), Some('y'));
        assert_eq!(term.get(0, 0).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn set_str_clips_at_right_edge() {
        let mut term = Terminal::headless(3, 1);
        term.set_str(1, 0, "abc", None, false);
        assert_eq!(term.get(1, 0).map(|c| c.ch), Some('a'));
        assert_eq!(term.get(2, 0).map(|c| c.ch), Some('b'));
    }

    #[test]
    fn resize_resets_buffer() {
        let mut term = Terminal::headless(2, 2);
        term.set(0, 0, 'z', None, false);
        term.resize(5, 3);
        assert_eq!(term.size(), (5, 3));
        assert_eq!(term.get(0, 0).map(|c| c.ch), Some(' '));
        assert!(term.get(4, 2).is_some());
    }
}
