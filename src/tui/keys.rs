use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::input::line::{Field, capture_line};
use super::surface::Surface;

/// Blocking source of key presses
pub trait KeySource {
    fn read_key(&mut self) -> io::Result<KeyEvent>;

    /// Read one line of text into `field`, echoing it on `surface` while
    /// the capture lasts.
    fn read_line(&mut self, surface: &mut dyn Surface, field: Field) -> io::Result<String> {
        capture_line(self, surface, field)
    }
}

/// Key presses from the terminal via crossterm
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn read_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(key);
            }
        }
    }
}

/// Replays a prepared sequence of key presses. Reading past the end fails
/// with `UnexpectedEof`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    queue: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new() -> Self {
        ScriptedKeys::default()
    }

    pub fn key(mut self, code: KeyCode) -> Self {
        self.queue.push_back(KeyEvent::new(code, KeyModifiers::NONE));
        self
    }

    /// Type each character of `text`; `\n` becomes Enter.
    pub fn text(mut self, text: &str) -> Self {
        for c in text.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            self.queue.push_back(KeyEvent::new(code, KeyModifiers::NONE));
        }
        self
    }

    /// Type `text` then press Enter.
    pub fn line(self, text: &str) -> Self {
        self.text(text).key(KeyCode::Enter)
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> io::Result<KeyEvent> {
        self.queue
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }
}
