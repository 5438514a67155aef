use std::io;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::tui::keys::KeySource;
use crate::tui::surface::Surface;
use crate::tui::theme::Emphasis;
use crate::util::unicode::{display_width, grapheme_count, pop_grapheme};

/// Where a line of input is captured and how long it may get
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub row: u16,
    pub col: u16,
    /// Maximum length in characters; also the drawn width of the field
    pub max_len: usize,
}

impl Field {
    pub fn new(row: u16, col: u16, max_len: usize) -> Self {
        Field { row, col, max_len }
    }
}

/// Draw an input field with its current contents.
pub fn draw_field(surface: &mut dyn Surface, field: Field, value: &str) {
    let pad = field.max_len.saturating_sub(grapheme_count(value));
    surface.set_emphasis(Emphasis::Input);
    surface.draw_text(field.row, field.col, &format!("{}{}", value, " ".repeat(pad)));
    surface.clear_emphasis();
}

/// Blocking line editor: printable keys append (up to `max_len`),
/// Backspace deletes, Enter finishes. The cursor is shown only while
/// capturing.
pub fn capture_line<K: KeySource + ?Sized>(
    keys: &mut K,
    surface: &mut dyn Surface,
    field: Field,
) -> io::Result<String> {
    let mut value = String::new();
    loop {
        draw_field(surface, field, &value);
        let cursor_col = field.col.saturating_add(display_width(&value) as u16);
        surface.set_cursor(Some((field.row, cursor_col)));
        surface.present()?;

        let key = keys.read_key()?;
        match key.code {
            KeyCode::Enter => break,
            KeyCode::Backspace => pop_grapheme(&mut value),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if grapheme_count(&value) < field.max_len {
                    value.push(c);
                }
            }
            _ => {}
        }
    }
    surface.set_cursor(None);
    draw_field(surface, field, &value);
    Ok(value)
}
