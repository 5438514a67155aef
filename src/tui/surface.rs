use std::io;

use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Widget};

use super::theme::{Emphasis, Theme};

/// Drawing target the views issue commands to.
///
/// Coordinates are `(row, col)` from the top-left corner. Anything drawn
/// outside the surface is clipped. Nothing is visible until `present`.
pub trait Surface {
    /// `(rows, cols)`
    fn size(&self) -> (u16, u16);
    fn clear(&mut self);
    fn draw_text(&mut self, row: u16, col: u16, text: &str);
    /// Rounded border with both corners inclusive
    fn draw_box(&mut self, top_left: (u16, u16), bottom_right: (u16, u16));
    fn draw_hline(&mut self, row: u16, col: u16, width: u16);
    fn set_emphasis(&mut self, emphasis: Emphasis);
    fn clear_emphasis(&mut self);
    /// Show the text cursor at `(row, col)`, or hide it
    fn set_cursor(&mut self, position: Option<(u16, u16)>);
    fn present(&mut self) -> io::Result<()>;
}

/// Off-screen cell grid implementing [`Surface`]. Used directly in tests and
/// as the back buffer of [`TerminalSurface`].
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: Buffer,
    theme: Theme,
    emphasis: Emphasis,
    cursor: Option<(u16, u16)>,
}

impl Canvas {
    pub fn new(rows: u16, cols: u16, theme: Theme) -> Self {
        let mut canvas = Canvas {
            buffer: Buffer::empty(Rect::new(0, 0, cols, rows)),
            theme,
            emphasis: Emphasis::Normal,
            cursor: None,
        };
        canvas.clear();
        canvas
    }

    pub fn resize(&mut self, rows: u16, cols: u16) {
        self.buffer.resize(Rect::new(0, 0, cols, rows));
    }

    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    pub fn cell(&self, row: u16, col: u16) -> Option<&Cell> {
        self.buffer.cell((col, row))
    }

    /// Plain text of one row, trailing spaces removed
    pub fn row_text(&self, row: u16) -> String {
        let width = self.buffer.area.width;
        let s: String = (0..width)
            .filter_map(|col| self.cell(row, col))
            .map(|cell| cell.symbol())
            .collect();
        s.trim_end().to_string()
    }

    /// Whole grid as plain text (no styles), trailing blank rows dropped
    pub fn to_text(&self) -> String {
        let lines: Vec<String> = (0..self.buffer.area.height)
            .map(|row| self.row_text(row))
            .collect();
        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1);
        lines[..end].join("\n")
    }

    /// Position of the first occurrence of `needle`, scanning rows top-down
    pub fn find(&self, needle: &str) -> Option<(u16, u16)> {
        for row in 0..self.buffer.area.height {
            let text = self.row_text(row);
            if let Some(byte_idx) = text.find(needle) {
                let col = text[..byte_idx].chars().count() as u16;
                return Some((row, col));
            }
        }
        None
    }

    fn current_style(&self) -> ratatui::style::Style {
        self.theme.style(self.emphasis)
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u16, u16) {
        (self.buffer.area.height, self.buffer.area.width)
    }

    fn clear(&mut self) {
        self.buffer.reset();
        let area = self.buffer.area;
        self.buffer.set_style(area, self.theme.style(Emphasis::Normal));
        self.emphasis = Emphasis::Normal;
        self.cursor = None;
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) {
        let (rows, cols) = self.size();
        if row >= rows || col >= cols {
            return;
        }
        let style = self.current_style();
        self.buffer
            .set_stringn(col, row, text, (cols - col) as usize, style);
    }

    fn draw_box(&mut self, top_left: (u16, u16), bottom_right: (u16, u16)) {
        let (top, left) = top_left;
        let (bottom, right) = bottom_right;
        if bottom <= top || right <= left {
            return;
        }
        let area = Rect::new(left, top, right - left + 1, bottom - top + 1)
            .intersection(self.buffer.area);
        if area.is_empty() {
            return;
        }
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.style(Emphasis::Border))
            .render(area, &mut self.buffer);
    }

    fn draw_hline(&mut self, row: u16, col: u16, width: u16) {
        let (_, cols) = self.size();
        let width = width.min(cols.saturating_sub(col));
        self.draw_text(row, col, &"\u{2500}".repeat(width as usize));
    }

    fn set_emphasis(&mut self, emphasis: Emphasis) {
        self.emphasis = emphasis;
    }

    fn clear_emphasis(&mut self) {
        self.emphasis = Emphasis::Normal;
    }

    fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor = position;
    }

    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// [`Surface`] backed by a real terminal. Draw commands go to a [`Canvas`]
/// which `present` copies into the terminal frame.
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    canvas: Canvas,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>, theme: Theme) -> io::Result<Self> {
        let size = terminal.size()?;
        Ok(TerminalSurface {
            terminal,
            canvas: Canvas::new(size.height, size.width, theme),
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn size(&self) -> (u16, u16) {
        self.canvas.size()
    }

    fn clear(&mut self) {
        if let Ok(size) = self.terminal.size() {
            self.canvas.resize(size.height, size.width);
        }
        self.canvas.clear();
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str) {
        self.canvas.draw_text(row, col, text);
    }

    fn draw_box(&mut self, top_left: (u16, u16), bottom_right: (u16, u16)) {
        self.canvas.draw_box(top_left, bottom_right);
    }

    fn draw_hline(&mut self, row: u16, col: u16, width: u16) {
        self.canvas.draw_hline(row, col, width);
    }

    fn set_emphasis(&mut self, emphasis: Emphasis) {
        self.canvas.set_emphasis(emphasis);
    }

    fn clear_emphasis(&mut self) {
        self.canvas.clear_emphasis();
    }

    fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.canvas.set_cursor(position);
    }

    fn present(&mut self) -> io::Result<()> {
        let canvas = &self.canvas;
        self.terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            for row in area.top()..area.bottom() {
                for col in area.left()..area.right() {
                    if let Some(cell) = canvas.cell(row, col) {
                        buf[(col, row)] = cell.clone();
                    }
                }
            }
            if let Some((row, col)) = canvas.cursor() {
                frame.set_cursor_position((col, row));
            }
        })?;
        Ok(())
    }
}
