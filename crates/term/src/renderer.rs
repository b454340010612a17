//! ConsoleRenderer: writes styled lines to a console stream.
//!
//! Output is built as a sequence of crossterm commands in an internal byte
//! buffer and flushed in one write per call. With color disabled the same
//! lines are written as plain text.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::StackSnapshot;
use crate::state_view::{StateView, PROMPT};
use crate::style::{Rgb, Span, SpanStyle};

pub struct ConsoleRenderer<W: Write> {
    out: W,
    buf: Vec<u8>,
    color: bool,
    view: StateView,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            color,
            view: StateView::new(),
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Print the state block.
    pub fn draw_state(&mut self, snap: &StackSnapshot) -> Result<()> {
        let lines = self.view.render(snap);
        self.buf.clear();
        for line in &lines {
            encode_line_into(line, self.color, &mut self.buf)?;
        }
        self.flush_buf()
    }

    /// Print the menu followed by the prompt (no trailing newline).
    pub fn draw_menu(&mut self) -> Result<()> {
        let lines = self.view.menu();
        self.buf.clear();
        for line in &lines {
            encode_line_into(line, self.color, &mut self.buf)?;
        }
        self.buf.queue(Print(PROMPT))?;
        self.flush_buf()
    }

    /// Print the status line of an operation, preceded by a blank line.
    pub fn draw_status(&mut self, status: Option<&str>) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print("\n"))?;
        if let Some(text) = status {
            let line = [Span::styled(text, SpanStyle::PLAIN.bold())];
            encode_line_into(&line, self.color, &mut self.buf)?;
        }
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode one line (spans plus newline) into `out`.
///
/// This builds a sequence of crossterm commands without writing to the console.
pub fn encode_line_into(line: &[Span], color: bool, out: &mut Vec<u8>) -> Result<()> {
    for span in line {
        if color && span.style != SpanStyle::PLAIN {
            apply_style_into(out, span.style)?;
            out.queue(Print(&span.text))?;
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        } else {
            out.queue(Print(&span.text))?;
        }
    }
    out.queue(Print("\n"))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: SpanStyle) -> Result<()> {
    if let Some(fg) = style.fg {
        out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    }
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
