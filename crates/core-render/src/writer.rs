//! Frame encoder and terminal writer.
//!
//! The whole frame is queued into an in-memory buffer (cursor hidden while
//! painting) and handed to the output in a single `write_all`, so the
//! terminal never shows a half-drawn screen.

use anyhow::Result;
use core_model::EditorModel;
use core_syntax::Highlight;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

use crate::style::{color_for, control_symbol};
use crate::{Frame, FrameRow, build_frame};

#[derive(Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Queue a complete frame.
    pub fn encode(&mut self, frame: &Frame) -> Result<()> {
        let out = &mut self.buf;
        queue!(out, Hide, MoveTo(0, 0))?;
        for row in &frame.rows {
            match row {
                FrameRow::Text { bytes, classes } => encode_text(out, bytes, classes)?,
                FrameRow::Filler => out.push(b'~'),
                FrameRow::Banner(line) => queue!(out, Print(line))?,
            }
            queue!(out, Clear(ClearType::UntilNewLine), Print("\r\n"))?;
        }
        queue!(
            out,
            SetAttribute(Attribute::Reverse),
            Print(&frame.status),
            SetAttribute(Attribute::Reset),
            Print("\r\n"),
            SetAttribute(Attribute::Reverse),
            Clear(ClearType::UntilNewLine),
            Print(&frame.message),
            SetAttribute(Attribute::Reset),
            MoveTo(frame.cursor.0, frame.cursor.1),
            Show
        )?;
        Ok(())
    }

    /// Write the buffered frame in one call and flush.
    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        out.write_all(&self.buf)?;
        out.flush()?;
        Ok(())
    }
}

fn encode_text(out: &mut Vec<u8>, bytes: &[u8], classes: &[Highlight]) -> Result<()> {
    let mut current: Option<Color> = None;
    for (&b, &class) in bytes.iter().zip(classes) {
        if let Some(sym) = control_symbol(b) {
            queue!(out, SetAttribute(Attribute::Reverse))?;
            out.push(sym);
            queue!(out, SetAttribute(Attribute::Reset))?;
            if let Some(c) = current {
                queue!(out, SetForegroundColor(c))?;
            }
            continue;
        }
        let color = color_for(class);
        if color != current {
            queue!(out, SetForegroundColor(color.unwrap_or(Color::Reset)))?;
            current = color;
        }
        out.push(b);
    }
    if current.is_some() {
        queue!(out, SetForegroundColor(Color::Reset))?;
    }
    Ok(())
}

/// Build, encode and write one frame for `model`.
pub fn render<W: Write>(model: &EditorModel, version: &str, out: &mut W) -> Result<()> {
    let frame = build_frame(model, version);
    let mut writer = Writer::new();
    writer.encode(&frame)?;
    tracing::trace!(target: "render", bytes = writer.bytes().len(), "frame");
    writer.flush_to(out)
}
