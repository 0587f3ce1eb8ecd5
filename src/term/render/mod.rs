//! Reader rendering
//! Lays out the visible rows of a plain-text document and draws them

use std::io::Write;

use crossterm::{
    cursor, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
};

use crate::constants::modes::{MOUSE_INDICATOR, VISUAL_INDICATOR};
use crate::dom::Document;
use crate::memory::MemoryDocument;
use crate::mode::Mode;
use crate::term::Size;

/// A run of characters sharing one selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub selected: bool,
}

/// One screen row
pub type Row = Vec<Span>;

/// Rows of the document visible at the current scroll offset
///
/// Blank rows are empty. A selected line break shows as a reversed space.
#[must_use]
pub fn visible_rows(doc: &MemoryDocument, height: u16) -> Vec<Row> {
    let height = usize::from(height);
    let mut rows: Vec<Row> = vec![Vec::new(); height];
    let first = doc.scroll_y().round();
    let line_height = doc.line_height();

    for &node in doc.text_nodes() {
        let Some(text) = doc.text(node) else {
            continue;
        };
        let row = ((doc.layout_top(node) - first) / line_height).round();
        if row < 0.0 || row >= height as f64 {
            continue;
        }
        let spans = &mut rows[row as usize];
        for (offset, c) in text.chars().enumerate() {
            let shown = if c == '\n' {
                if !doc.is_selected(node, offset) {
                    continue;
                }
                ' '
            } else {
                c
            };
            push_char(spans, shown, doc.is_selected(node, offset));
        }
    }
    rows
}

fn push_char(spans: &mut Row, c: char, selected: bool) {
    match spans.last_mut() {
        Some(last) if last.selected == selected => last.text.push(c),
        _ => spans.push(Span {
            text: c.to_string(),
            selected,
        }),
    }
}

/// Indicator line: mode and mouse flags, then the title
#[must_use]
pub fn status_line(mode: Mode, mouse_mode: bool, title: &str) -> String {
    let mut parts = Vec::new();
    if mode == Mode::Visual {
        parts.push(VISUAL_INDICATOR);
    }
    if mouse_mode {
        parts.push(MOUSE_INDICATOR);
    }
    parts.push(title);
    parts.join("  ")
}

/// Draw a full frame
pub fn draw<W: Write>(out: &mut W, rows: &[Row], status: &str, size: Size) -> std::io::Result<()> {
    let width = usize::from(size.cols);
    queue!(out, cursor::MoveTo(0, 0))?;
    for (i, row) in rows.iter().enumerate() {
        let y = u16::try_from(i).unwrap_or(u16::MAX);
        queue!(out, cursor::MoveTo(0, y), terminal::Clear(ClearType::CurrentLine))?;
        let mut used = 0;
        for span in row {
            if used >= width {
                break;
            }
            let text: String = span.text.chars().take(width - used).collect();
            used += text.chars().count();
            if span.selected {
                queue!(
                    out,
                    SetAttribute(Attribute::Reverse),
                    Print(text),
                    SetAttribute(Attribute::NoReverse)
                )?;
            } else {
                queue!(out, Print(text))?;
            }
        }
    }

    let status: String = status.chars().take(width).collect();
    queue!(
        out,
        cursor::MoveTo(0, size.text_rows()),
        terminal::Clear(ClearType::CurrentLine),
        SetAttribute(Attribute::Bold),
        Print(status),
        SetAttribute(Attribute::Reset)
    )?;
    out.flush()
}
