//! Buffer collaborator interface and a simple in-memory implementation.
//!
//! The display map never owns text semantics. It reads lines through
//! [`TextSource`] and learns about changes through [`LineEdit`]s.

use crate::coords::{ModelPoint, ModelRange};
use std::{borrow::Cow, ops::Range};

/// Read access to the raw document, line by line.
///
/// Lines are 1-based. Lengths are measured in `char`s, which is the column unit
/// of the whole crate.
pub trait TextSource {
    /// Number of lines. A document always has at least one (possibly empty) line.
    fn line_count(&self) -> u32;

    fn line_length(&self, line: u32) -> u32;

    fn line_text(&self, line: u32) -> Cow<'_, str>;

    /// Clamp `point` onto the nearest position that exists in the document.
    ///
    /// Lines before the first clamp to the document start and lines past the
    /// last clamp to [`TextSource::max_point`]; only an existing line keeps
    /// its line and has its column clamped.
    fn clip_point(&self, point: ModelPoint) -> ModelPoint {
        if point.line < 1 {
            return ModelPoint::new(1, 1);
        }
        if point.line > self.line_count().max(1) {
            return self.max_point();
        }
        let max_column = self.line_length(point.line) + 1;
        ModelPoint::new(point.line, point.column.clamp(1, max_column))
    }

    fn max_point(&self) -> ModelPoint {
        let line = self.line_count().max(1);
        ModelPoint::new(line, self.line_length(line) + 1)
    }
}

/// Line-level description of a buffer change.
///
/// The lines in `old_lines` (1-based, end exclusive) were replaced by
/// `new_line_count` lines. An edit inside a single line is
/// `old_lines: n..n + 1, new_line_count: 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    pub old_lines: Range<u32>,
    pub new_line_count: u32,
}

impl LineEdit {
    pub fn new(old_lines: Range<u32>, new_line_count: u32) -> Self {
        Self {
            old_lines,
            new_line_count,
        }
    }

    /// Edit touching only `line`, keeping the line count unchanged.
    pub fn single_line(line: u32) -> Self {
        Self::new(line..line + 1, 1)
    }

    /// Change in total line count caused by this edit.
    pub fn line_delta(&self) -> i64 {
        self.new_line_count as i64 - self.old_lines.len() as i64
    }
}

/// Owned snapshot of a document split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    lines: Vec<String>,
}

impl BufferSnapshot {
    /// Create a snapshot from text. `\n` and `\r\n` both end a line.
    pub fn from_text(text: impl AsRef<str>) -> Self {
        let lines = text
            .as_ref()
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the text covered by `range` with `text`, returning the lines the
    /// change touched. Out-of-range endpoints are clamped.
    pub fn edit(&mut self, range: ModelRange, text: &str) -> LineEdit {
        let range = ModelRange::new(range.start, range.end);
        let start = self.clip_point(range.start);
        let end = self.clip_point(range.end);

        let prefix: String = self.lines[start.line as usize - 1]
            .chars()
            .take(start.column as usize - 1)
            .collect();
        let suffix: String = self.lines[end.line as usize - 1]
            .chars()
            .skip(end.column as usize - 1)
            .collect();

        let joined = format!("{prefix}{text}{suffix}");
        let replacement = BufferSnapshot::from_text(joined).lines;
        let new_line_count = replacement.len() as u32;

        let old_lines = start.line..end.line + 1;
        self.lines.splice(
            old_lines.start as usize - 1..old_lines.end as usize - 1,
            replacement,
        );

        LineEdit::new(old_lines, new_line_count)
    }

    fn line_str(&self, line: u32) -> &str {
        line.checked_sub(1)
            .and_then(|index| self.lines.get(index as usize))
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl TextSource for BufferSnapshot {
    fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    fn line_length(&self, line: u32) -> u32 {
        self.line_str(line).chars().count() as u32
    }

    fn line_text(&self, line: u32) -> Cow<'_, str> {
        Cow::Borrowed(self.line_str(line))
    }
}
