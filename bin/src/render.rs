//! Plain-text dump of a viewport.

use std::fmt::{self, Write};
use weft_display_map::{
    DisplayMap, InlineDecoration, InlineDecorationKind, MarkerSide, TextSource, ViewRange,
};

/// Viewport covering view lines `from..=to`, clamped to the document.
pub fn viewport<B: TextSource>(
    display_map: &DisplayMap<B>,
    from: u32,
    to: Option<u32>,
) -> ViewRange {
    let last = display_map.view_line_count().max(1);
    let from = from.clamp(1, last);
    let to = to.unwrap_or(last).clamp(from, last);
    display_map.view_line_range(from, to)
}

/// Every view line of `viewport` followed by its render entries, one per line.
///
/// ```text
///    2 | this is a
///      |   span   [1:2 -> 2:2] hl
///      |   after  @2:2 close
/// ```
pub fn render<B: TextSource>(
    display_map: &DisplayMap<B>,
    viewport: ViewRange,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for view_line in viewport.start.line..=viewport.end.line {
        let data = display_map.view_line_data(viewport, view_line);
        writeln!(out, "{view_line:>4} | {}", data.content)?;
        for entry in &data.inline_decorations {
            writeln!(out, "     |   {}", describe(entry))?;
        }
    }
    Ok(out)
}

fn describe(entry: &InlineDecoration) -> String {
    let label = match entry.kind {
        InlineDecorationKind::CharacterSpan => "span",
        InlineDecorationKind::InsertionMarker(MarkerSide::Before) => "before",
        InlineDecorationKind::InsertionMarker(MarkerSide::After) => "after",
    };
    if entry.is_marker() {
        format!("{label:<6} @{} {}", entry.range.start, entry.class_name)
    } else {
        format!("{label:<6} {} {}", entry.range, entry.class_name)
    }
}
