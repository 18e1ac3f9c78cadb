//! Soft-wrap layer: splits model lines into view lines and maps between them.
//!
//! # Segmentation
//!
//! Each model line is cut greedily under the column budget. When the next
//! character would overflow, the line breaks after the last whitespace run
//! inside the window; a token longer than the whole budget is hard-split. A
//! whitespace run sitting on the overflow position hangs off the end of the
//! current view line: its columns are consumed there but render no glyph.
//!
//! ```text
//! "hello world, this is a buffer that will be wrapped"   (column budget 13)
//!
//! view 1  model 1..14   "hello world, "
//! view 2  model 14..24  "this is a "
//! view 3  model 24..36  "buffer that "
//! view 4  model 36..44  "will be "
//! view 5  model 44..51  "wrapped"
//! ```
//!
//! # Seams
//!
//! The model column where a break happens is both the end of one view line and
//! the start of the next. With [`Bias::Right`] (the default) it resolves to the
//! start of the following view line; [`Bias::Left`] keeps it on the preceding
//! one.
//!
//! # Caching
//!
//! Segments are computed lazily per model line and kept until an edit touches
//! that line. The view-line prefix table is rebuilt from the cached segment
//! counts after any invalidation, so lines after an edit shift without being
//! re-segmented.

use crate::{
    buffer::{LineEdit, TextSource},
    config::WrapConfig,
    coords::{Bias, ModelPoint, ViewPoint},
    error::Result,
    traits::{CoordinateTransform, EditableLayer},
};
use smallvec::{smallvec, SmallVec};
use std::{cell::RefCell, iter, ops::Range, sync::Arc};
use tracing::{debug, trace, warn};

/// One view line's share of a model line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapPiece {
    /// Model columns owned by this view line, end exclusive. Includes hanging
    /// whitespace.
    pub columns: Range<u32>,

    /// End (exclusive) of the columns that render glyphs.
    pub visible_end: u32,
}

impl WrapPiece {
    fn from_offsets(start: usize, end: usize, visible_end: usize) -> Self {
        Self {
            columns: start as u32 + 1..end as u32 + 1,
            visible_end: visible_end.min(end) as u32 + 1,
        }
    }

    /// Columns that render glyphs.
    pub fn visible_columns(&self) -> Range<u32> {
        self.columns.start..self.visible_end
    }

    /// Highest view column on this piece. It maps to `columns.end`.
    fn max_view_column(&self) -> u32 {
        self.columns.end - self.columns.start + 1
    }
}

/// Wrap layout of a single model line.
///
/// Pieces are ordered, contiguous and together cover `1..line_length + 1`. The
/// end-of-line column `line_length + 1` belongs to the last piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapSegment {
    pieces: SmallVec<[WrapPiece; 2]>,
}

impl WrapSegment {
    /// Segment `chars` under `budget` columns, or leave it whole when `None`.
    pub fn compute(chars: &[char], budget: Option<u32>) -> Self {
        let len = chars.len();
        let Some(budget) = budget.map(|budget| budget.max(1) as usize) else {
            return Self {
                pieces: smallvec![WrapPiece::from_offsets(0, len, len)],
            };
        };

        let mut pieces = SmallVec::new();
        let mut start = 0;
        while len - start > budget {
            let limit = start + budget;
            let end = if chars[limit].is_whitespace() {
                chars[limit..]
                    .iter()
                    .position(|ch| !ch.is_whitespace())
                    .map_or(len, |offset| limit + offset)
            } else {
                (start + 1..=limit)
                    .rev()
                    .find(|&b| chars[b - 1].is_whitespace() && !chars[b].is_whitespace())
                    .unwrap_or(limit)
            };
            pieces.push(WrapPiece::from_offsets(start, end, limit));
            start = end;
        }

        if start < len || pieces.is_empty() {
            pieces.push(WrapPiece::from_offsets(start, len, len));
        }

        Self { pieces }
    }

    pub fn pieces(&self) -> &[WrapPiece] {
        &self.pieces
    }

    pub fn view_line_count(&self) -> u32 {
        self.pieces.len() as u32
    }

    /// Map a model column to `(row within this segment, view column)`.
    pub fn to_view(&self, column: u32, bias: Bias) -> (u32, u32) {
        let index = self
            .pieces
            .partition_point(|piece| piece.columns.start <= column)
            .saturating_sub(1);

        if bias == Bias::Left && index > 0 && self.pieces[index].columns.start == column {
            let previous = &self.pieces[index - 1];
            return (index as u32 - 1, previous.max_view_column());
        }

        let piece = &self.pieces[index];
        (index as u32, column.saturating_sub(piece.columns.start) + 1)
    }

    /// Map a row within this segment and a view column back to a model column.
    pub fn to_model(&self, row: u32, view_column: u32) -> u32 {
        let row = (row as usize).min(self.pieces.len() - 1);
        let piece = &self.pieces[row];
        piece.columns.start + view_column.clamp(1, piece.max_view_column()) - 1
    }

    fn piece(&self, row: u32) -> &WrapPiece {
        &self.pieces[(row as usize).min(self.pieces.len() - 1)]
    }
}

/// Cached segments keyed by model line index, plus the view-line prefix table.
#[derive(Debug, Default)]
struct WrapCache {
    lines: Vec<Option<Arc<WrapSegment>>>,

    /// `view_starts[i]` is the number of view lines before model line `i + 1`.
    /// The final entry is the total.
    view_starts: Option<Vec<u32>>,
}

impl WrapCache {
    fn with_lines(line_count: u32) -> Self {
        Self {
            lines: vec![None; line_count.max(1) as usize],
            view_starts: None,
        }
    }

    fn reset(&mut self, line_count: u32) {
        *self = Self::with_lines(line_count);
    }

    fn sync_line_count(&mut self, line_count: u32) {
        if self.lines.len() != line_count.max(1) as usize {
            warn!(
                cached = self.lines.len(),
                actual = line_count,
                "Buffer line count changed without an edit notification, dropping wrap cache"
            );
            self.reset(line_count);
        }
    }

    fn segment<B: TextSource + ?Sized>(
        &mut self,
        buffer: &B,
        budget: Option<u32>,
        line: u32,
    ) -> Arc<WrapSegment> {
        let index = line as usize - 1;
        if let Some(Some(segment)) = self.lines.get(index) {
            return segment.clone();
        }

        trace!(line, "Wrap cache miss");
        let chars: Vec<char> = buffer.line_text(line).chars().collect();
        let segment = Arc::new(WrapSegment::compute(&chars, budget));
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = Some(segment.clone());
        }
        segment
    }

    fn view_starts<B: TextSource + ?Sized>(&mut self, buffer: &B, budget: Option<u32>) -> &[u32] {
        if self.view_starts.is_none() {
            let mut starts = Vec::with_capacity(self.lines.len() + 1);
            let mut total = 0;
            starts.push(total);
            for line in 1..=self.lines.len() as u32 {
                total += self.segment(buffer, budget, line).view_line_count();
                starts.push(total);
            }
            self.view_starts = Some(starts);
        }
        self.view_starts.get_or_insert_with(Vec::new)
    }
}

/// Soft-wrap layer over a buffer.
///
/// Owns the buffer so that every change to it goes through [`WrapMap::edit`]
/// (or is reported through [`WrapMap::invalidate`]) before the next query.
/// Queries take `&self` and fill the cache lazily.
#[derive(Debug)]
pub struct WrapMap<B> {
    buffer: B,
    config: WrapConfig,
    cache: RefCell<WrapCache>,
    version: usize,
}

impl<B: TextSource> WrapMap<B> {
    pub fn new(buffer: B, config: WrapConfig) -> Result<Self> {
        config.validate()?;
        let cache = WrapCache::with_lines(buffer.line_count());
        Ok(Self {
            buffer,
            config,
            cache: RefCell::new(cache),
            version: 0,
        })
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn config(&self) -> WrapConfig {
        self.config
    }

    /// Replace the wrap configuration. Returns whether the layout changed.
    ///
    /// Any change drops every cached segment.
    pub fn set_config(&mut self, config: WrapConfig) -> Result<bool> {
        config.validate()?;
        if config == self.config {
            return Ok(false);
        }

        debug!(?config, "Wrap configuration changed");
        self.config = config;
        self.invalidate_all();
        Ok(true)
    }

    /// Mutate the buffer and invalidate the lines the mutation reports.
    pub fn edit(&mut self, f: impl FnOnce(&mut B) -> LineEdit) -> LineEdit {
        let edit = f(&mut self.buffer);
        self.invalidate(&edit);
        edit
    }

    /// Drop cached segments for `edit.old_lines` and make room for the lines
    /// that replaced them. Later lines keep their segments and shift.
    pub fn invalidate(&mut self, edit: &LineEdit) {
        let cache = self.cache.get_mut();
        let len = cache.lines.len();
        let start = (edit.old_lines.start.max(1) as usize - 1).min(len);
        let end = (edit.old_lines.end.max(1) as usize - 1).clamp(start, len);

        cache.lines.splice(
            start..end,
            iter::repeat(None).take(edit.new_line_count as usize),
        );
        cache.view_starts = None;
        self.version += 1;

        trace!(
            old_lines = ?edit.old_lines,
            new_line_count = edit.new_line_count,
            line_delta = edit.line_delta(),
            "Invalidated wrap segments"
        );
    }

    pub fn invalidate_all(&mut self) {
        let line_count = self.buffer.line_count();
        self.cache.get_mut().reset(line_count);
        self.version += 1;
    }

    /// Wrap layout of `model_line`, computed on first use.
    pub fn segments_for(&self, model_line: u32) -> Arc<WrapSegment> {
        let line = self.clip_model_line(model_line);
        let mut cache = self.cache.borrow_mut();
        cache.sync_line_count(self.buffer.line_count());
        cache.segment(&self.buffer, self.config.budget(), line)
    }

    pub fn view_line_count(&self, model_line: u32) -> u32 {
        self.segments_for(model_line).view_line_count()
    }

    pub fn total_view_lines(&self) -> u32 {
        self.with_view_starts(|starts| starts.last().copied().unwrap_or(0))
    }

    /// View lines occupied by `model_line`, end exclusive.
    pub fn view_line_range(&self, model_line: u32) -> Range<u32> {
        let index = self.clip_model_line(model_line) as usize - 1;
        self.with_view_starts(|starts| starts[index] + 1..starts[index + 1] + 1)
    }

    /// Model line that `view_line` belongs to.
    pub fn model_line_of(&self, view_line: u32) -> u32 {
        self.locate_view_line(view_line).0
    }

    /// Project a model position into view space, clamping it first.
    pub fn to_view_point(&self, point: ModelPoint, bias: Bias) -> ViewPoint {
        let clipped = self.buffer.clip_point(point);
        if clipped != point {
            trace!(%point, %clipped, "Clamped model point");
        }

        let first_view_line = self.view_line_range(clipped.line).start;
        let (row, column) = self
            .segments_for(clipped.line)
            .to_view(clipped.column, bias);
        ViewPoint::new(first_view_line + row, column)
    }

    /// Project a view position back into model space, clamping it first.
    pub fn to_model_point(&self, point: ViewPoint) -> ModelPoint {
        let (model_line, row) = self.locate_view_line(point.line);
        let column = self.segments_for(model_line).to_model(row, point.column);
        ModelPoint::new(model_line, column)
    }

    /// Clamp `point` onto the nearest position that exists in view space.
    ///
    /// Lines outside the layout clamp to its first or last position.
    pub fn clip_view_point(&self, point: ViewPoint) -> ViewPoint {
        if point.line < 1 {
            return ViewPoint::new(1, 1);
        }
        if point.line > self.total_view_lines().max(1) {
            return self.max_view_point();
        }
        let (model_line, row) = self.locate_view_line(point.line);
        let max_column = self.segments_for(model_line).piece(row).max_view_column();
        ViewPoint::new(point.line, point.column.clamp(1, max_column))
    }

    pub fn max_view_point(&self) -> ViewPoint {
        self.to_view_point(self.buffer.max_point(), Bias::Right)
    }

    /// Rendered text of `view_line`, without hanging whitespace past the budget.
    pub fn line_content(&self, view_line: u32) -> String {
        let (model_line, row) = self.locate_view_line(view_line);
        let segment = self.segments_for(model_line);
        let visible = segment.piece(row).visible_columns();
        self.buffer
            .line_text(model_line)
            .chars()
            .skip(visible.start as usize - 1)
            .take((visible.end - visible.start) as usize)
            .collect()
    }

    pub fn line_min_column(&self, _view_line: u32) -> u32 {
        1
    }

    /// Column after the last rendered glyph of `view_line`.
    pub fn line_max_column(&self, view_line: u32) -> u32 {
        let (model_line, row) = self.locate_view_line(view_line);
        let visible = self.segments_for(model_line).piece(row).visible_columns();
        visible.end - visible.start + 1
    }

    /// Number of model lines with a cached segment.
    #[cfg(test)]
    pub(crate) fn cached_line_count(&self) -> usize {
        self.cache
            .borrow()
            .lines
            .iter()
            .filter(|segment| segment.is_some())
            .count()
    }

    fn clip_model_line(&self, line: u32) -> u32 {
        line.clamp(1, self.buffer.line_count().max(1))
    }

    fn with_view_starts<R>(&self, f: impl FnOnce(&[u32]) -> R) -> R {
        let mut cache = self.cache.borrow_mut();
        cache.sync_line_count(self.buffer.line_count());
        f(cache.view_starts(&self.buffer, self.config.budget()))
    }

    /// Resolve a (clamped) view line to `(model line, row within its segment)`.
    fn locate_view_line(&self, view_line: u32) -> (u32, u32) {
        self.with_view_starts(|starts| {
            let total = starts.last().copied().unwrap_or(0).max(1);
            let line = view_line.clamp(1, total);
            let index = starts.partition_point(|&start| start < line).max(1) - 1;
            (index as u32 + 1, line - starts[index] - 1)
        })
    }
}

impl<B: TextSource> CoordinateTransform<ModelPoint, ViewPoint> for WrapMap<B> {
    fn to_coords(&self, point: ModelPoint) -> ViewPoint {
        self.to_view_point(point, Bias::Right)
    }

    fn from_coords(&self, point: ViewPoint) -> ModelPoint {
        self.to_model_point(point)
    }
}

impl<B: TextSource> EditableLayer for WrapMap<B> {
    fn apply_edit(&mut self, edit: &LineEdit) {
        self.invalidate(edit);
    }

    fn version(&self) -> usize {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{buffer::BufferSnapshot, coords::ModelRange};

    const WRAPPED: &str = "hello world, this is a buffer that will be wrapped";

    fn create_wrap_map(text: &str, column: u32) -> WrapMap<BufferSnapshot> {
        WrapMap::new(
            BufferSnapshot::from_text(text),
            WrapConfig::fixed_column(column),
        )
        .unwrap()
    }

    fn segment(text: &str, budget: u32) -> Vec<Range<u32>> {
        let chars: Vec<char> = text.chars().collect();
        WrapSegment::compute(&chars, Some(budget))
            .pieces()
            .iter()
            .map(|piece| piece.columns.clone())
            .collect()
    }

    fn view_lines(wrap_map: &WrapMap<BufferSnapshot>) -> Vec<String> {
        (1..=wrap_map.total_view_lines())
            .map(|line| wrap_map.line_content(line))
            .collect()
    }

    #[test]
    fn word_wrap_prefers_whitespace() {
        let wrap_map = create_wrap_map(WRAPPED, 13);

        assert_eq!(
            view_lines(&wrap_map),
            vec![
                "hello world, ",
                "this is a ",
                "buffer that ",
                "will be ",
                "wrapped"
            ]
        );
        assert_eq!(
            segment(WRAPPED, 13),
            vec![1..14, 14..24, 24..36, 36..44, 44..51]
        );
    }

    #[test]
    fn long_token_is_hard_split() {
        assert_eq!(segment(&"A".repeat(30), 10), vec![1..11, 11..21, 21..31]);
        assert_eq!(segment("ab abcdefghijkl", 5), vec![1..4, 4..9, 9..14, 14..16]);
    }

    #[test]
    fn overflowing_whitespace_hangs() {
        let wrap_map = create_wrap_map("abcde    fgh", 5);

        assert_eq!(segment("abcde    fgh", 5), vec![1..10, 10..13]);
        assert_eq!(wrap_map.line_content(1), "abcde");
        assert_eq!(wrap_map.line_max_column(1), 6);
        assert_eq!(wrap_map.line_content(2), "fgh");

        // Hanging columns still map onto the first view line.
        assert_eq!(
            wrap_map.to_view_point(ModelPoint::new(1, 8), Bias::Right),
            ViewPoint::new(1, 8)
        );
        assert_eq!(
            wrap_map.to_model_point(ViewPoint::new(1, 8)),
            ModelPoint::new(1, 8)
        );
    }

    #[test]
    fn trailing_whitespace_stays_on_last_line() {
        assert_eq!(segment("abcde     ", 5), vec![1..11]);
    }

    #[test]
    fn empty_and_short_lines_are_single_pieces() {
        assert_eq!(segment("", 5), vec![1..1]);
        assert_eq!(segment("abc", 5), vec![1..4]);
        assert_eq!(segment("abcde", 5), vec![1..6]);
    }

    #[test]
    fn no_wrap_mode_keeps_lines_whole() {
        let wrap_map =
            WrapMap::new(BufferSnapshot::from_text(WRAPPED), WrapConfig::none()).unwrap();

        assert_eq!(wrap_map.total_view_lines(), 1);
        assert_eq!(wrap_map.line_content(1), WRAPPED);
        assert_eq!(wrap_map.line_max_column(1), 51);
    }

    #[test]
    fn seam_resolves_by_bias() {
        let wrap_map = create_wrap_map(WRAPPED, 13);
        let seam = ModelPoint::new(1, 14);

        assert_eq!(
            wrap_map.to_view_point(seam, Bias::Right),
            ViewPoint::new(2, 1)
        );
        assert_eq!(
            wrap_map.to_view_point(seam, Bias::Left),
            ViewPoint::new(1, 14)
        );
        assert_eq!(
            wrap_map.to_view_point(ModelPoint::new(1, 15), Bias::Left),
            ViewPoint::new(2, 2)
        );
        assert_eq!(
            wrap_map.to_view_point(ModelPoint::new(1, 1), Bias::Left),
            ViewPoint::new(1, 1)
        );
    }

    #[test]
    fn end_of_line_maps_to_last_view_line() {
        let wrap_map = create_wrap_map(WRAPPED, 13);
        assert_eq!(
            wrap_map.to_view_point(ModelPoint::new(1, 51), Bias::Right),
            ViewPoint::new(5, 8)
        );
        assert_eq!(wrap_map.max_view_point(), ViewPoint::new(5, 8));
    }

    #[test]
    fn view_to_model_uses_segment_offsets() {
        let wrap_map = create_wrap_map(WRAPPED, 13);

        assert_eq!(
            wrap_map.to_model_point(ViewPoint::new(2, 1)),
            ModelPoint::new(1, 14)
        );
        assert_eq!(
            wrap_map.to_model_point(ViewPoint::new(3, 13)),
            ModelPoint::new(1, 36)
        );
        // The max column of a wrapped line is the seam itself.
        assert_eq!(
            wrap_map.to_model_point(ViewPoint::new(1, 14)),
            ModelPoint::new(1, 14)
        );
    }

    #[test]
    fn out_of_range_points_are_clamped() {
        let wrap_map = create_wrap_map(WRAPPED, 13);

        assert_eq!(
            wrap_map.to_view_point(ModelPoint::new(0, 0), Bias::Right),
            ViewPoint::new(1, 1)
        );
        assert_eq!(
            wrap_map.to_view_point(ModelPoint::new(4, 200), Bias::Right),
            ViewPoint::new(5, 8)
        );
        assert_eq!(
            wrap_map.to_model_point(ViewPoint::new(99, 99)),
            ModelPoint::new(1, 51)
        );
        assert_eq!(
            wrap_map.to_model_point(ViewPoint::new(2, 0)),
            ModelPoint::new(1, 14)
        );
        assert_eq!(
            wrap_map.clip_view_point(ViewPoint::new(2, 40)),
            ViewPoint::new(2, 11)
        );
    }

    #[test]
    fn points_on_missing_lines_clamp_to_document_ends() {
        let wrap_map = create_wrap_map(WRAPPED, 13);

        assert_eq!(
            wrap_map.to_view_point(ModelPoint::new(7, 1), Bias::Right),
            ViewPoint::new(5, 8)
        );
        assert_eq!(
            wrap_map.to_view_point(ModelPoint::new(0, 40), Bias::Right),
            ViewPoint::new(1, 1)
        );
        assert_eq!(
            wrap_map.clip_view_point(ViewPoint::new(9, 1)),
            ViewPoint::new(5, 8)
        );
        assert_eq!(
            wrap_map.clip_view_point(ViewPoint::new(0, 9)),
            ViewPoint::new(1, 1)
        );
    }

    #[test]
    fn view_lines_across_model_lines() {
        let wrap_map = create_wrap_map("short\nThis is a longer line\n\nend", 10);

        assert_eq!(wrap_map.view_line_count(1), 1);
        assert_eq!(wrap_map.view_line_count(2), 3);
        assert_eq!(wrap_map.view_line_count(3), 1);
        assert_eq!(wrap_map.total_view_lines(), 6);

        assert_eq!(wrap_map.view_line_range(2), 2..5);
        assert_eq!(wrap_map.model_line_of(4), 2);
        assert_eq!(wrap_map.model_line_of(5), 3);
        assert_eq!(wrap_map.model_line_of(6), 4);

        assert_eq!(
            wrap_map.to_view_point(ModelPoint::new(4, 2), Bias::Right),
            ViewPoint::new(6, 2)
        );
        assert_eq!(wrap_map.line_content(3), "longer ");
        assert_eq!(wrap_map.line_content(5), "");
    }

    #[test]
    fn segments_are_computed_lazily() {
        let wrap_map = create_wrap_map("one\ntwo\nthree", 10);
        assert_eq!(wrap_map.cached_line_count(), 0);

        wrap_map.segments_for(2);
        assert_eq!(wrap_map.cached_line_count(), 1);

        wrap_map.total_view_lines();
        assert_eq!(wrap_map.cached_line_count(), 3);
    }

    #[test]
    fn edit_invalidates_only_touched_lines() {
        let mut wrap_map = create_wrap_map("aaa\nbbb bbb bbb\nccc", 5);
        assert_eq!(wrap_map.total_view_lines(), 5);
        let version = wrap_map.version();

        let edit = wrap_map.edit(|buffer| buffer.edit(ModelRange::from_coords(1, 4, 1, 4), " aaaa"));

        assert_eq!(edit, LineEdit::single_line(1));
        assert!(wrap_map.version() > version);
        assert_eq!(wrap_map.cached_line_count(), 2);
        assert_eq!(wrap_map.total_view_lines(), 6);
        assert_eq!(wrap_map.line_content(2), "aaaa");
        assert_eq!(wrap_map.model_line_of(6), 3);
    }

    #[test]
    fn inserted_lines_shift_later_segments() {
        let mut wrap_map = create_wrap_map("first\nlast line here", 5);
        assert_eq!(wrap_map.view_line_range(2), 2..5);

        wrap_map.edit(|buffer| buffer.edit(ModelRange::from_coords(1, 6, 1, 6), "\nmid\nmid"));

        assert_eq!(wrap_map.buffer().line_count(), 4);
        assert_eq!(wrap_map.view_line_range(4), 4..7);
        assert_eq!(wrap_map.line_content(4), "last ");
        assert_eq!(
            wrap_map.to_view_point(ModelPoint::new(4, 6), Bias::Right),
            ViewPoint::new(5, 1)
        );
    }

    #[test]
    fn unreported_line_count_change_resets_cache() {
        let mut wrap_map = create_wrap_map("one\ntwo", 10);
        wrap_map.total_view_lines();

        // Mutate behind the layer's back by reporting a bogus edit.
        wrap_map.edit(|buffer| {
            buffer.edit(ModelRange::from_coords(2, 4, 2, 4), "\nthree");
            LineEdit::single_line(2)
        });

        assert_eq!(wrap_map.total_view_lines(), 3);
        assert_eq!(wrap_map.line_content(3), "three");
    }

    #[test]
    fn config_change_forces_full_invalidation() {
        let mut wrap_map = create_wrap_map(WRAPPED, 13);
        assert_eq!(wrap_map.total_view_lines(), 5);

        assert!(!wrap_map.set_config(WrapConfig::fixed_column(13)).unwrap());
        assert_eq!(wrap_map.cached_line_count(), 1);

        assert!(wrap_map.set_config(WrapConfig::fixed_column(25)).unwrap());
        assert_eq!(wrap_map.cached_line_count(), 0);
        assert_eq!(wrap_map.total_view_lines(), 3);

        assert!(wrap_map.set_config(WrapConfig::fixed_column(0)).is_err());
        assert_eq!(wrap_map.config(), WrapConfig::fixed_column(25));
    }

    #[test]
    fn coordinate_transform_trait() {
        let wrap_map = create_wrap_map(WRAPPED, 13);

        let model = ModelPoint::new(1, 30);
        let view: ViewPoint = wrap_map.to_coords(model);
        assert_eq!(view, ViewPoint::new(3, 7));
        assert_eq!(wrap_map.from_coords(view), model);
    }

    #[test]
    fn round_trip_every_model_column() {
        let wrap_map = create_wrap_map(&format!("{WRAPPED}\n\n{}", "x".repeat(40)), 13);

        for line in 1..=wrap_map.buffer().line_count() {
            for column in 1..=wrap_map.buffer().line_length(line) + 1 {
                let model = ModelPoint::new(line, column);
                for bias in [Bias::Left, Bias::Right] {
                    let view = wrap_map.to_view_point(model, bias);
                    assert_eq!(
                        wrap_map.to_model_point(view),
                        model,
                        "Round trip failed for {model} with {bias:?}"
                    );
                }
            }
        }
    }
}
