//! Coordinate types for the two spaces the display map translates between.
//!
//! [`ModelPoint`] addresses the raw buffer and [`ViewPoint`] addresses the
//! soft-wrapped display. Both are 1-based `(line, column)` pairs with the same
//! ordering, but they are distinct types so a model position can never be
//! passed where a view position is expected without going through
//! [`WrapMap`](crate::WrapMap).

use std::fmt;

/// Shared behavior of [`ModelPoint`] and [`ViewPoint`].
pub trait Coordinate: Copy + Ord + fmt::Debug {
    fn new(line: u32, column: u32) -> Self;
    fn line(&self) -> u32;
    fn column(&self) -> u32;
}

/// Position in the raw buffer, before wrapping.
///
/// Lines and columns start at 1. Column `len + 1` is the position after the
/// last character of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelPoint {
    pub line: u32,
    pub column: u32,
}

/// Position in the wrapped display.
///
/// ```text
/// Model (one line, wrap column 13):     View:
/// "hello world, this is a buffer"       1: "hello world, "
///                                       2: "this is a "
///                                       3: "buffer"
/// ModelPoint(1, 14)              ->     ViewPoint(2, 1)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewPoint {
    pub line: u32,
    pub column: u32,
}

impl Default for ModelPoint {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Default for ViewPoint {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl ModelPoint {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Coordinate for ModelPoint {
    fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    fn line(&self) -> u32 {
        self.line
    }

    fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for ModelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl ViewPoint {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Coordinate for ViewPoint {
    fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    fn line(&self) -> u32 {
        self.line
    }

    fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for ViewPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Which side wins when a position sits exactly on a wrap seam.
///
/// A model column at a wrap break is both the end of one view line and the
/// start of the next. [`Bias::Right`] resolves it to the start of the following
/// view line, [`Bias::Left`] to the end of the preceding one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bias {
    Left,
    #[default]
    Right,
}

/// Normalized range between two points of the same coordinate space.
///
/// Construction swaps reversed endpoints, so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointRange<P> {
    pub start: P,
    pub end: P,
}

pub type ModelRange = PointRange<ModelPoint>;
pub type ViewRange = PointRange<ViewPoint>;

impl<P: Coordinate> PointRange<P> {
    pub fn new(a: P, b: P) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// Build a range from `(line, column)` pairs, normalizing the order.
    pub fn from_coords(
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self::new(
            P::new(start_line, start_column),
            P::new(end_line, end_column),
        )
    }

    /// Zero-width range at `point`.
    pub fn empty_at(point: P) -> Self {
        Self {
            start: point,
            end: point,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Inclusive interval test. Ranges that only touch at a single point overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.end >= other.start && self.start <= other.end
    }

    pub fn contains(&self, point: P) -> bool {
        self.start <= point && point <= self.end
    }

    /// Whether this range has at least one position on `line`.
    pub fn spans_line(&self, line: u32) -> bool {
        self.start.line() <= line && line <= self.end.line()
    }
}

impl<P: fmt::Display> fmt::Display for PointRange<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_default_to_document_start() {
        assert_eq!(ModelPoint::default(), ModelPoint::new(1, 1));
        assert_eq!(ViewPoint::default(), ViewPoint::new(1, 1));
    }

    #[test]
    fn points_order_by_line_then_column() {
        let p1 = ModelPoint::new(5, 10);
        let p2 = ModelPoint::new(5, 11);
        let p3 = ModelPoint::new(6, 1);

        assert!(p1 < p2);
        assert!(p2 < p3);
        assert!(p1 < p3);
    }

    #[test]
    fn reversed_range_is_normalized() {
        let range = ModelRange::from_coords(3, 4, 1, 2);
        assert_eq!(range.start, ModelPoint::new(1, 2));
        assert_eq!(range.end, ModelPoint::new(3, 4));

        let same_line = ViewRange::new(ViewPoint::new(2, 9), ViewPoint::new(2, 3));
        assert_eq!(same_line, ViewRange::from_coords(2, 3, 2, 9));
    }

    #[test]
    fn overlap_is_inclusive() {
        let viewport = ModelRange::from_coords(1, 14, 1, 36);

        assert!(!ModelRange::from_coords(1, 2, 1, 3).overlaps(&viewport));
        assert!(ModelRange::from_coords(1, 2, 1, 14).overlaps(&viewport));
        assert!(ModelRange::from_coords(1, 36, 1, 36).overlaps(&viewport));
        assert!(ModelRange::from_coords(1, 20, 1, 20).overlaps(&viewport));
        assert!(!ModelRange::from_coords(1, 37, 1, 40).overlaps(&viewport));
    }

    #[test]
    fn spans_line_covers_both_endpoints() {
        let range = ViewRange::from_coords(2, 5, 4, 1);
        assert!(!range.spans_line(1));
        assert!(range.spans_line(2));
        assert!(range.spans_line(3));
        assert!(range.spans_line(4));
        assert!(!range.spans_line(5));
    }

    #[test]
    fn display_formats_line_and_column() {
        let range = ViewRange::from_coords(1, 2, 3, 4);
        assert_eq!(range.to_string(), "[1:2 -> 3:4]");
    }
}
