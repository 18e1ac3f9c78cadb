//! Core traits for display map layers.

use crate::buffer::LineEdit;

/// Bidirectional conversion between a layer's input and output coordinates.
///
/// # Invariants
///
/// 1. **Clamping**: a coordinate outside the layer's space is clamped to the
///    nearest valid position instead of panicking.
///
/// 2. **Consistency**: for any valid input `c`, `from_coords(to_coords(c)) == c`.
///
/// 3. **Ordering preservation**: if `a < b` in the input space then
///    `to_coords(a) <= to_coords(b)`.
pub trait CoordinateTransform<From, To> {
    fn to_coords(&self, point: From) -> To;

    fn from_coords(&self, point: To) -> From;
}

/// Layers that derive state from buffer content and must hear about edits.
///
/// [`apply_edit`](Self::apply_edit) has to run after the buffer changed and
/// before the next query; until then results of the layer are unspecified.
pub trait EditableLayer {
    fn apply_edit(&mut self, edit: &LineEdit);

    /// Incremented every time the layer's state changes.
    fn version(&self) -> usize;
}
