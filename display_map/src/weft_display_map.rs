//! Wrap layout and decoration projection for the weft editor.
//!
//! The display map translates between two coordinate spaces:
//!
//! ```text
//! ModelPoint (raw buffer lines)
//!   | WrapMap       soft wrapping under a column budget
//! ViewPoint (display lines)
//! ```
//!
//! Decorations are stored in model space by [`DecorationMap`] and projected
//! into view space on every render pass by [`ProjectionEngine`], which decides
//! how each visible decoration is split into character spans and zero-width
//! insertion markers per view line.
//!
//! # Seams
//!
//! A model column where a line wraps resolves to the start of the following
//! view line ([`Bias::Right`]). After-content markers are the one exception:
//! they resolve with [`Bias::Left`] and belong to the preceding view line, so
//! the same visual column never receives both a before and an after marker
//! from a seam.
//!
//! # Usage
//!
//! ```ignore
//! let mut display_map = DisplayMap::new(
//!     BufferSnapshot::from_text("hello world, this is a buffer that will be wrapped"),
//!     WrapConfig::fixed_column(13),
//! )?;
//! display_map.change_decorations(|accessor| {
//!     accessor.add(
//!         ModelRange::from_coords(1, 2, 1, 15),
//!         DecorationOptions::new().inline_class_name("highlight"),
//!     );
//! });
//! let viewport = display_map.view_line_range(2, 3);
//! let entries = display_map.line_render_data(viewport, 2);
//! ```
mod buffer;
mod config;
mod coords;
mod decoration_map;
mod display_map;
mod error;
mod projection;
mod traits;
mod wrap_map;

pub use buffer::{BufferSnapshot, LineEdit, TextSource};
pub use config::{WrapConfig, WrapMode};
pub use coords::{Bias, Coordinate, ModelPoint, ModelRange, PointRange, ViewPoint, ViewRange};
pub use decoration_map::{
    Decoration, DecorationId, DecorationMap, DecorationOptions, DecorationsAccessor,
};
pub use display_map::{DisplayMap, ViewLineData};
pub use error::{Error, Result};
pub use projection::{InlineDecoration, InlineDecorationKind, MarkerSide, ProjectionEngine};
pub use traits::{CoordinateTransform, EditableLayer};
pub use wrap_map::{WrapMap, WrapPiece, WrapSegment};
