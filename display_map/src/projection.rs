//! Projection of model-space decorations onto a view-space viewport.
//!
//! Nothing here is cached: every call re-reads the wrap layout and the
//! decoration store, which keeps results consistent with the latest edit and
//! transaction at the cost of redoing work that is bounded by the viewport.

use crate::{
    buffer::TextSource,
    coords::{Bias, ModelRange, ViewPoint, ViewRange},
    decoration_map::{Decoration, DecorationMap},
    wrap_map::WrapMap,
};
use smol_str::SmolStr;
use tracing::trace;

/// Side of an insertion marker relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerSide {
    Before,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineDecorationKind {
    /// Styling applied to the characters in the range.
    CharacterSpan,
    /// Zero-width content inserted at the range, not applied to any character.
    InsertionMarker(MarkerSide),
}

/// One render instruction for a view line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InlineDecoration {
    pub range: ViewRange,
    pub class_name: SmolStr,
    pub kind: InlineDecorationKind,
}

impl InlineDecoration {
    pub fn span(range: ViewRange, class_name: impl Into<SmolStr>) -> Self {
        Self {
            range,
            class_name: class_name.into(),
            kind: InlineDecorationKind::CharacterSpan,
        }
    }

    pub fn marker(anchor: ViewPoint, class_name: impl Into<SmolStr>, side: MarkerSide) -> Self {
        Self {
            range: ViewRange::empty_at(anchor),
            class_name: class_name.into(),
            kind: InlineDecorationKind::InsertionMarker(side),
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self.kind, InlineDecorationKind::InsertionMarker(_))
    }
}

/// Read-only view over a wrap layout and a decoration store.
pub struct ProjectionEngine<'a, B> {
    wrap_map: &'a WrapMap<B>,
    decorations: &'a DecorationMap,
}

impl<'a, B: TextSource> ProjectionEngine<'a, B> {
    pub fn new(wrap_map: &'a WrapMap<B>, decorations: &'a DecorationMap) -> Self {
        Self {
            wrap_map,
            decorations,
        }
    }

    /// Model span covered by `viewport`.
    pub fn viewport_to_model(&self, viewport: ViewRange) -> ModelRange {
        let viewport = self.clip_viewport(viewport);
        ModelRange::new(
            self.wrap_map.to_model_point(viewport.start),
            self.wrap_map.to_model_point(viewport.end),
        )
    }

    /// Project a decoration's model range into view space, seams resolving to
    /// the following view line.
    pub fn project(&self, decoration: &Decoration) -> ViewRange {
        ViewRange::new(
            self.wrap_map
                .to_view_point(decoration.range.start, Bias::Right),
            self.wrap_map.to_view_point(decoration.range.end, Bias::Right),
        )
    }

    /// Decorations visible anywhere in `viewport`, in store order.
    ///
    /// Stale ranges are matched where they render, after clamping into the
    /// buffer.
    pub fn decorations_in_viewport(&self, viewport: ViewRange) -> Vec<Decoration> {
        let model_range = self.viewport_to_model(viewport);
        self.decorations
            .decorations_overlapping_clipped(model_range, self.wrap_map.buffer())
    }

    /// Render instructions for `view_line` within `viewport`.
    ///
    /// Candidates come from the whole viewport so a decoration spanning
    /// several view lines is found from any of them, and span entries carry
    /// the full projected range. Per decoration the order is span, before
    /// marker, after marker:
    ///
    /// - the span is emitted when the projected range overlaps the viewport and
    ///   covers `view_line`;
    /// - the before marker sits at the projected start, which at a seam is the
    ///   start of the following line;
    /// - the after marker requires the projected end inside the viewport and
    ///   sits at the end resolved with [`Bias::Left`], so at a seam it belongs
    ///   to the preceding line.
    pub fn line_render_data(&self, viewport: ViewRange, view_line: u32) -> Vec<InlineDecoration> {
        let viewport = self.clip_viewport(viewport);
        if !viewport.spans_line(view_line) {
            trace!(view_line, %viewport, "View line outside viewport");
            return Vec::new();
        }

        let mut entries = Vec::new();
        for decoration in self.decorations_in_viewport(viewport) {
            let options = &decoration.options;
            let projected = self.project(&decoration);

            if let Some(class) = &options.inline_class_name {
                if projected.overlaps(&viewport) && projected.spans_line(view_line) {
                    entries.push(InlineDecoration::span(projected, class.clone()));
                }
            }

            if let Some(class) = &options.before_content_class_name {
                let anchor = projected.start;
                if viewport.contains(anchor) && anchor.line == view_line {
                    entries.push(InlineDecoration::marker(
                        anchor,
                        class.clone(),
                        MarkerSide::Before,
                    ));
                }
            }

            if let Some(class) = &options.after_content_class_name {
                let anchor = self
                    .wrap_map
                    .to_view_point(decoration.range.end, Bias::Left);
                if viewport.contains(projected.end) && anchor.line == view_line {
                    entries.push(InlineDecoration::marker(
                        anchor,
                        class.clone(),
                        MarkerSide::After,
                    ));
                }
            }
        }
        entries
    }

    fn clip_viewport(&self, viewport: ViewRange) -> ViewRange {
        ViewRange::new(
            self.wrap_map.clip_view_point(viewport.start),
            self.wrap_map.clip_view_point(viewport.end),
        )
    }
}
