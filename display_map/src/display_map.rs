//! Renderer-facing facade over the wrap layer and the decoration store.

use crate::{
    buffer::{LineEdit, TextSource},
    config::WrapConfig,
    coords::{Bias, ModelPoint, ModelRange, ViewPoint, ViewRange},
    decoration_map::{Decoration, DecorationId, DecorationMap, DecorationOptions, DecorationsAccessor},
    error::Result,
    projection::{InlineDecoration, ProjectionEngine},
    traits::EditableLayer,
    wrap_map::WrapMap,
};

/// Everything a painter needs for one view line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLineData {
    pub content: String,
    pub min_column: u32,
    pub max_column: u32,
    pub inline_decorations: Vec<InlineDecoration>,
}

/// Buffer, wrap layout and decorations of one document.
///
/// Edits go through [`DisplayMap::edit`] so the layout is invalidated before
/// the next query; decoration changes go through
/// [`DisplayMap::change_decorations`].
#[derive(Debug)]
pub struct DisplayMap<B> {
    wrap_map: WrapMap<B>,
    decorations: DecorationMap,
}

impl<B: TextSource> DisplayMap<B> {
    /// Fails only if `config` is invalid.
    pub fn new(buffer: B, config: WrapConfig) -> Result<Self> {
        Ok(Self {
            wrap_map: WrapMap::new(buffer, config)?,
            decorations: DecorationMap::new(),
        })
    }

    pub fn buffer(&self) -> &B {
        self.wrap_map.buffer()
    }

    pub fn wrap_map(&self) -> &WrapMap<B> {
        &self.wrap_map
    }

    pub fn decorations(&self) -> &DecorationMap {
        &self.decorations
    }

    pub fn wrap_config(&self) -> WrapConfig {
        self.wrap_map.config()
    }

    /// Apply a new wrap configuration, relaying out every line if it differs.
    pub fn set_wrap_config(&mut self, config: WrapConfig) -> Result<()> {
        self.wrap_map.set_config(config)?;
        Ok(())
    }

    /// Mutate the buffer. The closure reports which lines it touched.
    pub fn edit(&mut self, f: impl FnOnce(&mut B) -> LineEdit) -> LineEdit {
        self.wrap_map.edit(f)
    }

    /// Edit notification for buffers changed through another handle.
    pub fn on_edit(&mut self, edit: &LineEdit) {
        self.wrap_map.apply_edit(edit);
    }

    pub fn change_decorations<R>(
        &mut self,
        f: impl FnOnce(&mut DecorationsAccessor<'_>) -> R,
    ) -> R {
        self.decorations.change_decorations(f)
    }

    pub fn delta_decorations(
        &mut self,
        old: &[DecorationId],
        new: impl IntoIterator<Item = (ModelRange, DecorationOptions)>,
    ) -> Vec<DecorationId> {
        self.decorations.delta_decorations(old, new)
    }

    pub fn projection(&self) -> ProjectionEngine<'_, B> {
        ProjectionEngine::new(&self.wrap_map, &self.decorations)
    }

    pub fn decorations_in_viewport(&self, viewport: ViewRange) -> Vec<Decoration> {
        self.projection().decorations_in_viewport(viewport)
    }

    pub fn line_render_data(&self, viewport: ViewRange, view_line: u32) -> Vec<InlineDecoration> {
        self.projection().line_render_data(viewport, view_line)
    }

    pub fn view_line_data(&self, viewport: ViewRange, view_line: u32) -> ViewLineData {
        ViewLineData {
            content: self.line_content(view_line),
            min_column: self.line_min_column(view_line),
            max_column: self.line_max_column(view_line),
            inline_decorations: self.line_render_data(viewport, view_line),
        }
    }

    pub fn line_content(&self, view_line: u32) -> String {
        self.wrap_map.line_content(view_line)
    }

    pub fn line_min_column(&self, view_line: u32) -> u32 {
        self.wrap_map.line_min_column(view_line)
    }

    pub fn line_max_column(&self, view_line: u32) -> u32 {
        self.wrap_map.line_max_column(view_line)
    }

    pub fn view_line_count(&self) -> u32 {
        self.wrap_map.total_view_lines()
    }

    /// Whole view line span, from its min to its max column.
    pub fn view_line_range(&self, start_line: u32, end_line: u32) -> ViewRange {
        ViewRange::new(
            ViewPoint::new(start_line, self.line_min_column(start_line)),
            ViewPoint::new(end_line, self.line_max_column(end_line)),
        )
    }

    pub fn to_view_point(&self, point: ModelPoint) -> ViewPoint {
        self.wrap_map.to_view_point(point, Bias::Right)
    }

    pub fn to_model_point(&self, point: ViewPoint) -> ModelPoint {
        self.wrap_map.to_model_point(point)
    }

    pub fn to_view_range(&self, range: ModelRange) -> ViewRange {
        ViewRange::new(self.to_view_point(range.start), self.to_view_point(range.end))
    }

    pub fn to_model_range(&self, range: ViewRange) -> ModelRange {
        ModelRange::new(self.to_model_point(range.start), self.to_model_point(range.end))
    }
}
