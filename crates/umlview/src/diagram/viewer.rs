//! Interactive viewer state
//!
//! [`Viewer`] owns everything that changes while the diagram is on screen:
//! the smoothed pan offset chasing a drag target, the zoom factor, the
//! selected root and the boxes of the last frame used for hit-testing. It is
//! driven by plain event calls and draws against any [`DrawSurface`], so a
//! window, a terminal or a test harness can all host it.

use tracing::{debug, trace};

use super::{ClassForest, ClassId, ClassLayout, ClassRenderer, ColorAssigner, FrameLayout, Palette};
use crate::core::{DrawSurface, Rect, TextMetrics, UmlError, ViewerConfig};

/// Distance below which the pan animation counts as finished
const SETTLE_EPSILON: f64 = 0.5;

pub struct Viewer<'f> {
    forest: &'f ClassForest,
    config: ViewerConfig,
    renderer: ClassRenderer,
    colors: ColorAssigner,
    target_offset: (i32, i32),
    canvas_offset: (f64, f64),
    zoom: f64,
    selected: Option<ClassId>,
    last_pointer: (i32, i32),
    last_frame: FrameLayout,
}

impl<'f> Viewer<'f> {
    pub fn new(forest: &'f ClassForest) -> Self {
        Self::build(forest, ViewerConfig::default(), Palette::default())
    }

    pub fn with_config(
        forest: &'f ClassForest,
        config: ViewerConfig,
        palette: Palette,
    ) -> Result<Self, UmlError> {
        config.validate()?;
        Ok(Self::build(forest, config, palette))
    }

    fn build(forest: &'f ClassForest, config: ViewerConfig, palette: Palette) -> Self {
        Self {
            forest,
            renderer: ClassRenderer::new(&config.layout),
            colors: ColorAssigner::new(palette),
            target_offset: (0, 0),
            canvas_offset: (0.0, 0.0),
            zoom: config.clamp_zoom(1.0),
            selected: None,
            last_pointer: (0, 0),
            last_frame: FrameLayout::default(),
            config,
        }
    }

    pub fn forest(&self) -> &'f ClassForest {
        self.forest
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<ClassId> {
        self.selected
    }

    pub fn canvas_offset(&self) -> (f64, f64) {
        self.canvas_offset
    }

    pub fn target_offset(&self) -> (i32, i32) {
        self.target_offset
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = self.config.clamp_zoom(zoom);
    }

    /// Boxes placed by the most recent [`render`](Viewer::render)
    pub fn last_frame(&self) -> &FrameLayout {
        &self.last_frame
    }

    /// Advance the pan animation by one tick
    pub fn tick(&mut self) {
        let k = self.config.smoothing;
        self.canvas_offset.0 += (self.target_offset.0 as f64 - self.canvas_offset.0) * k;
        self.canvas_offset.1 += (self.target_offset.1 as f64 - self.canvas_offset.1) * k;
    }

    pub fn is_settled(&self) -> bool {
        (self.target_offset.0 as f64 - self.canvas_offset.0).abs() < SETTLE_EPSILON
            && (self.target_offset.1 as f64 - self.canvas_offset.1).abs() < SETTLE_EPSILON
    }

    /// Jump the pan straight to its target
    pub fn settle(&mut self) {
        self.canvas_offset = (self.target_offset.0 as f64, self.target_offset.1 as f64);
    }

    /// Map a surface point into canvas coordinates
    pub fn screen_to_canvas(&self, x: i32, y: i32) -> (f64, f64) {
        (
            (x as f64 - self.canvas_offset.0) / self.zoom,
            (y as f64 - self.canvas_offset.1) / self.zoom,
        )
    }

    /// Topmost class box under a surface point in the last frame
    pub fn hit_test(&self, x: i32, y: i32) -> Option<ClassId> {
        let (cx, cy) = self.screen_to_canvas(x, y);
        self.last_frame.hit_test(cx, cy).map(|b| b.id)
    }

    /// Press: select the tree under the pointer, or clear the selection
    pub fn pointer_down(&mut self, x: i32, y: i32) -> Option<ClassId> {
        self.last_pointer = (x, y);
        self.selected = self.hit_test(x, y).map(|id| self.forest.top_root(id));
        match self.selected {
            Some(id) => debug!(class = %self.forest.get(id).name, "Selected"),
            None => trace!(x, y, "Pointer down on empty canvas"),
        }
        self.selected
    }

    /// Drag: move the pan target by the pointer delta
    pub fn pointer_drag(&mut self, x: i32, y: i32) {
        self.target_offset.0 += x - self.last_pointer.0;
        self.target_offset.1 += y - self.last_pointer.1;
        self.last_pointer = (x, y);
    }

    /// Wheel: positive deltas zoom out
    pub fn wheel(&mut self, delta: f64) {
        self.zoom = self.config.clamp_zoom(self.zoom - delta * self.config.zoom_step);
        trace!(zoom = self.zoom, "Zoom changed");
    }

    /// Select the tree containing the class named `name`
    pub fn select(&mut self, name: &str) -> Option<ClassId> {
        self.selected = self.forest.find(name).map(|id| self.forest.top_root(id));
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Draw one frame and remember its boxes for hit-testing
    pub fn render<S, M>(&mut self, surface: &mut S, metrics: M)
    where
        S: DrawSurface + ?Sized,
        M: TextMetrics,
    {
        let frame = ClassLayout::new(self.forest, metrics, &self.config.layout)
            .layout_frame(self.selected);

        surface.reset_transform();
        self.apply_view(surface);
        self.renderer
            .draw_boxes(surface, self.forest, &mut self.colors, frame.background());

        if self.selected.is_some() {
            let (width, height) = surface.size();
            surface.reset_transform();
            surface.fill_rect(Rect::new(0, 0, width, height), self.config.wash);
            self.apply_view(surface);
            self.renderer
                .draw_boxes(surface, self.forest, &mut self.colors, frame.expanded());
        }

        self.last_frame = frame;
    }

    fn apply_view<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.translate(self.canvas_offset.0, self.canvas_offset.1);
        surface.scale(self.zoom);
    }
}
