use std::collections::HashSet;
use std::ops::Range;

use image::RgbImage;

use crate::{
    eval::evaluator::evaluate_rgb,
    foundation::core::{Canvas, FragCoord, Rgb8},
    foundation::error::EruptionResult,
    foundation::math::ColorMode,
    render::sink::{Sample, SampleSink},
    tree::node::Expr,
};

/// Color of `root` at one fragment: one evaluation per channel, converted by `mode`.
pub fn shade(root: &Expr, frag: FragCoord, mode: ColorMode) -> Rgb8 {
    let [r, g, b] = evaluate_rgb(root, frag);
    Rgb8::new(mode.to_byte(r), mode.to_byte(g), mode.to_byte(b))
}

/// Shade the rows in `rows` (clipped to the canvas) and stream them into `sink`.
///
/// Does not call `begin`/`end`; callers framing a whole image use [`render_frame`]. Returns the
/// number of samples pushed.
pub fn render_rows(
    root: &Expr,
    canvas: Canvas,
    rows: Range<u32>,
    mode: ColorMode,
    sink: &mut dyn SampleSink,
) -> EruptionResult<u64> {
    let rows = rows.start.min(canvas.height)..rows.end.min(canvas.height);
    let mut pushed = 0u64;
    for y in rows {
        for x in 0..canvas.width {
            let color = shade(root, canvas.frag_coord(x, y), mode);
            sink.push_sample(Sample { x, y, color })?;
            pushed += 1;
        }
    }
    Ok(pushed)
}

/// Shade a complete frame into `sink`.
#[tracing::instrument(level = "debug", skip(root, sink), fields(nodes = root.node_count()))]
pub fn render_frame(
    root: &Expr,
    canvas: Canvas,
    mode: ColorMode,
    sink: &mut dyn SampleSink,
) -> EruptionResult<()> {
    sink.begin(canvas)?;
    render_rows(root, canvas, 0..canvas.height, mode, sink)?;
    sink.end()
}

/// Progressive renderer that paints a frame a few rows at a time.
///
/// A host calls [`ScanlineRenderer::step`] once per display frame so a new image fills in
/// top-down instead of blocking the UI while every pixel is evaluated.
#[derive(Clone, Copy, Debug)]
pub struct ScanlineRenderer {
    canvas: Canvas,
    mode: ColorMode,
    next_row: u32,
}

impl ScanlineRenderer {
    /// Create a renderer positioned at the top row.
    pub fn new(canvas: Canvas, mode: ColorMode) -> Self {
        Self {
            canvas,
            mode,
            next_row: 0,
        }
    }

    /// Start over from the top row, e.g. after the tree changed.
    pub fn restart(&mut self) {
        self.next_row = 0;
    }

    /// Rows painted so far.
    pub fn rows_done(&self) -> u32 {
        self.next_row
    }

    /// `true` once every row was painted.
    pub fn is_complete(&self) -> bool {
        self.next_row >= self.canvas.height
    }

    /// Paint up to `rows` more rows of `root`.
    ///
    /// Calls `sink.begin` before the first row and `sink.end` after the last. Returns whether
    /// the frame is complete.
    pub fn step(
        &mut self,
        root: &Expr,
        rows: u32,
        sink: &mut dyn SampleSink,
    ) -> EruptionResult<bool> {
        if self.is_complete() {
            return Ok(true);
        }
        if self.next_row == 0 {
            sink.begin(self.canvas)?;
        }
        let end = self.next_row.saturating_add(rows).min(self.canvas.height);
        render_rows(root, self.canvas, self.next_row..end, self.mode, sink)?;
        self.next_row = end;
        if self.is_complete() {
            sink.end()?;
        }
        Ok(self.is_complete())
    }
}

/// Summary of a rendered frame, for logs and the CLI.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameStats {
    /// Frame width.
    pub width: u32,
    /// Frame height.
    pub height: u32,
    /// Mean byte value per channel.
    pub mean: [f64; 3],
    /// Number of distinct colors.
    pub distinct_colors: usize,
}

impl FrameStats {
    /// Compute statistics over every pixel of `image`.
    pub fn from_image(image: &RgbImage) -> Self {
        let mut sums = [0u64; 3];
        let mut distinct = HashSet::new();
        for px in image.pixels() {
            for (sum, byte) in sums.iter_mut().zip(px.0) {
                *sum += u64::from(byte);
            }
            distinct.insert(px.0);
        }
        let count = (u64::from(image.width()) * u64::from(image.height())).max(1) as f64;
        Self {
            width: image.width(),
            height: image.height(),
            mean: sums.map(|s| s as f64 / count),
            distinct_colors: distinct.len(),
        }
    }

    /// `true` when the whole frame is a single color.
    pub fn is_flat(&self) -> bool {
        self.distinct_colors <= 1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/driver.rs"]
mod tests;
