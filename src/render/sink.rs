use image::{Rgb, RgbImage};

use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{EruptionError, EruptionResult};

/// One shaded pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
    /// Shaded color.
    pub color: Rgb8,
}

/// Consumer of shaded pixels, typically a window or texture owned by the host application.
///
/// Ordering contract: within one `begin`/`end` pair, samples arrive row by row, left to right.
pub trait SampleSink {
    /// Called once before the first sample of a frame.
    fn begin(&mut self, canvas: Canvas) -> EruptionResult<()>;
    /// Accept one sample.
    fn push_sample(&mut self, sample: Sample) -> EruptionResult<()>;
    /// Called once after the last sample of a frame.
    fn end(&mut self) -> EruptionResult<()>;
}

/// In-memory sink collecting a frame into an [`RgbImage`].
#[derive(Debug, Default)]
pub struct ImageSink {
    image: Option<RgbImage>,
    finished: bool,
}

impl ImageSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame buffer allocated by the last `begin`, if any.
    pub fn image(&self) -> Option<&RgbImage> {
        self.image.as_ref()
    }

    /// `true` once `end` was called for the current frame.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Take the frame buffer out of the sink.
    pub fn into_image(self) -> Option<RgbImage> {
        self.image
    }
}

impl SampleSink for ImageSink {
    fn begin(&mut self, canvas: Canvas) -> EruptionResult<()> {
        canvas.validate()?;
        self.image = Some(RgbImage::new(canvas.width, canvas.height));
        self.finished = false;
        Ok(())
    }

    fn push_sample(&mut self, sample: Sample) -> EruptionResult<()> {
        let image = self
            .image
            .as_mut()
            .ok_or_else(|| EruptionError::render("sample pushed before begin"))?;
        if sample.x >= image.width() || sample.y >= image.height() {
            return Err(EruptionError::render(format!(
                "sample ({}, {}) is outside the {}x{} frame",
                sample.x,
                sample.y,
                image.width(),
                image.height()
            )));
        }
        image.put_pixel(sample.x, sample.y, Rgb(sample.color.to_array()));
        Ok(())
    }

    fn end(&mut self) -> EruptionResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Sink that drops every sample; useful for timing evaluation alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink {
    /// Samples received since the last `begin`.
    pub samples: u64,
}

impl SampleSink for NullSink {
    fn begin(&mut self, _canvas: Canvas) -> EruptionResult<()> {
        self.samples = 0;
        Ok(())
    }

    fn push_sample(&mut self, _sample: Sample) -> EruptionResult<()> {
        self.samples += 1;
        Ok(())
    }

    fn end(&mut self) -> EruptionResult<()> {
        Ok(())
    }
}
