use crate::foundation::error::{EruptionError, EruptionResult};

/// Color channel selected while resolving a vector node.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Slot 0.
    Red,
    /// Slot 1.
    Green,
    /// Slot 2.
    Blue,
}

impl Channel {
    /// All channels in slot order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Slot index in `{0, 1, 2}`.
    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }

    /// Inverse of [`Channel::index`].
    pub fn from_index(i: usize) -> EruptionResult<Self> {
        match i {
            0 => Ok(Self::Red),
            1 => Ok(Self::Green),
            2 => Ok(Self::Blue),
            _ => Err(EruptionError::validation(format!(
                "channel index {i} is out of range (expected 0, 1 or 2)"
            ))),
        }
    }
}

/// Normalized fragment coordinate. Each axis spans `[-1, 1]` across the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FragCoord {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl FragCoord {
    /// Create a fragment coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of the generated image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> EruptionResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Reject zero-sized canvases.
    pub fn validate(&self) -> EruptionResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EruptionError::validation(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Total pixel count.
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Map a pixel position to its fragment coordinate.
    ///
    /// Pixel `0` maps to `-1`, the center pixel to `0`; the last pixel stays just below `1`.
    pub fn frag_coord(self, px: u32, py: u32) -> FragCoord {
        let half_w = f64::from(self.width) * 0.5;
        let half_h = f64::from(self.height) * 0.5;
        FragCoord {
            x: (f64::from(px) - half_w) / half_w,
            y: (f64::from(py) - half_h) / half_h,
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 160,
            height: 160,
        }
    }
}

/// One 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red byte.
    pub r: u8,
    /// Green byte.
    pub g: u8,
    /// Blue byte.
    pub b: u8,
}

impl Rgb8 {
    /// Create a color from its three bytes.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Bytes in channel order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
