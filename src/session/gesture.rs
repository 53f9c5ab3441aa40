use crate::foundation::core::FragCoord;

/// Phase of a pointer (mouse or touch) event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Press or touch start.
    Down,
    /// Drag.
    Move,
    /// Release.
    Up,
}

/// A pointer event in screen pixels, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Phase.
    pub phase: PointerPhase,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position, growing downward.
    pub y: f64,
}

impl PointerEvent {
    /// A press at `(x, y)`.
    pub const fn down(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Down,
            x,
            y,
        }
    }
}

/// Size of the surface receiving pointer events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Screen {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Screen {
    /// Create a screen description.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Map a screen position to the normalized coordinate used by the evaluator.
    pub fn normalize(&self, x: f64, y: f64) -> FragCoord {
        let hw = self.width * 0.5;
        let hh = self.height * 0.5;
        FragCoord::new((x - hw) / hw, (y - hh) / hh)
    }
}

/// What a pointer press asks the engine to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Mutate the current tree.
    Mutate,
    /// Replace the tree with the reset seed.
    Reset,
}

impl Gesture {
    /// Classify `event`. Only presses count; a press in the top `reset_region` fraction of the
    /// screen resets, anywhere else mutates.
    pub fn classify(event: PointerEvent, screen: Screen, reset_region: f64) -> Option<Self> {
        if event.phase != PointerPhase::Down {
            return None;
        }
        if event.y < screen.height * reset_region {
            Some(Self::Reset)
        } else {
            Some(Self::Mutate)
        }
    }
}
