//! Pointer Input Module
//!
//! Tracks the absolute pointer position delivered by the windowing system
//! and derives frame-to-frame deltas from it. Decoupled from winit.

/// 2D position in window pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a new position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert to tuple.
    pub fn to_tuple(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Derives motion deltas from absolute pointer coordinates.
///
/// The windowing system reports where the pointer is, not how far it moved;
/// the first sample after a reset therefore yields a zero delta instead of a
/// jump spanning the whole window.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Most recent pointer position, if any has been seen.
    pub position: Option<Position>,
}

impl PointerTracker {
    /// Create a tracker that has not seen the pointer yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one absolute pointer sample; returns the delta since the last
    /// sample, or (0, 0) for the first sample after construction or reset.
    pub fn motion(&mut self, x: f64, y: f64) -> (f32, f32) {
        let current = Position::new(x as f32, y as f32);
        let delta = match self.position {
            Some(last) => (current.x - last.x, current.y - last.y),
            None => (0.0, 0.0),
        };
        self.position = Some(current);
        delta
    }

    /// Forget the last position (pointer left the window); the next motion
    /// sample will not produce a spanning delta.
    pub fn reset(&mut self) {
        self.position = None;
    }
}
