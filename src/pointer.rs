//! Pointer sample shared between input events and the frame loop.

use glam::Vec2;

/// Latest and previous pointer samples plus the pressed flag.
///
/// Input handlers write the current sample; the frame loop reads the
/// per-frame delta once and advances the previous sample at the end of each
/// tick, so event timing cannot change what a frame observes. Both samples
/// start as `None`: until two exist the derived velocity is zero, which
/// keeps the very first sample (or the first after a reset) from spiking
/// the field.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    pub pos: Option<Vec2>,
    pub prev: Option<Vec2>,
    pub down: bool,
}

impl Pointer {
    /// Record an absolute pointer position in surface coordinates.
    pub fn move_to(&mut self, pos: Vec2) {
        self.pos = Some(pos);
    }

    /// Record the pressed state. The flag is kept for hosts that want it;
    /// the field stirs on motion alone.
    pub fn set_down(&mut self, down: bool) {
        self.down = down;
    }

    /// Pointer displacement since the last frame, zero until two samples
    /// exist.
    pub fn velocity(&self) -> Vec2 {
        match (self.pos, self.prev) {
            (Some(pos), Some(prev)) => pos - prev,
            _ => Vec2::ZERO,
        }
    }

    /// Store the current sample as the previous one for the next frame.
    pub fn advance(&mut self) {
        self.prev = self.pos;
    }

    /// Forget both samples and the pressed flag.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
