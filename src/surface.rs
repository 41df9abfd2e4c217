//! Output sink contract for one frame of speck trails.

/// A minimal 2D drawing surface: clear the frame, then describe one short
/// path per speck and stroke it with a width and color.
///
/// The core only ever clears the whole surface once per frame and draws
/// two-point paths, but implementations must accept any number of
/// `line_to` calls between `begin_path` and `stroke`.
pub trait Surface {
    /// Erase the previous frame.
    fn clear(&mut self);
    /// Start a fresh path.
    fn begin_path(&mut self);
    /// Place the path cursor without drawing.
    fn move_to(&mut self, x: f32, y: f32);
    /// Extend the current path with a straight segment.
    fn line_to(&mut self, x: f32, y: f32);
    /// Draw the current path.
    fn stroke(&mut self, width: f32, color: [u8; 3]);
}

/// Surface that discards every call. Lets the field run headless when only
/// the simulation state matters, e.g. in benches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _x: f32, _y: f32) {}
    fn line_to(&mut self, _x: f32, _y: f32) {}
    fn stroke(&mut self, _width: f32, _color: [u8; 3]) {}
}
