//! Offscreen rasterization of speck trails into an image buffer.

use glam::Vec2;
use image::{Rgb, RgbImage};

use crate::surface::Surface;

/// A [`Surface`] backed by an `image::RgbImage`, for headless runs and PNG
/// export. Clearing fills the buffer black; strokes are plotted point by
/// point with a square brush sized to the stroke width.
pub struct ImageSurface {
    img: RgbImage,
    path: Vec<Vec2>,
}

impl ImageSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbImage::new(width, height),
            path: Vec::new(),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    fn draw_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: [u8; 3]) {
        let steps = from.distance(to).ceil().max(1.0) as usize;
        let brush = ((width / 2.0).round() as i32).max(0);

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = from.lerp(to, t);
            let cx = p.x.round() as i32;
            let cy = p.y.round() as i32;

            for dy in -brush..=brush {
                for dx in -brush..=brush {
                    let x = cx + dx;
                    let y = cy + dy;
                    if x >= 0
                        && y >= 0
                        && (x as u32) < self.img.width()
                        && (y as u32) < self.img.height()
                    {
                        self.img.put_pixel(x as u32, y as u32, Rgb(color));
                    }
                }
            }
        }
    }
}

impl Surface for ImageSurface {
    fn clear(&mut self) {
        for pixel in self.img.pixels_mut() {
            *pixel = Rgb([0, 0, 0]);
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.push(Vec2::new(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.push(Vec2::new(x, y));
    }

    fn stroke(&mut self, width: f32, color: [u8; 3]) {
        let path = std::mem::take(&mut self.path);
        for pair in path.windows(2) {
            self.draw_segment(pair[0], pair[1], width, color);
        }
        self.path = path;
    }
}
