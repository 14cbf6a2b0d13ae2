use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::scan::{Color, Surface};

/// In-memory RGBA raster implementing [`Surface`].
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, to_rgba(background)),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.image.width() || y >= self.image.height() {
            return None;
        }
        let Rgba([r, g, b, _]) = *self.image.get_pixel(x, y);
        Some(Color::rgb(r, g, b))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        self.image.save(path)
    }

    /// Clamps the half-open pixel span `[start, end)` to `[0, limit)`.
    fn span(start: f64, end: f64, limit: u32) -> std::ops::Range<u32> {
        let lo = start.floor().max(0.0).min(limit as f64) as u32;
        let hi = end.ceil().max(0.0).min(limit as f64) as u32;
        lo..hi
    }
}

fn to_rgba(c: Color) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, 255])
}

impl Surface for Canvas {
    fn width(&self) -> f64 {
        self.image.width() as f64
    }

    fn height(&self) -> f64 {
        self.image.height() as f64
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let px = to_rgba(color);
        for row in Self::span(y, y + h, self.image.height()) {
            for col in Self::span(x, x + w, self.image.width()) {
                self.image.put_pixel(col, row, px);
            }
        }
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        let px = to_rgba(color);
        let r_sq = radius * radius;
        for row in Self::span(y - radius, y + radius, self.image.height()) {
            for col in Self::span(x - radius, x + radius, self.image.width()) {
                let dx = col as f64 + 0.5 - x;
                let dy = row as f64 + 0.5 - y;
                if dx * dx + dy * dy <= r_sq {
                    self.image.put_pixel(col, row, px);
                }
            }
        }
    }
}
