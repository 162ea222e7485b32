//! In-memory draw target for widget tests.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Plain RGB565 framebuffer, cleared to black.
pub struct Framebuffer {
    size: Size,
    pixels: Vec<Rgb565>,
}

impl Framebuffer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb565::BLACK; (size.width * size.height) as usize],
        }
    }

    /// Color at `(x, y)`, `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        self.index(Point::new(x, y)).map(|i| self.pixels[i])
    }

    /// Number of pixels with exactly `color`.
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Number of pixels with `color` in rows `y0..y1`.
    pub fn count_in_rows(&self, color: Rgb565, y0: u32, y1: u32) -> usize {
        let w = self.size.width as usize;
        let y1 = y1.min(self.size.height) as usize;
        self.pixels[(y0 as usize * w).min(self.pixels.len())..y1 * w]
            .iter()
            .filter(|&&c| c == color)
            .count()
    }

    fn index(&self, p: Point) -> Option<usize> {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        (p.x >= 0 && p.y >= 0 && p.x < w && p.y < h).then(|| (p.y * w + p.x) as usize)
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if let Some(i) = self.index(p) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}
