use super::font::{self, GLYPH_ADVANCE, GLYPH_WIDTH};
use crate::error::{CymaticsError, Result};
use crate::layout::Rect;
use image::{Rgba, RgbaImage};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const GREY: Rgba<u8> = Rgba([200, 200, 200, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Bounds-checked RGBA drawing surface. Every primitive clips silently.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CymaticsError::InvalidDimensions { width, height });
        }
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, background),
        })
    }

    pub fn width(&self) -> i32 {
        self.image.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.image.height() as i32
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }

    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if self.in_bounds(x, y) {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        self.in_bounds(x, y)
            .then(|| *self.image.get_pixel(x as u32, y as u32))
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width());
        let y1 = rect.bottom().min(self.height());
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        let (l, t) = (rect.x, rect.y);
        let (r, b) = (rect.right() - 1, rect.bottom() - 1);
        self.line(l, t, r, t, color);
        self.line(r, t, r, b, color);
        self.line(r, b, l, b, color);
        self.line(l, b, l, t, color);
    }

    /// Bresenham line, endpoints inclusive.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Copy `src` with its top-left corner at `(x, y)`, clipped to the canvas.
    pub fn blit(&mut self, src: &RgbaImage, x: i32, y: i32) {
        for (sx, sy, px) in src.enumerate_pixels() {
            self.put(x + sx as i32, y + sy as i32, *px);
        }
    }

    pub fn text(&mut self, x: i32, y: i32, text: &str, scale: i32, color: Rgba<u8>) {
        let scale = scale.max(1);
        let mut pen_x = x;
        for ch in text.chars() {
            for (row, bits) in font::glyph(ch).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                        continue;
                    }
                    for oy in 0..scale {
                        for ox in 0..scale {
                            self.put(
                                pen_x + col * scale + ox,
                                y + row as i32 * scale + oy,
                                color,
                            );
                        }
                    }
                }
            }
            pen_x += GLYPH_ADVANCE * scale;
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
