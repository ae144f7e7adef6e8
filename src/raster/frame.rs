use crate::foundation::core::{Canvas, Rgb8};

/// Color and depth buffers for one frame.
///
/// Coordinates are `x` to the right and `y` upward; `(0, 0)` is the bottom-left pixel. Larger
/// `z` is closer to the viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    canvas: Canvas,
    color: Vec<Rgb8>,
    depth: Vec<f64>,
}

impl Frame {
    /// Blank frame: color cleared to `clear`, depth cleared to negative infinity.
    pub fn new(canvas: Canvas, clear: Rgb8) -> Self {
        let n = canvas.pixel_count();
        Self {
            canvas,
            color: vec![clear; n],
            depth: vec![f64::NEG_INFINITY; n],
        }
    }

    /// Buffer dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    /// Color buffer, row-major from the top row down.
    pub fn color(&self) -> &[Rgb8] {
        &self.color
    }

    /// Depth buffer, same layout as [`Frame::color`].
    pub fn depth(&self) -> &[f64] {
        &self.depth
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        let (w, h) = (i64::from(self.canvas.width), i64::from(self.canvas.height));
        if x < 0 || y < 0 || x >= w || y >= h {
            return None;
        }
        let row = h - 1 - y;
        Some((row * w + x) as usize)
    }

    /// Color at `(x, y)`, if inside the canvas.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb8> {
        self.offset(x, y).map(|i| self.color[i])
    }

    /// Depth at `(x, y)`, if inside the canvas.
    pub fn depth_at(&self, x: i64, y: i64) -> Option<f64> {
        self.offset(x, y).map(|i| self.depth[i])
    }

    /// Write `color` at `(x, y)` when `z` is strictly closer than what is stored there.
    ///
    /// Returns `true` when the pixel was written. Points outside the canvas are clipped.
    pub fn plot(&mut self, x: i64, y: i64, z: f64, color: Rgb8) -> bool {
        let Some(i) = self.offset(x, y) else {
            return false;
        };
        if z > self.depth[i] {
            self.depth[i] = z;
            self.color[i] = color;
            true
        } else {
            false
        }
    }

    /// Tightly packed RGB8 bytes, row-major from the top row down.
    pub fn to_rgb8_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.color.len() * 3);
        for c in &self.color {
            out.extend_from_slice(&c.to_array());
        }
        out
    }

    /// Number of pixels whose color differs from `clear`.
    pub fn painted_pixels(&self, clear: Rgb8) -> usize {
        self.color.iter().filter(|c| **c != clear).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/frame.rs"]
mod tests;
