//! Supersampled canvas

use crate::buffer::CoverageMask;
use crate::buffer::PixelBuffer;
use crate::color::Palette;

use std::cmp::min;
use std::cmp::max;

/// Off-screen coverage mask at `scale` times the output resolution
///
/// Fills write to the high resolution mask; [downsample](#method.downsample)
///   box-filters it into the final pixel buffer.
#[derive(Debug,Clone)]
pub struct SupersampleCanvas {
    width: usize,
    height: usize,
    scale: usize,
    mask: CoverageMask,
}

impl SupersampleCanvas {
    /// Create a canvas of width x height output pixels
    ///
    /// # Panics
    ///
    /// If `scale` is zero
    pub fn new(width: usize, height: usize, scale: usize) -> Self {
        assert!(scale >= 1, "supersampling scale must be at least 1");
        let mask = CoverageMask::new(width * scale, height * scale);
        Self { width, height, scale, mask }
    }
    /// Output width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Output height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Supersampling factor along each axis
    pub fn scale(&self) -> usize {
        self.scale
    }
    /// Width of the high resolution mask
    pub fn hi_width(&self) -> usize {
        self.mask.width
    }
    /// Height of the high resolution mask
    pub fn hi_height(&self) -> usize {
        self.mask.height
    }
    pub fn mask(&self) -> &CoverageMask {
        &self.mask
    }
    /// Reset all coverage to zero
    pub fn clear(&mut self) {
        self.mask.clear();
    }
    /// Set a single high resolution sample
    ///
    /// Coordinates outside the mask are ignored.
    pub fn set_pixel(&mut self, x: i64, y: i64, value: bool) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.mask.width && y < self.mask.height {
            self.mask[(x,y)] = u8::from(value);
        }
    }
    pub fn get_pixel(&self, x: usize, y: usize) -> bool {
        x < self.mask.width && y < self.mask.height && self.mask[(x,y)] != 0
    }
    /// Set the samples x1..=x2 on row y
    ///
    /// The span is clamped to the mask; spans entirely outside are dropped.
    pub fn fill_hline(&mut self, x1: i64, y: i64, x2: i64, value: bool) {
        let (xmin, xmax) = (0, self.mask.width as i64 - 1);
        let (ymin, ymax) = (0, self.mask.height as i64 - 1);
        if y > ymax || y < ymin || x1 > xmax || x2 < xmin || x1 > x2 {
            return;
        }
        let x1 = max(x1, xmin) as usize;
        let x2 = min(x2, xmax) as usize;
        log::trace!("FILL HLINE: y {} x {} ..= {}", y, x1, x2);
        let v = u8::from(value);
        self.mask.row_mut(y as usize)[x1 ..= x2].iter_mut().for_each(|p| *p = v);
    }
    /// Mean coverage of the scale x scale block behind output pixel (x,y)
    pub fn coverage(&self, x: usize, y: usize) -> f64 {
        let s = self.scale;
        let mut acc = 0u64;
        for sy in 0 .. s {
            let row = self.mask.row(y * s + sy);
            acc += row[x * s .. x * s + s].iter().map(|&v| u64::from(v)).sum::<u64>();
        }
        acc as f64 / (s * s) as f64
    }
    /// Box filter the mask into packed colors
    ///
    /// Each output pixel blends from background to foreground by the mean
    ///   coverage of its block.  The canvas is not modified.
    pub fn downsample(&self, palette: &Palette) -> PixelBuffer {
        log::debug!("DOWNSAMPLE: {}x{} scale {}", self.width, self.height, self.scale);
        let mut data = Vec::with_capacity(self.width * self.height);
        for y in 0 .. self.height {
            for x in 0 .. self.width {
                data.push(palette.shade(self.coverage(x, y)));
            }
        }
        PixelBuffer::from_vec(data, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_pixel_ignores_out_of_bounds() {
        let mut c = SupersampleCanvas::new(2, 2, 2);
        c.set_pixel(-1, 0, true);
        c.set_pixel(0, -1, true);
        c.set_pixel(4, 0, true);
        c.set_pixel(0, 4, true);
        assert_eq!(c.mask().count(), 0);
        c.set_pixel(3, 3, true);
        assert!(c.get_pixel(3, 3));
        c.set_pixel(3, 3, false);
        assert!(!c.get_pixel(3, 3));
    }

    #[test]
    fn hline_is_clamped() {
        let mut c = SupersampleCanvas::new(4, 1, 1);
        c.fill_hline(-10, 0, 1, true);
        assert_eq!(c.mask().row(0), &[1, 1, 0, 0]);
        c.fill_hline(3, 0, 100, true);
        assert_eq!(c.mask().row(0), &[1, 1, 0, 1]);
        c.fill_hline(5, 0, 9, true);
        c.fill_hline(0, 1, 3, true);
        c.fill_hline(2, 0, 1, true);
        assert_eq!(c.mask().count(), 3);
    }

    #[test]
    fn coverage_is_block_mean() {
        let mut c = SupersampleCanvas::new(2, 1, 2);
        c.set_pixel(0, 0, true);
        c.set_pixel(2, 0, true);
        c.set_pixel(3, 1, true);
        c.set_pixel(2, 1, true);
        assert_eq!(c.coverage(0, 0), 0.25);
        assert_eq!(c.coverage(1, 0), 0.75);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut c = SupersampleCanvas::new(3, 3, 3);
        c.fill_hline(0, 4, 8, true);
        c.clear();
        assert_eq!(c.mask().count(), 0);
        c.clear();
        assert_eq!(c.mask().count(), 0);
        assert_eq!(c.mask().len(), 81);
    }
}
