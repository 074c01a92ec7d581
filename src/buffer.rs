//! Coverage and pixel buffers

use std::ops::Index;
use std::ops::IndexMut;

/// Coverage Mask
///
/// One byte per sample, 0 or 1, stored in row-major order (C-format)
#[derive(Debug,Default,Clone,PartialEq)]
pub struct CoverageMask {
    /// Sample data
    pub data: Vec<u8>,
    /// Width in samples
    pub width: usize,
    /// Height in samples
    pub height: usize,
}

impl CoverageMask {
    /// Create a new, empty mask of width and height
    pub fn new(width: usize, height: usize) -> Self {
        CoverageMask {
            width, height, data: vec![0u8; width * height]
        }
    }
    /// Number of samples
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Samples of row i
    pub fn row(&self, i: usize) -> &[u8] {
        debug_assert!(i < self.height);
        let start = i * self.width;
        &self.data[start .. start + self.width]
    }
    /// Mutable samples of row i
    pub fn row_mut(&mut self, i: usize) -> &mut [u8] {
        debug_assert!(i < self.height);
        let start = i * self.width;
        &mut self.data[start .. start + self.width]
    }
    /// Reset every sample to zero
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 0);
    }
    /// Number of covered samples
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

impl Index<(usize,usize)> for CoverageMask {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &u8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for CoverageMask {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut u8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}

/// Final image of packed RGB565 values in row-major order
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct PixelBuffer {
    pub data: Vec<u16>,
    pub width: usize,
    pub height: usize,
}

impl PixelBuffer {
    /// Wrap existing pixel data
    ///
    /// # Panics
    ///
    /// If `data.len() != width * height`
    pub fn from_vec(data: Vec<u16>, width: usize, height: usize) -> Self {
        assert_eq!(data.len(), width * height, "pixel count does not match {}x{}", width, height);
        Self { data, width, height }
    }
    /// Buffer of a single color
    pub fn filled(width: usize, height: usize, value: u16) -> Self {
        Self { data: vec![value; width * height], width, height }
    }
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    pub fn row(&self, i: usize) -> &[u16] {
        let start = i * self.width;
        &self.data[start .. start + self.width]
    }
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[u16]> + ExactSizeIterator + '_ {
        (0 .. self.height).map(move |i| self.row(i))
    }
}

impl Index<(usize,usize)> for PixelBuffer {
    type Output = u16;
    fn index(&self, index: (usize, usize)) -> &u16 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
