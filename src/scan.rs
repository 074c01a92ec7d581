//! Scanline crossings and spans

use crate::raster::FillingRule;
use crate::EPS;

/// Edge crossing a scanline at x, with direction +1 (y increasing) or -1
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Crossing {
    pub x: f64,
    pub dir: i32,
}

/// Inclusive run of samples x1..=x2 on one row
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub x1: i64,
    pub x2: i64,
}

impl Span {
    /// Samples whose centres lie in [left, right)
    ///
    /// Returns None when no centre falls inside.
    pub fn from_edges(left: f64, right: f64) -> Option<Span> {
        let (left, right) = if left <= right { (left, right) } else { (right, left) };
        let x1 = (left + 0.5 - EPS).floor() as i64;
        let x2 = (right - 0.5 - EPS).floor() as i64;
        if x2 < x1 {
            None
        } else {
            Some(Span { x1, x2 })
        }
    }
}

/// Crossings and resulting spans of a single row
#[derive(Debug,Default)]
pub struct Scanline {
    pub y: i64,
    pub crossings: Vec<Crossing>,
    pub spans: Vec<Span>,
}

impl Scanline {
    pub fn new() -> Self {
        Self { y: 0, crossings: vec![], spans: vec![] }
    }
    /// Start a new row, keeping allocations
    pub fn reset(&mut self, y: i64) {
        self.y = y;
        self.crossings.clear();
        self.spans.clear();
    }
    pub fn add_crossing(&mut self, x: f64, dir: i32) {
        self.crossings.push(Crossing { x, dir });
    }
    /// Sort crossings by x and turn them into spans
    ///
    /// Sorting is stable, so crossings at the same x keep edge order.
    pub fn finalize(&mut self, rule: FillingRule) {
        self.crossings.sort_by(|a,b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
        match rule {
            FillingRule::NonZero => self.sweep_nonzero(),
            FillingRule::EvenOdd => self.sweep_pairs(),
        }
    }
    /// Filled while the running winding total is non-zero
    fn sweep_nonzero(&mut self) {
        let mut winding = 0;
        let mut start = None;
        for c in &self.crossings {
            let prev = winding;
            winding += c.dir;
            if prev == 0 && winding != 0 {
                start = Some(c.x);
            } else if prev != 0 && winding == 0 {
                if let Some(x0) = start.take() {
                    if let Some(span) = Span::from_edges(x0, c.x) {
                        self.spans.push(span);
                    }
                }
            }
        }
    }
    /// Consecutive pairs; an unpaired last crossing is dropped
    fn sweep_pairs(&mut self) {
        for pair in self.crossings.chunks_exact(2) {
            if let Some(span) = Span::from_edges(pair[0].x, pair[1].x) {
                self.spans.push(span);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(xs: &[(f64,i32)], rule: FillingRule) -> Vec<(i64,i64)> {
        let mut sl = Scanline::new();
        for &(x,d) in xs {
            sl.add_crossing(x, d);
        }
        sl.finalize(rule);
        sl.spans.iter().map(|s| (s.x1, s.x2)).collect()
    }

    #[test]
    fn span_pixel_centres() {
        assert_eq!(Span::from_edges(10.0, 20.0), Some(Span { x1: 10, x2: 19 }));
        assert_eq!(Span::from_edges(10.4, 10.6), Some(Span { x1: 10, x2: 10 }));
        assert_eq!(Span::from_edges(10.6, 11.4), None);
        assert_eq!(Span::from_edges(20.0, 10.0), Some(Span { x1: 10, x2: 19 }));
        assert_eq!(Span::from_edges(-3.0, -1.0), Some(Span { x1: -3, x2: -2 }));
    }

    #[test]
    fn nonzero_merges_overlaps() {
        // Two overlapping same-direction intervals make one span
        let xs = [(0.0, 1), (5.0, 1), (10.0, -1), (15.0, -1)];
        assert_eq!(spans(&xs, FillingRule::NonZero), vec![(0, 14)]);
        assert_eq!(spans(&xs, FillingRule::EvenOdd), vec![(0, 4), (10, 14)]);
    }

    #[test]
    fn nonzero_unsorted_input() {
        let xs = [(20.0, 1), (0.0, -1), (15.0, -1), (5.0, 1)];
        assert_eq!(spans(&xs, FillingRule::NonZero), vec![(0, 4), (15, 19)]);
    }

    #[test]
    fn odd_crossing_dropped() {
        let xs = [(1.0, 1), (3.0, -1), (7.0, 1)];
        assert_eq!(spans(&xs, FillingRule::EvenOdd), vec![(1, 2)]);
    }
}
