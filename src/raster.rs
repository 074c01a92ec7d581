//! Scanline polygon rasterizer
//!
//! All edges of all contours go into one flat edge list before the sweep,
//!   so nested contours of opposite direction cancel and leave holes.

use crate::canvas::SupersampleCanvas;
use crate::geometry::Contour;
use crate::geometry::ContourSet;
use crate::geometry::Point;
use crate::scan::Scanline;
use crate::EPS;

#[derive(Debug,PartialEq,Copy,Clone)]
pub enum FillingRule {
    /// Inside where the signed crossing count is not zero
    NonZero,
    /// Crossings paired left to right
    EvenOdd,
}
impl Default for FillingRule {
    fn default() -> FillingRule {
        FillingRule::NonZero
    }
}

/// Non-horizontal polygon edge in sample coordinates
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Edge {
    /// Create an edge, None if horizontal
    pub fn new(p0: Point, p1: Point) -> Option<Edge> {
        if (p1.y - p0.y).abs() < EPS {
            None
        } else {
            Some(Edge { x0: p0.x, y0: p0.y, x1: p1.x, y1: p1.y })
        }
    }
    /// +1 when the edge runs toward increasing y, otherwise -1
    pub fn dir(&self) -> i32 {
        if self.y1 > self.y0 { 1 } else { -1 }
    }
    /// Crossing x of the horizontal line at y
    ///
    /// The vertical range is half open, (ymin, ymax], so a vertex shared by
    ///   two edges is counted once.
    pub fn intersect(&self, y: f64) -> Option<f64> {
        let (ymin, ymax) = if self.y0 < self.y1 { (self.y0, self.y1) } else { (self.y1, self.y0) };
        if !(y > ymin + EPS && y <= ymax + EPS) {
            return None;
        }
        let t = (y - self.y0) / (self.y1 - self.y0);
        Some(self.x0 + t * (self.x1 - self.x0))
    }
}

/// Edge list and filling rule for one fill operation
#[derive(Debug)]
pub struct RasterizerScanline {
    pub edges: Vec<Edge>,
    pub filling_rule: FillingRule,
    min_y: f64,
    max_y: f64,
}

impl Default for RasterizerScanline {
    fn default() -> Self {
        Self::new(FillingRule::default())
    }
}

impl RasterizerScanline {
    pub fn new(filling_rule: FillingRule) -> Self {
        Self { edges: vec![], filling_rule,
               min_y: std::f64::MAX, max_y: std::f64::MIN }
    }
    pub fn reset(&mut self) {
        self.edges.clear();
        self.min_y = std::f64::MAX;
        self.max_y = std::f64::MIN;
    }
    /// Add the closed polygon through `points`, scaled by `scale`
    ///
    /// Horizontal edges are skipped.
    pub fn add_points(&mut self, points: &[Point], scale: f64) {
        let n = points.len();
        for i in 0 .. n {
            let p0 = points[i];
            let p1 = points[(i+1) % n];
            let p0 = Point::new(p0.x * scale, p0.y * scale);
            let p1 = Point::new(p1.x * scale, p1.y * scale);
            if let Some(e) = Edge::new(p0, p1) {
                self.min_y = self.min_y.min(e.y0.min(e.y1));
                self.max_y = self.max_y.max(e.y0.max(e.y1));
                self.edges.push(e);
            }
        }
    }
    pub fn add_contour(&mut self, contour: &Contour, scale: f64) {
        self.add_points(contour.points(), scale);
    }
    pub fn add_contours(&mut self, set: &ContourSet, scale: f64) {
        for c in set {
            self.add_contour(c, scale);
        }
    }
    /// Collect crossings and spans of sample row y
    ///
    /// The row is sampled along its centre line, y + 0.5.
    pub fn sweep_scanline(&self, y: i64, sl: &mut Scanline) {
        sl.reset(y);
        // Half-sample offset is intended: sampling centres, not integer rows,
        //   makes a square from (10,10) to (20,20) cover exactly 10 x 10.
        let yc = y as f64 + 0.5;
        for e in &self.edges {
            if let Some(x) = e.intersect(yc) {
                sl.add_crossing(x, e.dir());
            }
        }
        if !sl.crossings.is_empty() {
            sl.finalize(self.filling_rule);
        }
    }
    /// Rows of the canvas the edges can touch
    fn row_range(&self, hi_height: usize) -> std::ops::Range<i64> {
        if self.edges.is_empty() {
            return 0 .. 0;
        }
        let first = (self.min_y - 1.0).floor().max(0.0) as i64;
        let last = (self.max_y + 1.0).ceil().min(hi_height as f64).max(0.0) as i64;
        first .. last.max(first)
    }
}

/// Sweep every row and write spans into the canvas
pub fn render_scanlines(ras: &RasterizerScanline, canvas: &mut SupersampleCanvas) {
    let mut sl = Scanline::new();
    let rows = ras.row_range(canvas.hi_height());
    log::debug!("RENDER SCANLINES: {:?} edges {} rows {:?}", ras.filling_rule, ras.edges.len(), rows);
    for y in rows {
        ras.sweep_scanline(y, &mut sl);
        for span in &sl.spans {
            canvas.fill_hline(span.x1, sl.y, span.x2, true);
        }
    }
}

/// Fill a contour set with the non-zero winding rule
///
/// Contours are in output pixel units and scaled to the canvas samples.
pub fn fill_nonzero(canvas: &mut SupersampleCanvas, contours: &ContourSet) {
    let mut ras = RasterizerScanline::new(FillingRule::NonZero);
    ras.add_contours(contours, canvas.scale() as f64);
    render_scanlines(&ras, canvas);
}

/// Fill a single simple polygon by pairing crossings
///
/// Fewer than three points is a no-op; any other polygon is swept as given.
pub fn fill_polygon(canvas: &mut SupersampleCanvas, points: &[Point]) {
    if points.len() < Contour::MIN_POINTS {
        return;
    }
    let mut ras = RasterizerScanline::new(FillingRule::EvenOdd);
    ras.add_points(points, canvas.scale() as f64);
    render_scanlines(&ras, canvas);
}
