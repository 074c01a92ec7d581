//! Points, contours and contour sets
//!
//! Coordinates use the raster convention: x to the right, y increasing
//! downward.

use crate::affine_transform::AffineTransform;

#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64,f64)> for Point {
    fn from((x,y): (f64,f64)) -> Point {
        Point::new(x, y)
    }
}

/// Rectangle
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rectangle {
    /// Minimum x value
    pub x1: f64,
    /// Minimum y value
    pub y1: f64,
    /// Maximum x value
    pub x2: f64,
    /// Maximum y value
    pub y2: f64,
}

impl Rectangle {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (x1, x2) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (y1, y2) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { x1,y1,x2,y2 }
    }
    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(x, y, x + w, y + h)
    }
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
    /// Expand if the point (x,y) is outside
    pub fn expand(&mut self, x: f64, y: f64) {
        if x < self.x1 { self.x1 = x; }
        if x > self.x2 { self.x2 = x; }
        if y < self.y1 { self.y1 = y; }
        if y > self.y2 { self.y2 = y; }
    }
    /// Corners in clockwise order (y down), starting at the top left
    pub fn corners(&self) -> Vec<Point> {
        vec![Point::new(self.x1, self.y1),
             Point::new(self.x2, self.y1),
             Point::new(self.x2, self.y2),
             Point::new(self.x1, self.y2)]
    }
}

#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise
}

/// Closed polygon outline
///
/// The edge from the last point back to the first is implicit.  Contours
///   always hold at least three points.
#[derive(Debug,Clone,PartialEq)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    /// Minimum number of points in a contour
    pub const MIN_POINTS: usize = 3;

    /// Create a contour, or None if fewer than three points are given
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.len() < Self::MIN_POINTS {
            None
        } else {
            Some(Self { points })
        }
    }
    pub fn from_xy(xy: &[(f64,f64)]) -> Option<Self> {
        Self::new(xy.iter().map(|&p| p.into()).collect())
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Edges as (start, end) pairs, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0 .. n).map(move |i| (self.points[i], self.points[(i+1) % n]))
    }
    /// Twice the signed area; positive for clockwise in y-down coordinates
    pub fn signed_area2(&self) -> f64 {
        self.edges().map(|(p1,p2)| p1.x * p2.y - p2.x * p1.y).sum()
    }
    pub fn orientation(&self) -> Orientation {
        if self.signed_area2() < 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }
    /// Reverse the point order, flipping the orientation
    pub fn invert(&mut self) {
        self.points.reverse();
    }
    pub fn bounds(&self) -> Rectangle {
        let p0 = self.points[0];
        let mut r = Rectangle::new(p0.x, p0.y, p0.x, p0.y);
        for p in &self.points {
            r.expand(p.x, p.y);
        }
        r
    }
    pub fn transform(&self, trans: &AffineTransform) -> Contour {
        let points = self.points.iter()
            .map(|p| {
                let (x,y) = trans.transform(p.x, p.y);
                Point::new(x, y)
            })
            .collect();
        Contour { points }
    }
}

impl From<Rectangle> for Contour {
    fn from(r: Rectangle) -> Contour {
        Contour { points: r.corners() }
    }
}

/// Unordered collection of contours forming one shape
///
/// Contours may nest or overlap; fills consider all of them together.
#[derive(Debug,Default,Clone,PartialEq)]
pub struct ContourSet {
    pub contours: Vec<Contour>,
}

impl ContourSet {
    pub fn new() -> Self {
        Self { contours: vec![] }
    }
    pub fn push(&mut self, contour: Contour) {
        self.contours.push(contour);
    }
    /// Add a contour from raw points, skipping it if it has fewer than three
    pub fn push_points(&mut self, points: Vec<Point>) {
        if let Some(c) = Contour::new(points) {
            self.contours.push(c);
        }
    }
    pub fn len(&self) -> usize {
        self.contours.len()
    }
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Contour> {
        self.contours.iter()
    }
    /// Bounding box of every point, None when empty
    pub fn bounds(&self) -> Option<Rectangle> {
        let mut iter = self.contours.iter();
        let mut r = iter.next()?.bounds();
        for c in iter {
            let b = c.bounds();
            r.expand(b.x1, b.y1);
            r.expand(b.x2, b.y2);
        }
        Some(r)
    }
    pub fn transform(&self, trans: &AffineTransform) -> ContourSet {
        ContourSet { contours: self.contours.iter().map(|c| c.transform(trans)).collect() }
    }
    pub fn translate(&self, dx: f64, dy: f64) -> ContourSet {
        let mut t = AffineTransform::new();
        t.translate(dx, dy);
        self.transform(&t)
    }
    pub fn scaled(&self, s: f64) -> ContourSet {
        let mut t = AffineTransform::new();
        t.scale(s, s);
        self.transform(&t)
    }
}

impl From<Contour> for ContourSet {
    fn from(c: Contour) -> ContourSet {
        ContourSet { contours: vec![c] }
    }
}

impl<'a> IntoIterator for &'a ContourSet {
    type Item = &'a Contour;
    type IntoIter = std::slice::Iter<'a, Contour>;
    fn into_iter(self) -> Self::IntoIter {
        self.contours.iter()
    }
}
