//! Affine transforms applied to outline points

#[derive(Debug,Copy,Clone,PartialEq)]
pub struct AffineTransform {
    pub sx: f64,
    pub sy: f64,
    pub shx: f64,
    pub shy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl AffineTransform {
    /// Identity transform
    pub fn new() -> Self {
        Self { sx: 1.0,  sy: 1.0,
               shx: 0.0, shy: 0.0,
               tx: 0.0,  ty: 0.0,
        }
    }
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.tx += dx;
        self.ty += dy;
    }
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.sx  *= sx;
        self.shx *= sx;
        self.tx  *= sx;
        self.sy  *= sy;
        self.shy *= sy;
        self.ty  *= sy;
    }
    /// Shear along x in proportion to y: x' = x + y * k
    ///
    /// Applied after the current transform.
    pub fn shear_x(&mut self, k: f64) {
        self.sx  += k * self.shy;
        self.shx += k * self.sy;
        self.tx  += k * self.ty;
    }
    /// Map a point through the transform
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
}
