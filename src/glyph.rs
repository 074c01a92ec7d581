//! Text outlines
//!
//! Glyph outlines come from FreeType and are flattened into closed point
//! contours.  Fonts are located with font-loader unless a file is given.
//!
//! Coordinates are in pixels at a font size where one em equals `size`,
//! with the baseline at y = 0 and y increasing downward.

use std::path::Path;

use font_loader::system_fonts;
use freetype::outline::Curve;
use freetype::face::{KerningMode, LoadFlag};

use crate::affine_transform::AffineTransform;
use crate::config::{FontRequest, FontStyle, FontWeight, DEFAULT_FONT_FAMILY};
use crate::error::{Error, Result};
use crate::geometry::{ContourSet, Point};

/// Source of glyph outlines for a line of text
pub trait OutlineProvider {
    /// Contours of `text` set at `size` pixels per em
    fn outlines(&self, text: &str, size: f64) -> Result<ContourSet>;
}

/// Largest distance allowed between a curve and its flattened polyline
const FLATNESS: f64 = 0.02;
const MAX_CURVE_SEGMENTS: usize = 64;

/// Builds one closed contour from path commands
#[derive(Debug,Default)]
pub struct Flattener {
    points: Vec<Point>,
}

impl Flattener {
    pub fn new() -> Self {
        Self { points: vec![] }
    }
    fn last(&self) -> Point {
        self.points.last().cloned().unwrap_or_default()
    }
    pub fn move_to(&mut self, p: Point) {
        self.points.clear();
        self.points.push(p);
    }
    pub fn line_to(&mut self, p: Point) {
        self.points.push(p);
    }
    /// Quadratic Bézier from the current point
    pub fn quad_to(&mut self, c: Point, p: Point) {
        let p0 = self.last();
        let dd = hypot(p0.x - 2.0 * c.x + p.x, p0.y - 2.0 * c.y + p.y);
        let n = segments(dd / 4.0);
        for i in 1 ..= n {
            let t = i as f64 / n as f64;
            let mt = 1.0 - t;
            self.points.push(Point::new(mt * mt * p0.x + 2.0 * mt * t * c.x + t * t * p.x,
                                        mt * mt * p0.y + 2.0 * mt * t * c.y + t * t * p.y));
        }
    }
    /// Cubic Bézier from the current point
    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) {
        let p0 = self.last();
        let d1 = hypot(p0.x - 2.0 * c1.x + c2.x, p0.y - 2.0 * c1.y + c2.y);
        let d2 = hypot(c1.x - 2.0 * c2.x + p.x, c1.y - 2.0 * c2.y + p.y);
        let n = segments(0.75 * d1.max(d2));
        for i in 1 ..= n {
            let t = i as f64 / n as f64;
            let mt = 1.0 - t;
            let (a, b, c, d) = (mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t);
            self.points.push(Point::new(a * p0.x + b * c1.x + c * c2.x + d * p.x,
                                        a * p0.y + b * c1.y + c * c2.y + d * p.y));
        }
    }
    /// Finish the contour, dropping a repeated start point
    pub fn close(&mut self) -> Vec<Point> {
        if self.points.len() > 1 && self.points.first() == self.points.last() {
            self.points.pop();
        }
        std::mem::replace(&mut self.points, vec![])
    }
}

fn hypot(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

/// Segment count keeping the chord error under FLATNESS (Wang's formula)
fn segments(second_difference: f64) -> usize {
    let n = (second_difference / FLATNESS).sqrt().ceil();
    (n as usize).max(1).min(MAX_CURVE_SEGMENTS)
}

/// One glyph before placement, in y-up font space relative to its origin
#[derive(Debug,Clone,Default,PartialEq)]
pub struct GlyphOutline {
    pub contours: Vec<Vec<Point>>,
    /// Kerning against the previous glyph, applied before this one
    pub kerning: f64,
    /// Pen advance after this glyph
    pub advance: f64,
}

/// Set glyphs along the baseline and map them to y-down pixel space
///
/// The pen moves by each glyph's kerning, the glyph is drawn, then the pen
///   moves by its advance.  The flipped result is sheared by x += y * shear.
pub fn layout_glyphs(glyphs: &[GlyphOutline], shear: f64) -> ContourSet {
    let mut set = ContourSet::new();
    let mut pen_x = 0.0;
    for g in glyphs {
        pen_x += g.kerning;
        for c in &g.contours {
            set.push_points(c.iter().map(|p| Point::new(pen_x + p.x, p.y)).collect());
        }
        pen_x += g.advance;
    }
    let mut t = AffineTransform::new();
    t.scale(1.0, -1.0);
    t.shear_x(shear);
    set.transform(&t)
}

/// Outlines from a FreeType face
pub struct FreetypeOutlines {
    face: freetype::Face,
    _library: freetype::Library,
    shear: f64,
}

impl FreetypeOutlines {
    /// Open the font described by `req`
    ///
    /// An explicit path wins over the family name.
    pub fn new(req: &FontRequest) -> Result<Self> {
        let library = freetype::Library::init()?;
        let face = match &req.path {
            Some(path) => open_file(&library, path)?,
            None => {
                let (data, index) = find_system_font(req)?;
                library.new_memory_face(data, index as isize)?
            }
        };
        let shear = req.italic_shear_degrees.to_radians().tan();
        log::info!("FONT: {:?} {:?} shear {:.3}",
                   face.family_name(), face.style_name(), shear);
        Ok(Self { face, _library: library, shear })
    }
    /// Contours of the loaded glyph
    fn glyph_contours(&self) -> Vec<Vec<Point>> {
        let mut out = vec![];
        let outline = match self.face.glyph().outline() {
            Some(o) => o,
            None => return out,
        };
        let pt = |v: &freetype::Vector| Point::new(v.x as f64 / 64.0, v.y as f64 / 64.0);
        for contour in outline.contours_iter() {
            let mut f = Flattener::new();
            f.move_to(pt(&contour.start()));
            for curve in contour {
                match curve {
                    Curve::Line(p)            => f.line_to(pt(&p)),
                    Curve::Bezier2(c, p)      => f.quad_to(pt(&c), pt(&p)),
                    Curve::Bezier3(c1, c2, p) => f.cubic_to(pt(&c1), pt(&c2), pt(&p)),
                }
            }
            out.push(f.close());
        }
        out
    }
}

impl OutlineProvider for FreetypeOutlines {
    fn outlines(&self, text: &str, size: f64) -> Result<ContourSet> {
        // One point per pixel at 72 dpi, so the em is `size` pixels
        let char_size = (size * 64.0).round() as isize;
        self.face.set_char_size(char_size, 0, 72, 72)?;

        let mut glyphs = Vec::with_capacity(text.len());
        let mut prev = 0;
        for c in text.chars() {
            let index = self.face.get_char_index(c as usize);
            // Index 0 is the missing glyph, which has no kerning pairs
            let kerning = if prev != 0 && index != 0 {
                self.face.get_kerning(prev, index, KerningMode::KerningDefault)?.x as f64 / 64.0
            } else {
                0.0
            };
            self.face.load_glyph(index, LoadFlag::NO_HINTING)?;
            // Unrounded advance, 16.16 fixed point
            let advance = self.face.glyph().linear_hori_advance() as f64 / 65536.0;
            glyphs.push(GlyphOutline { contours: self.glyph_contours(), kerning, advance });
            prev = index;
        }
        let set = layout_glyphs(&glyphs, self.shear);
        log::debug!("OUTLINES: {:?} size {} -> {} contours", text, size, set.len());
        Ok(set)
    }
}

fn open_file(library: &freetype::Library, path: &Path) -> Result<freetype::Face> {
    if !path.is_file() {
        return Err(Error::FontNotFound(path.display().to_string()));
    }
    Ok(library.new_face(path, 0)?)
}

/// A system font lookup
#[derive(Debug,Clone,PartialEq)]
struct FontQuery {
    family: String,
    italic: bool,
    bold: bool,
}

/// Lookups in the order they are tried
///
/// The requested variant, then the regular face of the family, then the
///   same two for the default family.
fn font_candidates(req: &FontRequest) -> Vec<FontQuery> {
    let family = req.family.as_ref().map(|s| s.as_str()).unwrap_or(DEFAULT_FONT_FAMILY);
    let italic = req.style == FontStyle::Italic;
    let bold = req.weight == FontWeight::Bold;
    let mut families = vec![family];
    if family != DEFAULT_FONT_FAMILY {
        families.push(DEFAULT_FONT_FAMILY);
    }
    let mut out = vec![];
    for f in families {
        out.push(FontQuery { family: f.to_string(), italic, bold });
        if italic || bold {
            out.push(FontQuery { family: f.to_string(), italic: false, bold: false });
        }
    }
    out
}

fn find_system_font(req: &FontRequest) -> Result<(Vec<u8>, i32)> {
    let candidates = font_candidates(req);
    for (i, q) in candidates.iter().enumerate() {
        let mut builder = system_fonts::FontPropertyBuilder::new().family(&q.family);
        if q.italic {
            builder = builder.italic();
        }
        if q.bold {
            builder = builder.bold();
        }
        if let Some((data, index)) = system_fonts::get(&builder.build()) {
            if i > 0 {
                log::warn!("FONT: {:?} not found, using {:?}", candidates[0], q);
            }
            return Ok((data, index as i32));
        }
    }
    Err(Error::FontNotFound(candidates[0].family.clone()))
}
