//! Splash logo rendering: centred text with an underline

use crate::buffer::PixelBuffer;
use crate::canvas::SupersampleCanvas;
use crate::config::{LogoStyle, SplashConfig};
use crate::error::Result;
use crate::geometry::{Contour, Rectangle};
use crate::glyph::OutlineProvider;
use crate::raster::{fill_nonzero, fill_polygon};

/// Output of a render
#[derive(Debug,Clone,PartialEq)]
pub struct Rendered {
    pub pixels: PixelBuffer,
    /// Width of the text outlines in pixels, 0 for empty text
    pub text_width: f64,
}

/// Render the logo described by `style`
///
/// The text bounding box is centred on the canvas, then moved down by
///   `baseline_offset`.  The underline is centred horizontally and hangs
///   below the baseline.
pub fn render_logo(config: &SplashConfig, style: &LogoStyle,
                   fonts: &dyn OutlineProvider) -> Result<Rendered> {
    config.validate()?;
    style.validate()?;

    let (w, h) = (config.width as f64, config.height as f64);
    let mut canvas = SupersampleCanvas::new(config.width, config.height, config.supersample);
    canvas.clear();

    let polys = fonts.outlines(&style.text, style.height)?;
    let bounds = match polys.bounds() {
        Some(b) => b,
        None => {
            log::warn!("RENDER LOGO: no outlines for {:?}", style.text);
            return Ok(Rendered { pixels: canvas.downsample(&config.palette), text_width: 0.0 });
        }
    };
    let (text_w, text_h) = (bounds.width(), bounds.height());

    let origin_x = (w - text_w) / 2.0 - bounds.x1;
    let origin_y = (h - text_h) / 2.0 + style.baseline_offset - bounds.y1;
    let polys = polys.translate(origin_x, origin_y);
    log::debug!("RENDER LOGO: text {:.1}x{:.1} origin {:.2},{:.2}", text_w, text_h, origin_x, origin_y);

    fill_nonzero(&mut canvas, &polys);

    let baseline_y = origin_y;
    let line_w = text_w * style.underline_width;
    let line_h = (style.height * style.underline_thickness).max(1.0);
    let line_y = baseline_y + style.height * style.underline_gap;
    let line_x = (w - line_w) / 2.0;
    let underline = Contour::from(Rectangle::from_xywh(line_x, line_y, line_w, line_h));
    fill_polygon(&mut canvas, underline.points());

    Ok(Rendered { pixels: canvas.downsample(&config.palette), text_width: text_w })
}
