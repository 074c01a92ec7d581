/// How does this work
///    canvas = SupersampleCanvas( width, height, scale )
///    polys  = OutlineProvider.outlines( text, size )
///  Fill Operations
///    fill_nonzero( canvas, polys )      -- all contours in one edge list
///      RasterizerScanline::add_contours()
///      render_scanlines()
///        sweep_scanline()                 -- crossings at y + 0.5
///          Scanline::finalize()           -- sort, winding sweep -> spans
///        fill_hline()                     -- clamp, write mask row
///    fill_polygon( canvas, points )     -- crossings paired (underline)
///  Output
///    canvas.downsample( palette )       -- box filter, blend, RGB565
///    crop_vertical()                    -- optional
///    encode_rle()                       -- optional
///    write_binary() / write_rle_include() / write_preview()

pub mod affine_transform;
pub mod buffer;
pub mod canvas;
pub mod color;
pub mod config;
pub mod crop;
pub mod error;
pub mod export;
pub mod geometry;
pub mod glyph;
pub mod logo;
pub mod raster;
pub mod rle;
pub mod scan;

pub use affine_transform::*;
pub use buffer::*;
pub use canvas::*;
pub use color::*;
pub use config::*;
pub use crop::*;
pub use error::*;
pub use export::*;
pub use geometry::*;
pub use glyph::*;
pub use logo::*;
pub use raster::*;
pub use rle::*;
pub use scan::*;

/// Tolerance for horizontal edges, scanline straddle tests and span rounding
pub const EPS: f64 = 1e-7;
