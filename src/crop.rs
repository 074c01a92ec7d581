//! Vertical cropping of background rows

use crate::buffer::PixelBuffer;

/// Rows of background kept above and below the content
pub const DEFAULT_CROP_MARGIN: usize = 4;

/// Remove background rows from the top and bottom of an image
///
/// A row is background only if every pixel equals `background` exactly.
///   `margin` background rows are kept on each side, clamped to the image.
///   A blank image is returned unchanged.  Width never changes.
pub fn crop_vertical(pixels: &PixelBuffer, background: u16, margin: usize) -> PixelBuffer {
    let is_bg = |row: &[u16]| row.iter().all(|&v| v == background);
    let top = pixels.rows().position(|r| !is_bg(r));
    let bottom = pixels.rows().rposition(|r| !is_bg(r));
    let (top, bottom) = match (top, bottom) {
        (Some(t), Some(b)) if t <= b => (t, b),
        _ => {
            log::debug!("CROP VERTICAL: blank {}x{}, unchanged", pixels.width, pixels.height);
            return pixels.clone();
        }
    };
    let top = top.saturating_sub(margin);
    let bottom = (bottom + margin).min(pixels.height - 1);
    let w = pixels.width;
    let data = pixels.data[top * w .. (bottom + 1) * w].to_vec();
    log::debug!("CROP VERTICAL: rows {} ..= {} of {}", top, bottom, pixels.height);
    PixelBuffer::from_vec(data, w, bottom - top + 1)
}
