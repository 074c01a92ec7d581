//! Writing of splash images
//!
//! - Packed binary: little-endian u16 width, u16 height, then width x height
//!   RGB565 values in row-major order
//! - RLE include: C source with the run table for the builtin logo
//! - Preview: PNG for looking at the result on a desktop
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::color::rgb565_to_rgb8;
use crate::error::{Error, Result};
use crate::rle::Run;

fn create_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}

fn dimension(v: usize, name: &str) -> Result<u16> {
    if v > usize::from(u16::MAX) {
        return Err(Error::InvalidConfig(format!("{} {} does not fit in 16 bits", name, v)));
    }
    Ok(v as u16)
}

/// Packed binary image, 4 + 2 * width * height bytes
pub fn to_packed_bytes(pixels: &PixelBuffer) -> Result<Vec<u8>> {
    let w = dimension(pixels.width, "width")?;
    let h = dimension(pixels.height, "height")?;
    let mut out = Vec::with_capacity(4 + 2 * pixels.len());
    out.extend_from_slice(&w.to_le_bytes());
    out.extend_from_slice(&h.to_le_bytes());
    for v in &pixels.data {
        out.extend_from_slice(&v.to_le_bytes());
    }
    Ok(out)
}

/// Write the packed binary image, creating parent directories
pub fn write_binary<P: AsRef<Path>>(path: P, pixels: &PixelBuffer) -> Result<usize> {
    let path = path.as_ref();
    let bytes = to_packed_bytes(pixels)?;
    create_parent(path)?;
    fs::write(path, &bytes)?;
    log::info!("WRITE BINARY: {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes.len())
}

/// C source declaring the logo size and run table
pub fn rle_include_source(width: usize, height: usize, runs: &[Run]) -> String {
    let mut s = String::new();
    s.push_str("// Auto-generated by splashraster RLE export\n");
    s.push_str("// Width and height for builtin splash logo image\n");
    s.push_str("enum {\n");
    let _ = writeln!(s, "    kBuiltinLogoWidth = {},", width);
    let _ = writeln!(s, "    kBuiltinLogoHeight = {},", height);
    s.push_str("};\n");
    s.push_str("static const LogoRun kBuiltinLogoRle[] = {\n");
    for r in runs {
        let _ = writeln!(s, "    {{ {}, 0x{:04X} }},", r.count, r.value);
    }
    s.push_str("};\n");
    s.push_str("static const size_t kBuiltinLogoRleCount = sizeof(kBuiltinLogoRle) / sizeof(kBuiltinLogoRle[0]);\n");
    s
}

/// Write the RLE include file, creating parent directories
pub fn write_rle_include<P: AsRef<Path>>(path: P, width: usize, height: usize, runs: &[Run]) -> Result<()> {
    let path = path.as_ref();
    create_parent(path)?;
    fs::write(path, rle_include_source(width, height, runs))?;
    log::info!("WRITE RLE INCLUDE: {} ({} runs)", path.display(), runs.len());
    Ok(())
}

/// Expand to 8-bit RGB, 3 bytes per pixel
pub fn to_rgb24(pixels: &PixelBuffer) -> Vec<u8> {
    let mut out = Vec::with_capacity(3 * pixels.len());
    for &v in &pixels.data {
        let c = rgb565_to_rgb8(v);
        out.extend_from_slice(&[c.r, c.g, c.b]);
    }
    out
}

/// Save a preview image; the format follows the file extension
pub fn write_preview<P: AsRef<Path>>(path: P, pixels: &PixelBuffer) -> Result<()> {
    let path = path.as_ref();
    create_parent(path)?;
    image::save_buffer(path, &to_rgb24(pixels), pixels.width as u32, pixels.height as u32, image::RGB(8))?;
    log::info!("WRITE PREVIEW: {}", path.display());
    Ok(())
}

/// Read an image file as 8-bit RGB, returning (data, width, height)
pub fn read_preview<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize)> {
    let img = image::open(path)?.to_rgb();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}

/// Read a packed binary image back
///
/// Returns None if the header and length disagree.
pub fn from_packed_bytes(bytes: &[u8]) -> Option<PixelBuffer> {
    if bytes.len() < 4 {
        return None;
    }
    let w = usize::from(u16::from_le_bytes([bytes[0], bytes[1]]));
    let h = usize::from(u16::from_le_bytes([bytes[2], bytes[3]]));
    let body = &bytes[4..];
    if body.len() != 2 * w * h {
        return None;
    }
    let data = body.chunks_exact(2).map(|b| u16::from_le_bytes([b[0], b[1]])).collect();
    Some(PixelBuffer::from_vec(data, w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_layout() {
        let p = PixelBuffer::from_vec(vec![0x1234, 0xABCD], 2, 1);
        assert_eq!(to_packed_bytes(&p).unwrap(), vec![2, 0, 1, 0, 0x34, 0x12, 0xCD, 0xAB]);
        assert_eq!(from_packed_bytes(&[2, 0, 1, 0, 0x34, 0x12, 0xCD, 0xAB]), Some(p));
        assert_eq!(from_packed_bytes(&[2, 0, 1, 0, 0x34]), None);
        assert_eq!(from_packed_bytes(&[]), None);
    }

    #[test]
    fn oversize_dimension_rejected() {
        let p = PixelBuffer::from_vec(vec![], 70000, 0);
        assert!(matches!(to_packed_bytes(&p), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn include_source_text() {
        let s = rle_include_source(320, 2, &[Run::new(3, 0xF79D), Run::new(637, 0x1C9F)]);
        let expected = "\
// Auto-generated by splashraster RLE export
// Width and height for builtin splash logo image
enum {
    kBuiltinLogoWidth = 320,
    kBuiltinLogoHeight = 2,
};
static const LogoRun kBuiltinLogoRle[] = {
    { 3, 0xF79D },
    { 637, 0x1C9F },
};
static const size_t kBuiltinLogoRleCount = sizeof(kBuiltinLogoRle) / sizeof(kBuiltinLogoRle[0]);
";
        assert_eq!(s, expected);
    }

    #[test]
    fn rgb24_expansion() {
        let p = PixelBuffer::from_vec(vec![0xF800, 0x001F], 2, 1);
        assert_eq!(to_rgb24(&p), vec![255, 0, 0, 0, 0, 255]);
    }
}
