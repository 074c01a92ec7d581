//! Colors
//!
//! Splash images are stored as packed RGB565 values, the native format of
//! the firmware display driver.

use std::str::FromStr;

use crate::error::{Error, Result};

/// Color as Red, Green, and Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// Parse a CSS hex color, `#RGB` or `#RRGGBB`
    ///
    /// The leading `#` is optional and surrounding whitespace is ignored.
    /// Short forms double each digit, so `#1ef` is `#11eeff`.
    pub fn from_css_hex(css: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(css.to_string());
        let s = css.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let digit = |i: usize| u8::from_str_radix(&s[i..i+1], 16).map_err(|_| invalid());
        let pair  = |i: usize| u8::from_str_radix(&s[i..i+2], 16).map_err(|_| invalid());
        match s.len() {
            3 => Ok(Self::new(digit(0)? * 17, digit(1)? * 17, digit(2)? * 17)),
            6 => Ok(Self::new(pair(0)?, pair(2)?, pair(4)?)),
            _ => Err(invalid()),
        }
    }
}

impl FromStr for Rgb8 {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Rgb8::from_css_hex(s)
    }
}

/// Pack a color into 16 bits: 5 bits red, 6 bits green, 5 bits blue
///
/// Low bits of each channel are truncated.
pub fn rgb565(c: Rgb8) -> u16 {
    let (r,g,b) = (u16::from(c.r), u16::from(c.g), u16::from(c.b));
    ((r & 0xF8) << 8) | ((g & 0xFC) << 3) | (b >> 3)
}

/// Expand a packed RGB565 value back to 8 bits per channel
///
/// High bits are replicated into the low bits so full intensity maps to 255.
pub fn rgb565_to_rgb8(v: u16) -> Rgb8 {
    let r = ((v >> 11) & 0x1F) as u8;
    let g = ((v >> 5) & 0x3F) as u8;
    let b = (v & 0x1F) as u8;
    Rgb8::new((r << 3) | (r >> 2),
              (g << 2) | (g >> 4),
              (b << 3) | (b >> 2))
}

/// Interpolate between background and foreground by a coverage value
///
/// `alpha` is clamped to [0,1]; each channel is rounded to the nearest
/// integer, so alpha 0 and 1 reproduce the endpoints exactly.
pub fn blend(bg: Rgb8, fg: Rgb8, alpha: f64) -> Rgb8 {
    let alpha = alpha.max(0.0).min(1.0);
    let mix = |bg: u8, fg: u8| {
        let (bg, fg) = (f64::from(bg), f64::from(fg));
        (bg + (fg - bg) * alpha).round() as u8
    };
    Rgb8::new(mix(bg.r, fg.r), mix(bg.g, fg.g), mix(bg.b, fg.b))
}

/// Background and foreground colors of a render
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Palette {
    pub background: Rgb8,
    pub foreground: Rgb8,
}

impl Palette {
    pub fn new(background: Rgb8, foreground: Rgb8) -> Self {
        Self { background, foreground }
    }
    /// Packed color for a coverage value
    pub fn shade(&self, alpha: f64) -> u16 {
        rgb565(blend(self.background, self.foreground, alpha))
    }
    /// Packed background color
    pub fn background565(&self) -> u16 {
        rgb565(self.background)
    }
}

impl Default for Palette {
    /// Warm paper background with dodger blue text
    fn default() -> Palette {
        Palette {
            background: Rgb8::new(246, 241, 234),
            foreground: Rgb8::new(0x1e, 0x90, 0xff),
        }
    }
}
