//! Render settings
//!
//! Defaults reproduce the stock splash: a 320x240 panel, 12x supersampling
//! and "AK Tex." set in italic DejaVu Sans with an underline.

use std::path::PathBuf;

use crate::color::Palette;
use crate::error::{Error, Result};

/// Canvas size, supersampling and colors
#[derive(Debug,Clone,PartialEq)]
pub struct SplashConfig {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
    /// Samples per pixel along each axis
    pub supersample: usize,
    pub palette: Palette,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self { width: 320, height: 240, supersample: 12, palette: Palette::default() }
    }
}

impl SplashConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!("image size {}x{} is empty", self.width, self.height)));
        }
        // The packed header stores each dimension in 16 bits
        if self.width > 0xFFFF || self.height > 0xFFFF {
            return Err(Error::InvalidConfig(format!("image size {}x{} exceeds 65535", self.width, self.height)));
        }
        if self.supersample == 0 {
            return Err(Error::InvalidConfig("supersample must be at least 1".into()));
        }
        Ok(())
    }
}

#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Family used when none is given or the requested one is not installed
pub const DEFAULT_FONT_FAMILY: &str = "DejaVu Sans";

/// Which font to set the text in
#[derive(Debug,Clone,PartialEq)]
pub struct FontRequest {
    /// System font family, used when no path is given
    pub family: Option<String>,
    /// Font file, overrides the family
    pub path: Option<PathBuf>,
    pub style: FontStyle,
    pub weight: FontWeight,
    /// Extra slant in degrees, applied to the outlines
    pub italic_shear_degrees: f64,
}

impl Default for FontRequest {
    fn default() -> Self {
        Self {
            family: Some(DEFAULT_FONT_FAMILY.to_string()),
            path: None,
            style: FontStyle::Italic,
            weight: FontWeight::Normal,
            italic_shear_degrees: 0.0,
        }
    }
}

/// Text and underline layout
///
/// Underline values are fractions: gap and thickness of `height`, width of
///   the text width.
#[derive(Debug,Clone,PartialEq)]
pub struct LogoStyle {
    pub text: String,
    /// Nominal glyph height (font size) in pixels
    pub height: f64,
    /// Vertical shift of the centred text
    pub baseline_offset: f64,
    pub font: FontRequest,
    /// Baseline to top of underline
    pub underline_gap: f64,
    pub underline_thickness: f64,
    pub underline_width: f64,
}

impl Default for LogoStyle {
    fn default() -> Self {
        Self {
            text: "AK Tex.".to_string(),
            height: 44.0,
            baseline_offset: -4.0,
            font: FontRequest::default(),
            underline_gap: 0.06,
            underline_thickness: 0.10,
            underline_width: 0.94,
        }
    }
}

impl LogoStyle {
    pub fn validate(&self) -> Result<()> {
        let finite = [("height", self.height),
                      ("baseline offset", self.baseline_offset),
                      ("italic shear", self.font.italic_shear_degrees),
                      ("underline gap", self.underline_gap),
                      ("underline thickness", self.underline_thickness),
                      ("underline width", self.underline_width)];
        for (name, v) in finite.iter() {
            if !v.is_finite() {
                return Err(Error::InvalidConfig(format!("{} is not finite: {}", name, v)));
            }
        }
        if self.height <= 0.0 {
            return Err(Error::InvalidConfig(format!("height must be positive: {}", self.height)));
        }
        if self.underline_thickness < 0.0 || self.underline_width < 0.0 {
            return Err(Error::InvalidConfig("underline size must not be negative".into()));
        }
        if self.font.italic_shear_degrees.abs() >= 90.0 {
            return Err(Error::InvalidConfig(format!("italic shear {} out of range", self.font.italic_shear_degrees)));
        }
        Ok(())
    }
}
