use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record};

use splashraster::{FontRequest, FontStyle, FontWeight, FreetypeOutlines, LogoStyle,
                   Palette, Rgb8, SplashConfig};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Normal,
    Italic,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum WeightArg {
    Normal,
    Bold,
}

/// Generate the splash image for the controller's flash filesystem
#[derive(Debug, Parser)]
#[command(name = "splashraster", version)]
struct Args {
    /// Output path for the packed splash image
    #[arg(short, long, default_value = "data/splash.bin")]
    output: PathBuf,
    /// Also write the builtin RLE include file here
    #[arg(long)]
    rle_inc: Option<PathBuf>,
    /// Also write a preview image (format from extension, e.g. .png)
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Text to render
    #[arg(long, default_value = "AK Tex.")]
    text: String,
    /// Font size / nominal height in px
    #[arg(long, default_value_t = 44.0)]
    height: f64,
    /// Baseline vertical offset
    #[arg(long, default_value_t = -4.0, allow_hyphen_values = true)]
    baseline_offset: f64,

    /// Font family name
    #[arg(long, default_value = "DejaVu Sans")]
    font_family: String,
    /// Path to a specific TTF/OTF font (overrides --font-family)
    #[arg(long)]
    font_path: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = StyleArg::Italic)]
    style: StyleArg,
    #[arg(long, value_enum, default_value_t = WeightArg::Normal)]
    weight: WeightArg,
    /// Additional italic shear in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    italic_shear: f64,

    /// Gap from baseline to underline (font-height units)
    #[arg(long, default_value_t = 0.06, allow_hyphen_values = true)]
    underline_gap: f64,
    /// Underline thickness (font-height units)
    #[arg(long, default_value_t = 0.10)]
    underline_thickness: f64,
    /// Underline width ratio to text width
    #[arg(long, default_value_t = 0.94)]
    underline_width: f64,

    /// CSS hex for the foreground color, e.g. #1e90ff
    #[arg(long, default_value = "#1e90ff", value_parser = parse_color)]
    fg: Rgb8,

    /// More logging, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_color(s: &str) -> Result<Rgb8, String> {
    Rgb8::from_css_hex(s).map_err(|e| e.to_string())
}

impl Args {
    fn logo_style(&self) -> LogoStyle {
        LogoStyle {
            text: self.text.clone(),
            height: self.height,
            baseline_offset: self.baseline_offset,
            font: FontRequest {
                family: Some(self.font_family.clone()),
                path: self.font_path.clone(),
                style: match self.style {
                    StyleArg::Normal => FontStyle::Normal,
                    StyleArg::Italic => FontStyle::Italic,
                },
                weight: match self.weight {
                    WeightArg::Normal => FontWeight::Normal,
                    WeightArg::Bold => FontWeight::Bold,
                },
                italic_shear_degrees: self.italic_shear,
            },
            underline_gap: self.underline_gap,
            underline_thickness: self.underline_thickness,
            underline_width: self.underline_width,
        }
    }
    fn splash_config(&self) -> SplashConfig {
        let palette = Palette { foreground: self.fg, ..Palette::default() };
        SplashConfig { palette, ..SplashConfig::default() }
    }
}

/// Plain stderr logger
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:5}] {}", record.level(), record.args());
        }
    }
    fn flush(&self) {}
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }.to_level_filter();
    let logger: &'static StderrLogger = Box::leak(Box::new(StderrLogger { level }));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.splash_config();
    let style = args.logo_style();

    let fonts = FreetypeOutlines::new(&style.font)
        .context("could not open font")?;
    let rendered = splashraster::render_logo(&config, &style, &fonts)
        .context("rendering failed")?;
    let pixels = &rendered.pixels;

    let total = splashraster::write_binary(&args.output, pixels)
        .with_context(|| format!("could not write {}", args.output.display()))?;
    println!("Splash image saved to {} ({}x{}, {} bytes, logo width {:.1}px)",
             args.output.display(), pixels.width, pixels.height, total, rendered.text_width);

    if let Some(path) = &args.preview {
        splashraster::write_preview(path, pixels)
            .with_context(|| format!("could not write {}", path.display()))?;
        println!("Preview saved to {}", path.display());
    }

    if let Some(path) = &args.rle_inc {
        let background = config.palette.background565();
        let cropped = splashraster::crop_vertical(pixels, background, splashraster::DEFAULT_CROP_MARGIN);
        let runs = splashraster::encode_rle(&cropped.data);
        splashraster::write_rle_include(path, cropped.width, cropped.height, &runs)
            .with_context(|| format!("could not write {}", path.display()))?;
        println!("Builtin logo RLE exported to {} ({}x{}, {} runs)",
                 path.display(), cropped.width, cropped.height, runs.len());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(e) = run(&args) {
        eprintln!("splashraster: {:#}", e);
        std::process::exit(1);
    }
}
