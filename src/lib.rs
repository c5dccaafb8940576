//! pwaicons
//!
//! Generates the placeholder PNG icon set (`icon-192.png`, `icon-512.png`)
//! for a progressive web app.
//!
//! # Strategies
//!
//! - **Manual** (always available): a solid-color truecolor PNG assembled
//!   byte-for-byte (raster buffer, IHDR/IDAT/IEND chunks, zlib, CRC-32)
//! - **Drawn** (`drawn` feature, default): a filled canvas with a centered
//!   label, serialized by the `image` crate
//!
//! # Example
//!
//! ```no_run
//! use pwaicons::{IconConfig, Strategy};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconConfig {
//!     sizes: vec![192],
//!     ..Default::default()
//! };
//!
//! let generator = pwaicons::new_generator(Strategy::Manual, config)?;
//! for icon in generator.generate_all()? {
//!     println!("Created {} ({}x{})", icon.path.display(), icon.width, icon.height);
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub mod error;
pub use error::{Error, Result};

pub mod rendering;
pub use rendering::RenderedIcon;

// Solid-color encoder built on the chunk writer
pub mod manual;

// Canvas + font backend
#[cfg(feature = "drawn")]
pub mod drawn;

/// Default TrueType font tried by the drawn backend
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Dark slate blue used as the icon background (`#2c3e50`)
    pub const SLATE: Rgb = Rgb::new(0x2c, 0x3e, 0x50);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses `#rrggbb`, `#rgb`, `white` or `black` (case-insensitive).
impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "white" => return Ok(Rgb::WHITE),
            "black" => return Ok(Rgb::BLACK),
            _ => {}
        }

        let bad = || Error::Config(format!("invalid color '{}' (expected #rrggbb or #rgb)", s));
        let hex = s.strip_prefix('#').ok_or_else(bad)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }

        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
                Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| bad())
                };
                Ok(Rgb::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(bad()),
        }
    }
}

/// Configuration shared by both generation strategies
///
/// The defaults reproduce the stock icon set: 192 and 512 pixel icons on a
/// `#2c3e50` background written to the current directory, with a white 🍳
/// label (falling back to `W`) for the drawn backend.
///
/// # Examples
///
/// ```
/// let cfg = pwaicons::IconConfig::default();
/// assert_eq!(cfg.sizes, vec![192, 512]);
/// assert_eq!(cfg.background.to_string(), "#2c3e50");
/// ```
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Directory the icon files are written to
    pub out_dir: PathBuf,
    /// Edge lengths of the square icons to produce
    pub sizes: Vec<u32>,
    /// Background fill
    pub background: Rgb,
    /// Label color (drawn backend only)
    pub fill: Rgb,
    /// Preferred label text (drawn backend only)
    pub label: String,
    /// Label used when the preferred one cannot be measured with the font
    pub fallback_label: String,
    /// TrueType font to try first; `None` goes straight to the built-in font
    pub font_path: Option<PathBuf>,
    /// Label height as a fraction of the icon size
    pub font_scale: f32,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            sizes: vec![192, 512],
            background: Rgb::SLATE,
            fill: Rgb::WHITE,
            label: "\u{1F373}".to_string(),
            fallback_label: "W".to_string(),
            font_path: Some(PathBuf::from(DEFAULT_FONT_PATH)),
            font_scale: 0.6,
        }
    }
}

impl IconConfig {
    /// Reject configurations that cannot produce a valid icon set.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::Config("no icon sizes requested".into()));
        }
        if let Some(zero) = self.sizes.iter().find(|s| **s == 0) {
            return Err(Error::Config(format!("icon size must be positive, got {}", zero)));
        }
        if !(self.font_scale > 0.0 && self.font_scale <= 1.0) {
            return Err(Error::Config(format!(
                "font_scale must be in (0, 1], got {}",
                self.font_scale
            )));
        }
        Ok(())
    }

    /// The icon files this configuration describes, in order.
    pub fn icon_specs(&self) -> Vec<IconSpec> {
        self.sizes.iter().map(|s| IconSpec::new(*s)).collect()
    }

    /// Where `spec` lands on disk.
    pub fn output_path(&self, spec: &IconSpec) -> PathBuf {
        if self.out_dir == Path::new(".") {
            PathBuf::from(&spec.file_name)
        } else {
            self.out_dir.join(&spec.file_name)
        }
    }
}

/// One square icon to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub file_name: String,
}

impl IconSpec {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            file_name: format!("icon-{}.png", size),
        }
    }
}

/// A file written by [`Generator::write_icon`]
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes_written: usize,
}

/// Which generation strategy to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Hand-assembled solid-color PNG
    Manual,
    /// Canvas with a centered label, serialized by the imaging library
    #[cfg(feature = "drawn")]
    Drawn,
}

impl Default for Strategy {
    #[cfg(feature = "drawn")]
    fn default() -> Self {
        Strategy::Drawn
    }

    #[cfg(not(feature = "drawn"))]
    fn default() -> Self {
        Strategy::Manual
    }
}

/// Core trait for icon generation backends
pub trait Generator {
    /// Create a generator with the given configuration
    fn new(config: IconConfig) -> Result<Self>
    where
        Self: Sized;

    /// Short backend name used in logs
    fn name(&self) -> &'static str;

    /// Configuration this generator was built with
    fn config(&self) -> &IconConfig;

    /// Render a `size` x `size` icon to PNG bytes without touching the disk
    fn render(&self, size: u32) -> Result<RenderedIcon>;

    /// Render one icon and write it to its output path
    fn write_icon(&self, spec: &IconSpec) -> Result<GeneratedIcon> {
        let icon = self.render(spec.size)?;
        let path = self.config().output_path(spec);
        write_png(&path, &icon.png_data)?;
        log::info!(
            "{}: wrote {} ({} bytes)",
            self.name(),
            path.display(),
            icon.png_data.len()
        );
        Ok(GeneratedIcon {
            path,
            width: icon.width,
            height: icon.height,
            bytes_written: icon.png_data.len(),
        })
    }

    /// Render and write every icon in the configuration, stopping at the first failure
    fn generate_all(&self) -> Result<Vec<GeneratedIcon>> {
        let specs = self.config().icon_specs();
        let mut out = Vec::with_capacity(specs.len());
        for spec in &specs {
            out.push(self.write_icon(spec)?);
        }
        Ok(out)
    }
}

/// Write PNG bytes to `path`, creating the parent directory when needed.
///
/// The file handle is scoped to this call and released on every path.
pub fn write_png(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}

/// Create a generator for the requested strategy
pub fn new_generator(strategy: Strategy, config: IconConfig) -> Result<Box<dyn Generator>> {
    match strategy {
        Strategy::Manual => Ok(Box::new(manual::ManualGenerator::new(config)?)),
        #[cfg(feature = "drawn")]
        Strategy::Drawn => Ok(Box::new(drawn::DrawnGenerator::new(config)?)),
    }
}
