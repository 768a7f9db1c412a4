//! SubFlix placeholder icons
//!
//! Generates the three square PNG icons (16, 48 and 128 px) shipped with the
//! SubFlix browser extension: a brand-red background with white bars standing
//! in for subtitle lines.
//!
//! # Features
//!
//! - **raster** (default): PNG rasterizer backed by the `image` crate. Without
//!   it, [`detect`] reports the capability as unavailable and the driver only
//!   prints installation guidance.
//!
//! # Example
//!
//! ```no_run
//! use subflix_icons::{driver, IconSetConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconSetConfig::default();
//! let mut stdout = std::io::stdout();
//! let summary = driver::run(subflix_icons::detect(), &config, &mut stdout)?;
//! println!("{} icons", summary.rendered.len());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

pub mod error;
pub use error::{Error, Result};

pub mod driver;
pub mod rendering;

pub use rendering::RenderedIcon;

/// Largest accepted edge length in pixels
pub const MAX_EDGE: u32 = 1024;

/// Edge lengths shipped with the extension, in render order
pub const STANDARD_SIZES: [u32; 3] = [16, 48, 128];

/// Reject edge lengths outside `1..=MAX_EDGE`.
pub fn validate_edge(edge: u32) -> Result<()> {
    if edge == 0 || edge > MAX_EDGE {
        return Err(Error::InvalidEdge(edge));
    }
    Ok(())
}

/// One icon to render: its edge length and destination file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub edge_length: u32,
    pub output_path: PathBuf,
}

impl IconSpec {
    pub fn new(edge_length: u32, output_path: impl Into<PathBuf>) -> Self {
        Self {
            edge_length,
            output_path: output_path.into(),
        }
    }

    /// `icon{edge}.png` inside `dir`
    pub fn in_dir(dir: &Path, edge_length: u32) -> Self {
        Self::new(edge_length, dir.join(format!("icon{}.png", edge_length)))
    }
}

/// Configuration for a full icon-set run
///
/// Defaults write the standard sizes to `assets/icons/` under the crate root.
///
/// ```
/// let cfg = subflix_icons::IconSetConfig::default();
/// assert_eq!(cfg.sizes, vec![16, 48, 128]);
/// assert!(cfg.out_dir.ends_with("assets/icons"));
/// ```
#[derive(Debug, Clone)]
pub struct IconSetConfig {
    /// Directory receiving the icons
    pub out_dir: PathBuf,
    /// Edge lengths, rendered in this order
    pub sizes: Vec<u32>,
}

impl Default for IconSetConfig {
    fn default() -> Self {
        Self {
            out_dir: default_icons_dir(),
            sizes: STANDARD_SIZES.to_vec(),
        }
    }
}

impl IconSetConfig {
    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Default::default()
        }
    }

    pub fn specs(&self) -> Vec<IconSpec> {
        self.sizes
            .iter()
            .map(|&edge| IconSpec::in_dir(&self.out_dir, edge))
            .collect()
    }
}

/// `assets/icons` next to the crate manifest
pub fn default_icons_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join("icons")
}

/// Core trait for icon backends
pub trait Renderer {
    /// Render `spec` and write it to `spec.output_path`, creating parent
    /// directories as needed.
    fn render(&self, spec: &IconSpec) -> Result<RenderedIcon>;
}

/// Remediation steps printed when no drawing backend is available
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions {
    pub missing: String,
    pub install_command: String,
    pub shell_script: String,
    pub manual_guide: String,
}

impl Default for Instructions {
    fn default() -> Self {
        Self {
            missing: "PNG rendering support (the `raster` feature) is not compiled in.".to_string(),
            install_command: "cargo install --path . --features raster".to_string(),
            shell_script: "./create-placeholder-icons.sh".to_string(),
            manual_guide: "assets/icons/README-ICONS.md".to_string(),
        }
    }
}

impl fmt::Display for Instructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "⚠ {}", self.missing)?;
        writeln!(f, "\nPlease install it with:")?;
        writeln!(f, "  {}", self.install_command)?;
        writeln!(f, "\nOr use the shell script instead:")?;
        writeln!(f, "  {}", self.shell_script)?;
        writeln!(f, "\nOr create icons manually (see {})", self.manual_guide)
    }
}

/// Result of the one-time startup check for a drawing backend.
pub enum Capability {
    Ready(Box<dyn Renderer>),
    Unavailable(Instructions),
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Ready(_) => f.write_str("Capability::Ready"),
            Capability::Unavailable(i) => f.debug_tuple("Capability::Unavailable").field(i).finish(),
        }
    }
}

/// Detect the drawing backend compiled into this build.
#[cfg(feature = "raster")]
pub fn detect() -> Capability {
    Capability::Ready(Box::new(rendering::PngRenderer::new()))
}

// Without the rasterizer every run degrades to printing guidance.
#[cfg(not(feature = "raster"))]
pub fn detect() -> Capability {
    log::info!("built without the `raster` feature; icons cannot be drawn");
    Capability::Unavailable(Instructions::default())
}
