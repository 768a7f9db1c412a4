//! Icon rendering: layout, paint list and (with `raster`) the PNG backend

pub mod layout;
pub mod paint;
#[cfg(feature = "raster")]
pub mod raster;

use std::path::PathBuf;

/// Outcome of rendering one icon to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedIcon {
    pub path: PathBuf,
    pub edge: u32,
    /// Hex SHA-256 of the pixel data
    pub digest: String,
}

#[cfg(feature = "raster")]
pub use backend::PngRenderer;

#[cfg(feature = "raster")]
mod backend {
    use std::fs;

    use log::{debug, info};

    use super::raster::rasterize;
    use super::RenderedIcon;
    use crate::{Error, IconSpec, Renderer, Result};

    /// Renderer backed by the `image` crate's PNG encoder.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct PngRenderer;

    impl PngRenderer {
        pub fn new() -> Self {
            PngRenderer
        }
    }

    impl Renderer for PngRenderer {
        fn render(&self, spec: &IconSpec) -> Result<RenderedIcon> {
            let canvas = rasterize(spec.edge_length)?;
            let digest = canvas.digest();
            debug!("{}px pixel digest {}", spec.edge_length, digest);

            if let Some(dir) = spec.output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
            }
            let png = canvas.to_png(&spec.output_path)?;
            fs::write(&spec.output_path, &png).map_err(|e| Error::io(&spec.output_path, e))?;
            info!("wrote {} ({} bytes)", spec.output_path.display(), png.len());

            Ok(RenderedIcon {
                path: spec.output_path.clone(),
                edge: spec.edge_length,
                digest,
            })
        }
    }

}
