//! Rasterizer: replays paint commands onto an RGBA canvas and encodes PNG

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use log::debug;
use sha2::{Digest, Sha256};

use crate::rendering::layout::layout_icon;
use crate::rendering::paint::{paint_icon, PaintCommand};
use crate::{Error, Result};

/// In-memory pixel grid for a single icon. Dropped once serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    pub fn new(edge: u32) -> Self {
        Self {
            pixels: RgbaImage::new(edge, edge),
        }
    }

    pub fn edge(&self) -> u32 {
        self.pixels.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let Rgba([r, g, b, a]) = *self.pixels.get_pixel(x, y);
        (r, g, b, a)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn apply(&mut self, cmd: &PaintCommand) {
        match *cmd {
            PaintCommand::Fill { rgba } => {
                let color = to_rgba(rgba);
                for px in self.pixels.pixels_mut() {
                    *px = color;
                }
            }
            PaintCommand::SolidRect {
                x,
                y,
                width,
                height,
                rgba,
            } => {
                let edge = self.edge() as i64;
                // clip to canvas
                let x0 = (x as i64).clamp(0, edge);
                let y0 = (y as i64).clamp(0, edge);
                let x1 = (x as i64 + width as i64).clamp(0, edge);
                let y1 = (y as i64 + height as i64).clamp(0, edge);
                let color = to_rgba(rgba);
                for py in y0..y1 {
                    for px in x0..x1 {
                        self.pixels.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }

    /// Hex SHA-256 of the raw RGBA bytes
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.pixels.as_raw()))
    }

    /// Encode as PNG. `path` only labels errors.
    pub fn to_png(&self, path: &Path) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.pixels
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|source| Error::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(buf.into_inner())
    }
}

fn to_rgba((r, g, b, a): (u8, u8, u8, u8)) -> Rgba<u8> {
    Rgba([r, g, b, a])
}

/// Render the icon for `edge` into a fresh canvas. No file I/O.
pub fn rasterize(edge: u32) -> Result<Canvas> {
    crate::validate_edge(edge)?;
    let layout = layout_icon(edge);
    debug!(
        "layout {}px: line_height={} spacing={} margin={} bars={}",
        edge,
        layout.line_height,
        layout.spacing,
        layout.margin,
        layout.bars.len()
    );

    for bar in layout.bars.iter().filter(|b| !b.rect.fits_within(edge)) {
        debug!("clipping {:?} to {}px canvas", bar.kind, edge);
    }

    let mut canvas = Canvas::new(edge);
    for cmd in paint_icon(&layout) {
        canvas.apply(&cmd);
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::paint::{BRAND_RED, WHITE};

    #[test]
    fn rasterize_fills_brand_red() {
        let c = rasterize(16).unwrap();
        assert_eq!(c.edge(), 16);
        assert_eq!(c.pixel(0, 0), BRAND_RED);
        assert_eq!(c.pixel(15, 15), BRAND_RED);
    }

    #[test]
    fn rasterize_draws_inclusive_bars() {
        let c = rasterize(16).unwrap();
        // primary covers x 2..=14, y 10..=12
        assert_eq!(c.pixel(2, 10), WHITE);
        assert_eq!(c.pixel(14, 12), WHITE);
        assert_eq!(c.pixel(1, 10), BRAND_RED);
        assert_eq!(c.pixel(15, 10), BRAND_RED);
        assert_eq!(c.pixel(8, 13), BRAND_RED);
        // secondary is a single row at y = 14
        assert_eq!(c.pixel(3, 14), WHITE);
        assert_eq!(c.pixel(2, 14), BRAND_RED);
        assert_eq!(c.pixel(8, 15), BRAND_RED);
    }

    #[test]
    fn every_pixel_is_opaque() {
        let c = rasterize(48).unwrap();
        assert!(c.image().pixels().all(|p| p.0[3] == 0xFF));
    }

    #[test]
    fn solid_rect_is_clipped() {
        let mut c = Canvas::new(4);
        c.apply(&PaintCommand::SolidRect {
            x: -2,
            y: 2,
            width: 10,
            height: 10,
            rgba: WHITE,
        });
        assert_eq!(c.pixel(0, 2), WHITE);
        assert_eq!(c.pixel(3, 3), WHITE);
        assert_eq!(c.pixel(0, 1), (0, 0, 0, 0));
    }

    #[test]
    fn one_pixel_icon_renders() {
        let c = rasterize(1).unwrap();
        assert_eq!(c.edge(), 1);
    }

    #[test]
    fn digest_is_stable() {
        let a = rasterize(128).unwrap();
        let b = rasterize(128).unwrap();
        assert_eq!(a.digest(), b.digest());
        assert_ne!(a.digest(), rasterize(48).unwrap().digest());
    }

    #[test]
    fn rejects_zero_edge() {
        assert!(matches!(rasterize(0), Err(Error::InvalidEdge(0))));
    }
}
