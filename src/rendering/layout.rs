//! Icon geometry: where the white bars go for a given edge length.
//!
//! All bar extents are inclusive on both ends, so a bar spanning `top..=bottom`
//! with nominal height `h` covers `h + 1` rows. Results may reach past the canvas
//! for tiny edges; the rasterizer clips them.

/// Edge length from which the three stacked "text" bars are drawn.
pub const STACKED_BARS_MIN_EDGE: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Build a rect from inclusive corner coordinates. Returns `None` when the
    /// extent is empty in either direction.
    pub fn from_corners(x0: i64, y0: i64, x1: i64, y1: i64) -> Option<Rect> {
        if x1 < x0 || y1 < y0 {
            return None;
        }
        Some(Rect {
            x: x0 as i32,
            y: y0 as i32,
            width: (x1 - x0 + 1) as u32,
            height: (y1 - y0 + 1) as u32,
        })
    }

    /// Exclusive right edge
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Whether the rect lies entirely within a square canvas of `edge` pixels.
    pub fn fits_within(&self, edge: u32) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= edge as i64 && self.bottom() <= edge as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarKind {
    /// Main subtitle line
    Primary,
    /// Shorter line under the primary one
    Secondary,
    /// One of the three bars in the upper half (edge >= 48 only)
    Stacked(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub kind: BarKind,
    pub rect: Rect,
}

/// Derived measurements plus the resulting bars for one edge length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLayout {
    pub edge: u32,
    pub line_height: u32,
    pub spacing: u32,
    pub margin: u32,
    pub bars: Vec<Bar>,
}

impl IconLayout {
    pub fn stacked_bars(&self) -> impl Iterator<Item = &Bar> {
        self.bars
            .iter()
            .filter(|b| matches!(b.kind, BarKind::Stacked(_)))
    }

    pub fn bar(&self, kind: BarKind) -> Option<&Bar> {
        self.bars.iter().find(|b| b.kind == kind)
    }
}

fn scaled(edge: u32, factor: f64) -> u32 {
    (edge as f64 * factor).round() as u32
}

/// Compute the bar layout for a square icon of `edge` pixels.
///
/// - subtitle lines sit in the lower third: primary at 65% height, secondary
///   directly below, inset by `edge / 10` per side
/// - from 48 px up, three centred bars start at 25% height
pub fn layout_icon(edge: u32) -> IconLayout {
    let e = edge as i64;
    let line_height = (edge / 12).max(2);
    let spacing = (edge / 16).max(2);
    let margin = scaled(edge, 0.15);

    let mut bars = Vec::with_capacity(5);

    let lh = line_height as i64;
    let m = margin as i64;
    let inset = e / 10;

    let y1 = scaled(edge, 0.65) as i64;
    if let Some(rect) = Rect::from_corners(m, y1, e - m, y1 + lh) {
        bars.push(Bar {
            kind: BarKind::Primary,
            rect,
        });
    }

    let y2 = y1 + lh + spacing as i64;
    let secondary_height = line_height.saturating_sub(2) as i64;
    if let Some(rect) = Rect::from_corners(m + inset, y2, e - m - inset, y2 + secondary_height) {
        bars.push(Bar {
            kind: BarKind::Secondary,
            rect,
        });
    }

    if edge >= STACKED_BARS_MIN_EDGE {
        let center_x = e / 2;
        let top_y = scaled(edge, 0.25) as i64;
        let half_width = scaled(edge, 0.5) as i64 / 2;
        let bar_height = (edge / 16).max(2) as i64;
        let bar_spacing = (edge / 12).max(3) as i64;

        for i in 0..3u8 {
            let y = top_y + (bar_height + bar_spacing) * i as i64;
            if let Some(rect) =
                Rect::from_corners(center_x - half_width, y, center_x + half_width, y + bar_height)
            {
                bars.push(Bar {
                    kind: BarKind::Stacked(i),
                    rect,
                });
            }
        }
    }

    IconLayout {
        edge,
        line_height,
        spacing,
        margin,
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn layout_16_has_only_subtitle_lines() {
        let l = layout_icon(16);
        assert_eq!(l.line_height, 2);
        assert_eq!(l.spacing, 2);
        assert_eq!(l.margin, 2);
        assert_eq!(
            l.bars,
            vec![
                Bar {
                    kind: BarKind::Primary,
                    rect: Rect { x: 2, y: 10, width: 13, height: 3 },
                },
                Bar {
                    kind: BarKind::Secondary,
                    rect: Rect { x: 3, y: 14, width: 11, height: 1 },
                },
            ]
        );
    }

    #[test]
    fn layout_48_stacked_bars() {
        let l = layout_icon(48);
        let stacked: Vec<Rect> = l.stacked_bars().map(|b| b.rect).collect();
        assert_eq!(
            stacked,
            vec![
                Rect { x: 12, y: 12, width: 25, height: 4 },
                Rect { x: 12, y: 19, width: 25, height: 4 },
                Rect { x: 12, y: 26, width: 25, height: 4 },
            ]
        );
    }

    #[test]
    fn layout_128_measurements() {
        let l = layout_icon(128);
        assert_eq!(l.line_height, 10);
        assert_eq!(l.spacing, 8);
        assert_eq!(l.margin, 19);
        let primary = l.bar(BarKind::Primary).unwrap();
        assert_eq!(primary.rect, Rect { x: 19, y: 83, width: 91, height: 11 });
        let secondary = l.bar(BarKind::Secondary).unwrap();
        assert_eq!(secondary.rect, Rect { x: 31, y: 101, width: 67, height: 9 });
    }

    #[test]
    fn stacked_threshold_is_48() {
        assert_eq!(layout_icon(47).stacked_bars().count(), 0);
        assert_eq!(layout_icon(48).stacked_bars().count(), 3);
    }

    #[test]
    fn standard_sizes_stay_inside_canvas() {
        for edge in [16, 48, 128] {
            let l = layout_icon(edge);
            for bar in &l.bars {
                assert!(bar.rect.fits_within(edge), "{:?} escapes {}px canvas", bar, edge);
            }
        }
    }

    #[test]
    fn tiny_edges_never_yield_empty_bars() {
        for edge in 1..STACKED_BARS_MIN_EDGE {
            let l = layout_icon(edge);
            assert!(l.bars.iter().all(|b| b.rect.width > 0 && b.rect.height > 0));
        }
        // 1px: the primary bar overhangs and relies on clipping
        assert!(!layout_icon(1).bar(BarKind::Primary).unwrap().rect.fits_within(1));
    }

    #[test]
    fn rect_from_corners_is_inclusive() {
        let r = Rect::from_corners(2, 3, 2, 3).unwrap();
        assert_eq!((r.width, r.height), (1, 1));
        assert_eq!((r.right(), r.bottom()), (3, 4));
        assert!(Rect::from_corners(5, 0, 4, 0).is_none());
    }
}
