//! Paint command list for an icon: background fill followed by bars

use crate::rendering::layout::IconLayout;

/// Brand red `#E50914`, fully opaque
pub const BRAND_RED: (u8, u8, u8, u8) = (0xE5, 0x09, 0x14, 0xFF);
pub const WHITE: (u8, u8, u8, u8) = (0xFF, 0xFF, 0xFF, 0xFF);

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Fill the whole canvas
    Fill { rgba: (u8, u8, u8, u8) },
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: (u8, u8, u8, u8),
    },
}

/// Translate a layout into the commands the rasterizer replays in order.
pub fn paint_icon(layout: &IconLayout) -> Vec<PaintCommand> {
    let mut cmds = Vec::with_capacity(layout.bars.len() + 1);
    cmds.push(PaintCommand::Fill { rgba: BRAND_RED });
    cmds.extend(layout.bars.iter().map(|bar| PaintCommand::SolidRect {
        x: bar.rect.x,
        y: bar.rect.y,
        width: bar.rect.width,
        height: bar.rect.height,
        rgba: WHITE,
    }));
    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::layout::layout_icon;

    #[test]
    fn background_comes_first() {
        let cmds = paint_icon(&layout_icon(128));
        assert_eq!(cmds[0], PaintCommand::Fill { rgba: BRAND_RED });
        assert_eq!(cmds.len(), 6);
        for cmd in &cmds[1..] {
            match cmd {
                PaintCommand::SolidRect { rgba, .. } => assert_eq!(*rgba, WHITE),
                _ => panic!("unexpected {:?}", cmd),
            }
        }
    }

    #[test]
    fn small_icon_has_two_bars() {
        assert_eq!(paint_icon(&layout_icon(16)).len(), 3);
    }
}
