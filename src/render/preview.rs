// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Static preview of a single row: no clock, no pagination, the scroll
//! phase is given by the caller. Used by settings screens and the
//! `--preview` option of the tool.

use crate::{
    config::{DisplayConfig, RowConfig},
    font::GLYPH_HEIGHT,
    render::{
        buffer::{Dot, DotBuffer},
        content::prepare,
        resolver::{is_active, Placement},
    },
};

/// Renders `row` into a `cols x 7` buffer at scroll `offset`.
pub fn render_preview(row: &RowConfig, display: &DisplayConfig, cols: u32, offset: u32) -> DotBuffer {
    let primary = display.primary();
    let background = display.background();
    let pc = prepare(&row.content, row.resolved_color(primary), &row.spacing);

    let mut buf = DotBuffer::empty(cols, GLYPH_HEIGHT as u32);
    buf.clear(background);
    buf.fill(Dot::Dim(primary.dim_on(background)));

    let offset = if pc.total_width == 0 {
        0
    } else {
        offset % pc.total_width
    };
    let placement = Placement::for_row(row, offset, cols);
    for r in 0..GLYPH_HEIGHT {
        for col in 0..cols {
            if let Some(ci) = is_active(col, r, &pc, placement) {
                buf.set(col as i64, r as i64, Dot::Lit(pc.char_colors[ci]));
            }
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Alignment;

    #[test]
    fn static_right_keeps_margin() {
        let row = RowConfig::new("I").fixed(Alignment::Right);
        let buf = render_preview(&row, &DisplayConfig::default(), 10, 0);
        // 10 - 5 - 2 = 3: glyph spans columns 3..8, bar at 5
        assert_eq!(buf.to_ascii()[3], ".....#....");
    }

    #[test]
    fn offset_scrolls_and_wraps() {
        let row = RowConfig::new("I");
        let d = DisplayConfig::default();
        let a = render_preview(&row, &d, 12, 2);
        // I: width 5, total 17
        let b = render_preview(&row, &d, 12, 2 + 17);
        assert_eq!(a, b);
        assert_eq!(a.to_ascii()[3], "#...........");
    }

    #[test]
    fn empty_row_is_all_dim() {
        let buf = render_preview(&RowConfig::new(""), &DisplayConfig::default(), 6, 3);
        assert_eq!(buf.lit_count(), 0);
        assert_eq!(buf.to_ascii()[0], "......");
    }
}
