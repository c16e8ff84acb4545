// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Pixel resolver: decides whether grid cell (col, glyph row) of a prepared
//! row is lit, and which char owns it.
//!
//! Scrolling rows map `col + offset` onto the content modulo `total_width`,
//! so the repeat gap wraps around forever. Static rows are shifted by an
//! alignment offset and anything outside `[0, content_width)` stays dark.

use crate::{
    config::{Alignment, RowConfig},
    font::GLYPH_HEIGHT,
    render::content::PreparedContent,
};

/// Fixed right margin of right-aligned static rows, in columns.
/// Matches the legacy visual output, not derived from anything.
pub const RIGHT_ALIGN_MARGIN: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Scroll { offset: u32 },
    Static { alignment: Alignment, visible_cols: u32 },
}

impl Placement {
    pub fn for_row(row: &RowConfig, offset: u32, visible_cols: u32) -> Self {
        if row.scrolling {
            Placement::Scroll { offset }
        } else {
            Placement::Static {
                alignment: row.alignment,
                visible_cols,
            }
        }
    }
}

/// Column where a static row starts, may be negative when content
/// is wider than the viewport.
pub fn align_offset(alignment: Alignment, visible_cols: u32, content_width: u32) -> i64 {
    let free = visible_cols as i64 - content_width as i64;
    match alignment {
        Alignment::Left => 0,
        Alignment::Center => free.div_euclid(2),
        Alignment::Right => free - RIGHT_ALIGN_MARGIN,
    }
}

/// Maps a grid column to a content column, None when the static row
/// does not cover it.
pub fn content_column(col: u32, pc: &PreparedContent, placement: Placement) -> Option<u32> {
    match placement {
        Placement::Scroll { offset } => {
            if pc.total_width == 0 {
                return None;
            }
            Some(((col as u64 + offset as u64) % pc.total_width as u64) as u32)
        }
        Placement::Static {
            alignment,
            visible_cols,
        } => {
            let idx = col as i64 - align_offset(alignment, visible_cols, pc.content_width);
            if idx < 0 || idx >= pc.content_width as i64 {
                None
            } else {
                Some(idx as u32)
            }
        }
    }
}

/// Returns the owning char index (also the color index) when lit.
///
/// `row` must be a glyph row in `[0, 7)`.
pub fn is_active(col: u32, row: usize, pc: &PreparedContent, placement: Placement) -> Option<usize> {
    debug_assert!(row < GLYPH_HEIGHT);
    if pc.is_empty() {
        return None;
    }
    let cidx = content_column(col, pc, placement)?;

    // positions are non-decreasing: the candidate is the last char
    // starting at or before cidx, intervals never overlap
    let i = pc.char_positions.partition_point(|&p| p <= cidx).checked_sub(1)?;
    if pc.chars[i] == ' ' {
        return None;
    }
    let start = pc.char_positions[i];
    if cidx >= start.saturating_add(pc.char_width(i)) {
        // letter gap
        return None;
    }
    if pc.patterns[i].bit(row, (cidx - start) as usize) {
        Some(i)
    } else {
        None
    }
}
