// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Content preparation flattens a row's text into per-char arrays
//! (char, color, start column, glyph) and measures it.
//!
//! Layout walk, `currentPos` starts at 0:
//! - space: advances by `betweenWords`, draws nothing
//! - glyph: advances by 5, plus `betweenLetters` when the next char exists
//!   and is not a space (no letter gap in front of a word gap)
//!
//! `content_width` is the final position, `total_width` adds the repeat gap
//! and is only used as the wrap modulus of scrolling rows.

use crate::{
    config::{Content, SpacingConfig},
    font::{get_pattern, Glyph, GLYPH_WIDTH},
    render::style::{color_or, Rgb},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreparedContent {
    pub chars: Vec<char>,
    pub char_colors: Vec<Rgb>,
    /// start column of each char, non-decreasing
    pub char_positions: Vec<u32>,
    pub patterns: Vec<Glyph>,
    pub content_width: u32,
    pub total_width: u32,
    pub spacing: SpacingConfig,
}

impl PreparedContent {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Column span of char i: word gap for a space, glyph width otherwise.
    pub fn char_width(&self, i: usize) -> u32 {
        if self.chars[i] == ' ' {
            self.spacing.between_words
        } else {
            GLYPH_WIDTH as u32
        }
    }
}

/// Flattens content into (char, color) pairs, a plain string takes the
/// default color, every segment char carries its segment color.
fn flatten(content: &Content, default_color: Rgb) -> Vec<(char, Rgb)> {
    match content {
        Content::Plain(s) => s.chars().map(|c| (c, default_color)).collect(),
        Content::Segments(segs) => segs
            .iter()
            .flat_map(|seg| {
                let color = color_or(Some(&seg.color), default_color);
                seg.text.chars().map(move |c| (c, color))
            })
            .collect(),
    }
}

pub fn prepare(content: &Content, default_color: Rgb, spacing: &SpacingConfig) -> PreparedContent {
    let flat = flatten(content, default_color);
    let n = flat.len();
    let mut pc = PreparedContent {
        chars: Vec::with_capacity(n),
        char_colors: Vec::with_capacity(n),
        char_positions: Vec::with_capacity(n),
        patterns: Vec::with_capacity(n),
        content_width: 0,
        total_width: 0,
        spacing: *spacing,
    };

    let mut current_pos: u32 = 0;
    for (i, &(ch, color)) in flat.iter().enumerate() {
        pc.chars.push(ch);
        pc.char_colors.push(color);
        pc.char_positions.push(current_pos);
        if ch == ' ' {
            pc.patterns.push(Glyph::BLANK);
            current_pos = current_pos.saturating_add(spacing.between_words);
        } else {
            pc.patterns.push(get_pattern(ch));
            current_pos = current_pos.saturating_add(GLYPH_WIDTH as u32);
            if let Some(&(next, _)) = flat.get(i + 1) {
                if next != ' ' {
                    current_pos = current_pos.saturating_add(spacing.between_letters);
                }
            }
        }
    }

    pc.content_width = current_pos;
    pc.total_width = current_pos.saturating_add(spacing.before_repeat);
    pc
}
