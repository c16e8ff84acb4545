// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! DotBuffer is the activation matrix of one frame: a `width * height`
//! vector of dots, row major. The frame renderer writes it, adapters read
//! it and only repaint what changed since the previous frame (see `diff`).
//!
//! A dot is either off (surface background shows), dim (the unlit grid
//! tint) or lit in the color of the char that owns it.
//!
//! ```text
//! to_ascii():  '#' lit   '.' dim   ' ' off
//! ```

use crate::render::style::{Rgb, DEFAULT_BACKGROUND};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dot {
    #[default]
    Off,
    Dim(Rgb),
    Lit(Rgb),
}

impl Dot {
    pub fn is_lit(&self) -> bool {
        matches!(self, Dot::Lit(_))
    }

    /// Color to paint, background when off.
    pub fn color(&self, background: Rgb) -> Rgb {
        match self {
            Dot::Off => background,
            Dot::Dim(c) | Dot::Lit(c) => *c,
        }
    }

    pub fn ascii(&self) -> char {
        match self {
            Dot::Off => ' ',
            Dot::Dim(_) => '.',
            Dot::Lit(_) => '#',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotBuffer {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub content: Vec<Dot>,
}

impl Default for DotBuffer {
    fn default() -> Self {
        Self::empty(0, 0)
    }
}

/// dot count of a grid, computed in usize so large grids don't wrap
fn area(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl DotBuffer {
    pub fn empty(width: u32, height: u32) -> DotBuffer {
        DotBuffer {
            width,
            height,
            background: DEFAULT_BACKGROUND,
            content: vec![Dot::Off; area(width, height)],
        }
    }

    pub fn content(&self) -> &[Dot] {
        &self.content
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let length = area(width, height);
        if self.content.len() > length {
            self.content.truncate(length);
        } else {
            self.content.resize(length, Dot::Off);
        }
        self.width = width;
        self.height = height;
    }

    /// Turns every dot off and sets the surface background.
    pub fn clear(&mut self, background: Rgb) {
        self.background = background;
        self.fill(Dot::Off);
    }

    pub fn fill(&mut self, dot: Dot) {
        for d in &mut self.content {
            *d = dot;
        }
    }

    pub fn index_of(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "Trying to access position outside the buffer: x={}, y={}, size={}x{}",
            x,
            y,
            self.width,
            self.height
        );
        (y * self.width + x) as usize
    }

    pub fn pos_of(&self, i: usize) -> (u32, u32) {
        debug_assert!(
            i < self.content.len(),
            "Trying to get the coords of a dot outside the buffer: i={} len={}",
            i,
            self.content.len()
        );
        (i as u32 % self.width, i as u32 / self.width)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&Dot> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.content.get(self.index_of(x, y))
    }

    /// Sets a dot, out of range writes are clipped.
    pub fn set(&mut self, x: i64, y: i64, dot: Dot) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        let i = self.index_of(x as u32, y as u32);
        self.content[i] = dot;
        true
    }

    pub fn lit_count(&self) -> usize {
        self.content.iter().filter(|d| d.is_lit()).count()
    }

    /// Dots of `other` that differ from self. A size change repaints all.
    pub fn diff<'a>(&self, other: &'a DotBuffer) -> Vec<(u32, u32, &'a Dot)> {
        let full = self.width != other.width
            || self.height != other.height
            || self.background != other.background;
        other
            .content
            .iter()
            .enumerate()
            .filter(|(i, d)| full || self.content.get(*i) != Some(*d))
            .map(|(i, d)| {
                let (x, y) = other.pos_of(i);
                (x, y, d)
            })
            .collect()
    }

    pub fn to_ascii(&self) -> Vec<String> {
        self.content
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(Dot::ascii).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_translates_to_and_from_coordinates() {
        let buf = DotBuffer::empty(50, 80);

        // First dot is at the upper left corner.
        assert_eq!(buf.pos_of(0), (0, 0));
        assert_eq!(buf.index_of(0, 0), 0);

        // Last dot is in the lower right.
        assert_eq!(buf.pos_of(buf.content.len() - 1), (49, 79));
        assert_eq!(buf.index_of(49, 79), buf.content.len() - 1);
    }

    #[test]
    fn set_clips_outside() {
        let mut buf = DotBuffer::empty(4, 3);
        let lit = Dot::Lit(Rgb::new(0, 255, 0));
        assert!(buf.set(3, 2, lit));
        assert!(!buf.set(-1, 0, lit));
        assert!(!buf.set(0, 3, lit));
        assert!(!buf.set(4, 0, lit));
        assert_eq!(buf.lit_count(), 1);
        assert_eq!(buf.get(3, 2), Some(&lit));
        assert_eq!(buf.get(4, 2), None);
    }

    #[test]
    fn diff_reports_changes_only() {
        let prev = DotBuffer::empty(3, 2);
        let mut cur = prev.clone();
        cur.set(1, 1, Dot::Lit(Rgb::new(1, 2, 3)));
        let d = prev.diff(&cur);
        assert_eq!(d.len(), 1);
        assert_eq!((d[0].0, d[0].1), (1, 1));

        let mut bigger = DotBuffer::empty(4, 2);
        bigger.fill(Dot::Off);
        assert_eq!(prev.diff(&bigger).len(), 8);
    }

    #[test]
    fn ascii_dump() {
        let mut buf = DotBuffer::empty(3, 2);
        buf.fill(Dot::Dim(Rgb::new(0, 20, 0)));
        buf.set(0, 0, Dot::Lit(Rgb::new(0, 255, 0)));
        buf.set(2, 1, Dot::Off);
        assert_eq!(buf.to_ascii(), vec!["#..".to_string(), ".. ".to_string()]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn area_does_not_wrap() {
        assert_eq!(area(70_000, 70_000), 4_900_000_000);
        assert_eq!(area(u32::MAX, 2), u32::MAX as usize * 2);
    }

    #[test]
    fn resize_keeps_length_in_sync() {
        let mut buf = DotBuffer::empty(2, 2);
        buf.resize(5, 3);
        assert_eq!(buf.content.len(), 15);
        buf.resize(1, 1);
        assert_eq!(buf.content.len(), 1);
    }
}
