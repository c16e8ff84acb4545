// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Terminal adapter. Every terminal cell shows two dots stacked vertically
//! with an upper half block: foreground is the upper dot, background the
//! lower one. A terminal of `cols x rows` cells is reported as a viewport of
//! `cols*pitch x rows*2*pitch` pixels, so the grid maps 1:1 onto cells.

use crate::{
    error::{Result, TickerError},
    render::{
        adapter::{Adapter, AdapterBase, HostEvent},
        buffer::DotBuffer,
        style::Rgb,
    },
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        DisableFocusChange, EnableFocusChange, Event as CEvent, KeyCode as CKeyCode,
        KeyEventKind, KeyModifiers,
    },
    execute, queue,
    style::{Color as CColor, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use log::{info, warn};
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::time::Duration;

const HALF_BLOCK: &str = "▀";

pub struct CrosstermAdapter {
    pub writer: Box<dyn Write>,
    pub base: AdapterBase,
    active: bool,
}

impl CrosstermAdapter {
    pub fn new(title: &str) -> Self {
        Self {
            writer: Box::new(io::stdout()),
            base: AdapterBase::new(title),
            active: false,
        }
    }

    /// Switches to the alternate screen, a failure is a setup failure.
    fn enter_screen(&mut self) -> Result<()> {
        execute!(
            self.writer,
            EnterAlternateScreen,
            EnableFocusChange,
            Hide,
            SetTitle(&self.base.title),
            Clear(ClearType::All)
        )
        .map_err(|e| TickerError::Setup(format!("enter alternate screen: {}", e)))
    }

    fn set_cells(&mut self, cols: u16, rows: u16) {
        let pitch = self.base.pitch.max(1);
        self.base.pixel_w = cols as u32 * pitch;
        self.base.pixel_h = rows as u32 * 2 * pitch;
    }

    fn cell_colors(buf: &DotBuffer, x: u32, ty: u32) -> (Rgb, Rgb) {
        let bg = buf.background;
        let upper = buf.get(x, ty * 2).map_or(bg, |d| d.color(bg));
        let lower = buf.get(x, ty * 2 + 1).map_or(bg, |d| d.color(bg));
        (upper, lower)
    }
}

impl Adapter for CrosstermAdapter {
    fn init(&mut self, pitch: u32) -> Result<()> {
        self.base.pitch = pitch.max(1);
        let (cols, rows) =
            terminal::size().map_err(|e| TickerError::Setup(format!("no terminal: {}", e)))?;
        if cols == 0 || rows == 0 {
            return Err(TickerError::Setup("terminal reports zero size".to_string()));
        }
        enable_raw_mode().map_err(|e| TickerError::Setup(e.to_string()))?;
        self.active = true;
        if let Err(e) = self.enter_screen() {
            self.reset();
            return Err(e);
        }
        self.set_cells(cols, rows);
        info!(
            "terminal {}x{} cells, viewport {}x{} px",
            cols, rows, self.base.pixel_w, self.base.pixel_h
        );
        Ok(())
    }

    fn get_base(&mut self) -> &mut AdapterBase {
        &mut self.base
    }

    fn reset(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(e) = execute!(
            self.writer,
            SetForegroundColor(CColor::Reset),
            SetBackgroundColor(CColor::Reset),
            DisableFocusChange,
            LeaveAlternateScreen,
            Show
        ) {
            warn!("restore terminal: {}", e);
        }
        if let Err(e) = disable_raw_mode() {
            warn!("disable raw mode: {}", e);
        }
    }

    fn poll_event(&mut self, timeout: Duration, es: &mut Vec<HostEvent>) -> bool {
        match crossterm::event::poll(timeout) {
            Ok(true) => {}
            Ok(false) => return false,
            Err(e) => {
                warn!("poll terminal events: {}", e);
                return false;
            }
        }
        let e = match crossterm::event::read() {
            Ok(e) => e,
            Err(e) => {
                warn!("read terminal event: {}", e);
                return false;
            }
        };
        match e {
            CEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                CKeyCode::Char('q') | CKeyCode::Esc => return true,
                CKeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return true
                }
                CKeyCode::Char(' ') => es.push(HostEvent::TogglePause),
                CKeyCode::Char('n') | CKeyCode::Right => es.push(HostEvent::NextPage),
                _ => {}
            },
            CEvent::Resize(cols, rows) => {
                self.set_cells(cols, rows);
                es.push(HostEvent::Resize(self.base.pixel_w, self.base.pixel_h));
            }
            CEvent::FocusGained => es.push(HostEvent::Visibility(true)),
            CEvent::FocusLost => es.push(HostEvent::Visibility(false)),
            _ => {}
        }
        false
    }

    fn draw(&mut self, current: &DotBuffer, previous: &DotBuffer) -> Result<()> {
        let updates = previous.diff(current);
        if updates.is_empty() {
            return Ok(());
        }
        // a changed dot repaints the whole cell it shares with its neighbour
        let cells: BTreeSet<(u32, u32)> = updates.iter().map(|(x, y, _)| (y / 2, *x)).collect();

        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;
        let mut last_pos: Option<(u32, u32)> = None;
        for (ty, x) in cells {
            let (upper, lower) = Self::cell_colors(current, x, ty);
            // Move the cursor if the previous location was not (x - 1, y)
            if !matches!(last_pos, Some(p) if x == p.0 + 1 && ty == p.1) {
                queue!(self.writer, MoveTo(x as u16, ty as u16))?;
            }
            last_pos = Some((x, ty));
            if fg != Some(upper) {
                queue!(self.writer, SetForegroundColor(CColor::from(upper)))?;
                fg = Some(upper);
            }
            if bg != Some(lower) {
                queue!(self.writer, SetBackgroundColor(CColor::from(lower)))?;
                bg = Some(lower);
            }
            queue!(self.writer, Print(HALF_BLOCK))?;
        }
        queue!(
            self.writer,
            SetForegroundColor(CColor::Reset),
            SetBackgroundColor(CColor::Reset)
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for CrosstermAdapter {
    fn drop(&mut self) {
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::buffer::Dot;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn screen_setup_failure_is_setup_error() {
        let mut a = CrosstermAdapter::new("test");
        a.writer = Box::new(ClosedPipe);
        assert!(matches!(a.enter_screen(), Err(TickerError::Setup(_))));
    }

    #[test]
    fn half_block_pairs_rows() {
        let mut buf = DotBuffer::empty(2, 3);
        buf.clear(Rgb::new(0, 0, 0));
        let g = Rgb::new(0, 255, 0);
        buf.set(1, 0, Dot::Lit(g));
        buf.set(1, 2, Dot::Dim(Rgb::new(0, 25, 0)));
        assert_eq!(
            CrosstermAdapter::cell_colors(&buf, 1, 0),
            (g, Rgb::new(0, 0, 0))
        );
        // odd height: the missing lower dot shows the background
        assert_eq!(
            CrosstermAdapter::cell_colors(&buf, 1, 1),
            (Rgb::new(0, 25, 0), Rgb::new(0, 0, 0))
        );
    }

    #[test]
    fn draw_writes_only_changed_cells() {
        let mut a = CrosstermAdapter::new("test");
        a.writer = Box::new(Vec::<u8>::new());
        let prev = DotBuffer::empty(4, 4);
        let cur = prev.clone();
        // nothing changed, nothing written
        assert!(a.draw(&cur, &prev).is_ok());
        let mut cur = prev.clone();
        cur.set(2, 3, Dot::Lit(Rgb::new(255, 0, 0)));
        assert!(a.draw(&cur, &prev).is_ok());
    }
}
