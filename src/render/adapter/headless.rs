// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Headless adapter: draws into memory. Used for offscreen rendering and
//! tests, it can replay scripted host events and simulate a missing surface.

use crate::{
    error::{Result, TickerError},
    render::{
        adapter::{Adapter, AdapterBase, HostEvent},
        buffer::DotBuffer,
    },
};
use std::{cell::Cell, collections::VecDeque, rc::Rc, time::Duration};

pub struct HeadlessAdapter {
    pub base: AdapterBase,
    /// last frame drawn
    pub frame: DotBuffer,
    pub frames_drawn: usize,
    /// dots repainted by the last draw
    pub last_diff: usize,
    /// shared so it can be read after the adapter is dropped
    pub resets: Rc<Cell<usize>>,
    /// scripted events, one batch per poll
    pub script: VecDeque<Vec<HostEvent>>,
    /// init fails with this reason when set
    pub fail_init: Option<String>,
    /// poll requests exit after this many polls
    pub quit_after: Option<usize>,
    polls: usize,
}

impl HeadlessAdapter {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        let mut base = AdapterBase::new("headless");
        base.pixel_w = width_px;
        base.pixel_h = height_px;
        Self {
            base,
            frame: DotBuffer::default(),
            frames_drawn: 0,
            last_diff: 0,
            resets: Rc::new(Cell::new(0)),
            script: VecDeque::new(),
            fail_init: None,
            quit_after: None,
            polls: 0,
        }
    }

    /// Adapter whose surface is unavailable.
    pub fn unavailable(reason: &str) -> Self {
        let mut a = Self::new(0, 0);
        a.fail_init = Some(reason.to_string());
        a
    }

    pub fn reset_count(&self) -> usize {
        self.resets.get()
    }

    pub fn push_events(&mut self, events: Vec<HostEvent>) {
        self.script.push_back(events);
    }
}

impl Adapter for HeadlessAdapter {
    fn init(&mut self, pitch: u32) -> Result<()> {
        if let Some(reason) = &self.fail_init {
            return Err(TickerError::Setup(reason.clone()));
        }
        self.base.pitch = pitch.max(1);
        Ok(())
    }

    fn reset(&mut self) {
        self.resets.set(self.resets.get() + 1);
    }

    fn get_base(&mut self) -> &mut AdapterBase {
        &mut self.base
    }

    fn poll_event(&mut self, _timeout: Duration, ev: &mut Vec<HostEvent>) -> bool {
        self.polls += 1;
        if let Some(batch) = self.script.pop_front() {
            for e in batch {
                if let HostEvent::Resize(w, h) = e {
                    self.base.pixel_w = w;
                    self.base.pixel_h = h;
                }
                ev.push(e);
            }
        }
        matches!(self.quit_after, Some(n) if self.polls >= n)
    }

    fn draw(&mut self, current: &DotBuffer, previous: &DotBuffer) -> Result<()> {
        self.last_diff = previous.diff(current).len();
        self.frame.clone_from(current);
        self.frames_drawn += 1;
        Ok(())
    }
}
