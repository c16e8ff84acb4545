// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Render Adapter Module
//!
//! The ticker core never touches a real surface. It fills a `DotBuffer`
//! every frame and hands it to an adapter, which owns the drawing backend,
//! reports the viewport size in pixels and turns host notifications
//! (resize, focus/visibility, keys) into `HostEvent`s.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 Engine (frame loop)          │
//! │   HostEvent ──► Ticker ──► DotBuffer (x2)    │
//! └──────────────────────────────────────────────┘
//!          ▲                        │ current / previous
//!          │ poll_event             ▼
//! ┌──────────────────────────────────────────────┐
//! │               Adapter Interface              │
//! │  ┌──────────────────┬──────────────────────┐ │
//! │  │    Crossterm     │       Headless       │ │
//! │  │  (half blocks)   │  (memory, tests)     │ │
//! │  └──────────────────┴──────────────────────┘ │
//! └──────────────────────────────────────────────┘
//! ```

use crate::{error::Result, render::buffer::DotBuffer};
use std::time::Duration;

#[cfg(feature = "term")]
pub mod cross;

pub mod headless;

/// Notifications from the host, applied by the engine before the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// new viewport size in pixels
    Resize(u32, u32),
    /// false while the surface is hidden (tab in background, focus lost)
    Visibility(bool),
    TogglePause,
    NextPage,
}

/// Adapter Base Data Structure
///
/// Common fields shared by all adapters.
#[derive(Debug, Clone, Default)]
pub struct AdapterBase {
    /// Terminal title, set on init
    pub title: String,
    /// Viewport width in pixels
    pub pixel_w: u32,
    /// Viewport height in pixels
    pub pixel_h: u32,
    /// Dot pitch the adapter was initialised with
    pub pitch: u32,
}

impl AdapterBase {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            pitch: 1,
            ..Default::default()
        }
    }
}

pub trait Adapter {
    /// Acquires the drawing surface. An error here is a setup precondition
    /// failure: no frame loop must be started.
    fn init(&mut self, pitch: u32) -> Result<()>;

    /// Releases the surface and detaches host listeners.
    fn reset(&mut self);

    /// Get mutable reference to base data structure
    fn get_base(&mut self) -> &mut AdapterBase;

    /// Poll host events
    ///
    /// # Returns
    /// Returns true if should exit
    fn poll_event(&mut self, timeout: Duration, ev: &mut Vec<HostEvent>) -> bool;

    /// Paints one frame, `previous` is the frame shown before.
    fn draw(&mut self, current: &DotBuffer, previous: &DotBuffer) -> Result<()>;

    /// Viewport size in pixels
    fn viewport(&mut self) -> (u32, u32) {
        let bs = self.get_base();
        (bs.pixel_w, bs.pixel_h)
    }
}
