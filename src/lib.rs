// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! pixel_ticker renders scrolling LED dot-matrix rows: text is drawn with a
//! 5x7 font on a grid of dots, each row scrolls at its own pace or sits
//! still with an alignment, and rows that don't fit the viewport are split
//! into pages that rotate on a timer.
//!
//! The core (font, content, resolver, animator, pagination, ticker) is pure
//! and clock driven, it only fills a `DotBuffer` per frame. Drawing goes
//! through the `Adapter` trait: a crossterm backend for the terminal and a
//! headless one for tests and offscreen use.
//!
//! Text Mode: Built with crossterm, two dots per terminal cell using half
//! blocks, enabled by the `term` feature.
//!
//! Built with `--no-default-features` only the core and the headless
//! adapter are compiled, with no terminal or file logging dependencies.

/// framerate per second, set to moderate number to save CPUs
pub const FRAME_RATE: u32 = 60;

pub mod animator;
pub mod config;
pub mod engine;
pub mod error;
pub mod font;
pub mod log;
pub mod pagination;
pub mod render;
pub mod source;
pub mod ticker;

pub use config::{Alignment, ColoredSegment, Content, DisplayConfig, RowConfig, SpacingConfig, TickerConfig};
pub use engine::{CancelToken, Clock, Engine, MonotonicClock};
pub use error::{Result, TickerError};
pub use ticker::Ticker;
