// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Engine binds a Ticker to an Adapter and implements the main loop.
//!
//! # Example
//!
//! fn main() -> Result<(), Box<dyn Error>> {
//!    init_log(log::LevelFilter::Info, "log/pixel_ticker.log")?;
//!    let cfg = TickerConfig::load("assets/demo.toml")?;
//!    let mut e = Engine::new(CrosstermAdapter::new("ticker"), Ticker::new(cfg))?;
//!    e.run()?;
//!    Ok(())
//! }
//!
//! The loop is bound to a `CancelToken` captured at setup. Cancelling the
//! token, a quit request from the adapter or dropping the engine all end in
//! the same teardown, which resets the adapter exactly once.

use crate::{
    error::Result,
    render::{
        adapter::{Adapter, HostEvent},
        buffer::DotBuffer,
    },
    ticker::Ticker,
    FRAME_RATE,
};
use log::{info, warn};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

/// Monotonic millisecond timestamps.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Shared stop flag of a running engine.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

pub struct Engine<A, C = MonotonicClock>
where
    A: Adapter,
    C: Clock,
{
    pub adapter: A,
    pub ticker: Ticker,
    clock: C,
    buffers: [DotBuffer; 2],
    current: usize,
    events: Vec<HostEvent>,
    token: CancelToken,
    torn_down: bool,
    pub frames: u64,
}

impl<A: Adapter> Engine<A, MonotonicClock> {
    pub fn new(adapter: A, ticker: Ticker) -> Result<Self> {
        Self::with_clock(adapter, ticker, MonotonicClock::default())
    }
}

impl<A, C> Engine<A, C>
where
    A: Adapter,
    C: Clock,
{
    /// Initialises the surface and plans the first layout. A surface that
    /// can't be set up returns the error and no loop is ever started.
    pub fn with_clock(mut adapter: A, mut ticker: Ticker, clock: C) -> Result<Self> {
        if let Err(e) = adapter.init(ticker.pitch()) {
            warn!("no drawing surface, ticker not started: {}", e);
            return Err(e);
        }
        let (w, h) = adapter.viewport();
        ticker.on_resize(w, h);
        info!("engine ready, {} rows", ticker.row_count());
        Ok(Self {
            adapter,
            ticker,
            clock,
            buffers: [DotBuffer::default(), DotBuffer::default()],
            current: 0,
            events: vec![],
            token: CancelToken::new(),
            torn_down: false,
            frames: 0,
        })
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Main loop, polling host events and rendering at a constant framerate
    /// until the token is cancelled or the adapter asks to quit.
    pub fn run(&mut self) -> Result<()> {
        info!("Begin run...");
        let result = self.run_loop();
        if let Err(e) = &result {
            warn!("frame loop aborted: {}", e);
        }
        self.stop();
        result
    }

    fn run_loop(&mut self) -> Result<()> {
        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

        while !self.token.is_cancelled() {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_nanos(100));

            if self.adapter.poll_event(timeout, &mut self.events) {
                return Ok(());
            }

            if last_tick.elapsed() >= tick_rate {
                let now = self.clock.now_ms();
                self.on_frame(now)?;
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    /// Runs exactly one frame at `now`. Returns false once the engine is
    /// stopped or the adapter asked to quit.
    pub fn step(&mut self, now: u64) -> Result<bool> {
        if self.token.is_cancelled() {
            return Ok(false);
        }
        if self.adapter.poll_event(Duration::ZERO, &mut self.events) {
            self.stop();
            return Ok(false);
        }
        if let Err(e) = self.on_frame(now) {
            self.stop();
            return Err(e);
        }
        Ok(true)
    }

    fn handle_events(&mut self, now: u64) {
        for e in self.events.drain(..) {
            match e {
                HostEvent::Resize(w, h) => self.ticker.on_resize(w, h),
                HostEvent::Visibility(v) => self.ticker.set_visible(v),
                HostEvent::TogglePause => self.ticker.toggle_pause_all(),
                HostEvent::NextPage => self.ticker.next_page(now),
            }
        }
    }

    /// calls every frame: apply events, render, draw, swap buffers
    fn on_frame(&mut self, now: u64) -> Result<()> {
        self.handle_events(now);
        let cur = self.current;
        self.ticker.render_frame(now, &mut self.buffers[cur]);
        self.adapter
            .draw(&self.buffers[cur], &self.buffers[1 - cur])?;
        self.current = 1 - cur;
        self.frames += 1;
        Ok(())
    }

    /// Cancels the loop and releases the surface, safe to call twice.
    pub fn stop(&mut self) {
        self.token.cancel();
        if !self.torn_down {
            self.torn_down = true;
            self.adapter.reset();
            info!("engine stopped after {} frames", self.frames);
        }
    }
}

impl<A, C> Drop for Engine<A, C>
where
    A: Adapter,
    C: Clock,
{
    fn drop(&mut self) {
        self.stop();
    }
}
