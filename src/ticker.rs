// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Ticker
//!
//! The frame renderer. One call to `render_frame` runs the whole cycle:
//!
//! ```text
//! Clear -> DrawBackground -> ResolvePage -> DrawRows
//! ```
//!
//! It owns the row configs, their prepared content (rebuilt only when a
//! row's content, color or spacing changes), the per-row animation arena
//! keyed by stable row index, the page state and the current layout plan.
//! A row that scrolls out of view by pagination keeps its arena entry, so
//! it resumes at the same offset when its page comes back.

use crate::{
    animator::{advance, RowAnimState},
    config::{Content, DisplayConfig, RowConfig, TickerConfig},
    error::{Result, TickerError},
    font::GLYPH_HEIGHT,
    pagination::{plan, start_grid_row, LayoutPlan, PageState},
    render::{
        buffer::{Dot, DotBuffer},
        content::{prepare, PreparedContent},
        resolver::{is_active, Placement},
        style::Rgb,
    },
    source::ContentSource,
};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::ops::Range;

/// A row and its cached prepared content.
#[derive(Debug, Clone)]
pub struct RowSlot {
    pub config: RowConfig,
    pub prepared: PreparedContent,
    pub paused: bool,
}

impl RowSlot {
    fn new(mut config: RowConfig, primary: Rgb) -> Self {
        config.sanitize();
        let prepared = prepare(
            &config.content,
            config.resolved_color(primary),
            &config.spacing,
        );
        Self {
            config,
            prepared,
            paused: false,
        }
    }

    fn reprepare(&mut self, primary: Rgb) {
        self.prepared = prepare(
            &self.config.content,
            self.config.resolved_color(primary),
            &self.config.spacing,
        );
    }
}

/// What the last frame showed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameInfo {
    pub page: usize,
    pub rows: Range<usize>,
    pub start_grid_row: i64,
}

pub struct Ticker {
    display: DisplayConfig,
    primary: Rgb,
    background: Rgb,
    dim: Rgb,
    rows: Vec<RowSlot>,
    anim: HashMap<usize, RowAnimState>,
    page: PageState,
    layout: LayoutPlan,
    viewport: (u32, u32),
    visible: bool,
}

impl Ticker {
    pub fn new(config: TickerConfig) -> Self {
        let TickerConfig { display, rows } = config;
        let primary = display.primary();
        let background = display.background();
        let rows = rows
            .into_iter()
            .map(|r| RowSlot::new(r, primary))
            .collect();
        Self {
            primary,
            background,
            dim: primary.dim_on(background),
            display,
            rows,
            anim: HashMap::new(),
            page: PageState::default(),
            layout: LayoutPlan::default(),
            viewport: (0, 0),
            visible: true,
        }
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn pitch(&self) -> u32 {
        self.display.pitch()
    }

    pub fn rows(&self) -> &[RowSlot] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn layout(&self) -> &LayoutPlan {
        &self.layout
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn anim_state(&self, index: usize) -> Option<&RowAnimState> {
        self.anim.get(&index)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Replans the grid for a new viewport in pixels. Layout and page
    /// state are replaced as a whole, a dangling page goes back to 0.
    pub fn on_resize(&mut self, width_px: u32, height_px: u32) {
        self.viewport = (width_px, height_px);
        self.replan();
        info!(
            "viewport {}x{} px -> {} cols, {} grid rows, {} rows/page, {} pages",
            width_px,
            height_px,
            self.layout.cols,
            self.layout.total_grid_rows,
            self.layout.rows_per_page,
            self.layout.total_pages
        );
    }

    fn replan(&mut self) {
        let layout = plan(
            self.viewport.1,
            self.viewport.0,
            self.display.pitch(),
            self.rows.len(),
            self.display.row_spacing,
        );
        let mut page = self.page;
        page.apply_plan(&layout);
        self.layout = layout;
        self.page = page;
    }

    /// Replaces the whole row set. Animation state is dropped since the
    /// row indices now name different rows.
    pub fn set_rows(&mut self, rows: Vec<RowConfig>) {
        let primary = self.primary;
        self.rows = rows
            .into_iter()
            .map(|r| RowSlot::new(r, primary))
            .collect();
        self.anim.clear();
        self.replan();
        info!("row set replaced, {} rows", self.rows.len());
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut RowSlot> {
        self.rows
            .get_mut(index)
            .ok_or(TickerError::RowIndex(index))
    }

    /// Replaces one row's config, re-preparing its content. The scroll
    /// offset survives, wrapped into the new width.
    pub fn update_row(&mut self, index: usize, config: RowConfig) -> Result<()> {
        let primary = self.primary;
        let slot = self.slot_mut(index)?;
        let paused = slot.paused;
        *slot = RowSlot::new(config, primary);
        slot.paused = paused;
        let total = slot.prepared.total_width;
        if let Some(st) = self.anim.get_mut(&index) {
            st.rewrap(total);
        }
        Ok(())
    }

    /// Swaps a row's content only.
    pub fn set_row_content(&mut self, index: usize, content: Content) -> Result<()> {
        let primary = self.primary;
        let slot = self.slot_mut(index)?;
        slot.config.content = content;
        slot.reprepare(primary);
        let total = slot.prepared.total_width;
        if let Some(st) = self.anim.get_mut(&index) {
            st.rewrap(total);
        }
        debug!("row {} content replaced, total width {}", index, total);
        Ok(())
    }

    /// Fetches fresh content for a row. On failure the row keeps what it
    /// had and the error is returned, other rows are not affected.
    pub fn refresh_row(
        &mut self,
        index: usize,
        source: &dyn ContentSource,
        params: Option<f64>,
    ) -> Result<bool> {
        let slot = self.rows.get(index).ok_or(TickerError::RowIndex(index))?;
        let params = params.or(slot.config.params);
        match source.fetch(params) {
            Ok(content) => {
                if content == slot.config.content {
                    return Ok(false);
                }
                self.set_row_content(index, content)?;
                Ok(true)
            }
            Err(e) => {
                warn!("row {}: source {} failed: {}", index, source.name(), e);
                Err(TickerError::Source {
                    row: index,
                    reason: e.to_string(),
                })
            }
        }
    }

    pub fn set_row_paused(&mut self, index: usize, paused: bool) -> Result<()> {
        self.slot_mut(index)?.paused = paused;
        Ok(())
    }

    /// Pauses every row if any is running, resumes all otherwise.
    pub fn toggle_pause_all(&mut self) {
        let pause = self.rows.iter().any(|r| !r.paused);
        for r in self.rows.iter_mut() {
            r.paused = pause;
        }
        info!("all rows {}", if pause { "paused" } else { "resumed" });
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            debug!("host visibility -> {}", visible);
        }
        self.visible = visible;
    }

    pub fn next_page(&mut self, now: u64) {
        if self.page.total_pages > 1 {
            self.page.advance(now);
        }
    }

    /// Renders one frame into `buf`, resizing it to the grid when needed.
    pub fn render_frame(&mut self, now: u64, buf: &mut DotBuffer) -> FrameInfo {
        self.clear(buf);
        self.draw_background(buf);
        let info = self.resolve_page(now);
        self.draw_rows(now, &info, buf);
        info
    }

    fn clear(&self, buf: &mut DotBuffer) {
        if buf.width != self.layout.cols || buf.height != self.layout.total_grid_rows {
            buf.resize(self.layout.cols, self.layout.total_grid_rows);
        }
        buf.clear(self.background);
    }

    fn draw_background(&self, buf: &mut DotBuffer) {
        buf.fill(Dot::Dim(self.dim));
    }

    fn resolve_page(&mut self, now: u64) -> FrameInfo {
        self.page.tick(now, self.display.page_interval);
        let rows = self
            .layout
            .page_rows(self.page.current_page, self.rows.len());
        let start = start_grid_row(
            rows.len(),
            self.layout.total_grid_rows,
            self.layout.row_spacing,
        );
        FrameInfo {
            page: self.page.current_page,
            rows,
            start_grid_row: start,
        }
    }

    fn draw_rows(&mut self, now: u64, info: &FrameInfo, buf: &mut DotBuffer) {
        let block = self.layout.rows_per_block() as i64;
        let cols = self.layout.cols;
        for (k, index) in info.rows.clone().enumerate() {
            let slot = &self.rows[index];
            let state = self
                .anim
                .entry(index)
                .or_insert_with(|| RowAnimState::new(now));
            let running = self.visible && !slot.paused && slot.config.scrolling;
            advance(
                state,
                now,
                slot.config.step_interval,
                slot.prepared.total_width,
                running,
            );
            let placement = Placement::for_row(&slot.config, state.offset, cols);
            let top = info.start_grid_row + k as i64 * block;
            for r in 0..GLYPH_HEIGHT {
                let y = top + r as i64;
                if y < 0 || y >= self.layout.total_grid_rows as i64 {
                    continue;
                }
                for col in 0..cols {
                    if let Some(ci) = is_active(col, r, &slot.prepared, placement) {
                        buf.set(col as i64, y, Dot::Lit(slot.prepared.char_colors[ci]));
                    }
                }
            }
        }
    }
}
