// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Row and display configuration.
//!
//! Field names follow the camelCase layout of the exported settings json,
//! so the same file can be loaded from TOML or JSON:
//! ```toml
//! [display]
//! dotSize = 4
//! dotGap = 1
//! rowSpacing = 2
//!
//! [[rows]]
//! content = "HELLO WORLD"
//! stepInterval = 40
//! spacing = { betweenLetters = 1, betweenWords = 4, beforeRepeat = 12 }
//!
//! [[rows]]
//! content = [{ text = "BTC ", color = "#F7931A" }, { text = "↑ 2.1%", color = "#00FF00" }]
//! scrolling = false
//! alignment = "center"
//! ```
//!
//! Bad values are clamped while loading, they never fail a frame.

use crate::{
    error::{Result, TickerError},
    render::style::{color_or, Rgb, DEFAULT_BACKGROUND, DEFAULT_COLOR},
};
use log::{info, warn};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fs, path::Path};

pub const DEFAULT_STEP_INTERVAL: u64 = 50;
pub const DEFAULT_PAGE_INTERVAL: u64 = 10_000;
/// upper bound of any spacing value, in columns
pub const MAX_SPACING: u32 = u16::MAX as u32;

/// One colored run of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredSegment {
    pub text: String,
    pub color: String,
}

impl ColoredSegment {
    pub fn new(text: &str, color: &str) -> Self {
        Self {
            text: text.to_string(),
            color: color.to_string(),
        }
    }
}

/// Row content: a plain string painted with the row color,
/// or segments each carrying its own color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Plain(String),
    Segments(Vec<ColoredSegment>),
}

impl Default for Content {
    fn default() -> Self {
        Content::Plain(String::new())
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Plain(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Plain(s)
    }
}

impl From<Vec<ColoredSegment>> for Content {
    fn from(v: Vec<ColoredSegment>) -> Self {
        Content::Segments(v)
    }
}

impl Content {
    /// text without colors
    pub fn text(&self) -> String {
        match self {
            Content::Plain(s) => s.clone(),
            Content::Segments(v) => v.iter().map(|s| s.text.as_str()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Spacing in dot columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingConfig {
    #[serde(deserialize_with = "spacing_columns")]
    pub between_letters: u32,
    #[serde(deserialize_with = "spacing_columns")]
    pub between_words: u32,
    #[serde(deserialize_with = "spacing_columns")]
    pub before_repeat: u32,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            between_letters: 1,
            between_words: 4,
            before_repeat: 12,
        }
    }
}

impl SpacingConfig {
    pub fn new(between_letters: u32, between_words: u32, before_repeat: u32) -> Self {
        Self {
            between_letters,
            between_words,
            before_repeat,
        }
    }

    /// Caps every value at `MAX_SPACING`.
    pub fn clamped(self) -> Self {
        let cap = |v: u32| {
            if v > MAX_SPACING {
                warn!("spacing {} too large, clamped to {}", v, MAX_SPACING);
            }
            v.min(MAX_SPACING)
        };
        Self {
            between_letters: cap(self.between_letters),
            between_words: cap(self.between_words),
            before_repeat: cap(self.before_repeat),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowConfig {
    pub content: Content,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub spacing: SpacingConfig,
    #[serde(default = "default_step_interval", deserialize_with = "non_negative_u64")]
    pub step_interval: u64,
    #[serde(default = "default_true")]
    pub scrolling: bool,
    #[serde(default)]
    pub alignment: Alignment,
    /// opaque numeric argument handed to the content source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<f64>,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            content: Content::default(),
            color: None,
            spacing: SpacingConfig::default(),
            step_interval: DEFAULT_STEP_INTERVAL,
            scrolling: true,
            alignment: Alignment::Left,
            params: None,
        }
    }
}

impl RowConfig {
    pub fn new<C: Into<Content>>(content: C) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn spacing(mut self, spacing: SpacingConfig) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn step_interval(mut self, ms: u64) -> Self {
        self.step_interval = ms;
        self
    }

    /// Static row placed by alignment.
    pub fn fixed(mut self, alignment: Alignment) -> Self {
        self.scrolling = false;
        self.alignment = alignment;
        self
    }

    /// Row color resolved against the display primary.
    pub fn resolved_color(&self, primary: Rgb) -> Rgb {
        color_or(self.color.as_deref(), primary)
    }

    /// A scrolling row needs a positive step interval, spacing is capped.
    pub fn sanitize(&mut self) {
        self.spacing = self.spacing.clamped();
        if self.scrolling && self.step_interval == 0 {
            warn!("scrolling row with stepInterval 0, clamped to 1ms");
            self.step_interval = 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayConfig {
    /// dot diameter in pixels
    pub dot_size: u32,
    /// gap between dots in pixels
    pub dot_gap: u32,
    /// empty grid rows between logical rows
    pub row_spacing: u32,
    /// ms between automatic page switches
    pub page_interval: u64,
    pub background: String,
    /// primary dot color, also tints the unlit grid
    pub color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dot_size: 4,
            dot_gap: 1,
            row_spacing: 2,
            page_interval: DEFAULT_PAGE_INTERVAL,
            background: DEFAULT_BACKGROUND.to_hex(),
            color: DEFAULT_COLOR.to_hex(),
        }
    }
}

impl DisplayConfig {
    /// distance between dot origins, never 0
    pub fn pitch(&self) -> u32 {
        self.dot_size.saturating_add(self.dot_gap).max(1)
    }

    pub fn primary(&self) -> Rgb {
        color_or(Some(&self.color), DEFAULT_COLOR)
    }

    pub fn background(&self) -> Rgb {
        color_or(Some(&self.background), DEFAULT_BACKGROUND)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickerConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub rows: Vec<RowConfig>,
}

impl TickerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let mut cfg: TickerConfig = toml::from_str(s)?;
        cfg.sanitize();
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let mut cfg: TickerConfig = serde_json::from_str(s)?;
        cfg.sanitize();
        Ok(cfg)
    }

    /// Loads a `.json` file as JSON, anything else as TOML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let cfg = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text)?,
            _ => Self::from_toml_str(&text)?,
        };
        info!("config loaded from {:?}, {} rows", path, cfg.rows.len());
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(TickerError::from)
    }

    pub fn sanitize(&mut self) {
        for row in self.rows.iter_mut() {
            row.sanitize();
        }
    }
}

fn default_step_interval() -> u64 {
    DEFAULT_STEP_INTERVAL
}

fn default_true() -> bool {
    true
}

fn non_negative<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let v = f64::deserialize(deserializer)?;
    if v < 0.0 || v.is_nan() {
        warn!("negative config value {}, clamped to 0", v);
        return Ok(0.0);
    }
    Ok(v.floor())
}

fn spacing_columns<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let v = non_negative(deserializer)?;
    if v > MAX_SPACING as f64 {
        warn!("spacing {} too large, clamped to {}", v, MAX_SPACING);
        return Ok(MAX_SPACING);
    }
    Ok(v as u32)
}

fn non_negative_u64<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_negative(deserializer)?.min(u64::MAX as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TOML_CFG: &str = r##"
[display]
dotSize = 6
dotGap = 2
rowSpacing = 1

[[rows]]
content = "HELLO"
stepInterval = 40

[[rows]]
content = [{ text = "UP ", color = "#00ff00" }, { text = "↑", color = "#FF0000" }]
scrolling = false
alignment = "right"
spacing = { betweenLetters = -3, betweenWords = 2, beforeRepeat = 5 }
"##;

    #[test]
    fn toml_rows_parse_with_defaults() {
        let cfg = TickerConfig::from_toml_str(TOML_CFG).unwrap();
        assert_eq!(cfg.display.pitch(), 8);
        assert_eq!(cfg.display.page_interval, DEFAULT_PAGE_INTERVAL);
        assert_eq!(cfg.rows.len(), 2);
        assert_eq!(cfg.rows[0].content, Content::from("HELLO"));
        assert_eq!(cfg.rows[0].step_interval, 40);
        assert!(cfg.rows[0].scrolling);
        assert_eq!(cfg.rows[0].spacing, SpacingConfig::default());
        assert_eq!(cfg.rows[1].alignment, Alignment::Right);
        assert!(!cfg.rows[1].scrolling);
        match &cfg.rows[1].content {
            Content::Segments(v) => {
                assert_eq!(v.len(), 2);
                assert_eq!(v[1].color, "#FF0000");
            }
            other => panic!("expected segments, got {:?}", other),
        }
    }

    #[test]
    fn negative_spacing_clamps_to_zero() {
        let cfg = TickerConfig::from_toml_str(TOML_CFG).unwrap();
        assert_eq!(cfg.rows[1].spacing, SpacingConfig::new(0, 2, 5));
    }

    #[test]
    fn zero_step_interval_clamped_when_scrolling() {
        let cfg = TickerConfig::from_json_str(
            r#"{"rows":[{"content":"A","stepInterval":0},{"content":"B","stepInterval":-5,"scrolling":false}]}"#,
        )
        .unwrap();
        assert_eq!(cfg.rows[0].step_interval, 1);
        assert_eq!(cfg.rows[1].step_interval, 0);
    }

    #[test]
    fn json_export_round_trips() {
        let cfg = TickerConfig::from_toml_str(TOML_CFG).unwrap();
        let json = cfg.to_json_string().unwrap();
        assert!(json.contains("betweenLetters"));
        let back = TickerConfig::from_json_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn load_picks_format_by_extension() {
        let mut f = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        f.write_all(TOML_CFG.as_bytes()).unwrap();
        let cfg = TickerConfig::load(f.path()).unwrap();
        assert_eq!(cfg.rows.len(), 2);

        let mut j = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        j.write_all(br#"{"rows":[{"content":"X"}]}"#).unwrap();
        let cfg = TickerConfig::load(j.path()).unwrap();
        assert_eq!(cfg.rows[0].content.text(), "X");
    }

    #[test]
    fn bad_file_is_parse_error() {
        let mut f = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        f.write_all(b"rows = 3").unwrap();
        assert!(matches!(
            TickerConfig::load(f.path()),
            Err(TickerError::ConfigParse(_))
        ));
        assert!(matches!(
            TickerConfig::load("/nonexistent/ticker.toml"),
            Err(TickerError::Io(_))
        ));
    }

    #[test]
    fn huge_spacing_is_capped() {
        let cfg = TickerConfig::from_json_str(
            r#"{"rows":[{"content":"HI","spacing":{"betweenLetters":1,"betweenWords":4,"beforeRepeat":99999999999}}]}"#,
        )
        .unwrap();
        assert_eq!(cfg.rows[0].spacing, SpacingConfig::new(1, 4, MAX_SPACING));

        let mut row = RowConfig::new("HI").spacing(SpacingConfig::new(u32::MAX, 2, u32::MAX));
        row.sanitize();
        assert_eq!(row.spacing, SpacingConfig::new(MAX_SPACING, 2, MAX_SPACING));
    }

    #[test]
    fn pitch_never_overflows() {
        let d = DisplayConfig {
            dot_size: u32::MAX,
            dot_gap: 7,
            ..DisplayConfig::default()
        };
        assert_eq!(d.pitch(), u32::MAX);
    }

    #[test]
    fn demo_asset_parses() {
        let cfg = TickerConfig::from_toml_str(include_str!("../assets/demo.toml")).unwrap();
        assert_eq!(cfg.display.page_interval, 8000);
        assert_eq!(cfg.rows.len(), 4);
        assert_eq!(cfg.rows[1].spacing, SpacingConfig::new(1, 3, 20));
        assert_eq!(cfg.rows[2].alignment, Alignment::Right);
        assert_eq!(cfg.rows[2].resolved_color(DEFAULT_COLOR), Rgb::new(0xff, 0xaa, 0));
    }

    #[test]
    fn colors_fall_back() {
        let mut d = DisplayConfig::default();
        d.color = "garbage".to_string();
        assert_eq!(d.primary(), DEFAULT_COLOR);
        let row = RowConfig::new("A").color("#zzzzzz");
        assert_eq!(row.resolved_color(Rgb::new(1, 2, 3)), Rgb::new(1, 2, 3));
    }
}
