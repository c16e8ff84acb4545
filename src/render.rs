// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Render Module
//!
//! Everything between a row config and a drawn dot.
//!
//! ## Sub-modules
//! - `style`: colors, hex parsing and dim tint
//! - `content`: flattens and measures row content
//! - `resolver`: decides which grid dots are lit
//! - `buffer`: per frame activation matrix and diff
//! - `preview`: single row render without animation
//! - `adapter`: drawing backend interface (crossterm, headless)

pub mod adapter;
pub mod buffer;
pub mod content;
pub mod preview;
pub mod resolver;
pub mod style;

// re-export commonly used types
pub use adapter::{Adapter, AdapterBase, HostEvent};
pub use buffer::{Dot, DotBuffer};
pub use content::{prepare, PreparedContent};
pub use preview::render_preview;
pub use resolver::{is_active, Placement};
pub use style::Rgb;
