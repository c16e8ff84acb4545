// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Content sources produce row content from outside the ticker (clocks,
//! feeds, sensors). The ticker only sees the resolved `Content`, fetching
//! happens before a frame, never inside it.

use crate::{config::Content, error::Result};

pub trait ContentSource {
    fn name(&self) -> &str;

    /// Produces the row content, `params` is the row's opaque argument.
    fn fetch(&self, params: Option<f64>) -> Result<Content>;
}

/// Always yields the same content.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    content: Content,
}

impl StaticSource {
    pub fn new<C: Into<Content>>(content: C) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl ContentSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self, _params: Option<f64>) -> Result<Content> {
        Ok(self.content.clone())
    }
}

/// Turns a closure into a source.
pub struct FnSource<F> {
    name: String,
    f: F,
}

impl<F> FnSource<F>
where
    F: Fn(Option<f64>) -> Result<Content>,
{
    pub fn new(name: &str, f: F) -> Self {
        Self {
            name: name.to_string(),
            f,
        }
    }
}

impl<F> ContentSource for FnSource<F>
where
    F: Fn(Option<f64>) -> Result<Content>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self, params: Option<f64>) -> Result<Content> {
        (self.f)(params)
    }
}
