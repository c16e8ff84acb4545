// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Log module provides the file logger, reference
//! https://docs.rs/log4rs
//!
//! Without the `log4rs` feature `init_log` is a no-op and log records go
//! nowhere unless the host installs its own logger.

use crate::error::Result;
use log::LevelFilter;

#[cfg(feature = "log4rs")]
use crate::error::TickerError;
#[cfg(feature = "log4rs")]
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// init logs system
#[allow(unused)]
pub fn init_log(level: LevelFilter, file_path: &str) -> Result<()> {
    #[cfg(feature = "log4rs")]
    {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(file_path)?;
        let config = Config::builder()
            .appender(
                Appender::builder()
                    .filter(Box::new(ThresholdFilter::new(level)))
                    .build("logfile", Box::new(logfile)),
            )
            .build(Root::builder().appender("logfile").build(level))
            .map_err(|e| TickerError::Log(e.to_string()))?;
        log4rs::init_config(config).map_err(|e| TickerError::Log(e.to_string()))?;
    }
    Ok(())
}

#[cfg(all(test, feature = "log4rs"))]
mod tests {
    use super::*;

    #[test]
    fn bad_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // a directory can't be opened as the log file
        let r = init_log(LevelFilter::Info, dir.path().to_str().unwrap());
        assert!(r.is_err());
    }
}
