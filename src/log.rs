// src/log.rs
//
// Thin macros over `tracing`, so call sites stay short. The subscriber is
// installed once by the binary; library code only emits events.

use tracing_subscriber::EnvFilter;

/// Map `-v` count to a default filter. `RUST_LOG` wins when set.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "fa_scrape=warn",
        1 => "fa_scrape=info",
        2 => "fa_scrape=debug",
        _ => "fa_scrape=trace",
    }
}

/// Install the stderr subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(0), "fa_scrape=warn");
        assert_eq!(default_directive(2), "fa_scrape=debug");
        assert_eq!(default_directive(9), "fa_scrape=trace");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(1);
        init(3);
        logd!("still alive");
    }
}
