//! Shared setup for the Asofe chain crate tests.
// Standard lints
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::{collections::HashSet, fmt, panic::PanicHookInfo, sync::Once};

use color_eyre::{config::Frame, section::PanicMessage};
use owo_colors::OwoColorize;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};

pub mod prelude;

/// The default log filter when `RUST_LOG` is unset.
///
/// Registry tests reject Regtest-only settings on other networks on purpose,
/// so their warnings are hidden.
const DEFAULT_LOG_FILTER: &str = "warn,asofe_chain::parameters::registry=error";

/// Frames from the test harness and panic machinery, which are hidden from backtraces.
const HIDDEN_FRAME_PREFIXES: &[&str] = &[
    "std::panic",
    "std::panicking",
    "core::panicking",
    "core::ops::function",
    "test::",
    "proptest::",
];

/// The message the test harness panics with when a test returns an `Err`.
const TEST_RETURNED_ERR: &str =
    "the test returned a termination value with a non-zero status code";

static INIT: Once = Once::new();

/// Installs the tracing subscriber and the error report hooks.
///
/// Every test calls this first. Only the first call in a test binary does anything.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
            .expect("hard-coded log filter is valid");

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_test_writer(),
            )
            .with(ErrorLayer::default())
            .init();

        color_eyre::config::HookBuilder::default()
            .add_frame_filter(Box::new(hide_harness_frames))
            .panic_message(ReturnedErrIsNotACrash)
            .install()
            .expect("error report hooks are only installed once");
    })
}

/// Drops repeated frames, and frames from [`HIDDEN_FRAME_PREFIXES`].
fn hide_harness_frames(frames: &mut Vec<&Frame>) {
    let mut seen = HashSet::new();

    frames.retain(|frame| {
        if !seen.insert((frame.lineno, frame.filename.clone())) {
            return false;
        }

        match frame.name.as_deref() {
            Some(name) => !HIDDEN_FRAME_PREFIXES
                .iter()
                .any(|prefix| name.starts_with(prefix)),
            None => false,
        }
    });
}

/// Prints panics, except the one the harness raises after a test returns an `Err`.
///
/// That error report has already been printed.
struct ReturnedErrIsNotACrash;

impl PanicMessage for ReturnedErrIsNotACrash {
    fn display(&self, info: &PanicHookInfo<'_>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or("<non-string panic payload>");

        if message.contains(TEST_RETURNED_ERR) {
            return write!(f, "---- end of test output ----");
        }

        writeln!(f, "{}", "\nThe test panicked.".red())?;
        writeln!(f, "Message:  {}", message.cyan())?;

        match info.location() {
            Some(location) => write!(
                f,
                "Location: {}:{}",
                location.file().purple(),
                location.line().purple()
            ),
            None => write!(f, "Location: <unknown>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn init_can_be_called_repeatedly() {
        init();
        init();

        tracing::warn!("logged after init");
    }
}
