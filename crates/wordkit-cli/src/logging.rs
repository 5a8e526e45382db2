//! Tracing subscriber setup shared by the binaries.

use crate::ui::ColorMode;

/// Initialize the global tracing subscriber.
///
/// Warnings are always shown; debug output only with `--verbose`. Logs go to
/// stderr so stdout carries nothing but command output. ANSI styling follows
/// `color_mode` as resolved for stderr.
pub fn init(verbose: bool, color_mode: ColorMode) {
    let log_level = if verbose { "debug" } else { "warn" };
    let filter = format!("wordkit_core={},wordkit_cli={}", log_level, log_level);

    // First subscriber wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(&filter)
        .with_target(false)
        .with_ansi(color_mode.is_enabled_for_stderr())
        .with_writer(std::io::stderr)
        .try_init();
}
