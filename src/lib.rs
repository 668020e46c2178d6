//! btop-theme - set the btop color theme and reload running instances
//!
//! Two steps, executed in order:
//! 1. Rewrite the `color_theme` line in `<config-home>/btop/btop.conf`.
//! 2. Send SIGUSR2 to every process named `btop`; btop handles it by
//!    re-reading its config.
//!
//! The signal is sent whether or not the rewrite found anything to change.

use std::path::Path;

use nix::sys::signal::Signal;

pub mod conf;
pub mod paths;
pub mod proc;

/// Process name btop runs under
pub const PROCESS_NAME: &str = "btop";

/// Run both steps in order: rewrite the theme in `config`, then broadcast
/// SIGUSR2 from a scan of `proc_root`.
///
/// The broadcast runs whatever the rewrite's outcome; rewrite failures are
/// logged, not fatal.
pub fn run(config: Option<&Path>, theme: &str, proc_root: &Path) -> proc::Broadcast {
    match config {
        Some(path) => match conf::set_theme(path, theme) {
            Ok(true) => log::info!("set color_theme = \"{}\" in {}", theme, path.display()),
            Ok(false) => log::warn!("no color_theme line in {}", path.display()),
            Err(e) => log::warn!("{}", e),
        },
        None => log::warn!("cannot determine config directory"),
    }

    proc::broadcast(proc_root, PROCESS_NAME, Signal::SIGUSR2)
}
