//! Config file path resolution
//!
//! Follows the XDG convention: $XDG_CONFIG_HOME when set, otherwise
//! ~/.config. The resolved path is not checked for existence.

use std::ffi::OsString;
use std::path::PathBuf;

/// Location of the btop config under the config home
const CONF_SUBPATH: &str = "btop/btop.conf";

/// Resolve the btop config path from the process environment
pub fn config_path() -> Option<PathBuf> {
    config_path_from(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
}

/// Resolution core, split out so tests don't touch the environment
fn config_path_from(config_home: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    let base = match config_home {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home?.join(".config"),
    };
    Some(base.join(CONF_SUBPATH))
}
