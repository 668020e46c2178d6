//! Signal broadcast by process name
//!
//! Works like `pkill -SIGUSR2 btop`: walk the proc filesystem, match each
//! process's comm name, deliver the signal. Per-pid failures (process
//! exited, permission denied) are logged and skipped; the broadcast never
//! aborts.

use std::path::Path;

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

/// Result of one broadcast sweep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Broadcast {
    /// Processes whose comm name matched (the current process excluded)
    pub matched: usize,
    /// Signals actually delivered
    pub sent: usize,
}

/// Send `signal` to every process under `proc_root` whose comm name
/// equals `name`.
pub fn broadcast(proc_root: &Path, name: &str, signal: Signal) -> Broadcast {
    let mut result = Broadcast::default();

    for pid in matching_pids(proc_root, name) {
        result.matched += 1;
        match kill(Pid::from_raw(pid), signal) {
            Ok(()) => {
                log::debug!("sent {} to pid {}", signal, pid);
                result.sent += 1;
            }
            Err(e) => log::debug!("kill({}, {}) failed: {}", pid, signal, e),
        }
    }

    result
}

/// Collect pids under `proc_root` whose comm name equals `name`.
///
/// The current process is never included, matching pkill's default.
fn matching_pids(proc_root: &Path, name: &str) -> Vec<i32> {
    let me = std::process::id() as i32;
    let mut pids = Vec::new();

    let Ok(entries) = std::fs::read_dir(proc_root) else {
        return pids;
    };

    for entry in entries.flatten() {
        // Numeric directory names are pids
        let Some(pid) = entry
            .file_name()
            .to_str()
            .and_then(|s| s.parse::<i32>().ok())
        else {
            continue;
        };
        if pid == me {
            continue;
        }

        // comm is the process name, truncated to 15 chars by the kernel
        let Ok(comm) = std::fs::read_to_string(entry.path().join("comm")) else {
            continue; // process exited mid-scan
        };

        if comm.trim_end() == name {
            pids.push(pid);
        }
    }

    pids
}
