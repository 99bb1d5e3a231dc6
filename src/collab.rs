//! External tools run around the conversion: `git` to fetch the docs and
//! `bzip2` to compress the result.
//!
//! Both are best effort. A failure is logged and the run carries on.

use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

pub const REMOTE_GIT_URL: &str = "https://github.com/jquery/api.jquery.com";

/// Clone the jQuery API documentation repository into `download_dir`.
pub fn fetch_sources(download_dir: &Path) {
    info!("Cloning {} into {}", REMOTE_GIT_URL, download_dir.display());
    let mut cmd = Command::new("git");
    cmd.arg("clone").arg(REMOTE_GIT_URL).current_dir(download_dir);
    run_best_effort(&mut cmd, "git clone");
}

/// Write `<path>.bz2` next to `path`, keeping the original.
pub fn compress(path: &Path) {
    let mut cmd = Command::new("bzip2");
    cmd.arg("-kf").arg(path);
    run_best_effort(&mut cmd, "bzip2");
}

/// Run `cmd` to completion. Returns whether it exited successfully.
fn run_best_effort(cmd: &mut Command, label: &str) -> bool {
    match cmd.status() {
        Ok(status) if status.success() => true,
        Ok(status) => {
            warn!("{} exited with {}", label, status);
            false
        }
        Err(e) => {
            warn!("failed to run {}: {}", label, e);
            false
        }
    }
}
