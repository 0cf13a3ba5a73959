use std::path::{Path, PathBuf};

/// Name of the per-project state directory.
pub const AGENCY_DIR: &str = ".agency";

/// Walk upwards from `start` until a `.agency` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(AGENCY_DIR).is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}
