use std::path::{Path, PathBuf};

use crate::models::Platform;

/// Find per-platform payload exports (`<platform>.json`) in a directory.
pub fn detect_payloads(path: &Path) -> Vec<(Platform, PathBuf)> {
    Platform::ALL
        .into_iter()
        .map(|platform| (platform, path.join(format!("{}.json", platform.id()))))
        .filter(|(_, file)| file.is_file())
        .collect()
}
