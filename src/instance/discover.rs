// src/instance/discover.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use tracing::{debug, trace};

use crate::fs::FileSystem;

/// Glob matching every file with `extension` at any depth.
pub fn extension_matcher(extension: &str) -> Result<GlobMatcher> {
    let pattern = format!("**/*.{extension}");
    let glob = Glob::new(&pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?;
    Ok(glob.compile_matcher())
}

/// Dot-files and dot-directories (`.venv`, `.cache`, ...) are never visited.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Collect all files under `root` whose extension matches.
///
/// The whole tree is walked before anything is returned, so files created
/// afterwards are never part of the result. Hidden entries below `root` are
/// skipped along with everything inside them. Paths are sorted.
pub fn discover_instances(
    fs: &dyn FileSystem,
    root: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let matcher = extension_matcher(extension)?;
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        for path in fs.read_dir(&dir)? {
            if is_hidden(&path) {
                trace!(?path, "skipping hidden entry");
                continue;
            }
            if fs.is_dir(&path) {
                stack.push(path);
            } else if fs.is_file(&path) {
                let Ok(rel) = path.strip_prefix(root) else {
                    continue;
                };
                if matcher.is_match(rel.to_string_lossy().replace('\\', "/")) {
                    files.push(path);
                }
            }
        }
    }

    files.sort();
    debug!(count = files.len(), ?root, "discovered instance files");
    Ok(files)
}
