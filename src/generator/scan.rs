//! Recursive discovery of component files under a source root.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;

use super::classify::is_component;
use super::error::GeneratorError;

/// Upper bound on threads fanned out per directory level.
const MAX_PARALLEL_SCANS: usize = 8;

/// All component file paths under `dir`, recursively.
///
/// Subdirectories are scanned and files classified in parallel; results
/// list subdirectory components first, then components of the current
/// directory, matching the recursion order.
pub fn component_paths_in_directory(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirs.push(entry.path());
        } else {
            files.push(entry.path());
        }
    }

    let mut paths = Vec::new();

    for chunk in subdirs.chunks(MAX_PARALLEL_SCANS) {
        let results: Vec<io::Result<Vec<PathBuf>>> = thread::scope(|s| {
            let handles: Vec<_> = chunk
                .iter()
                .map(|subdir| s.spawn(move || component_paths_in_directory(subdir)))
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|_| Err(io::Error::other("scan thread panic")))
                })
                .collect()
        });
        for result in results {
            paths.extend(result?);
        }
    }

    for chunk in files.chunks(MAX_PARALLEL_SCANS) {
        let flags: Vec<bool> = thread::scope(|s| {
            let handles: Vec<_> = chunk
                .iter()
                .map(|file| s.spawn(move || is_component(file)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or(false))
                .collect()
        });
        for (file, flag) in chunk.iter().zip(flags) {
            if flag {
                paths.push(file.clone());
            }
        }
    }

    Ok(paths)
}

/// Memoized per-`src_path` scan results, scoped to one generation run.
#[derive(Debug, Default)]
pub struct ScanCache {
    cached: HashMap<PathBuf, Vec<PathBuf>>,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all memoized listings; the tree builder calls this at the
    /// start of each forest-generation run.
    pub fn invalidate(&mut self) {
        self.cached.clear();
    }

    /// Component paths under the project source root, memoized.
    pub fn component_paths_in_project_src(
        &mut self,
        src_path: &Path,
    ) -> Result<Vec<PathBuf>, GeneratorError> {
        if let Some(paths) = self.cached.get(src_path) {
            return Ok(paths.clone());
        }

        let paths =
            component_paths_in_directory(src_path).map_err(|source| GeneratorError::SourceScan {
                path: src_path.to_path_buf(),
                source,
            })?;
        self.cached.insert(src_path.to_path_buf(), paths.clone());
        Ok(paths)
    }
}
