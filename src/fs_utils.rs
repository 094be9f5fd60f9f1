//! Filename and path helpers shared by the generator.

use std::path::{Component, Path, PathBuf};

/// Extension of a file name, taken as the text after the last `.`.
///
/// Returns `None` for names without a dot (`./components/Button` style
/// import sources have no extension and get probed instead).
pub fn file_ext(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let (_, ext) = name.rsplit_once('.')?;
    Some(ext)
}

/// Component name derived from a file name: the text before the first `.`.
///
/// `TestCard.spec.jsx` -> `TestCard`.
pub fn component_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

/// Resolve a relative import source against the importing file's directory.
///
/// Lexical only: `.` and `..` segments are collapsed without touching the
/// filesystem, so the result matches the paths the directory scanner hands
/// out and can be used as a cache key.
pub fn resolve_relative(own_path: &Path, source: &str) -> PathBuf {
    let base = own_path.parent().unwrap_or_else(|| Path::new(""));
    normalize(&base.join(source))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
