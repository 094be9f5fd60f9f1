//! Write-only debug instrumentation.
//!
//! One JSON file per parsed component, recording what the generator
//! extracted from its syntax tree. Sink failures must never affect
//! classification, resolution, or the produced forest; callers discard the
//! result.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;
use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::fs_utils::component_name;

use super::declaration::default_export_declaration;
use super::elements::rendered_element_names;
use super::error::GeneratorError;
use super::imports::{child_component_paths, local_imports};
use super::parse::{parse_module, read_source};

/// Facts extracted from one module's syntax tree.
#[derive(Debug, Serialize)]
pub struct ModuleSummary {
    pub path: PathBuf,
    pub name: String,
    pub rendered_elements: Vec<String>,
    pub local_imports: Vec<String>,
    pub child_paths: Vec<PathBuf>,
}

/// Parse `path` and summarize it, tolerating non-component modules: fields
/// that cannot be extracted come back empty rather than failing.
pub fn summarize_file(path: &Path) -> Result<ModuleSummary, GeneratorError> {
    let source = read_source(path)?;
    let allocator = Allocator::default();
    let program = parse_module(&allocator, &source, path)?;

    let rendered_elements = default_export_declaration(&program)
        .ok()
        .flatten()
        .and_then(|decl| rendered_element_names(&decl).ok())
        .map(|names| names.into_iter().collect())
        .unwrap_or_default();

    let sources = local_imports(&program)
        .iter()
        .map(|import| import.source.value.to_string())
        .collect();

    let child_paths = child_component_paths(&program, path).unwrap_or_default();

    Ok(ModuleSummary {
        path: path.to_path_buf(),
        name: component_name(path),
        rendered_elements,
        local_imports: sources,
        child_paths,
    })
}

/// Persist a component's summary under
/// `<client>/.comptree/logs/componentASTs/<Name>.json`, creating the log
/// directories lazily.
pub fn write_component_log(config: &GeneratorConfig, summary: &ModuleSummary) -> io::Result<()> {
    let log_path = config.log_path();
    let ast_log_path = log_path.join("componentASTs");
    fs::create_dir_all(&ast_log_path)?;

    let pretty = serde_json::to_string_pretty(summary)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(ast_log_path.join(format!("{}.json", summary.name)), pretty)
}
