//! Tree assembly and forest generation.
//!
//! All mutable state for one run (dedup cache, scan cache) lives in a
//! [`TreeBuilder`] owned by that run; nothing leaks across invocations and
//! independent runs can proceed concurrently.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::fs_utils::component_name;

use super::ast_log::{ModuleSummary, write_component_log};
use super::classify::is_component;
use super::declaration::default_export_declaration;
use super::elements::rendered_element_names;
use super::error::GeneratorError;
use super::imports::{child_component_paths, local_imports};
use super::parse::{parse_module, read_source};
use super::scan::ScanCache;

/// One node of a component dependency tree. Children are full nodes, not
/// references: a component reachable from several parents is structurally
/// duplicated in each of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTreeNode {
    pub path: PathBuf,
    pub name: String,
    pub children: Vec<ComponentTreeNode>,
}

/// A root tree, serialized for transport to whatever consumes the forest.
#[derive(Debug, Clone, Serialize)]
pub struct TreeRecord {
    pub id: usize,
    pub data: String,
}

enum Slot {
    /// `build_tree` entered but children still building; rediscovery means
    /// a cycle.
    InProgress,
    Done {
        tree: ComponentTreeNode,
        is_root: bool,
    },
}

/// Per-run context: dedup cache plus the directory-listing cache.
pub struct TreeBuilder<'cfg> {
    config: &'cfg GeneratorConfig,
    slots: HashMap<PathBuf, Slot>,
    /// Discovery order of cache insertions; forest ids follow it.
    order: Vec<PathBuf>,
    scan_cache: ScanCache,
}

/// Generate the deduplicated forest of component trees for a project.
///
/// Convenience wrapper constructing a fresh [`TreeBuilder`] for the run.
pub fn generate_component_trees(
    config: &GeneratorConfig,
) -> Result<Vec<TreeRecord>, GeneratorError> {
    TreeBuilder::new(config).generate()
}

impl<'cfg> TreeBuilder<'cfg> {
    pub fn new(config: &'cfg GeneratorConfig) -> Self {
        Self {
            config,
            slots: HashMap::new(),
            order: Vec::new(),
            scan_cache: ScanCache::new(),
        }
    }

    /// Build every component tree under the project source root and return
    /// the roots: trees not discovered as any other component's child.
    pub fn generate(&mut self) -> Result<Vec<TreeRecord>, GeneratorError> {
        let root_path = &self.config.root_component_path;
        if !is_component(root_path) {
            return Err(GeneratorError::InvalidRootComponent {
                path: root_path.clone(),
            });
        }

        self.slots.clear();
        self.order.clear();
        self.scan_cache.invalidate();

        let all_paths = self
            .scan_cache
            .component_paths_in_project_src(&self.config.src_path)?;

        for path in &all_paths {
            self.build_tree(path)?;
        }

        // A root component outside the scanned source tree still gets its
        // tree built; inside it, the enumeration above already covered it.
        if !self.slots.contains_key(root_path.as_path()) {
            let root_path = root_path.clone();
            self.build_tree(&root_path)?;
        }

        let mut records = Vec::new();
        for path in &self.order {
            if let Some(Slot::Done {
                tree,
                is_root: true,
            }) = self.slots.get(path)
            {
                records.push(TreeRecord {
                    id: records.len(),
                    data: serde_json::to_string(tree)?,
                });
            }
        }
        Ok(records)
    }

    /// Build the dependency tree rooted at `path`.
    ///
    /// A cache hit flips the entry to non-root and returns the stored tree
    /// without reparsing; hitting an in-progress entry breaks the cycle
    /// with a childless placeholder for that path.
    pub fn build_tree(&mut self, path: &Path) -> Result<ComponentTreeNode, GeneratorError> {
        match self.slots.get_mut(path) {
            Some(Slot::Done { tree, is_root }) => {
                *is_root = false;
                return Ok(tree.clone());
            }
            Some(Slot::InProgress) => {
                return Ok(ComponentTreeNode {
                    path: path.to_path_buf(),
                    name: component_name(path),
                    children: Vec::new(),
                });
            }
            None => {}
        }

        self.slots.insert(path.to_path_buf(), Slot::InProgress);
        self.order.push(path.to_path_buf());

        let tree = self
            .build_fresh(path)
            .map_err(|e| GeneratorError::for_component(path, e))?;

        self.slots.insert(
            path.to_path_buf(),
            Slot::Done {
                tree: tree.clone(),
                is_root: true,
            },
        );
        Ok(tree)
    }

    fn build_fresh(&mut self, path: &Path) -> Result<ComponentTreeNode, GeneratorError> {
        let source = read_source(path)?;
        let allocator = Allocator::default();
        let program = parse_module(&allocator, &source, path)?;

        let name = component_name(path);
        let child_paths = child_component_paths(&program, path)?;

        let summary = ModuleSummary {
            path: path.to_path_buf(),
            name: name.clone(),
            rendered_elements: default_export_declaration(&program)
                .ok()
                .flatten()
                .and_then(|decl| rendered_element_names(&decl).ok())
                .map(|names| names.into_iter().collect())
                .unwrap_or_default(),
            local_imports: local_imports(&program)
                .iter()
                .map(|import| import.source.value.to_string())
                .collect(),
            child_paths: child_paths.clone(),
        };
        let _ = write_component_log(self.config, &summary);

        for child in &child_paths {
            if let Some(Slot::Done { is_root, .. }) = self.slots.get_mut(child.as_path()) {
                *is_root = false;
            }
        }

        let mut children = Vec::with_capacity(child_paths.len());
        for child in &child_paths {
            children.push(self.build_tree(child)?);
        }

        Ok(ComponentTreeNode {
            path: path.to_path_buf(),
            name,
            children,
        })
    }
}
