//! Component tree generation.
//!
//! Static analysis over a React-style source tree: discover which files
//! define components, infer which other components each one may render,
//! resolve those references to concrete files, and assemble a deduplicated
//! forest of component dependency trees.
//!
//! # Pipeline
//!
//! - [`scan`] enumerates candidate component files under the source root
//! - [`classify`] decides whether a single file is a component
//! - [`declaration`] resolves a module's default export to its declaration
//!   and render block
//! - [`elements`] flattens the render block's returned markup into names
//! - [`imports`] matches rendered names against local default imports and
//!   probes the filesystem for the target files
//! - [`tree`] drives the above per file and assembles the forest

pub mod ast_log;
pub mod classify;
pub mod declaration;
pub mod elements;
pub mod error;
pub mod imports;
pub mod parse;
pub mod scan;
pub mod tree;

pub use classify::is_component;
pub use error::GeneratorError;
pub use tree::{ComponentTreeNode, TreeBuilder, TreeRecord, generate_component_trees};
