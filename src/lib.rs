//! # comptree
//!
//! Component dependency trees for React-style projects, extracted by
//! static analysis.
//!
//! Given an entry component and a source root, comptree parses each
//! `.js`/`.jsx` file with [OXC](https://oxc.rs), figures out which other
//! components a component may render, and assembles a deduplicated forest
//! of dependency trees ready to hand to a codegen or visualization layer.
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use comptree::config::resolve_config;
//! use comptree::generator::generate_component_trees;
//! use std::path::PathBuf;
//!
//! let config = resolve_config(PathBuf::from("/path/to/app"), None, None);
//! let forest = generate_component_trees(&config).unwrap();
//! for record in forest {
//!     println!("{}: {}", record.id, record.data);
//! }
//! ```
//!
//! ## CLI usage
//!
//! ```bash
//! comptree generate --client ./my-app --root App.jsx   # forest as JSON
//! comptree parse src/App.jsx                           # dump one module summary
//! ```

/// Command-line argument parsing.
pub mod args;

/// Project configuration and optional `.comptree/config.toml` support.
pub mod config;

/// Filename, extension, and path-resolution helpers.
pub mod fs_utils;

/// The component tree generator: classification, declaration resolution,
/// render-element extraction, import resolution, scanning, tree assembly.
pub mod generator;

pub use config::GeneratorConfig;
pub use generator::{ComponentTreeNode, GeneratorError, TreeRecord, generate_component_trees};
