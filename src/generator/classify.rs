//! Best-effort component classification.
//!
//! "Is this file a component" is a heuristic, not a validation step: any
//! failure along the way (unreadable file, parse error, missing export,
//! missing render block, non-JSX return) classifies the file as not a
//! component instead of surfacing an error.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::Expression;

use crate::fs_utils::file_ext;

use super::declaration::default_export_declaration;
use super::elements::direct_return;
use super::error::GeneratorError;
use super::parse::{parse_module, read_source};

/// Whether the file at `path` defines a renderable component.
///
/// Files without a `.js`/`.jsx` extension are rejected without a parse
/// attempt.
pub fn is_component(path: &Path) -> bool {
    if !matches!(file_ext(path), Some("js") | Some("jsx")) {
        return false;
    }
    classify(path).unwrap_or(false)
}

fn classify(path: &Path) -> Result<bool, GeneratorError> {
    let source = read_source(path)?;
    let allocator = Allocator::default();
    let program = parse_module(&allocator, &source, path)?;

    let Some(decl) = default_export_declaration(&program)? else {
        return Ok(false);
    };
    let block = decl.render_block()?;

    let returns_jsx = direct_return(block)
        .and_then(|ret| ret.argument.as_ref())
        .is_some_and(|arg| matches!(arg, Expression::JSXElement(_)));
    Ok(returns_jsx)
}
