//! Matching local imports against rendered element names.
//!
//! Single-file components are imported through a default specifier, so only
//! default bindings are considered. Aliased and absolute module specifiers
//! are not resolved; a source must start with `.` to count as local.

use std::path::{Path, PathBuf};

use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier, Program, Statement};

use crate::fs_utils::{file_ext, resolve_relative};

use super::declaration::default_export_declaration;
use super::elements::rendered_element_names;
use super::error::GeneratorError;

/// Import statements whose source is a relative path.
pub fn local_imports<'a>(program: &'a Program<'a>) -> Vec<&'a ImportDeclaration<'a>> {
    program
        .body
        .iter()
        .filter_map(|stmt| match stmt {
            Statement::ImportDeclaration(import)
                if import.source.value.starts_with('.') =>
            {
                Some(&**import)
            }
            _ => None,
        })
        .collect()
}

/// Local binding of an import's default specifier, if it has one.
fn default_binding<'a>(import: &'a ImportDeclaration<'a>) -> Option<&'a str> {
    import.specifiers.as_ref()?.iter().find_map(|spec| match spec {
        ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => {
            Some(default.local.name.as_str())
        }
        _ => None,
    })
}

/// Paths of all components the module's default export might render.
///
/// A relative import contributes a child iff its default binding appears in
/// the rendered element set and the resolved file exists. Extension-less
/// sources probe `.js` first, then `.jsx`; candidates pointing nowhere real
/// are dropped without error.
pub fn child_component_paths(
    program: &Program<'_>,
    own_path: &Path,
) -> Result<Vec<PathBuf>, GeneratorError> {
    let decl = default_export_declaration(program)?
        .ok_or(GeneratorError::UnresolvedDeclaration)?;
    let rendered = rendered_element_names(&decl)?;

    let mut child_paths = Vec::new();
    for import in local_imports(program) {
        let Some(binding) = default_binding(import) else {
            continue;
        };
        if !rendered.contains(binding) {
            continue;
        }

        let candidate = resolve_relative(own_path, import.source.value.as_str());
        if file_ext(&candidate).is_none() {
            let js_path = PathBuf::from(format!("{}.js", candidate.display()));
            let jsx_path = PathBuf::from(format!("{}.jsx", candidate.display()));

            if js_path.exists() {
                child_paths.push(js_path);
            } else if jsx_path.exists() {
                child_paths.push(jsx_path);
            }
        } else if candidate.exists() {
            child_paths.push(candidate);
        }
    }

    Ok(child_paths)
}
