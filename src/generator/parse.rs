//! OXC parser wiring.
//!
//! Each caller owns an [`Allocator`] and the source text; the returned
//! [`Program`] borrows from both, so syntax trees live only as long as the
//! operation that needed them. Nothing is persisted across generation runs.

use std::fs;
use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;

use super::error::GeneratorError;

/// Read a component source file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String, GeneratorError> {
    fs::read_to_string(path).map_err(|source| GeneratorError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse module source into a syntax tree.
///
/// JSX is always enabled: React projects routinely keep JSX in plain `.js`
/// files, and the classifier has already restricted us to `.js`/`.jsx`.
pub fn parse_module<'a>(
    allocator: &'a Allocator,
    source_text: &'a str,
    path: &Path,
) -> Result<Program<'a>, GeneratorError> {
    let source_type = SourceType::from_path(path)
        .unwrap_or_default()
        .with_module(true)
        .with_jsx(true);

    let ret = Parser::new(allocator, source_text, source_type)
        .with_options(ParseOptions {
            preserve_parens: false,
            ..ParseOptions::default()
        })
        .parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .first()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "parser panicked".to_string());
        return Err(GeneratorError::Parse {
            path: path.to_path_buf(),
            message,
        });
    }

    Ok(ret.program)
}
