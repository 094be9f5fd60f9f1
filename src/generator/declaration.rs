//! Default-export resolution and render-block extraction.
//!
//! A component module designates one value via `export default <Identifier>`;
//! the declaration bound to that identifier is one of three shapes. Each
//! shape knows how to surface its render block, and
//! [`ComponentDecl::render_block`] is the single dispatch point.

use oxc_ast::ast::{
    BindingPattern, Class, ClassElement, Expression, ExportDefaultDeclarationKind,
    FunctionBody, Program, PropertyKey, Statement, VariableDeclaration,
};

use super::error::GeneratorError;

/// The declaration a module's default export resolves to.
#[derive(Clone, Copy)]
pub enum ComponentDecl<'a> {
    /// `class Foo extends Component { render() { ... } }`
    Class(&'a Class<'a>),
    /// `function Foo(props) { ... }`
    Function(&'a oxc_ast::ast::Function<'a>),
    /// `const Foo = (props) => { ... };`
    Variable(&'a VariableDeclaration<'a>),
}

/// Find the declaration bound to the module's default export.
///
/// Fails if the module has no `export default` statement. A default export
/// that is not a plain identifier (or an identifier with no matching
/// preceding declaration) resolves to `Ok(None)`; callers treat that as a
/// classification failure, not a crash.
pub fn default_export_declaration<'a>(
    program: &'a Program<'a>,
) -> Result<Option<ComponentDecl<'a>>, GeneratorError> {
    let export_index = program
        .body
        .iter()
        .position(|stmt| matches!(stmt, Statement::ExportDefaultDeclaration(_)))
        .ok_or(GeneratorError::NoDefaultExport)?;

    let Statement::ExportDefaultDeclaration(export) = &program.body[export_index] else {
        unreachable!("position() matched an export default statement");
    };

    let name = match &export.declaration {
        ExportDefaultDeclarationKind::Identifier(ident) => ident.name.as_str(),
        _ => return Ok(None),
    };

    Ok(find_declaration(&program.body[..export_index], name))
}

/// Search a statement slice backward for the declaration binding `name`.
/// The closest preceding declaration wins when the name is shadowed.
fn find_declaration<'a>(body: &'a [Statement<'a>], name: &str) -> Option<ComponentDecl<'a>> {
    for stmt in body.iter().rev() {
        match stmt {
            Statement::ClassDeclaration(class) => {
                if class.id.as_ref().is_some_and(|id| id.name == name) {
                    return Some(ComponentDecl::Class(class));
                }
            }
            Statement::FunctionDeclaration(func) => {
                if func.id.as_ref().is_some_and(|id| id.name == name) {
                    return Some(ComponentDecl::Function(func));
                }
            }
            Statement::VariableDeclaration(var) => {
                let bound = var.declarations.iter().any(|decl| {
                    matches!(&decl.id, BindingPattern::BindingIdentifier(id) if id.name == name)
                });
                if bound {
                    return Some(ComponentDecl::Variable(var));
                }
            }
            _ => {}
        }
    }
    None
}

impl<'a> ComponentDecl<'a> {
    /// The statement block whose direct return value is the component's
    /// rendered output.
    pub fn render_block(&self) -> Result<&'a FunctionBody<'a>, GeneratorError> {
        match self {
            Self::Class(class) => class_render_block(class),
            Self::Function(func) => function_render_block(func),
            Self::Variable(var) => variable_render_block(var),
        }
    }
}

fn class_render_block<'a>(class: &'a Class<'a>) -> Result<&'a FunctionBody<'a>, GeneratorError> {
    let mut render_bodies = class.body.body.iter().filter_map(|element| match element {
        ClassElement::MethodDefinition(method) => match &method.key {
            PropertyKey::StaticIdentifier(key) if key.name == "render" => {
                method.value.body.as_deref()
            }
            _ => None,
        },
        _ => None,
    });

    match (render_bodies.next(), render_bodies.next()) {
        (Some(body), None) => Ok(body),
        _ => Err(GeneratorError::AmbiguousRenderMethod),
    }
}

fn function_render_block<'a>(
    func: &'a oxc_ast::ast::Function<'a>,
) -> Result<&'a FunctionBody<'a>, GeneratorError> {
    if func.params.items.len() > 1 {
        return Err(GeneratorError::InvalidComponentSignature);
    }
    func.body
        .as_deref()
        .ok_or(GeneratorError::InvalidComponentSignature)
}

fn variable_render_block<'a>(
    var: &'a VariableDeclaration<'a>,
) -> Result<&'a FunctionBody<'a>, GeneratorError> {
    let mut declarators = var.declarations.iter();
    let (Some(declarator), None) = (declarators.next(), declarators.next()) else {
        return Err(GeneratorError::InvalidVariableComponent);
    };

    match declarator.init.as_ref() {
        Some(Expression::ArrowFunctionExpression(arrow)) => Ok(&arrow.body),
        Some(Expression::FunctionExpression(func)) => func
            .body
            .as_deref()
            .ok_or(GeneratorError::InvalidVariableComponent),
        _ => Err(GeneratorError::InvalidVariableComponent),
    }
}
