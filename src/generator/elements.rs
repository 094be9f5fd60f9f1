//! Flattening of a render block's returned markup into element names.
//!
//! Only a single, direct, unconditional `return <jsx>` is recognized.
//! Returns routed through variables, conditionals, or multiple paths are a
//! known limitation carried over from the component model this targets.

use std::collections::BTreeSet;

use oxc_ast::ast::{
    Expression, FunctionBody, JSXChild, JSXElement, JSXElementName, ReturnStatement, Statement,
};

use super::declaration::ComponentDecl;
use super::error::GeneratorError;

/// The return statement sitting directly in a render block, if any.
pub fn direct_return<'a>(block: &'a FunctionBody<'a>) -> Option<&'a ReturnStatement<'a>> {
    block.statements.iter().find_map(|stmt| match stmt {
        Statement::ReturnStatement(ret) => Some(&**ret),
        _ => None,
    })
}

/// Every element name the declaration's render block might instantiate:
/// the returned root plus all descendants, duplicates collapsed.
pub fn rendered_element_names(
    decl: &ComponentDecl<'_>,
) -> Result<BTreeSet<String>, GeneratorError> {
    let block = decl.render_block()?;
    let root = direct_return(block)
        .and_then(|ret| ret.argument.as_ref())
        .ok_or(GeneratorError::NonJsxReturn)?;

    let Expression::JSXElement(element) = root else {
        return Err(GeneratorError::NonJsxReturn);
    };

    let mut names = BTreeSet::new();
    collect_element_names(element, &mut names);
    Ok(names)
}

fn collect_element_names(element: &JSXElement<'_>, names: &mut BTreeSet<String>) {
    if let Some(name) = element_name(&element.opening_element.name) {
        names.insert(name.to_string());
    }

    for child in &element.children {
        if let JSXChild::Element(child_element) = child {
            collect_element_names(child_element, names);
        }
    }
}

fn element_name<'a>(name: &'a JSXElementName<'a>) -> Option<&'a str> {
    match name {
        JSXElementName::Identifier(ident) => Some(ident.name.as_str()),
        JSXElementName::IdentifierReference(ident) => Some(ident.name.as_str()),
        // Namespaced, member-expression, and `this` tags cannot name a
        // default-imported component, so they contribute nothing.
        _ => None,
    }
}
