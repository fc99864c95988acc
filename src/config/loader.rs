mod include_context;
mod path_resolution;

use crate::config::document::{Element, Node, parse_document};
use crate::constants::{XINCLUDE_FALLBACK, XINCLUDE_INCLUDE, XINCLUDE_NAMESPACE};
use crate::error::{Result, StructureError};
use crate::ui;
use include_context::IncludeContext;
use path_resolution::{parent_dir_of, resolve_include_path, resolve_primary_config_path};
use std::path::Path;

/// How an `xi:include` splices in its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IncludeParse {
    Xml,
    Text,
}

impl IncludeParse {
    fn from_attribute(value: Option<&str>) -> Option<Self> {
        match value.unwrap_or("xml") {
            "xml" => Some(Self::Xml),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Load an audio policy engine configuration file and resolve every
/// `xi:include` it contains, recursively.
///
/// Include hrefs are resolved against the directory of the file holding the
/// directive; the process working directory is never consulted.
pub fn load_engine_configuration(path: &Path) -> Result<Element> {
    let canonical_path = resolve_primary_config_path(path)?;
    ui::verbose(&format!(
        "Checking Audio Policy Engine Configuration file {}",
        canonical_path.display()
    ));

    let mut context = IncludeContext::new();
    context.push(canonical_path.clone())?;
    let result = load_document(&canonical_path, &mut context);
    context.pop();

    result
}

/// Parse `path` and expand its includes. `path` must already be on the
/// context stack.
fn load_document(path: &Path, context: &mut IncludeContext) -> Result<Element> {
    let content = read_file(path)?;
    let mut root = parse_document(&content, &path.display().to_string())?;

    let base_dir = parent_dir_of(path)?;
    resolve_includes(&mut root, &base_dir, context)?;

    Ok(root)
}

fn resolve_includes(
    element: &mut Element,
    base_dir: &Path,
    context: &mut IncludeContext,
) -> Result<()> {
    let children = std::mem::take(&mut element.children);
    let mut resolved = Vec::with_capacity(children.len());

    for node in children {
        match node {
            Node::Element(child) if child.is(Some(XINCLUDE_NAMESPACE), XINCLUDE_INCLUDE) => {
                resolved.push(expand_include(&child, base_dir, context)?);
            }
            Node::Element(child) if child.is(Some(XINCLUDE_NAMESPACE), XINCLUDE_FALLBACK) => {
                return Err(include_error(
                    context,
                    format!("'{}' must be a child of an include directive", child.name),
                ));
            }
            Node::Element(mut child) => {
                resolve_includes(&mut child, base_dir, context)?;
                resolved.push(Node::Element(child));
            }
            text @ Node::Text(_) => resolved.push(text),
        }
    }

    element.children = resolved;
    Ok(())
}

/// Replace one include directive by the node it refers to. Fallback
/// children of the directive are dropped.
fn expand_include(
    include: &Element,
    base_dir: &Path,
    context: &mut IncludeContext,
) -> Result<Node> {
    let href = include.attribute("href").ok_or_else(|| {
        include_error(
            context,
            format!("'{}' is missing its 'href' attribute", include.name),
        )
    })?;

    let parse_attr = include.attribute("parse");
    let parse = IncludeParse::from_attribute(parse_attr).ok_or_else(|| {
        include_error(
            context,
            format!(
                "Unknown parse type '{}' in include of '{}'",
                parse_attr.unwrap_or_default(),
                href
            ),
        )
    })?;

    let path = resolve_include_path(base_dir, href)?;
    ui::verbose(&format!(
        "Including {} ({})",
        path.display(),
        match parse {
            IncludeParse::Xml => "xml",
            IncludeParse::Text => "text",
        }
    ));

    match parse {
        IncludeParse::Xml => {
            context.push(path.clone())?;
            let loaded = load_document(&path, context);
            context.pop();
            Ok(Node::Element(loaded?))
        }
        IncludeParse::Text => {
            if let Some(encoding) = include.attribute("encoding")
                && !is_utf8_label(encoding)
            {
                return Err(include_error(
                    context,
                    format!("Unsupported encoding '{}' for text include '{}'", encoding, href),
                ));
            }
            Ok(Node::Text(read_file(&path)?))
        }
    }
}

fn is_utf8_label(encoding: &str) -> bool {
    matches!(encoding.to_ascii_lowercase().as_str(), "utf-8" | "utf8")
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| StructureError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn include_error(context: &IncludeContext, message: String) -> StructureError {
    StructureError::IncludeError {
        file: context
            .current()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        message,
    }
}
