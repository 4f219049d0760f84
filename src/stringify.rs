//! Deterministic AST-to-text rendering.
//!
//! Output is a pure function of the tree and the options; original
//! formatting and comments are not consulted, so round-tripping preserves
//! semantic content only.

use crate::ast::{Document, Property, Value};
use crate::lexer::{is_identifier_continue, is_identifier_start};

/// Blocks at or under this many properties render on one line, provided
/// every value is a primitive.
const INLINE_BLOCK_MAX: usize = 3;

#[derive(Debug, Clone)]
pub struct StringifyOptions {
    /// Spaces per indentation level; `None` indents with one tab.
    pub indent_spaces: Option<usize>,
    /// Insert a blank line between top-level properties.
    pub blank_lines: bool,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            indent_spaces: None,
            blank_lines: false,
        }
    }
}

/// Renders a document back into script text. Each top-level property gets
/// its own `key operator value` line; the output ends with one trailing
/// newline.
#[must_use]
pub fn stringify(document: &Document, options: &StringifyOptions) -> String {
    let unit = match options.indent_spaces {
        Some(n) => " ".repeat(n),
        None => "\t".to_string(),
    };
    let mut out = String::new();
    let count = document.properties.len();
    for (i, property) in document.properties.iter().enumerate() {
        render_property(&mut out, property, 0, &unit);
        out.push('\n');
        if options.blank_lines && i + 1 < count {
            out.push('\n');
        }
    }
    out
}

impl Document {
    /// [`stringify`] as a method.
    #[must_use]
    pub fn stringify(&self, options: &StringifyOptions) -> String {
        stringify(self, options)
    }
}

fn render_property(out: &mut String, property: &Property, depth: usize, unit: &str) {
    out.push_str(&property.key);
    out.push(' ');
    out.push_str(property.operator.as_str());
    out.push(' ');
    render_value(out, &property.value, depth, unit);
}

fn render_value(out: &mut String, value: &Value, depth: usize, unit: &str) {
    match value {
        Value::String(_) | Value::Integer(_) | Value::Float(_) | Value::Boolean(_) => {
            render_primitive(out, value);
        }
        Value::Array(values) => {
            out.push('{');
            for v in values {
                out.push(' ');
                render_value(out, v, depth, unit);
            }
            out.push_str(" }");
        }
        Value::Block(properties) => render_block(out, properties, depth, unit),
    }
}

fn render_block(out: &mut String, properties: &[Property], depth: usize, unit: &str) {
    if properties.is_empty() {
        out.push_str("{ }");
        return;
    }
    let inline = properties.len() <= INLINE_BLOCK_MAX
        && properties.iter().all(|p| p.value.is_primitive());
    if inline {
        out.push('{');
        for property in properties {
            out.push(' ');
            render_property(out, property, depth, unit);
        }
        out.push_str(" }");
    } else {
        out.push_str("{\n");
        for property in properties {
            for _ in 0..=depth {
                out.push_str(unit);
            }
            render_property(out, property, depth + 1, unit);
            out.push('\n');
        }
        for _ in 0..depth {
            out.push_str(unit);
        }
        out.push('}');
    }
}

fn render_primitive(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => {
            if is_bare_word(s) {
                out.push_str(s);
            } else {
                out.push('"');
                out.push_str(&s.replace('"', "\\\""));
                out.push('"');
            }
        }
        Value::Integer(i) => out.push_str(&i.to_string()),
        Value::Float(f) => out.push_str(&f.to_string()),
        Value::Boolean(true) => out.push_str("yes"),
        Value::Boolean(false) => out.push_str("no"),
        // Containers are handled by render_value.
        Value::Block(_) | Value::Array(_) => {}
    }
}

/// A string renders unquoted when it scans as a single identifier token.
fn is_bare_word(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_continue),
        _ => false,
    }
}
