use std::fmt::{Error, Result, Write as _};

use crate::descriptor::TypeDescriptor;

/// Format a type descriptor in a readable style:
/// primitive children are rendered in one line, composite children are
/// pretty-printed. Nested types follow the same rule.
pub fn format_type_descriptor(ty: &TypeDescriptor) -> std::result::Result<String, Error> {
    let mut out = String::new();
    format_type(ty, 0, &mut out)?;
    Ok(out)
}

fn format_type(ty: &TypeDescriptor, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", ty.type_name())?;

    match ty {
        TypeDescriptor::Primitive(_) => {}
        TypeDescriptor::Array(items) => {
            format_labeled_type("items", items, indent, out)?;
        }
        TypeDescriptor::Map { keys, values } => {
            format_labeled_type("keys", keys, indent, out)?;
            format_labeled_type("values", values, indent, out)?;
        }
        TypeDescriptor::Union(members) => {
            writeln!(out, "{pad}members:")?;
            for (index, member) in members.iter().enumerate() {
                format_labeled_type(&index.to_string(), member, indent + 4, out)?;
            }
        }
        TypeDescriptor::Enum(symbols) => {
            let quoted: Vec<String> = symbols.iter().map(|s| format!("{s:?}")).collect();
            writeln!(out, "{pad}symbols: [{}]", quoted.join(", "))?;
        }
        TypeDescriptor::Record { name, fields } => {
            writeln!(out, "{pad}name: {name}")?;
            writeln!(out, "{pad}fields:")?;
            for field in fields {
                format_labeled_type(&field.name, &field.ty, indent + 4, out)?;
            }
        }
    }

    Ok(())
}

fn format_labeled_type(label: &str, ty: &TypeDescriptor, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    let label = if label.is_empty() { "\"\"" } else { label };
    if ty.is_primitive() {
        writeln!(out, "{pad}{label}: {{ type: {} }}", ty.type_name())?;
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_type(ty, indent + 4, out)?;
    }
    Ok(())
}
