//! Rendering of tree listings.

use std::io::Write;

use crate::cli::args::OutputFormat;
use crate::cli::error::CliResult;
use crate::tree::{Key, NodeView, RedBlackTree};

/// Writes every node of `tree` in key order using `format`.
///
/// The caller handles the empty-tree message; an empty tree renders as
/// nothing in text mode and as `[]` in JSON mode.
pub fn render<W: Write>(tree: &RedBlackTree, format: OutputFormat, out: &mut W) -> CliResult<()> {
    match format {
        OutputFormat::Text => {
            for view in tree {
                write_text(&view, out)?;
            }
        }
        OutputFormat::Json => {
            let views: Vec<NodeView> = tree.iter().collect();
            serde_json::to_writer(&mut *out, &views)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text<W: Write>(view: &NodeView, out: &mut W) -> CliResult<()> {
    writeln!(out, "Key: {}", view.key)?;
    writeln!(out, "   Color: {}", view.color)?;
    writeln!(out, "   Left Child: {}", describe(view.left))?;
    writeln!(out, "   Right Child: {}", describe(view.right))?;
    match view.parent {
        Some(parent) => writeln!(out, "   Parent: {parent}")?,
        None => writeln!(out, "   Parent: NIL (root)")?,
    }
    Ok(())
}

fn describe(key: Option<Key>) -> String {
    key.map_or_else(|| "NIL".to_string(), |key| key.to_string())
}
