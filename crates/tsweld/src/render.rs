//! Helpers for rendering nested element collections.

use tsweld_core::{Context, Node, Result, render_node};

/// Render each node through the context and join the results.
pub(crate) fn joined<'a, I>(nodes: I, ctx: &mut Context, separator: &str) -> Result<String>
where
    I: IntoIterator<Item = &'a dyn Node>,
{
    let mut parts = Vec::new();
    for node in nodes {
        parts.push(render_node(node, ctx)?);
    }
    Ok(tsweld_core::utils::join(parts, separator))
}

/// Render boxed nodes joined by `separator`.
pub(crate) fn boxed(nodes: &[Box<dyn Node>], ctx: &mut Context, separator: &str) -> Result<String> {
    joined(nodes.iter().map(|node| &**node), ctx, separator)
}

/// Render `nodes` one per line followed by a newline, or nothing when empty.
pub(crate) fn lines_before<'a, I>(nodes: I, ctx: &mut Context) -> Result<String>
where
    I: IntoIterator<Item = &'a dyn Node>,
{
    let output = joined(nodes, ctx, "\n")?;
    if output.is_empty() {
        return Ok(output);
    }
    Ok(output + "\n")
}

/// Push `node` unless a content-equal node is already present.
pub(crate) fn push_unique(nodes: &mut Vec<Box<dyn Node>>, node: Box<dyn Node>) {
    if !nodes.iter().any(|existing| existing.eq_node(&*node)) {
        nodes.push(node);
    }
}
