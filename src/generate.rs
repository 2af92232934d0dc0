//! Serialize a node/edge graph back into outline notation.
//!
//! Nesting comes from the edge list alone; `childIds`, `depth` and positions
//! are not consulted, so graphs edited by hand in the canvas export cleanly.

use crate::graph::{DEFAULT_ROOT_LABEL, MindmapGraph, ROOT_ID, claim_unvisited};
use crate::parse::HEADER;
use crate::sanitize::PLACEHOLDER_LABEL;

/// Glyph prefixed to the root label.
pub const ROOT_GLYPH: &str = "🎯";

/// Rotation applied to the root's direct children by position.
pub const CATEGORY_GLYPHS: [&str; 4] = ["📚", "💡", "🔬", "🧩"];

/// Labels starting with any of these are emitted without another glyph.
pub const KNOWN_GLYPHS: &[&str] = &["🎯", "📚", "💡", "🔬", "🧩", "🧠", "⭐", "🚀"];

const INDENT: &str = "  ";

/// Render the graph as outline text, starting with the `mindmap` header.
///
/// The root is the node with id `root`, falling back to the first node whose
/// label mentions "root". Without one, only a placeholder root line is
/// written. Each node is emitted once even if the edges contain cycles.
#[must_use]
pub fn generate(graph: &MindmapGraph) -> String {
    let mut out = String::new();
    push_line(&mut out, 0, HEADER);

    let Some(root_idx) = find_root(graph) else {
        tracing::debug!("no root node found, emitting placeholder root");
        push_line(&mut out, 1, &format!("root(({ROOT_GLYPH} {DEFAULT_ROOT_LABEL}))"));
        return out;
    };

    let children = graph.child_indices();
    let mut visited = vec![false; graph.nodes.len()];
    visited[root_idx] = true;

    let root_label = decorate(&graph.nodes[root_idx].label, ROOT_GLYPH);
    push_line(&mut out, 1, &format!("root(({root_label}))"));

    let branches = claim_unvisited(&children[root_idx], &mut visited);
    for (i, &branch) in branches.iter().enumerate() {
        let glyph = CATEGORY_GLYPHS[i % CATEGORY_GLYPHS.len()];
        push_line(&mut out, 2, &decorate(&graph.nodes[branch].label, glyph));
        emit_subtree(graph, &children, &mut visited, branch, 3, &mut out);
    }

    tracing::debug!(lines = out.lines().count(), branches = branches.len(), "generated mindmap outline");
    out
}

fn emit_subtree(
    graph: &MindmapGraph,
    children: &[Vec<usize>],
    visited: &mut [bool],
    parent: usize,
    level: usize,
    out: &mut String,
) {
    for child in claim_unvisited(&children[parent], visited) {
        push_line(out, level, &flatten(&graph.nodes[child].label));
        emit_subtree(graph, children, visited, child, level + 1, out);
    }
}

fn find_root(graph: &MindmapGraph) -> Option<usize> {
    graph
        .nodes
        .iter()
        .position(|n| n.id == ROOT_ID)
        .or_else(|| {
            graph
                .nodes
                .iter()
                .position(|n| n.label.to_lowercase().contains("root"))
        })
}

/// Prefix `glyph` unless the label already starts with a known glyph.
fn decorate(label: &str, glyph: &str) -> String {
    let label = flatten(label);
    if KNOWN_GLYPHS.iter().any(|g| label.starts_with(g)) {
        label
    } else {
        format!("{glyph} {label}")
    }
}

/// Keep a label on one line; an empty label would vanish on re-parse.
fn flatten(label: &str) -> String {
    let flat = label.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.is_empty() { PLACEHOLDER_LABEL.to_owned() } else { flat }
}

fn push_line(out: &mut String, level: usize, text: &str) {
    out.push_str(&INDENT.repeat(level));
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
