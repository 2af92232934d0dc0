//! Indentation-based parser for Mermaid `mindmap` outlines.
//!
//! ```text
//! mindmap
//!   root((Biology))
//!     Cells
//!       Organelles
//!     Genetics
//! ```
//!
//! Parsing is best-effort: lines that cannot be placed in the tree are
//! dropped, and the only failure is input that is not text at all.

use crate::graph::{DEFAULT_ROOT_LABEL, GraphEdge, GraphError, GraphNode, MindmapGraph, ROOT_ID};
use crate::sanitize::{root_text, sanitize_label, shape_text};
use crate::style::{edge_style_for_depth, node_style_for_depth};

/// Columns per indent level unless configured otherwise.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Header keyword of the notation.
pub const HEADER: &str = "mindmap";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Leading columns per nesting level. A tab counts as one full level.
    pub indent_width: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { indent_width: DEFAULT_INDENT_WIDTH }
    }
}

/// Parse outline text with default options.
#[must_use]
pub fn parse(input: &str) -> MindmapGraph {
    parse_with(input, ParseOptions::default())
}

/// Parse raw bytes, rejecting anything that is not UTF-8 text.
///
/// # Errors
///
/// Returns [`GraphError::InvalidUtf8`] if `bytes` is not valid UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<MindmapGraph, GraphError> {
    parse_bytes_with(bytes, ParseOptions::default())
}

/// [`parse_bytes`] with explicit options.
///
/// # Errors
///
/// Returns [`GraphError::InvalidUtf8`] if `bytes` is not valid UTF-8.
pub fn parse_bytes_with(bytes: &[u8], options: ParseOptions) -> Result<MindmapGraph, GraphError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(parse_with(text, options))
}

/// Parse outline text into a rooted node/edge graph.
///
/// The `root((...))` line defines level 0. Every later line hangs off the
/// nearest preceding line with a smaller level; a line that skips a level, or
/// sits no deeper than the root, is dropped. Without a root line a
/// [`DEFAULT_ROOT_LABEL`] root is synthesized one level above the shallowest
/// line.
#[must_use]
pub fn parse_with(input: &str, options: ParseOptions) -> MindmapGraph {
    let unit = options.indent_width.max(1);
    let mut lines: Vec<Line<'_>> = input
        .lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let text = raw.trim();
            if is_ignored(text) {
                return None;
            }
            Some(Line { number: idx + 1, width: leading_width(raw, unit), text })
        })
        .collect();

    // Skip optional header.
    if lines.first().is_some_and(|line| line.text.eq_ignore_ascii_case(HEADER)) {
        lines.remove(0);
    }

    let root_at = lines.iter().position(|line| root_text(line.text).is_some());
    let (root_label, indentation, content) = match root_at {
        Some(pos) => {
            let line = &lines[pos];
            let label = sanitize_label(root_text(line.text).unwrap_or_default());
            let indentation = Indentation { base: line.width, unit, offset: 0 };
            (label, indentation, &lines[pos + 1..])
        }
        None => {
            let base = lines.iter().map(|line| line.width).min().unwrap_or(0);
            tracing::debug!("no root line found, synthesizing default root");
            (DEFAULT_ROOT_LABEL.to_owned(), Indentation { base, unit, offset: 1 }, lines.as_slice())
        }
    };

    let mut graph = MindmapGraph::new();
    graph
        .nodes
        .push(GraphNode::new(ROOT_ID, root_label, 0, node_style_for_depth(0)));

    // Path from the root to the most recently attached node: (node index, level).
    let mut stack: Vec<(usize, u32)> = vec![(0, 0)];
    let mut next_id: usize = 1;
    let mut dropped: usize = 0;

    for line in content {
        let level = indentation.level(line.width);
        let Some(keep) = stack.iter().rposition(|&(_, top)| top < level) else {
            tracing::trace!(line = line.number, level, "dropping line at or above root level");
            dropped += 1;
            continue;
        };
        let (parent_idx, parent_level) = stack[keep];
        if parent_level.saturating_add(1) != level {
            tracing::trace!(line = line.number, level, parent_level, "dropping line that skips an indent level");
            dropped += 1;
            continue;
        }
        stack.truncate(keep + 1);

        let id = format!("node-{next_id}");
        next_id += 1;
        let parent_id = graph.nodes[parent_idx].id.clone();

        let mut node = GraphNode::new(id.clone(), sanitize_label(shape_text(line.text)), level, node_style_for_depth(level));
        node.parent_id = Some(parent_id.clone());
        graph.nodes[parent_idx].child_ids.push(id.clone());
        graph
            .edges
            .push(GraphEdge::new(&parent_id, &id, edge_style_for_depth(level)));
        graph.nodes.push(node);
        stack.push((graph.nodes.len() - 1, level));
    }

    tracing::debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), dropped, "parsed mindmap outline");
    graph
}

struct Line<'a> {
    number: usize,
    width: usize,
    text: &'a str,
}

/// Maps leading width to nesting level relative to the root line.
struct Indentation {
    base: usize,
    unit: usize,
    /// 0 when the root line sets `base`, 1 when `base` is the shallowest content line.
    offset: u32,
}

impl Indentation {
    fn level(&self, width: usize) -> u32 {
        let steps = width.saturating_sub(self.base) / self.unit;
        u32::try_from(steps)
            .unwrap_or(u32::MAX)
            .saturating_add(self.offset)
    }
}

/// Blank lines, `%%` comments and directives, and Mermaid icon/class
/// decorations carry no content.
fn is_ignored(text: &str) -> bool {
    text.is_empty()
        || text.starts_with("%%")
        || text.starts_with("::icon(")
        || text.starts_with(":::")
}

fn leading_width(raw: &str, unit: usize) -> usize {
    raw.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { unit } else { 1 })
        .sum()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
