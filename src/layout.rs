//! Radial layout: primary branches on a circle around the root, deeper
//! children fanned out inside a fixed-width wedge around their parent.
//!
//! The pass is deterministic and depends only on topology. Subtrees of very
//! different sizes can still overlap each other; only siblings are kept apart.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::graph::{GraphNode, MindmapGraph, Position, ROOT_ID, claim_unvisited};

// Layout defaults (in canvas pixels / degrees).
pub const DEFAULT_PRIMARY_RADIUS: f64 = 300.0;
pub const DEFAULT_CHILD_DISTANCE: f64 = 200.0;
pub const DEFAULT_WEDGE_DEGREES: f64 = 60.0;
pub const DEFAULT_DISTANCE_DECAY: f64 = 0.7;

/// Geometry of the radial layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Root position used when the root has none yet.
    pub origin: Position,
    /// Distance from the root to each primary branch.
    pub primary_radius: f64,
    /// Distance from a primary branch to its children.
    pub child_distance: f64,
    /// Angular width of the sector a node's children share, strictly
    /// between 0 and 360 degrees.
    pub wedge_degrees: f64,
    /// Factor applied to the child distance at each further depth.
    pub distance_decay: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: Position::ORIGIN,
            primary_radius: DEFAULT_PRIMARY_RADIUS,
            child_distance: DEFAULT_CHILD_DISTANCE,
            wedge_degrees: DEFAULT_WEDGE_DEGREES,
            distance_decay: DEFAULT_DISTANCE_DECAY,
        }
    }
}

/// Lay out the graph with [`LayoutConfig::default`].
pub fn layout(graph: &mut MindmapGraph) {
    layout_with(graph, &LayoutConfig::default());
}

/// Assign a position to every node reachable from the root.
///
/// Only `position` is written. An existing root position is kept; a root
/// without one is placed at `config.origin`. Children are taken from the
/// edge list in declaration order and each node is placed at most once, so
/// graphs with stray cycles still terminate. Graphs without a root node are
/// left untouched.
pub fn layout_with(graph: &mut MindmapGraph, config: &LayoutConfig) {
    let Some(root_idx) = graph.nodes.iter().position(|n| n.id == ROOT_ID) else {
        tracing::debug!("layout skipped: graph has no root node");
        return;
    };
    let children = graph.child_indices();
    let nodes = graph.nodes.as_mut_slice();
    let mut visited = vec![false; nodes.len()];
    visited[root_idx] = true;

    let root_pos = *nodes[root_idx].position.get_or_insert(config.origin);

    let branches = claim_unvisited(&children[root_idx], &mut visited);
    let step = TAU / as_f64(branches.len().max(1));
    for (i, &branch) in branches.iter().enumerate() {
        let angle = -FRAC_PI_2 + step * as_f64(i);
        nodes[branch].position = Some(polar(root_pos, config.primary_radius, angle));
        place_children(nodes, &children, &mut visited, branch, angle, config.child_distance, config);
    }

    let placed = visited.iter().filter(|v| **v).count();
    tracing::debug!(nodes = nodes.len(), placed, branches = branches.len(), "radial layout complete");
}

/// Fan the children of `parent` across a wedge centred on `angle`, then
/// recurse with a shorter distance.
fn place_children(
    nodes: &mut [GraphNode],
    children: &[Vec<usize>],
    visited: &mut [bool],
    parent: usize,
    angle: f64,
    distance: f64,
    config: &LayoutConfig,
) {
    let kids = claim_unvisited(&children[parent], visited);
    if kids.is_empty() {
        return;
    }
    let Some(origin) = nodes[parent].position else {
        return;
    };

    let wedge = config.wedge_degrees.to_radians();
    let start = angle - wedge / 2.0;
    let gaps = as_f64(kids.len().saturating_sub(1));
    for (i, &child) in kids.iter().enumerate() {
        let child_angle = if kids.len() == 1 { angle } else { start + wedge * as_f64(i) / gaps };
        nodes[child].position = Some(polar(origin, distance, child_angle));
        place_children(nodes, children, visited, child, child_angle, distance * config.distance_decay, config);
    }
}

fn polar(origin: Position, distance: f64, angle: f64) -> Position {
    Position { x: origin.x + distance * angle.cos(), y: origin.y + distance * angle.sin() }
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(n: usize) -> f64 {
    n as f64
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
