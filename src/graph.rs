//! Node/edge graph model shared by the parser, layout engine and generator.
//!
//! The graph is a plain pair of vectors so that it can be handed to the
//! rendering layer as JSON without translation. Field names serialize in
//! camelCase (`parentId`, `childIds`, `fillColor`, ...).

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::style::{EdgeStyle, NodeStyle};

/// Reserved id of the mindmap root node.
pub const ROOT_ID: &str = "root";

/// Label given to a root that the outline text did not declare.
pub const DEFAULT_ROOT_LABEL: &str = "Mind Map";

/// Error returned at the boundaries of the compiler.
///
/// Malformed outline text is never an error; these variants cover input that
/// is not text at all and externally supplied graphs that cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Outline bytes were not valid UTF-8.
    #[error("outline input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    /// Graph JSON did not match the node/edge shape.
    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(String),
    #[error("duplicate edge id: {0}")]
    DuplicateEdgeId(String),
    /// An edge endpoint names a node that does not exist.
    #[error("edge {edge} references missing node {node}")]
    DanglingEdge { edge: String, node: String },
    #[error("graph has no root node")]
    MissingRoot,
    #[error("graph has {0} nodes without a parent, expected exactly one")]
    MultipleRoots(usize),
    #[error("node {node} has more than one incoming edge")]
    MultipleParents { node: String },
    #[error("node {node} is not reachable from the root")]
    Unreachable { node: String },
    /// `childIds` disagrees with the outgoing edges of the node.
    #[error("child list of node {node} does not match its outgoing edges")]
    ChildOrderMismatch { node: String },
    /// `parentId` disagrees with the incoming edge of the node.
    #[error("parent reference of node {node} does not match its incoming edge")]
    ParentMismatch { node: String },
    #[error("node {node} has depth {actual}, expected {expected}")]
    DepthMismatch { node: String, expected: u32, actual: u32 },
}

/// 2-D canvas coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single mindmap topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub style: NodeStyle,
    /// `None` until the layout engine runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Lookup-only back reference; `None` for the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub child_ids: Vec<String>,
    /// Free-form editor data (notes, descriptions). Ignored by this crate.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl GraphNode {
    /// Create an unpositioned node with the given style and no links.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, depth: u32, style: NodeStyle) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            depth,
            style,
            position: None,
            parent_id: None,
            child_ids: Vec::new(),
            metadata: Map::new(),
        }
    }
}

/// Directed parent → child link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub style: EdgeStyle,
}

impl GraphEdge {
    #[must_use]
    pub fn new(source: &str, target: &str, style: EdgeStyle) -> Self {
        Self { id: edge_id(source, target), source: source.to_owned(), target: target.to_owned(), style }
    }
}

/// Canonical edge id for a parent → child pair.
#[must_use]
pub fn edge_id(source: &str, target: &str) -> String {
    format!("edge-{source}-{target}")
}

/// The full mindmap: nodes plus parent → child edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MindmapGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl MindmapGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserialize a graph produced by the editor and check that every edge
    /// endpoint exists and no id is repeated.
    ///
    /// Tree shape is not enforced here; see [`MindmapGraph::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Json`] for malformed JSON and the reference
    /// variants for duplicate ids or dangling edges.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let graph: Self = serde_json::from_str(json)?;
        graph.check_references()?;
        tracing::debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), "graph loaded from json");
        Ok(graph)
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Json`] if a float field is not representable.
    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Json`] if a float field is not representable.
    pub fn to_json_pretty(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The node carrying [`ROOT_ID`], if any.
    #[must_use]
    pub fn root(&self) -> Option<&GraphNode> {
        self.node(ROOT_ID)
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Target ids of the edges leaving `id`, in edge-declaration order.
    pub fn children_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.source == id)
            .map(|e| e.target.as_str())
    }

    /// Number of nodes at each depth, indexed by depth.
    #[must_use]
    pub fn depth_histogram(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = Vec::new();
        for node in &self.nodes {
            let Ok(depth) = usize::try_from(node.depth) else {
                continue;
            };
            if counts.len() <= depth {
                counts.resize(depth + 1, 0);
            }
            counts[depth] += 1;
        }
        counts
    }

    /// Map from node id to its index in `nodes`.
    pub(crate) fn index_by_id(&self) -> HashMap<&str, usize> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.id.as_str(), idx))
            .collect()
    }

    /// Outgoing adjacency as node indices, in edge-declaration order.
    ///
    /// Edges whose endpoints are missing are skipped.
    pub(crate) fn child_indices(&self) -> Vec<Vec<usize>> {
        let index = self.index_by_id();
        let mut children = vec![Vec::new(); self.nodes.len()];
        for edge in &self.edges {
            if let (Some(&src), Some(&dst)) = (index.get(edge.source.as_str()), index.get(edge.target.as_str())) {
                children[src].push(dst);
            }
        }
        children
    }

    /// Reject duplicate ids and edges pointing at missing nodes.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check_references(&self) -> Result<(), GraphError> {
        let mut node_ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(GraphError::DuplicateNodeId(node.id.clone()));
            }
        }

        let mut edge_ids = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(GraphError::DuplicateEdgeId(edge.id.clone()));
            }
            for endpoint in [&edge.source, &edge.target] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(GraphError::DanglingEdge { edge: edge.id.clone(), node: endpoint.clone() });
                }
            }
        }
        Ok(())
    }

    /// Check every tree invariant: one root, one parent per node, all nodes
    /// reachable, `childIds`/`parentId` consistent with the edges, and
    /// `depth == parent depth + 1`.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), GraphError> {
        self.check_references()?;

        let mut incoming: HashMap<&str, &str> = HashMap::with_capacity(self.edges.len());
        for edge in &self.edges {
            if incoming.insert(edge.target.as_str(), edge.source.as_str()).is_some() {
                return Err(GraphError::MultipleParents { node: edge.target.clone() });
            }
        }

        let roots: Vec<&GraphNode> = self
            .nodes
            .iter()
            .filter(|n| !incoming.contains_key(n.id.as_str()))
            .collect();
        let root = match roots.as_slice() {
            [] => return Err(GraphError::MissingRoot),
            [root] => *root,
            many => return Err(GraphError::MultipleRoots(many.len())),
        };
        if root.depth != 0 {
            return Err(GraphError::DepthMismatch { node: root.id.clone(), expected: 0, actual: root.depth });
        }

        let index = self.index_by_id();
        for node in &self.nodes {
            let parent = incoming.get(node.id.as_str()).copied();
            if node.parent_id.as_deref() != parent {
                return Err(GraphError::ParentMismatch { node: node.id.clone() });
            }
            if !node.child_ids.iter().map(String::as_str).eq(self.children_of(&node.id)) {
                return Err(GraphError::ChildOrderMismatch { node: node.id.clone() });
            }
            if let Some(parent_node) = parent.and_then(|p| index.get(p)).map(|&idx| &self.nodes[idx]) {
                let expected = parent_node.depth.saturating_add(1);
                if node.depth != expected {
                    return Err(GraphError::DepthMismatch { node: node.id.clone(), expected, actual: node.depth });
                }
            }
        }

        let children = self.child_indices();
        let mut seen = vec![false; self.nodes.len()];
        let mut queue = VecDeque::new();
        if let Some(&root_idx) = index.get(root.id.as_str()) {
            seen[root_idx] = true;
            queue.push_back(root_idx);
        }
        while let Some(idx) = queue.pop_front() {
            for &child in &children[idx] {
                if !seen[child] {
                    seen[child] = true;
                    queue.push_back(child);
                }
            }
        }
        if let Some(idx) = seen.iter().position(|visited| !visited) {
            return Err(GraphError::Unreachable { node: self.nodes[idx].id.clone() });
        }

        Ok(())
    }
}

/// Entries of `candidates` not visited yet, marking them visited.
///
/// Used by traversals that must tolerate cycles and repeated edges in
/// externally edited graphs.
pub(crate) fn claim_unvisited(candidates: &[usize], visited: &mut [bool]) -> Vec<usize> {
    candidates
        .iter()
        .copied()
        .filter(|&idx| !std::mem::replace(&mut visited[idx], true))
        .collect()
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
