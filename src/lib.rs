//! Mindmap outline compiler.
//!
//! Converts Mermaid-style `mindmap` outline text into a styled node/edge graph,
//! lays the graph out radially around its root, and turns graphs (including
//! ones edited on the canvas) back into outline text.
//!
//! ```
//! let mut graph = mindmap::parse("mindmap\n  root((Biology))\n    Cells\n    Genetics");
//! mindmap::layout(&mut graph);
//! assert!(graph.nodes.iter().all(|n| n.position.is_some()));
//! assert!(mindmap::generate(&graph).starts_with("mindmap\n  root((🎯 Biology))"));
//! ```
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`parse`] | Outline text → graph, indentation-driven |
//! | [`layout`] | Radial coordinates for every reachable node |
//! | [`generate`] | Graph → outline text, nesting from edges |
//! | [`graph`] | Node/edge model, JSON interchange, invariant checks |
//! | [`style`] | Depth-tier style defaults |
//! | [`sanitize`] | Label cleanup and Mermaid shape extraction |
//! | [`config`] | Environment-driven configuration |

pub mod config;
pub mod generate;
pub mod graph;
pub mod layout;
pub mod parse;
pub mod sanitize;
pub mod style;

pub use config::{CompilerConfig, ConfigError};
pub use generate::generate;
pub use graph::{GraphEdge, GraphError, GraphNode, MindmapGraph, Position, ROOT_ID};
pub use layout::{LayoutConfig, layout, layout_with};
pub use parse::{ParseOptions, parse, parse_bytes, parse_bytes_with, parse_with};
pub use sanitize::sanitize_label;
pub use style::{DepthTier, EdgeStyle, NodeStyle};

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
