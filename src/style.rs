//! Depth-tier style defaults for mindmap nodes and edges.
//!
//! Every node created by the parser receives the style of its depth tier.
//! These are defaults only; the editor may override any field afterwards.

use serde::{Deserialize, Serialize};

/// Node outline shape understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Rectangle,
    Circle,
    Diamond,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Drop shadow strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shadow {
    None,
    Sm,
    Md,
    Lg,
}

/// Arrow marker drawn at the target end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArrowMarker {
    None,
    Arrow,
    ArrowClosed,
}

/// Visual attributes of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub shape: NodeShape,
    pub fill_color: String,
    pub text_color: String,
    pub border_color: String,
    pub font_weight: FontWeight,
    pub font_size: f64,
    pub border_width: f64,
    pub border_radius: f64,
    pub shadow: Shadow,
}

/// Presentation hints for an edge. Not used by parsing or layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub marker: ArrowMarker,
}

impl Default for NodeStyle {
    fn default() -> Self {
        DepthTier::Leaf.node_style()
    }
}

impl Default for EdgeStyle {
    fn default() -> Self {
        edge_style_for_depth(3)
    }
}

/// Nesting bucket used to pick default styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthTier {
    Root,
    Primary,
    SubTopic,
    Leaf,
}

impl DepthTier {
    /// Tier for a node at `depth` (0 = root). Everything past depth 2 is a leaf.
    #[must_use]
    pub fn for_depth(depth: u32) -> Self {
        tier_entry(depth).tier
    }

    /// Default node style for this tier.
    #[must_use]
    pub fn node_style(self) -> NodeStyle {
        let depth = match self {
            Self::Root => 0,
            Self::Primary => 1,
            Self::SubTopic => 2,
            Self::Leaf => 3,
        };
        tier_entry(depth).node_style()
    }
}

struct TierStyle {
    tier: DepthTier,
    shape: NodeShape,
    fill: &'static str,
    text: &'static str,
    border: &'static str,
    weight: FontWeight,
    font_size: f64,
    border_width: f64,
    border_radius: f64,
    shadow: Shadow,
    edge_width: f64,
}

impl TierStyle {
    fn node_style(&self) -> NodeStyle {
        NodeStyle {
            shape: self.shape,
            fill_color: self.fill.to_owned(),
            text_color: self.text.to_owned(),
            border_color: self.border.to_owned(),
            font_weight: self.weight,
            font_size: self.font_size,
            border_width: self.border_width,
            border_radius: self.border_radius,
            shadow: self.shadow,
        }
    }
}

// Ordered by depth; lookups clamp to the last entry.
static TIERS: [TierStyle; 4] = [
    TierStyle {
        tier: DepthTier::Root,
        shape: NodeShape::Circle,
        fill: "#C2410C",
        text: "#FFFFFF",
        border: "#7C2D12",
        weight: FontWeight::Bold,
        font_size: 20.0,
        border_width: 3.0,
        border_radius: 999.0,
        shadow: Shadow::Lg,
        edge_width: 3.0,
    },
    TierStyle {
        tier: DepthTier::Primary,
        shape: NodeShape::Rectangle,
        fill: "#F97316",
        text: "#FFFFFF",
        border: "#EA580C",
        weight: FontWeight::Bold,
        font_size: 16.0,
        border_width: 2.0,
        border_radius: 12.0,
        shadow: Shadow::Md,
        edge_width: 2.5,
    },
    TierStyle {
        tier: DepthTier::SubTopic,
        shape: NodeShape::Rectangle,
        fill: "#FBBF24",
        text: "#451A03",
        border: "#D97706",
        weight: FontWeight::Bold,
        font_size: 14.0,
        border_width: 2.0,
        border_radius: 10.0,
        shadow: Shadow::Sm,
        edge_width: 2.0,
    },
    TierStyle {
        tier: DepthTier::Leaf,
        shape: NodeShape::Rectangle,
        fill: "#FEF08A",
        text: "#1F2937",
        border: "#EAB308",
        weight: FontWeight::Normal,
        font_size: 12.0,
        border_width: 1.0,
        border_radius: 8.0,
        shadow: Shadow::None,
        edge_width: 1.5,
    },
];

fn tier_entry(depth: u32) -> &'static TierStyle {
    let idx = usize::try_from(depth).map_or(TIERS.len() - 1, |d| d.min(TIERS.len() - 1));
    &TIERS[idx]
}

/// Default style for a node created at `depth`.
#[must_use]
pub fn node_style_for_depth(depth: u32) -> NodeStyle {
    tier_entry(depth).node_style()
}

/// Default style for the edge leading into a node at `child_depth`.
///
/// The stroke takes the parent tier's border color so branches read as one
/// color family.
#[must_use]
pub fn edge_style_for_depth(child_depth: u32) -> EdgeStyle {
    let parent = tier_entry(child_depth.saturating_sub(1));
    let child = tier_entry(child_depth);
    EdgeStyle { stroke: parent.border.to_owned(), stroke_width: child.edge_width, marker: ArrowMarker::ArrowClosed }
}

#[cfg(test)]
#[path = "style_test.rs"]
mod tests;
