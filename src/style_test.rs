use super::*;

#[test]
fn depth_maps_onto_tiers() {
    assert_eq!(DepthTier::for_depth(0), DepthTier::Root);
    assert_eq!(DepthTier::for_depth(1), DepthTier::Primary);
    assert_eq!(DepthTier::for_depth(2), DepthTier::SubTopic);
    assert_eq!(DepthTier::for_depth(3), DepthTier::Leaf);
    assert_eq!(DepthTier::for_depth(42), DepthTier::Leaf);
    assert_eq!(DepthTier::for_depth(u32::MAX), DepthTier::Leaf);
}

#[test]
fn root_is_a_circle() {
    assert_eq!(node_style_for_depth(0).shape, NodeShape::Circle);
}

#[test]
fn primary_tier_is_bold_orange_and_larger_than_sub_topic() {
    let primary = node_style_for_depth(1);
    let sub = node_style_for_depth(2);
    assert_eq!(primary.font_weight, FontWeight::Bold);
    assert_eq!(primary.fill_color, "#F97316");
    assert!(primary.font_size > sub.font_size);
}

#[test]
fn sub_topic_tier_uses_amber_palette() {
    assert_eq!(node_style_for_depth(2).fill_color, "#FBBF24");
}

#[test]
fn leaf_tier_is_normal_weight_with_dark_text() {
    let leaf = node_style_for_depth(5);
    assert_eq!(leaf.font_weight, FontWeight::Normal);
    assert_eq!(leaf.fill_color, "#FEF08A");
    assert_eq!(leaf.text_color, "#1F2937");
}

#[test]
fn tier_node_style_matches_depth_lookup() {
    assert_eq!(DepthTier::Primary.node_style(), node_style_for_depth(1));
    assert_eq!(DepthTier::Leaf.node_style(), node_style_for_depth(9));
}

#[test]
fn edge_stroke_follows_parent_border() {
    let edge = edge_style_for_depth(1);
    assert_eq!(edge.stroke, node_style_for_depth(0).border_color);
    assert_eq!(edge.marker, ArrowMarker::ArrowClosed);
    assert!(edge_style_for_depth(1).stroke_width > edge_style_for_depth(4).stroke_width);
}

#[test]
fn node_style_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(node_style_for_depth(1)).unwrap();
    assert_eq!(value["shape"], "rectangle");
    assert_eq!(value["fillColor"], "#F97316");
    assert_eq!(value["fontWeight"], "bold");
    assert_eq!(value["shadow"], "md");
}
