use super::*;
use crate::sanitize::PLACEHOLDER_LABEL;
use crate::style::{FontWeight, NodeShape};

fn labels(graph: &MindmapGraph) -> Vec<&str> {
    graph.nodes.iter().map(|n| n.label.as_str()).collect()
}

#[test]
fn parse_root_and_branches() {
    let input = r"
mindmap
  root((Biology))
    Cells
      Organelles
    Genetics
";
    let graph = parse(input);
    assert_eq!(labels(&graph), vec!["Biology", "Cells", "Organelles", "Genetics"]);
    assert_eq!(graph.edges.len(), 3);
    assert_eq!(graph.nodes[0].id, ROOT_ID);
    assert_eq!(graph.nodes[0].child_ids, vec!["node-1", "node-3"]);
    assert_eq!(graph.nodes[1].child_ids, vec!["node-2"]);
    assert_eq!(graph.nodes[2].parent_id.as_deref(), Some("node-1"));
    graph.validate().unwrap();
}

#[test]
fn parse_assigns_depth_from_indent() {
    let input = "root((R))\n  a\n    b\n      c\n        d\n  e";
    let graph = parse(input);
    let depths: Vec<u32> = graph.nodes.iter().map(|n| n.depth).collect();
    assert_eq!(depths, vec![0, 1, 2, 3, 4, 1]);
    assert_eq!(graph.depth_histogram(), vec![1, 2, 1, 1, 1]);
}

#[test]
fn parse_levels_are_relative_to_root_line() {
    let flush = parse("root((R))\n  a\n    b");
    let indented = parse("mindmap\n    root((R))\n      a\n        b");
    assert_eq!(flush.depth_histogram(), indented.depth_histogram());
    assert_eq!(labels(&flush), labels(&indented));
}

#[test]
fn parse_ignores_comments_directives_and_header() {
    let input = r"
%%{init: {'theme': 'forest'}}%%
mindmap
  %% a comment
  root((Topic))

    Branch
    ::icon(fa fa-book)
    :::urgent
";
    let graph = parse(input);
    assert_eq!(labels(&graph), vec!["Topic", "Branch"]);
}

#[test]
fn parse_keeps_header_word_after_the_first_line() {
    let graph = parse("mindmap\n  root((R))\n    Tools\n      mindmap\n      MINDMAP");
    assert_eq!(labels(&graph), vec!["R", "Tools", "mindmap", "MINDMAP"]);
    assert_eq!(graph.depth_histogram(), vec![1, 1, 2]);
}

#[test]
fn parse_skips_header_only_once() {
    let graph = parse("%% comment\n\nmindmap\nmindmap\nroot((R))\n  a");
    assert_eq!(labels(&graph), vec!["R", "a"]);
}

#[test]
fn parse_keeps_content_lines_that_mention_the_header_word() {
    let graph = parse("root((R))\n  Mindmap techniques");
    assert_eq!(labels(&graph), vec!["R", "Mindmap techniques"]);
}

#[test]
fn parse_styles_nodes_by_depth_tier() {
    let graph = parse("root((R))\n  primary\n    sub\n      leaf\n        deeper leaf");
    assert_eq!(graph.nodes[0].style.shape, NodeShape::Circle);
    assert_eq!(graph.nodes[1].style, node_style_for_depth(1));
    assert_eq!(graph.nodes[1].style.font_weight, FontWeight::Bold);
    assert_eq!(graph.nodes[2].style, node_style_for_depth(2));
    assert_eq!(graph.nodes[3].style.font_weight, FontWeight::Normal);
    assert_eq!(graph.nodes[4].style, graph.nodes[3].style);
}

#[test]
fn parse_sanitizes_labels_and_shapes() {
    let input = "root((🎯 **Physics**))\n  a[Mechanics]\n  b((Waves))\n  \"Optics\"\n  ((()))";
    let graph = parse(input);
    assert_eq!(labels(&graph), vec!["Physics", "Mechanics", "Waves", "Optics", PLACEHOLDER_LABEL]);
}

#[test]
fn parse_drops_level_jump_after_root() {
    let graph = parse("root((R))\n      too deep");
    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.edges.is_empty());
}

#[test]
fn parse_drops_subtree_under_a_dropped_line() {
    let input = "root((R))\n  a\n        jump\n          jump child\n    b";
    let graph = parse(input);
    assert_eq!(labels(&graph), vec!["R", "a", "b"]);
    assert_eq!(graph.nodes[2].parent_id.as_deref(), Some("node-1"));
    graph.validate().unwrap();
}

#[test]
fn parse_drops_lines_not_deeper_than_root_but_keeps_later_lines() {
    let input = "  root((R))\n    a\n  stray\nflush\n      a child";
    let graph = parse(input);
    assert_eq!(labels(&graph), vec!["R", "a", "a child"]);
    assert_eq!(graph.nodes[2].parent_id.as_deref(), Some("node-1"));
}

#[test]
fn parse_ignores_lines_before_the_root() {
    let graph = parse("  orphan\nroot((R))\n  a");
    assert_eq!(labels(&graph), vec!["R", "a"]);
}

#[test]
fn parse_synthesizes_root_when_missing() {
    let input = "mindmap\n  Alpha\n    Alpha one\n  Beta";
    let graph = parse(input);
    assert_eq!(graph.nodes[0].id, ROOT_ID);
    assert_eq!(graph.nodes[0].label, DEFAULT_ROOT_LABEL);
    assert_eq!(graph.depth_histogram(), vec![1, 2, 1]);
    graph.validate().unwrap();
}

#[test]
fn parse_empty_input_yields_lone_root() {
    let graph = parse("");
    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].label, DEFAULT_ROOT_LABEL);
    assert!(graph.edges.is_empty());
}

#[test]
fn parse_treats_tab_as_one_level() {
    let graph = parse("root((R))\n\ta\n\t\tb");
    assert_eq!(graph.depth_histogram(), vec![1, 1, 1]);
}

#[test]
fn parse_with_custom_indent_width() {
    let input = "root((R))\n    a\n        b\n  half step";
    let graph = parse_with(input, ParseOptions { indent_width: 4 });
    assert_eq!(labels(&graph), vec!["R", "a", "b"]);
    assert_eq!(graph.depth_histogram(), vec![1, 1, 1]);
}

#[test]
fn parse_odd_widths_round_down() {
    let graph = parse("root((R))\n   a\n     b");
    assert_eq!(graph.depth_histogram(), vec![1, 1, 1]);
}

#[test]
fn parse_edges_point_parent_to_child() {
    let graph = parse("root((R))\n  a\n    b");
    assert_eq!(graph.edges[0].source, ROOT_ID);
    assert_eq!(graph.edges[0].target, "node-1");
    assert_eq!(graph.edges[0].id, "edge-root-node-1");
    assert_eq!(graph.edges[1].source, "node-1");
    assert_eq!(graph.edges[1].target, "node-2");
}

#[test]
fn parse_output_always_satisfies_tree_invariants() {
    let inputs = [
        "root((R))\n  a\n    b\n  c\n      bad\n    d\n  e",
        "x\n  y\n z\n      w\n  v",
        "%% only a comment",
        "root((R))\n\n\n  a\n  a\n  a",
        "  root((R))\nroot\n    a\n      b\n        c\n    d",
    ];
    for input in inputs {
        let graph = parse(input);
        graph.validate().unwrap();
        assert_eq!(graph.edges.len(), graph.nodes.len() - 1);
    }
}

#[test]
fn parse_bytes_accepts_utf8() {
    let graph = parse_bytes("root((Café))\n  Menu".as_bytes()).unwrap();
    assert_eq!(labels(&graph), vec!["Café", "Menu"]);
}

#[test]
fn parse_bytes_rejects_non_text() {
    let err = parse_bytes(&[0x72, 0x6f, 0xff, 0xfe]).unwrap_err();
    assert!(matches!(err, GraphError::InvalidUtf8(_)));
}
