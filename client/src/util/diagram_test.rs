use super::*;
use crate::data::architectures::{ARCHITECTURES, DiagramEdge, DiagramNode};

const fn plain(id: &'static str) -> DiagramNode {
    DiagramNode { id, label: id, kind: NodeKind::Process, color: None, logo: None, description: None }
}

const FIVE_NODES: &[DiagramNode] = &[plain("a"), plain("b"), plain("c"), plain("d"), plain("e")];

// =============================================================
// grid placement
// =============================================================

#[test]
fn grid_cell_wraps_after_four_columns() {
    assert_eq!(grid_cell(0), (0, 0));
    assert_eq!(grid_cell(3), (3, 0));
    assert_eq!(grid_cell(4), (0, 1));
    assert_eq!(grid_cell(9), (1, 2));
}

#[test]
fn layout_places_nodes_on_grid_pitch() {
    let arch = ProjectArchitecture { project_id: "t", nodes: FIVE_NODES, edges: &[] };
    let out = layout(&arch);
    assert_eq!(out.nodes.len(), 5);
    assert_eq!((out.nodes[0].x, out.nodes[0].y), (DIAGRAM_PADDING, DIAGRAM_PADDING));
    assert_eq!(out.nodes[1].x, DIAGRAM_PADDING + COLUMN_PITCH);
    assert_eq!((out.nodes[4].x, out.nodes[4].y), (DIAGRAM_PADDING, DIAGRAM_PADDING + ROW_PITCH));
}

#[test]
fn layout_size_fits_grid() {
    let arch = ProjectArchitecture { project_id: "t", nodes: FIVE_NODES, edges: &[] };
    let out = layout(&arch);
    assert_eq!(out.width, 2.0 * DIAGRAM_PADDING + 3.0 * COLUMN_PITCH + NODE_WIDTH);
    assert_eq!(out.height, 2.0 * DIAGRAM_PADDING + ROW_PITCH + NODE_HEIGHT);
    assert_eq!(out.view_box(), format!("0 0 {} {}", out.width, out.height));
}

#[test]
fn layout_of_single_row_is_narrow() {
    let arch = ProjectArchitecture { project_id: "t", nodes: &FIVE_NODES[..2], edges: &[] };
    let out = layout(&arch);
    assert_eq!(out.width, 2.0 * DIAGRAM_PADDING + COLUMN_PITCH + NODE_WIDTH);
    assert_eq!(out.height, 2.0 * DIAGRAM_PADDING + NODE_HEIGHT);
}

#[test]
fn empty_architecture_has_empty_layout() {
    let arch = ProjectArchitecture { project_id: "t", nodes: &[], edges: &[] };
    assert_eq!(layout(&arch), DiagramLayout::default());
}

// =============================================================
// edges
// =============================================================

#[test]
fn edges_run_from_right_edge_to_left_edge() {
    let edges = &[DiagramEdge { from: "a", to: "b", label: Some("flow") }];
    let arch = ProjectArchitecture { project_id: "t", nodes: FIVE_NODES, edges };
    let out = layout(&arch);
    let edge = &out.edges[0];
    assert_eq!(edge.x1, out.nodes[0].x + NODE_WIDTH);
    assert_eq!(edge.y1, out.nodes[0].center_y());
    assert_eq!(edge.x2, out.nodes[1].x);
    assert_eq!(edge.y2, out.nodes[1].center_y());
    assert_eq!(edge.label, Some("flow"));
}

#[test]
fn edge_label_sits_above_midpoint() {
    let edge = EdgeLine { x1: 0.0, y1: 10.0, x2: 100.0, y2: 30.0, label: None };
    assert_eq!(edge.label_anchor(), (50.0, 12.0));
}

#[test]
fn edges_with_unknown_nodes_are_skipped() {
    let edges = &[
        DiagramEdge { from: "a", to: "missing", label: None },
        DiagramEdge { from: "c", to: "d", label: None },
    ];
    let arch = ProjectArchitecture { project_id: "t", nodes: FIVE_NODES, edges };
    assert_eq!(layout(&arch).edges.len(), 1);
}

#[test]
fn shipped_architectures_lay_out_every_edge() {
    for arch in ARCHITECTURES {
        assert_eq!(layout(arch).edges.len(), arch.edges.len(), "{}", arch.project_id);
    }
}

// =============================================================
// styles
// =============================================================

#[test]
fn node_style_by_kind() {
    assert_eq!(node_style(NodeKind::Service, None).border, "#3B82F6");
    assert_eq!(node_style(NodeKind::Database, None).corner_radius, 12);
    assert!(node_style(NodeKind::Group, None).dashed);
    assert!(!node_style(NodeKind::Tool, None).dashed);
}

#[test]
fn node_style_color_override() {
    let style = node_style(NodeKind::Tool, Some("#123456"));
    assert_eq!(style.fill, "#123456");
    assert_eq!(style.border, "#123456");
    assert_eq!(style.text, "#1F2937");
}
