//! Layout math for architecture diagrams.
//!
//! Nodes are placed on a fixed four-column grid in declaration order. Edges
//! run from the right edge of their source box to the left edge of their
//! target box; edges naming an unknown node are dropped.

#[cfg(test)]
#[path = "diagram_test.rs"]
mod diagram_test;

use std::collections::HashMap;

use crate::data::architectures::{NodeKind, ProjectArchitecture};

pub const GRID_COLUMNS: usize = 4;
pub const COLUMN_PITCH: f64 = 250.0;
pub const ROW_PITCH: f64 = 150.0;
pub const NODE_WIDTH: f64 = 180.0;
pub const NODE_HEIGHT: f64 = 84.0;
pub const DIAGRAM_PADDING: f64 = 24.0;
const EDGE_LABEL_LIFT: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeStyle {
    pub fill: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub corner_radius: u8,
    pub dashed: bool,
}

/// Colours for a node kind; `color` overrides fill and border.
#[must_use]
pub fn node_style(kind: NodeKind, color: Option<&'static str>) -> NodeStyle {
    let (fill, border, text, corner_radius, dashed) = match kind {
        NodeKind::Process => ("#FCD34D", "#F59E0B", "#1F2937", 8, false),
        NodeKind::Database => ("#E5E7EB", "#9CA3AF", "#1F2937", 12, false),
        NodeKind::Service => ("#93C5FD", "#3B82F6", "#1F2937", 8, false),
        NodeKind::Tool => ("#FCA5A5", "#EF4444", "#1F2937", 8, false),
        NodeKind::Group => ("#F3F4F6", "#D1D5DB", "#6B7280", 8, true),
    };
    NodeStyle {
        fill: color.unwrap_or(fill),
        border: color.unwrap_or(border),
        text,
        corner_radius,
        dashed,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeBox {
    pub id: &'static str,
    pub label: &'static str,
    pub logo: Option<&'static str>,
    pub description: Option<&'static str>,
    pub x: f64,
    pub y: f64,
    pub style: NodeStyle,
}

impl NodeBox {
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + NODE_WIDTH / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + NODE_HEIGHT / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub label: Option<&'static str>,
}

impl EdgeLine {
    /// Anchor for the edge label: midpoint, lifted above the line.
    #[must_use]
    pub fn label_anchor(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0 - EDGE_LABEL_LIFT)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagramLayout {
    pub nodes: Vec<NodeBox>,
    pub edges: Vec<EdgeLine>,
    pub width: f64,
    pub height: f64,
}

impl DiagramLayout {
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Grid position (column, row) of the node at `index`.
#[must_use]
pub fn grid_cell(index: usize) -> (usize, usize) {
    (index % GRID_COLUMNS, index / GRID_COLUMNS)
}

#[allow(clippy::cast_precision_loss)]
fn cell_origin(index: usize) -> (f64, f64) {
    let (col, row) = grid_cell(index);
    (
        DIAGRAM_PADDING + col as f64 * COLUMN_PITCH,
        DIAGRAM_PADDING + row as f64 * ROW_PITCH,
    )
}

/// Lay out every node and every resolvable edge of `arch`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout(arch: &ProjectArchitecture) -> DiagramLayout {
    if arch.nodes.is_empty() {
        return DiagramLayout::default();
    }

    let nodes: Vec<NodeBox> = arch
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let (x, y) = cell_origin(i);
            NodeBox {
                id: node.id,
                label: node.label,
                logo: node.logo,
                description: node.description,
                x,
                y,
                style: node_style(node.kind, node.color),
            }
        })
        .collect();

    let by_id: HashMap<&str, &NodeBox> = nodes.iter().map(|n| (n.id, n)).collect();
    let edges = arch
        .edges
        .iter()
        .filter_map(|edge| {
            let from = by_id.get(edge.from)?;
            let to = by_id.get(edge.to)?;
            Some(EdgeLine {
                x1: from.x + NODE_WIDTH,
                y1: from.center_y(),
                x2: to.x,
                y2: to.center_y(),
                label: edge.label,
            })
        })
        .collect();

    let columns = nodes.len().min(GRID_COLUMNS);
    let rows = nodes.len().div_ceil(GRID_COLUMNS);
    let width = 2.0 * DIAGRAM_PADDING + (columns - 1) as f64 * COLUMN_PITCH + NODE_WIDTH;
    let height = 2.0 * DIAGRAM_PADDING + (rows - 1) as f64 * ROW_PITCH + NODE_HEIGHT;

    DiagramLayout { nodes, edges, width, height }
}
