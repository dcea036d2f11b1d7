//! SVG rendering of a project's architecture graph.
//!
//! Geometry comes from `util::diagram::layout`; this component only maps
//! boxes and lines to SVG elements. Each diagram defines its own arrowhead
//! marker so several diagrams can share a page.

use leptos::prelude::*;

use crate::data::architectures::ProjectArchitecture;
use crate::util::diagram::{EdgeLine, NODE_HEIGHT, NODE_WIDTH, NodeBox, layout};

fn num(value: f64) -> String {
    format!("{value}")
}

#[component]
pub fn ArchitectureDiagram(
    arch: &'static ProjectArchitecture,
    #[prop(optional)] title: Option<&'static str>,
) -> impl IntoView {
    let diagram = layout(arch);
    let marker_id = format!("arrow-{}", arch.project_id);
    let marker_url = format!("url(#{marker_id})");
    let view_box = diagram.view_box();
    let label = title.map_or_else(|| format!("{} architecture", arch.project_id), |t| format!("{t} architecture"));

    let edges = diagram
        .edges
        .into_iter()
        .map(|edge| view! { <DiagramEdgeLine edge=edge marker=marker_url.clone()/> })
        .collect_view();
    let nodes = diagram.nodes.into_iter().map(|node| view! { <DiagramNodeBox node=node/> }).collect_view();

    view! {
        <figure class="diagram">
            {title.map(|t| view! { <figcaption class="diagram__title">{t} " Architecture"</figcaption> })}
            <div class="diagram__scroll">
                <svg class="diagram__svg" viewBox=view_box role="img" aria-label=label>
                    <defs>
                        <marker id=marker_id markerWidth="10" markerHeight="10" refX="9" refY="3" orient="auto">
                            <polygon points="0 0, 10 3, 0 6" fill="currentColor"></polygon>
                        </marker>
                    </defs>
                    {edges}
                    {nodes}
                </svg>
            </div>
        </figure>
    }
}

#[component]
fn DiagramEdgeLine(edge: EdgeLine, marker: String) -> impl IntoView {
    let (lx, ly) = edge.label_anchor();
    view! {
        <g class="diagram__edge">
            <line
                x1=num(edge.x1)
                y1=num(edge.y1)
                x2=num(edge.x2)
                y2=num(edge.y2)
                stroke="currentColor"
                stroke-width="2"
                opacity="0.6"
                marker-end=marker
            ></line>
            {edge.label.map(|text| {
                view! {
                    <text x=num(lx) y=num(ly) font-size="10" text-anchor="middle" fill="currentColor">
                        {text}
                    </text>
                }
            })}
        </g>
    }
}

#[component]
fn DiagramNodeBox(node: NodeBox) -> impl IntoView {
    let cx = num(node.center_x());
    let style = node.style;
    let dash = if style.dashed { "5,5" } else { "none" };
    let label_y = if node.logo.is_some() { node.y + 50.0 } else { node.center_y() + 4.0 };

    view! {
        <g class="diagram__node">
            <rect
                x=num(node.x)
                y=num(node.y)
                width=num(NODE_WIDTH)
                height=num(NODE_HEIGHT)
                rx=style.corner_radius.to_string()
                fill=style.fill
                stroke=style.border
                stroke-width="2"
                stroke-dasharray=dash
            ></rect>
            {node.logo.map(|logo| {
                view! {
                    <text x=cx.clone() y=num(node.y + 26.0) font-size="18" text-anchor="middle">
                        {logo}
                    </text>
                }
            })}
            <text x=cx.clone() y=num(label_y) font-size="13" font-weight="600" text-anchor="middle" fill=style.text>
                {node.label}
            </text>
            {node.description.map(|text| {
                view! {
                    <text x=cx y=num(node.y + 70.0) font-size="10" text-anchor="middle" fill=style.text opacity="0.8">
                        {text}
                    </text>
                }
            })}
        </g>
    }
}
