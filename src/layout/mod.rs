// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The layout engine: from a [`Layering`] to a [`Drawing`].
//!
//! The engine first sizes every vertex and justifies all layers to a common
//! width, then folds over the layers top to bottom. Each step routes the
//! edges entering the layer through a freshly sized edge zone, shifts the
//! layer below the zone, wraps its self-loops, and carries edges that
//! continue through dummy vertices forward as partial polylines. The fold is
//! a pure function of its inputs: the same layering and renderer always
//! produce an identical drawing.

mod edge_zone;
mod vertex_geometry;

use std::collections::BTreeMap;

use edge_zone::EdgeTrace;
use vertex_geometry::LayerGeometry;

use crate::content::ContentRenderer;
use crate::drawing::{Drawing, DrawingElement, EdgeElement, VertexElement};
use crate::geometry::Point;
use crate::graph::{Layering, Vertex, VertexId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// An edge endpoint had no computed geometry in the layer it should
    /// occupy. Signals a defect in the upstream layering stage.
    MissingGeometry { vertex: VertexId, layer: usize },
    /// A dummy vertex was reached with no partial polyline to continue.
    DanglingDummy { vertex: VertexId },
    /// A partial polyline was still in flight after the last layer.
    UnterminatedEdge { vertex: VertexId },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingGeometry { vertex, layer } => {
                write!(f, "vertex {vertex} has no geometry in layer {layer}")
            }
            Self::DanglingDummy { vertex } => {
                write!(f, "dummy vertex {vertex} has no in-flight polyline to continue")
            }
            Self::UnterminatedEdge { vertex } => {
                write!(
                    f,
                    "edge through dummy vertex {vertex} never reached a real destination \
                     before the last layer"
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Lays out a layered graph as boxes and polylines.
///
/// Inputs are read-only; all intermediate state is owned by this call, so
/// independent runs may execute concurrently without coordination.
pub fn layout_drawing<C, R: ContentRenderer<C>>(
    layering: &Layering<C>,
    renderer: &R,
) -> Result<Drawing, LayoutError> {
    let mut geometries = vertex_geometry::layer_geometries(layering, renderer);
    vertex_geometry::justify(&mut geometries);

    let mut state = AssemblyState::new();
    for (layer_index, geometry) in geometries.into_iter().enumerate() {
        state = assemble_layer(state, layering, renderer, layer_index, geometry)?;
    }

    if let Some(vertex) = state.in_flight.keys().next().copied() {
        return Err(LayoutError::UnterminatedEdge { vertex });
    }

    Ok(Drawing::new(state.elements))
}

/// State threaded through the per-layer fold.
#[derive(Debug)]
struct AssemblyState {
    prev: Option<LayerGeometry>,
    /// Lowest row occupied so far; the next edge zone starts one row below.
    prev_max_row: i32,
    /// Partial polylines of edges still travelling through dummy vertices,
    /// keyed by the dummy that will continue them.
    in_flight: BTreeMap<VertexId, Vec<Point>>,
    elements: Vec<DrawingElement>,
}

impl AssemblyState {
    fn new() -> Self {
        Self { prev: None, prev_max_row: -1, in_flight: BTreeMap::new(), elements: Vec::new() }
    }
}

/// One transition of the layer state machine.
fn assemble_layer<C, R: ContentRenderer<C>>(
    mut state: AssemblyState,
    layering: &Layering<C>,
    renderer: &R,
    layer_index: usize,
    mut geometry: LayerGeometry,
) -> Result<AssemblyState, LayoutError> {
    let layer = &layering.layers()[layer_index];

    // Edges entering this layer, in the order the layer sees their ports.
    let mut traces = Vec::<EdgeTrace>::new();
    for &dest in layer.vertices() {
        for &edge_id in layering.in_edges(dest) {
            let edge = layering.edge(edge_id);
            let source = edge.source();

            let source_geometry =
                state.prev.as_ref().and_then(|prev| prev.geometry(source)).ok_or(
                    LayoutError::MissingGeometry {
                        vertex: source,
                        layer: layer_index.saturating_sub(1),
                    },
                )?;
            let start =
                source_geometry.out_port(edge_id).expect("out port assigned for out edge").down(1);

            let finish = geometry
                .geometry(dest)
                .and_then(|dest_geometry| dest_geometry.in_port(edge_id))
                .ok_or(LayoutError::MissingGeometry { vertex: dest, layer: layer_index })?
                .up(1);

            traces.push(EdgeTrace {
                edge: edge_id,
                source,
                dest,
                start,
                finish,
                reversed: edge.reversed(),
            });
        }
    }

    // Size the zone above this layer, then drop the layer below it.
    let plan = edge_zone::plan_zone(&traces, geometry.loop_row_buffer());
    let zone_top = state.prev_max_row + 1;
    let layer_top = zone_top + plan.height();
    geometry.translate_rows(layer_top);

    let mut edge_elements = Vec::new();
    for trace in &traces {
        let finish = trace.finish.down(layer_top);

        let mut points = match layering.vertex(trace.source) {
            Vertex::Dummy => state
                .in_flight
                .remove(&trace.source)
                .ok_or(LayoutError::DanglingDummy { vertex: trace.source })?,
            Vertex::Real(_) => vec![trace.start],
        };

        let last = *points.last().expect("in-flight polylines are never empty");
        if last.col() == finish.col() {
            points.push(finish);
        } else {
            let bend_row = zone_top
                + plan.bend_offset(trace.edge).expect("bend row assigned for jogging edge");
            points.push(Point::new(bend_row, last.col()));
            points.push(Point::new(bend_row, finish.col()));
            points.push(finish);
        }

        match layering.vertex(trace.dest) {
            Vertex::Dummy => {
                // The final point belongs to the next layer's geometry; the
                // dummy continues the polyline from there.
                points.pop();
                state.in_flight.insert(trace.dest, points);
            }
            Vertex::Real(_) => {
                edge_elements.push(EdgeElement::new(
                    compress_polyline(&points),
                    trace.reversed,
                    !trace.reversed,
                ));
            }
        }
    }

    let mut vertex_elements = Vec::new();
    let mut loop_elements = Vec::new();
    for (vertex_id, vertex_geometry) in geometry.iter() {
        match layering.vertex(vertex_id) {
            Vertex::Dummy => {}
            Vertex::Real(real) => {
                let text = renderer.render(real.content(), vertex_geometry.interior());
                vertex_elements.push(VertexElement::new(vertex_geometry.region(), text));
                loop_elements.extend(self_loop_elements(vertex_geometry));
            }
        }
    }

    state.elements.extend(vertex_elements.into_iter().map(DrawingElement::Vertex));
    state.elements.extend(edge_elements.into_iter().map(DrawingElement::Edge));
    state.elements.extend(loop_elements.into_iter().map(DrawingElement::Edge));

    state.prev_max_row = geometry.max_row().unwrap_or(layer_top);
    state.prev = Some(geometry);

    Ok(state)
}

/// Wraparound polylines for one vertex's self-loops.
///
/// The innermost loop pairs the rightmost reserved ports; each further loop
/// swings one row lower, one row higher, and two columns further right, so
/// nested loops occupy strictly increasing, disjoint offsets outside the box.
fn self_loop_elements(geometry: &vertex_geometry::VertexGeometry) -> Vec<EdgeElement> {
    let region = geometry.region();
    let pairs = geometry.loop_out_ports().iter().rev().zip(geometry.loop_in_ports().iter().rev());

    pairs
        .enumerate()
        .map(|(nesting, (out_port, in_port))| {
            let nesting = nesting as i32;
            let below = region.bottom() + 1 + nesting;
            let above = region.top() - 1 - nesting;
            let swing_col = region.right() + 1 + 2 * nesting;

            let points = vec![
                Point::new(region.bottom() + 1, out_port.col()),
                Point::new(below, out_port.col()),
                Point::new(below, swing_col),
                Point::new(above, swing_col),
                Point::new(above, in_port.col()),
                Point::new(region.top() - 1, in_port.col()),
            ];

            EdgeElement::new(compress_polyline(&points), false, true)
        })
        .collect()
}

/// Drops repeated points and interior collinear points, keeping endpoints and
/// direction changes.
fn compress_polyline(path: &[Point]) -> Vec<Point> {
    let mut points = Vec::with_capacity(path.len());
    for point in path {
        if points.last() != Some(point) {
            points.push(*point);
        }
    }

    if points.len() <= 2 {
        return points;
    }

    let direction =
        |a: Point, b: Point| ((b.row() - a.row()).signum(), (b.col() - a.col()).signum());

    let mut out = vec![points[0]];
    let mut prev_direction = direction(points[0], points[1]);
    for index in 1..points.len() - 1 {
        let next_direction = direction(points[index], points[index + 1]);
        if next_direction != prev_direction {
            out.push(points[index]);
            prev_direction = next_direction;
        }
    }
    out.push(points[points.len() - 1]);

    out
}
