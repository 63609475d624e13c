// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-vertex geometry: box sizing, port assignment, packing, justification.
//!
//! This pass runs once over every layer before any edge is routed. Rows are
//! provisional (each layer starts at row 0) until the assembly loop knows how
//! tall the edge zone above the layer is; columns become final here.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::content::ContentRenderer;
use crate::geometry::{Dimension, Point, Region};
use crate::graph::{EdgeId, Layering, Vertex, VertexId};

/// Geometry of a single vertex: its box, the box plus self-loop clearance,
/// and one port point per connected edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VertexGeometry {
    region: Region,
    greater_region: Region,
    in_ports: BTreeMap<EdgeId, Point>,
    out_ports: BTreeMap<EdgeId, Point>,
    loop_in_ports: Vec<Point>,
    loop_out_ports: Vec<Point>,
}

impl VertexGeometry {
    pub(crate) fn region(&self) -> Region {
        self.region
    }

    /// Box region expanded right and down by the clearance the vertex's
    /// self-loops will occupy. Packing and justification space vertices by
    /// greater regions so the wraparounds never collide with a neighbour.
    pub(crate) fn greater_region(&self) -> Region {
        self.greater_region
    }

    /// Interior cells available to rendered content.
    pub(crate) fn interior(&self) -> Dimension {
        Dimension::new(self.region.height() - 2, self.region.width() - 2)
    }

    pub(crate) fn in_port(&self, edge: EdgeId) -> Option<Point> {
        self.in_ports.get(&edge).copied()
    }

    pub(crate) fn out_port(&self, edge: EdgeId) -> Option<Point> {
        self.out_ports.get(&edge).copied()
    }

    pub(crate) fn in_ports(&self) -> impl Iterator<Item = (EdgeId, Point)> + '_ {
        self.in_ports.iter().map(|(edge, point)| (*edge, *point))
    }

    pub(crate) fn out_ports(&self) -> impl Iterator<Item = (EdgeId, Point)> + '_ {
        self.out_ports.iter().map(|(edge, point)| (*edge, *point))
    }

    /// Reserved self-loop entry ports on the top edge, left to right.
    pub(crate) fn loop_in_ports(&self) -> &[Point] {
        &self.loop_in_ports
    }

    /// Reserved self-loop exit ports on the bottom edge, left to right.
    pub(crate) fn loop_out_ports(&self) -> &[Point] {
        &self.loop_out_ports
    }

    pub(crate) fn translate(&mut self, rows: i32, cols: i32) {
        self.region = self.region.translate(rows, cols);
        self.greater_region = self.greater_region.translate(rows, cols);
        for point in self.in_ports.values_mut() {
            *point = point.translate(rows, cols);
        }
        for point in self.out_ports.values_mut() {
            *point = point.translate(rows, cols);
        }
        for point in self.loop_in_ports.iter_mut() {
            *point = point.translate(rows, cols);
        }
        for point in self.loop_out_ports.iter_mut() {
            *point = point.translate(rows, cols);
        }
    }
}

/// Geometry of one layer, in the layer's fixed vertex order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LayerGeometry {
    order: Vec<VertexId>,
    vertices: BTreeMap<VertexId, VertexGeometry>,
    loop_row_buffer: i32,
}

impl LayerGeometry {
    pub(crate) fn geometry(&self, vertex: VertexId) -> Option<&VertexGeometry> {
        self.vertices.get(&vertex)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (VertexId, &VertexGeometry)> {
        self.order.iter().map(|id| (*id, &self.vertices[id]))
    }

    /// Rows the layer's self-loops need above its boxes.
    pub(crate) fn loop_row_buffer(&self) -> i32 {
        self.loop_row_buffer
    }

    /// Lowest row occupied by any greater region, if the layer has vertices.
    pub(crate) fn max_row(&self) -> Option<i32> {
        self.vertices.values().map(|geometry| geometry.greater_region.bottom()).max()
    }

    #[cfg(test)]
    pub(crate) fn max_col(&self) -> Option<i32> {
        self.vertices.values().map(|geometry| geometry.greater_region.right()).max()
    }

    /// Width of the layer as packed: greater widths plus one gap per vertex.
    pub(crate) fn packed_width(&self) -> i32 {
        let occupied: i32 =
            self.vertices.values().map(|geometry| geometry.greater_region.width()).sum();
        occupied + self.order.len() as i32
    }

    pub(crate) fn translate_rows(&mut self, rows: i32) {
        for geometry in self.vertices.values_mut() {
            geometry.translate(rows, 0);
        }
    }
}

/// Builds provisional geometry for every layer: boxes sized, ports assigned,
/// vertices packed left-to-right with a one-cell gap (self-looping vertices
/// pack by their wider greater region).
pub(crate) fn layer_geometries<C, R: ContentRenderer<C>>(
    layering: &Layering<C>,
    renderer: &R,
) -> Vec<LayerGeometry> {
    layering
        .layers()
        .iter()
        .map(|layer| {
            let mut order = Vec::with_capacity(layer.len());
            let mut vertices = BTreeMap::new();
            let mut loop_row_buffer = 0i32;
            let mut cursor = 0i32;

            for &vertex_id in layer.vertices() {
                let geometry = vertex_geometry(layering, renderer, vertex_id, cursor);
                cursor += geometry.greater_region.width() + 1;
                loop_row_buffer = loop_row_buffer.max(layering.self_loops(vertex_id) as i32);
                order.push(vertex_id);
                vertices.insert(vertex_id, geometry);
            }

            LayerGeometry { order, vertices, loop_row_buffer }
        })
        .collect()
}

/// Stretches every layer to the diagram width (the widest packed layer),
/// spreading the slack into equal gaps before and between vertices. Returns
/// the diagram width.
///
/// A local, linear-time substitute for true width balancing: very uneven
/// layers come out sparse rather than optimally balanced.
pub(crate) fn justify(geometries: &mut [LayerGeometry]) -> i32 {
    let width = geometries.iter().map(LayerGeometry::packed_width).max().unwrap_or(0);

    for layer in geometries.iter_mut() {
        let count = layer.order.len() as i32;
        if count == 0 {
            continue;
        }

        let occupied: i32 =
            layer.vertices.values().map(|geometry| geometry.greater_region.width()).sum();
        let gap = ((width - occupied) / (count + 1)).max(1);

        let order = layer.order.clone();
        let mut cursor = gap;
        for id in order {
            let geometry = layer.vertices.get_mut(&id).expect("vertex in own layer");
            let shift = cursor - geometry.greater_region.left();
            geometry.translate(0, shift);
            cursor += geometry.greater_region.width() + gap;
        }
    }

    width
}

fn vertex_geometry<C, R: ContentRenderer<C>>(
    layering: &Layering<C>,
    renderer: &R,
    vertex_id: VertexId,
    left: i32,
) -> VertexGeometry {
    let in_edges = layering.in_edges(vertex_id);
    let out_edges = layering.out_edges(vertex_id);
    let loops = layering.self_loops(vertex_id) as i32;

    let dimension = match layering.vertex(vertex_id) {
        // A dummy is a pass-through bend point, not a rendered box.
        Vertex::Dummy => Dimension::new(1, 1),
        Vertex::Real(real) => {
            let preferred = renderer.preferred_size(real.content());
            let in_width = (in_edges.len() as i32 + loops) * 2 + 3;
            let out_width = (out_edges.len() as i32 + loops) * 2 + 3;
            Dimension::new(
                (preferred.height() + 2).max(3),
                in_width.max(out_width).max(preferred.width() + 2),
            )
        }
    };

    let region = Region::new(Point::new(0, left), dimension);
    let (in_ports, loop_in_ports) = side_ports(region.top(), left, region.width(), in_edges, loops);
    let (out_ports, loop_out_ports) =
        side_ports(region.bottom(), left, region.width(), out_edges, loops);

    VertexGeometry {
        region,
        greater_region: region.expand_right(2 * loops).expand_down(loops),
        in_ports,
        out_ports,
        loop_in_ports,
        loop_out_ports,
    }
}

fn side_ports(
    row: i32,
    left: i32,
    width: i32,
    edges: &[EdgeId],
    loops: i32,
) -> (BTreeMap<EdgeId, Point>, Vec<Point>) {
    let offsets = port_offsets(edges.len() + loops as usize, width);

    let mut ports = BTreeMap::new();
    for (edge, offset) in edges.iter().zip(offsets.iter()) {
        ports.insert(*edge, Point::new(row, left + offset));
    }

    // Self-loop ports take the rightmost slots, past every real port.
    let loop_ports =
        offsets[edges.len()..].iter().map(|offset| Point::new(row, left + offset)).collect();

    (ports, loop_ports)
}

/// Spreads `count` ports evenly along an edge of `width` cells, centred as a
/// group even when the box is wider than the ports strictly need.
fn port_offsets(count: usize, width: i32) -> SmallVec<[i32; 8]> {
    let slots = count as i32 + 1;
    let factor = width / slots;
    let centraliser = (width - factor * slots) / 2;

    (1..=count as i32).map(|i| i * factor + centraliser).collect()
}
