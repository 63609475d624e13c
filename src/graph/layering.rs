// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The layered-graph input model.
//!
//! A [`Layering`] is the hand-off contract with the upstream layering stage:
//! ordered layers of vertices (order encodes crossing minimization and is
//! never re-sorted here), plus the full edge set where every edge connects a
//! vertex in layer *i* to a vertex in layer *i + 1*. Long edges arrive
//! pre-split into dummy-vertex chains, so the adjacency invariant always
//! holds for valid input. [`LayeringBuilder::build`] validates the contract
//! once; everything downstream treats the layering as read-only.

use super::ids::{EdgeId, VertexId};
use super::vertex::{RealVertex, Vertex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    source: VertexId,
    dest: VertexId,
    reversed: bool,
}

impl Edge {
    pub fn new(source: VertexId, dest: VertexId, reversed: bool) -> Self {
        Self { source, dest, reversed }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn dest(&self) -> VertexId {
        self.dest
    }

    /// True when the drawn direction is the opposite of the logical one (the
    /// upstream cycle-breaking step flipped this edge). Affects arrowhead
    /// placement only.
    pub fn reversed(&self) -> bool {
        self.reversed
    }
}

/// One rank of the drawing: an ordered run of vertices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layer {
    vertices: Vec<VertexId>,
}

impl Layer {
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayeringError {
    UnknownVertex { edge: EdgeId, vertex: VertexId },
    EdgeSpansLayers { edge: EdgeId, source_layer: usize, dest_layer: usize },
    DummyDegree { vertex: VertexId, in_degree: usize, out_degree: usize },
}

impl std::fmt::Display for LayeringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVertex { edge, vertex } => {
                write!(f, "edge {edge} references vertex {vertex} which is not in any layer")
            }
            Self::EdgeSpansLayers { edge, source_layer, dest_layer } => {
                write!(
                    f,
                    "edge {edge} connects layer {source_layer} to layer {dest_layer}; \
                     edges must connect adjacent layers (self-loops belong in the \
                     vertex self-loop count)"
                )
            }
            Self::DummyDegree { vertex, in_degree, out_degree } => {
                write!(
                    f,
                    "dummy vertex {vertex} has in-degree {in_degree} and out-degree \
                     {out_degree}; dummies must have exactly one of each"
                )
            }
        }
    }
}

impl std::error::Error for LayeringError {}

/// Validated, immutable input to the layout engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layering<C> {
    vertices: Vec<Vertex<C>>,
    layers: Vec<Layer>,
    edges: Vec<Edge>,
    layer_of: Vec<usize>,
    position_of: Vec<usize>,
    in_edges: Vec<Vec<EdgeId>>,
    out_edges: Vec<Vec<EdgeId>>,
}

impl<C> Layering<C> {
    pub fn builder() -> LayeringBuilder<C> {
        LayeringBuilder::new()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex<C> {
        &self.vertices[id.index()]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Layer index of a vertex.
    pub fn layer_of(&self, id: VertexId) -> usize {
        self.layer_of[id.index()]
    }

    /// Position of a vertex within its layer's fixed order.
    pub fn position_of(&self, id: VertexId) -> usize {
        self.position_of[id.index()]
    }

    /// Incoming edges of a vertex, ordered by the position of the source
    /// vertex in the layer above (stable on ties). Port assignment mirrors
    /// this order, which keeps box-boundary crossings to the unavoidable ones.
    pub fn in_edges(&self, id: VertexId) -> &[EdgeId] {
        &self.in_edges[id.index()]
    }

    /// Outgoing edges of a vertex, ordered by the position of the destination
    /// vertex in the layer below (stable on ties).
    pub fn out_edges(&self, id: VertexId) -> &[EdgeId] {
        &self.out_edges[id.index()]
    }

    pub fn self_loops(&self, id: VertexId) -> usize {
        self.vertices[id.index()].self_loops()
    }
}

/// Mutate-then-build construction for [`Layering`].
///
/// Vertices are appended to layers in drawing order; `build` checks the
/// upstream contract and rejects malformed input instead of producing a
/// layering the engine would mis-draw.
#[derive(Debug, Clone)]
pub struct LayeringBuilder<C> {
    vertices: Vec<Vertex<C>>,
    vertex_layers: Vec<usize>,
    layers: Vec<Vec<VertexId>>,
    edges: Vec<Edge>,
}

impl<C> Default for LayeringBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> LayeringBuilder<C> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            vertex_layers: Vec::new(),
            layers: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Appends a real vertex to the end of `layer`, growing the layer list as
    /// needed.
    pub fn real_vertex(&mut self, layer: usize, content: C) -> VertexId {
        self.push_vertex(layer, Vertex::Real(RealVertex::new(content)))
    }

    pub fn real_vertex_with_self_loops(
        &mut self,
        layer: usize,
        content: C,
        self_loops: usize,
    ) -> VertexId {
        self.push_vertex(layer, Vertex::Real(RealVertex::new_with_self_loops(content, self_loops)))
    }

    pub fn dummy_vertex(&mut self, layer: usize) -> VertexId {
        self.push_vertex(layer, Vertex::Dummy)
    }

    pub fn edge(&mut self, source: VertexId, dest: VertexId) -> EdgeId {
        self.push_edge(Edge::new(source, dest, false))
    }

    /// An edge whose drawn direction was flipped by upstream cycle breaking.
    pub fn reversed_edge(&mut self, source: VertexId, dest: VertexId) -> EdgeId {
        self.push_edge(Edge::new(source, dest, true))
    }

    fn push_vertex(&mut self, layer: usize, vertex: Vertex<C>) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(vertex);
        self.vertex_layers.push(layer);

        if self.layers.len() <= layer {
            self.layers.resize_with(layer + 1, Vec::new);
        }
        self.layers[layer].push(id);

        id
    }

    fn push_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(edge);
        id
    }

    pub fn build(self) -> Result<Layering<C>, LayeringError> {
        let Self { vertices, vertex_layers, layers, edges } = self;

        let mut position_of = vec![0usize; vertices.len()];
        for layer in &layers {
            for (position, id) in layer.iter().enumerate() {
                position_of[id.index()] = position;
            }
        }

        let mut in_edges = vec![Vec::<EdgeId>::new(); vertices.len()];
        let mut out_edges = vec![Vec::<EdgeId>::new(); vertices.len()];

        for (index, edge) in edges.iter().enumerate() {
            let id = EdgeId(index);
            for endpoint in [edge.source(), edge.dest()] {
                if endpoint.index() >= vertices.len() {
                    return Err(LayeringError::UnknownVertex { edge: id, vertex: endpoint });
                }
            }

            let source_layer = vertex_layers[edge.source().index()];
            let dest_layer = vertex_layers[edge.dest().index()];
            if dest_layer != source_layer + 1 {
                return Err(LayeringError::EdgeSpansLayers { edge: id, source_layer, dest_layer });
            }

            out_edges[edge.source().index()].push(id);
            in_edges[edge.dest().index()].push(id);
        }

        // Port order must mirror the adjacent layer's vertex order; a stable
        // sort keeps parallel edges in insertion order.
        for list in in_edges.iter_mut() {
            list.sort_by_key(|id| position_of[edges[id.index()].source().index()]);
        }
        for list in out_edges.iter_mut() {
            list.sort_by_key(|id| position_of[edges[id.index()].dest().index()]);
        }

        for (index, vertex) in vertices.iter().enumerate() {
            if vertex.is_dummy() {
                let in_degree = in_edges[index].len();
                let out_degree = out_edges[index].len();
                if in_degree != 1 || out_degree != 1 {
                    return Err(LayeringError::DummyDegree {
                        vertex: VertexId(index),
                        in_degree,
                        out_degree,
                    });
                }
            }
        }

        Ok(Layering {
            vertices,
            layers: layers.into_iter().map(|vertices| Layer { vertices }).collect(),
            edges,
            layer_of: vertex_layers,
            position_of,
            in_edges,
            out_edges,
        })
    }
}
