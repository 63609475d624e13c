// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use galatea::drawing::{Drawing, DrawingElement};
use galatea::graph::Layering;

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    MediumDense,
    DeepChains,
}

pub fn fixture(case: Case) -> Layering<String> {
    match case {
        Case::Small => lattice(LatticeParams::new(3, 3, 1, 0)),
        Case::MediumDense => lattice(LatticeParams::new(6, 8, 3, 5)),
        Case::DeepChains => deep_chains(24, 4),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LatticeParams {
    layers: usize,
    per_layer: usize,
    fan: usize,
    /// Every `loop_stride`-th vertex gets one self-loop (0 disables).
    loop_stride: usize,
}

impl LatticeParams {
    pub fn new(layers: usize, per_layer: usize, fan: usize, loop_stride: usize) -> Self {
        Self { layers, per_layer, fan, loop_stride }
    }
}

/// A dense layered lattice: every vertex fans out to the next layer with a
/// deterministic column shift, so plenty of edges need bends.
pub fn lattice(params: LatticeParams) -> Layering<String> {
    let mut builder = Layering::builder();

    let mut rows = Vec::with_capacity(params.layers);
    let mut ordinal = 0usize;
    for layer in 0..params.layers {
        let mut row = Vec::with_capacity(params.per_layer);
        for position in 0..params.per_layer {
            ordinal += 1;
            let self_loops = if params.loop_stride > 0 && ordinal % params.loop_stride == 0 {
                1
            } else {
                0
            };
            row.push(builder.real_vertex_with_self_loops(
                layer,
                format!("n{layer}x{position}"),
                self_loops,
            ));
        }
        rows.push(row);
    }

    for layer in 0..params.layers.saturating_sub(1) {
        for position in 0..params.per_layer {
            for shift in 0..params.fan {
                let dest = (position + shift * 3 + layer) % params.per_layer;
                builder.edge(rows[layer][position], rows[layer + 1][dest]);
            }
        }
    }

    builder.build().expect("lattice layering")
}

/// Parallel long edges: `chains` dummy chains running through `layers - 2`
/// intermediate layers, exercising the in-flight polyline path.
pub fn deep_chains(layers: usize, chains: usize) -> Layering<String> {
    let mut builder = Layering::builder();

    let sources: Vec<_> =
        (0..chains).map(|chain| builder.real_vertex(0, format!("src{chain}"))).collect();
    let sinks: Vec<_> = (0..chains)
        .map(|chain| builder.real_vertex(layers - 1, format!("sink{chain}")))
        .collect();

    for chain in 0..chains {
        let mut previous = sources[chain];
        for layer in 1..layers - 1 {
            let dummy = builder.dummy_vertex(layer);
            builder.edge(previous, dummy);
            previous = dummy;
        }
        // Land each chain on a shifted sink so the last hop needs a bend.
        builder.edge(previous, sinks[(chain + 1) % chains]);
    }

    builder.build().expect("deep-chain layering")
}

pub fn vertex_count(layering: &Layering<String>) -> u64 {
    layering.vertex_count() as u64
}

pub fn checksum_drawing(drawing: &Drawing) -> u64 {
    let mut acc = 0u64;
    for element in drawing.elements() {
        match element {
            DrawingElement::Vertex(vertex) => {
                acc = acc.wrapping_mul(131).wrapping_add(vertex.region().width() as u64);
                acc = acc.wrapping_mul(131).wrapping_add(vertex.region().top() as u64);
                acc = acc.wrapping_mul(131).wrapping_add(vertex.text().len() as u64);
            }
            DrawingElement::Edge(edge) => {
                for point in edge.points() {
                    acc = acc.wrapping_mul(131).wrapping_add(point.row().unsigned_abs() as u64);
                    acc = acc.wrapping_mul(131).wrapping_add(point.col().unsigned_abs() as u64);
                }
            }
        }
    }
    acc
}
