// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Shared deterministic test fixtures (no RNG).

use super::ids::{EdgeId, VertexId};
use super::layering::Layering;

pub(crate) struct FanWithLoop {
    pub(crate) layering: Layering<&'static str>,
    pub(crate) a: VertexId,
    pub(crate) ab: EdgeId,
    pub(crate) ac: EdgeId,
}

/// One self-looping vertex feeding two successors: `A -> B`, `A -> C`,
/// `A -> A` as a loop count.
pub(crate) fn fan_with_loop() -> FanWithLoop {
    let mut builder = Layering::builder();
    let a = builder.real_vertex_with_self_loops(0, "A", 1);
    let b = builder.real_vertex(1, "B");
    let c = builder.real_vertex(1, "C");
    let ab = builder.edge(a, b);
    let ac = builder.edge(a, c);

    FanWithLoop { layering: builder.build().expect("layering"), a, ab, ac }
}

pub(crate) struct DummyChain {
    pub(crate) layering: Layering<&'static str>,
    pub(crate) d: VertexId,
}

/// Three layers where `A -> C` spans two layer boundaries and arrives
/// pre-split through the dummy `d`; `B` keeps layer 1 non-trivial.
pub(crate) fn dummy_chain() -> DummyChain {
    let mut builder = Layering::builder();
    let a = builder.real_vertex(0, "A");
    let b = builder.real_vertex(1, "B");
    let d = builder.dummy_vertex(1);
    let c = builder.real_vertex(2, "C");
    builder.edge(a, b);
    builder.edge(a, d);
    builder.edge(d, c);
    builder.edge(b, c);

    DummyChain { layering: builder.build().expect("layering"), d }
}

/// A diamond: one source, two middle vertices, one sink.
pub(crate) fn diamond() -> Layering<&'static str> {
    let mut builder = Layering::builder();
    let a = builder.real_vertex(0, "A");
    let b = builder.real_vertex(1, "B");
    let c = builder.real_vertex(1, "C");
    let d = builder.real_vertex(2, "D");
    builder.edge(a, b);
    builder.edge(a, c);
    builder.edge(b, d);
    builder.edge(c, d);

    builder.build().expect("layering")
}
