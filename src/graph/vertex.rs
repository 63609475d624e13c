// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A vertex of a layered graph.
///
/// `Real` vertices carry opaque domain content and are rendered as boxes.
/// `Dummy` vertices are invisible one-hop placeholders the upstream layering
/// stage inserts when splitting an edge that spans more than one layer; each
/// dummy has exactly one incoming and one outgoing edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vertex<C> {
    Real(RealVertex<C>),
    Dummy,
}

impl<C> Vertex<C> {
    pub fn is_dummy(&self) -> bool {
        matches!(self, Self::Dummy)
    }

    pub fn as_real(&self) -> Option<&RealVertex<C>> {
        match self {
            Self::Real(real) => Some(real),
            Self::Dummy => None,
        }
    }

    /// Self-loop count; always zero for dummies.
    pub fn self_loops(&self) -> usize {
        match self {
            Self::Real(real) => real.self_loops(),
            Self::Dummy => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealVertex<C> {
    content: C,
    self_loops: usize,
}

impl<C> RealVertex<C> {
    pub fn new(content: C) -> Self {
        Self { content, self_loops: 0 }
    }

    pub fn new_with_self_loops(content: C, self_loops: usize) -> Self {
        Self { content, self_loops }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn self_loops(&self) -> usize {
        self.self_loops
    }
}
