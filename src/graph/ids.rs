// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Index-based identifiers for vertices and edges.
//!
//! Ids are handed out by [`LayeringBuilder`](super::LayeringBuilder) and are
//! only meaningful for the layering that produced them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{EdgeId, VertexId};

    #[test]
    fn ids_display_with_kind_prefixes() {
        assert_eq!(VertexId(0).to_string(), "v0");
        assert_eq!(VertexId(12).to_string(), "v12");
        assert_eq!(EdgeId(3).to_string(), "e3");
    }

    #[test]
    fn ids_order_by_index() {
        assert!(VertexId(1) < VertexId(2));
        assert!(EdgeId(0) < EdgeId(10));
        assert_eq!(VertexId(4).index(), 4);
    }
}
