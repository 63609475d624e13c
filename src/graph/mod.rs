// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layered-graph input model.
//!
//! Everything here is constructed by the upstream layering/cycle-breaking
//! stage and read-only to the layout engine: vertices (real or dummy), edges
//! between adjacent layers, and the fixed in-layer order.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod layering;
pub mod vertex;

pub use ids::{EdgeId, VertexId};
pub use layering::{Edge, Layer, Layering, LayeringBuilder, LayeringError};
pub use vertex::{RealVertex, Vertex};
