// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bend-row assignment for the zone between two layers.
//!
//! Every edge whose start and finish columns differ needs one horizontal jog.
//! Jogs whose column ranges overlap (or touch) must land on distinct rows, or
//! the rasterizer would merge them into one line. Assignment is first-fit over
//! the traces in entry order, which keeps the result deterministic.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::geometry::Point;
use crate::graph::{EdgeId, VertexId};

/// One edge crossing the current zone: where it leaves the layer above and
/// where it must arrive in the layer below. Recomputed per crossing and
/// discarded once the polyline is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeTrace {
    pub(crate) edge: EdgeId,
    pub(crate) source: VertexId,
    pub(crate) dest: VertexId,
    pub(crate) start: Point,
    /// Final column, provisional row (the destination layer is not yet
    /// shifted to its absolute position).
    pub(crate) finish: Point,
    pub(crate) reversed: bool,
}

impl EdgeTrace {
    pub(crate) fn needs_bend(&self) -> bool {
        self.start.col() != self.finish.col()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ZonePlan {
    height: i32,
    bend_rows: BTreeMap<EdgeId, i32>,
}

impl ZonePlan {
    /// Total rows between the previous layer's lowest occupied row and the
    /// entering layer's top row.
    pub(crate) fn height(&self) -> i32 {
        self.height
    }

    /// Row of an edge's jog, as an offset from the top of the zone.
    pub(crate) fn bend_offset(&self, edge: EdgeId) -> Option<i32> {
        self.bend_rows.get(&edge).copied()
    }
}

/// Plans the zone for one layer-to-layer crossing.
///
/// Bend rows occupy the top of the zone; `loop_row_buffer` rows stay free at
/// the bottom for the entering layer's self-loop tops. The zone is never
/// empty, so adjacent layers always have at least one blank row between them
/// (and the first layer keeps its buffer row).
pub(crate) fn plan_zone(traces: &[EdgeTrace], loop_row_buffer: i32) -> ZonePlan {
    let mut rows: Vec<SmallVec<[(i32, i32); 4]>> = Vec::new();
    let mut bend_rows = BTreeMap::new();

    for trace in traces.iter().filter(|trace| trace.needs_bend()) {
        let low = trace.start.col().min(trace.finish.col());
        let high = trace.start.col().max(trace.finish.col());

        let free = rows.iter().position(|spans| spans.iter().all(|&(a, b)| high < a || b < low));
        let row = match free {
            Some(row) => row,
            None => {
                rows.push(SmallVec::new());
                rows.len() - 1
            }
        };

        rows[row].push((low, high));
        bend_rows.insert(trace.edge, row as i32);
    }

    ZonePlan { height: (rows.len() as i32).max(1) + loop_row_buffer.max(0), bend_rows }
}

#[cfg(test)]
mod tests {
    use super::{plan_zone, EdgeTrace};
    use crate::geometry::Point;
    use crate::graph::{EdgeId, VertexId};

    fn trace(edge: usize, start_col: i32, finish_col: i32) -> EdgeTrace {
        EdgeTrace {
            edge: EdgeId(edge),
            source: VertexId(0),
            dest: VertexId(1),
            start: Point::new(5, start_col),
            finish: Point::new(-1, finish_col),
            reversed: false,
        }
    }

    #[test]
    fn straight_edges_need_no_bend_rows() {
        let plan = plan_zone(&[trace(0, 4, 4), trace(1, 9, 9)], 0);

        assert_eq!(plan.height(), 1);
        assert_eq!(plan.bend_offset(EdgeId(0)), None);
        assert_eq!(plan.bend_offset(EdgeId(1)), None);
    }

    #[test]
    fn overlapping_jogs_get_distinct_rows() {
        let plan = plan_zone(&[trace(0, 2, 10), trace(1, 8, 4)], 0);

        assert_eq!(plan.height(), 2);
        assert_eq!(plan.bend_offset(EdgeId(0)), Some(0));
        assert_eq!(plan.bend_offset(EdgeId(1)), Some(1));
    }

    #[test]
    fn touching_jogs_count_as_overlapping() {
        let plan = plan_zone(&[trace(0, 2, 5), trace(1, 5, 9)], 0);

        assert_ne!(plan.bend_offset(EdgeId(0)), plan.bend_offset(EdgeId(1)));
    }

    #[test]
    fn disjoint_jogs_share_the_first_row() {
        let plan = plan_zone(&[trace(0, 2, 5), trace(1, 7, 11), trace(2, 13, 12)], 0);

        assert_eq!(plan.height(), 1);
        assert_eq!(plan.bend_offset(EdgeId(0)), Some(0));
        assert_eq!(plan.bend_offset(EdgeId(1)), Some(0));
        assert_eq!(plan.bend_offset(EdgeId(2)), Some(0));
    }

    #[test]
    fn loop_buffer_rows_add_to_the_zone_height() {
        let plan = plan_zone(&[trace(0, 2, 10)], 2);

        assert_eq!(plan.height(), 3);
    }

    #[test]
    fn empty_crossings_still_reserve_a_buffer_row() {
        let plan = plan_zone(&[], 0);

        assert_eq!(plan.height(), 1);
    }
}
