// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The durable layout output.
//!
//! A [`Drawing`] is an ordered list of boxes and polylines in grid
//! coordinates. It is the only thing a layout run hands to the outside; a
//! rasterizer paints it onto a character grid without consulting the input
//! graph again. Elements serialize with serde so drawings can be snapshotted
//! or shipped across process boundaries.

use serde::{Deserialize, Serialize};

use crate::geometry::{Dimension, Point, Region};

/// A rendered vertex box: its region plus the text lines for the interior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexElement {
    region: Region,
    text: Vec<String>,
}

impl VertexElement {
    pub fn new(region: Region, text: Vec<String>) -> Self {
        Self { region, text }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn text(&self) -> &[String] {
        &self.text
    }
}

/// An edge polyline. Consecutive points are axis-aligned; the two arrowhead
/// flags are independent (a reversed edge arrows at its start).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeElement {
    points: Vec<Point>,
    arrow_start: bool,
    arrow_end: bool,
}

impl EdgeElement {
    pub fn new(points: Vec<Point>, arrow_start: bool, arrow_end: bool) -> Self {
        Self { points, arrow_start, arrow_end }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn finish(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn arrow_start(&self) -> bool {
        self.arrow_start
    }

    pub fn arrow_end(&self) -> bool {
        self.arrow_end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawingElement {
    Vertex(VertexElement),
    Edge(EdgeElement),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Drawing {
    elements: Vec<DrawingElement>,
}

impl Drawing {
    pub fn new(elements: Vec<DrawingElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[DrawingElement] {
        &self.elements
    }

    pub fn vertex_elements(&self) -> impl Iterator<Item = &VertexElement> {
        self.elements.iter().filter_map(|element| match element {
            DrawingElement::Vertex(vertex) => Some(vertex),
            DrawingElement::Edge(_) => None,
        })
    }

    pub fn edge_elements(&self) -> impl Iterator<Item = &EdgeElement> {
        self.elements.iter().filter_map(|element| match element {
            DrawingElement::Edge(edge) => Some(edge),
            DrawingElement::Vertex(_) => None,
        })
    }

    /// Smallest region covering every box and every polyline point, if any.
    /// Rasterizers size their canvas from this.
    pub fn bounds(&self) -> Option<Region> {
        let mut bounds: Option<(Point, Point)> = None;

        let mut cover = |p: Point| {
            bounds = Some(match bounds {
                None => (p, p),
                Some((min, max)) => (
                    Point::new(min.row().min(p.row()), min.col().min(p.col())),
                    Point::new(max.row().max(p.row()), max.col().max(p.col())),
                ),
            });
        };

        for element in &self.elements {
            match element {
                DrawingElement::Vertex(vertex) => {
                    cover(vertex.region().top_left());
                    cover(vertex.region().bottom_right());
                }
                DrawingElement::Edge(edge) => {
                    for point in edge.points() {
                        cover(*point);
                    }
                }
            }
        }

        bounds.map(|(min, max)| {
            Region::new(
                min,
                Dimension::new(max.row() - min.row() + 1, max.col() - min.col() + 1),
            )
        })
    }
}
