//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Geometry kinds handled by the splitter

use std::fmt;

/// Closed set of layer geometry types the splitter accepts.
/// Anything else is rejected when the source layer is inspected.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GeomKind {
    Point,
    MultiPoint,
    Line,
    MultiLine,
    Polygon,
    MultiPolygon,
}

impl GeomKind {
    pub fn name(self) -> &'static str {
        match self {
            GeomKind::Point => "POINT",
            GeomKind::MultiPoint => "MULTIPOINT",
            GeomKind::Line => "LINESTRING",
            GeomKind::MultiLine => "MULTILINESTRING",
            GeomKind::Polygon => "POLYGON",
            GeomKind::MultiPolygon => "MULTIPOLYGON",
        }
    }
}

impl fmt::Display for GeomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
