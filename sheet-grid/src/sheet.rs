//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Nomenklatura sheet codes
//!
//! Sheet codes follow the Soviet/Russian survey sheet layout: 4°x6° belts of
//! 1:1'000'000 sheets, each divided into 144 sheets at 1:100'000, each of
//! those into quarters at 1:50'000 and those again into quarters at 1:25'000.

use crate::grid::{Extent, Scale};

/// Belt letters for 4° latitude rows, equator outwards. W, X and Y are not
/// used; Z covers the polar caps.
const BELT_LETTERS: [char; 23] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'Z',
];

/// Quarter letters at 1:50'000, row by row from the north-west
const QUARTERS_50K: [char; 4] = ['А', 'Б', 'В', 'Г'];

/// Quarter letters at 1:25'000
const QUARTERS_25K: [char; 4] = ['а', 'б', 'в', 'г'];

/// A named sheet with its geographic extent
#[derive(PartialEq, Clone, Debug)]
pub struct Sheet {
    pub code: String,
    pub extent: Extent,
}

/// Sheet containing the given point at the given scale.
///
/// The point is interpreted in WGS84 degrees. Cells own their west and south
/// edges, so a point on a cell boundary belongs to the cell east/north of it.
pub fn sheet_for_point(lon: f64, lat: f64, scale: Scale) -> Sheet {
    match scale {
        Scale::M1M => sheet_1m(lon, lat),
        Scale::K100 => sheet_100k(lon, lat),
        Scale::K50 => sheet_quarter(lon, lat, Scale::K50),
        Scale::K25 => sheet_quarter(lon, lat, Scale::K25),
    }
}

/// Cell interval `[lo, hi)` of the step-sized grid containing `v`.
/// Both edges are computed as index times step, the same arithmetic the
/// grid iterator uses for cell edges.
fn snap(v: f64, step: f64) -> (f64, f64) {
    let idx = (v / step).floor();
    (idx * step, (idx + 1.0) * step)
}

fn cell_extent(lon: f64, lat: f64, scale: Scale) -> Extent {
    let (step_x, step_y) = scale.step();
    let (west, east) = snap(lon, step_x);
    let (south, north) = snap(lat, step_y);
    Extent {
        minx: west,
        miny: south,
        maxx: east,
        maxy: north,
    }
}

fn sheet_1m(lon: f64, lat: f64) -> Sheet {
    let belt = ((lat.abs() / 4.0).floor() as usize).min(BELT_LETTERS.len() - 1);
    let column = ((180.0 + lon) / 6.0).floor() as i64 + 1;
    Sheet {
        code: format!("{}-{}", BELT_LETTERS[belt], column),
        extent: cell_extent(lon, lat, Scale::M1M),
    }
}

fn sheet_100k(lon: f64, lat: f64) -> Sheet {
    let parent = sheet_1m(lon, lat);
    let (step_x, step_y) = Scale::K100.step();
    // 12x12 sheets per 1:1M sheet, numbered 1..144 from the north-west
    // corner. Row and column come from the same global cell indices the
    // bbox snapping uses, so a point on a cell edge gets the number of the
    // cell east/north of it, the cell its bbox describes. The 1:1M belt
    // spans 12 whole rows and columns, so the indices reduce mod 12.
    let row = 11 - (lat / step_y).floor().rem_euclid(12.0) as i64;
    let col = (lon / step_x).floor().rem_euclid(12.0) as i64;
    let number = row * 12 + col + 1;
    Sheet {
        code: format!("{}-{}", parent.code, number),
        extent: cell_extent(lon, lat, Scale::K100),
    }
}

fn sheet_quarter(lon: f64, lat: f64, scale: Scale) -> Sheet {
    let (parent, letters) = match scale {
        Scale::K50 => (sheet_100k(lon, lat), &QUARTERS_50K),
        _ => (sheet_quarter(lon, lat, Scale::K50), &QUARTERS_25K),
    };
    let mid_x = (parent.extent.minx + parent.extent.maxx) / 2.0;
    let mid_y = (parent.extent.miny + parent.extent.maxy) / 2.0;
    // a point exactly on a midline falls east/north, like the cell snapping
    let letter = match (lat >= mid_y, lon >= mid_x) {
        (true, false) => letters[0],
        (true, true) => letters[1],
        (false, false) => letters[2],
        (false, true) => letters[3],
    };
    Sheet {
        code: format!("{}-{}", parent.code, letter),
        extent: cell_extent(lon, lat, scale),
    }
}
