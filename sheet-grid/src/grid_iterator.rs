//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::grid::{Extent, Scale, SheetRect};

/// Raster-scan iterator over all grid cells covering an extent.
///
/// Cells are walked row by row from the north-west corner, west to east.
/// The walk is over integer cell indices, so cell edges are identical for
/// every extent at a given scale and no floating-point step accumulates.
pub struct GridIterator {
    col: i64,
    row: i64,
    col0: i64,
    row0: i64,
    col_end: i64,
    row_end: i64,
    step_x: f64,
    step_y: f64,
    finished: bool,
}

impl GridIterator {
    pub fn new(extent: &Extent, scale: Scale) -> GridIterator {
        let (step_x, step_y) = scale.step();
        let col0 = (extent.minx / step_x).floor() as i64;
        let col_end = (extent.maxx / step_x).ceil() as i64;
        // rows count down; a row index is the cell's north edge
        let row0 = (extent.maxy / step_y).ceil() as i64;
        let row_end = (extent.miny / step_y).floor() as i64;
        GridIterator {
            col: col0,
            row: row0,
            col0,
            row0,
            // degenerate extents still cover one cell
            col_end: col_end.max(col0 + 1),
            row_end: row_end.min(row0 - 1),
            step_x,
            step_y,
            finished: false,
        }
    }

    /// Grid size as `(columns, rows)`
    pub fn dimensions(&self) -> (u64, u64) {
        (
            (self.col_end - self.col0) as u64,
            (self.row0 - self.row_end) as u64,
        )
    }
}

impl Iterator for GridIterator {
    type Item = SheetRect;

    fn next(&mut self) -> Option<SheetRect> {
        if self.finished {
            return None;
        }
        let cell = SheetRect {
            west: self.col as f64 * self.step_x,
            north: self.row as f64 * self.step_y,
            east: (self.col + 1) as f64 * self.step_x,
            south: (self.row - 1) as f64 * self.step_y,
        };
        if self.col + 1 < self.col_end {
            self.col += 1;
        } else if self.row - 1 > self.row_end {
            self.col = self.col0;
            self.row -= 1;
        } else {
            self.finished = true;
        }
        Some(cell)
    }
}
