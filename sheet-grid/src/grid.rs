//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Sheet grid scales and cells

use std::error;
use std::fmt;

/// Geographic extent in degrees (WGS84 longitude/latitude)
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

/// Scale denominator outside the supported set
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct UnsupportedScale(pub u32);

impl fmt::Display for UnsupportedScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported scale denominator {} (supported: 1000000, 100000, 50000, 25000)",
            self.0
        )
    }
}

impl error::Error for UnsupportedScale {}

/// Supported map scales
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Scale {
    /// 1:1'000'000
    M1M,
    /// 1:100'000
    K100,
    /// 1:50'000
    K50,
    /// 1:25'000
    K25,
}

impl Scale {
    pub const ALL: [Scale; 4] = [Scale::M1M, Scale::K100, Scale::K50, Scale::K25];

    pub fn from_denominator(denom: u32) -> Result<Scale, UnsupportedScale> {
        match denom {
            1_000_000 => Ok(Scale::M1M),
            100_000 => Ok(Scale::K100),
            50_000 => Ok(Scale::K50),
            25_000 => Ok(Scale::K25),
            _ => Err(UnsupportedScale(denom)),
        }
    }

    pub fn denominator(self) -> u32 {
        match self {
            Scale::M1M => 1_000_000,
            Scale::K100 => 100_000,
            Scale::K50 => 50_000,
            Scale::K25 => 25_000,
        }
    }

    /// Cell size `(lon, lat)` in degrees
    pub fn step(self) -> (f64, f64) {
        match self {
            Scale::M1M => (6.0, 4.0),
            Scale::K100 => (0.5, 1.0 / 3.0),
            Scale::K50 => (0.25, 1.0 / 6.0),
            Scale::K25 => (0.125, 1.0 / 12.0),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1:{}", self.denominator())
    }
}

/// One sheet-sized grid cell, anchored at its north-west corner
#[derive(PartialEq, Clone, Debug)]
pub struct SheetRect {
    pub west: f64,
    pub north: f64,
    pub east: f64,
    pub south: f64,
}

impl SheetRect {
    /// Cell midpoint `(lon, lat)`
    pub fn center(&self) -> (f64, f64) {
        (
            (self.west + self.east) / 2.0,
            (self.north + self.south) / 2.0,
        )
    }

    pub fn extent(&self) -> Extent {
        Extent {
            minx: self.west,
            miny: self.south,
            maxx: self.east,
            maxy: self.north,
        }
    }

    /// Cell membership with west/south edges inclusive, so that adjacent
    /// cells partition the plane without overlap.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.west && lon < self.east && lat >= self.south && lat < self.north
    }
}
