//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::{Extent, Scale};
use crate::sheet::sheet_for_point;

const EPSILON: f64 = 1e-9;

fn assert_extent_close(extent: &Extent, minx: f64, miny: f64, maxx: f64, maxy: f64) {
    assert!((extent.minx - minx).abs() < EPSILON, "minx {} != {}", extent.minx, minx);
    assert!((extent.miny - miny).abs() < EPSILON, "miny {} != {}", extent.miny, miny);
    assert!((extent.maxx - maxx).abs() < EPSILON, "maxx {} != {}", extent.maxx, maxx);
    assert!((extent.maxy - maxy).abs() < EPSILON, "maxy {} != {}", extent.maxy, maxy);
}

#[test]
fn test_1m_sheet() {
    let sheet = sheet_for_point(37.62, 55.75, Scale::M1M);
    assert_eq!(sheet.code, "N-37");
    assert_eq!(
        sheet.extent,
        Extent {
            minx: 36.0,
            miny: 52.0,
            maxx: 42.0,
            maxy: 56.0,
        }
    );

    let sheet = sheet_for_point(50.3, 42.2, Scale::M1M);
    assert_eq!(sheet.code, "K-39");
    assert_eq!(
        sheet.extent,
        Extent {
            minx: 48.0,
            miny: 40.0,
            maxx: 54.0,
            maxy: 44.0,
        }
    );
}

#[test]
fn test_1m_sheet_southern_western() {
    // Buenos Aires: belt letter from |lat|, bbox south of the equator
    let sheet = sheet_for_point(-58.3, -34.6, Scale::M1M);
    assert_eq!(sheet.code, "I-21");
    assert_eq!(
        sheet.extent,
        Extent {
            minx: -60.0,
            miny: -36.0,
            maxx: -54.0,
            maxy: -32.0,
        }
    );
}

#[test]
fn test_100k_numbering() {
    // north-west corner of the 12x12 block is 1
    let sheet = sheet_for_point(36.45, 55.71, Scale::K100);
    assert_eq!(sheet.code, "N-37-1");
    // south-east corner is 144
    let sheet = sheet_for_point(41.9, 52.1, Scale::K100);
    assert_eq!(sheet.code, "N-37-144");
}

#[test]
fn test_100k_extent() {
    let sheet = sheet_for_point(36.45, 55.71, Scale::K100);
    assert_extent_close(&sheet.extent, 36.0, 55.0 + 2.0 / 3.0, 36.5, 56.0);
    // north edge of the 1:1M parent is hit exactly
    assert_eq!(sheet.extent.maxy, 56.0);
}

#[test]
fn test_descent_through_all_scales() {
    let lon = 36.45;
    let lat = 55.71;
    assert_eq!(sheet_for_point(lon, lat, Scale::M1M).code, "N-37");
    assert_eq!(sheet_for_point(lon, lat, Scale::K100).code, "N-37-1");
    assert_eq!(sheet_for_point(lon, lat, Scale::K50).code, "N-37-1-Г");
    assert_eq!(sheet_for_point(lon, lat, Scale::K25).code, "N-37-1-Г-г");

    let sheet = sheet_for_point(lon, lat, Scale::K25);
    assert_extent_close(&sheet.extent, 36.375, 55.0 + 2.0 / 3.0, 36.5, 55.75);
}

#[test]
fn test_quarter_letters_are_cyrillic() {
    // one point per quarter of the 1:100'000 sheet N-37-1
    let quarters = [
        (36.1, 55.9, 'А'),
        (36.4, 55.9, 'Б'),
        (36.1, 55.7, 'В'),
        (36.4, 55.7, 'Г'),
    ];
    for &(lon, lat, letter) in &quarters {
        let code = sheet_for_point(lon, lat, Scale::K50).code;
        assert_eq!(code, format!("N-37-1-{}", letter));
    }
    // the 1:25'000 letter quarters the 1:50'000 sheet, not the 1:100'000 one
    let sub_quarters = [
        (36.1, 55.9, "N-37-1-А-в"),
        (36.4, 55.9, "N-37-1-Б-г"),
        (36.1, 55.7, "N-37-1-В-в"),
        (36.4, 55.7, "N-37-1-Г-г"),
    ];
    for &(lon, lat, code) in &sub_quarters {
        assert_eq!(sheet_for_point(lon, lat, Scale::K25).code, code);
    }
}

#[test]
fn test_100k_number_on_cell_boundary() {
    // a point on a 20' row edge numbers the cell north of it, the cell its
    // extent describes
    let sheet = sheet_for_point(36.1, 55.0, Scale::K100);
    assert_eq!(sheet.code, "N-37-25");
    assert_extent_close(&sheet.extent, 36.0, 55.0, 36.5, 55.0 + 1.0 / 3.0);
    assert!(sheet.extent.miny <= 55.0 && 55.0 < sheet.extent.maxy);

    // the 1:1M south edge starts the bottom row, numbers stay within 1..144
    let sheet = sheet_for_point(36.5, 52.0, Scale::K100);
    assert_eq!(sheet.code, "N-37-134");
    assert_extent_close(&sheet.extent, 36.5, 52.0, 37.0, 52.0 + 1.0 / 3.0);

    let sheet = sheet_for_point(36.1, 52.0, Scale::K100);
    assert_eq!(sheet.code, "N-37-133");

    // quarter codes below a boundary sheet descend from the right number
    let sheet = sheet_for_point(36.5, 52.0, Scale::K25);
    assert_eq!(sheet.code, "N-37-134-В-в");
    assert!(sheet.extent.minx <= 36.5 && 36.5 < sheet.extent.maxx);
    assert!(sheet.extent.miny <= 52.0 && 52.0 < sheet.extent.maxy);
}

#[test]
fn test_midline_ties_fall_east_north() {
    // 36.25 is the vertical midline of N-37-1; the named quarter must be
    // the one whose snapped extent contains the point
    let sheet = sheet_for_point(36.25, 55.7, Scale::K50);
    assert_eq!(sheet.code, "N-37-1-Г");
    assert_eq!(sheet.extent.minx, 36.25);
    // 55.75 is the horizontal midline of quarter Г; the point sits west of
    // the vertical midline 36.375, so the tie sends it to the north-west
    let sheet = sheet_for_point(36.3, 55.75, Scale::K25);
    assert_eq!(sheet.code, "N-37-1-Г-а");
    assert!((sheet.extent.miny - 55.75).abs() < EPSILON, "miny {}", sheet.extent.miny);
}

#[test]
fn test_same_cell_same_code() {
    // any two points inside one cell name the same sheet at every scale
    let a = (36.44, 55.705);
    let b = (36.46, 55.71);
    for scale in &Scale::ALL {
        let sheet_a = sheet_for_point(a.0, a.1, *scale);
        let sheet_b = sheet_for_point(b.0, b.1, *scale);
        assert_eq!(sheet_a.code, sheet_b.code, "scale {}", scale);
        assert_eq!(sheet_a.extent, sheet_b.extent, "scale {}", scale);
    }
    assert_eq!(sheet_for_point(a.0, a.1, Scale::K25).code, "N-37-1-Г-г");
}

#[test]
fn test_extent_contains_point() {
    let points = [(37.62, 55.75), (36.45, 55.71), (-58.3, -34.6), (0.1, 0.1)];
    for &(lon, lat) in &points {
        for scale in &Scale::ALL {
            let sheet = sheet_for_point(lon, lat, *scale);
            assert!(
                sheet.extent.minx <= lon
                    && lon < sheet.extent.maxx
                    && sheet.extent.miny <= lat
                    && lat < sheet.extent.maxy,
                "{} does not contain ({}, {})",
                sheet.code,
                lon,
                lat
            );
        }
    }
}
