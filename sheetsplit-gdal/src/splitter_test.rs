//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::write_grid;
use crate::source::{GdalSource, WGS84_PROJ4};
use crate::splitter::{split_dataset, split_path};
use crate::writer::SHAPEFILE_DRIVER;
use gdal::spatial_ref::SpatialRef;
use gdal::vector::{Feature, FieldValue, Geometry};
use gdal::{Dataset, Driver, LayerOptions};
use gdal_sys::{OGRFieldType, OGRwkbGeometryType};
use sheet_grid::Scale;
use sheetsplit_core::Error;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

fn test_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("sheetsplit_{}_{}", name, process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// One polygon from (37.45, 55.70) to (37.55, 55.74), crossing the 37.5
/// meridian which is a cell border at every scale
fn create_test_polygons(path: &Path) {
    let driver = Driver::get(SHAPEFILE_DRIVER).unwrap();
    let mut dataset = driver.create_vector_only(path.to_str().unwrap()).unwrap();
    let srs = SpatialRef::from_proj4(WGS84_PROJ4).unwrap();
    let layer = dataset
        .create_layer(LayerOptions {
            name: "poly",
            srs: Some(&srs),
            ty: OGRwkbGeometryType::wkbPolygon,
            ..Default::default()
        })
        .unwrap();
    layer
        .create_defn_fields(&[("name", OGRFieldType::OFTString), ("rank", OGRFieldType::OFTInteger)])
        .unwrap();
    let mut feature = Feature::new(layer.defn()).unwrap();
    feature
        .set_geometry(Geometry::bbox(37.45, 55.70, 37.55, 55.74).unwrap())
        .unwrap();
    feature
        .set_field("name", &FieldValue::StringValue("span".to_string()))
        .unwrap();
    feature
        .set_field("rank", &FieldValue::IntegerValue(7))
        .unwrap();
    feature.create(&layer).unwrap();
}

fn create_test_points(path: &Path) {
    let driver = Driver::get(SHAPEFILE_DRIVER).unwrap();
    let mut dataset = driver.create_vector_only(path.to_str().unwrap()).unwrap();
    let srs = SpatialRef::from_proj4(WGS84_PROJ4).unwrap();
    let layer = dataset
        .create_layer(LayerOptions {
            name: "places",
            srs: Some(&srs),
            ty: OGRwkbGeometryType::wkbPoint,
            ..Default::default()
        })
        .unwrap();
    layer
        .create_defn_fields(&[("name", OGRFieldType::OFTString)])
        .unwrap();
    for &(lon, lat, name) in &[(37.62, 55.75, "Moscow"), (50.3, 42.2, "steppe")] {
        let mut feature = Feature::new(layer.defn()).unwrap();
        feature
            .set_geometry(Geometry::from_wkt(&format!("POINT ({} {})", lon, lat)).unwrap())
            .unwrap();
        feature
            .set_field("name", &FieldValue::StringValue(name.to_string()))
            .unwrap();
        feature.create(&layer).unwrap();
    }
}

fn feature_count(path: &Path) -> usize {
    let dataset = Dataset::open(path).unwrap();
    let mut layer = dataset.layer(0).unwrap();
    layer.features().count()
}

#[test]
fn test_missing_output_root() {
    let err = split_dataset(
        &GdalSource::new("does_not_exist.shp"),
        Scale::K25,
        Path::new("/no_such_sheetsplit_output_root"),
    )
    .unwrap_err();
    match err {
        Error::InvalidOutputPath(path) => assert!(path.contains("no_such")),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_dataset_open_error() {
    let out = test_dir("open_err");
    let err = split_dataset(&GdalSource::new("does_not_exist.shp"), Scale::K25, &out).unwrap_err();
    match err {
        Error::DatasetOpen { path, .. } => assert_eq!(path, "does_not_exist.shp"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_split_polygon_across_cells() {
    let src_dir = test_dir("poly_src");
    let out = test_dir("poly_out");
    let shp = src_dir.join("poly.shp");
    create_test_polygons(&shp);

    let stats = split_dataset(&GdalSource::new(shp.to_str().unwrap()), Scale::K25, &out).unwrap();
    // the polygon covers two 1:25'000 cells in a single row
    assert_eq!(stats.cells, 2);
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.features, 2);

    for code in &["N-37-3-Г-г", "N-37-4-В-в"] {
        let sheet_shp = out.join(code).join(format!("{}_poly.shp", code));
        assert!(sheet_shp.exists(), "missing {}", sheet_shp.display());
        let dataset = Dataset::open(&sheet_shp).unwrap();
        let mut layer = dataset.layer(0).unwrap();
        let feature = layer.features().next().unwrap();
        // attributes are copied to every piece
        assert_eq!(
            feature.field("name").unwrap().unwrap().into_string(),
            Some("span".to_string())
        );
        match feature.field("rank").unwrap().unwrap() {
            FieldValue::IntegerValue(rank) => assert_eq!(rank, 7),
            other => panic!("unexpected field value {:?}", other),
        }
    }
}

#[test]
fn test_split_points_at_1m() {
    let src_dir = test_dir("points_src");
    let out = test_dir("points_out");
    let shp = src_dir.join("places.shp");
    create_test_points(&shp);

    let stats = split_dataset(&GdalSource::new(shp.to_str().unwrap()), Scale::M1M, &out).unwrap();
    // extent spans 3x4 sheets, only two of them contain a point
    assert_eq!(stats.cells, 12);
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.features, 2);

    assert_eq!(feature_count(&out.join("N-37").join("N-37_places.shp")), 1);
    assert_eq!(feature_count(&out.join("K-39").join("K-39_places.shp")), 1);
    // no directories for empty sheets
    assert_eq!(fs::read_dir(&out).unwrap().count(), 2);
}

#[test]
fn test_split_directory_skips_broken_file() {
    let src_dir = test_dir("dir_src");
    let out = test_dir("dir_out");
    create_test_points(&src_dir.join("places.shp"));
    fs::write(src_dir.join("broken.shp"), b"not a shapefile").unwrap();

    let stats = split_path(&src_dir, Scale::M1M, &out).unwrap();
    // broken.shp is logged and skipped, places.shp is processed
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.features, 2);
}

#[test]
fn test_write_grid() {
    let src_dir = test_dir("grid_src");
    let out = test_dir("grid_out");
    let shp = src_dir.join("places.shp");
    create_test_points(&shp);

    let cells = write_grid(&GdalSource::new(shp.to_str().unwrap()), Scale::M1M, &out).unwrap();
    assert_eq!(cells, 12);

    let grid_shp = out.join("grid1000000.shp");
    let dataset = Dataset::open(&grid_shp).unwrap();
    let mut layer = dataset.layer(0).unwrap();
    let codes: Vec<String> = layer
        .features()
        .map(|f| f.field("Razgraphka").unwrap().unwrap().into_string().unwrap())
        .collect();
    assert_eq!(codes.len(), 12);
    assert_eq!(codes[0], "N-37");
    assert!(codes.contains(&"K-39".to_string()));
}

#[test]
fn test_unsupported_scale_api() {
    assert!(Scale::from_denominator(75_000).is_err());
}
