//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid shapefile output

use crate::source::{gdal_error, geographic_extent, to_wgs84, GdalSource, WGS84_PROJ4};
use crate::writer::SHAPEFILE_DRIVER;
use gdal::spatial_ref::SpatialRef;
use gdal::vector::{Feature, FieldValue, Geometry};
use gdal::{Driver, LayerOptions};
use gdal_sys::{OGRFieldType, OGRwkbGeometryType};
use sheet_grid::{sheet_for_point, GridIterator, Scale};
use sheetsplit_core::config::DEFAULT_SHEET_FIELD;
use sheetsplit_core::Error;
use std::path::Path;

/// Write the sheet grid covering a dataset as `grid{denominator}.shp`,
/// one polygon per cell with its sheet code in the attribute table.
pub fn write_grid(source: &GdalSource, scale: Scale, out_dir: &Path) -> Result<usize, Error> {
    if !out_dir.is_dir() {
        return Err(Error::InvalidOutputPath(out_dir.display().to_string()));
    }
    let dataset = source.open()?;
    let layer = dataset.layer(0).map_err(gdal_error)?;
    let transform = to_wgs84(&layer)?;
    let extent = geographic_extent(&layer, transform.as_ref())?;

    let grid_path = out_dir.join(format!("grid{}.shp", scale.denominator()));
    let grid_path = grid_path
        .to_str()
        .ok_or_else(|| Error::InvalidOutputPath(out_dir.display().to_string()))?;
    let driver = Driver::get(SHAPEFILE_DRIVER).map_err(gdal_error)?;
    let mut grid_ds = driver.create_vector_only(grid_path).map_err(gdal_error)?;
    let srs = SpatialRef::from_proj4(WGS84_PROJ4).map_err(gdal_error)?;
    let grid_layer = grid_ds
        .create_layer(LayerOptions {
            name: "grid",
            srs: Some(&srs),
            ty: OGRwkbGeometryType::wkbPolygon,
            ..Default::default()
        })
        .map_err(gdal_error)?;
    grid_layer
        .create_defn_fields(&[(DEFAULT_SHEET_FIELD, OGRFieldType::OFTString)])
        .map_err(gdal_error)?;

    let mut cells = 0;
    for cell in GridIterator::new(&extent, scale) {
        let (lon, lat) = cell.center();
        let sheet = sheet_for_point(lon, lat, scale);
        let mut feature = Feature::new(grid_layer.defn()).map_err(gdal_error)?;
        let cell_geom =
            Geometry::bbox(cell.west, cell.south, cell.east, cell.north).map_err(gdal_error)?;
        feature.set_geometry(cell_geom).map_err(gdal_error)?;
        feature
            .set_field(DEFAULT_SHEET_FIELD, &FieldValue::StringValue(sheet.code))
            .map_err(gdal_error)?;
        feature.create(&grid_layer).map_err(gdal_error)?;
        cells += 1;
    }
    info!("{}: {} grid cells at {}", grid_path, cells, scale);
    Ok(cells)
}
