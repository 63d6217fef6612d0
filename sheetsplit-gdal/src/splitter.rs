//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Split a dataset into sheet-sized pieces

use crate::fields::{intersection, intersects, read_attributes};
use crate::source::{
    field_schema, gdal_error, geographic_extent, layer_geom_kind, to_wgs84, GdalSource,
};
use crate::writer::SheetWriter;
use gdal::vector::Geometry;
use sheet_grid::{sheet_for_point, GridIterator, Scale};
use sheetsplit_core::Error;
use std::fs;
use std::path::Path;

#[derive(Default, PartialEq, Clone, Debug)]
pub struct SplitStats {
    /// Grid cells covering the dataset extent
    pub cells: usize,
    /// Sheet datasets written
    pub sheets: usize,
    /// Clipped features written, summed over all sheets
    pub features: usize,
}

impl SplitStats {
    pub fn add(&mut self, other: &SplitStats) {
        self.cells += other.cells;
        self.sheets += other.sheets;
        self.features += other.features;
    }
}

/// Clip one dataset into per-sheet shapefiles under `out_root`.
///
/// The grid covering the dataset extent is walked cell by cell; features
/// intersecting a cell are clipped to it and appended to the sheet named
/// after the cell center. Output lands in `{out_root}/{code}/{code}_{stem}.shp`.
pub fn split_dataset(source: &GdalSource, scale: Scale, out_root: &Path) -> Result<SplitStats, Error> {
    if !out_root.is_dir() {
        return Err(Error::InvalidOutputPath(out_root.display().to_string()));
    }
    let dataset = source.open()?;
    let mut layer = dataset.layer(0).map_err(gdal_error)?;
    let geom_kind = layer_geom_kind(&layer)?;
    let schema = field_schema(&layer);
    let field_names: Vec<String> = schema.iter().map(|(name, _)| name.clone()).collect();
    let transform = to_wgs84(&layer)?;
    let extent = geographic_extent(&layer, transform.as_ref())?;
    info!(
        "{}: {} layer, {} attribute fields, extent {:?}",
        source.path,
        geom_kind,
        schema.len(),
        extent
    );

    let mut writer = SheetWriter::new(out_root, &source.stem(), geom_kind, schema)?;
    let mut stats = SplitStats::default();
    for cell in GridIterator::new(&extent, scale) {
        stats.cells += 1;
        let (lon, lat) = cell.center();
        let sheet = sheet_for_point(lon, lat, scale);
        let cell_geom =
            Geometry::bbox(cell.west, cell.south, cell.east, cell.north).map_err(gdal_error)?;
        for feature in layer.features() {
            let mut geometry = feature.geometry().clone();
            if let Some(transform) = transform.as_ref() {
                geometry.transform_inplace(transform).map_err(gdal_error)?;
            }
            if !intersects(&geometry, &cell_geom) {
                continue;
            }
            if let Some(clipped) = intersection(&geometry, &cell_geom) {
                let attrs = read_attributes(&feature, &field_names);
                writer.append(&sheet.code, clipped, &attrs)?;
                stats.features += 1;
            }
        }
    }
    stats.sheets = writer.sheet_count();
    info!(
        "{}: {} features written to {} sheets ({} grid cells)",
        source.path, stats.features, stats.sheets, stats.cells
    );
    Ok(stats)
}

/// Split a single dataset or every shapefile in a directory.
///
/// Directory entries are processed in name order; a failing dataset is
/// logged and skipped so one broken file does not abort the batch.
pub fn split_path(src: &Path, scale: Scale, out_root: &Path) -> Result<SplitStats, Error> {
    if !src.is_dir() {
        let path = src
            .to_str()
            .ok_or_else(|| Error::Datasource(format!("invalid path {}", src.display())))?;
        return split_dataset(&GdalSource::new(path), scale, out_root);
    }
    let mut shapefiles: Vec<_> = fs::read_dir(src)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case("shp"))
                .unwrap_or(false)
        })
        .collect();
    shapefiles.sort();

    let mut total = SplitStats::default();
    for path in &shapefiles {
        let source = match path.to_str() {
            Some(path) => GdalSource::new(path),
            None => {
                warn!("skipping non-unicode path {}", path.display());
                continue;
            }
        };
        match split_dataset(&source, scale, out_root) {
            Ok(stats) => total.add(&stats),
            Err(err) => error!("{}: {}", path.display(), err),
        }
    }
    Ok(total)
}
