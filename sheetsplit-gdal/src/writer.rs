//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Per-sheet shapefile output

use crate::fields::ogr_output_type;
use crate::source::{gdal_error, WGS84_PROJ4};
use gdal::spatial_ref::SpatialRef;
use gdal::vector::{Feature, FieldValue, Geometry};
use gdal::{Dataset, Driver, LayerOptions};
use gdal_sys::OGRFieldType;
use sheetsplit_core::{Error, GeomKind};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SHAPEFILE_DRIVER: &str = "ESRI Shapefile";

/// Writes clipped features into one shapefile per sheet code.
///
/// Output datasets are created lazily on the first feature of a sheet, so
/// sheets without features leave no directory behind. All open datasets are
/// flushed and closed when the writer is dropped.
pub struct SheetWriter {
    out_root: PathBuf,
    source_stem: String,
    geom_kind: GeomKind,
    schema: Vec<(String, OGRFieldType::Type)>,
    sheets: HashMap<String, Dataset>,
}

impl SheetWriter {
    pub fn new(
        out_root: &Path,
        source_stem: &str,
        geom_kind: GeomKind,
        schema: Vec<(String, OGRFieldType::Type)>,
    ) -> Result<SheetWriter, Error> {
        if !out_root.is_dir() {
            return Err(Error::InvalidOutputPath(out_root.display().to_string()));
        }
        Ok(SheetWriter {
            out_root: out_root.to_path_buf(),
            source_stem: source_stem.to_string(),
            geom_kind,
            schema,
            sheets: HashMap::new(),
        })
    }

    /// Number of sheet datasets created so far
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn append(
        &mut self,
        code: &str,
        geometry: Geometry,
        attrs: &[(String, FieldValue)],
    ) -> Result<(), Error> {
        let SheetWriter {
            out_root,
            source_stem,
            geom_kind,
            schema,
            sheets,
        } = self;
        let dataset = match sheets.entry(code.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let dataset = create_sheet(out_root, code, source_stem, *geom_kind, schema)?;
                entry.insert(dataset)
            }
        };
        let layer = dataset.layer(0).map_err(gdal_error)?;
        let mut feature = Feature::new(layer.defn()).map_err(gdal_error)?;
        feature.set_geometry(geometry).map_err(gdal_error)?;
        for (name, value) in attrs {
            feature.set_field(name, value).map_err(gdal_error)?;
        }
        feature.create(&layer).map_err(gdal_error)?;
        Ok(())
    }
}

/// Create `{out_root}/{code}/{code}_{stem}.shp` with the source schema
fn create_sheet(
    out_root: &Path,
    code: &str,
    stem: &str,
    geom_kind: GeomKind,
    schema: &[(String, OGRFieldType::Type)],
) -> Result<Dataset, Error> {
    let sheet_dir = out_root.join(code);
    fs::create_dir_all(&sheet_dir)?;
    let shp_path = sheet_dir.join(format!("{}_{}.shp", code, stem));
    debug!("creating sheet dataset {}", shp_path.display());
    let shp_path = shp_path
        .to_str()
        .ok_or_else(|| Error::InvalidOutputPath(sheet_dir.display().to_string()))?;
    let driver = Driver::get(SHAPEFILE_DRIVER).map_err(gdal_error)?;
    let mut dataset = driver.create_vector_only(shp_path).map_err(gdal_error)?;
    {
        let srs = SpatialRef::from_proj4(WGS84_PROJ4).map_err(gdal_error)?;
        let layer = dataset
            .create_layer(LayerOptions {
                name: code,
                srs: Some(&srs),
                ty: ogr_output_type(geom_kind),
                ..Default::default()
            })
            .map_err(gdal_error)?;
        let field_defs: Vec<(&str, OGRFieldType::Type)> = schema
            .iter()
            .map(|(name, field_type)| (name.as_str(), *field_type))
            .collect();
        layer.create_defn_fields(&field_defs).map_err(gdal_error)?;
    }
    Ok(dataset)
}
