//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! GDAL vector datasource

use crate::fields::{geom_kind, ogr_type_name};
use gdal::spatial_ref::{CoordTransform, SpatialRef};
use gdal::vector::Layer;
use gdal::Dataset;
use gdal_sys::OGRFieldType;
use sheet_grid::Extent;
use sheetsplit_core::{Error, GeomKind};
use std::path::Path;

/// Working spatial reference of grid math and output datasets
pub const WGS84_PROJ4: &str = "+proj=longlat +datum=WGS84 +no_defs";

pub struct GdalSource {
    pub path: String,
}

impl GdalSource {
    pub fn new(path: &str) -> GdalSource {
        GdalSource {
            path: path.to_string(),
        }
    }

    pub fn open(&self) -> Result<Dataset, Error> {
        Dataset::open(Path::new(&self.path)).map_err(|err| Error::DatasetOpen {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }

    /// File name without extension, used in output file names
    pub fn stem(&self) -> String {
        Path::new(&self.path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "layer".to_string())
    }
}

/// Geometry kind of the layer, rejecting anything outside the supported set
pub fn layer_geom_kind(layer: &Layer) -> Result<GeomKind, Error> {
    let ogr_type = match layer.defn().geom_fields().next() {
        Some(geom_field) => geom_field.field_type(),
        None => {
            return Err(Error::UnsupportedGeometryType("NONE".to_string()));
        }
    };
    geom_kind(ogr_type).ok_or_else(|| Error::UnsupportedGeometryType(ogr_type_name(ogr_type)))
}

/// Attribute schema as (name, OGR field type) pairs
pub fn field_schema(layer: &Layer) -> Vec<(String, OGRFieldType::Type)> {
    layer
        .defn()
        .fields()
        .map(|field| (field.name(), field.field_type()))
        .collect()
}

/// Transformation from the layer CRS into WGS84. `None` when the layer
/// carries no spatial reference; coordinates are then taken as geographic.
pub fn to_wgs84(layer: &Layer) -> Result<Option<CoordTransform>, Error> {
    let wgs84 = SpatialRef::from_proj4(WGS84_PROJ4).map_err(gdal_error)?;
    match layer.spatial_ref() {
        Ok(layer_srs) => {
            let transform = CoordTransform::new(&layer_srs, &wgs84).map_err(gdal_error)?;
            Ok(Some(transform))
        }
        Err(_) => {
            warn!("layer '{}' has no spatial reference, assuming geographic coordinates", layer.name());
            Ok(None)
        }
    }
}

/// Layer extent in WGS84 degrees
pub fn geographic_extent(
    layer: &Layer,
    transform: Option<&CoordTransform>,
) -> Result<Extent, Error> {
    let envelope = layer.get_extent().map_err(gdal_error)?;
    let mut xs = [envelope.MinX, envelope.MaxX];
    let mut ys = [envelope.MinY, envelope.MaxY];
    if let Some(transform) = transform {
        let mut zs = [0.0, 0.0];
        transform
            .transform_coords(&mut xs, &mut ys, &mut zs)
            .map_err(gdal_error)?;
    }
    Ok(Extent {
        minx: xs[0].min(xs[1]),
        miny: ys[0].min(ys[1]),
        maxx: xs[0].max(xs[1]),
        maxy: ys[0].max(ys[1]),
    })
}

pub(crate) fn gdal_error(err: gdal::errors::GdalError) -> Error {
    Error::Datasource(err.to_string())
}
