//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! OGR type mappings and geometry helpers

use gdal::vector::{Feature, FieldValue, Geometry};
use gdal_sys::{self, OGRErr, OGRwkbGeometryType};
use sheetsplit_core::GeomKind;
use std::ffi::{c_void, CStr};
use std::ptr;

pub(crate) fn ogr_type_name(ogr_type: OGRwkbGeometryType::Type) -> String {
    let rv = unsafe { gdal_sys::OGRGeometryTypeToName(ogr_type) };
    let c_str = unsafe { CStr::from_ptr(rv) };
    c_str.to_string_lossy().into_owned()
}

/// Map an OGR layer geometry type onto the supported kinds. 2.5D variants
/// are accepted, the Z coordinate is carried through untouched.
pub fn geom_kind(ogr_type: OGRwkbGeometryType::Type) -> Option<GeomKind> {
    match ogr_type {
        OGRwkbGeometryType::wkbPoint | OGRwkbGeometryType::wkbPoint25D => Some(GeomKind::Point),
        OGRwkbGeometryType::wkbMultiPoint | OGRwkbGeometryType::wkbMultiPoint25D => {
            Some(GeomKind::MultiPoint)
        }
        OGRwkbGeometryType::wkbLineString | OGRwkbGeometryType::wkbLineString25D => {
            Some(GeomKind::Line)
        }
        OGRwkbGeometryType::wkbMultiLineString | OGRwkbGeometryType::wkbMultiLineString25D => {
            Some(GeomKind::MultiLine)
        }
        OGRwkbGeometryType::wkbPolygon | OGRwkbGeometryType::wkbPolygon25D => {
            Some(GeomKind::Polygon)
        }
        OGRwkbGeometryType::wkbMultiPolygon | OGRwkbGeometryType::wkbMultiPolygon25D => {
            Some(GeomKind::MultiPolygon)
        }
        _ => None,
    }
}

/// OGR geometry type for output layers. Multipoint sources are written as
/// point layers, matching what the shapefile driver stores anyway.
pub fn ogr_output_type(kind: GeomKind) -> OGRwkbGeometryType::Type {
    match kind {
        GeomKind::Point | GeomKind::MultiPoint => OGRwkbGeometryType::wkbPoint,
        GeomKind::Line => OGRwkbGeometryType::wkbLineString,
        GeomKind::MultiLine => OGRwkbGeometryType::wkbMultiLineString,
        GeomKind::Polygon => OGRwkbGeometryType::wkbPolygon,
        GeomKind::MultiPolygon => OGRwkbGeometryType::wkbMultiPolygon,
    }
}

pub fn intersects(a: &Geometry, b: &Geometry) -> bool {
    unsafe { gdal_sys::OGR_G_Intersects(a.c_geometry(), b.c_geometry()) != 0 }
}

/// Geometric intersection, `None` when GDAL returns no geometry.
///
/// `OGR_G_Intersection` hands back a raw owned handle; it is rebuilt as a
/// crate-owned `Geometry` through WKT, and both C allocations are freed here.
pub fn intersection(a: &Geometry, b: &Geometry) -> Option<Geometry> {
    let c_geom = unsafe { gdal_sys::OGR_G_Intersection(a.c_geometry(), b.c_geometry()) };
    if c_geom.is_null() {
        return None;
    }
    let mut c_wkt = ptr::null_mut();
    let rv = unsafe { gdal_sys::OGR_G_ExportToWkt(c_geom, &mut c_wkt) };
    let wkt = if rv == OGRErr::OGRERR_NONE {
        Some(unsafe { CStr::from_ptr(c_wkt) }.to_string_lossy().into_owned())
    } else {
        warn!("exporting clipped geometry failed: OGRErr {}", rv);
        None
    };
    unsafe {
        gdal_sys::CPLFree(c_wkt as *mut c_void);
        gdal_sys::OGR_G_DestroyGeometry(c_geom);
    }
    wkt.and_then(|wkt| Geometry::from_wkt(&wkt).ok())
}

/// Attribute values of a feature for the given fields. NULL values and
/// unreadable fields are skipped.
pub fn read_attributes(feature: &Feature, field_names: &[String]) -> Vec<(String, FieldValue)> {
    let mut attrs = Vec::with_capacity(field_names.len());
    for name in field_names {
        match feature.field(name) {
            Ok(Some(value)) => attrs.push((name.clone(), value)),
            Ok(None) => {} // Skip NULL values
            Err(err) => {
                warn!("skipping field '{}': {:?}", name, err);
            }
        }
    }
    attrs
}
