//! The longitude converter: splits polygons along the prime meridian and
//! re-expresses the western pieces in the [0, 360] longitude range.

use crate::geo::{
	GeoBBox, GeoCollection, GeoFeature, Geometry, MultiPolygonGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Result, bail};
use geo::BooleanOps;
use log::debug;

const LONGITUDE_SHIFT: f64 = 360.0;

const WEST: GeoBBox = GeoBBox {
	x_min: -180.0,
	y_min: -90.0,
	x_max: 0.0,
	y_max: 90.0,
};

const EAST: GeoBBox = GeoBBox {
	x_min: 0.0,
	y_min: -90.0,
	x_max: 180.0,
	y_max: 90.0,
};

/// Splits polygons on the prime meridian and converts the western pieces to
/// the [0, 360] longitude range.
///
/// The output contains the shifted western subset followed by the unmodified
/// eastern subset; record order relative to the input is not preserved.
/// Attribute fields and latitudes pass through untouched.
///
/// Note that the result does not have a unique meridian (`0` and `360` refer
/// to the same longitude) and polygons spanning the antimeridian (180°) are
/// not merged into a single polygon.
///
/// Fails if the collection contains a geometry other than a Polygon or
/// MultiPolygon; no partial result is produced in that case.
pub fn convert360(collection: GeoCollection) -> Result<GeoCollection> {
	let (west, east) = split_polygons(&collection)?;
	debug!("split {} features into {} west and {} east", collection.len(), west.len(), east.len());

	let mut features = Vec::with_capacity(west.len() + east.len());
	for mut feature in west.features {
		feature.geometry = converter(feature.geometry)?;
		features.push(feature);
	}
	features.extend(east.features);
	Ok(GeoCollection::from(features))
}

/// Clips the collection against the western hemisphere
/// (longitude [-180, 0]) and the eastern hemisphere (longitude [0, 180]).
///
/// A polygon straddling the 0° meridian ends up in both halves, cut at the
/// meridian and closed along the cut line. A polygon touching a hemisphere
/// only at the meridian itself contributes nothing to that side. The input
/// collection is left unmodified.
pub fn split_polygons(collection: &GeoCollection) -> Result<(GeoCollection, GeoCollection)> {
	Ok((clip_collection(collection, &WEST)?, clip_collection(collection, &EAST)?))
}

fn clip_collection(collection: &GeoCollection, bbox: &GeoBBox) -> Result<GeoCollection> {
	let mut features = Vec::new();
	for feature in &collection.features {
		if let Some(geometry) = clip_geometry(&feature.geometry, bbox)? {
			features.push(GeoFeature {
				id: feature.id.clone(),
				geometry,
				properties: feature.properties.clone(),
			});
		}
	}
	Ok(GeoCollection::from(features))
}

fn clip_geometry(geometry: &Geometry, bbox: &GeoBBox) -> Result<Option<Geometry>> {
	let subject = match geometry {
		Geometry::Polygon(polygon) => geo::MultiPolygon(vec![geo::Polygon::from(polygon)]),
		Geometry::MultiPolygon(multi) => geo::MultiPolygon::from(multi),
		other => bail!(
			"Can only convert Polygon or MultiPolygon geometries, not '{}'",
			other.type_name()
		),
	};

	let Some(bounds) = geometry.compute_bounds() else {
		return Ok(None);
	};
	if !bbox.overlaps(&bounds) {
		// disjoint, or touching the box only along its edge
		return Ok(None);
	}
	if bbox.contains(&bounds) {
		// entirely inside, keep the coordinates exactly as they are
		return Ok(Some(geometry.clone()));
	}

	let clip = geo::MultiPolygon(vec![bbox.to_polygon()]);
	let clipped = subject.intersection(&clip);
	let mut polygons: Vec<PolygonGeometry> = clipped.into_iter().map(PolygonGeometry::from).collect();
	Ok(match polygons.len() {
		0 => None,
		1 => polygons.pop().map(Geometry::Polygon),
		_ => Some(Geometry::MultiPolygon(MultiPolygonGeometry(polygons))),
	})
}

/// Converts a polygon to the [0, 360] longitude range by adding 360 to every
/// longitude. Every ring is shifted, interior holes included; ring and
/// vertex order are preserved and latitudes stay bit-identical.
///
/// Only meaningful for polygons located entirely in the western hemisphere,
/// i.e. with a maximum longitude of 0°.
#[must_use]
pub fn convert_polygon(polygon: &PolygonGeometry) -> PolygonGeometry {
	PolygonGeometry(
		polygon
			.0
			.iter()
			.map(|ring| RingGeometry(ring.0.iter().map(|c| c.shift_x(LONGITUDE_SHIFT)).collect()))
			.collect(),
	)
}

/// Converts a multipolygon to the [0, 360] longitude range, polygon by
/// polygon, preserving their order.
#[must_use]
pub fn convert_multipolygon(multipolygon: &MultiPolygonGeometry) -> MultiPolygonGeometry {
	MultiPolygonGeometry(multipolygon.0.iter().map(convert_polygon).collect())
}

/// Passes the geometry to the conversion function for its kind.
///
/// Fails for every kind other than Polygon and MultiPolygon, naming the
/// offending geometry type.
pub fn converter(shape: Geometry) -> Result<Geometry> {
	match shape {
		Geometry::Polygon(polygon) => Ok(Geometry::Polygon(convert_polygon(&polygon))),
		Geometry::MultiPolygon(multi) => Ok(Geometry::MultiPolygon(convert_multipolygon(&multi))),
		other => bail!(
			"Can only convert Polygon or MultiPolygon geometries, not '{}'",
			other.type_name()
		),
	}
}
