use super::*;
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// Closed sum type over every geometry kind that can appear in the input.
///
/// Only `Polygon` and `MultiPolygon` take part in the longitude conversion;
/// the other variants exist so that any GeoJSON geometry can be represented
/// and rejected with an error naming its type.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	pub fn new_point(value: [f64; 2]) -> Self {
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string(value: Vec<[f64; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon(value: Vec<Vec<[f64; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point(value: Vec<[f64; 2]>) -> Self {
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string(value: Vec<Vec<[f64; 2]>>) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon(value: Vec<Vec<Vec<[f64; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<GeoBBox> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPoint(g) => g.compute_bounds(),
			Geometry::MultiLineString(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
		}
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(_) => Ok(()),
			Geometry::LineString(g) => {
				ensure!(g.0.len() >= 2, "LineString must have at least 2 points");
				Ok(())
			}
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(_) => Ok(()),
			Geometry::MultiLineString(g) => {
				for line in &g.0 {
					ensure!(line.0.len() >= 2, "LineString must have at least 2 points");
				}
				Ok(())
			}
			Geometry::MultiPolygon(g) => g.verify(),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
