use super::{Coordinates, GeoBBox};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A closed ring of coordinates, the building block of polygons.
/// The first and last points must be identical to form a closed shape.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Verifies that the ring has at least 4 coordinates (3 unique points
	/// plus the closing point) and that it is closed.
	pub fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points");
		ensure!(self.0.first() == self.0.last(), "Ring must be closed");
		Ok(())
	}

	/// Bounding box of all coordinates, or `None` for an empty ring.
	#[must_use]
	pub fn compute_bounds(&self) -> Option<GeoBBox> {
		let mut coords = self.0.iter();
		let mut bbox = GeoBBox::from_point(coords.next()?);
		for coord in coords {
			bbox.include_point(coord);
		}
		Some(bbox)
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

impl From<&RingGeometry> for geo::LineString<f64> {
	fn from(ring: &RingGeometry) -> Self {
		geo::LineString(ring.0.iter().map(geo::Coord::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn square() -> RingGeometry {
		RingGeometry::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]])
	}

	#[test]
	fn verify_valid() {
		assert!(square().verify().is_ok());
	}

	#[test]
	fn verify_too_few_points() {
		let ring = RingGeometry::from(&[[0, 0], [1, 1], [0, 0]]);
		assert!(ring.verify().is_err());
	}

	#[test]
	fn verify_not_closed() {
		let ring = RingGeometry::from(&[[0, 0], [1, 0], [1, 1], [0, 1]]);
		assert!(ring.verify().is_err());
	}

	#[test]
	fn compute_bounds() {
		let bounds = square().compute_bounds().unwrap();
		assert_eq!(bounds.as_array(), [0.0, 0.0, 10.0, 10.0]);
	}

	#[test]
	fn compute_bounds_empty() {
		assert!(RingGeometry(vec![]).compute_bounds().is_none());
	}

	#[test]
	fn geo_linestring_round_trip() {
		let ring = square();
		let ls = geo::LineString::from(&ring);
		assert_eq!(ls.0.len(), 5);
		assert_eq!(RingGeometry::from(ls), ring);
	}

	#[test]
	fn debug_format() {
		let ring = RingGeometry::from(&[[1, 2], [3, 4]]);
		assert!(format!("{ring:?}").contains("[1.0, 2.0]"));
	}
}
