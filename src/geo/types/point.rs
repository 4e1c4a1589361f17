use super::{Coordinates, GeoBBox};
use std::fmt::Debug;

/// A single point. Not convertible by this tool, but representable so that
/// arbitrary GeoJSON input can be read and rejected with a precise error.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<GeoBBox> {
		Some(GeoBBox::from_point(&self.0))
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accessors_and_bounds() {
		let point = PointGeometry::from(&[3, 4]);
		assert_eq!(point.x(), 3.0);
		assert_eq!(point.y(), 4.0);
		assert_eq!(point.compute_bounds().unwrap().as_array(), [3.0, 4.0, 3.0, 4.0]);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PointGeometry::from(&[1, 2])), "[1.0, 2.0]");
	}
}
