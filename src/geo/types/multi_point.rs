use super::{Coordinates, GeoBBox};
use std::fmt::Debug;

/// A set of points.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<Coordinates>);

impl MultiPointGeometry {
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

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, Coordinates);
