use super::{Coordinates, GeoBBox};
use std::fmt::Debug;

/// An open sequence of points.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl LineStringGeometry {
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

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn compute_bounds() {
		let line = LineStringGeometry::from(&[[0, 0], [10, 5], [-3, 2]]);
		assert_eq!(line.compute_bounds().unwrap().as_array(), [-3.0, 0.0, 10.0, 5.0]);
	}

	#[test]
	fn compute_bounds_empty() {
		assert!(LineStringGeometry(vec![]).compute_bounds().is_none());
	}
}
