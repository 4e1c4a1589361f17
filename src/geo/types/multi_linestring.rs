use super::{GeoBBox, LineStringGeometry};
use std::fmt::Debug;

/// A set of open point sequences.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl MultiLineStringGeometry {
	#[must_use]
	pub fn compute_bounds(&self) -> Option<GeoBBox> {
		let mut lines = self.0.iter().filter_map(LineStringGeometry::compute_bounds);
		let mut bbox = lines.next()?;
		for other in lines {
			bbox.extend(&other);
		}
		Some(bbox)
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
