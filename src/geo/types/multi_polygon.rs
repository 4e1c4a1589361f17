use super::{GeoBBox, PolygonGeometry};
use anyhow::Result;
use std::fmt::Debug;

/// A collection of polygons, used for multi-part areas such as archipelagos
/// or polygons that were split along a meridian.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	pub fn verify(&self) -> Result<()> {
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<GeoBBox> {
		let mut polygons = self.0.iter();
		let mut bbox = polygons.next()?.compute_bounds()?;
		for polygon in polygons {
			if let Some(other) = polygon.compute_bounds() {
				bbox.extend(&other);
			}
		}
		Some(bbox)
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.into_iter().map(PolygonGeometry::from).collect())
	}
}

impl From<&MultiPolygonGeometry> for geo::MultiPolygon<f64> {
	fn from(multi: &MultiPolygonGeometry) -> Self {
		geo::MultiPolygon(multi.0.iter().map(geo::Polygon::from).collect())
	}
}
