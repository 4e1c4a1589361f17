use super::{GeoBBox, MultiPolygonGeometry, RingGeometry};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A polygon as a list of rings. The first ring is the exterior boundary,
/// every further ring is an interior hole.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	pub fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<GeoBBox> {
		// holes lie inside the exterior, so folding all rings is equivalent
		let mut rings = self.0.iter();
		let mut bbox = rings.next()?.compute_bounds()?;
		for ring in rings {
			if let Some(other) = ring.compute_bounds() {
				bbox.extend(&other);
			}
		}
		Some(bbox)
	}

	#[must_use]
	pub fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		for interior in interiors {
			rings.push(RingGeometry::from(interior));
		}
		PolygonGeometry(rings)
	}
}

impl From<&PolygonGeometry> for geo::Polygon<f64> {
	fn from(polygon: &PolygonGeometry) -> Self {
		let mut rings = polygon.0.iter().map(geo::LineString::from);
		let exterior = rings.next().unwrap_or_else(|| geo::LineString(vec![]));
		geo::Polygon::new(exterior, rings.collect())
	}
}
