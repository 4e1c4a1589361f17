use super::{GeoBBox, GeoFeature};
use crate::io::parse_geojson;
use anyhow::Result;

/// An ordered collection of features, the unit the converter works on.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
}

impl GeoCollection {
	#[must_use]
	pub fn from(features: Vec<GeoFeature>) -> Self {
		Self { features }
	}

	pub fn from_json_str(json_str: &str) -> Result<Self> {
		parse_geojson(json_str)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	/// Bounding box over all feature geometries, or `None` if the collection
	/// holds no coordinates at all.
	#[must_use]
	pub fn compute_bounds(&self) -> Option<GeoBBox> {
		let mut bounds = self.features.iter().filter_map(|f| f.geometry.compute_bounds());
		let mut bbox = bounds.next()?;
		for other in bounds {
			bbox.extend(&other);
		}
		Some(bbox)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::Geometry;

	#[test]
	fn compute_bounds_spans_features() {
		let collection = GeoCollection::from(vec![
			GeoFeature::new(Geometry::new_polygon(vec![vec![
				[-30.0, -10.0],
				[-10.0, -10.0],
				[-10.0, 10.0],
				[-30.0, -10.0],
			]])),
			GeoFeature::new(Geometry::new_polygon(vec![vec![
				[10.0, 0.0],
				[30.0, 0.0],
				[30.0, 20.0],
				[10.0, 0.0],
			]])),
		]);
		assert_eq!(collection.len(), 2);
		assert_eq!(collection.compute_bounds().unwrap().as_array(), [-30.0, -10.0, 30.0, 20.0]);
	}

	#[test]
	fn empty_collection() {
		let collection = GeoCollection::from(vec![]);
		assert!(collection.is_empty());
		assert!(collection.compute_bounds().is_none());
	}
}
