use super::*;
use std::fmt::Debug;

/// One record of a feature collection: a geometry plus its attribute fields.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoValue>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	pub fn set_id<T>(&mut self, id: T)
	where
		GeoValue: From<T>,
	{
		self.id = Some(GeoValue::from(id));
	}

	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key.to_string(), GeoValue::from(value));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_feature_has_no_attributes() {
		let feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		assert_eq!(feature.id, None);
		assert!(feature.properties.is_empty());
	}

	#[test]
	fn set_id_and_property() {
		let mut feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		feature.set_id(13u64);
		feature.set_property("name", "Nice");
		feature.set_property("population", 348_085);
		assert_eq!(feature.id, Some(GeoValue::UInt(13)));
		assert_eq!(feature.properties.get("name"), Some(&GeoValue::from("Nice")));
	}
}
