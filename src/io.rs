//! Reading and writing feature collections.
//!
//! The file format is selected by extension; currently `.geojson` and
//! `.json` are supported, mapped onto the data model via the `geojson`
//! crate.

use crate::geo::{
	Coordinates, GeoCollection, GeoFeature, GeoProperties, GeoValue, Geometry, LineStringGeometry,
	MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Context, Result, bail, ensure};
use geojson::{Feature, FeatureCollection, GeoJson, JsonObject, feature::Id};
use std::{
	ffi::OsStr,
	fs::File,
	io::{BufReader, BufWriter, Read, Write},
	path::Path,
};

/// Reads a feature collection from a file, with the format chosen by the
/// file extension.
pub fn read_file(path: &Path) -> Result<GeoCollection> {
	check_extension(path)?;
	let file = File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
	read_geojson(BufReader::new(file)).with_context(|| format!("failed to read '{}'", path.display()))
}

/// Writes a feature collection to a file, with the format chosen by the
/// file extension.
pub fn write_file(path: &Path, collection: &GeoCollection) -> Result<()> {
	check_extension(path)?;
	let file = File::create(path).with_context(|| format!("failed to create '{}'", path.display()))?;
	write_geojson(BufWriter::new(file), collection).with_context(|| format!("failed to write '{}'", path.display()))
}

fn check_extension(path: &Path) -> Result<()> {
	match path.extension().and_then(OsStr::to_str) {
		Some("geojson" | "json") => Ok(()),
		Some(extension) => bail!("unsupported file extension '.{extension}', expected '.geojson' or '.json'"),
		None => bail!("cannot determine the file format of '{}'", path.display()),
	}
}

pub fn read_geojson(mut reader: impl Read) -> Result<GeoCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_geojson(&buffer)
}

pub fn write_geojson(mut writer: impl Write, collection: &GeoCollection) -> Result<()> {
	let feature_collection = FeatureCollection {
		bbox: None,
		features: collection.features.iter().map(feature_to_geojson).collect(),
		foreign_members: None,
	};
	serde_json::to_writer(&mut writer, &feature_collection)?;
	// BufWriter's Drop discards flush errors
	writer.flush()?;
	Ok(())
}

pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	let geojson: GeoJson = json.parse().context("invalid GeoJSON")?;
	let collection = match geojson {
		GeoJson::FeatureCollection(collection) => collection,
		GeoJson::Feature(_) => bail!("expected a FeatureCollection, got a Feature"),
		GeoJson::Geometry(_) => bail!("expected a FeatureCollection, got a Geometry"),
	};
	let features = collection
		.features
		.into_iter()
		.map(feature_from_geojson)
		.collect::<Result<Vec<GeoFeature>>>()?;
	Ok(GeoCollection::from(features))
}

fn feature_from_geojson(feature: Feature) -> Result<GeoFeature> {
	let geometry = feature.geometry.context("feature is missing 'geometry'")?;

	let mut properties = GeoProperties::new();
	if let Some(object) = feature.properties {
		for (key, value) in object {
			let value = value_from_json(&value).with_context(|| format!("invalid value of property '{key}'"))?;
			properties.insert(key, value);
		}
	}

	Ok(GeoFeature {
		id: feature.id.as_ref().map(id_from_geojson),
		geometry: geometry_from_geojson(geometry.value)?,
		properties,
	})
}

fn feature_to_geojson(feature: &GeoFeature) -> Feature {
	let properties: JsonObject = feature
		.properties
		.iter()
		.map(|(key, value)| (key.clone(), value_to_json(value)))
		.collect();

	Feature {
		bbox: None,
		geometry: Some(geojson::Geometry::new(geometry_to_geojson(&feature.geometry))),
		id: feature.id.as_ref().map(id_to_geojson),
		properties: Some(properties),
		foreign_members: None,
	}
}

fn geometry_from_geojson(value: geojson::Value) -> Result<Geometry> {
	use geojson::Value;

	fn coordinates(position: &[f64]) -> Result<Coordinates> {
		// altitude values beyond (longitude, latitude) are dropped
		ensure!(position.len() >= 2, "a position must have at least two values");
		Ok(Coordinates::new(position[0], position[1]))
	}
	fn coordinates_list(positions: &[Vec<f64>]) -> Result<Vec<Coordinates>> {
		positions.iter().map(|p| coordinates(p)).collect()
	}
	fn polygon(rings: &[Vec<Vec<f64>>]) -> Result<PolygonGeometry> {
		Ok(PolygonGeometry(
			rings
				.iter()
				.map(|r| Ok(RingGeometry(coordinates_list(r)?)))
				.collect::<Result<Vec<RingGeometry>>>()?,
		))
	}

	Ok(match value {
		Value::Point(p) => Geometry::Point(PointGeometry(coordinates(&p)?)),
		Value::MultiPoint(ps) => Geometry::MultiPoint(MultiPointGeometry(coordinates_list(&ps)?)),
		Value::LineString(ls) => Geometry::LineString(LineStringGeometry(coordinates_list(&ls)?)),
		Value::MultiLineString(lines) => Geometry::MultiLineString(MultiLineStringGeometry(
			lines
				.iter()
				.map(|l| Ok(LineStringGeometry(coordinates_list(l)?)))
				.collect::<Result<Vec<LineStringGeometry>>>()?,
		)),
		Value::Polygon(rings) => Geometry::Polygon(polygon(&rings)?),
		Value::MultiPolygon(polygons) => Geometry::MultiPolygon(MultiPolygonGeometry(
			polygons
				.iter()
				.map(|p| polygon(p))
				.collect::<Result<Vec<PolygonGeometry>>>()?,
		)),
		Value::GeometryCollection(_) => bail!("GeometryCollection geometries are not supported"),
	})
}

fn geometry_to_geojson(geometry: &Geometry) -> geojson::Value {
	use geojson::Value;

	fn position(c: &Coordinates) -> Vec<f64> {
		vec![c.x(), c.y()]
	}
	fn positions(coordinates: &[Coordinates]) -> Vec<Vec<f64>> {
		coordinates.iter().map(position).collect()
	}
	fn rings(polygon: &PolygonGeometry) -> Vec<Vec<Vec<f64>>> {
		polygon.0.iter().map(|r| positions(&r.0)).collect()
	}

	match geometry {
		Geometry::Point(g) => Value::Point(position(&g.0)),
		Geometry::MultiPoint(g) => Value::MultiPoint(positions(&g.0)),
		Geometry::LineString(g) => Value::LineString(positions(&g.0)),
		Geometry::MultiLineString(g) => Value::MultiLineString(g.0.iter().map(|l| positions(&l.0)).collect()),
		Geometry::Polygon(g) => Value::Polygon(rings(g)),
		Geometry::MultiPolygon(g) => Value::MultiPolygon(g.0.iter().map(rings).collect()),
	}
}

fn value_from_json(value: &serde_json::Value) -> Result<GeoValue> {
	Ok(match value {
		serde_json::Value::Null => GeoValue::Null,
		serde_json::Value::Bool(v) => GeoValue::Bool(*v),
		serde_json::Value::Number(n) => number_from_json(n),
		serde_json::Value::String(v) => GeoValue::String(v.clone()),
		serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
			bail!("arrays and objects are not supported as property values")
		}
	})
}

fn value_to_json(value: &GeoValue) -> serde_json::Value {
	match value {
		GeoValue::Bool(v) => serde_json::Value::Bool(*v),
		GeoValue::Double(v) => serde_json::Number::from_f64(*v).map_or(serde_json::Value::Null, serde_json::Value::Number),
		GeoValue::Int(v) => serde_json::Value::Number((*v).into()),
		GeoValue::Null => serde_json::Value::Null,
		GeoValue::String(v) => serde_json::Value::String(v.clone()),
		GeoValue::UInt(v) => serde_json::Value::Number((*v).into()),
	}
}

fn number_from_json(number: &serde_json::Number) -> GeoValue {
	if let Some(value) = number.as_u64() {
		GeoValue::UInt(value)
	} else if let Some(value) = number.as_i64() {
		GeoValue::Int(value)
	} else {
		GeoValue::Double(number.as_f64().unwrap_or_default())
	}
}

fn id_from_geojson(id: &Id) -> GeoValue {
	match id {
		Id::String(value) => GeoValue::String(value.clone()),
		Id::Number(number) => number_from_json(number),
	}
}

fn id_to_geojson(id: &GeoValue) -> Id {
	match id {
		GeoValue::Int(value) => Id::Number((*value).into()),
		GeoValue::UInt(value) => Id::Number((*value).into()),
		GeoValue::Double(value) => {
			serde_json::Number::from_f64(*value).map_or_else(|| Id::String(value.to_string()), Id::Number)
		}
		other => Id::String(other.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::io::Cursor;

	#[test]
	fn parse_valid_feature_collection() -> Result<()> {
		let json = r#"
		{
			"type": "FeatureCollection",
			"features": [
				{
					"type": "Feature",
					"geometry": {
						"type": "Point",
						"coordinates": [102.0, 0.5]
					},
					"properties": {
						"prop0": "value0"
					}
				}
			]
		}
		"#;

		let collection = parse_geojson(json)?;
		assert_eq!(collection.len(), 1);

		let feature = &collection.features[0];
		assert_eq!(feature.geometry.type_name(), "Point");
		assert_eq!(feature.properties.get("prop0"), Some(&GeoValue::from("value0")));
		Ok(())
	}

	#[test]
	fn parse_rejects_non_collections() {
		let json = r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#;
		let error = parse_geojson(json).unwrap_err().to_string();
		assert!(error.contains("expected a FeatureCollection"));
	}

	#[test]
	fn parse_rejects_missing_geometry() {
		let json = r#"
		{
			"type": "FeatureCollection",
			"features": [{"type": "Feature", "geometry": null, "properties": {}}]
		}
		"#;
		assert!(parse_geojson(json).is_err());
	}

	#[test]
	fn parse_rejects_geometry_collections() {
		let json = r#"
		{
			"type": "FeatureCollection",
			"features": [
				{
					"type": "Feature",
					"geometry": {
						"type": "GeometryCollection",
						"geometries": [{"type": "Point", "coordinates": [1.0, 2.0]}]
					},
					"properties": {}
				}
			]
		}
		"#;
		let error = parse_geojson(json).unwrap_err().to_string();
		assert!(error.contains("GeometryCollection"));
	}

	#[test]
	fn parse_feature_ids() -> Result<()> {
		let json = r#"
		{
			"type": "FeatureCollection",
			"features": [
				{
					"type": "Feature",
					"id": "feature1",
					"geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
					"properties": {}
				},
				{
					"type": "Feature",
					"id": 42,
					"geometry": {"type": "Point", "coordinates": [3.0, 4.0]},
					"properties": {}
				}
			]
		}
		"#;

		let collection = parse_geojson(json)?;
		assert_eq!(collection.features[0].id, Some(GeoValue::from("feature1")));
		assert_eq!(collection.features[1].id, Some(GeoValue::UInt(42)));
		Ok(())
	}

	#[test]
	fn read_geojson_from_reader() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]},"properties":{}}]}"#;
		let collection = read_geojson(Cursor::new(json))?;
		assert_eq!(collection.len(), 1);
		assert_eq!(collection.features[0].geometry.type_name(), "Polygon");
		Ok(())
	}

	#[test]
	fn write_then_parse_round_trip() -> Result<()> {
		let mut feature = GeoFeature::new(Geometry::new_polygon(vec![
			vec![[-30.0, 0.0], [-10.0, 0.0], [-10.0, 20.0], [-30.0, 20.0], [-30.0, 0.0]],
			vec![[-25.0, 5.0], [-25.0, 10.0], [-20.0, 10.0], [-20.0, 5.0], [-25.0, 5.0]],
		]));
		feature.set_id(7u64);
		feature.set_property("name", "westland");
		feature.set_property("population", 348_085);
		feature.set_property("density", 1.5);
		feature.set_property("inhabited", true);
		let collection = GeoCollection::from(vec![feature]);

		let mut buffer = Vec::new();
		write_geojson(&mut buffer, &collection)?;
		let parsed = parse_geojson(&String::from_utf8(buffer)?)?;

		assert_eq!(parsed, collection);
		Ok(())
	}

	#[test]
	fn write_surfaces_io_errors_behind_buffering() {
		struct FailingWriter;
		impl Write for FailingWriter {
			fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
				Err(std::io::Error::other("device out of space"))
			}
			fn flush(&mut self) -> std::io::Result<()> {
				Err(std::io::Error::other("device out of space"))
			}
		}

		let collection = GeoCollection::from(vec![GeoFeature::new(Geometry::new_point([1.0, 2.0]))]);
		let result = write_geojson(BufWriter::new(FailingWriter), &collection);
		assert!(result.is_err(), "buffered write error must be reported: {result:?}");
	}

	#[test]
	fn extension_dispatch() {
		assert!(check_extension(Path::new("data.geojson")).is_ok());
		assert!(check_extension(Path::new("data.json")).is_ok());

		let error = check_extension(Path::new("data.shp")).unwrap_err().to_string();
		assert!(error.contains(".shp"));

		assert!(check_extension(Path::new("data")).is_err());
	}

	#[test]
	fn altitude_is_dropped() -> Result<()> {
		let json = r#"
		{
			"type": "FeatureCollection",
			"features": [
				{
					"type": "Feature",
					"geometry": {"type": "Point", "coordinates": [1.0, 2.0, 500.0]},
					"properties": {}
				}
			]
		}
		"#;
		let collection = parse_geojson(json)?;
		assert_eq!(
			collection.features[0].geometry,
			Geometry::new_point([1.0, 2.0])
		);
		Ok(())
	}
}
