use assert_cmd::{Command, cargo};
use convert_long::{GeoValue, read_file};
use predicates::str;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

/// Helper to get a testdata file path.
fn testdata(filename: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata").join(filename)
}

/// Helper to get a temp output file path.
fn temp_output(filename: &str) -> (TempDir, PathBuf) {
	let dir = tempdir().expect("failed to create temp dir");
	let path = dir.path().join(filename);
	(dir, path)
}

#[test]
fn requires_input_and_output() {
	let mut cmd = Command::new(cargo::cargo_bin!());
	cmd.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty())
		.stderr(str::contains("Usage: convert-long"));
}

#[test]
fn missing_input_reports_error_and_writes_nothing() {
	let (temp_dir, output) = temp_output("never-written.geojson");

	Command::new(cargo::cargo_bin!())
		.args(["no/such/file.geojson", output.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::is_empty())
		.stderr(str::contains("ERROR: file 'no/such/file.geojson' does not exist"));

	assert!(!output.exists(), "output file must not be created: {output:?}");

	drop(temp_dir);
}

#[test]
fn converts_collection_to_0_360_range() {
	let input = testdata("meridian.geojson");
	let (temp_dir, output) = temp_output("meridian-360.geojson");

	Command::new(cargo::cargo_bin!())
		.args([input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.success()
		.stdout(str::contains(format!(
			"Output polygons on range [0, 360] to file: '{}'",
			output.display()
		)));

	let collection = read_file(&output).unwrap();

	// west + east + the straddling polygon split into two pieces
	assert_eq!(collection.len(), 4);

	let bounds = collection.compute_bounds().unwrap();
	assert!(bounds.x_min >= 0.0, "x_min {} out of range", bounds.x_min);
	assert!(bounds.x_max <= 360.0, "x_max {} out of range", bounds.x_max);

	// attributes survive the conversion, including on both split pieces
	let straddling = collection
		.features
		.iter()
		.filter(|f| f.properties.get("name") == Some(&GeoValue::from("straddling")))
		.count();
	assert_eq!(straddling, 2);

	drop(temp_dir);
}

#[test]
fn eastern_data_passes_through_unchanged() {
	let input = testdata("meridian.geojson");
	let (temp_dir, output) = temp_output("meridian-360.geojson");

	Command::new(cargo::cargo_bin!())
		.args([input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.success();

	let before = read_file(&input).unwrap();
	let after = read_file(&output).unwrap();

	let east_before = before
		.features
		.iter()
		.find(|f| f.properties.get("name") == Some(&GeoValue::from("east")))
		.unwrap();
	let east_after = after
		.features
		.iter()
		.find(|f| f.properties.get("name") == Some(&GeoValue::from("east")))
		.unwrap();
	assert_eq!(east_after.geometry, east_before.geometry);

	drop(temp_dir);
}

#[test]
fn rejects_unsupported_output_format() {
	let input = testdata("meridian.geojson");
	let (temp_dir, output) = temp_output("meridian.shp");

	Command::new(cargo::cargo_bin!())
		.args([input.to_str().unwrap(), output.to_str().unwrap()])
		.assert()
		.failure()
		.stderr(str::contains("unsupported file extension '.shp'"));

	assert!(!output.exists(), "output file must not be created: {output:?}");

	drop(temp_dir);
}
