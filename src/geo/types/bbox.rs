use super::Coordinates;
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// An axis-aligned geographical bounding box.
///
/// - `x_min` (west) / `x_max` (east): longitude range.
/// - `y_min` (south) / `y_max` (north): latitude range.
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoBBox {
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
		ensure!(x_min <= x_max, "x_min ({x_min}) must not exceed x_max ({x_max})");
		ensure!(y_min <= y_max, "y_min ({y_min}) must not exceed y_max ({y_max})");
		Ok(Self {
			x_min,
			y_min,
			x_max,
			y_max,
		})
	}

	/// A degenerate box covering a single position.
	#[must_use]
	pub fn from_point(c: &Coordinates) -> Self {
		Self {
			x_min: c.x(),
			y_min: c.y(),
			x_max: c.x(),
			y_max: c.y(),
		}
	}

	/// Grows the box to cover the given position.
	pub fn include_point(&mut self, c: &Coordinates) {
		self.x_min = self.x_min.min(c.x());
		self.y_min = self.y_min.min(c.y());
		self.x_max = self.x_max.max(c.x());
		self.y_max = self.y_max.max(c.y());
	}

	/// Grows the box to cover `other`.
	pub fn extend(&mut self, other: &GeoBBox) {
		self.x_min = self.x_min.min(other.x_min);
		self.y_min = self.y_min.min(other.y_min);
		self.x_max = self.x_max.max(other.x_max);
		self.y_max = self.y_max.max(other.y_max);
	}

	/// Returns true if `other` lies entirely inside this box (borders included).
	#[must_use]
	pub fn contains(&self, other: &GeoBBox) -> bool {
		self.x_min <= other.x_min && self.y_min <= other.y_min && self.x_max >= other.x_max && self.y_max >= other.y_max
	}

	/// Returns true if the interiors of the two boxes intersect.
	/// Boxes that only touch along an edge do not overlap.
	#[must_use]
	pub fn overlaps(&self, other: &GeoBBox) -> bool {
		self.x_min < other.x_max && other.x_min < self.x_max && self.y_min < other.y_max && other.y_min < self.y_max
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	/// The box as a closed counterclockwise `geo` polygon, used as the clip
	/// region in boolean operations.
	#[must_use]
	pub fn to_polygon(&self) -> geo::Polygon<f64> {
		geo::Polygon::new(
			geo::LineString::from(vec![
				(self.x_min, self.y_min),
				(self.x_max, self.y_min),
				(self.x_max, self.y_max),
				(self.x_min, self.y_max),
				(self.x_min, self.y_min),
			]),
			vec![],
		)
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}, {}, {}]", self.x_min, self.y_min, self.x_max, self.y_max)
	}
}
