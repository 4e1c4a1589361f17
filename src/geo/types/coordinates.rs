use std::fmt::Debug;

/// A single (longitude, latitude) position.
///
/// Longitude is `x`, latitude is `y`. The conversion only ever touches the
/// x axis; latitude values pass through bit-identical.
#[derive(Clone, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	/// Returns a new position moved by `dx` along the longitude axis.
	/// Latitude is carried over unchanged.
	#[must_use]
	pub fn shift_x(&self, dx: f64) -> Self {
		Self([self.0[0] + dx, self.0[1]])
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl From<&Coordinates> for geo::Coord {
	fn from(value: &Coordinates) -> Self {
		geo::Coord {
			x: value.x(),
			y: value.y(),
		}
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
