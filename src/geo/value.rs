use std::fmt::{Debug, Display};

/// An attribute value of a feature. Covers everything a GeoJSON property
/// or feature id can carry except nested arrays and objects.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Bool(bool),
	Double(f64),
	Int(i64),
	Null,
	String(String),
	UInt(u64),
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => Display::fmt(v, f),
			GeoValue::Double(v) => Display::fmt(v, f),
			GeoValue::Int(v) => Display::fmt(v, f),
			GeoValue::Null => f.write_str("null"),
			GeoValue::String(v) => f.write_str(v),
			GeoValue::UInt(v) => Display::fmt(v, f),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(i64::from(value))
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}
