use super::GeoProperties;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// A property value, covering the same shapes a JSON value can take.
///
/// Numbers keep the distinction between unsigned, signed and floating point values
/// so that integers survive a round trip through GeoJSON text unchanged.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeoValue {
	Null,
	Bool(bool),
	UInt(u64),
	Int(i64),
	Double(f64),
	String(String),
	Array(Vec<GeoValue>),
	Object(GeoProperties),
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Array(v) => f.debug_tuple("Array").field(v).finish(),
			Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<&String> for GeoValue {
	fn from(value: &String) -> Self {
		GeoValue::String(value.clone())
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
			GeoValue::Int(value as i64)
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<u32> for GeoValue {
	fn from(value: u32) -> Self {
		GeoValue::UInt(value as u64)
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		if value < 0 {
			GeoValue::Int(value)
		} else {
			GeoValue::UInt(value as u64)
		}
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

impl<T> From<Vec<T>> for GeoValue
where
	GeoValue: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		GeoValue::Array(value.into_iter().map(GeoValue::from).collect())
	}
}

impl From<GeoProperties> for GeoValue {
	fn from(value: GeoProperties) -> Self {
		GeoValue::Object(value)
	}
}

impl<T> From<Option<T>> for GeoValue
where
	GeoValue: From<T>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(GeoValue::Null, GeoValue::from)
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Null => write!(f, "null"),
			GeoValue::String(v) => write!(f, "{v}"),
			GeoValue::UInt(v) => write!(f, "{v}"),
			GeoValue::Array(_) | GeoValue::Object(_) => {
				write!(f, "{}", serde_json::to_string(self).map_err(|_| std::fmt::Error)?)
			}
		}
	}
}

impl GeoValue {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			GeoValue::String(v) => Some(v),
			_ => None,
		}
	}
}
