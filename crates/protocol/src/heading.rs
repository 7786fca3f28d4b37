use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Heading the sandbox should scroll into view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingTarget {
	pub depth: u32,
	pub text: String,
}

impl HeadingTarget {
	pub fn new(depth: u32, text: impl Into<String>) -> Self {
		Self {
			depth,
			text: text.into(),
		}
	}

	/// Extract a target from a `toc-jump` notification payload.
	///
	/// Returns `None` unless `depth` is a positive whole number (`2` or `2.0`)
	/// and `text` is a non-empty string.
	pub fn from_payload(payload: &Value) -> Option<Self> {
		let depth = payload
			.get("depth")
			.and_then(Value::as_f64)
			.filter(|depth| {
				*depth >= 1.0 && depth.fract() == 0.0 && *depth <= f64::from(u32::MAX)
			})
			.map(|depth| depth as u32)?;
		let text = payload
			.get("text")
			.and_then(Value::as_str)
			.filter(|text| !text.is_empty())?;
		Some(Self::new(depth, text))
	}
}
