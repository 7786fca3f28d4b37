use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of the active editor theme.
///
/// The host never interprets the value; it is forwarded verbatim so that the
/// sandbox can pick the matching stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for ThemeId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for ThemeId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl fmt::Display for ThemeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
