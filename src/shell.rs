use thiserror::Error;

/// Privileged actions only the host window may perform.
pub trait PrivilegedShell {
	/// Open `url` in the user's default browser.
	fn open_external(&self, url: &str) -> Result<(), ShellError>;

	/// Open developer tools attached to the sandboxed renderer.
	fn open_dev_tools(&self) -> Result<(), ShellError>;
}

#[derive(Debug, Error)]
pub enum ShellError {
	#[error("failed to open {url} externally: {reason}")]
	OpenExternal { url: String, reason: String },

	#[error("developer tools unavailable: {0}")]
	DevTools(String),
}

impl ShellError {
	pub fn open_external(url: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::OpenExternal {
			url: url.into(),
			reason: reason.into(),
		}
	}
}
