//! Settings loading and resolution.
//!
//! Values come from optional default files, explicitly requested files and
//! `WEBPANE__SECTION__KEY` environment variables, in increasing precedence.
//! [`load`] returns validated [`Settings`] with defaults filled in.

mod errors;
mod loader;
mod raw;
mod resolved;
mod sources;

pub use errors::{SettingSource, SettingsError};
pub use loader::{LoadOptions, load};
pub use resolved::{
	DebugSettings, DefaultSettings, LogFormat, LoggingSettings, SandboxSettings, Settings,
};
