use std::path::PathBuf;

use crate::settings::SandboxSettings;

/// Description of the sandboxed renderer element the embedder must create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxSpec {
	pub page: String,
	pub preload: Option<PathBuf>,
	pub context_isolation: bool,
	pub node_integration: bool,
	pub disabled_features: Vec<String>,
	/// Files dropped onto the sandbox must not navigate it.
	pub suppress_drop: bool,
}

impl SandboxSpec {
	/// Element attributes in creation order.
	pub fn attributes(&self) -> Vec<(&'static str, String)> {
		let mut attributes = vec![
			("id", "webview".to_string()),
			("class", "preview-webview".to_string()),
			("webpreferences", self.web_preferences()),
		];
		if !self.disabled_features.is_empty() {
			attributes.push(("disableblinkfeatures", self.disabled_features.join(",")));
		}
		if self.node_integration {
			attributes.push(("nodeintegration", "true".to_string()));
		}
		attributes.push(("src", self.page.clone()));
		if let Some(preload) = &self.preload {
			attributes.push(("preload", preload.display().to_string()));
		}
		attributes
	}

	fn web_preferences(&self) -> String {
		let isolation = if self.context_isolation { "yes" } else { "no" };
		format!("contextIsolation={isolation}")
	}
}

impl From<&SandboxSettings> for SandboxSpec {
	fn from(settings: &SandboxSettings) -> Self {
		Self {
			page: settings.page.clone(),
			preload: settings.preload.clone(),
			context_isolation: settings.context_isolation,
			node_integration: settings.node_integration,
			disabled_features: settings.disabled_features.clone(),
			suppress_drop: true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_settings_produce_isolated_sandbox() {
		let spec = SandboxSpec::from(&SandboxSettings::default());
		assert!(spec.suppress_drop);
		assert_eq!(
			spec.attributes(),
			vec![
				("id", "webview".to_string()),
				("class", "preview-webview".to_string()),
				("webpreferences", "contextIsolation=yes".to_string()),
				("disableblinkfeatures", "Auxclick".to_string()),
				("nodeintegration", "true".to_string()),
				("src", "webpane://preview/index.html".to_string()),
			]
		);
	}

	#[test]
	fn preload_and_isolation_are_reflected() {
		let settings = SandboxSettings {
			preload: Some(PathBuf::from("/opt/webpane/preload.js")),
			context_isolation: false,
			node_integration: false,
			disabled_features: Vec::new(),
			..SandboxSettings::default()
		};
		let attributes = SandboxSpec::from(&settings).attributes();
		assert!(attributes.contains(&("webpreferences", "contextIsolation=no".to_string())));
		assert!(attributes.contains(&("preload", "/opt/webpane/preload.js".to_string())));
		assert!(!attributes.iter().any(|(name, _)| *name == "nodeintegration"));
		assert!(!attributes.iter().any(|(name, _)| *name == "disableblinkfeatures"));
	}
}
