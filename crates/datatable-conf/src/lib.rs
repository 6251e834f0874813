//! Settings for datatable
//!
//! [`DataTableSettings`] holds the defaults a table engine is constructed
//! with and the wire names of the request parameters it reads. Settings load
//! from TOML or JSON; every field is optional and falls back to its default.
//!
//! ```toml
//! default_items_per_page = 25
//! enable_paginator = true
//!
//! [parameters]
//! page_index = "page"
//! filter_prefix = "f_"
//! ```

#![warn(missing_docs)]

use datatable_core::ParameterNames;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Page size used when settings do not name one
pub const DEFAULT_ITEMS_PER_PAGE: usize = 50;

/// Settings error
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		/// Path of the settings file
		path: PathBuf,
		/// Underlying failure
		#[source]
		source: std::io::Error,
	},
	/// TOML content is malformed
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
	/// JSON content is malformed
	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),
	/// The file extension is neither `.toml` nor `.json`
	#[error("unsupported format: {0}")]
	UnsupportedFormat(String),
	/// Content parsed but holds inconsistent values
	#[error("validation error: {0}")]
	Invalid(String),
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Defaults and wire names for one table engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTableSettings {
	/// Page size until a request sets one
	#[serde(default = "default_items_per_page")]
	pub default_items_per_page: usize,

	/// Whether the engine paginates
	#[serde(default = "default_enable_paginator")]
	pub enable_paginator: bool,

	/// Request parameter names
	#[serde(default)]
	pub parameters: ParameterNames,
}

fn default_items_per_page() -> usize {
	DEFAULT_ITEMS_PER_PAGE
}

fn default_enable_paginator() -> bool {
	true
}

impl Default for DataTableSettings {
	fn default() -> Self {
		Self {
			default_items_per_page: DEFAULT_ITEMS_PER_PAGE,
			enable_paginator: true,
			parameters: ParameterNames::default(),
		}
	}
}

impl DataTableSettings {
	/// Parses and validates TOML settings
	///
	/// # Examples
	///
	/// ```
	/// use datatable_conf::DataTableSettings;
	///
	/// let settings = DataTableSettings::from_toml_str(
	///     "default_items_per_page = 20\n[parameters]\npage_index = \"page\"\n",
	/// )
	/// .unwrap();
	/// assert_eq!(settings.default_items_per_page, 20);
	/// assert_eq!(settings.parameters.page_index, "page");
	/// assert_eq!(settings.parameters.items_per_page, "items_per_page");
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Parses and validates JSON settings
	pub fn from_json_str(content: &str) -> Result<Self> {
		let settings: Self = serde_json::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Loads settings from a `.toml` or `.json` file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let settings = match path.extension().and_then(|ext| ext.to_str()) {
			Some("toml") => Self::from_toml_str(&content),
			Some("json") => Self::from_json_str(&content),
			_ => Err(SettingsError::UnsupportedFormat(
				"supported formats: .toml, .json".to_string(),
			)),
		}?;
		tracing::debug!(path = %path.display(), "datatable settings loaded");
		Ok(settings)
	}

	/// Checks that the values can drive an engine
	pub fn validate(&self) -> Result<()> {
		if self.enable_paginator && self.default_items_per_page == 0 {
			return Err(SettingsError::Invalid(
				"default_items_per_page must be greater than 0 when pagination is enabled".to_string(),
			));
		}

		let names = &self.parameters;
		let required = [
			("sorted_attribute_name", &names.sorted_attribute_name),
			("sorted_asc", &names.sorted_asc),
			("page_index", &names.page_index),
			("items_per_page", &names.items_per_page),
			("filter_prefix", &names.filter_prefix),
			("reset_filters", &names.reset_filters),
			("update_filters", &names.update_filters),
		];
		if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
			return Err(SettingsError::Invalid(format!(
				"parameters.{field} must not be empty"
			)));
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_settings() {
		let settings = DataTableSettings::default();
		assert_eq!(settings.default_items_per_page, 50);
		assert!(settings.enable_paginator);
		assert_eq!(settings.parameters.filter_prefix, "filter_panel_");
		assert!(settings.validate().is_ok());
	}

	#[rstest]
	fn test_empty_toml_gives_defaults() {
		let settings = DataTableSettings::from_toml_str("").unwrap();
		assert_eq!(settings, DataTableSettings::default());
	}

	#[rstest]
	fn test_zero_page_size_allowed_without_pagination() {
		// Arrange
		let content = "default_items_per_page = 0\nenable_paginator = false\n";

		// Act
		let settings = DataTableSettings::from_toml_str(content);

		// Assert
		assert!(settings.is_ok());
	}

	#[rstest]
	#[case("default_items_per_page = 0\n", "default_items_per_page")]
	#[case("[parameters]\nfilter_prefix = \"\"\n", "parameters.filter_prefix")]
	#[case("[parameters]\npage_index = \"  \"\n", "parameters.page_index")]
	fn test_invalid_settings(#[case] content: &str, #[case] mentioned: &str) {
		// Act
		let result = DataTableSettings::from_toml_str(content);

		// Assert
		match result {
			Err(SettingsError::Invalid(message)) => assert!(message.contains(mentioned), "{message}"),
			other => panic!("expected validation error, got {other:?}"),
		}
	}

	#[rstest]
	fn test_malformed_toml() {
		let result = DataTableSettings::from_toml_str("default_items_per_page = \"ten\"");
		assert!(matches!(result, Err(SettingsError::Parse(_))));
	}

	#[rstest]
	fn test_json_settings() {
		let settings =
			DataTableSettings::from_json_str(r#"{"enable_paginator": false, "parameters": {"sorted_asc": "dir"}}"#)
				.unwrap();
		assert!(!settings.enable_paginator);
		assert_eq!(settings.parameters.sorted_asc, "dir");
		assert_eq!(settings.parameters.page_index, "page_index");
	}
}
