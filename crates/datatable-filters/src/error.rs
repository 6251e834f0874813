//! Binding errors

use thiserror::Error;

/// Failure to populate a caller's filter object
#[derive(Debug, Error)]
pub enum BindError {
	/// A value could not be converted for the target field
	#[error("invalid value for field `{field}`: {message}")]
	InvalidValue {
		/// Name of the field being set
		field: String,
		/// Conversion failure
		message: String,
	},
	/// The target could not be converted to or from its serialized form
	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
	/// Any other failure reported by a binder
	#[error("{0}")]
	Custom(String),
}

impl BindError {
	/// Creates an invalid-value error
	pub fn invalid_value(field: impl Into<String>, message: impl ToString) -> Self {
		Self::InvalidValue {
			field: field.into(),
			message: message.to_string(),
		}
	}
}

/// Result type for binding operations
pub type Result<T> = std::result::Result<T, BindError>;
