//! Error types for schema handling and tree generation.

use thiserror::Error;
use trellis_core::OptionType;

/// Errors raised by [`ConfigClassHandler`](crate::ConfigClassHandler).
///
/// Construction and generation errors are fatal: no handler or partial tree
/// is ever returned alongside one. `AutoGenUnsupported` is recoverable —
/// gate generation on [`supports_auto_gen`](crate::ConfigClassHandler::supports_auto_gen)
/// instead of attempting it.
#[derive(Debug, Error)]
pub enum HandlerError {
	/// The schema could not be instantiated. Both the live and the defaults
	/// instance come from the same constructor; one checked failure mode
	/// covers both.
	#[error("failed to construct config instance for schema '{schema}': {reason}")]
	SchemaConstruction {
		/// Schema name.
		schema: &'static str,
		/// Why construction failed.
		reason: String,
	},

	/// A field directed at auto-gen has a value type with no registered
	/// option factory. Silently dropping the field would corrupt the
	/// dirty-count contract of the generated tree, so generation aborts.
	#[error("no option factory registered for field '{field}' of type {}", .value_type.name())]
	UnsupportedFieldType {
		/// Field name.
		field: String,
		/// The unrepresentable value type.
		value_type: OptionType,
	},

	/// Tree generation was requested on a handler built without auto-gen.
	#[error("auto-generation is not enabled for config '{id}'")]
	AutoGenUnsupported {
		/// Handler id.
		id: String,
	},
}
