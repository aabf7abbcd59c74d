//! Declared schema members and their accessors.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;
use trellis_core::{Binding, ControllerHint, FlagKey, FromOptionValue, OptionType, OptionValue};

/// Auto-gen placement and presentation directives for one schema field.
#[derive(Debug, Clone, Copy)]
pub struct AutoGenDirective {
	/// Target category, keyed by string; categories appear in first-seen
	/// order.
	pub category: &'static str,
	/// Target group within the category. `None` or empty attaches the
	/// option directly to the category rather than a subgroup.
	pub group: Option<&'static str>,
	/// Controller hint for the presentation layer. `None` picks the
	/// factory's default for the value type.
	pub controller: Option<ControllerHint>,
	/// Post-apply flags attached to the generated option.
	pub flags: &'static [FlagKey],
}

impl AutoGenDirective {
	/// Directive attaching directly to `category` with all defaults.
	pub const fn category(category: &'static str) -> Self {
		Self {
			category,
			group: None,
			controller: None,
			flags: &[],
		}
	}
}

/// Reflected metadata for one schema member.
///
/// A field does not hold a value; its fn-pointer accessors read and write
/// whichever instance they are handed. The handler double-binds every field
/// by applying the same accessors to its live and its defaults instance.
pub struct ConfigField<T> {
	/// Member name, used as the generated option's display name.
	pub name: &'static str,
	/// Descriptive comment.
	pub comment: Option<&'static str>,
	/// Key used by serializers.
	pub serial_key: &'static str,
	/// The member's value type.
	pub value_type: OptionType,
	/// Reads the member out of an instance.
	pub get: fn(&T) -> OptionValue,
	/// Writes the member into an instance.
	pub set: fn(&mut T, OptionValue),
	/// Present when the field participates in auto-gen.
	pub auto_gen: Option<AutoGenDirective>,
}

impl<T> ConfigField<T> {
	/// Reads this field from `instance`.
	pub fn read_from(&self, instance: &T) -> OptionValue {
		(self.get)(instance)
	}

	/// Writes `value` into `instance`.
	pub fn write_to(&self, instance: &mut T, value: OptionValue) {
		(self.set)(instance, value)
	}
}

/// A declaratively described config schema.
///
/// Implement via the [`config_schema!`](crate::config_schema) macro; the
/// field list is the declaration-order registration table the handler derives
/// everything from.
pub trait ConfigSchema: Sized + 'static {
	/// Schema name, used in diagnostics.
	const NAME: &'static str;

	/// Constructs a fresh instance. Called twice per handler (live and
	/// defaults); a failure is a fatal configuration error.
	fn construct() -> Result<Self, String>;

	/// The declared fields, in declaration order.
	fn fields() -> Vec<ConfigField<Self>>;
}

/// Binding into one field of a shared live instance.
///
/// Generated options hold one of these; it closes over the handler's live
/// instance handle, not ownership of the instance itself.
pub struct FieldBinding<T: 'static> {
	live: Arc<RwLock<T>>,
	get: fn(&T) -> OptionValue,
	set: fn(&mut T, OptionValue),
}

impl<T: 'static> FieldBinding<T> {
	/// Creates a binding from a live handle and field accessors.
	pub fn new(live: Arc<RwLock<T>>, get: fn(&T) -> OptionValue, set: fn(&mut T, OptionValue)) -> Self {
		Self { live, get, set }
	}
}

impl<T: 'static> Binding<OptionValue> for FieldBinding<T> {
	fn get(&self) -> OptionValue {
		(self.get)(&self.live.read())
	}

	fn set(&self, value: OptionValue) {
		(self.set)(&mut self.live.write(), value)
	}
}

/// Writes a type-erased value into a typed field slot, dropping mismatches
/// with a warning. Used by the accessors [`config_schema!`](crate::config_schema)
/// generates.
pub fn write_checked<V: FromOptionValue>(slot: &mut V, value: OptionValue, field: &'static str) {
	match V::from_option(&value) {
		Some(v) => *slot = v,
		None => warn!(
			field,
			got = value.type_name(),
			"type mismatch writing schema field, ignoring"
		),
	}
}
