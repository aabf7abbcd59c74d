//! Per-type option factories for tree generation.

use rustc_hash::FxHashMap;
use trellis_core::{Binding, ControllerHint, FlagKey, OptionType, OptionValue, TrackedOption};

/// Everything a factory needs to synthesize one option: the field's
/// metadata, its default (read from the defaults instance), and a binding
/// into the live instance.
pub struct FieldSpec {
	/// Field name.
	pub name: &'static str,
	/// Descriptive comment.
	pub comment: Option<&'static str>,
	/// Default value from the defaults instance.
	pub default: OptionValue,
	/// Binding into the live instance.
	pub binding: Box<dyn Binding<OptionValue>>,
	/// Controller requested by the directive, if any.
	pub controller: Option<ControllerHint>,
	/// Post-apply flags from the directive.
	pub flags: &'static [FlagKey],
}

/// Synthesizes the tracked option for one schema field.
pub type OptionFactory = fn(FieldSpec) -> TrackedOption<OptionValue>;

/// Registry mapping value types to option factories.
///
/// Generation consults this once per directed field; a missing entry is a
/// fatal schema error, never a silently dropped option.
pub struct OptionFactoryRegistry {
	factories: FxHashMap<OptionType, OptionFactory>,
}

impl OptionFactoryRegistry {
	/// Registry with no factories. Callers supply their own via
	/// [`OptionFactoryRegistry::register`].
	pub fn empty() -> Self {
		Self {
			factories: FxHashMap::default(),
		}
	}

	/// Registry covering every built-in value type.
	pub fn with_builtins() -> Self {
		let mut registry = Self::empty();
		registry.register(OptionType::Bool, bool_option);
		registry.register(OptionType::Int, int_option);
		registry.register(OptionType::Float, float_option);
		registry.register(OptionType::String, string_option);
		registry
	}

	/// Registers or replaces the factory for a value type.
	pub fn register(&mut self, value_type: OptionType, factory: OptionFactory) {
		self.factories.insert(value_type, factory);
	}

	/// Looks up the factory for a value type.
	pub fn get(&self, value_type: OptionType) -> Option<OptionFactory> {
		self.factories.get(&value_type).copied()
	}

	/// True if the value type has a factory.
	pub fn supports(&self, value_type: OptionType) -> bool {
		self.factories.contains_key(&value_type)
	}
}

impl Default for OptionFactoryRegistry {
	fn default() -> Self {
		Self::with_builtins()
	}
}

fn build(spec: FieldSpec, fallback: ControllerHint) -> TrackedOption<OptionValue> {
	let controller = spec.controller.unwrap_or(fallback);
	let mut option = TrackedOption::new(spec.name, spec.default, spec.binding)
		.with_controller(controller);
	if let Some(comment) = spec.comment {
		option = option.with_comment(comment);
	}
	for &flag in spec.flags {
		option = option.with_flag(flag);
	}
	option
}

fn bool_option(spec: FieldSpec) -> TrackedOption<OptionValue> {
	build(spec, ControllerHint::TickBox)
}

fn int_option(spec: FieldSpec) -> TrackedOption<OptionValue> {
	build(spec, ControllerHint::TextField)
}

fn float_option(spec: FieldSpec) -> TrackedOption<OptionValue> {
	build(spec, ControllerHint::TextField)
}

fn string_option(spec: FieldSpec) -> TrackedOption<OptionValue> {
	build(spec, ControllerHint::TextField)
}
