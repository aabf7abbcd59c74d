//! The unit of editable state.

use std::any::Any;

use crate::binding::Binding;
use crate::flag::FlagKey;

/// Presentation hint for the control editing an option.
///
/// Inert data carried through to the rendering layer; nothing in this crate
/// interprets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerHint {
	/// On/off toggle.
	TickBox,
	/// Numeric slider with inclusive bounds.
	Slider {
		/// Lower bound.
		min: f64,
		/// Upper bound.
		max: f64,
		/// Interval between selectable values.
		step: f64,
	},
	/// Free-form text input.
	TextField,
}

/// An editable option: a committed value reachable through its binding, plus
/// an optional staged ("pending") edit that has not been written back yet.
///
/// The core invariant is three-way: the option is *changed* exactly when a
/// pending value exists and differs from what the binding currently reports.
/// Staging the committed value back (or staging and then discarding) leaves
/// the option clean.
pub struct TrackedOption<V: PartialEq + Clone + 'static> {
	name: String,
	comment: Option<String>,
	default: V,
	binding: Box<dyn Binding<V>>,
	pending: Option<V>,
	flags: Vec<FlagKey>,
	controller: Option<ControllerHint>,
}

impl<V: PartialEq + Clone + 'static> TrackedOption<V> {
	/// Creates an option with no pending edit.
	pub fn new(name: impl Into<String>, default: V, binding: impl Binding<V> + 'static) -> Self {
		Self {
			name: name.into(),
			comment: None,
			default,
			binding: Box::new(binding),
			pending: None,
			flags: Vec::new(),
			controller: None,
		}
	}

	/// Attaches a descriptive comment.
	pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
		self.comment = Some(comment.into());
		self
	}

	/// Schedules a post-apply flag for this option.
	pub fn with_flag(mut self, flag: FlagKey) -> Self {
		if !self.flags.contains(&flag) {
			self.flags.push(flag);
		}
		self
	}

	/// Sets the presentation controller hint.
	pub fn with_controller(mut self, controller: ControllerHint) -> Self {
		self.controller = Some(controller);
		self
	}

	/// The immutable default value.
	pub fn default_value(&self) -> &V {
		&self.default
	}

	/// Stages `value` as the pending edit, unconditionally.
	///
	/// No validation happens at this layer; range checks belong to the edit
	/// surface that produced the value.
	pub fn request_set(&mut self, value: V) {
		self.pending = Some(value);
	}

	/// Stages the default value as the pending edit.
	pub fn request_set_default(&mut self) {
		self.request_set(self.default.clone());
	}

	/// The value the edit surface should currently display: the pending edit
	/// if one exists, otherwise the committed value.
	pub fn pending_value(&self) -> V {
		match &self.pending {
			Some(v) => v.clone(),
			None => self.binding.get(),
		}
	}

	/// Reads the committed value through the binding.
	pub fn committed_value(&self) -> V {
		self.binding.get()
	}
}

/// Object-safe surface of a tracked option.
///
/// Groups hold options of differing value types behind this trait; the typed
/// operations ([`TrackedOption::request_set`], [`TrackedOption::pending_value`])
/// are reached by downcasting through [`AnyOption::as_any_mut`].
pub trait AnyOption {
	/// Display name.
	fn name(&self) -> &str;

	/// Descriptive comment, if any.
	fn comment(&self) -> Option<&str>;

	/// True when a pending edit exists and differs from the committed value.
	fn changed(&self) -> bool;

	/// Commits the pending edit through the binding if [`AnyOption::changed`].
	///
	/// Returns `true` if a write was issued. The pending value is left in
	/// place by contract: the caller re-checks `changed()` afterwards and a
	/// still-changed option is a reconciliation failure it must absorb by
	/// forcing [`AnyOption::forget_pending`].
	fn apply_value(&mut self) -> bool;

	/// Discards the pending edit, if any.
	fn forget_pending(&mut self);

	/// Stages the default value as the pending edit.
	fn request_set_default(&mut self);

	/// Post-apply flags scheduled by this option.
	fn flags(&self) -> &[FlagKey];

	/// Presentation controller hint, if one was set.
	fn controller(&self) -> Option<ControllerHint>;

	/// Upcast for typed access.
	fn as_any(&self) -> &dyn Any;

	/// Mutable upcast for typed access.
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<V: PartialEq + Clone + 'static> AnyOption for TrackedOption<V> {
	fn name(&self) -> &str {
		&self.name
	}

	fn comment(&self) -> Option<&str> {
		self.comment.as_deref()
	}

	fn changed(&self) -> bool {
		match &self.pending {
			Some(v) => *v != self.binding.get(),
			None => false,
		}
	}

	fn apply_value(&mut self) -> bool {
		if !self.changed() {
			return false;
		}
		let Some(value) = self.pending.clone() else {
			return false;
		};
		self.binding.set(value);
		true
	}

	fn forget_pending(&mut self) {
		self.pending = None;
	}

	fn request_set_default(&mut self) {
		TrackedOption::request_set_default(self);
	}

	fn flags(&self) -> &[FlagKey] {
		&self.flags
	}

	fn controller(&self) -> Option<ControllerHint> {
		self.controller
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::binding::FnBinding;

	fn cell_binding(cell: &Rc<RefCell<i64>>) -> FnBinding<i64> {
		let get = Rc::clone(cell);
		let set = Rc::clone(cell);
		FnBinding::new(move || *get.borrow(), move |v| *set.borrow_mut() = v)
	}

	#[test]
	fn test_request_set_differing_value_marks_changed() {
		let cell = Rc::new(RefCell::new(5));
		let mut opt = TrackedOption::new("retries", 5, cell_binding(&cell));
		assert!(!opt.changed());
		opt.request_set(9);
		assert!(opt.changed());
	}

	#[test]
	fn test_staging_committed_value_is_not_changed() {
		let cell = Rc::new(RefCell::new(5));
		let mut opt = TrackedOption::new("retries", 5, cell_binding(&cell));
		opt.request_set(5);
		assert!(!opt.changed());
	}

	#[test]
	fn test_forget_pending_always_clean() {
		let cell = Rc::new(RefCell::new(5));
		let mut opt = TrackedOption::new("retries", 0, cell_binding(&cell));
		opt.request_set(42);
		opt.forget_pending();
		assert!(!opt.changed());
		assert_eq!(opt.pending_value(), 5);
	}

	#[test]
	fn test_default_round_trip() {
		let cell = Rc::new(RefCell::new(17));
		let mut opt = TrackedOption::new("retries", 3, cell_binding(&cell));
		opt.request_set_default();
		assert!(opt.apply_value());
		assert_eq!(*cell.borrow(), 3);
	}

	#[test]
	fn test_apply_without_pending_is_noop() {
		let cell = Rc::new(RefCell::new(1));
		let mut opt = TrackedOption::new("retries", 1, cell_binding(&cell));
		assert!(!opt.apply_value());
		assert_eq!(*cell.borrow(), 1);
	}

	#[test]
	fn test_apply_leaves_pending_in_place() {
		let cell = Rc::new(RefCell::new(1));
		let mut opt = TrackedOption::new("retries", 1, cell_binding(&cell));
		opt.request_set(2);
		assert!(opt.apply_value());
		// Binding now agrees with pending, so the option reads clean even
		// though the pending value was not cleared.
		assert!(!opt.changed());
		assert_eq!(opt.pending_value(), 2);
	}

	#[test]
	fn test_pending_value_prefers_staged_edit() {
		let cell = Rc::new(RefCell::new(5));
		let mut opt = TrackedOption::new("retries", 5, cell_binding(&cell));
		assert_eq!(opt.pending_value(), 5);
		opt.request_set(9);
		assert_eq!(opt.pending_value(), 9);
		assert_eq!(opt.committed_value(), 5);
	}
}
