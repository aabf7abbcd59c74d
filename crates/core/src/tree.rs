//! The assembled option tree and its transactional operations.

use tracing::{debug, warn};

use crate::flag::FlagSet;
use crate::group::ConfigCategory;
use crate::option::AnyOption;

/// A complete, assembled config tree: ordered categories plus an optional
/// save hook.
///
/// The tree owns every option; the presentation layer walks it to render
/// controls and calls the transactional operations here on user action.
/// Placeholder categories are skipped by every operation.
pub struct Trellis {
	title: String,
	categories: Vec<ConfigCategory>,
	save_hook: Option<Box<dyn Fn()>>,
}

impl Trellis {
	/// Starts building a tree.
	pub fn builder() -> TrellisBuilder {
		TrellisBuilder {
			title: String::new(),
			categories: Vec::new(),
			save_hook: None,
		}
	}

	/// Surface title.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Categories in display order.
	pub fn categories(&self) -> &[ConfigCategory] {
		&self.categories
	}

	/// Mutable access to categories, for edit surfaces.
	pub fn categories_mut(&mut self) -> &mut [ConfigCategory] {
		&mut self.categories
	}

	/// Visits every option in tree order until `f` returns `true`.
	///
	/// Returns whether the visit was short-circuited.
	pub fn visit_options(&self, mut f: impl FnMut(&dyn AnyOption) -> bool) -> bool {
		for category in &self.categories {
			for group in category.groups() {
				for option in group.options() {
					if f(option.as_ref()) {
						return true;
					}
				}
			}
		}
		false
	}

	/// Runs `f` on every option in tree order.
	pub fn for_each_option(&mut self, mut f: impl FnMut(&mut dyn AnyOption)) {
		for category in &mut self.categories {
			let ConfigCategory::Options { groups, .. } = category else {
				continue;
			};
			for group in groups {
				for option in group.options_mut() {
					f(option.as_mut());
				}
			}
		}
	}

	/// True if any option holds a pending edit that differs from its
	/// committed value. Short-circuits on the first hit.
	pub fn any_changed(&self) -> bool {
		self.visit_options(|option| option.changed())
	}

	/// Commits every pending edit through its binding, in tree order.
	///
	/// Returns the deduplicated union of the flags of every option that was
	/// applied; the caller executes each exactly once, strictly after this
	/// call returns. An option still reporting changed after the apply pass
	/// failed to reconcile with its binding; its pending edit is forcibly
	/// discarded (with a warning) so the tree always ends clean.
	///
	/// The save hook runs once, after the passes, if anything was applied.
	pub fn apply_all(&mut self) -> FlagSet {
		let mut flags = FlagSet::new();
		let mut applied_any = false;
		self.for_each_option(|option| {
			if option.apply_value() {
				applied_any = true;
				flags.extend(option.flags());
			}
		});
		self.for_each_option(|option| {
			if option.changed() {
				// The binding did not take the write. Revert to its value
				// rather than leaving the tree permanently dirty.
				warn!(
					option = option.name(),
					"value mismatch after apply, reverting to binding"
				);
				option.forget_pending();
			}
		});
		if applied_any {
			debug!(flags = flags.len(), "applied pending config edits");
			if let Some(hook) = &self.save_hook {
				hook();
			}
		}
		flags
	}

	/// Discards every pending edit without touching any binding.
	///
	/// This is the cancel/undo operation: options fall back to displaying
	/// their committed values.
	pub fn discard_all(&mut self) {
		self.for_each_option(|option| option.forget_pending());
	}

	/// Stages every option's default value as a pending edit.
	///
	/// Nothing is written back; the tree becomes dirty wherever a default
	/// differs from the committed value, awaiting an explicit apply.
	pub fn reset_all(&mut self) {
		self.for_each_option(|option| option.request_set_default());
	}
}

/// Builder for [`Trellis`].
pub struct TrellisBuilder {
	title: String,
	categories: Vec<ConfigCategory>,
	save_hook: Option<Box<dyn Fn()>>,
}

impl TrellisBuilder {
	/// Sets the surface title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Appends a category.
	pub fn category(mut self, category: ConfigCategory) -> Self {
		self.categories.push(category);
		self
	}

	/// Installs the hook invoked after each apply pass that committed
	/// something, typically a serializer call.
	pub fn save(mut self, hook: impl Fn() + 'static) -> Self {
		self.save_hook = Some(Box::new(hook));
		self
	}

	/// Finalizes the tree.
	pub fn build(self) -> Trellis {
		Trellis {
			title: self.title,
			categories: self.categories,
			save_hook: self.save_hook,
		}
	}
}
