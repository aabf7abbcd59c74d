//! Ordered containers composing options into a displayable tree.

use crate::option::AnyOption;

/// Ordered collection of options under one heading.
pub struct OptionGroup {
	name: String,
	options: Vec<Box<dyn AnyOption>>,
	root: bool,
}

impl OptionGroup {
	/// Creates an empty named group.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			options: Vec::new(),
			root: false,
		}
	}

	/// Creates the unnamed root group holding a category's directly-attached
	/// options.
	pub(crate) fn root() -> Self {
		Self {
			name: String::new(),
			options: Vec::new(),
			root: true,
		}
	}

	/// Appends an option, preserving insertion order.
	pub fn push(&mut self, option: Box<dyn AnyOption>) {
		self.options.push(option);
	}

	/// Builder-style [`OptionGroup::push`].
	pub fn with_option(mut self, option: Box<dyn AnyOption>) -> Self {
		self.push(option);
		self
	}

	/// Group heading. Empty for the root group.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// True for the implicit group of directly-attached options.
	pub fn is_root(&self) -> bool {
		self.root
	}

	/// Options in insertion order.
	pub fn options(&self) -> &[Box<dyn AnyOption>] {
		&self.options
	}

	/// Mutable access to the options, for edit surfaces.
	pub fn options_mut(&mut self) -> &mut [Box<dyn AnyOption>] {
		&mut self.options
	}

	/// Number of options in this group.
	pub fn len(&self) -> usize {
		self.options.len()
	}

	/// True if the group holds no options.
	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}
}

/// A top-level tab of the config surface.
pub enum ConfigCategory {
	/// A regular category of option groups. The first group is the unnamed
	/// root group when any options were attached directly to the category.
	Options {
		/// Display name.
		name: String,
		/// Groups in display order.
		groups: Vec<OptionGroup>,
	},
	/// Redirects entirely to an external presentation surface. Holds no
	/// options and is skipped by every change-tracking traversal.
	Placeholder {
		/// Display name.
		name: String,
	},
}

impl ConfigCategory {
	/// Starts building a regular category.
	pub fn builder(name: impl Into<String>) -> ConfigCategoryBuilder {
		ConfigCategoryBuilder {
			name: name.into(),
			root: OptionGroup::root(),
			groups: Vec::new(),
		}
	}

	/// Creates a placeholder category.
	pub fn placeholder(name: impl Into<String>) -> Self {
		ConfigCategory::Placeholder { name: name.into() }
	}

	/// Display name.
	pub fn name(&self) -> &str {
		match self {
			ConfigCategory::Options { name, .. } => name,
			ConfigCategory::Placeholder { name } => name,
		}
	}

	/// True for placeholder categories.
	pub fn is_placeholder(&self) -> bool {
		matches!(self, ConfigCategory::Placeholder { .. })
	}

	/// Groups of a regular category; empty for placeholders.
	pub fn groups(&self) -> &[OptionGroup] {
		match self {
			ConfigCategory::Options { groups, .. } => groups,
			ConfigCategory::Placeholder { .. } => &[],
		}
	}
}

/// Builder for a regular [`ConfigCategory`].
pub struct ConfigCategoryBuilder {
	name: String,
	root: OptionGroup,
	groups: Vec<OptionGroup>,
}

impl ConfigCategoryBuilder {
	/// Attaches an option directly to the category (no subgroup).
	pub fn option(mut self, option: Box<dyn AnyOption>) -> Self {
		self.root.push(option);
		self
	}

	/// Attaches a subgroup.
	pub fn group(mut self, group: OptionGroup) -> Self {
		self.groups.push(group);
		self
	}

	/// Finalizes the category. Directly-attached options come first, then
	/// subgroups in insertion order.
	pub fn build(self) -> ConfigCategory {
		let mut groups = Vec::with_capacity(self.groups.len() + 1);
		if !self.root.is_empty() {
			groups.push(self.root);
		}
		groups.extend(self.groups);
		ConfigCategory::Options {
			name: self.name,
			groups,
		}
	}
}
