//! Deferred post-apply side effects.
//!
//! A flag marks an option as requiring some external follow-up once a batch
//! apply has committed it (restart a subsystem, reload a cache, ...). Flags
//! are inert data in this crate: [`Trellis::apply_all`](crate::Trellis::apply_all)
//! collects them into a deduplicated [`FlagSet`] and the caller executes each
//! exactly once, strictly after the whole tree has been applied.

use std::hash::{Hash, Hasher};

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// A named post-apply side effect.
///
/// Flags are declared as statics and referenced by [`FlagKey`]; identity is
/// the name, so the same flag requested by many options collapses to one
/// execution.
///
/// ```
/// use trellis_core::OptionFlag;
///
/// static RESTART_REQUIRED: OptionFlag = OptionFlag::new("restart_required");
/// ```
#[derive(Debug)]
pub struct OptionFlag {
	/// Unique name identifying the side effect.
	pub name: &'static str,
}

impl OptionFlag {
	/// Creates a flag with the given name.
	pub const fn new(name: &'static str) -> Self {
		Self { name }
	}
}

impl PartialEq for OptionFlag {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}

impl Eq for OptionFlag {}

impl Hash for OptionFlag {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state);
	}
}

/// Handle to a flag definition.
pub type FlagKey = &'static OptionFlag;

/// Insertion-ordered, deduplicated set of flags.
#[derive(Debug, Default, Clone)]
pub struct FlagSet {
	inner: IndexSet<FlagKey, FxBuildHasher>,
}

impl FlagSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a flag, returning `false` if it was already present.
	pub fn insert(&mut self, flag: FlagKey) -> bool {
		self.inner.insert(flag)
	}

	/// Unions another collection of flags into this set.
	pub fn extend<'a>(&mut self, flags: impl IntoIterator<Item = &'a FlagKey>) {
		self.inner.extend(flags.into_iter().copied());
	}

	/// Returns true if the flag is present.
	pub fn contains(&self, flag: FlagKey) -> bool {
		self.inner.contains(flag)
	}

	/// Number of distinct flags.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns true if no flags are present.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Iterates flags in first-inserted order.
	pub fn iter(&self) -> impl Iterator<Item = FlagKey> + '_ {
		self.inner.iter().copied()
	}
}

impl<'a> IntoIterator for &'a FlagSet {
	type Item = FlagKey;
	type IntoIter = std::iter::Copied<indexmap::set::Iter<'a, FlagKey>>;

	fn into_iter(self) -> Self::IntoIter {
		self.inner.iter().copied()
	}
}

impl FromIterator<FlagKey> for FlagSet {
	fn from_iter<I: IntoIterator<Item = FlagKey>>(iter: I) -> Self {
		Self {
			inner: iter.into_iter().collect(),
		}
	}
}
