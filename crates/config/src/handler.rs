//! Schema handler: dual instances, field derivation, tree generation.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;
use tracing::{debug, error};
use trellis_core::{AnyOption, ConfigCategory, OptionGroup, Trellis};

use crate::error::HandlerError;
use crate::factory::{FieldSpec, OptionFactoryRegistry};
use crate::field::{ConfigField, ConfigSchema, FieldBinding};
use crate::serializer::{ConfigSerializer, LoadResult, NoopSerializer, SerializeError};

/// Owns the live and defaults instances of one config schema, the field
/// table derived from it, and the serializer that persists it.
///
/// The defaults instance is constructed once and never written afterwards;
/// it is the permanent source for "reset to default". The live instance sits
/// behind a shared lock because every generated option's binding aliases it.
pub struct ConfigClassHandler<T: ConfigSchema> {
	id: String,
	live: Arc<RwLock<T>>,
	defaults: T,
	fields: Vec<ConfigField<T>>,
	serializer: Arc<dyn ConfigSerializer<T>>,
	auto_gen: bool,
	factories: OptionFactoryRegistry,
}

impl<T: ConfigSchema> ConfigClassHandler<T> {
	/// Starts building a handler for schema `T`.
	pub fn builder(id: impl Into<String>) -> HandlerBuilder<T> {
		HandlerBuilder {
			id: id.into(),
			serializer: None,
			auto_gen: false,
			factories: None,
		}
	}

	/// Handler id, used for the generated tree's title and diagnostics.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Shared handle to the live instance.
	pub fn instance(&self) -> Arc<RwLock<T>> {
		Arc::clone(&self.live)
	}

	/// The immutable defaults instance.
	pub fn defaults(&self) -> &T {
		&self.defaults
	}

	/// Derived fields, in declaration order.
	pub fn fields(&self) -> &[ConfigField<T>] {
		&self.fields
	}

	/// True when tree generation is permitted for this handler.
	pub fn supports_auto_gen(&self) -> bool {
		self.auto_gen
	}

	/// Persists the live instance through the serializer.
	pub fn save(&self) -> Result<(), SerializeError> {
		self.serializer.save(&self.live.read())
	}

	/// Restores persisted state into the live instance, if any exists.
	pub fn load(&self) -> Result<LoadResult, SerializeError> {
		self.serializer.load(&mut self.live.write())
	}

	/// Synthesizes the full option tree from the fields carrying auto-gen
	/// directives.
	///
	/// Categories and groups materialize lazily, keyed by directive string
	/// in first-seen order; options land in field-declaration order. The
	/// tree's save hook serializes the live instance. Fatal errors return
	/// without a partial tree.
	pub fn generate_option_tree(&self) -> Result<Trellis, HandlerError> {
		if !self.auto_gen {
			return Err(HandlerError::AutoGenUnsupported {
				id: self.id.clone(),
			});
		}

		let mut drafts: IndexMap<&'static str, CategoryDraft, FxBuildHasher> = IndexMap::default();
		for field in &self.fields {
			let Some(directive) = &field.auto_gen else {
				continue;
			};
			let Some(factory) = self.factories.get(field.value_type) else {
				return Err(HandlerError::UnsupportedFieldType {
					field: field.name.to_string(),
					value_type: field.value_type,
				});
			};

			let option = factory(FieldSpec {
				name: field.name,
				comment: field.comment,
				default: field.read_from(&self.defaults),
				binding: Box::new(FieldBinding::new(self.instance(), field.get, field.set)),
				controller: directive.controller,
				flags: directive.flags,
			});

			let draft = drafts.entry(directive.category).or_default();
			match directive.group.filter(|group| !group.is_empty()) {
				None => draft.root.push(Box::new(option)),
				Some(group) => draft
					.groups
					.entry(group)
					.or_default()
					.push(Box::new(option)),
			}
		}

		let live = self.instance();
		let serializer = Arc::clone(&self.serializer);
		let id = self.id.clone();
		let mut builder = Trellis::builder().title(self.id.clone()).save(move || {
			if let Err(err) = serializer.save(&live.read()) {
				error!(config = %id, error = %err, "failed to serialize config");
			}
		});

		for (name, draft) in drafts {
			builder = builder.category(draft.build(name));
		}

		let tree = builder.build();
		debug!(config = %self.id, categories = tree.categories().len(), "generated option tree");
		Ok(tree)
	}
}

/// Lazily created category: directly-attached options plus named groups, in
/// first-seen order. Finalized into an immutable [`ConfigCategory`] once all
/// fields are placed.
#[derive(Default)]
struct CategoryDraft {
	root: Vec<Box<dyn AnyOption>>,
	groups: IndexMap<&'static str, Vec<Box<dyn AnyOption>>, FxBuildHasher>,
}

impl CategoryDraft {
	fn build(self, name: &str) -> ConfigCategory {
		let mut category = ConfigCategory::builder(name);
		for option in self.root {
			category = category.option(option);
		}
		for (group_name, options) in self.groups {
			let mut group = OptionGroup::new(group_name);
			for option in options {
				group.push(option);
			}
			category = category.group(group);
		}
		category.build()
	}
}

/// Builder for [`ConfigClassHandler`].
pub struct HandlerBuilder<T: ConfigSchema> {
	id: String,
	serializer: Option<Arc<dyn ConfigSerializer<T>>>,
	auto_gen: bool,
	factories: Option<OptionFactoryRegistry>,
}

impl<T: ConfigSchema> HandlerBuilder<T> {
	/// Installs the serializer. Defaults to [`NoopSerializer`].
	pub fn serializer(mut self, serializer: impl ConfigSerializer<T> + 'static) -> Self {
		self.serializer = Some(Arc::new(serializer));
		self
	}

	/// Enables option tree generation.
	pub fn auto_gen(mut self, auto_gen: bool) -> Self {
		self.auto_gen = auto_gen;
		self
	}

	/// Replaces the factory registry. Defaults to the built-in factories.
	pub fn factories(mut self, factories: OptionFactoryRegistry) -> Self {
		self.factories = Some(factories);
		self
	}

	/// Constructs the handler: two independent schema instances plus the
	/// derived field table.
	///
	/// # Errors
	///
	/// [`HandlerError::SchemaConstruction`] if either instance fails to
	/// construct; the handler is not usable in that case.
	pub fn build(self) -> Result<ConfigClassHandler<T>, HandlerError> {
		let construct = || {
			T::construct().map_err(|reason| HandlerError::SchemaConstruction {
				schema: T::NAME,
				reason,
			})
		};
		let live = construct()?;
		let defaults = construct()?;
		let fields = T::fields();
		debug!(schema = T::NAME, fields = fields.len(), "derived config fields");

		Ok(ConfigClassHandler {
			id: self.id,
			live: Arc::new(RwLock::new(live)),
			defaults,
			fields,
			serializer: self.serializer.unwrap_or_else(|| Arc::new(NoopSerializer)),
			auto_gen: self.auto_gen,
			factories: self.factories.unwrap_or_default(),
		})
	}
}
