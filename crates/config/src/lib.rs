//! Schema-driven option tree generation and config persistence.
//!
//! Instead of wiring every option by hand, a config struct is described once
//! as a [`ConfigSchema`] (via the [`config_schema!`] macro) and handed to a
//! [`ConfigClassHandler`], which owns a live and a defaults instance, derives
//! the field table, and can synthesize a complete
//! [`Trellis`](trellis_core::Trellis) option tree whose bindings write back
//! into the live instance.
//!
//! ```
//! use trellis_config::{config_schema, ConfigClassHandler};
//!
//! #[derive(Default)]
//! struct AppConfig {
//! 	verbose: bool,
//! }
//!
//! config_schema! {
//! 	AppConfig {
//! 		verbose: bool {
//! 			serial: "verbose",
//! 			auto_gen: { category: "general" },
//! 		},
//! 	}
//! }
//!
//! let handler = ConfigClassHandler::<AppConfig>::builder("app")
//! 	.auto_gen(true)
//! 	.build()
//! 	.unwrap();
//! let tree = handler.generate_option_tree().unwrap();
//! assert_eq!(tree.categories().len(), 1);
//! ```

mod error;
mod factory;
mod field;
mod handler;
mod macros;
mod serializer;

pub use error::HandlerError;
pub use factory::{FieldSpec, OptionFactory, OptionFactoryRegistry};
pub use field::{AutoGenDirective, ConfigField, ConfigSchema, FieldBinding, write_checked};
pub use handler::{ConfigClassHandler, HandlerBuilder};
pub use serializer::{ConfigSerializer, JsonFileSerializer, LoadResult, NoopSerializer, SerializeError};

// Re-exported for the macro expansion and for downstream convenience.
pub use trellis_core::{ControllerHint, FlagKey, FromOptionValue, OptionType, OptionValue};
