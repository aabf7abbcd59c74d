//! Integration tests for schema-driven option tree generation.

use pretty_assertions::assert_eq;
use trellis_config::{
	config_schema, ConfigClassHandler, ConfigSchema, ControllerHint, HandlerError,
	OptionFactoryRegistry, OptionValue,
};
use trellis_core::{OptionFlag, TrackedOption};

static RESTART: OptionFlag = OptionFlag::new("restart");
static RELOAD: OptionFlag = OptionFlag::new("reload");

#[derive(Default)]
struct AppConfig {
	greeting: String,
	verbose: bool,
	retries: i64,
	api_key: String,
}

config_schema! {
	AppConfig {
		greeting: String {
			serial: "greeting",
			comment: "Shown on startup",
			auto_gen: { category: "general", flags: [&RELOAD] },
		},
		verbose: bool {
			serial: "verbose",
			auto_gen: { category: "general", flags: [&RELOAD, &RESTART] },
		},
		retries: i64 {
			serial: "retries",
			auto_gen: {
				category: "general",
				group: "advanced",
				controller: ControllerHint::Slider { min: 0.0, max: 10.0, step: 1.0 },
			},
		},
		api_key: String {
			serial: "api-key",
		},
	}
}

fn handler() -> ConfigClassHandler<AppConfig> {
	ConfigClassHandler::<AppConfig>::builder("app")
		.auto_gen(true)
		.build()
		.expect("schema should construct")
}

/// Stages a value on the generated option with the given name.
fn stage(tree: &mut trellis_core::Trellis, name: &str, value: OptionValue) {
	let mut found = false;
	tree.for_each_option(|opt| {
		if opt.name() == name {
			let typed = opt
				.as_any_mut()
				.downcast_mut::<TrackedOption<OptionValue>>()
				.expect("generated options are value-typed");
			typed.request_set(value.clone());
			found = true;
		}
	});
	assert!(found, "no option named {name}");
}

#[test]
fn test_fields_derived_in_declaration_order() {
	let handler = handler();
	let names: Vec<_> = handler.fields().iter().map(|f| f.name).collect();
	assert_eq!(names, vec!["greeting", "verbose", "retries", "api_key"]);
	// Only annotated members participate in auto-gen.
	assert!(handler.fields()[3].auto_gen.is_none());
}

#[test]
fn test_grouping_by_directive() {
	let tree = handler().generate_option_tree().expect("auto-gen enabled");

	assert_eq!(tree.categories().len(), 1);
	let category = &tree.categories()[0];
	assert_eq!(category.name(), "general");

	let groups = category.groups();
	assert_eq!(groups.len(), 2);
	// Directly-attached options first, in declaration order.
	assert!(groups[0].is_root());
	assert_eq!(groups[0].len(), 2);
	assert_eq!(groups[0].options()[0].name(), "greeting");
	assert_eq!(groups[0].options()[1].name(), "verbose");
	// Then the subgroup.
	assert_eq!(groups[1].name(), "advanced");
	assert_eq!(groups[1].len(), 1);
	assert_eq!(groups[1].options()[0].name(), "retries");
}

#[test]
fn test_controller_hints_and_comments_carried() {
	let tree = handler().generate_option_tree().unwrap();
	let groups = tree.categories()[0].groups();

	let greeting = &groups[0].options()[0];
	assert_eq!(greeting.comment(), Some("Shown on startup"));
	assert_eq!(greeting.controller(), Some(ControllerHint::TextField));

	let verbose = &groups[0].options()[1];
	assert_eq!(verbose.controller(), Some(ControllerHint::TickBox));

	let retries = &groups[1].options()[0];
	assert_eq!(
		retries.controller(),
		Some(ControllerHint::Slider {
			min: 0.0,
			max: 10.0,
			step: 1.0
		})
	);
}

#[test]
fn test_edit_applies_into_live_instance() {
	let handler = handler();
	handler.instance().write().retries = 5;
	let mut tree = handler.generate_option_tree().unwrap();

	assert!(!tree.any_changed());
	stage(&mut tree, "retries", OptionValue::Int(9));
	assert!(tree.any_changed());

	tree.apply_all();
	assert_eq!(handler.instance().read().retries, 9);
	assert!(!tree.any_changed());
}

#[test]
fn test_defaults_instance_never_mutated() {
	let handler = handler();
	let mut tree = handler.generate_option_tree().unwrap();

	stage(&mut tree, "greeting", OptionValue::from("hello"));
	stage(&mut tree, "retries", OptionValue::Int(7));
	tree.apply_all();

	assert_eq!(handler.instance().read().greeting, "hello");
	assert_eq!(handler.defaults().greeting, "");
	assert_eq!(handler.defaults().retries, 0);
}

#[test]
fn test_reset_stages_defaults_from_defaults_instance() {
	let handler = handler();
	handler.instance().write().retries = 42;
	let mut tree = handler.generate_option_tree().unwrap();

	tree.reset_all();
	assert!(tree.any_changed());
	// Nothing committed until an explicit apply.
	assert_eq!(handler.instance().read().retries, 42);

	tree.apply_all();
	assert_eq!(handler.instance().read().retries, 0);
}

#[test]
fn test_directive_flags_dedup_across_options() {
	let handler = handler();
	let mut tree = handler.generate_option_tree().unwrap();

	stage(&mut tree, "greeting", OptionValue::from("hey"));
	stage(&mut tree, "verbose", OptionValue::Bool(true));

	let flags = tree.apply_all();
	assert_eq!(flags.len(), 2);
	assert!(flags.contains(&RELOAD));
	assert!(flags.contains(&RESTART));
}

#[test]
fn test_directive_flags_declared_in_schema() {
	let fields = AppConfig::fields();
	let directive = fields[1].auto_gen.as_ref().expect("verbose is directed");
	assert_eq!(directive.flags, [&RELOAD, &RESTART].as_slice());
	let greeting = fields[0].auto_gen.as_ref().expect("greeting is directed");
	assert_eq!(greeting.flags, [&RELOAD].as_slice());
}

#[test]
fn test_auto_gen_disabled_is_checkable_error() {
	let handler = ConfigClassHandler::<AppConfig>::builder("app").build().unwrap();
	assert!(!handler.supports_auto_gen());
	assert!(matches!(
		handler.generate_option_tree(),
		Err(HandlerError::AutoGenUnsupported { .. })
	));
}

#[test]
fn test_missing_factory_is_fatal() {
	let handler = ConfigClassHandler::<AppConfig>::builder("app")
		.auto_gen(true)
		.factories(OptionFactoryRegistry::empty())
		.build()
		.unwrap();
	let err = handler
		.generate_option_tree()
		.err()
		.expect("tree generation should fail without factories");
	assert!(matches!(err, HandlerError::UnsupportedFieldType { .. }));
}

#[test]
fn test_type_mismatch_write_is_ignored() {
	let handler = handler();
	let field = &handler.fields()[2];
	let mut instance = AppConfig {
		retries: 3,
		..AppConfig::default()
	};
	field.write_to(&mut instance, OptionValue::from("oops"));
	assert_eq!(instance.retries, 3);
	field.write_to(&mut instance, OptionValue::Int(8));
	assert_eq!(instance.retries, 8);
}

struct ScenarioConfig {
	level: i64,
}

impl Default for ScenarioConfig {
	fn default() -> Self {
		Self { level: 5 }
	}
}

config_schema! {
	ScenarioConfig {
		level: i64 {
			serial: "level",
			auto_gen: { category: "general" },
		},
	}
}

#[test]
fn test_end_to_end_edit_cycle() {
	let handler = ConfigClassHandler::<ScenarioConfig>::builder("scenario")
		.auto_gen(true)
		.build()
		.unwrap();
	let mut tree = handler.generate_option_tree().unwrap();

	// Default and committed agree at 5.
	assert!(!tree.any_changed());
	stage(&mut tree, "level", OptionValue::Int(9));
	assert!(tree.any_changed());

	tree.apply_all();
	assert_eq!(handler.instance().read().level, 9);
	assert!(!tree.any_changed());
}

struct Unbuildable;

impl ConfigSchema for Unbuildable {
	const NAME: &'static str = "Unbuildable";

	fn construct() -> Result<Self, String> {
		Err("no usable constructor".to_string())
	}

	fn fields() -> Vec<trellis_config::ConfigField<Self>> {
		Vec::new()
	}
}

#[test]
fn test_construction_failure_is_fatal() {
	let err = ConfigClassHandler::<Unbuildable>::builder("broken")
		.build()
		.err()
		.expect("construction failure should surface");
	assert!(matches!(err, HandlerError::SchemaConstruction { schema: "Unbuildable", .. }));
}
