//! Declarative schema registration.

/// Selects the provided comment or `None`.
#[doc(hidden)]
#[macro_export]
macro_rules! __opt_str {
	() => {
		::std::option::Option::None
	};
	($val:literal) => {
		::std::option::Option::Some($val)
	};
}

/// Selects the provided expression or `None`.
#[doc(hidden)]
#[macro_export]
macro_rules! __opt_expr {
	() => {
		::std::option::Option::None
	};
	($val:expr) => {
		::std::option::Option::Some($val)
	};
}

/// Selects the provided flag list or an empty slice.
#[doc(hidden)]
#[macro_export]
macro_rules! __opt_flags {
	() => {
		&[]
	};
	([$($flag:expr),*]) => {{
		// Flag expressions reference statics, which blocks `&'static` promotion.
		static FLAGS: &[$crate::FlagKey] = &[$($flag),*];
		FLAGS
	}};
}

/// Builds the optional [`AutoGenDirective`](crate::AutoGenDirective).
#[doc(hidden)]
#[macro_export]
macro_rules! __opt_autogen {
	() => {
		::std::option::Option::None
	};
	(
		category: $category:literal
		$(, group: $group:literal)?
		$(, controller: $controller:expr)?
		$(, flags: [$($flag:expr),* $(,)?])?
		$(,)?
	) => {
		::std::option::Option::Some($crate::AutoGenDirective {
			category: $category,
			group: $crate::__opt_str!($($group)?),
			controller: $crate::__opt_expr!($($controller)?),
			flags: $crate::__opt_flags!($([$($flag),*])?),
		})
	};
}

/// Implements [`ConfigSchema`](crate::ConfigSchema) for a `Default` struct
/// from a declarative field table.
///
/// One entry per schema member carrying metadata, in declaration order.
/// `serial:` names the serialization key; `auto_gen:` opts a field into tree
/// generation with its target `category`, optional `group`, optional
/// `controller` hint, and optional post-apply `flags`.
///
/// ```
/// use trellis_config::{config_schema, ControllerHint};
/// use trellis_core::OptionFlag;
///
/// static RESTART: OptionFlag = OptionFlag::new("restart");
///
/// #[derive(Default)]
/// struct AppConfig {
/// 	greeting: String,
/// 	retries: i64,
/// 	api_key: String,
/// }
///
/// config_schema! {
/// 	AppConfig {
/// 		greeting: String {
/// 			serial: "greeting",
/// 			comment: "Shown on startup",
/// 			auto_gen: { category: "general" },
/// 		},
/// 		retries: i64 {
/// 			serial: "retries",
/// 			auto_gen: {
/// 				category: "general",
/// 				group: "advanced",
/// 				controller: ControllerHint::Slider { min: 0.0, max: 10.0, step: 1.0 },
/// 				flags: [&RESTART],
/// 			},
/// 		},
/// 		api_key: String {
/// 			serial: "api-key",
/// 		},
/// 	}
/// }
/// ```
#[macro_export]
macro_rules! config_schema {
	($ty:ident {
		$($field:ident: $fty:ty {
			serial: $serial:literal
			$(, comment: $comment:literal)?
			$(, auto_gen: { $($autogen:tt)* })?
			$(,)?
		}),* $(,)?
	}) => {
		impl $crate::ConfigSchema for $ty {
			const NAME: &'static str = stringify!($ty);

			fn construct() -> ::std::result::Result<Self, ::std::string::String> {
				::std::result::Result::Ok(<$ty as ::std::default::Default>::default())
			}

			fn fields() -> ::std::vec::Vec<$crate::ConfigField<Self>> {
				::std::vec![
					$($crate::ConfigField {
						name: stringify!($field),
						comment: $crate::__opt_str!($($comment)?),
						serial_key: $serial,
						value_type: <$fty as $crate::FromOptionValue>::option_type(),
						get: |cfg: &$ty| $crate::OptionValue::from(cfg.$field.clone()),
						set: |cfg: &mut $ty, value| {
							$crate::write_checked(&mut cfg.$field, value, stringify!($field))
						},
						auto_gen: $crate::__opt_autogen!($($($autogen)*)?),
					}),*
				]
			}
		}
	};
}
