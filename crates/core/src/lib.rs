//! Editable option state and change tracking.
//!
//! This crate is the model layer of a config surface: it keeps an editable
//! "pending" copy of each value distinct from the committed one, tracks which
//! entries have diverged, and applies or discards whole batches of edits
//! transactionally. It knows nothing about rendering or persistence formats;
//! those sit behind the [`Binding`] and save-hook boundaries.
//!
//! - [`TrackedOption`] — one editable value with a default, a [`Binding`] to
//!   its committed home, an optional pending edit, and post-apply [flags](OptionFlag)
//! - [`OptionGroup`] / [`ConfigCategory`] — ordered composition
//! - [`Trellis`] — the assembled tree with the transactional operations
//!   (`any_changed`, `apply_all`, `discard_all`, `reset_all`)
//! - [`CommitSurface`] — the save/cancel/reset/undo state machine

mod binding;
mod commit;
mod flag;
mod group;
mod option;
mod tree;
mod value;

pub use binding::{Binding, FnBinding};
pub use commit::{CommitOutcome, CommitSurface, SurfaceState};
pub use flag::{FlagKey, FlagSet, OptionFlag};
pub use group::{ConfigCategory, ConfigCategoryBuilder, OptionGroup};
pub use option::{AnyOption, ControllerHint, TrackedOption};
pub use tree::{Trellis, TrellisBuilder};
pub use value::{FromOptionValue, OptionType, OptionValue};
