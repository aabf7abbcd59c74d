//! The save/cancel/undo state machine of a config surface.
//!
//! The buttons of a config screen are overloaded on its dirty state: the
//! primary button reads "Done" while clean and "Save" while dirty, the
//! secondary reads "Reset" while clean and "Cancel" while dirty. This module
//! models that contract over a [`Trellis`] without any rendering.

use crate::flag::FlagSet;
use crate::tree::Trellis;

/// The aggregate dirty state of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
	/// No option has a pending edit that differs from its committed value.
	Clean,
	/// At least one option is changed.
	Dirty,
}

/// Result of a commit surface action.
#[derive(Debug)]
pub enum CommitOutcome {
	/// Surface closed with no side effects ("Done").
	Closed,
	/// Pending edits were applied and the surface closed ("Save"). The
	/// caller executes each flag exactly once.
	Saved(FlagSet),
	/// Default values were staged as pending edits ("Reset"). Nothing was
	/// written back.
	ResetStaged,
	/// Pending edits were discarded and the surface closed ("Cancel").
	Cancelled,
}

/// Owns a [`Trellis`] and mediates the save/cancel/reset/undo actions on it.
pub struct CommitSurface {
	tree: Trellis,
	closed: bool,
}

impl CommitSurface {
	/// Wraps a tree in a fresh, open surface.
	pub fn new(tree: Trellis) -> Self {
		Self {
			tree,
			closed: false,
		}
	}

	/// Current dirty state.
	pub fn state(&self) -> SurfaceState {
		if self.tree.any_changed() {
			SurfaceState::Dirty
		} else {
			SurfaceState::Clean
		}
	}

	/// True once an action has closed the surface.
	pub fn is_closed(&self) -> bool {
		self.closed
	}

	/// The underlying tree.
	pub fn tree(&self) -> &Trellis {
		&self.tree
	}

	/// Mutable tree access, for the edit surface to stage values.
	pub fn tree_mut(&mut self) -> &mut Trellis {
		&mut self.tree
	}

	/// Primary action: "Done" while clean (close), "Save" while dirty
	/// (apply everything, then close now that the tree is clean).
	pub fn primary(&mut self) -> CommitOutcome {
		match self.state() {
			SurfaceState::Clean => {
				self.closed = true;
				CommitOutcome::Closed
			}
			SurfaceState::Dirty => {
				let flags = self.tree.apply_all();
				// apply_all force-discards reconciliation failures, so the
				// tree is clean here and the surface may close.
				self.closed = !self.tree.any_changed();
				CommitOutcome::Saved(flags)
			}
		}
	}

	/// Secondary action: "Reset" while clean (stage defaults), "Cancel"
	/// while dirty (discard and close).
	pub fn secondary(&mut self) -> CommitOutcome {
		match self.state() {
			SurfaceState::Clean => {
				self.tree.reset_all();
				CommitOutcome::ResetStaged
			}
			SurfaceState::Dirty => {
				self.tree.discard_all();
				self.closed = true;
				CommitOutcome::Cancelled
			}
		}
	}

	/// Tertiary action: discard pending edits in place, without closing.
	///
	/// Returns `false` when the surface was already clean (the button is
	/// disabled in that state).
	pub fn undo(&mut self) -> bool {
		if self.state() != SurfaceState::Dirty {
			return false;
		}
		self.tree.discard_all();
		true
	}

	/// Attempts to close without saving. Vetoed (returns `false`, surface
	/// stays open) while dirty; the caller should prompt instead.
	pub fn request_close(&mut self) -> bool {
		if self.state() == SurfaceState::Dirty {
			return false;
		}
		self.closed = true;
		true
	}

	/// Consumes the surface, returning the tree.
	pub fn into_tree(self) -> Trellis {
		self.tree
	}
}
