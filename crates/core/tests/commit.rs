//! Integration tests for the commit surface state machine.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use trellis_core::{
	CommitOutcome, CommitSurface, ConfigCategory, FnBinding, SurfaceState, TrackedOption, Trellis,
};

fn cell_tree(cell: &Rc<RefCell<i64>>, default: i64) -> Trellis {
	let get = Rc::clone(cell);
	let set = Rc::clone(cell);
	let binding = FnBinding::new(move || *get.borrow(), move |v| *set.borrow_mut() = v);
	Trellis::builder()
		.category(
			ConfigCategory::builder("general")
				.option(Box::new(TrackedOption::new("retries", default, binding)))
				.build(),
		)
		.build()
}

fn stage(surface: &mut CommitSurface, value: i64) {
	surface.tree_mut().for_each_option(|opt| {
		if let Some(typed) = opt.as_any_mut().downcast_mut::<TrackedOption<i64>>() {
			typed.request_set(value);
		}
	});
}

#[test]
fn test_clean_primary_closes_without_side_effects() {
	let cell = Rc::new(RefCell::new(5));
	let mut surface = CommitSurface::new(cell_tree(&cell, 5));

	assert_eq!(surface.state(), SurfaceState::Clean);
	assert!(matches!(surface.primary(), CommitOutcome::Closed));
	assert!(surface.is_closed());
	assert_eq!(*cell.borrow(), 5);
}

#[test]
fn test_dirty_primary_saves_and_closes() {
	let cell = Rc::new(RefCell::new(5));
	let mut surface = CommitSurface::new(cell_tree(&cell, 5));

	stage(&mut surface, 9);
	assert_eq!(surface.state(), SurfaceState::Dirty);

	let outcome = surface.primary();
	assert!(matches!(outcome, CommitOutcome::Saved(_)));
	assert_eq!(*cell.borrow(), 9);
	assert_eq!(surface.state(), SurfaceState::Clean);
	assert!(surface.is_closed());
}

#[test]
fn test_clean_secondary_resets_toward_dirty() {
	let cell = Rc::new(RefCell::new(10));
	let mut surface = CommitSurface::new(cell_tree(&cell, 3));

	assert!(matches!(surface.secondary(), CommitOutcome::ResetStaged));
	// Default differs from committed, so reset staged a pending edit.
	assert_eq!(surface.state(), SurfaceState::Dirty);
	assert!(!surface.is_closed());
	assert_eq!(*cell.borrow(), 10);
}

#[test]
fn test_dirty_secondary_cancels_and_closes() {
	let cell = Rc::new(RefCell::new(5));
	let mut surface = CommitSurface::new(cell_tree(&cell, 5));

	stage(&mut surface, 42);
	assert!(matches!(surface.secondary(), CommitOutcome::Cancelled));
	assert_eq!(*cell.borrow(), 5);
	assert!(surface.is_closed());
}

#[test]
fn test_undo_discards_in_place() {
	let cell = Rc::new(RefCell::new(5));
	let mut surface = CommitSurface::new(cell_tree(&cell, 5));

	assert!(!surface.undo());

	stage(&mut surface, 42);
	assert!(surface.undo());
	assert_eq!(surface.state(), SurfaceState::Clean);
	assert!(!surface.is_closed());
	assert_eq!(*cell.borrow(), 5);
}

#[test]
fn test_close_vetoed_while_dirty() {
	let cell = Rc::new(RefCell::new(5));
	let mut surface = CommitSurface::new(cell_tree(&cell, 5));

	stage(&mut surface, 42);
	assert!(!surface.request_close());
	assert!(!surface.is_closed());

	surface.undo();
	assert!(surface.request_close());
	assert!(surface.is_closed());
}
