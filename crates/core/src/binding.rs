//! Bindings connect an option to its externally owned committed value.

/// Accessor pair for an option's committed value.
///
/// The binding is the source of truth for "what is the value right now";
/// the option layers a pending edit on top of it. `set` takes `&self` so
/// bindings that write into shared state use interior mutability rather
/// than forcing exclusive access onto every caller.
pub trait Binding<V> {
	/// Reads the current committed value.
	fn get(&self) -> V;

	/// Writes a new committed value.
	fn set(&self, value: V);
}

impl<V> Binding<V> for Box<dyn Binding<V>> {
	fn get(&self) -> V {
		(**self).get()
	}

	fn set(&self, value: V) {
		(**self).set(value)
	}
}

/// Binding backed by a getter/setter closure pair.
pub struct FnBinding<V> {
	get: Box<dyn Fn() -> V>,
	set: Box<dyn Fn(V)>,
}

impl<V> FnBinding<V> {
	/// Creates a binding from arbitrary accessor closures.
	pub fn new(get: impl Fn() -> V + 'static, set: impl Fn(V) + 'static) -> Self {
		Self {
			get: Box::new(get),
			set: Box::new(set),
		}
	}
}

impl<V> Binding<V> for FnBinding<V> {
	fn get(&self) -> V {
		(self.get)()
	}

	fn set(&self, value: V) {
		(self.set)(value)
	}
}
