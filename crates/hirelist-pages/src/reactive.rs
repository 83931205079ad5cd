//! Signal - shared reactive state with explicit subscribers
//!
//! `Signal<T>` holds a value behind `Rc<RefCell<T>>` and a list of
//! listeners. Every `set`/`update` runs the listeners after the value is
//! written, so a listener may freely read the signal (or any other signal)
//! through `get()`.
//!
//! The page owns one `FilterState` and hands clones to both the filter bar
//! and the table, so a role selection reaches the table immediately.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use hirelist_pages::Signal;
//!
//! let count = Signal::new(0);
//! let seen = Rc::new(Cell::new(0));
//!
//! let _sub = count.subscribe({
//!     let count = count.clone();
//!     let seen = seen.clone();
//!     move || seen.set(count.get())
//! });
//!
//! count.set(42);
//! assert_eq!(seen.get(), 42);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn()>;

struct Listeners {
	next_id: Cell<u64>,
	entries: RefCell<Vec<(u64, Listener)>>,
}

impl Listeners {
	fn new() -> Self {
		Self {
			next_id: Cell::new(0),
			entries: RefCell::new(Vec::new()),
		}
	}

	fn add(&self, listener: Listener) -> u64 {
		let id = self.next_id.get();
		self.next_id.set(id + 1);
		self.entries.borrow_mut().push((id, listener));
		id
	}

	fn remove(&self, id: u64) {
		self.entries.borrow_mut().retain(|(entry, _)| *entry != id);
	}

	fn notify(&self) {
		// Snapshot so listeners can subscribe or unsubscribe while running
		let snapshot: Vec<Listener> = self
			.entries
			.borrow()
			.iter()
			.map(|(_, listener)| listener.clone())
			.collect();
		for listener in snapshot {
			listener();
		}
	}
}

/// A reactive cell that notifies subscribers when written
///
/// ## Cloning
///
/// All clones share the same value and the same subscriber list.
pub struct Signal<T: 'static> {
	value: Rc<RefCell<T>>,
	listeners: Rc<Listeners>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: self.value.clone(),
			listeners: self.listeners.clone(),
		}
	}
}

impl<T: 'static> Signal<T> {
	/// Create a new Signal with the given initial value
	pub fn new(value: T) -> Self {
		Self {
			value: Rc::new(RefCell::new(value)),
			listeners: Rc::new(Listeners::new()),
		}
	}

	/// Get the current value of the signal
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Read the current value by reference
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Set the signal to a new value and notify subscribers
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		self.listeners.notify();
	}

	/// Set the value only if it differs; returns whether it changed
	pub fn set_if_changed(&self, value: T) -> bool
	where
		T: PartialEq,
	{
		if *self.value.borrow() == value {
			return false;
		}
		self.set(value);
		true
	}

	/// Update the signal's value in place and notify subscribers once
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut self.value.borrow_mut());
		self.listeners.notify();
	}

	/// Run `f` after every change until the returned handle is dropped
	pub fn subscribe<F>(&self, f: F) -> Subscription
	where
		F: Fn() + 'static,
	{
		let id = self.listeners.add(Rc::new(f));
		let listeners: Weak<Listeners> = Rc::downgrade(&self.listeners);
		Subscription::new(move || {
			if let Some(listeners) = listeners.upgrade() {
				listeners.remove(id);
			}
		})
	}

	/// Number of live subscribers
	pub fn subscriber_count(&self) -> usize {
		self.listeners.entries.borrow().len()
	}
}

impl<T: Default + 'static> Default for Signal<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.value.borrow())
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}

/// Handle that removes a listener when dropped
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
	cancels: Vec<Box<dyn FnOnce()>>,
}

impl Subscription {
	fn new(cancel: impl FnOnce() + 'static) -> Self {
		Self {
			cancels: vec![Box::new(cancel)],
		}
	}

	/// Combines several subscriptions into one handle
	pub fn batch(subscriptions: impl IntoIterator<Item = Subscription>) -> Self {
		let mut cancels = Vec::new();
		for mut subscription in subscriptions {
			cancels.append(&mut subscription.cancels);
		}
		Self { cancels }
	}

	/// Keeps the listener for the rest of the signal's life
	pub fn detach(mut self) {
		self.cancels.clear();
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		for cancel in self.cancels.drain(..) {
			cancel();
		}
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("listeners", &self.cancels.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_get_set_update() {
		let signal = Signal::new(1);
		assert_eq!(signal.get(), 1);
		signal.set(5);
		assert_eq!(signal.get(), 5);
		signal.update(|n| *n *= 2);
		assert_eq!(signal.with(|n| *n), 10);
	}

	#[rstest]
	fn test_clones_share_value() {
		let a = Signal::new(String::from("All"));
		let b = a.clone();
		b.set("QA".to_string());
		assert_eq!(a.get(), "QA");
	}

	#[rstest]
	fn test_subscriber_runs_on_every_write() {
		let signal = Signal::new(0);
		let calls = Rc::new(Cell::new(0));
		let _sub = signal.subscribe({
			let calls = calls.clone();
			move || calls.set(calls.get() + 1)
		});

		signal.set(1);
		signal.update(|n| *n += 1);
		assert_eq!(calls.get(), 2);
	}

	#[rstest]
	fn test_set_if_changed_skips_equal_values() {
		let signal = Signal::new(3);
		let calls = Rc::new(Cell::new(0));
		let _sub = signal.subscribe({
			let calls = calls.clone();
			move || calls.set(calls.get() + 1)
		});

		assert!(!signal.set_if_changed(3));
		assert!(signal.set_if_changed(4));
		assert_eq!(calls.get(), 1);
	}

	#[rstest]
	fn test_drop_unsubscribes() {
		let signal = Signal::new(0);
		let calls = Rc::new(Cell::new(0));
		let sub = signal.subscribe({
			let calls = calls.clone();
			move || calls.set(calls.get() + 1)
		});
		assert_eq!(signal.subscriber_count(), 1);

		drop(sub);
		signal.set(1);
		assert_eq!(calls.get(), 0);
		assert_eq!(signal.subscriber_count(), 0);
	}

	#[rstest]
	fn test_detach_keeps_listener() {
		let signal = Signal::new(0);
		signal.subscribe(|| {}).detach();
		assert_eq!(signal.subscriber_count(), 1);
	}

	#[rstest]
	fn test_batch_unsubscribes_all() {
		let a = Signal::new(0);
		let b = Signal::new(0);
		let sub = Subscription::batch([a.subscribe(|| {}), b.subscribe(|| {})]);
		assert_eq!(a.subscriber_count() + b.subscriber_count(), 2);
		drop(sub);
		assert_eq!(a.subscriber_count() + b.subscriber_count(), 0);
	}

	#[rstest]
	fn test_listener_can_write_another_signal() {
		let source = Signal::new(1);
		let doubled = Signal::new(0);
		let _sub = source.subscribe({
			let source = source.clone();
			let doubled = doubled.clone();
			move || doubled.set(source.get() * 2)
		});

		source.set(21);
		assert_eq!(doubled.get(), 42);
	}

	#[rstest]
	fn test_subscription_outliving_signal() {
		let sub = {
			let signal = Signal::new(0);
			signal.subscribe(|| {})
		};
		drop(sub);
	}
}
