//! Browser mount
//!
//! Renders a [`CandidatesPage`] into a DOM element and keeps it current.
//! Interactive elements carry `data-action` / `data-value` attributes; one
//! delegated listener per event type on the mount root turns them into
//! [`UiEvent`]s, so re-rendering never has to re-attach handlers.

use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};

use crate::error::{PageError, Result};
use crate::events::{ACTION_SEARCH, ACTION_SELECT_ROLE, UiEvent};
use crate::page::CandidatesPage;
use crate::reactive::Subscription;
use crate::{info_log, warn_log};

const ACTION_SELECTOR: &str = "[data-action]";

type Listener = Closure<dyn FnMut(Event)>;

/// Keeps a mounted page alive
///
/// Dropping the handle removes the listeners and stops re-rendering; the
/// last rendered markup stays in place.
#[must_use = "the page stops updating when the handle is dropped"]
pub struct MountHandle {
	root: Element,
	listeners: Vec<(&'static str, Listener)>,
	_subscription: Subscription,
	_page: Rc<CandidatesPage>,
}

impl Drop for MountHandle {
	fn drop(&mut self) {
		for (event_type, listener) in &self.listeners {
			let _ = self
				.root
				.remove_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref());
		}
	}
}

/// Mounts `page` into the element with id `element_id`
///
/// # Errors
///
/// Returns [`PageError::Dom`] if there is no document, no such element, or
/// a listener cannot be attached.
pub fn mount(page: Rc<CandidatesPage>, element_id: &str) -> Result<MountHandle> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| PageError::Dom("no document".to_string()))?;
	let root = document
		.get_element_by_id(element_id)
		.ok_or_else(|| PageError::Dom(format!("no element with id `{element_id}`")))?;

	render_into(&page, &root);

	let subscription = {
		let weak = Rc::downgrade(&page);
		let root = root.clone();
		page.subscribe(move || {
			if let Some(page) = weak.upgrade() {
				render_into(&page, &root);
			}
		})
	};

	let listeners = vec![
		("click", click_listener(Rc::downgrade(&page))),
		("input", value_listener(Rc::downgrade(&page))),
		("change", value_listener(Rc::downgrade(&page))),
	];
	for (event_type, listener) in &listeners {
		root.add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref())
			.map_err(|e| PageError::Dom(format!("adding {event_type} listener: {e:?}")))?;
	}

	info_log!("candidates page mounted on #{}", element_id);

	Ok(MountHandle {
		root,
		listeners,
		_subscription: subscription,
		_page: page,
	})
}

/// Replaces the root's markup, keeping the caret in the search box
fn render_into(page: &CandidatesPage, root: &Element) {
	let search_focused = root
		.owner_document()
		.and_then(|d| d.active_element())
		.and_then(|el| el.get_attribute("data-action"))
		.is_some_and(|action| action == ACTION_SEARCH);

	root.set_inner_html(&page.render_html());

	if search_focused
		&& let Ok(Some(input)) = root.query_selector(&format!("[data-action=\"{ACTION_SEARCH}\"]"))
		&& let Ok(input) = input.dyn_into::<HtmlInputElement>()
	{
		let _ = input.focus();
		let end = input.value().chars().count() as u32;
		let _ = input.set_selection_range(end, end);
	}
}

fn action_element(event: &Event) -> Option<Element> {
	event
		.target()
		.and_then(|t| t.dyn_into::<Element>().ok())
		.and_then(|el| el.closest(ACTION_SELECTOR).ok().flatten())
}

fn click_listener(page: Weak<CandidatesPage>) -> Listener {
	Closure::<dyn FnMut(Event)>::new(move |event: Event| {
		let Some(el) = action_element(&event) else {
			return;
		};
		let Some(action) = el.get_attribute("data-action") else {
			return;
		};
		// Form controls report through input/change
		if action == ACTION_SEARCH || action == ACTION_SELECT_ROLE {
			return;
		}
		event.prevent_default();
		if el.get_attribute("aria-disabled").as_deref() == Some("true") {
			return;
		}
		let value = el.get_attribute("data-value").unwrap_or_default();
		if let Some(page) = page.upgrade() {
			dispatch(&page, &action, &value);
		}
	})
}

fn value_listener(page: Weak<CandidatesPage>) -> Listener {
	Closure::<dyn FnMut(Event)>::new(move |event: Event| {
		let Some(el) = action_element(&event) else {
			return;
		};
		let Some(action) = el.get_attribute("data-action") else {
			return;
		};
		let value = if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
			input.value()
		} else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
			select.value()
		} else {
			return;
		};
		if let Some(page) = page.upgrade() {
			dispatch(&page, &action, &value);
		}
	})
}

fn dispatch(page: &CandidatesPage, action: &str, value: &str) {
	let result = UiEvent::from_dom(action, value).and_then(|event| page.handle(event));
	if let Err(e) = result {
		warn_log!("ignoring {} event: {}", action, e);
	}
}
