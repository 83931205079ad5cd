//! Filter bar: search input, role select and "More Filters"

use std::rc::Rc;

use hirelist_core::Dataset;
use hirelist_tables::RoleFilter;

use crate::actions::PageHooks;
use crate::events::UiEvent;
use crate::html::{Element, button, div, input, option, select};
use crate::state::FilterState;
use crate::storage::FilterPreference;

/// One entry of the role select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleOption {
	/// Filter chosen by this entry
	pub filter: RoleFilter,
	/// Whether this is the current selection
	pub selected: bool,
}

impl RoleOption {
	/// Option value attribute
	pub fn value(&self) -> &str {
		self.filter.as_str()
	}

	/// Option text
	pub fn label(&self) -> &str {
		self.filter.label()
	}
}

/// The filter controls above the table
pub struct FilterBar {
	dataset: Rc<Dataset>,
	state: FilterState,
	preference: FilterPreference,
	hooks: Rc<dyn PageHooks>,
}

impl FilterBar {
	/// Creates the filter bar over shared `state`
	pub fn new(
		dataset: Rc<Dataset>,
		state: FilterState,
		preference: FilterPreference,
		hooks: Rc<dyn PageHooks>,
	) -> Self {
		Self {
			dataset,
			state,
			preference,
			hooks,
		}
	}

	/// Current role selection
	pub fn selected(&self) -> RoleFilter {
		self.state.role.get()
	}

	/// Current search text
	pub fn search(&self) -> String {
		self.state.search.get()
	}

	/// The preference this bar writes to
	pub fn preference(&self) -> &FilterPreference {
		&self.preference
	}

	/// Applies a role selection
	///
	/// The value is persisted and broadcast, then published to the shared
	/// state. Re-selecting the current value does nothing.
	pub fn select_role(&self, role: RoleFilter) {
		if self.state.role.with(|current| *current == role) {
			return;
		}
		self.preference.save(&role);
		self.state.role.set(role);
	}

	/// Updates the search text
	pub fn set_search(&self, text: impl Into<String>) {
		self.state.search.set_if_changed(text.into());
	}

	/// "More Filters" was clicked
	pub fn more_filters(&self) {
		self.hooks.on_more_filters();
	}

	/// "All" followed by every known role, in enumeration order
	///
	/// A selected role missing from the enumeration (stale preference) is
	/// appended so the select still shows what is applied.
	pub fn options(&self) -> Vec<RoleOption> {
		let selected = self.selected();
		let mut options: Vec<RoleOption> = std::iter::once(RoleFilter::All)
			.chain(
				self.dataset
					.roles()
					.iter()
					.map(|role| RoleFilter::Role(role.clone())),
			)
			.map(|filter| RoleOption {
				selected: filter == selected,
				filter,
			})
			.collect();

		if !options.iter().any(|o| o.selected) {
			options.push(RoleOption {
				filter: selected,
				selected: true,
			});
		}
		options
	}

	/// Renders the bar
	pub fn render(&self) -> Element {
		let (search_action, _) = UiEvent::Search(String::new()).to_dom();
		let (select_action, _) = UiEvent::SelectRole(RoleFilter::All).to_dom();
		let (more_action, _) = UiEvent::MoreFilters.to_dom();

		div()
			.class("flex flex-col sm:flex-row gap-4 mb-6")
			.child(
				div().class("relative flex-1").child(
					input()
						.attr("type", "search")
						.attr("placeholder", "Search candidates...")
						.attr("aria-label", "Search candidates")
						.class("pl-8 bg-white")
						.attr("value", self.search())
						.attr("data-action", search_action),
				),
			)
			.child(
				div()
					.class("flex gap-2")
					.child(
						select()
							.class("w-[180px] bg-white")
							.attr("aria-label", "Filter by role")
							.attr("data-action", select_action)
							.children(self.options().into_iter().map(|o| {
								option()
									.attr("value", o.value())
									.bool_attr("selected", o.selected)
									.text(o.label())
							})),
					)
					.child(
						button()
							.class("bg-white")
							.attr("data-action", more_action)
							.text("More Filters"),
					),
			)
			.build()
	}
}
