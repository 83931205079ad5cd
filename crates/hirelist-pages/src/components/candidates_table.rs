//! Candidates table: sortable headers, rows with action menus, pagination
//!
//! The table reads the shared [`FilterState`] on every render and owns its
//! own [`ViewState`]. When the filter changes, the page goes back to 1
//! unless `reset_page_on_filter_change` is off.

use std::fmt::Write as _;
use std::rc::Rc;

use hirelist_core::{Candidate, CandidateId, Dataset, Settings};
use hirelist_tables::{SortField, TableQuery, TableRow, TableView};

use crate::actions::{PageHooks, RowAction};
use crate::error::{PageError, Result};
use crate::events::UiEvent;
use crate::html::{
	Element, ElementBuilder, a, button, div, li, nav, span, table, tbody, td, th, thead, tr, ul,
};
use crate::reactive::Subscription;
use crate::state::{FilterState, ViewState};

const ROW_ACTIONS_LABEL: &str = "Actions";
const DISABLED_LINK_CLASS: &str = "pointer-events-none opacity-50";
const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// The candidates table
pub struct CandidatesTable {
	dataset: Rc<Dataset>,
	settings: Rc<Settings>,
	filter: FilterState,
	view: ViewState,
	base: TableQuery,
	hooks: Rc<dyn PageHooks>,
	_filter_subscription: Option<Subscription>,
}

impl CandidatesTable {
	/// Creates a table reading `filter`
	///
	/// # Errors
	///
	/// Returns [`PageError::Table`] if the page size is zero.
	pub fn new(
		dataset: Rc<Dataset>,
		settings: Rc<Settings>,
		filter: FilterState,
		hooks: Rc<dyn PageHooks>,
	) -> Result<Self> {
		let base = TableQuery::new(settings.page_size)?;
		let view = ViewState::default();

		let filter_subscription = settings.reset_page_on_filter_change.then(|| {
			let page = view.page.clone();
			filter.subscribe(move || {
				page.set_if_changed(1);
			})
		});

		Ok(Self {
			dataset,
			settings,
			filter,
			view,
			base,
			hooks,
			_filter_subscription: filter_subscription,
		})
	}

	/// Page and sort signals
	pub fn view_state(&self) -> &ViewState {
		&self.view
	}

	/// The query for the current filter, sort and page
	pub fn query(&self) -> TableQuery {
		self.base
			.clone()
			.with_filter(self.filter.snapshot())
			.with_sort(self.view.sort.get())
			.with_page(self.view.page.get())
	}

	/// Runs the current query over the dataset
	pub fn table_view(&self) -> TableView<'_> {
		self.query().run(self.dataset.candidates())
	}

	/// Header click on `field`
	pub fn sort_by(&self, field: SortField) {
		self.view.sort.update(|sort| *sort = sort.clicked(field));
	}

	/// Jumps to `page`, clamped to the available pages
	pub fn go_to_page(&self, page: usize) {
		let clamped = self.table_view().pagination().clamp(page);
		self.view.page.set_if_changed(clamped);
	}

	/// Previous; does nothing on the first page
	pub fn previous_page(&self) {
		self.go_to_page(self.view.page.get().saturating_sub(1));
	}

	/// Next; does nothing on the last page
	pub fn next_page(&self) {
		self.go_to_page(self.view.page.get().saturating_add(1));
	}

	/// Hands every filtered row, in sorted order, to the export hook
	pub fn export(&self) {
		let view = self.table_view();
		self.hooks.on_export(view.matching());
	}

	/// Runs a row menu item for candidate `id`
	///
	/// # Errors
	///
	/// Returns [`PageError::UnknownCandidate`] if `id` is not in the dataset.
	pub fn row_action(&self, action: RowAction, id: CandidateId) -> Result<()> {
		let candidate = self
			.dataset
			.candidates()
			.iter()
			.find(|c| c.id == id)
			.ok_or(PageError::UnknownCandidate(id))?;
		self.hooks.on_row_action(action, candidate);
		Ok(())
	}

	/// Renders the table and its footer
	pub fn render(&self) -> Element {
		let view = self.table_view();

		div()
			.class("rounded-md border bg-white")
			.child(
				div().class("relative w-full overflow-auto").child(
					table()
						.class("w-full caption-bottom text-sm")
						.child(thead().child(self.render_header()))
						.child(tbody().children(view.rows().into_iter().map(|row| self.render_row(row)))),
				),
			)
			.child(self.render_footer(&view))
			.build()
	}

	fn render_header(&self) -> ElementBuilder {
		let plain = |label: &str| th().class("h-10 px-2 text-left font-medium").text(label);

		tr().child(plain("#").class("w-[50px]"))
			.child(self.sortable_header(SortField::Name))
			.child(self.sortable_header(SortField::Role))
			.child(plain("Status"))
			.child(self.sortable_header(SortField::AppliedDate))
			.child(plain("Experience"))
			.child(plain("Skills"))
			.child(plain("Location"))
			.child(
				th().class("w-[70px]")
					.child(span().class("sr-only").text(ROW_ACTIONS_LABEL)),
			)
	}

	fn sortable_header(&self, field: SortField) -> ElementBuilder {
		let indicator = self.view.sort.with(|sort| sort.indicator(field));
		let (action, value) = UiEvent::SortBy(field).to_dom();

		th().class("h-10 px-2 text-left font-medium")
			.attr("aria-sort", indicator.aria_sort())
			.child(
				button()
					.attr("type", "button")
					.class("flex items-center gap-1 font-semibold")
					.attr("data-action", action)
					.attr("data-value", value.unwrap_or_default())
					.text(field.label())
					.child(
						span()
							.class("sort-indicator")
							.attr("aria-hidden", "true")
							.text(indicator.glyph()),
					),
			)
	}

	fn render_row(&self, row: TableRow<'_>) -> ElementBuilder {
		let candidate = row.candidate;

		tr().class("border-b hover:bg-muted/50")
			.attr("data-candidate-id", candidate.id.to_string())
			.child(td().class("p-2 font-medium").text(row.sequence.to_string()))
			.child(
				td().class("p-2")
					.child(div().class("font-medium").text(candidate.name.as_str()))
					.child(
						div()
							.class("text-sm text-muted-foreground")
							.text(candidate.email.as_str()),
					),
			)
			.child(td().class("p-2").text(candidate.role.as_str()))
			.child(
				td().class("p-2").child(
					span()
						.class(candidate.status.badge_class())
						.text(candidate.status.as_str()),
				),
			)
			.child(td().class("p-2").text(self.format_date(candidate)))
			.child(td().class("p-2").text(format!("{} years", candidate.experience)))
			.child(
				td().class("p-2").child(
					div().class("flex flex-wrap gap-1").children(candidate.skills.iter().map(
						|skill| {
							span()
								.class("badge badge-outline bg-gray-50")
								.text(skill.as_str())
						},
					)),
				),
			)
			.child(td().class("p-2").text(candidate.location.as_str()))
			.child(td().class("p-2").child(render_row_menu(candidate.id)))
	}

	/// Applied date in the configured format, or ISO if that format fails
	fn format_date(&self, candidate: &Candidate) -> String {
		let date = candidate.applied_date;
		let mut out = String::new();
		if write!(out, "{}", date.format(&self.settings.date_format)).is_err() {
			out.clear();
			let _ = write!(out, "{}", date.format(FALLBACK_DATE_FORMAT));
		}
		out
	}

	fn render_footer(&self, view: &TableView<'_>) -> ElementBuilder {
		let pagination = view.pagination();
		let summary = view.summary();
		let (export_action, _) = UiEvent::Export.to_dom();

		div()
			.class("flex items-center justify-between px-4 py-4 border-t")
			.child(
				div()
					.class("text-sm text-muted-foreground")
					.attr("aria-live", "polite")
					.text("Showing ")
					.child(span().class("font-medium").text(summary.first.to_string()))
					.text(" to ")
					.child(span().class("font-medium").text(summary.last.to_string()))
					.text(" of ")
					.child(span().class("font-medium").text(summary.total.to_string()))
					.text(" candidates"),
			)
			.child(
				div()
					.class("flex items-center space-x-6")
					.child(
						button()
							.attr("type", "button")
							.class("btn-outline btn-sm")
							.attr("data-action", export_action)
							.text("Export"),
					)
					.child(
						nav()
							.attr("role", "navigation")
							.attr("aria-label", "pagination")
							.child(
								ul().class("flex flex-row items-center gap-1")
									.child(step_link(UiEvent::PreviousPage, "Previous", !pagination.has_previous()))
									.children(
										view.page_window(self.settings.page_window)
											.into_iter()
											.map(|page| page_link(page, page == pagination.current_page)),
									)
									.child(step_link(UiEvent::NextPage, "Next", !pagination.has_next())),
							),
					),
			)
	}
}

fn render_row_menu(id: CandidateId) -> ElementBuilder {
	let items = RowAction::ALL.iter().flat_map(|&action| {
		let separator = action
			.starts_group()
			.then(|| li().attr("role", "separator").class("my-1 h-px bg-muted"));
		let (data_action, value) = UiEvent::RowAction(action, id).to_dom();
		let item = li().attr("role", "none").child(
			a().attr("role", "menuitem")
				.attr("href", "#")
				.attr("data-action", data_action)
				.attr("data-value", value.unwrap_or_default())
				.text(action.label()),
		);
		separator.into_iter().chain(std::iter::once(item))
	});

	div()
		.class("row-actions relative")
		.child(
			button()
				.attr("type", "button")
				.attr("aria-haspopup", "menu")
				.class("h-8 w-8 p-0")
				.child(span().class("sr-only").text("Open menu"))
				.child(span().attr("aria-hidden", "true").text("⋯")),
		)
		.child(
			ul().attr("role", "menu")
				.class("row-actions-menu")
				.child(
					li().attr("role", "presentation")
						.class("px-2 py-1.5 text-sm font-semibold")
						.text(ROW_ACTIONS_LABEL),
				)
				.children(items),
		)
}

fn step_link(event: UiEvent, label: &str, disabled: bool) -> ElementBuilder {
	let (action, _) = event.to_dom();
	let link = a()
		.attr("href", "#")
		.attr("data-action", action)
		.text(label);
	let link = if disabled {
		link.attr("aria-disabled", "true").class(DISABLED_LINK_CLASS)
	} else {
		link
	};
	li().child(link)
}

fn page_link(page: usize, active: bool) -> ElementBuilder {
	let (action, value) = UiEvent::GoToPage(page).to_dom();
	let link = a()
		.attr("href", "#")
		.attr("data-action", action)
		.attr("data-value", value.unwrap_or_default())
		.text(page.to_string());
	let link = if active {
		link.attr("aria-current", "page").class("page-link active")
	} else {
		link.class("page-link")
	};
	li().child(link)
}
