//! The candidates page: heading, filter bar and table wired to shared state

use std::rc::Rc;

use hirelist_core::{Dataset, Settings};

use crate::actions::{NoopHooks, PageHooks};
use crate::components::{CandidatesTable, FilterBar};
use crate::error::Result;
use crate::events::UiEvent;
use crate::html::{Element, div, h1};
use crate::reactive::Subscription;
use crate::state::FilterState;
use crate::storage::{FilterPreference, PreferenceStore, local_storage};
use crate::{debug_log, info_log};

/// Page heading
pub const PAGE_TITLE: &str = "Candidate Applications";

/// Builder for [`CandidatesPage`]
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use hirelist_core::{Dataset, Settings};
/// use hirelist_pages::{CandidatesPage, MemoryStorage};
///
/// let dataset = Dataset::new(vec![], vec!["UX Designer".into()]).unwrap();
/// let page = CandidatesPage::builder(dataset)
///     .settings(Settings::default().with_page_size(20))
///     .store(Rc::new(MemoryStorage::with_item("activeJobFilter", "UX Designer")))
///     .build()
///     .unwrap();
///
/// assert_eq!(page.filter_state().role.get().as_str(), "UX Designer");
/// ```
pub struct CandidatesPageBuilder {
	dataset: Rc<Dataset>,
	settings: Settings,
	store: Option<Rc<dyn PreferenceStore>>,
	hooks: Rc<dyn PageHooks>,
}

impl CandidatesPageBuilder {
	fn new(dataset: Rc<Dataset>) -> Self {
		Self {
			dataset,
			settings: Settings::default(),
			store: local_storage(),
			hooks: Rc::new(NoopHooks),
		}
	}

	/// Replace the settings
	pub fn settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	/// Persist the role filter in `store` instead of `localStorage`
	pub fn store(mut self, store: Rc<dyn PreferenceStore>) -> Self {
		self.store = Some(store);
		self
	}

	/// Keep the role filter in memory only
	pub fn without_store(mut self) -> Self {
		self.store = None;
		self
	}

	/// Handlers for export, row actions and "More Filters"
	pub fn hooks(mut self, hooks: Rc<dyn PageHooks>) -> Self {
		self.hooks = hooks;
		self
	}

	/// Validates the settings, reads the persisted filter and builds the page
	///
	/// # Errors
	///
	/// Returns [`crate::PageError::Core`] for invalid settings.
	pub fn build(self) -> Result<CandidatesPage> {
		let Self {
			dataset,
			settings,
			store,
			hooks,
		} = self;
		settings.validate()?;

		let preference = FilterPreference::new(store, settings.storage_key.clone());
		let known_roles = settings
			.validate_persisted_filter
			.then(|| dataset.roles());
		let filter = FilterState::new(preference.load(known_roles));

		let settings = Rc::new(settings);
		let filter_bar = FilterBar::new(
			Rc::clone(&dataset),
			filter.clone(),
			preference,
			Rc::clone(&hooks),
		);
		let table = CandidatesTable::new(
			Rc::clone(&dataset),
			Rc::clone(&settings),
			filter.clone(),
			hooks,
		)?;

		info_log!(
			"candidates page ready: {} candidates, role filter {}",
			dataset.len(),
			filter.role.with(|role| role.to_string())
		);

		Ok(CandidatesPage {
			dataset,
			settings,
			filter,
			filter_bar,
			table,
		})
	}
}

/// Filter bar and candidates table over one dataset
///
/// Both components share one [`FilterState`], so every role or search
/// change reaches the table immediately.
pub struct CandidatesPage {
	dataset: Rc<Dataset>,
	settings: Rc<Settings>,
	filter: FilterState,
	filter_bar: FilterBar,
	table: CandidatesTable,
}

impl CandidatesPage {
	/// Starts building a page over `dataset`
	pub fn builder(dataset: impl Into<Rc<Dataset>>) -> CandidatesPageBuilder {
		CandidatesPageBuilder::new(dataset.into())
	}

	/// Page with default settings and hooks, persisting to `localStorage`
	/// when available
	pub fn new(dataset: impl Into<Rc<Dataset>>) -> Result<Self> {
		Self::builder(dataset).build()
	}

	/// The dataset
	pub fn dataset(&self) -> &Dataset {
		&self.dataset
	}

	/// Effective settings
	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Shared role and search state
	pub fn filter_state(&self) -> &FilterState {
		&self.filter
	}

	/// The filter bar
	pub fn filter_bar(&self) -> &FilterBar {
		&self.filter_bar
	}

	/// The table
	pub fn table(&self) -> &CandidatesTable {
		&self.table
	}

	/// Applies one user input
	///
	/// # Errors
	///
	/// Returns [`crate::PageError::UnknownCandidate`] for a row action on an
	/// id that is not in the dataset.
	pub fn handle(&self, event: UiEvent) -> Result<()> {
		debug_log!("event {:?}", event);
		match event {
			UiEvent::SelectRole(role) => self.filter_bar.select_role(role),
			UiEvent::Search(text) => self.filter_bar.set_search(text),
			UiEvent::SortBy(field) => self.table.sort_by(field),
			UiEvent::GoToPage(page) => self.table.go_to_page(page),
			UiEvent::PreviousPage => self.table.previous_page(),
			UiEvent::NextPage => self.table.next_page(),
			UiEvent::Export => self.table.export(),
			UiEvent::MoreFilters => self.filter_bar.more_filters(),
			UiEvent::RowAction(action, id) => self.table.row_action(action, id)?,
		}
		Ok(())
	}

	/// Run `f` after any change that affects the rendered output
	pub fn subscribe<F>(&self, f: F) -> Subscription
	where
		F: Fn() + Clone + 'static,
	{
		Subscription::batch([
			self.filter.subscribe(f.clone()),
			self.table.view_state().subscribe(f),
		])
	}

	/// Renders the whole page
	pub fn render(&self) -> Element {
		div()
			.class("container mx-auto py-10")
			.child(h1().class("text-3xl font-bold mb-6").text(PAGE_TITLE))
			.child(self.filter_bar.render())
			.child(self.table.render())
			.build()
	}

	/// Renders the whole page as an HTML string
	pub fn render_html(&self) -> String {
		self.render().to_html()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::PageError;
	use crate::storage::MemoryStorage;
	use hirelist_core::CoreError;
	use hirelist_tables::RoleFilter;
	use rstest::*;

	#[fixture]
	fn dataset() -> Dataset {
		Dataset::new(vec![], vec!["Backend Developer".into()]).unwrap()
	}

	#[rstest]
	fn test_invalid_settings_are_rejected(dataset: Dataset) {
		let result = CandidatesPage::builder(dataset)
			.settings(Settings::default().with_page_size(0))
			.without_store()
			.build();
		assert!(result.is_err());
	}

	#[rstest]
	fn test_time_fields_in_date_format_are_rejected(dataset: Dataset) {
		let result = CandidatesPage::builder(dataset)
			.settings(Settings {
				date_format: "%Y-%m-%d %H:%M".to_string(),
				..Settings::default()
			})
			.without_store()
			.build();
		assert!(matches!(
			result,
			Err(PageError::Core(CoreError::InvalidSetting {
				field: "date_format",
				..
			}))
		));
	}

	#[rstest]
	#[case(false, RoleFilter::Role("Gone".into()))]
	#[case(true, RoleFilter::All)]
	fn test_persisted_filter_validation(
		dataset: Dataset,
		#[case] validate: bool,
		#[case] expected: RoleFilter,
	) {
		let page = CandidatesPage::builder(dataset)
			.settings(Settings::default().with_validate_persisted_filter(validate))
			.store(Rc::new(MemoryStorage::with_item("activeJobFilter", "Gone")))
			.build()
			.unwrap();
		assert_eq!(page.filter_state().role.get(), expected);
	}

	#[rstest]
	fn test_render_has_heading(dataset: Dataset) {
		let page = CandidatesPage::builder(dataset).without_store().build().unwrap();
		let el = page.render();
		let heading = el.find(|e| e.tag() == "h1").unwrap();
		assert_eq!(heading.text_content(), PAGE_TITLE);
		let summary = el.find(|e| e.attr("aria-live") == Some("polite")).unwrap();
		assert_eq!(summary.text_content(), "Showing 1 to 0 of 0 candidates");
		assert!(page.render_html().starts_with("<div class=\"container mx-auto py-10\">"));
	}
}
