//! End-to-end behaviour of the candidates page without a browser


use std::cell::Cell;
use std::rc::Rc;

use fixtures::*;
use hirelist_core::{CandidateId, Dataset, Settings};
use hirelist_pages::{
	CandidatesPage, Element, MemoryStorage, PreferenceStore, RowAction, UiEvent,
};
use hirelist_tables::{RoleFilter, SortDirection, SortField};
use rstest::*;

fn page_with(dataset: Dataset, storage: &MemoryStorage) -> CandidatesPage {
	CandidatesPage::builder(dataset)
		.store(Rc::new(storage.clone()))
		.build()
		.unwrap()
}

fn select(page: &CandidatesPage, role: &str) {
	page.handle(UiEvent::SelectRole(RoleFilter::parse(role)))
		.unwrap();
}

fn row_ids(page: &CandidatesPage) -> Vec<u64> {
	page.table()
		.table_view()
		.rows()
		.iter()
		.map(|row| row.candidate.id.0)
		.collect()
}

fn summary(el: &Element) -> String {
	el.find(|e| e.attr("aria-live") == Some("polite"))
		.unwrap()
		.text_content()
}

fn page_links(el: &Element) -> Vec<String> {
	el.find_all(|e| e.attr("data-action") == Some("page"))
		.into_iter()
		.map(|e| e.text_content())
		.collect()
}

fn is_disabled(el: &Element, action: &str) -> bool {
	el.find(|e| e.attr("data-action") == Some(action))
		.is_some_and(|e| e.attr("aria-disabled") == Some("true"))
}

#[rstest]
fn test_paginates_twenty_three_matches(dataset: Dataset) {
	let page = page_with(dataset, &MemoryStorage::new());
	select(&page, FRONTEND);

	let el = page.render();
	assert_eq!(summary(&el), "Showing 1 to 10 of 23 candidates");
	assert_eq!(page_links(&el), vec!["1", "2", "3"]);
	assert!(is_disabled(&el, "previous"));
	assert!(!is_disabled(&el, "next"));
	assert_eq!(row_ids(&page), (14..=23).rev().collect::<Vec<_>>());

	page.handle(UiEvent::NextPage).unwrap();
	assert_eq!(summary(&page.render()), "Showing 11 to 20 of 23 candidates");

	page.handle(UiEvent::NextPage).unwrap();
	let el = page.render();
	assert_eq!(summary(&el), "Showing 21 to 23 of 23 candidates");
	assert_eq!(row_ids(&page), vec![3, 2, 1]);
	assert!(is_disabled(&el, "next"));

	page.handle(UiEvent::NextPage).unwrap();
	assert_eq!(page.table().view_state().page.get(), 3);
}

#[rstest]
fn test_role_without_candidates(dataset: Dataset) {
	let page = page_with(dataset, &MemoryStorage::new());
	select(&page, PRODUCT);

	let el = page.render();
	assert!(row_ids(&page).is_empty());
	assert_eq!(summary(&el), "Showing 1 to 0 of 0 candidates");
	assert!(page_links(&el).is_empty());
	assert!(is_disabled(&el, "previous"));
	assert!(is_disabled(&el, "next"));
}

#[rstest]
fn test_role_match_is_case_sensitive(dataset: Dataset) {
	let page = page_with(dataset, &MemoryStorage::new());
	select(&page, "ux designer");
	assert_eq!(page.table().table_view().total_matching(), 0);
}

#[rstest]
fn test_header_clicks_cycle_direction(dataset: Dataset) {
	let page = page_with(dataset, &MemoryStorage::new());
	let sort = || page.table().view_state().sort.get();

	page.handle(UiEvent::SortBy(SortField::Name)).unwrap();
	assert_eq!((sort().field, sort().direction), (SortField::Name, SortDirection::Ascending));
	page.handle(UiEvent::SortBy(SortField::Name)).unwrap();
	assert_eq!(sort().direction, SortDirection::Descending);
	page.handle(UiEvent::SortBy(SortField::Name)).unwrap();
	assert_eq!(sort().direction, SortDirection::Ascending);

	page.handle(UiEvent::SortBy(SortField::Role)).unwrap();
	assert_eq!((sort().field, sort().direction), (SortField::Role, SortDirection::Ascending));
}

#[rstest]
fn test_name_sort_ignores_case(dataset: Dataset) {
	let page = page_with(dataset, &MemoryStorage::new());
	select(&page, DESIGNER);
	page.handle(UiEvent::SortBy(SortField::Name)).unwrap();
	// adam, Mia, Zoe
	assert_eq!(row_ids(&page), vec![25, 26, 24]);
}

#[rstest]
fn test_filter_reaches_table_after_mount(dataset: Dataset) {
	let page = page_with(dataset, &MemoryStorage::new());
	assert_eq!(page.table().table_view().total_matching(), 27);

	select(&page, DESIGNER);
	assert_eq!(page.table().table_view().total_matching(), 3);

	select(&page, BACKEND);
	assert_eq!(row_ids(&page), vec![27]);

	select(&page, "All");
	assert_eq!(page.table().table_view().total_matching(), 27);
}

#[rstest]
fn test_filter_change_returns_to_first_page(dataset: Dataset) {
	let page = page_with(dataset, &MemoryStorage::new());
	page.handle(UiEvent::GoToPage(3)).unwrap();
	assert_eq!(page.table().view_state().page.get(), 3);

	page.handle(UiEvent::Search("frontend 1".into())).unwrap();
	assert_eq!(page.table().view_state().page.get(), 1);
	// Frontend 10..=19
	assert_eq!(page.table().table_view().total_matching(), 10);
}

#[rstest]
fn test_search_combines_with_role(dataset: Dataset) {
	let page = page_with(dataset, &MemoryStorage::new());
	page.handle(UiEvent::Search("PARK@".into())).unwrap();
	assert_eq!(row_ids(&page), vec![25]);

	select(&page, FRONTEND);
	assert!(row_ids(&page).is_empty());

	page.handle(UiEvent::Search("   ".into())).unwrap();
	assert_eq!(page.table().table_view().total_matching(), 23);
}

#[rstest]
fn test_selection_survives_reload(dataset: Dataset) {
	let storage = MemoryStorage::new();
	let first = page_with(dataset.clone(), &storage);
	select(&first, DESIGNER);
	assert_eq!(storage.get_item("activeJobFilter").unwrap().as_deref(), Some(DESIGNER));
	assert_eq!(first.filter_bar().preference().events().revision(), 1);

	let reloaded = page_with(dataset, &storage);
	assert_eq!(reloaded.filter_state().role.get(), RoleFilter::Role(DESIGNER.into()));
	assert_eq!(reloaded.table().table_view().total_matching(), 3);

	let selected: Vec<_> = reloaded
		.render()
		.find_all(|e| e.tag() == "option" && e.has_attr("selected"))
		.into_iter()
		.map(|e| e.text_content())
		.collect();
	assert_eq!(selected, vec![DESIGNER]);
}

#[rstest]
fn test_custom_storage_key(dataset: Dataset) {
	let storage = MemoryStorage::with_item("jobs", BACKEND);
	let page = CandidatesPage::builder(dataset)
		.settings(Settings::default().with_storage_key("jobs"))
		.store(Rc::new(storage.clone()))
		.build()
		.unwrap();
	assert_eq!(row_ids(&page), vec![27]);

	select(&page, "All");
	assert_eq!(storage.get_item("jobs").unwrap().as_deref(), Some("All"));
	assert_eq!(storage.get_item("activeJobFilter").unwrap(), None);
}

#[rstest]
fn test_hooks_receive_placeholders(dataset: Dataset) {
	let hooks = Rc::new(RecordingHooks::default());
	let page = CandidatesPage::builder(dataset)
		.without_store()
		.hooks(hooks.clone())
		.build()
		.unwrap();
	select(&page, DESIGNER);

	page.handle(UiEvent::Export).unwrap();
	page.handle(UiEvent::MoreFilters).unwrap();
	page.handle(UiEvent::RowAction(RowAction::ChangeStatus, CandidateId(26)))
		.unwrap();

	assert_eq!(*hooks.exports.borrow(), vec![vec![26, 25, 24]]);
	assert_eq!(*hooks.more_filters.borrow(), 1);
	assert_eq!(*hooks.row_actions.borrow(), vec![(RowAction::ChangeStatus, 26)]);
	assert!(
		page.handle(UiEvent::RowAction(RowAction::ViewDetails, CandidateId(999)))
			.is_err()
	);
}

#[rstest]
fn test_rendered_controls_drive_the_page(dataset: Dataset) {
	let page = page_with(dataset, &MemoryStorage::new());
	let el = page.render();

	let name_header = el
		.find(|e| e.attr("data-action") == Some("sort") && e.attr("data-value") == Some("name"))
		.unwrap();
	let event = UiEvent::from_dom(
		name_header.attr("data-action").unwrap(),
		name_header.attr("data-value").unwrap(),
	)
	.unwrap();
	page.handle(event).unwrap();

	let el = page.render();
	let glyphs: Vec<_> = el
		.find_all(|e| e.attr("class") == Some("sort-indicator"))
		.into_iter()
		.map(|e| e.text_content())
		.collect();
	assert_eq!(glyphs, vec!["▲", "↕", "↕"]);

	let page_two = el
		.find(|e| e.attr("data-action") == Some("page") && e.text_content() == "2")
		.unwrap();
	page.handle(UiEvent::from_dom("page", page_two.attr("data-value").unwrap()).unwrap())
		.unwrap();
	assert_eq!(page.table().view_state().page.get(), 2);
}

#[rstest]
fn test_subscribers_see_every_change(dataset: Dataset) {
	let page = page_with(dataset, &MemoryStorage::new());
	let renders = Rc::new(Cell::new(0));
	let _subscription = {
		let renders = Rc::clone(&renders);
		page.subscribe(move || renders.set(renders.get() + 1))
	};

	page.handle(UiEvent::SortBy(SortField::Role)).unwrap();
	page.handle(UiEvent::NextPage).unwrap();
	page.handle(UiEvent::Search("a".into())).unwrap();

	assert_eq!(renders.get(), 4);
}

#[rstest]
fn test_render_escapes_candidate_text() {
	let dataset = Dataset::new(
		vec![candidate(
			1,
			"<script>alert(1)</script>",
			FRONTEND,
			chrono::NaiveDate::from_ymd_opt(2023, 5, 15).unwrap(),
		)],
		vec![FRONTEND.to_string()],
	)
	.unwrap();
	let page = CandidatesPage::builder(dataset).without_store().build().unwrap();
	let html = page.render_html();
	assert!(!html.contains("<script>"));
	assert!(html.contains("&lt;script&gt;"));
	assert!(html.contains("5/15/2023"));
}
