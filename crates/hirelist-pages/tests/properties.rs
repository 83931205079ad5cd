//! Invariants that hold after any sequence of user input


use fixtures::*;
use hirelist_core::Dataset;
use hirelist_pages::{CandidatesPage, UiEvent};
use hirelist_tables::{RoleFilter, SortField};
use proptest::prelude::*;

fn event_strategy() -> impl Strategy<Value = UiEvent> {
	prop_oneof![
		prop::sample::select(vec!["All", FRONTEND, BACKEND, DESIGNER, PRODUCT])
			.prop_map(|role| UiEvent::SelectRole(RoleFilter::parse(role))),
		"[a-z0-9 ]{0,3}".prop_map(UiEvent::Search),
		prop::sample::select(SortField::ALL.to_vec()).prop_map(UiEvent::SortBy),
		(0usize..6).prop_map(UiEvent::GoToPage),
		Just(UiEvent::PreviousPage),
		Just(UiEvent::NextPage),
	]
}

proptest! {
	#[test]
	fn prop_page_stays_in_bounds(events in prop::collection::vec(event_strategy(), 0..40)) {
		let page = CandidatesPage::builder(dataset()).without_store().build().unwrap();
		for event in events {
			page.handle(event).unwrap();
			let view = page.table().table_view();
			let current = page.table().view_state().page.get();
			prop_assert!(current >= 1);
			prop_assert!(current <= view.total_pages().max(1));
			prop_assert!(view.rows().len() <= page.settings().page_size);
		}
	}

	#[test]
	fn prop_rows_honour_filter(
		role in prop::sample::select(vec!["All", FRONTEND, BACKEND, DESIGNER, PRODUCT]),
		search in "[a-z ]{0,4}",
	) {
		let dataset: Dataset = dataset();
		let page = CandidatesPage::builder(dataset).without_store().build().unwrap();
		page.handle(UiEvent::SelectRole(RoleFilter::parse(role))).unwrap();
		page.handle(UiEvent::Search(search.clone())).unwrap();

		let filter = page.filter_state().snapshot();
		let view = page.table().table_view();
		for candidate in view.matching() {
			prop_assert!(filter.matches(candidate));
		}
		let expected = page
			.dataset()
			.candidates()
			.iter()
			.filter(|c| filter.matches(c))
			.count();
		prop_assert_eq!(view.total_matching(), expected);
	}
}
