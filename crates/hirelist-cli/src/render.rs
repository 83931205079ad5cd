//! Page construction from command-line arguments

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Args;
use hirelist_core::{Dataset, Settings};
use hirelist_pages::{CandidatesPage, MemoryStorage, PAGE_TITLE, PreferenceStore, UiEvent};
use hirelist_tables::{SortDirection, SortField, SortState};

/// Dataset, settings and the view state to render
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
	/// Dataset JSON file (`roles` and `candidates`)
	#[arg(short, long, value_name = "FILE")]
	pub data: PathBuf,

	/// Settings TOML file
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Role filter, as if persisted by an earlier visit
	#[arg(long, value_name = "ROLE")]
	pub role: Option<String>,

	/// Search text matched against name and email
	#[arg(long, value_name = "TEXT")]
	pub search: Option<String>,

	/// Sort column: name, role or appliedDate
	#[arg(long, value_name = "FIELD")]
	pub sort: Option<SortField>,

	/// Sort direction: asc or desc
	#[arg(long, value_name = "DIR")]
	pub direction: Option<SortDirection>,

	/// Page to show (clamped to the available pages)
	#[arg(long, default_value_t = 1)]
	pub page: usize,
}

/// Loads the dataset and settings and applies the requested view state
pub fn build_page(args: &PageArgs) -> Result<CandidatesPage> {
	let dataset = Dataset::from_json_path(&args.data)
		.with_context(|| format!("loading dataset {}", args.data.display()))?;
	let settings = match &args.config {
		Some(path) => Settings::from_path(path)
			.with_context(|| format!("loading settings {}", path.display()))?,
		None => Settings::default(),
	};

	let storage = MemoryStorage::new();
	if let Some(role) = &args.role {
		storage.set_item(&settings.storage_key, role)?;
	}

	let page = CandidatesPage::builder(dataset)
		.settings(settings)
		.store(Rc::new(storage))
		.build()?;

	if let Some(search) = &args.search {
		page.handle(UiEvent::Search(search.clone()))?;
	}
	if args.sort.is_some() || args.direction.is_some() {
		let default = SortState::default();
		// A lone --sort reads like a first header click
		let direction = match (args.sort, args.direction) {
			(_, Some(direction)) => direction,
			(Some(_), None) => SortDirection::Ascending,
			(None, None) => default.direction,
		};
		let sort = SortState::new(args.sort.unwrap_or(default.field), direction);
		page.table().view_state().sort.set(sort);
	}
	page.handle(UiEvent::GoToPage(args.page))?;

	tracing::debug!(
		candidates = page.dataset().len(),
		role = %page.filter_state().role.get(),
		page = page.table().view_state().page.get(),
		"page state applied"
	);
	Ok(page)
}

/// The page wrapped in a minimal HTML document
pub fn document(page: &CandidatesPage) -> String {
	format!(
		"<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{PAGE_TITLE}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
		page.render_html()
	)
}

/// Summary line plus the page links, the current one in brackets
pub fn summary(page: &CandidatesPage) -> String {
	let view = page.table().table_view();
	let current = view.pagination().current_page;
	let links: Vec<String> = view
		.page_window(page.settings().page_window)
		.into_iter()
		.map(|n| {
			if n == current {
				format!("[{n}]")
			} else {
				n.to_string()
			}
		})
		.collect();

	if links.is_empty() {
		view.summary().to_string()
	} else {
		format!("{}\nPages: {}", view.summary(), links.join(" "))
	}
}
