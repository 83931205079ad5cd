//! Dataset loading tests

use std::io::Write;

use chrono::NaiveDate;
use hirelist_core::{CandidateId, CoreError, Dataset, Settings, Status};
use rstest::*;

#[fixture]
fn dataset_json() -> String {
	r#"{
		"roles": ["Frontend Developer", "Backend Developer", "UX Designer"],
		"candidates": [
			{
				"id": 1,
				"name": "Alex Johnson",
				"email": "alex.johnson@example.com",
				"role": "Frontend Developer",
				"status": "Interview",
				"appliedDate": "2023-05-15",
				"experience": 4,
				"skills": ["React", "TypeScript", "CSS"],
				"location": "New York"
			},
			{
				"id": 2,
				"name": "Sarah Williams",
				"email": "sarah.w@example.com",
				"role": "UX Designer",
				"status": "Applied",
				"appliedDate": "2023-06-02",
				"experience": 6,
				"skills": ["Figma"],
				"location": "Remote"
			}
		]
	}"#
	.to_string()
}

#[rstest]
fn test_load_from_json(dataset_json: String) {
	let dataset = Dataset::from_json_str(&dataset_json).unwrap();

	assert_eq!(dataset.len(), 2);
	assert_eq!(
		dataset.roles(),
		["Frontend Developer", "Backend Developer", "UX Designer"]
	);

	let alex = &dataset.candidates()[0];
	assert_eq!(alex.id, CandidateId(1));
	assert_eq!(alex.status, Status::Interview);
	assert_eq!(alex.applied_date, NaiveDate::from_ymd_opt(2023, 5, 15).unwrap());
	assert_eq!(alex.skills, ["React", "TypeScript", "CSS"]);
}

#[rstest]
fn test_load_from_path(dataset_json: String) {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(dataset_json.as_bytes()).unwrap();

	let dataset = Dataset::from_json_path(file.path()).unwrap();
	assert_eq!(dataset.len(), 2);
}

#[rstest]
fn test_missing_file_reports_path() {
	let err = Dataset::from_json_path("/nonexistent/candidates.json").unwrap_err();
	match err {
		CoreError::Io { path, .. } => assert!(path.ends_with("candidates.json")),
		other => panic!("expected Io error, got {other:?}"),
	}
}

#[rstest]
fn test_unknown_status_rejected_at_load(dataset_json: String) {
	let json = dataset_json.replace("\"Applied\"", "\"Hired\"");
	let err = Dataset::from_json_str(&json).unwrap_err();
	match err {
		CoreError::UnknownStatus { id, status } => {
			assert_eq!(id, CandidateId(2));
			assert_eq!(status, "Hired");
		}
		other => panic!("expected UnknownStatus, got {other:?}"),
	}
}

#[rstest]
fn test_duplicate_id_rejected_at_load(dataset_json: String) {
	let json = dataset_json.replace("\"id\": 2", "\"id\": 1");
	let err = Dataset::from_json_str(&json).unwrap_err();
	assert!(matches!(err, CoreError::DuplicateCandidate(CandidateId(1))));
}

#[rstest]
fn test_malformed_date_is_json_error(dataset_json: String) {
	let json = dataset_json.replace("2023-06-02", "June 2nd");
	assert!(matches!(Dataset::from_json_str(&json), Err(CoreError::Json(_))));
}

#[rstest]
fn test_roles_are_optional() {
	let dataset = Dataset::from_json_str(r#"{ "candidates": [] }"#).unwrap();
	assert!(dataset.is_empty());
	assert!(dataset.roles().is_empty());
}

#[rstest]
fn test_settings_from_path() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "page_size = 20").unwrap();
	writeln!(file, "validate_persisted_filter = true").unwrap();

	let settings = Settings::from_path(file.path()).unwrap();
	assert_eq!(settings.page_size, 20);
	assert!(settings.validate_persisted_filter);
	assert_eq!(settings.storage_key, "activeJobFilter");
}
