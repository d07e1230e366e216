use std::sync::Once;

use httptest::Server;
use octokit_reviews::{Configuration, Octokit};
use serde_json::{json, Value};

static LOGGER: Once = Once::new();

pub fn init_logger() {
	LOGGER.call_once(|| {
		let handle = flexi_logger::Logger::try_with_env_or_str("debug")
			.unwrap()
			.log_to_stdout()
			.start()
			.unwrap();
		// Keep logging alive for the remainder of the test binary.
		std::mem::forget(handle);
	});
}

pub fn api_root(server: &Server) -> String {
	let api_root = server.url("").to_string();
	api_root.trim_end_matches('/').to_owned()
}

pub fn setup_octokit(server: &Server) -> Octokit {
	init_logger();
	Octokit::new(
		Configuration::new(Some("DOES_NOT_MATTER"))
			.with_api_endpoint(api_root(server)),
	)
}

pub const REVIEWS_PATH: &str = "/repos/octokit/octokit.swift/pulls/1/reviews";

pub fn review_json(id: i64, state: &str, login: &str) -> Value {
	json!({
		"id": id,
		"node_id": format!("MDE3OlB1bGxSZXF1ZXN0UmV2aWV3{}", id),
		"user": {
			"login": login,
			"id": id * 10,
			"type": "User",
			"site_admin": false
		},
		"body": format!("review {}", id),
		"commit_id": "7e3a8b4b5d2c1f0e9d8c7b6a5f4e3d2c1b0a9f8e",
		"state": state,
		"html_url": format!("https://github.com/octokit/octokit.swift/pull/1#pullrequestreview-{}", id),
		"pull_request_url": "https://api.github.com/repos/octokit/octokit.swift/pulls/1",
		"submitted_at": "2016-10-03T12:49:05Z"
	})
}
