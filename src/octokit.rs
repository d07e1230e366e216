use crate::{config::Configuration, http, Result};

/// Entry point to the API. Cloning is cheap and clones share the underlying
/// connection pool but no other state. Changes to `configuration` apply to
/// every request made afterwards.
#[derive(Debug, Clone)]
pub struct Octokit {
	pub client: http::Client,
	pub configuration: Configuration,
}

impl Octokit {
	pub fn new(configuration: Configuration) -> Self {
		let client = http::Client::new();

		Self {
			client,
			configuration,
		}
	}

	pub fn from_env() -> Result<Self> {
		Configuration::from_env().map(Self::new)
	}
}

/// Page selection for list endpoints. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
	pub page: u32,
	pub per_page: u32,
}

impl Default for Pagination {
	fn default() -> Self {
		Self {
			page: crate::constants::DEFAULT_PAGE,
			per_page: crate::constants::DEFAULT_PER_PAGE,
		}
	}
}

impl Pagination {
	pub fn new(page: u32, per_page: u32) -> Self {
		Self { page, per_page }
	}
}
