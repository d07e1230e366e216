use snafu::ResultExt;

use crate::{constants::*, error, Result};

/// Where and as whom requests are made.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
	pub api_endpoint: String,
	/// sent as a bearer token when present
	pub access_token: Option<String>,
	pub user_agent: String,
}

impl Default for Configuration {
	fn default() -> Self {
		Self {
			api_endpoint: GITHUB_API_URL.to_owned(),
			access_token: None,
			user_agent: DEFAULT_USER_AGENT.to_owned(),
		}
	}
}

impl Configuration {
	pub fn new<I: Into<String>>(access_token: Option<I>) -> Self {
		Self {
			access_token: access_token.map(Into::into),
			..Self::default()
		}
	}

	/// Points the client at another API root, e.g. a GitHub Enterprise
	/// instance or a mock server.
	pub fn with_api_endpoint<I: Into<String>>(mut self, api_endpoint: I) -> Self {
		self.api_endpoint = api_endpoint.into();
		self
	}

	pub fn with_user_agent<I: Into<String>>(mut self, user_agent: I) -> Self {
		self.user_agent = user_agent.into();
		self
	}

	pub fn from_env() -> Result<Self> {
		dotenv::dotenv().ok();

		let api_endpoint = dotenv::var("GITHUB_API_URL")
			.unwrap_or_else(|_| GITHUB_API_URL.to_owned());
		url::Url::parse(&api_endpoint).context(error::Url)?;

		let access_token = dotenv::var("GITHUB_TOKEN")
			.ok()
			.filter(|token| !token.is_empty());

		let user_agent = dotenv::var("GITHUB_USER_AGENT")
			.unwrap_or_else(|_| DEFAULT_USER_AGENT.to_owned());
		if user_agent.is_empty() {
			return error::Configuration {
				msg: "GITHUB_USER_AGENT must not be empty",
			}
			.fail();
		}

		Ok(Self {
			api_endpoint,
			access_token,
			user_agent,
		})
	}
}
