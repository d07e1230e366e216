use serde::de::DeserializeOwned;
use snafu::ResultExt;
use url::Url;

use crate::{config::Configuration, error, http, Result};

/// A logical API request: where it goes, how, and with which parameters.
pub trait Router {
	fn method(&self) -> reqwest::Method;

	fn configuration(&self) -> &Configuration;

	/// Path relative to the configured API endpoint, starting with `/`.
	fn path(&self) -> String;

	/// Query parameters, in the order they are appended to the URL.
	fn params(&self) -> Vec<(&'static str, String)>;

	fn url(&self) -> Result<Url> {
		let endpoint = self.configuration().api_endpoint.trim_end_matches('/');
		let mut url =
			Url::parse(&format!("{}{}", endpoint, self.path())).context(error::Url)?;
		let params = self.params();
		if !params.is_empty() {
			url.query_pairs_mut().extend_pairs(params);
		}
		Ok(url)
	}
}

/// Performs the request described by `router` and decodes the body as `T`.
pub async fn load<R, T>(client: &http::Client, router: &R) -> Result<T>
where
	R: Router,
	T: DeserializeOwned,
{
	let response = client
		.send(router.configuration(), router.method(), router.url()?)
		.await?;
	http::Client::decode(response).await
}

/// Like `load`, but keeps following `Link: rel="next"` headers and
/// concatenates every page.
pub async fn load_all<R, T>(client: &http::Client, router: &R) -> Result<Vec<T>>
where
	R: Router,
	T: DeserializeOwned,
{
	client.get_all(router.configuration(), router.url()?).await
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReviewsRouter<'a> {
	ListReviews {
		configuration: &'a Configuration,
		owner: &'a str,
		repository: &'a str,
		pull_request_number: i64,
		page: u32,
		per_page: u32,
	},
}

impl Router for ReviewsRouter<'_> {
	fn method(&self) -> reqwest::Method {
		match self {
			Self::ListReviews { .. } => reqwest::Method::GET,
		}
	}

	fn configuration(&self) -> &Configuration {
		match self {
			Self::ListReviews { configuration, .. } => configuration,
		}
	}

	fn path(&self) -> String {
		match self {
			Self::ListReviews {
				owner,
				repository,
				pull_request_number,
				..
			} => format!(
				"/repos/{}/{}/pulls/{}/reviews",
				owner, repository, pull_request_number
			),
		}
	}

	fn params(&self) -> Vec<(&'static str, String)> {
		match self {
			Self::ListReviews { page, per_page, .. } => vec![
				("page", page.to_string()),
				("per_page", per_page.to_string()),
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn list_reviews(configuration: &Configuration) -> ReviewsRouter<'_> {
		ReviewsRouter::ListReviews {
			configuration,
			owner: "octokit",
			repository: "octokit.swift",
			pull_request_number: 1,
			page: 1,
			per_page: 100,
		}
	}

	#[test]
	fn list_reviews_url() {
		let configuration = Configuration::default();
		let router = list_reviews(&configuration);
		assert_eq!(router.method(), reqwest::Method::GET);
		assert_eq!(router.path(), "/repos/octokit/octokit.swift/pulls/1/reviews");

		let url = router.url().unwrap();
		assert_eq!(url.path(), "/repos/octokit/octokit.swift/pulls/1/reviews");
		assert_eq!(url.query(), Some("page=1&per_page=100"));
		assert_eq!(
			url.as_str(),
			"https://api.github.com/repos/octokit/octokit.swift/pulls/1/reviews?page=1&per_page=100"
		);
	}

	#[test]
	fn keeps_endpoint_prefix() {
		let configuration = Configuration::default()
			.with_api_endpoint("https://github.example.com/api/v3/");
		let url = list_reviews(&configuration).url().unwrap();
		assert_eq!(
			url.as_str(),
			"https://github.example.com/api/v3/repos/octokit/octokit.swift/pulls/1/reviews?page=1&per_page=100"
		);
	}

	#[test]
	fn rejects_unusable_endpoint() {
		let configuration =
			Configuration::default().with_api_endpoint("not a url");
		assert!(matches!(
			list_reviews(&configuration).url(),
			Err(error::Error::Url { .. })
		));
	}
}
