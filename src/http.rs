use hyperx::header::TypedHeaders;
use serde::de::DeserializeOwned;
use snafu::ResultExt;
use url::Url;

use crate::{config::Configuration, constants::*, error, Result};

/// Transport shared by every resource binding. Credentials are read from the
/// `Configuration` passed with each request.
#[derive(Debug, Clone, Default)]
pub struct Client {
	client: reqwest::Client,
}

/// HTTP util methods.
impl Client {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn request(
		&self,
		configuration: &Configuration,
		builder: reqwest::RequestBuilder,
	) -> Result<reqwest::Response> {
		let builder = match &configuration.access_token {
			Some(token) => builder.bearer_auth(token),
			None => builder,
		};
		let request = builder
			.header(reqwest::header::ACCEPT, GITHUB_ACCEPT_HEADER)
			.header(reqwest::header::USER_AGENT, &configuration.user_agent)
			.build()
			.context(error::Http)?;

		log::debug!("{} {}", request.method(), request.url());

		let response =
			self.client.execute(request).await.context(error::Http)?;
		let status = response.status();

		if status.is_success() {
			Ok(response)
		} else {
			let text = response.text().await.context(error::Http)?;

			// Try to decode the response error as JSON otherwise store
			// it as plain text in a JSON object.
			let body = if let Ok(value) = serde_json::from_str(&text) {
				value
			} else {
				serde_json::json!({ "error_message": text })
			};

			error::Response { status, body }.fail()
		}
	}

	/// Sends a request with `method` to `url`, supplying the relevant headers
	/// for authentication and content negotiation.
	pub async fn send(
		&self,
		configuration: &Configuration,
		method: reqwest::Method,
		url: Url,
	) -> Result<reqwest::Response> {
		self.request(configuration, self.client.request(method, url))
			.await
	}

	/// Decodes a JSON body into `T`. Shape mismatches surface as
	/// `Error::Json` rather than being folded into transport errors.
	pub async fn decode<T>(response: reqwest::Response) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let bytes = response.bytes().await.context(error::Http)?;
		serde_json::from_slice(&bytes).context(error::Json)
	}

	// Originally adapted from:
	// https://github.com/XAMPPRocky/gh-auditor/blob/ca67641c0a29d64fc5c6b4244b45ae601604f3c1/src/lib.rs#L232-L267
	/// Gets all entries across all pages from a resource in GitHub.
	pub async fn get_all<T>(
		&self,
		configuration: &Configuration,
		url: Url,
	) -> Result<Vec<T>>
	where
		T: DeserializeOwned,
	{
		let mut entities = Vec::new();
		let mut next = Some(url);

		while let Some(url) = next {
			let response =
				self.send(configuration, reqwest::Method::GET, url).await?;

			next = next_page(response.headers());

			let mut body = Self::decode::<Vec<T>>(response).await?;
			entities.append(&mut body);
		}

		Ok(entities)
	}
}

/// Target of the `rel="next"` entry of a `Link` header, if any.
fn next_page(headers: &reqwest::header::HeaderMap) -> Option<Url> {
	headers
		.decode::<hyperx::header::Link>()
		.ok()
		.and_then(|v| {
			v.values()
				.iter()
				.find(|link| {
					link.rel()
						.map(|rel| {
							rel.contains(&hyperx::header::RelationType::Next)
						})
						.unwrap_or(false)
				})
				.and_then(|l| Url::parse(l.link()).ok())
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use reqwest::header::{HeaderMap, HeaderValue, LINK};

	#[test]
	fn finds_next_link() {
		let mut headers = HeaderMap::new();
		headers.insert(
			LINK,
			HeaderValue::from_static(concat!(
				"<https://api.github.com/repositories/1/pulls/1/reviews?page=3&per_page=2>; rel=\"next\", ",
				"<https://api.github.com/repositories/1/pulls/1/reviews?page=1&per_page=2>; rel=\"first\"",
			)),
		);
		assert_eq!(
			next_page(&headers).map(|url| url.to_string()),
			Some(
				"https://api.github.com/repositories/1/pulls/1/reviews?page=3&per_page=2"
					.to_owned()
			)
		);
	}

	#[test]
	fn last_page_has_no_next() {
		let mut headers = HeaderMap::new();
		headers.insert(
			LINK,
			HeaderValue::from_static(
				"<https://api.github.com/repositories/1/pulls/1/reviews?page=1&per_page=2>; rel=\"first\"",
			),
		);
		assert_eq!(next_page(&headers), None);
		assert_eq!(next_page(&HeaderMap::new()), None);
	}
}
