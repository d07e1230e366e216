use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::{
	octokit::{Octokit, Pagination},
	router::{self, ReviewsRouter},
	user::User,
	Result,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
	Approved,
	Commented,
	ChangesRequested,
	Dismissed,
	Pending,
}

/// A submitted evaluation of a pull request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
	pub body: String,
	pub commit_id: String,
	pub id: i64,
	pub state: ReviewState,
	#[serde(with = "crate::time::rfc3339")]
	pub submitted_at: DateTime<Utc>,
	pub user: User,
}

impl Octokit {
	fn list_reviews_router<'a>(
		&'a self,
		owner: &'a str,
		repository: &'a str,
		pull_request_number: i64,
		pagination: Pagination,
	) -> ReviewsRouter<'a> {
		ReviewsRouter::ListReviews {
			configuration: &self.configuration,
			owner,
			repository,
			pull_request_number,
			page: pagination.page,
			per_page: pagination.per_page,
		}
	}

	/// Fetches one page of reviews of a pull request, oldest first.
	pub async fn reviews(
		&self,
		owner: &str,
		repository: &str,
		pull_request_number: i64,
		pagination: Pagination,
	) -> Result<Vec<Review>> {
		let router = self.list_reviews_router(
			owner,
			repository,
			pull_request_number,
			pagination,
		);
		router::load(&self.client, &router).await
	}

	/// Fetches every review of a pull request, starting at
	/// `pagination.page` and following the `Link` header to the last page.
	pub async fn all_reviews(
		&self,
		owner: &str,
		repository: &str,
		pull_request_number: i64,
		pagination: Pagination,
	) -> Result<Vec<Review>> {
		let router = self.list_reviews_router(
			owner,
			repository,
			pull_request_number,
			pagination,
		);
		router::load_all(&self.client, &router).await
	}

	/// Fetches one page of reviews in the background and hands the outcome to
	/// `completion`, which runs exactly once. Aborting the returned handle
	/// cancels the request; `completion` is then never called.
	///
	/// Must be called from within a tokio runtime.
	pub fn list_reviews<F>(
		&self,
		owner: &str,
		repository: &str,
		pull_request_number: i64,
		pagination: Pagination,
		completion: F,
	) -> JoinHandle<()>
	where
		F: FnOnce(Result<Vec<Review>>) + Send + 'static,
	{
		let octokit = self.clone();
		let owner = owner.to_owned();
		let repository = repository.to_owned();

		tokio::spawn(async move {
			let response = octokit
				.reviews(&owner, &repository, pull_request_number, pagination)
				.await;
			if let Err(e) = &response {
				log::debug!(
					"Listing reviews of {}/{}#{} failed: {}",
					owner,
					repository,
					pull_request_number,
					e
				);
			}
			completion(response)
		})
	}
}
