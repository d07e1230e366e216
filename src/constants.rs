pub const GITHUB_API_URL: &str = "https://api.github.com";

pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

pub const DEFAULT_USER_AGENT: &str =
	concat!("octokit-reviews/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_PAGE: u32 = 1;

pub const DEFAULT_PER_PAGE: u32 = 100;
