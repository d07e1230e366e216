use snafu::{Backtrace, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum Error {
	/// An error occurred while sending or receiving a HTTP request or response
	/// respectively.
	#[snafu(display("Source: {}\nBacktrace:\n{}", source, backtrace))]
	Http {
		source: reqwest::Error,
		backtrace: Backtrace,
	},

	/// The response body did not have the shape of the expected type.
	#[snafu(display("Source: {}\nBacktrace:\n{}", source, backtrace))]
	Json {
		source: serde_json::Error,
		backtrace: Backtrace,
	},

	/// The API answered with a non-success status.
	#[snafu(display("Status code: {}\nBody:\n{:#?}", status, body))]
	Response {
		status: reqwest::StatusCode,
		body: serde_json::Value,
	},

	/// The configured API endpoint could not be turned into a request URL.
	#[snafu(display("Invalid URL: {}", source))]
	Url { source: url::ParseError },

	#[snafu(display("Invalid configuration: {}", msg))]
	Configuration { msg: String },
}

impl Error {
	/// Status code of a failed response, if the API answered at all.
	pub fn status(&self) -> Option<reqwest::StatusCode> {
		match self {
			Self::Response { status, .. } => Some(*status),
			Self::Http { source, .. } => source.status(),
			_ => None,
		}
	}
}
