pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod octokit;
pub mod review;
pub mod router;
pub mod time;
pub mod user;

pub use config::Configuration;
pub use octokit::{Octokit, Pagination};
pub use review::{Review, ReviewState};
pub use user::{User, UserType};

pub type Result<T, E = error::Error> = std::result::Result<T, E>;
