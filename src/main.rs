use std::env;

use octokit_reviews::{error, Octokit, Pagination};
use snafu::{OptionExt, ResultExt};

const USAGE: &str = "usage: list-reviews OWNER REPO NUMBER [PAGE] [PER_PAGE]";

#[tokio::main]
async fn main() {
	env_logger::from_env(env_logger::Env::default().default_filter_or("info"))
		.init();

	if let Err(e) = run().await {
		log::error!("{}", e);
		std::process::exit(1);
	}
}

fn parse_arg<T: std::str::FromStr>(
	args: &[String],
	index: usize,
	name: &str,
) -> Result<Option<T>, error::Error> {
	match args.get(index) {
		None => Ok(None),
		Some(value) => value
			.parse::<T>()
			.ok()
			.context(error::Configuration {
				msg: format!(
					"{} must be a number, got {:?}\n{}",
					name, value, USAGE
				),
			})
			.map(Some),
	}
}

async fn run() -> Result<(), error::Error> {
	let args = env::args().skip(1).collect::<Vec<_>>();
	let (owner, repository) = match (args.get(0), args.get(1)) {
		(Some(owner), Some(repository)) => (owner, repository),
		_ => return error::Configuration { msg: USAGE }.fail(),
	};
	let number = parse_arg::<i64>(&args, 2, "NUMBER")?
		.context(error::Configuration { msg: USAGE })?;
	let defaults = Pagination::default();
	let pagination = Pagination::new(
		parse_arg(&args, 3, "PAGE")?.unwrap_or(defaults.page),
		parse_arg(&args, 4, "PER_PAGE")?.unwrap_or(defaults.per_page),
	);

	let octokit = Octokit::from_env()?;
	log::info!(
		"Listing reviews of {}/{}#{} from {}",
		owner,
		repository,
		number,
		octokit.configuration.api_endpoint
	);

	let reviews = octokit
		.reviews(owner, repository, number, pagination)
		.await?;

	log::info!("Found {} reviews", reviews.len());
	let json = serde_json::to_string_pretty(&reviews).context(error::Json)?;
	println!("{}", json);

	Ok(())
}
