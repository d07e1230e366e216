use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Format used when encoding timestamps.
pub const RFC3339_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const RFC3339_NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const RFC3339_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Byte layout of `YYYY-MM-DDTHH:MM:SS`; `d` marks an ASCII digit.
const DATE_TIME_LAYOUT: &[u8; 19] = b"dddd-dd-ddTdd:dd:dd";

#[derive(Debug, Clone, PartialEq)]
pub enum TimeError {
	/// The value does not have the exact `YYYY-MM-DDTHH:MM:SS(Z|±HH:MM)` shape.
	Layout,
	/// The shape is right but the fields do not form a valid instant.
	Parse(chrono::ParseError),
}

impl std::fmt::Display for TimeError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Layout => {
				write!(f, "expected YYYY-MM-DDTHH:MM:SS followed by Z or ±HH:MM")
			}
			Self::Parse(e) => write!(f, "{}", e),
		}
	}
}

impl std::error::Error for TimeError {}

fn matches_layout(value: &[u8], layout: &[u8]) -> bool {
	value.len() == layout.len()
		&& value.iter().zip(layout).all(|(&b, &l)| match l {
			b'd' => b.is_ascii_digit(),
			_ => b == l,
		})
}

fn has_fixed_layout(value: &str) -> bool {
	let bytes = value.as_bytes();
	if bytes.len() < DATE_TIME_LAYOUT.len()
		|| !matches_layout(&bytes[..DATE_TIME_LAYOUT.len()], DATE_TIME_LAYOUT)
	{
		return false;
	}
	match &bytes[DATE_TIME_LAYOUT.len()..] {
		b"Z" => true,
		[sign, offset @ ..] if *sign == b'+' || *sign == b'-' => {
			matches_layout(offset, b"dd:dd")
		}
		_ => false,
	}
}

/// Parses `YYYY-MM-DDTHH:MM:SS` followed by either `Z` or a `±HH:MM` offset.
/// Any other shape, including fractional seconds, is rejected.
pub fn parse_rfc3339(value: &str) -> std::result::Result<DateTime<Utc>, TimeError> {
	if !has_fixed_layout(value) {
		return Err(TimeError::Layout);
	}
	match value.strip_suffix('Z') {
		Some(naive) => NaiveDateTime::parse_from_str(naive, RFC3339_NAIVE_FORMAT)
			.map(|naive| Utc.from_utc_datetime(&naive)),
		None => DateTime::parse_from_str(value, RFC3339_OFFSET_FORMAT)
			.map(|date| date.with_timezone(&Utc)),
	}
	.map_err(TimeError::Parse)
}

pub fn format_rfc3339(date: &DateTime<Utc>) -> String {
	date.format(RFC3339_UTC_FORMAT).to_string()
}

/// `#[serde(with = "crate::time::rfc3339")]`
pub mod rfc3339 {
	use chrono::{DateTime, Utc};
	use serde::{de, Deserialize, Deserializer, Serializer};

	pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&super::format_rfc3339(date))
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		super::parse_rfc3339(&value).map_err(|e| {
			de::Error::custom(format!("invalid RFC3339 date {:?}: {}", value, e))
		})
	}
}
