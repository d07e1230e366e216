use serde::{Deserialize, Serialize};

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub enum UserType {
	User,
	Bot,
	Organization,
	#[serde(other)]
	Unknown,
}

/// Account as embedded in other resources. Only `id` is guaranteed; the rest
/// depends on which endpoint produced the object.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
	pub id: i64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub login: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub avatar_url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub gravatar_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub html_url: Option<String>,
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub type_field: Option<UserType>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub site_admin: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub company: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub blog: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bio: Option<String>,
}

impl User {
	pub fn is_bot(&self) -> bool {
		self.type_field == Some(UserType::Bot)
	}
}
