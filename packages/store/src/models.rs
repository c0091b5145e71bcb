//! # Domain models for works, categories, and sessions
//!
//! These types mirror the JSON payloads exchanged with the portfolio backend.
//! Field names follow the backend's camelCase convention on the wire.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Work`] | A portfolio item: image URL, title, and the category it belongs to. |
//! | [`Category`] | A named grouping used by the filter bar and the add form. |
//! | [`Session`] | The identity returned by the login endpoint (`userId` + bearer `token`). |
//! | [`Credentials`] | The body posted to the login endpoint. |

use serde::{Deserialize, Deserializer, Serialize};

/// A portfolio work as returned by `GET <works>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: u32,
    pub title: String,
    pub image_url: String,
    pub category_id: u32,
    /// Embedded category; absent on some backend responses.
    #[serde(default)]
    pub category: Category,
}

/// A category as returned by `GET <categories>`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Identity persisted after a successful login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The backend sends a number; older deployments send a string.
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    pub token: String,
}

/// Login request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
