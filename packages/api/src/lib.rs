//! # API crate — HTTP client for the portfolio backend
//!
//! Every request the front end sends goes through [`ApiClient`]. Endpoint URLs
//! come from [`store::config::ApiConfig`]; nothing here hardcodes a path.
//! The same code runs in the browser (reqwest's fetch backend on wasm32) and
//! natively, where the tests drive it against mock servers.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login submission (validate, post, persist the session) and logout |
//! | [`gallery`] | Page-level operations: initial load, delete-then-refresh, create-then-refresh; read failures degrade to empty collections |
//! | [`error`] | [`ApiError`], the transport/status error type |
//!
//! ## Endpoints
//!
//! | Method | Function | Request | Success |
//! |--------|----------|---------|---------|
//! | `POST <login>` | [`ApiClient::login`] | JSON `{email, password}` | exactly `200`, body `{userId, token}` |
//! | `GET <works>` | [`ApiClient::get_works`] | — | `2xx`, JSON array of [`Work`] |
//! | `GET <categories>` | [`ApiClient::get_categories`] | — | `2xx`, JSON array of [`Category`] |
//! | `POST <works>` | [`ApiClient::create_work`] | multipart `title`, `category`, `image`; bearer token | any `2xx` |
//! | `DELETE <works>/<id>` | [`ApiClient::delete_work`] | bearer token | any `2xx` |

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use store::config::ApiConfig;
use store::{Category, Credentials, Session, Work};

pub mod auth;
pub mod error;
pub mod gallery;

pub use auth::{login_redirect, logout, submit_login, LoginError};
pub use error::ApiError;

/// A work about to be uploaded.
#[derive(Clone, Debug, PartialEq)]
pub struct NewWork {
    pub title: String,
    pub category: u32,
    pub image: ImageUpload,
}

/// Raw bytes of the chosen image plus the metadata the multipart part needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Client for the portfolio backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Exchange credentials for a session. Anything but `200` is a rejection.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let response = self
            .http
            .post(self.config.login_url())
            .json(credentials)
            .send()
            .await?;
        if response.status() != StatusCode::OK {
            return Err(ApiError::from_status(response.status()));
        }
        Ok(response.json().await?)
    }

    pub async fn get_works(&self) -> Result<Vec<Work>, ApiError> {
        let response = self.http.get(self.config.works_url()).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::from_status(response.status()));
        }
        Ok(response.json().await?)
    }

    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self.http.get(self.config.categories_url()).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::from_status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Upload a new work as `multipart/form-data`.
    pub async fn create_work(&self, work: NewWork, token: &str) -> Result<(), ApiError> {
        let image = Part::bytes(work.image.bytes)
            .file_name(work.image.file_name)
            .mime_str(&work.image.mime)?;
        let form = Form::new()
            .text("title", work.title)
            .text("category", work.category.to_string())
            .part("image", image);

        let response = self
            .http
            .post(self.config.works_url())
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::from_status(response.status()));
        }
        Ok(())
    }

    pub async fn delete_work(&self, id: u32, token: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.config.work_url(id))
            .bearer_auth(token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::from_status(response.status()));
        }
        Ok(())
    }
}
