//! # Gallery operations — fetch, mutate, refresh
//!
//! These functions sit between the UI and [`ApiClient`] and encode the page's
//! error policy:
//!
//! - **Reads** ([`fetch_works_or_empty`], [`fetch_categories_or_empty`],
//!   [`load_gallery`]) never fail. Errors are logged and the caller receives
//!   an empty collection, which renders as an empty gallery.
//! - **Delete** ([`delete_and_refresh`]) logs a failed request and refreshes
//!   anyway; the next full fetch reconciles the page with the backend.
//! - **Create** ([`create_and_refresh`]) surfaces the failure so the add form
//!   can show it in its banner, and refreshes only on success.
//!
//! Every mutation returns a complete new work collection; callers replace
//! their state with it rather than patching.

use store::{Category, GalleryState, Work};

use crate::{ApiClient, ApiError, NewWork};

pub async fn fetch_works_or_empty(client: &ApiClient) -> Vec<Work> {
    match client.get_works().await {
        Ok(works) => {
            tracing::info!("Loaded {} works", works.len());
            works
        }
        Err(e) => {
            tracing::error!("Failed to load works: {e}");
            Vec::new()
        }
    }
}

pub async fn fetch_categories_or_empty(client: &ApiClient) -> Vec<Category> {
    match client.get_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            tracing::error!("Failed to load categories: {e}");
            Vec::new()
        }
    }
}

/// Initial page load: one fetch per collection.
pub async fn load_gallery(client: &ApiClient) -> GalleryState {
    let works = fetch_works_or_empty(client).await;
    let categories = fetch_categories_or_empty(client).await;
    GalleryState::new(works, categories)
}

/// Delete a work, then re-fetch the collection whatever the outcome.
pub async fn delete_and_refresh(client: &ApiClient, id: u32, token: &str) -> Vec<Work> {
    match client.delete_work(id, token).await {
        Ok(()) => tracing::info!("Deleted work {id}"),
        Err(e) => tracing::warn!("Failed to delete work {id}: {e}"),
    }
    fetch_works_or_empty(client).await
}

/// Upload a work, then re-fetch the collection.
pub async fn create_and_refresh(
    client: &ApiClient,
    work: NewWork,
    token: &str,
) -> Result<Vec<Work>, ApiError> {
    let title = work.title.clone();
    client.create_work(work, token).await?;
    tracing::info!("Created work \"{title}\"");
    Ok(fetch_works_or_empty(client).await)
}
