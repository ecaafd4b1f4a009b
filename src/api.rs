/// Client-side access to the site's `tables/*` JSON endpoints.
/// The endpoints are served by the hosting platform; only HTTP ok/not-ok
/// is inspected, and a failed call is terminal for that user action.
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::inquiry::InquirySubmission;
use crate::models::reference::Reference;
use crate::models::review::{Review, ReviewSubmission};

/// Fixed page size; the site never paginates past the first page.
pub const LIST_LIMIT: u32 = 100;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct ListResponse<T> {
    #[serde(default)]
    data: Vec<T>,
}

async fn fetch_list<T: DeserializeOwned>(resource: &str, limit: u32) -> Result<Vec<T>, ApiError> {
    let response = Request::get(&format!("tables/{resource}?limit={limit}"))
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let body: ListResponse<T> = response.json().await?;
    Ok(body.data)
}

async fn post_json<T: Serialize>(resource: &str, payload: &T) -> Result<(), ApiError> {
    let response = Request::post(&format!("tables/{resource}"))
        .json(payload)?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

pub async fn fetch_references() -> Result<Vec<Reference>, ApiError> {
    fetch_list("references", LIST_LIMIT).await
}

pub async fn fetch_reviews() -> Result<Vec<Review>, ApiError> {
    fetch_list("reviews", LIST_LIMIT).await
}

pub async fn submit_review(submission: &ReviewSubmission) -> Result<(), ApiError> {
    post_json("reviews", submission).await
}

pub async fn submit_inquiry(submission: &InquirySubmission) -> Result<(), ApiError> {
    post_json("inquiries", submission).await
}
