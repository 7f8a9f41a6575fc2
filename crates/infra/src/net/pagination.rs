//! Pagination walker
//!
//! Follows `next_url` links page by page on a background task, streaming
//! each page's resources to a [`Listing`]. Exactly one request is in flight
//! at a time; pages are never prefetched.

use cfkit_core::listing::{self, Listing, ListingProducer, DEFAULT_LISTING_CAPACITY};
use cfkit_core::Session;
use cfkit_domain::{ApiResponse, CfError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::gateway::Gateway;

/// One page of a paginated listing
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "R: Deserialize<'de>"))]
pub struct PaginatedResources<R> {
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub resources: Vec<R>,
}

impl<R> PaginatedResources<R> {
    /// Continuation link, `None` on the last page.
    pub fn next_page(&self) -> Option<&str> {
        self.next_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Absolute URL of a page: absolute links are used verbatim, relative ones
/// are appended to the target.
pub fn resolve_page_url(target: &str, path: &str) -> Result<String, CfError> {
    if Url::parse(path).is_ok() {
        return Ok(path.to_string());
    }

    let url = format!("{}{}", target.trim_end_matches('/'), path);
    Url::parse(&url)
        .map(String::from)
        .map_err(|err| CfError::InvalidInput(format!("Error building request: {err}")))
}

impl Gateway {
    /// Stream every resource under `path`, mapping each with `map`.
    ///
    /// Target and token are read from `session` before each page, so a token
    /// refreshed mid-listing is used for the remaining pages.
    pub fn list_resources<R, T, F>(&self, session: &Session, path: &str, map: F) -> Listing<T>
    where
        R: DeserializeOwned + Send + 'static,
        T: Send + 'static,
        F: Fn(R) -> T + Send + 'static,
    {
        let (producer, listing) = listing::channel(DEFAULT_LISTING_CAPACITY);
        let gateway = self.clone();
        let session = session.clone();
        let path = path.to_string();

        tokio::spawn(async move {
            let status = walk_pages(&gateway, &session, path, map, &producer).await;
            producer.finish(status);
        });

        listing
    }
}

async fn walk_pages<R, T, F>(
    gateway: &Gateway,
    session: &Session,
    first_page: String,
    map: F,
    producer: &ListingProducer<T>,
) -> ApiResponse
where
    R: DeserializeOwned,
    F: Fn(R) -> T,
{
    let mut next = Some(first_page);
    let mut page_number = 0usize;

    while let Some(path) = next.take() {
        if producer.is_stopped() {
            debug!(page_number, "listing stopped by consumer");
            return ApiResponse::success();
        }

        let url = match resolve_page_url(&session.target(), &path) {
            Ok(url) => url,
            Err(err) => return ApiResponse::with_error("", err),
        };

        page_number += 1;
        debug!(page_number, %url, "fetching page");

        let page: PaginatedResources<R> =
            match gateway.get_resource(&url, &session.access_token()).await {
                Ok(page) => page,
                Err(status) => return status,
            };

        next = page.next_page().map(str::to_string);

        let batch: Vec<T> = page.resources.into_iter().map(&map).collect();
        if batch.is_empty() {
            continue;
        }

        if !producer.emit(batch).await {
            debug!(page_number, "listing stopped by consumer");
            return ApiResponse::success();
        }
    }

    ApiResponse::success()
}
