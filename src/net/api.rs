//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning defaults since these endpoints are
//! only meaningful in the browser.

#![allow(clippy::unused_async)]

use crate::state::flags::FeatureFlags;

/// Fetch the session's capability flags from `/api/flags`.
///
/// Returns `None` when the request fails or the payload is malformed;
/// callers treat that the same as all flags being off.
pub async fn fetch_feature_flags() -> Option<FeatureFlags> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/flags").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<FeatureFlags>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
