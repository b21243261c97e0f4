//! Static asset serving for the map front-end.
//!
//! The entry document is revalidated on every load; everything else is
//! treated as immutable.

use axum::http::{header, HeaderValue, Response};
use std::path::Path;
use tower_http::services::fs::ServeFileSystemResponseBody;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeader;

pub const ENTRY_CACHE_CONTROL: &str = "no-cache";
pub const ASSET_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

type CacheHint = fn(&Response<ServeFileSystemResponseBody>) -> Option<HeaderValue>;

pub type StaticService = SetResponseHeader<ServeDir, CacheHint>;

/// Serve `dir` with cache hints. `/` resolves to `index.html`.
pub fn service(dir: &Path) -> StaticService {
    SetResponseHeader::overriding(
        ServeDir::new(dir),
        header::CACHE_CONTROL,
        cache_control as CacheHint,
    )
}

fn cache_control<B>(res: &Response<B>) -> Option<HeaderValue> {
    if !res.status().is_success() {
        return None;
    }
    let is_entry = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/html"));

    Some(HeaderValue::from_static(if is_entry {
        ENTRY_CACHE_CONTROL
    } else {
        ASSET_CACHE_CONTROL
    }))
}
