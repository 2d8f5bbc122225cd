// SPDX-License-Identifier: MPL-2.0
//! Content Source client.
//!
//! Retrieves the single JSON content document, either over HTTP(S) or from
//! a local file. There is no retry, timeout, or caching: the document is
//! fetched once at startup and a failure is terminal for the session.

use super::ContentDocument;
use crate::error::ContentError;

/// Parses a content document body.
pub fn parse(body: &str) -> Result<ContentDocument, ContentError> {
    let document = serde_json::from_str(body)?;
    Ok(document)
}

/// Fetches and parses the content document from `location`.
///
/// `http://` and `https://` locations go over the network; non-2xx
/// responses surface as [`ContentError::Status`]. Anything else is read
/// from the local filesystem.
pub async fn fetch(location: &str) -> Result<ContentDocument, ContentError> {
    let body = if location.starts_with("http://") || location.starts_with("https://") {
        reqwest::get(location)
            .await?
            .error_for_status()?
            .text()
            .await?
    } else {
        std::fs::read_to_string(location)?
    };
    parse(&body)
}
