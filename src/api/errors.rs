/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum MedialError {
    #[error("Access token decode error: {0}")]
    TokenDecode(String),

    #[error("Image fetch failed for {url}: {reason}")]
    ImageFetch { url: String, reason: String },

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("API response was not successful: {reason}")]
    Api {
        status: reqwest::StatusCode,
        reason: String,
    },

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),
}
