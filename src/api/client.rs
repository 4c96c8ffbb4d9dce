/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::MedialError;
use serde::de::DeserializeOwned;
use serde_json::Value;

// Root Medial API
pub const API_ORIGIN: &str = "https://prod.medial.app/api";

// Fixed client-identification values the service expects verbatim. The
// upstream rejects requests that do not present themselves as the
// Android app, so these are part of the wire contract.
const API_HOST: &str = "prod.medial.app";
const ACCESS_TOKEN_HEADER: &str = "Access-Token";
const CLIENT_USER_AGENT: &str = "com.medial.android";
const CLIENT_VERSION_CODE: &str = "32";
const CLIENT_VERSION_NAME: &str = "1.3.1";

/// This can be filter types as well as other parameters the specific API expects
pub type ApiParams<'a> = [(&'a str, &'a str)];

/// Directly communicates with the Medial API.
///
/// Holds the caller-supplied access token for the lifetime of the
/// instance; the token is never refreshed or verified locally. Cloning
/// is cheap and clones share the underlying connection pool.
#[derive(Default, Clone)]
pub struct Client {
    access_token: String,
    origin: String,
    https_client: reqwest::Client,
}

impl Client {
    /// Creates a new client instance from the provided access token
    pub fn new(access_token: &str) -> Self {
        Self::with_origin(access_token, API_ORIGIN)
    }

    /// Creates a client that talks to a non-default origin.
    ///
    /// Useful for staging deployments and for pointing the client at a
    /// local mock server in tests.
    pub fn with_origin(access_token: &str, origin: &str) -> Self {
        Self {
            access_token: access_token.into(),
            origin: origin.trim_end_matches('/').into(),
            https_client: reqwest::Client::new(),
        }
    }

    pub(crate) fn access_token(&self) -> &str {
        &self.access_token
    }

    // Image fetches go out without the identification headers; they hit
    // arbitrary third-party hosts, not the service.
    pub(crate) fn https_client(&self) -> &reqwest::Client {
        &self.https_client
    }

    fn request_url(
        &self,
        path: &str,
        params: Option<&ApiParams<'_>>,
    ) -> Result<reqwest::Url, MedialError> {
        let url = format!("{}{}", self.origin, path);
        let req_url = params.map_or_else(
            || reqwest::Url::parse(&url),
            |v| reqwest::Url::parse_with_params(&url, v),
        )?;
        Ok(req_url)
    }

    fn identified(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("Accept", "application/json")
            .header(ACCESS_TOKEN_HEADER, self.access_token.as_str())
            .header("Connection", "Keep-Alive")
            .header("Host", API_HOST)
            .header("User-Agent", CLIENT_USER_AGENT)
            .header("VersionCode", CLIENT_VERSION_CODE)
            .header("VersionName", CLIENT_VERSION_NAME)
    }

    // Every endpoint checks status before touching the body. The service
    // returns JSON error envelopes with non-2xx codes and those must not
    // be mistaken for results.
    fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, MedialError> {
        let status = resp.status();
        if !status.is_success() {
            log::error!("api request to {} failed: {}", resp.url(), status);
            return Err(MedialError::Api {
                status,
                reason: status.to_string(),
            });
        }
        Ok(resp)
    }

    /// Performs a GET request against the API
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&ApiParams<'_>>,
    ) -> Result<T, MedialError> {
        let req_url = self.request_url(path, params)?;
        let resp = self
            .identified(self.https_client.get(req_url))
            .header("Accept-Charset", "UTF-8")
            .send()
            .await?;
        Ok(Self::check_status(resp)?.json::<T>().await?)
    }

    /// Submits a multipart form to the API and returns the parsed response
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value, MedialError> {
        let req_url = self.request_url(path, None)?;
        let resp = self
            .identified(self.https_client.post(req_url))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check_status(resp)?.json::<Value>().await?)
    }

    /// Submits URL-encoded form fields to the API
    pub(crate) async fn post_form(
        &self,
        path: &str,
        fields: &ApiParams<'_>,
    ) -> Result<Value, MedialError> {
        let req_url = self.request_url(path, None)?;
        let resp = self
            .identified(self.https_client.post(req_url))
            .form(fields)
            .send()
            .await?;
        Ok(Self::check_status(resp)?.json::<Value>().await?)
    }

    /// Submits a JSON body to the API
    pub(crate) async fn post_json(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<Value, MedialError> {
        let req_url = self.request_url(path, None)?;
        let resp = self
            .identified(self.https_client.post(req_url))
            .json(body)
            .send()
            .await?;
        Ok(Self::check_status(resp)?.json::<Value>().await?)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("access_token", &"xxx")
            .field("origin", &self.origin)
            .finish()
    }
}
