/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::client::Client;
use crate::api::errors::MedialError;
use serde::Deserialize;
use serde_json::Value;

/// Holds information returned for a pod (a community posts are scoped to).
///
/// The service adds fields to this object without versioning, so
/// everything beyond the id is optional and unrecognized fields are
/// retained in `extra` rather than rejected.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub member_count: Option<u64>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

// Expected response envelope for the pod listing
#[derive(Deserialize, Debug)]
struct PodsResponse {
    data: Vec<Pod>,
}

impl Client {
    const POD_URI: &'static str = "/v1/pod";

    /// Fetches a page of pods, unwrapped from the response envelope
    pub async fn get_pods(&self, offset: u32, limit: u32) -> Result<Vec<Pod>, MedialError> {
        let offset = offset.to_string();
        let limit = limit.to_string();
        let params = [("offset", offset.as_str()), ("limit", limit.as_str())];
        self.get::<PodsResponse>(Self::POD_URI, Some(&params))
            .await
            .map(|resp| resp.data)
    }
}
