/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::client::Client;
use crate::api::errors::MedialError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

/// Extracts the caller's user id from a Medial access token.
///
/// The token is a three-segment signed token whose middle segment is a
/// base64url-encoded JSON object carrying a `userId` claim. Only that
/// claim is read; the signature is not verified, the client trusts
/// whatever token it was constructed with.
pub fn user_id_from_token(token: &str) -> Result<String, MedialError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(MedialError::TokenDecode(format!(
            "expected 3 token segments, found {}",
            segments.len()
        )));
    }

    // Some issuers pad the payload segment, most do not.
    let payload = URL_SAFE_NO_PAD
        .decode(segments[1].trim_end_matches('='))
        .map_err(|err| MedialError::TokenDecode(format!("payload segment is not base64: {err}")))?;
    let claims: Value = serde_json::from_slice(&payload)
        .map_err(|err| MedialError::TokenDecode(format!("payload segment is not JSON: {err}")))?;

    match claims.get("userId") {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(MedialError::TokenDecode(
            "token payload has no userId claim".into(),
        )),
    }
}

impl Client {
    /// Returns the authenticated caller's own user id, decoded from the
    /// access token this client was constructed with
    pub fn my_id(&self) -> Result<String, MedialError> {
        user_id_from_token(self.access_token())
    }
}
