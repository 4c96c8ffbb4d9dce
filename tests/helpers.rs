/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

// Builds a structurally valid access token carrying the given user id.
// The signature segment is junk; the client never verifies it.
#[allow(dead_code)]
pub(crate) fn access_token_for(user_id: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload =
        URL_SAFE_NO_PAD.encode(format!(r#"{{"userId":"{user_id}","iat":1712000000}}"#));
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

#[allow(dead_code)]
pub(crate) fn get_live_access_token() -> anyhow::Result<String> {
    Ok(std::env::var("MEDIAL_ACCESS_TOKEN")?)
}
