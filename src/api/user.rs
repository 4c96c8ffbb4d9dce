/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::client::Client;
use crate::api::errors::MedialError;
use serde_json::{Value, json};

impl Client {
    const USER_URI: &'static str = "/v2/user/";
    const CONVERSATION_URI: &'static str = "/v1/conversation";

    /// Fetches a user's profile as raw JSON
    pub async fn get_user(&self, user_id: &str) -> Result<Value, MedialError> {
        let path = format!("{}{}", Self::USER_URI, user_id);
        self.get(&path, None).await
    }

    /// Sends a direct message to the given receiver
    pub async fn send_conversation(
        &self,
        receiver_id: &str,
        text: &str,
    ) -> Result<Value, MedialError> {
        let body = json!({
            "receiverId": receiver_id,
            "text": text,
        });
        self.post_json(Self::CONVERSATION_URI, &body).await
    }
}
