/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::client::Client;
use crate::api::errors::MedialError;
use crate::api::image::{ImageSource, ResolvedAttachment};
use crate::api::properties::{CreatorType, PostFilter, ReferenceType};
use serde::Serialize;
use serde_json::Value;

/// The JSON payload submitted under the `post` multipart field.
///
/// Built fresh for every send call and never persisted by the client.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub content: String,
    pub reference_type: ReferenceType,
    pub reference_id: String,
    pub root_post_id: String,
    pub creator: Creator,

    // Tri-state by contract: comments omit the key entirely, image-less
    // posts send an explicit null, everything else carries one tagged
    // media object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Option<Media>>,
}

/// Identity attributed as the author of a post or comment
#[derive(Serialize, Debug)]
pub struct Creator {
    pub id: String,
    #[serde(rename = "type")]
    pub creator_type: CreatorType,
}

/// Media descriptor attached to a post payload. At most one kind per post.
#[derive(Serialize, Debug)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Media {
    Image,
    Poll { poll: Poll },
    Link { links: Vec<Value> },
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub question: String,
    pub formatted_options: Vec<PollOption>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub text: String,
    pub selection_count: u32,
}

/// Properties for creating a post in a pod.
///
/// `creator_id` left as `None` attributes the post to the id decoded
/// from the client's own access token.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub content: String,
    pub reference_id: String,
    pub reference_type: ReferenceType,
    pub root_post_id: String,
    pub creator_id: Option<String>,
    pub creator_type: CreatorType,
    pub images: Vec<ImageSource>,
}

/// Properties for commenting on a post
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub content: String,
    pub reference_id: String,
    pub root_post_id: String,
    pub creator_id: Option<String>,
    pub creator_type: CreatorType,
}

/// Properties for creating a poll post
#[derive(Debug, Clone, Default)]
pub struct NewPoll {
    pub content: String,
    pub reference_id: String,
    pub reference_type: ReferenceType,
    pub root_post_id: String,
    pub creator_id: Option<String>,
    pub creator_type: CreatorType,
    pub question: String,
    pub options: Vec<String>,
}

/// Properties for creating a link-share post.
///
/// Link objects are passed to the service unmodified.
#[derive(Debug, Clone, Default)]
pub struct NewLink {
    pub content: String,
    pub reference_id: String,
    pub reference_type: ReferenceType,
    pub root_post_id: String,
    pub creator_id: Option<String>,
    pub creator_type: CreatorType,
    pub links: Vec<Value>,
}

impl Client {
    const POST_URI: &'static str = "/v2/post";
    const LIKE_URI: &'static str = "/v1/like";

    fn creator(
        &self,
        creator_id: Option<String>,
        creator_type: CreatorType,
    ) -> Result<Creator, MedialError> {
        let id = match creator_id {
            Some(id) => id,
            None => self.my_id()?,
        };
        Ok(Creator { id, creator_type })
    }

    async fn submit_payload(
        &self,
        payload: &PostPayload,
        attachments: Vec<ResolvedAttachment>,
    ) -> Result<Value, MedialError> {
        let mut form = reqwest::multipart::Form::new();
        for (idx, attachment) in attachments.into_iter().enumerate() {
            let part = reqwest::multipart::Part::bytes(attachment.data.to_vec())
                .file_name(attachment.file_name)
                .mime_str(&attachment.content_type)?;
            form = form.part(format!("postImages[{idx}]"), part);
        }
        form = form.text("post", serde_json::to_string(payload)?);
        self.post_multipart(Self::POST_URI, form).await
    }

    /// Creates a post, optionally with image attachments.
    ///
    /// Remote image sources are fetched first; if any fetch fails the
    /// post is not submitted. Returns the service's parsed response
    /// unchanged.
    pub async fn send_post(&self, props: NewPost) -> Result<Value, MedialError> {
        let attachments = self.resolve_images(&props.images).await?;
        let payload = PostPayload {
            content: props.content,
            reference_type: props.reference_type,
            reference_id: props.reference_id,
            root_post_id: props.root_post_id,
            creator: self.creator(props.creator_id, props.creator_type)?,
            media: Some((!attachments.is_empty()).then_some(Media::Image)),
        };
        self.submit_payload(&payload, attachments).await
    }

    /// Comments on an existing post
    pub async fn send_comment(&self, props: NewComment) -> Result<Value, MedialError> {
        let payload = PostPayload {
            content: props.content,
            reference_type: ReferenceType::Post,
            reference_id: props.reference_id,
            root_post_id: props.root_post_id,
            creator: self.creator(props.creator_id, props.creator_type)?,
            media: None,
        };
        self.submit_payload(&payload, Vec::new()).await
    }

    /// Creates a poll post. Every option starts with a selection count of zero.
    pub async fn send_poll(&self, props: NewPoll) -> Result<Value, MedialError> {
        let formatted_options = props
            .options
            .into_iter()
            .map(|text| PollOption {
                text,
                selection_count: 0,
            })
            .collect();
        let payload = PostPayload {
            content: props.content,
            reference_type: props.reference_type,
            reference_id: props.reference_id,
            root_post_id: props.root_post_id,
            creator: self.creator(props.creator_id, props.creator_type)?,
            media: Some(Some(Media::Poll {
                poll: Poll {
                    question: props.question,
                    formatted_options,
                },
            })),
        };
        self.submit_payload(&payload, Vec::new()).await
    }

    /// Creates a link-share post
    pub async fn send_link(&self, props: NewLink) -> Result<Value, MedialError> {
        let payload = PostPayload {
            content: props.content,
            reference_type: props.reference_type,
            reference_id: props.reference_id,
            root_post_id: props.root_post_id,
            creator: self.creator(props.creator_id, props.creator_type)?,
            media: Some(Some(Media::Link { links: props.links })),
        };
        self.submit_payload(&payload, Vec::new()).await
    }

    /// Likes a post or other referencable entity
    pub async fn like_post(
        &self,
        reference_id: &str,
        reference_type: ReferenceType,
    ) -> Result<Value, MedialError> {
        let reference_type = reference_type.to_string();
        let fields = [
            ("referenceId", reference_id),
            ("referenceType", reference_type.as_str()),
        ];
        self.post_form(Self::LIKE_URI, &fields).await
    }

    /// Fetches a page of the posts feed, returning the full response
    /// envelope. `filter` selects the feed ordering.
    pub async fn get_posts(
        &self,
        offset: u32,
        limit: u32,
        filter: PostFilter,
    ) -> Result<Value, MedialError> {
        let offset = offset.to_string();
        let limit = limit.to_string();
        let filter = filter.to_string();
        let params = [
            ("offset", offset.as_str()),
            ("limit", limit.as_str()),
            ("filter", filter.as_str()),
        ];
        self.get(Self::POST_URI, Some(&params)).await
    }
}
