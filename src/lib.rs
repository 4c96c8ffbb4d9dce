/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Medial
//!
//! Client library for the Medial social-networking HTTP API.
//!
//! ## Features
//!
//! - Pod listing and posts feed (offset/limit paging)
//! - Posting to pods, optionally with image attachments sourced from
//!   URLs or in-memory data
//! - Comments, polls, and link-share posts
//! - Likes and direct messages
//! - Basic user information
//!
//! *Authentication uses the bearer access token issued by the Medial
//! app. Obtaining the token is left up to the consumer of this library;
//! the client decodes its payload only to learn the caller's own user
//! id and performs no signature verification.*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! medial = "0.2"
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use medial::api::{Client, ImageSource, MedialError, NewPost, PostFilter};
//!
//! async fn post_to_first_pod(access_token: &str) -> Result<(), MedialError> {
//!     let client = Client::new(access_token);
//!
//!     // Find a pod to post into
//!     let pods = client.get_pods(0, 20).await?;
//!     let pod = pods.first().expect("expected at least one pod");
//!
//!     // Create a post with a remote image attached
//!     let resp = client
//!         .send_post(NewPost {
//!             content: "hello from rust".into(),
//!             reference_id: pod.id.clone(),
//!             images: vec![ImageSource::url("https://example.com/cat.png")],
//!             ..NewPost::default()
//!         })
//!         .await?;
//!     println!("created: {resp}");
//!
//!     // Read back the latest feed
//!     let feed = client.get_posts(0, 20, PostFilter::Latest).await?;
//!     println!("feed: {feed}");
//!     Ok(())
//! }
//! ```
//!
pub mod api;
