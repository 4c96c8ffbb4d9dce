/*
 * Copyright (c) 2026 Medial Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::client::Client;
use crate::api::errors::MedialError;
use bytes::Bytes;

/// Source of a post image attachment.
///
/// Remote sources are fetched at submission time; in-memory blobs are
/// attached as-is.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Remote image locator, fetched with a plain GET when the post is sent
    Url(String),
    /// Image data already held in memory
    Blob(ImageBlob),
}

impl ImageSource {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    pub fn blob(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self::Blob(ImageBlob {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        })
    }
}

/// Named in-memory image data
#[derive(Debug, Clone)]
pub struct ImageBlob {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

/// A named binary attachment ready for multipart encoding
#[derive(Debug, Clone)]
pub struct ResolvedAttachment {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

// The service names uploads after their source file, so remote images
// keep the last path segment of their locator.
fn file_name_from_url(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}

impl Client {
    /// Resolves image sources into named binary attachments, preserving
    /// input order.
    ///
    /// Remote locators are fetched one at a time; resolution is
    /// all-or-nothing, a single failed fetch fails the whole batch and
    /// no partial list is returned.
    pub async fn resolve_images(
        &self,
        sources: &[ImageSource],
    ) -> Result<Vec<ResolvedAttachment>, MedialError> {
        let mut attachments = Vec::with_capacity(sources.len());
        for source in sources {
            match source {
                ImageSource::Url(url) => attachments.push(self.fetch_image(url).await?),
                ImageSource::Blob(blob) => attachments.push(ResolvedAttachment {
                    file_name: blob.file_name.clone(),
                    content_type: blob.content_type.clone(),
                    data: blob.data.clone(),
                }),
            }
        }
        Ok(attachments)
    }

    async fn fetch_image(&self, url: &str) -> Result<ResolvedAttachment, MedialError> {
        let fetch_err = |reason: String| {
            log::debug!("image fetch from {url} failed: {reason}");
            MedialError::ImageFetch {
                url: url.to_string(),
                reason,
            }
        };

        let resp = self
            .https_client()
            .get(url)
            .send()
            .await
            .map_err(|err| fetch_err(err.to_string()))?;
        if !resp.status().is_success() {
            return Err(fetch_err(resp.status().to_string()));
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = resp
            .bytes()
            .await
            .map_err(|err| fetch_err(err.to_string()))?;

        Ok(ResolvedAttachment {
            file_name: file_name_from_url(url),
            content_type,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_last_path_segment() {
        assert_eq!(
            file_name_from_url("https://cdn.example.com/a/b/photo.png"),
            "photo.png"
        );
        assert_eq!(file_name_from_url("plainname.jpg"), "plainname.jpg");
    }

    #[tokio::test]
    async fn blobs_pass_through_unchanged() {
        let client = Client::new("hdr.e30.sig");
        let sources = [ImageSource::blob("pic.gif", "image/gif", &b"GIF89a"[..])];
        let resolved = client.resolve_images(&sources).await.unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].file_name, "pic.gif");
        assert_eq!(resolved[0].content_type, "image/gif");
        assert_eq!(resolved[0].data, Bytes::from_static(b"GIF89a"));
    }

    #[tokio::test]
    async fn empty_source_list_resolves_to_empty() {
        let client = Client::new("hdr.e30.sig");
        let resolved = client.resolve_images(&[]).await.unwrap();
        assert!(resolved.is_empty());
    }
}
