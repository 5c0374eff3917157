use crate::documents::Document;
use crate::error::{Result, WalkError};
use crate::http::{self, DocumentSource};
use reqwest::{Client, Response};
use tracing::debug;

/// Plain, unauthenticated HTTP access to CMR-STAC. Requests are made one at a
/// time by whoever awaits them; the client is only shared for connection reuse.
pub struct Provider {
    client: Client,
}

impl Provider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn as_anon() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn get(self: &Self, url: &str) -> Result<Response> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| WalkError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(WalkError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }

    async fn get_body(self: &Self, url: &str) -> Result<Vec<u8>> {
        let body = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|source| WalkError::Transport {
                url: url.to_string(),
                source,
            })?;
        debug!(url, bytes = body.len(), "response received");
        Ok(body.to_vec())
    }
}

impl DocumentSource for Provider {
    async fn fetch_document(self: &Self, url: &str) -> Result<Document> {
        let body = self.get_body(url).await?;
        http::decode_document(url, &body)
    }

    async fn fetch_bytes(self: &Self, url: &str) -> Result<Vec<u8>> {
        self.get_body(url).await
    }
}
