//! The transport seam: fetching JSON documents and raw asset bytes.
use crate::documents::Document;
use crate::error::{Result, WalkError};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub trait DocumentSource {
    /// GET `url` and return the body as a JSON object.
    async fn fetch_document(self: &Self, url: &str) -> Result<Document>;

    /// GET `url` and return the body untouched.
    async fn fetch_bytes(self: &Self, url: &str) -> Result<Vec<u8>>;
}

/// Fetch `url` and decode it into one of the typed documents.
pub async fn fetch<T: DeserializeOwned>(source: &impl DocumentSource, url: &str) -> Result<T> {
    let document = source.fetch_document(url).await?;
    parse(url, document)
}

pub fn parse<T: DeserializeOwned>(url: &str, document: Document) -> Result<T> {
    serde_json::from_value(Value::Object(document)).map_err(|source| WalkError::Decode {
        what: url.to_string(),
        source,
    })
}

/// Decode a response body, which must be a JSON object.
pub fn decode_document(url: &str, body: &[u8]) -> Result<Document> {
    let value: Value = serde_json::from_slice(body).map_err(|source| WalkError::Decode {
        what: url.to_string(),
        source,
    })?;
    match value {
        Value::Object(document) => Ok(document),
        _ => Err(WalkError::NotAnObject {
            what: url.to_string(),
        }),
    }
}
