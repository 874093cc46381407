//! webpen-client — Client for the external share service
//!
//! Two operations: POST `{base}/save` submits a snapshot and returns an
//! opaque id; GET `{base}/get/{id}` retrieves it. Each call is attempted
//! exactly once — no retries, no caching. The client holds no mutable
//! state and can be shared freely.

use serde::Deserialize;

use webpen_types::{Snapshot, SnapshotRecord};

mod error;

pub use error::PersistenceError;

pub(crate) const FALLBACK_SAVE: &str = "Failed to save code";
pub(crate) const FALLBACK_GET: &str = "Failed to fetch code";

/// Response of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SaveReceipt {
    pub id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Flat wire shape of GET `{base}/get/{id}`. Which fields are present
/// depends on the stored snapshot's type; all default to empty.
#[derive(Debug, Default, Deserialize)]
struct GetResponse {
    #[serde(default)]
    html: String,
    #[serde(default)]
    css: String,
    #[serde(default)]
    js: String,
    #[serde(default)]
    content: String,
    #[serde(rename = "fileType", default)]
    file_type: String,
    #[serde(default)]
    extension: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(rename = "createdAt", default)]
    created_at: String,
    #[serde(rename = "updatedAt", default)]
    updated_at: String,
}

impl GetResponse {
    fn into_record(self, id: &str) -> SnapshotRecord {
        // Anything that is not explicitly a pastebin decodes as a markup
        // bundle; absent fields are already empty strings.
        let snapshot = if self.kind == "pastebin" {
            Snapshot::SingleFile {
                content: self.content,
                file_type: self.file_type,
                extension: self.extension,
            }
        } else {
            Snapshot::MarkupBundle {
                markup: self.html,
                style: self.css,
                script: self.js,
            }
        };
        SnapshotRecord {
            id: id.to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            snapshot,
        }
    }
}

pub struct PersistenceClient {
    http: reqwest::Client,
    base: String,
}

impl PersistenceClient {
    pub fn new(http: reqwest::Client, base: String) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Submit a snapshot. Returns the server-assigned id.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<SaveReceipt, PersistenceError> {
        let url = format!("{}/save", self.base);
        let resp = self
            .http
            .post(&url)
            .json(snapshot)
            .send()
            .await
            .map_err(|e| {
                eprintln!("[api] save request failed: {} (url={})", e, url);
                PersistenceError::transport(FALLBACK_SAVE, e.to_string())
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let message = extract_message(&body, FALLBACK_SAVE);
            eprintln!("[api] save returned {}: {}", status, message);
            return Err(PersistenceError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let receipt: SaveReceipt = resp.json().await.map_err(|e| {
            eprintln!("[api] save response parse failed: {}", e);
            PersistenceError::transport(FALLBACK_SAVE, e.to_string())
        })?;
        Ok(receipt)
    }

    /// Fetch a previously saved snapshot by its opaque id. The id comes
    /// from a URL path segment and is only required to be non-empty.
    pub async fn load(&self, id: &str) -> Result<SnapshotRecord, PersistenceError> {
        if id.is_empty() {
            eprintln!("[api] load called with empty id");
            return Err(PersistenceError::transport(FALLBACK_GET, "empty snapshot id".into()));
        }

        let url = format!("{}/get/{}", self.base, id);
        let resp = self.http.get(&url).send().await.map_err(|e| {
            eprintln!("[api] get request failed: {} (url={})", e, url);
            PersistenceError::transport(FALLBACK_GET, e.to_string())
        })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let message = extract_message(&body, FALLBACK_GET);
            eprintln!("[api] get {} returned {}: {}", id, status, message);
            return Err(PersistenceError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body: GetResponse = resp.json().await.map_err(|e| {
            eprintln!("[api] get response parse failed: {}", e);
            PersistenceError::transport(FALLBACK_GET, e.to_string())
        })?;
        Ok(body.into_record(id))
    }
}

/// Pull a human-readable message out of an error body: `message` field
/// first, then `error`, then the caller's fallback.
fn extract_message(body: &str, fallback: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(m) = value.get("message").and_then(|v| v.as_str()) {
            return m.to_string();
        }
        if let Some(m) = value.get("error").and_then(|v| v.as_str()) {
            return m.to_string();
        }
    }
    fallback.to_string()
}
