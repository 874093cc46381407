//! webpen-types — Shared snapshot types for the webpen playground
//!
//! This crate defines the canonical Rust representation of the share
//! service's wire format. The service stores two kinds of snapshots: a
//! markup bundle (HTML + CSS + JS, the "pen" editor) and a single file
//! with a language tag (the "universal" editor).

use serde::{Deserialize, Serialize};

pub mod lang;

/// The unit of persistence. Serializes to the service's tagged JSON shape:
/// `{"type":"codepen","html":..,"css":..,"js":..}` or
/// `{"type":"pastebin","content":..,"fileType":..,"extension":..}`.
///
/// The discriminator is fixed at construction and every consumer matches
/// exhaustively, so "which optional fields are present" never comes up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Snapshot {
    /// Three named buffers rendered together as a live preview.
    #[serde(rename = "codepen")]
    MarkupBundle {
        #[serde(rename = "html")]
        markup: String,
        #[serde(rename = "css")]
        style: String,
        #[serde(rename = "js")]
        script: String,
    },

    /// One buffer with a language tag, no preview.
    #[serde(rename = "pastebin")]
    SingleFile {
        content: String,
        /// Language tag from the registry (e.g. "python").
        #[serde(rename = "fileType")]
        file_type: String,
        /// Extension of the uploaded file, empty when typed from scratch.
        extension: String,
    },
}

/// Which editor a snapshot belongs to. Drives the shareable route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Pen,
    Universal,
}

impl EditorMode {
    /// Route for a fresh, empty session.
    pub fn route(&self) -> &'static str {
        match self {
            EditorMode::Pen => "/editor",
            EditorMode::Universal => "/universal",
        }
    }

    /// Route that loads a saved snapshot by id.
    pub fn share_path(&self, id: &str) -> String {
        format!("{}/{}", self.route(), id)
    }
}

impl Snapshot {
    pub fn markup_bundle(markup: &str, style: &str, script: &str) -> Self {
        Snapshot::MarkupBundle {
            markup: markup.to_string(),
            style: style.to_string(),
            script: script.to_string(),
        }
    }

    pub fn single_file(content: &str, file_type: &str, extension: &str) -> Self {
        Snapshot::SingleFile {
            content: content.to_string(),
            file_type: file_type.to_string(),
            extension: extension.to_string(),
        }
    }

    pub fn mode(&self) -> EditorMode {
        match self {
            Snapshot::MarkupBundle { .. } => EditorMode::Pen,
            Snapshot::SingleFile { .. } => EditorMode::Universal,
        }
    }
}

/// A snapshot plus the metadata the service assigns on save. Read-only
/// from the client's perspective; expiry is enforced server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRecord {
    /// Opaque server-assigned id, the sole retrieval handle.
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub snapshot: Snapshot,
}

/// Parse a snapshot from a tagged JSON string.
pub fn parse_snapshot(json: &str) -> Result<Snapshot, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_bundle_wire_shape() {
        let snap = Snapshot::markup_bundle("<h1>hi</h1>", "h1{color:red}", "alert(1)");
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["type"], "codepen");
        assert_eq!(json["html"], "<h1>hi</h1>");
        assert_eq!(json["css"], "h1{color:red}");
        assert_eq!(json["js"], "alert(1)");
    }

    #[test]
    fn test_single_file_wire_shape() {
        let snap = Snapshot::single_file("print(1)", "python", "py");
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["type"], "pastebin");
        assert_eq!(json["content"], "print(1)");
        assert_eq!(json["fileType"], "python");
        assert_eq!(json["extension"], "py");
    }

    #[test]
    fn test_parse_snapshot_tagged() {
        let snap = parse_snapshot(
            r#"{"type":"pastebin","content":"print(1)","fileType":"python","extension":""}"#,
        )
        .unwrap();
        assert_eq!(snap, Snapshot::single_file("print(1)", "python", ""));
        assert_eq!(snap.mode(), EditorMode::Universal);
    }

    #[test]
    fn test_share_paths() {
        assert_eq!(EditorMode::Pen.share_path("abc123"), "/editor/abc123");
        assert_eq!(EditorMode::Universal.share_path("abc123"), "/universal/abc123");
    }
}
