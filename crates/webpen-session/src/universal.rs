use webpen_types::lang;
use webpen_types::Snapshot;

use crate::LoadPhase;

/// Editing state for the single-file editor: one buffer, a language tag,
/// and the name of the last uploaded file (if any). No preview exists in
/// this mode.
#[derive(Debug, Clone)]
pub struct UniversalSession {
    content: String,
    language: String,
    file_name: Option<String>,
    load: LoadPhase,
}

impl UniversalSession {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            language: lang::DEFAULT_TAG.to_string(),
            file_name: None,
            load: LoadPhase::Idle,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, text: &str) {
        self.content = text.to_string();
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, tag: &str) {
        self.language = tag.to_string();
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Take an uploaded file: the buffer becomes the file's exact text,
    /// and the language switches iff the extension equals a registered
    /// language tag. Otherwise the tag is left alone.
    pub fn load_file(&mut self, name: &str, text: &str) {
        self.file_name = Some(name.to_string());
        self.content = text.to_string();
        let ext = last_dot_segment(name).to_lowercase();
        if let Some(language) = lang::detect_from_extension(&ext) {
            self.language = language.tag.to_string();
        }
    }

    /// Snapshot of the buffer as it is right now. The extension field
    /// records the uploaded file's extension, empty when typed from
    /// scratch.
    pub fn snapshot(&self) -> Snapshot {
        let extension = self
            .file_name
            .as_deref()
            .map(last_dot_segment)
            .unwrap_or("");
        Snapshot::single_file(&self.content, &self.language, extension)
    }

    pub fn load_phase(&self) -> LoadPhase {
        self.load
    }

    pub fn begin_load(&mut self) {
        self.load = LoadPhase::Fetching;
    }

    /// Populate from a fetched snapshot. A markup bundle carries no
    /// single-file fields, so it lands as an empty plaintext buffer.
    pub fn complete_load(&mut self, snapshot: &Snapshot) {
        match snapshot {
            Snapshot::SingleFile { content, file_type, .. } => {
                self.content = content.clone();
                self.language = if file_type.is_empty() {
                    lang::FALLBACK_TAG.to_string()
                } else {
                    file_type.clone()
                };
            }
            Snapshot::MarkupBundle { .. } => {
                self.content.clear();
                self.language = lang::FALLBACK_TAG.to_string();
            }
        }
        self.load = LoadPhase::Populated;
    }

    pub fn fail_load(&mut self) {
        self.content.clear();
        self.load = LoadPhase::Failed;
    }

    /// Download name: the uploaded file's name when there is one, else
    /// `code.{ext}` derived from the language tag.
    pub fn download_file_name(&self) -> String {
        match &self.file_name {
            Some(name) => name.clone(),
            None => format!("code.{}", lang::extension_for(&self.language)),
        }
    }
}

impl Default for UniversalSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Segment after the last dot; the whole name when there is no dot.
fn last_dot_segment(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}
