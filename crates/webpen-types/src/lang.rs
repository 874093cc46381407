//! Language registry for the universal editor.
//!
//! Tags are what the service stores in `fileType`; extensions drive
//! download file names. Upload auto-detection deliberately matches the
//! file extension against the *tag*, not the extension column, so
//! `main.c` switches the editor to C but `main.py` leaves it alone
//! ("py" is not a registered tag). Matches the web client's behavior.

/// One selectable language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub tag: &'static str,
    pub label: &'static str,
    pub extension: &'static str,
}

pub const FALLBACK_TAG: &str = "plaintext";
pub const DEFAULT_TAG: &str = "javascript";

pub const LANGUAGES: &[Language] = &[
    Language { tag: "javascript", label: "JavaScript", extension: "js" },
    Language { tag: "jsx", label: "JSX", extension: "jsx" },
    Language { tag: "typescript", label: "TypeScript", extension: "ts" },
    Language { tag: "tsx", label: "TSX", extension: "tsx" },
    Language { tag: "python", label: "Python", extension: "py" },
    Language { tag: "java", label: "Java", extension: "java" },
    Language { tag: "c", label: "C", extension: "c" },
    Language { tag: "cpp", label: "C++", extension: "cpp" },
    Language { tag: "csharp", label: "C#", extension: "cs" },
    Language { tag: "go", label: "Go", extension: "go" },
    Language { tag: "php", label: "PHP", extension: "php" },
    Language { tag: "ruby", label: "Ruby", extension: "rb" },
    Language { tag: "rust", label: "Rust", extension: "rs" },
    Language { tag: "html", label: "HTML", extension: "html" },
    Language { tag: "css", label: "CSS", extension: "css" },
    Language { tag: "json", label: "JSON", extension: "json" },
    Language { tag: "markdown", label: "Markdown", extension: "md" },
    Language { tag: "shell", label: "Shell", extension: "sh" },
    Language { tag: "yaml", label: "YAML", extension: "yaml" },
    Language { tag: "xml", label: "XML", extension: "xml" },
    Language { tag: "plaintext", label: "Plain Text", extension: "txt" },
];

/// Look up a language by its tag.
pub fn by_tag(tag: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.tag == tag)
}

/// Download extension for a tag, `txt` for anything unregistered.
pub fn extension_for(tag: &str) -> &'static str {
    by_tag(tag).map(|l| l.extension).unwrap_or("txt")
}

/// Upload auto-detection: a file extension selects a language iff it
/// equals a registered tag.
pub fn detect_from_extension(ext: &str) -> Option<&'static Language> {
    by_tag(ext)
}
