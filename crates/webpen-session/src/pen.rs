use webpen_types::Snapshot;

use crate::LoadPhase;

const DEFAULT_MARKUP: &str =
    "<!-- Write your HTML here -->\n<div class='hello'>Hello, webpen!</div>";
const DEFAULT_STYLE: &str =
    "/* Write your CSS here */\n.hello { color: #6366f1; font-size: 2rem; text-align: center; }";
const DEFAULT_SCRIPT: &str =
    "// Write your JS here\ndocument.querySelector('.hello').onclick = () => alert('Hello from JS!');";

/// The three buffers of the pen editor. An invalid tab name is
/// unrepresentable, so `set_active` has no failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenTab {
    Markup,
    Style,
    Script,
}

impl PenTab {
    pub const ALL: [PenTab; 3] = [PenTab::Markup, PenTab::Style, PenTab::Script];

    pub fn label(&self) -> &'static str {
        match self {
            PenTab::Markup => "HTML",
            PenTab::Style => "CSS",
            PenTab::Script => "JavaScript",
        }
    }

    /// Language tag for syntax highlighting in an editor widget.
    pub fn language_tag(&self) -> &'static str {
        match self {
            PenTab::Markup => "html",
            PenTab::Style => "css",
            PenTab::Script => "javascript",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            PenTab::Markup => "html",
            PenTab::Style => "css",
            PenTab::Script => "js",
        }
    }
}

/// Editing state for the markup/style/script editor. Starts with the
/// starter buffers; every mutation is immediately visible to the preview
/// composer and to the next save — no staging, no dirty-tracking.
#[derive(Debug, Clone)]
pub struct PenSession {
    markup: String,
    style: String,
    script: String,
    active: PenTab,
    load: LoadPhase,
}

impl PenSession {
    pub fn new() -> Self {
        Self {
            markup: DEFAULT_MARKUP.to_string(),
            style: DEFAULT_STYLE.to_string(),
            script: DEFAULT_SCRIPT.to_string(),
            active: PenTab::Markup,
            load: LoadPhase::Idle,
        }
    }

    pub fn buffer(&self, tab: PenTab) -> &str {
        match tab {
            PenTab::Markup => &self.markup,
            PenTab::Style => &self.style,
            PenTab::Script => &self.script,
        }
    }

    /// Replace a buffer's content unconditionally. Arbitrary text,
    /// including empty, is accepted.
    pub fn set_buffer(&mut self, tab: PenTab, text: &str) {
        match tab {
            PenTab::Markup => self.markup = text.to_string(),
            PenTab::Style => self.style = text.to_string(),
            PenTab::Script => self.script = text.to_string(),
        }
    }

    pub fn active(&self) -> PenTab {
        self.active
    }

    /// Change which buffer copy/download act on. Never touches content.
    pub fn set_active(&mut self, tab: PenTab) {
        self.active = tab;
    }

    /// Text of the active buffer, for the clipboard.
    pub fn active_text(&self) -> &str {
        self.buffer(self.active)
    }

    /// Snapshot of the buffers as they are right now.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::markup_bundle(&self.markup, &self.style, &self.script)
    }

    pub fn load_phase(&self) -> LoadPhase {
        self.load
    }

    /// Navigation to a share link landed here; a fetch is in flight.
    pub fn begin_load(&mut self) {
        self.load = LoadPhase::Fetching;
    }

    /// Populate the buffers from a fetched snapshot. A single-file
    /// snapshot carries none of the bundle fields, so it lands as empty
    /// buffers rather than an error.
    pub fn complete_load(&mut self, snapshot: &Snapshot) {
        match snapshot {
            Snapshot::MarkupBundle { markup, style, script } => {
                self.markup = markup.clone();
                self.style = style.clone();
                self.script = script.clone();
            }
            Snapshot::SingleFile { .. } => self.clear(),
        }
        self.load = LoadPhase::Populated;
    }

    /// The fetch failed: fall back to empty buffers, never a partial
    /// population.
    pub fn fail_load(&mut self) {
        self.clear();
        self.load = LoadPhase::Failed;
    }

    pub fn clear(&mut self) {
        self.markup.clear();
        self.style.clear();
        self.script.clear();
    }

    /// Download name for the active buffer.
    pub fn download_file_name(&self) -> String {
        format!("code.{}", self.active.extension())
    }

    /// "Download all": the three buffers concatenated with comment
    /// headers, as one text file.
    pub fn bundle(&self) -> String {
        format!(
            "\n<!-- HTML -->\n{}\n\n/* CSS */\n{}\n\n// JavaScript\n{}\n",
            self.markup, self.style, self.script
        )
    }

    pub fn bundle_file_name(&self) -> &'static str {
        "web-project.txt"
    }
}

impl Default for PenSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_starter_buffers() {
        let s = PenSession::new();
        assert!(s.buffer(PenTab::Markup).contains("Hello, webpen!"));
        assert_eq!(s.active(), PenTab::Markup);
        assert_eq!(s.load_phase(), LoadPhase::Idle);
    }

    #[test]
    fn test_set_buffer_replaces_unconditionally() {
        let mut s = PenSession::new();
        s.set_buffer(PenTab::Style, "p { margin: 0 }");
        assert_eq!(s.buffer(PenTab::Style), "p { margin: 0 }");
        s.set_buffer(PenTab::Style, "");
        assert_eq!(s.buffer(PenTab::Style), "");
    }

    #[test]
    fn test_tab_switch_never_mutates_content() {
        let mut s = PenSession::new();
        s.set_buffer(PenTab::Markup, "<p>a</p>");
        s.set_buffer(PenTab::Style, "p{}");
        s.set_buffer(PenTab::Script, "1+1");
        let before = s.snapshot();
        for tab in PenTab::ALL {
            s.set_active(tab);
        }
        assert_eq!(s.snapshot(), before);
        assert_eq!(s.active_text(), "1+1");
    }

    #[test]
    fn test_snapshot_reads_current_values() {
        let mut s = PenSession::new();
        s.set_buffer(PenTab::Markup, "<p>v1</p>");
        let first = s.snapshot();
        s.set_buffer(PenTab::Markup, "<p>v2</p>");
        // the first snapshot is unaffected by later edits
        assert_eq!(
            first,
            Snapshot::markup_bundle("<p>v1</p>", s.buffer(PenTab::Style), s.buffer(PenTab::Script))
        );
    }

    #[test]
    fn test_load_lifecycle() {
        let mut s = PenSession::new();
        s.begin_load();
        assert!(s.load_phase().is_fetching());
        s.complete_load(&Snapshot::markup_bundle("<p>x</p>", "p{}", ""));
        assert_eq!(s.load_phase(), LoadPhase::Populated);
        assert_eq!(s.buffer(PenTab::Markup), "<p>x</p>");
        assert_eq!(s.buffer(PenTab::Script), "");
    }

    #[test]
    fn test_failed_load_leaves_buffers_empty() {
        let mut s = PenSession::new();
        s.begin_load();
        s.fail_load();
        assert_eq!(s.load_phase(), LoadPhase::Failed);
        assert_eq!(s.buffer(PenTab::Markup), "");
        assert_eq!(s.buffer(PenTab::Style), "");
        assert_eq!(s.buffer(PenTab::Script), "");
    }

    #[test]
    fn test_single_file_snapshot_loads_as_empty_bundle() {
        let mut s = PenSession::new();
        s.complete_load(&Snapshot::single_file("print(1)", "python", "py"));
        assert_eq!(s.buffer(PenTab::Markup), "");
        assert_eq!(s.load_phase(), LoadPhase::Populated);
    }

    #[test]
    fn test_download_names_and_bundle() {
        let mut s = PenSession::new();
        s.set_buffer(PenTab::Markup, "<p>a</p>");
        s.set_buffer(PenTab::Style, "p{}");
        s.set_buffer(PenTab::Script, "go()");
        s.set_active(PenTab::Script);
        assert_eq!(s.download_file_name(), "code.js");
        assert_eq!(
            s.bundle(),
            "\n<!-- HTML -->\n<p>a</p>\n\n/* CSS */\np{}\n\n// JavaScript\ngo()\n"
        );
        assert_eq!(s.bundle_file_name(), "web-project.txt");
    }
}
