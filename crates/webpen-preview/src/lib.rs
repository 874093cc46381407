//! webpen-preview — Compose a markup bundle into one preview document
//!
//! `compose` maps the (markup, style, script) triple to a complete HTML
//! document string. It is pure and total: the same triple always yields
//! the same document, any buffer may be empty or malformed, and nothing
//! is escaped — isolation is entirely the embedding iframe's job.

use webpen_types::Snapshot;

/// Sandbox grant for the preview frame: scripts and modal dialogs run,
/// but no same-origin access and no top-level navigation.
pub const FRAME_SANDBOX: &str = "allow-scripts allow-modals";

/// Render the three buffers into a single HTML document.
///
/// The script buffer runs inside a try/catch so a runtime error in user
/// code cannot abort rendering of the markup and style; the error goes
/// to the frame's console only.
pub fn compose(markup: &str, style: &str, script: &str) -> String {
    let mut doc = String::with_capacity(markup.len() + style.len() + script.len() + 512);
    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("<meta charset=\"UTF-8\">\n");
    doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    doc.push_str("<style>");
    doc.push_str(style);
    doc.push_str("</style>\n");
    doc.push_str("</head>\n<body>\n");
    doc.push_str(markup);
    doc.push_str("\n<script>\ntry {\n");
    doc.push_str(script);
    doc.push_str("\n} catch (error) {\n  console.error('JavaScript Error:', error);\n}\n</script>\n");
    doc.push_str("</body>\n</html>");
    doc
}

/// Compose a snapshot's preview document. Single-file snapshots have no
/// preview, so this returns `None` for them.
pub fn compose_snapshot(snapshot: &Snapshot) -> Option<String> {
    match snapshot {
        Snapshot::MarkupBundle { markup, style, script } => {
            Some(compose(markup, style, script))
        }
        Snapshot::SingleFile { .. } => None,
    }
}

/// Wrap a composed document in a host page that embeds it via `srcdoc`
/// in a sandboxed iframe. The document itself is attribute-escaped here;
/// its contents stay verbatim inside the frame.
pub fn host_page(doc: &str) -> String {
    let mut page = String::with_capacity(doc.len() + 512);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n<title>Live Preview</title>\n");
    page.push_str("<style>html,body{margin:0;height:100%}iframe{width:100%;height:100%;border:0;background:#fff}</style>\n");
    page.push_str("</head>\n<body>\n");
    page.push_str("<iframe title=\"Live Preview\" sandbox=\"");
    page.push_str(FRAME_SANDBOX);
    page.push_str("\" srcdoc=\"");
    page.push_str(&escape_attr(doc));
    page.push_str("\"></iframe>\n</body>\n</html>");
    page
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffers_embedded_verbatim() {
        let style = ".hello { color: #6366f1; }";
        let markup = "<div class='hello'>Hi & <b>bye</b></div>";
        let doc = compose(markup, style, "");
        assert!(doc.contains(&format!("<style>{}</style>", style)));
        // markup lands in the body unescaped
        assert!(doc.contains(markup));
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.ends_with("</html>"));
    }

    #[test]
    fn test_script_wrapped_in_guard() {
        let doc = compose("", "", "document.title='x'");
        let body = &doc[doc.find("<body>").unwrap()..];
        let try_at = body.find("try {").unwrap();
        let script_at = body.find("document.title='x'").unwrap();
        let catch_at = body.find("} catch (error) {").unwrap();
        assert!(try_at < script_at && script_at < catch_at);
        assert!(body.contains("console.error('JavaScript Error:', error);"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose("<p>x</p>", "p{}", "1+1");
        let b = compose("<p>x</p>", "p{}", "1+1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_triple_still_a_document() {
        let doc = compose("", "", "");
        assert!(doc.contains("<style></style>"));
        assert!(doc.contains("<meta charset=\"UTF-8\">"));
    }

    #[test]
    fn test_compose_snapshot_modes() {
        let pen = Snapshot::markup_bundle("<p>x</p>", "", "");
        assert!(compose_snapshot(&pen).unwrap().contains("<p>x</p>"));

        let paste = Snapshot::single_file("print(1)", "python", "py");
        assert!(compose_snapshot(&paste).is_none());
    }

    #[test]
    fn test_host_page_sandbox_and_escaping() {
        let doc = compose("<div class=\"x\">hi</div>", "", "");
        let page = host_page(&doc);
        assert!(page.contains("sandbox=\"allow-scripts allow-modals\""));
        assert!(!page.contains("allow-same-origin"));
        // the srcdoc attribute value must not contain raw quotes or angles
        let srcdoc = page.split("srcdoc=\"").nth(1).unwrap();
        let value = &srcdoc[..srcdoc.find("\"></iframe>").unwrap()];
        assert!(!value.contains('<'));
        assert!(!value.contains('"'));
        assert!(value.contains("&quot;x&quot;"));
    }
}
