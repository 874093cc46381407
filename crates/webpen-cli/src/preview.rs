//! Local live-preview server.
//!
//! `GET /` serves a host page embedding the composed document in a
//! sandboxed iframe; `GET /frame` serves the raw document. Buffers are
//! re-read from disk on every request, so a browser refresh shows the
//! latest edit.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use webpen_session::{PenSession, PenTab};

pub struct PreviewSource {
    pub markup: Option<PathBuf>,
    pub style: Option<PathBuf>,
    pub script: Option<PathBuf>,
}

impl PreviewSource {
    /// Current buffer values. With no files configured the starter
    /// buffers are shown; an unreadable file previews as empty.
    fn session(&self) -> PenSession {
        let mut session = PenSession::new();
        if self.markup.is_none() && self.style.is_none() && self.script.is_none() {
            return session;
        }
        for (tab, path) in [
            (PenTab::Markup, &self.markup),
            (PenTab::Style, &self.style),
            (PenTab::Script, &self.script),
        ] {
            let text = match path {
                Some(p) => std::fs::read_to_string(p).unwrap_or_else(|e| {
                    eprintln!("[preview] read {} failed: {}", p.display(), e);
                    String::new()
                }),
                None => String::new(),
            };
            session.set_buffer(tab, &text);
        }
        session
    }

    fn compose(&self) -> String {
        let session = self.session();
        webpen_preview::compose(
            session.buffer(PenTab::Markup),
            session.buffer(PenTab::Style),
            session.buffer(PenTab::Script),
        )
    }
}

pub async fn serve(source: PreviewSource, port: u16) -> Result<()> {
    let state = Arc::new(source);
    let app = Router::new()
        .route("/", get(host))
        .route("/frame", get(frame))
        .with_state(state);

    let addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    eprintln!("[preview] http://localhost:{}", port);

    axum::serve(listener, app).await.context("preview server error")
}

async fn host(State(source): State<Arc<PreviewSource>>) -> Html<String> {
    Html(webpen_preview::host_page(&source.compose()))
}

async fn frame(State(source): State<Arc<PreviewSource>>) -> Html<String> {
    Html(source.compose())
}
