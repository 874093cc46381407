use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use webpen_client::PersistenceClient;
use webpen_session::{PenSession, PenTab, UniversalSession};
use webpen_types::{lang, EditorMode, Snapshot};

mod preview;

#[derive(Parser, Debug)]
#[command(name = "webpen", about = "Save, fetch and preview shareable code snapshots")]
struct Cli {
    /// Share service base URL (default: $WEBPEN_API_URL)
    #[arg(long, global = true)]
    api: Option<String>,

    /// Web origin used to build share links (default: $WEBPEN_ORIGIN)
    #[arg(long, global = true)]
    origin: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Save an HTML/CSS/JS bundle and print its share link
    Pen {
        /// HTML buffer file
        #[arg(long)]
        markup: Option<PathBuf>,
        /// CSS buffer file
        #[arg(long)]
        style: Option<PathBuf>,
        /// JS buffer file
        #[arg(long)]
        script: Option<PathBuf>,
    },
    /// Save a single file and print its share link
    Paste {
        file: PathBuf,
        /// Language tag; auto-detected from the extension when omitted
        #[arg(long)]
        language: Option<String>,
    },
    /// Fetch a saved snapshot by id
    Get {
        id: String,
        /// Write files here instead of printing to stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Serve a sandboxed live preview of a bundle on localhost
    Preview {
        #[arg(long)]
        markup: Option<PathBuf>,
        #[arg(long)]
        style: Option<PathBuf>,
        #[arg(long)]
        script: Option<PathBuf>,
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
    /// List the supported language tags
    Languages,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Pen { ref markup, ref style, ref script } => {
            if markup.is_none() && style.is_none() && script.is_none() {
                return Err(anyhow!("nothing to save: pass --markup, --style and/or --script"));
            }
            let mut session = PenSession::new();
            for (tab, path) in [
                (PenTab::Markup, markup),
                (PenTab::Style, style),
                (PenTab::Script, script),
            ] {
                let text = match path {
                    Some(p) => fs::read_to_string(p)
                        .with_context(|| format!("read failed: {}", p.display()))?,
                    None => String::new(),
                };
                session.set_buffer(tab, &text);
            }
            save_and_link(&cli, &session.snapshot()).await
        }

        Cmd::Paste { ref file, ref language } => {
            let text = fs::read_to_string(file)
                .with_context(|| format!("read failed: {}", file.display()))?;
            let name = file
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| anyhow!("not a file name: {}", file.display()))?;

            let mut session = UniversalSession::new();
            session.load_file(name, &text);
            if let Some(tag) = language {
                lang::by_tag(tag).ok_or_else(|| {
                    anyhow!("unknown language tag '{}' (see `webpen languages`)", tag)
                })?;
                session.set_language(tag);
            }
            save_and_link(&cli, &session.snapshot()).await
        }

        Cmd::Get { ref id, ref out } => get_snapshot(&cli, id, out.as_deref()).await,

        Cmd::Preview { markup, style, script, port } => {
            preview::serve(preview::PreviewSource { markup, style, script }, port).await
        }

        Cmd::Languages => {
            for l in lang::LANGUAGES {
                println!("{:<12} {:<12} .{}", l.tag, l.label, l.extension);
            }
            Ok(())
        }
    }
}

async fn save_and_link(cli: &Cli, snapshot: &Snapshot) -> Result<()> {
    let client = persistence_client(cli)?;
    let receipt = client
        .save(snapshot)
        .await
        .map_err(|e| anyhow!(e.to_string()))?;

    if let Some(message) = &receipt.message {
        eprintln!("[save] {}", message);
    }
    eprintln!("[save] snapshot id: {}", receipt.id);
    println!("{}{}", share_origin(cli), snapshot.mode().share_path(&receipt.id));
    Ok(())
}

async fn get_snapshot(cli: &Cli, id: &str, out: Option<&std::path::Path>) -> Result<()> {
    let client = persistence_client(cli)?;
    let record = client.load(id).await.map_err(|e| anyhow!(e.to_string()))?;
    eprintln!("[get] snapshot {} ({})", record.id, match record.snapshot.mode() {
        EditorMode::Pen => "pen",
        EditorMode::Universal => "paste",
    });

    match &record.snapshot {
        Snapshot::MarkupBundle { .. } => {
            let mut session = PenSession::new();
            session.begin_load();
            session.complete_load(&record.snapshot);
            match out {
                Some(dir) => {
                    fs::create_dir_all(dir)
                        .with_context(|| format!("mkdir failed: {}", dir.display()))?;
                    for tab in PenTab::ALL {
                        let path = dir.join(format!("code.{}", tab.extension()));
                        fs::write(&path, session.buffer(tab))
                            .with_context(|| format!("write failed: {}", path.display()))?;
                        eprintln!("[get] wrote {}", path.display());
                    }
                }
                None => print!("{}", session.bundle()),
            }
        }
        Snapshot::SingleFile { .. } => {
            let mut session = UniversalSession::new();
            session.begin_load();
            session.complete_load(&record.snapshot);
            match out {
                Some(dir) => {
                    fs::create_dir_all(dir)
                        .with_context(|| format!("mkdir failed: {}", dir.display()))?;
                    let path = dir.join(session.download_file_name());
                    fs::write(&path, session.content())
                        .with_context(|| format!("write failed: {}", path.display()))?;
                    eprintln!("[get] wrote {}", path.display());
                }
                None => print!("{}", session.content()),
            }
        }
    }
    Ok(())
}

fn persistence_client(cli: &Cli) -> Result<PersistenceClient> {
    let base = match &cli.api {
        Some(base) => base.clone(),
        None => std::env::var("WEBPEN_API_URL")
            .map_err(|_| anyhow!("no service configured: set WEBPEN_API_URL or pass --api"))?,
    };
    let http = reqwest::Client::builder()
        .user_agent(format!("webpen/{}", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .context("failed to build HTTP client")?;
    Ok(PersistenceClient::new(http, base))
}

fn share_origin(cli: &Cli) -> String {
    match &cli.origin {
        Some(origin) => origin.trim_end_matches('/').to_string(),
        None => env_or("WEBPEN_ORIGIN", "http://localhost:5173")
            .trim_end_matches('/')
            .to_string(),
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
