//! Subcommand implementations
//!
//! Each command works against `dyn SnippetStore` and writes to a caller
//! supplied writer, so the Postgres repository and the memory store are
//! interchangeable here.

use std::io::{self, Read, Write};

use anyhow::{anyhow, bail, Context, Result};
use chrono::SecondsFormat;
use clap::Args;
use snippetbox_store::{
    CallContext, DbError, Retention, Snippet, SnippetContent, SnippetStore, SnippetTitle,
};

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Snippet title (max 100 characters)
    #[arg(long, short = 't')]
    pub title: String,

    /// Snippet body; "-" reads it from stdin
    #[arg(long, short = 'c')]
    pub content: String,

    /// Retention in days: 1, 7 or 365
    #[arg(long, short = 'e', default_value_t = 365, allow_negative_numbers = true)]
    pub expires: i32,

    /// Map any unrecognised --expires value to one year instead of failing
    #[arg(long)]
    pub lenient: bool,
}

impl CreateArgs {
    pub fn retention(&self) -> Result<Retention> {
        if self.lenient {
            return Ok(Retention::from_days_lenient(self.expires));
        }
        Retention::try_from(self.expires)
            .map_err(|e| anyhow!("{e} (expected 1, 7 or 365; pass --lenient to fall back to a year)"))
    }

    /// Validate title and body before any connection is made.
    pub fn validated(&self) -> Result<(SnippetTitle, SnippetContent, Retention)> {
        let retention = self.retention()?;
        let title = SnippetTitle::new(&self.title).context("Invalid title")?;
        let body = if self.content == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read content from stdin")?;
            buf
        } else {
            self.content.clone()
        };
        let content = SnippetContent::new(body).context("Invalid content")?;
        Ok((title, content, retention))
    }
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Snippet id
    pub id: i32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct LatestArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_create(
    store: &dyn SnippetStore,
    ctx: &CallContext,
    title: SnippetTitle,
    content: SnippetContent,
    retention: Retention,
    out: &mut impl Write,
) -> Result<i32> {
    let id = store
        .insert(ctx, &title, &content, retention)
        .await
        .context("Failed to store snippet")?;
    tracing::info!(id, %retention, "Created snippet");
    writeln!(out, "{id}")?;
    Ok(id)
}

pub async fn run_show(
    store: &dyn SnippetStore,
    ctx: &CallContext,
    args: &ShowArgs,
    out: &mut impl Write,
) -> Result<()> {
    let snippet = match store.get_by_id(ctx, args.id).await {
        Ok(snippet) => snippet,
        Err(DbError::NoRecord) => bail!("no matching snippet with id {}", args.id),
        Err(e) => return Err(e).context("Failed to fetch snippet"),
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &snippet)?;
        writeln!(out)?;
    } else {
        write_snippet(out, &snippet)?;
    }
    Ok(())
}

pub async fn run_latest(
    store: &dyn SnippetStore,
    ctx: &CallContext,
    args: &LatestArgs,
    out: &mut impl Write,
) -> Result<()> {
    let snippets = store
        .list_latest(ctx)
        .await
        .context("Failed to list snippets")?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &snippets)?;
        writeln!(out)?;
        return Ok(());
    }

    if snippets.is_empty() {
        writeln!(out, "No snippets yet.")?;
        return Ok(());
    }

    for (i, snippet) in snippets.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_snippet(out, snippet)?;
    }
    Ok(())
}

fn write_snippet(out: &mut impl Write, snippet: &Snippet) -> io::Result<()> {
    writeln!(out, "#{} {}", snippet.id, snippet.title)?;
    writeln!(
        out,
        "created {}  expires {}",
        snippet.created.to_rfc3339_opts(SecondsFormat::Secs, true),
        snippet.expires.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(out, "{}", snippet.content.trim_end())
}
