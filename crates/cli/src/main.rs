mod args;

use std::io::Write;

use anyhow::{Context, Result, anyhow};
use evcap_core::Registry;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let loaded;
    let registry = match &args.catalog {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog");
            loaded = Registry::from_path(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            &loaded
        }
        None => Registry::builtin().map_err(|e| anyhow!("built-in catalog is broken: {e}"))?,
    };

    let mut out = std::io::stdout().lock();
    if args.list {
        for object in registry.catalog().objects.values() {
            match (&object.inherits, &object.tag_name) {
                (Some(parent), Some(tag)) => writeln!(out, "{} <{tag}> : {parent}", object.name)?,
                (Some(parent), None) => writeln!(out, "{} : {parent}", object.name)?,
                (None, Some(tag)) => writeln!(out, "{} <{tag}>", object.name)?,
                (None, None) => writeln!(out, "{}", object.name)?,
            }
        }
        return Ok(());
    }

    let Some(object) = args.object.as_deref() else {
        return Ok(());
    };
    // Accept tag names too: `evcap a` means HTMLAnchorElement.
    let object = match registry.object(object) {
        Some(_) => object,
        None => registry
            .object_for_tag(object)
            .map_or(object, |o| o.name.as_str()),
    };
    let extra: Vec<&str> = args.extra.iter().map(String::as_str).collect();
    let signatures = registry
        .signatures(object, &extra, args.suffix.as_deref())
        .with_context(|| format!("cannot resolve events for {object}"))?;

    if args.json {
        serde_json::to_writer_pretty(&mut out, &signatures)?;
        writeln!(out)?;
    } else {
        for signature in &signatures {
            writeln!(out, "{signature}")?;
        }
    }
    Ok(())
}
