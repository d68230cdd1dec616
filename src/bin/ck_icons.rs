//! Command line access to the icon catalog.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use ck_icons::{
  icon_specs, known_icon, list_icon_names,
  png::{png_get_header, PngChunkIter},
  IconCache,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "ck-icons", version, about = "Render the ck-wallet icon catalog to PNG files")]
struct Cli {
  /// Log at debug level, ignoring RUST_LOG
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Log as JSON lines
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Print the catalog
  List,
  /// Render icons into a directory
  Write {
    /// Output directory
    #[arg(short, long, env = "CK_ICONS_OUT", default_value = ".")]
    out: PathBuf,
    /// Icons to render, all of them when empty
    names: Vec<String>,
  },
  /// Render one icon and check its chunks
  Inspect { name: String },
}

fn init_logging(verbose: bool, json: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
  };
  if json {
    tracing_subscriber::registry()
      .with(filter)
      .with(fmt::layer().json().with_writer(std::io::stderr))
      .init();
  } else {
    tracing_subscriber::registry().with(filter).with(fmt::layer().with_writer(std::io::stderr)).init();
  }
}

/// Renders `names` (the whole catalog when empty) into `out`.
fn write_icons(cache: &IconCache, out: &Path, names: Vec<String>) -> anyhow::Result<Vec<PathBuf>> {
  let names = if names.is_empty() {
    list_icon_names().into_iter().map(String::from).collect()
  } else {
    names
  };
  if let Some(unknown) = names.iter().find(|n| !known_icon(n)) {
    bail!("no icon named {unknown:?}, see `ck-icons list`");
  }
  std::fs::create_dir_all(out).with_context(|| format!("creating {}", out.display()))?;
  let mut written = Vec::with_capacity(names.len());
  for name in &names {
    let bytes = cache.try_generate_icon(name)?.context("icon vanished from the catalog")?;
    let path = out.join(name);
    std::fs::write(&path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), len = bytes.len(), "wrote icon");
    written.push(path);
  }
  Ok(written)
}

/// Renders one icon and checks the CRC of every chunk.
fn inspect_icon(cache: &IconCache, name: &str) -> anyhow::Result<()> {
  let Some(bytes) = cache.try_generate_icon(name)? else {
    bail!("no icon named {name:?}, see `ck-icons list`");
  };
  let header = png_get_header(&bytes).context("missing IHDR")?;
  tracing::info!(width = header.width(), height = header.height(), len = bytes.len(), "header");
  let mut all_valid = true;
  for chunk in PngChunkIter::new(&bytes) {
    let valid = chunk.crc_is_valid();
    all_valid &= valid;
    tracing::info!(chunk = ?chunk.chunk_ty, len = chunk.data.len(), crc = chunk.declared_crc, valid, "chunk");
  }
  if !all_valid {
    bail!("{name} has a chunk with a bad CRC");
  }
  Ok(())
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose, cli.json);
  let cache = IconCache::new();

  match cli.command {
    Command::List => {
      for (name, spec) in icon_specs() {
        println!("{name}\t{}\tmaskable={}\tapple={}", spec.size, spec.maskable, spec.apple);
      }
    }
    Command::Write { out, names } => {
      write_icons(&cache, &out, names)?;
    }
    Command::Inspect { name } => inspect_icon(&cache, &name)?,
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use ck_icons::{png::is_png_signature_correct, ICON_CONTENT_TYPE};

  fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ck-icons-{tag}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
  }

  #[test]
  fn test_parse_subcommands() {
    let cli = Cli::try_parse_from(["ck-icons", "-v", "list"]).unwrap();
    assert!(cli.verbose && !cli.json);
    assert!(matches!(cli.command, Command::List));

    let cli =
      Cli::try_parse_from(["ck-icons", "write", "--out", "icons", "ck-wallet-icon-192.v1.png"]).unwrap();
    match cli.command {
      Command::Write { out, names } => {
        assert_eq!(out, PathBuf::from("icons"));
        assert_eq!(names, ["ck-wallet-icon-192.v1.png"]);
      }
      other => panic!("{other:?}"),
    }

    let cli = Cli::try_parse_from(["ck-icons", "inspect", "x.png", "--json"]).unwrap();
    assert!(cli.json);
    assert!(matches!(cli.command, Command::Inspect { name } if name == "x.png"));

    assert!(Cli::try_parse_from(["ck-icons"]).is_err());
    assert!(Cli::try_parse_from(["ck-icons", "inspect"]).is_err());
  }

  #[test]
  fn test_write_all_icons() {
    let dir = scratch_dir("all");
    let cache = IconCache::new();
    let written = write_icons(&cache, &dir, Vec::new()).unwrap();
    assert_eq!(written.len(), list_icon_names().len());
    for (path, name) in written.iter().zip(list_icon_names()) {
      assert_eq!(path, &dir.join(name));
      let bytes = std::fs::read(path).unwrap();
      assert!(is_png_signature_correct(&bytes), "{name} is not {ICON_CONTENT_TYPE}");
      assert_eq!(&bytes[..], &cache.generate_icon(name).unwrap()[..]);
    }
    std::fs::remove_dir_all(&dir).unwrap();
  }

  #[test]
  fn test_write_rejects_unknown_before_writing() {
    let dir = scratch_dir("unknown");
    let cache = IconCache::new();
    let names = vec!["ck-wallet-icon-192.v1.png".to_string(), "favicon.ico".to_string()];
    let err = write_icons(&cache, &dir, names).unwrap_err();
    assert!(err.to_string().contains("favicon.ico"));
    assert!(!dir.exists());
    assert!(cache.is_empty());
  }

  #[test]
  fn test_inspect() {
    let cache = IconCache::new();
    inspect_icon(&cache, "ck-wallet-apple-touch-152.v1.png").unwrap();
    assert!(cache.contains("ck-wallet-apple-touch-152.v1.png"));
    assert!(inspect_icon(&cache, "nope.png").is_err());
  }
}
