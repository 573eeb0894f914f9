#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// Throwaway site checkout with a public/images/gallery tree. Removed on drop.
pub struct TempSite {
    dir: TempDir,
}

impl TempSite {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("gallery-site-")
            .tempdir()
            .context("creating temp site")?;
        fs::create_dir_all(dir.path().join("public/images/gallery"))?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn category_dir(&self, category: &str) -> PathBuf {
        self.root().join("public/images/gallery").join(category)
    }

    /// Create empty files named `names` inside the category folder.
    pub fn add_files(&self, category: &str, names: &[&str]) -> Result<()> {
        let dir = self.category_dir(category);
        fs::create_dir_all(&dir)?;
        for name in names {
            fs::write(dir.join(name), b"")
                .with_context(|| format!("writing fixture {name}"))?;
        }
        Ok(())
    }

    pub fn write_table(&self, contents: &str) -> Result<PathBuf> {
        let path = self.root().join("categories.json");
        fs::write(&path, contents)?;
        Ok(path)
    }
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {:?}", cmd.get_program()))?;
    if !output.status.success() {
        anyhow::bail!(
            "command {:?} failed with {:?}\nstdout: {}\nstderr: {}",
            cmd.get_program(),
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}
