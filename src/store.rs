//! The read-only content snapshot the server routes against.
//!
//! Both tables are built once before the accept loop starts and never
//! mutated afterwards, so connection handlers share them behind an `Arc`
//! without any locking.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{info, warn};

/// Name of the redirect-definitions file inside the serving root. It is
/// parsed into the redirect table and excluded from the file table.
const REDIRECT_FILE: &str = "/redirect.defs";

pub struct ContentStore {
    files: HashMap<String, Vec<u8>>,
    redirects: HashMap<String, String>,
}

impl ContentStore {
    /// Builds a store from pre-made tables. Routing tests use this to
    /// avoid touching the filesystem.
    pub fn new(files: HashMap<String, Vec<u8>>, redirects: HashMap<String, String>) -> Self {
        Self { files, redirects }
    }

    /// Walks `root` recursively and loads every file's bytes into memory,
    /// keyed by the root-relative path (leading slash included). The
    /// redirect-definitions file is parsed separately; if it is missing
    /// the redirect table is simply empty.
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        info!("Root = {}", root.display());

        let mut paths = Vec::new();
        collect_files(root, &mut paths)
            .with_context(|| format!("failed to walk serving root {}", root.display()))?;

        let mut files = HashMap::new();
        for path in paths {
            let rel = path
                .strip_prefix(root)
                .with_context(|| format!("walked path {} is outside the root", path.display()))?;
            let key = format!("/{}", rel.display());
            if key == REDIRECT_FILE {
                continue;
            }
            info!("{key}");
            let content = fs::read(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            files.insert(key, content);
        }

        let redirect_path = root.join(REDIRECT_FILE.trim_start_matches('/'));
        info!("Redirect_File = {}", redirect_path.display());
        let redirects = match fs::read_to_string(&redirect_path) {
            Ok(content) => parse_redirects(&content),
            Err(_) => {
                warn!("Redirect file is not found");
                HashMap::new()
            }
        };

        Ok(Self { files, redirects })
    }

    pub fn file(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }

    pub fn redirect(&self, path: &str) -> Option<&str> {
        self.redirects.get(path).map(|v| v.as_str())
    }
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

/// Parses redirect definitions, one `source target` pair per line,
/// whitespace-separated. Lines that do not split into exactly two tokens
/// are skipped.
pub fn parse_redirects(content: &str) -> HashMap<String, String> {
    let mut redirects = HashMap::new();
    for line in content.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if let [source, target] = tokens[..] {
            redirects.insert(source.to_string(), target.to_string());
        }
    }
    redirects
}
