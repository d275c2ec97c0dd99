//! Static asset copying.
//!
//! Copies the static directory into the output, optionally fingerprinting
//! file names for cache busting. The resulting [`AssetManifest`] maps each
//! logical asset name (`img/logo.svg`) to its deployed path and is what the
//! page renderers resolve image references against.

use std::{
    collections::BTreeMap,
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use openstate_site_ui::UrlResolver;
use thiserror::Error;
use tracing::{debug, info};

/// Asset processing errors.
#[derive(Debug, Error)]
pub enum AssetError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid asset path.
    #[error("invalid asset path: {0}")]
    InvalidPath(PathBuf),
}

/// Result type for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Logical asset name to deployed path, both site-relative without a
/// leading slash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    assets: BTreeMap<String, String>,
}

impl AssetManifest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, logical: impl Into<String>, deployed: impl Into<String>) {
        self.assets.insert(logical.into(), deployed.into());
    }

    /// Deployed path for a logical name.
    #[must_use]
    pub fn get(&self, logical: &str) -> Option<&str> {
        self.assets.get(logical).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assets
            .iter()
            .map(|(logical, deployed)| (logical.as_str(), deployed.as_str()))
    }

    /// A resolver that only accepts assets present in this manifest.
    #[must_use]
    pub fn resolver(&self, base: UrlResolver) -> UrlResolver {
        base.with_manifest(self.iter())
    }

    /// Serialize to JSON, keys sorted.
    #[must_use]
    pub fn to_json(&self) -> String {
        let entries: Vec<String> = self
            .assets
            .iter()
            .map(|(logical, deployed)| {
                format!(r#"  "{}": "{}""#, escape_json(logical), escape_json(deployed))
            })
            .collect();

        if entries.is_empty() {
            "{}\n".to_string()
        } else {
            format!("{{\n{}\n}}\n", entries.join(",\n"))
        }
    }
}

/// Copies static files, optionally fingerprinting them.
#[derive(Debug)]
pub struct AssetProcessor {
    fingerprint: bool,
    fingerprint_extensions: Vec<String>,
}

impl AssetProcessor {
    #[must_use]
    pub fn new(fingerprint: bool) -> Self {
        Self {
            fingerprint,
            fingerprint_extensions: ["css", "js", "png", "jpg", "jpeg", "gif", "svg", "webp"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Set which extensions should be fingerprinted.
    #[must_use]
    pub fn with_fingerprint_extensions(mut self, extensions: Vec<String>) -> Self {
        self.fingerprint_extensions = extensions;
        self
    }

    /// Copy every file from `source_dir` into `dest_dir`.
    ///
    /// A missing source directory yields an empty manifest.
    pub fn process(&self, source_dir: &Path, dest_dir: &Path) -> Result<AssetManifest> {
        info!(
            source = %source_dir.display(),
            dest = %dest_dir.display(),
            "processing assets"
        );

        let mut manifest = AssetManifest::new();

        if !source_dir.exists() {
            debug!("static directory does not exist, skipping");
            return Ok(manifest);
        }

        for file in collect_files(source_dir)? {
            self.process_file(source_dir, &file, dest_dir, &mut manifest)?;
        }

        info!(count = manifest.len(), "assets processed");
        Ok(manifest)
    }

    /// List the static directory without copying anything.
    ///
    /// Every file maps to itself; used to check references before a build.
    pub fn scan(source_dir: &Path) -> Result<AssetManifest> {
        let mut manifest = AssetManifest::new();
        if !source_dir.exists() {
            return Ok(manifest);
        }

        for file in collect_files(source_dir)? {
            let relative = file
                .strip_prefix(source_dir)
                .map_err(|_| AssetError::InvalidPath(file.clone()))?;
            let logical = slash_path(relative);
            manifest.add(logical.clone(), logical);
        }
        Ok(manifest)
    }

    fn process_file(
        &self,
        base_dir: &Path,
        file_path: &Path,
        dest_base: &Path,
        manifest: &mut AssetManifest,
    ) -> Result<()> {
        let relative = file_path
            .strip_prefix(base_dir)
            .map_err(|_| AssetError::InvalidPath(file_path.to_path_buf()))?;

        let dest_relative = if self.should_fingerprint(file_path) {
            let hash = compute_hash(file_path)?;
            let stem = file_path.file_stem().unwrap_or_default().to_string_lossy();
            let ext = file_path.extension().unwrap_or_default().to_string_lossy();
            let parent = relative.parent().unwrap_or(Path::new(""));
            parent.join(format!("{stem}.{hash}.{ext}"))
        } else {
            relative.to_path_buf()
        };

        let dest_path = dest_base.join(&dest_relative);
        copy_file(file_path, &dest_path)?;

        manifest.add(slash_path(relative), slash_path(&dest_relative));

        debug!(
            src = %file_path.display(),
            dest = %dest_path.display(),
            "copied asset"
        );

        Ok(())
    }

    fn should_fingerprint(&self, path: &Path) -> bool {
        self.fingerprint
            && path.extension().is_some_and(|ext| {
                let ext = ext.to_string_lossy();
                self.fingerprint_extensions.iter().any(|e| *e == ext)
            })
    }
}

/// Every non-hidden file below `dir`, in sorted order.
fn collect_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();

    let mut files = Vec::new();
    for path in entries {
        // Skip hidden files/directories
        if path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with('.'))
        {
            continue;
        }

        if path.is_dir() {
            files.extend(collect_files(&path)?);
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Copy a single file, creating parent directories.
pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, dest)?;
    Ok(())
}

/// Short FNV-1a hash of file contents.
fn compute_hash(path: &Path) -> Result<String> {
    let mut buffer = Vec::new();
    fs::File::open(path)?.read_to_end(&mut buffer)?;

    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in &buffer {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }

    Ok(format!("{hash:016x}")[..8].to_string())
}

fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
