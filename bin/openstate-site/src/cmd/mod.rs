//! CLI command implementations.

pub mod build;
pub mod check;

use std::path::{Path, PathBuf};

use openstate_site_core::Config;

/// Resolve a configured directory relative to the config file's directory.
pub(crate) fn relative_to_config(config_path: &Path, dir: &str) -> PathBuf {
    let dir = Path::new(dir);
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    config_path
        .parent()
        .map_or_else(|| dir.to_path_buf(), |parent| parent.join(dir))
}

/// Static directory from configuration, if it exists on disk.
pub(crate) fn static_dir(config_path: &Path, config: &Config) -> Option<PathBuf> {
    let dir = relative_to_config(config_path, &config.build.static_dir);
    dir.is_dir().then_some(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_to_config() {
        assert_eq!(
            relative_to_config(Path::new("site/site.toml"), "static"),
            PathBuf::from("site/static")
        );
        assert_eq!(
            relative_to_config(Path::new("site.toml"), "build"),
            PathBuf::from("build")
        );
        assert_eq!(
            relative_to_config(Path::new("site/site.toml"), "/tmp/out"),
            PathBuf::from("/tmp/out")
        );
    }
}
