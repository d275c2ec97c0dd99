//! Build command - renders the site into the output directory

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr};
use openstate_site_core::Config;
use openstate_site_generator::{BuildStats, Builder};

use super::{relative_to_config, static_dir};

/// Command-line overrides for a build.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Output directory; defaults to `build.output_dir`.
    pub output: Option<PathBuf>,
    /// Static directory; defaults to `build.static_dir` when it exists.
    pub static_dir: Option<PathBuf>,
    /// Override for `site.url`.
    pub url: Option<String>,
}

/// Run the build command.
pub fn run(config_path: &Path, options: &BuildOptions) -> Result<BuildStats> {
    let start = Instant::now();
    tracing::info!(?config_path, ?options, "Starting build");

    let mut config = Config::load_with_env(config_path).wrap_err("Failed to load configuration")?;

    if let Some(url) = &options.url {
        tracing::info!(url, "Overriding site url from CLI");
        config.site.url = url.clone();
        config.validate().wrap_err("Invalid --url override")?;
    }

    tracing::debug!(?config, "Loaded configuration");

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| relative_to_config(config_path, &config.build.output_dir));
    let static_dir = options
        .static_dir
        .clone()
        .or_else(|| static_dir(config_path, &config));

    let mut builder = Builder::new(config, &output);
    if let Some(dir) = static_dir {
        tracing::info!(dir = %dir.display(), "Copying static directory");
        builder = builder.with_static_dir(dir);
    }

    let stats = builder.build().wrap_err("Build failed")?;
    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:      {}", stats.pages);
    println!("  Assets:     {}", stats.assets);
    if stats.broken_refs > 0 {
        println!("  Broken:     {} (run `check` for details)", stats.broken_refs);
    }
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output.display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(stats)
}
