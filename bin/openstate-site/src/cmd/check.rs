//! Check command - validate configuration, content and references

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use openstate_site_core::Config;
use openstate_site_generator::{AssetProcessor, broken_references};
use openstate_site_ui::{Route, UrlResolver, validate_route};

use super::static_dir;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Content defects are errors; unresolved references are warnings, which
/// `strict` turns into a failure.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let result = validate(config_path);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Collect every problem without printing a summary.
pub fn validate(config_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    println!("\nChecking section content...");
    check_content(&mut result);

    if let Some(config) = config {
        println!("\nChecking references...");
        check_references(config_path, &config, &mut result);
    }

    result
}

fn check_content(result: &mut ValidationResult) {
    let mut failed = 0;
    for route in Route::ALL {
        if let Err(e) = validate_route(route) {
            result.add_error(format!("{route}: {e}"));
            failed += 1;
        }
    }

    if failed == 0 {
        println!("  ✓ All {} routes valid", Route::ALL.len());
    } else {
        println!("  ✗ {failed}/{} routes have content errors", Route::ALL.len());
    }
}

fn check_references(config_path: &Path, config: &Config, result: &mut ValidationResult) {
    let resolver = match static_dir(config_path, config) {
        Some(dir) => match AssetProcessor::scan(&dir) {
            Ok(manifest) => manifest.resolver(UrlResolver::new(config)),
            Err(e) => {
                result.add_error(format!("Failed to scan {}: {e}", dir.display()));
                return;
            }
        },
        None => {
            result.add_warning(format!(
                "Static directory missing: {}/ (assets not checked)",
                config.build.static_dir
            ));
            UrlResolver::new(config)
        }
    };

    let broken = broken_references(config, &resolver);
    if broken.is_empty() {
        println!("  ✓ All references resolve");
    } else {
        println!("  ⚠ {} unresolved reference(s)", broken.len());
    }

    for b in broken {
        result.add_warning(format!("{}: unresolved reference '{}'", b.route, b.reference));
    }
}
