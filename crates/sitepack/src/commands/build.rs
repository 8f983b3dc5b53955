//! Bundle assembly command.

use anyhow::Result;
use sitepack_dist::{BundleConfig, DistBundler};

/// Run the build command.
pub fn run(clean: bool) -> Result<()> {
    tracing::info!("Assembling dist bundle...");

    let config = BundleConfig {
        clean,
        ..Default::default()
    };

    let report = DistBundler::new(config).bundle()?;

    tracing::info!(
        "Copied {} files in {}ms",
        report.files_copied,
        report.duration_ms
    );

    tracing::info!("Output: {}", report.output_dir.display());

    Ok(())
}
