//! Dist bundle assembler.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::copy::copy_dir_merge;

/// Configuration for assembling a dist bundle.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Working root all other paths are resolved against
    pub root: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Entry file copied into the output directory
    pub entry_file: PathBuf,

    /// Asset subdirectories, copied in order
    pub subdirs: Vec<String>,

    /// Remove an existing output directory before assembling
    pub clean: bool,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_dir: PathBuf::from("dist"),
            entry_file: PathBuf::from("index.html"),
            subdirs: vec![
                "css".to_string(),
                "docs".to_string(),
                "images".to_string(),
                "js".to_string(),
                "pkg".to_string(),
            ],
            clean: false,
        }
    }
}

/// Result of an assembly run.
#[derive(Debug)]
pub struct BundleReport {
    /// Number of files placed in the output directory
    pub files_copied: usize,

    /// Total assembly time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur while assembling a bundle.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("Failed to remove output directory: {0}")]
    CleanError(String),

    #[error("Failed to create output directory: {0}")]
    CreateError(String),

    #[error("Failed to copy entry file: {0}")]
    EntryError(String),

    #[error("Source directory not found: {0}")]
    MissingSource(String),

    #[error("Failed to copy directory: {0}")]
    CopyError(String),
}

/// Dist bundle assembler.
pub struct DistBundler {
    config: BundleConfig,
}

impl DistBundler {
    /// Create a new bundler.
    pub fn new(config: BundleConfig) -> Self {
        Self { config }
    }

    /// Assemble the bundle.
    ///
    /// Clears the output directory first when configured to, then copies the
    /// entry file and each asset subdirectory into it. The first failing
    /// operation aborts the run; already-copied files are not rolled back.
    pub fn bundle(&self) -> Result<BundleReport, BundleError> {
        let start = Instant::now();

        let output_dir = self.config.root.join(&self.config.output_dir);

        if self.config.clean && output_dir.exists() {
            tracing::debug!("Removing {}", output_dir.display());
            fs::remove_dir_all(&output_dir).map_err(|e| {
                BundleError::CleanError(format!("{}: {}", output_dir.display(), e))
            })?;
        }

        // The parent is the working root, so a plain create_dir is enough.
        if !output_dir.exists() {
            fs::create_dir(&output_dir).map_err(|e| {
                BundleError::CreateError(format!("{}: {}", output_dir.display(), e))
            })?;
        }

        let mut files_copied = self.copy_entry(&output_dir)?;

        for name in &self.config.subdirs {
            files_copied += self.copy_subdir(name, &output_dir)?;
        }

        let duration = start.elapsed();

        Ok(BundleReport {
            files_copied,
            duration_ms: duration.as_millis() as u64,
            output_dir,
        })
    }

    /// Copy the entry file into the output directory, overwriting any
    /// existing file of the same name.
    fn copy_entry(&self, output_dir: &Path) -> Result<usize, BundleError> {
        let source = self.config.root.join(&self.config.entry_file);

        let file_name = source.file_name().ok_or_else(|| {
            BundleError::EntryError(format!("{}: no file name", source.display()))
        })?;

        fs::copy(&source, output_dir.join(file_name))
            .map_err(|e| BundleError::EntryError(format!("{}: {}", source.display(), e)))?;

        Ok(1)
    }

    /// Merge-copy one asset subdirectory into the output directory.
    fn copy_subdir(&self, name: &str, output_dir: &Path) -> Result<usize, BundleError> {
        let source = self.config.root.join(name);

        if !source.is_dir() {
            return Err(BundleError::MissingSource(source.display().to_string()));
        }

        let copied = copy_dir_merge(&source, &output_dir.join(name))
            .map_err(|e| BundleError::CopyError(format!("{}: {}", source.display(), e)))?;

        tracing::debug!("Copied {} files from {}", copied, source.display());

        Ok(copied)
    }
}
