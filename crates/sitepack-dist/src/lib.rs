//! Dist bundle assembler for static site deployment.
//!
//! Copies the entry page and the site's asset directories into a distributable `dist/` tree.

pub mod bundler;
pub mod copy;

pub use bundler::{BundleConfig, BundleError, BundleReport, DistBundler};
