//! Static asset resolution. Deployments may place assets under a non-default
//! base directory; logical asset paths are always resolved against it.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Logical path of the mentor onboarding clip, relative to the asset base.
pub const MENTOR_CLIP_LOGICAL_PATH: &str = "mentor_intro.gif";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset logical path is empty")]
    EmptyLogicalPath,
    #[error("asset logical path must be relative: {0}")]
    AbsoluteLogicalPath(PathBuf),
}

/// Base directory prefix for static assets.
#[derive(Debug, Clone)]
pub struct AssetBase {
    root: PathBuf,
}

impl AssetBase {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, logical: &str) -> Result<PathBuf, AssetError> {
        if logical.is_empty() {
            return Err(AssetError::EmptyLogicalPath);
        }
        let logical = Path::new(logical);
        if logical.is_absolute() {
            return Err(AssetError::AbsoluteLogicalPath(logical.to_path_buf()));
        }
        Ok(self.root.join(logical))
    }
}
