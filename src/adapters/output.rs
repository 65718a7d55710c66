use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Writes rendered pages below one output directory.
#[derive(Debug, Clone)]
pub struct LocalOutput {
    base_path: PathBuf,
}

impl LocalOutput {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the full path written.
    pub async fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&full_path, data).await?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let output = LocalOutput::new(temp_dir.path().join("site"));

        let written = output.write_file("id/index.html", b"<html></html>").await.unwrap();

        assert!(written.ends_with("site/id/index.html"));
        assert_eq!(std::fs::read(&written).unwrap(), b"<html></html>");
    }
}
