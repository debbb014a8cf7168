use std::path::PathBuf;

use axum::async_trait;
use tracing::debug;

use super::capabilities::{FilePickError, FilePickOptions, FilePicker, PickedFile};

/// File chooser backed by a path the user already selected (e.g. from a
/// native dialog or a command line argument). `None` behaves like a
/// dismissed chooser.
#[derive(Debug, Clone, Default)]
pub struct PathFilePicker {
    path: Option<PathBuf>,
}

impl PathFilePicker {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl FilePicker for PathFilePicker {
    async fn pick(&self, options: FilePickOptions) -> Result<Option<PickedFile>, FilePickError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        debug!("Reading {} (accept {})", path.display(), options.accept);
        // Read to completion so the caller never sees a partial image
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Some(PickedFile {
            name,
            // Sniffed from the bytes downstream
            mime: None,
            bytes,
        }))
    }
}
