use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::Result;
use crate::prompts::PromptDocument;

/// Flat-file persistence for the prompt document.
///
/// Every read goes to disk and every save replaces the whole file. Saves
/// write a sibling temp file and rename it over the target, so a reader sees
/// either the old or the new document. Concurrent saves race and the last
/// writer wins.
#[derive(Debug, Clone)]
pub struct PromptStore {
    path: PathBuf,
}

impl PromptStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the current document. A missing file yields an empty document;
    /// an unreadable or malformed file is an error.
    pub async fn load(&self) -> Result<PromptDocument> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "Prompt file not found, using empty document");
                return Ok(PromptDocument::empty());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&raw)?)
    }

    /// Replaces the file content with `document`, two-space indented with
    /// non-ASCII characters written as-is.
    pub async fn save(&self, document: &PromptDocument) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(document)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || replace_file(&path, &bytes))
            .await
            .map_err(|e| std::io::Error::new(ErrorKind::Other, e))??;
        tracing::info!(path = %self.path.display(), "Prompt document saved");
        Ok(())
    }
}

fn replace_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
