//! Download artifact for the current document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";
pub const DEFAULT_FILE_NAME: &str = "document.md";

/// A file the host offers for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

impl Download {
    /// `document.md` with MIME type `text/markdown`.
    pub fn markdown(contents: String) -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            mime_type: MARKDOWN_MIME_TYPE.to_string(),
            contents,
        }
    }

    /// `data:` URL with the contents base64-encoded.
    pub fn data_url(&self) -> String {
        format!(
            "data:{};charset=utf-8;base64,{}",
            self.mime_type,
            STANDARD.encode(self.contents.as_bytes())
        )
    }

    /// Write the file into `dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.contents)?;
        tracing::debug!(path = %path.display(), bytes = self.contents.len(), "exported document");
        Ok(path)
    }
}
