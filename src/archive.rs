//! Persisting fetched messages to disk

use crate::error::Result;
use crate::message::MessageBody;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Writes fetched messages as plain text into one output directory.
///
/// Files are named by message id, so saving the same id twice targets
/// the same path and distinct ids never collide.
pub struct MessageArchiver {
    dir: PathBuf,
}

impl MessageArchiver {
    /// Create an archiver rooted at `dir`. The directory is created on
    /// the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The path a message with `id` is saved to.
    #[must_use]
    pub fn target_path(&self, id: u64) -> PathBuf {
        self.dir.join(format!("{id}.txt"))
    }

    /// Write `message` as a self-describing text file and return its
    /// location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the directory or
    /// file cannot be written.
    pub fn save(&self, message: &MessageBody) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let path = self.target_path(message.id);
        let contents = format!(
            "From: {}\nSubject: {}\n\n{}\n",
            message.sender, message.subject, message.body_text
        );
        fs::write(&path, contents)?;

        info!("Saved message {} to {}", message.id, path.display());
        Ok(path)
    }
}
