use std::path::{Path, PathBuf};

use crate::application::ports::owner_repository::OwnerRepository;
use crate::application::ports::paste_repository::PasteRepository;
use crate::application::use_cases::pastes::create_paste::resolve_owner_id;
use crate::domain::paste::NewPaste;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("filename must not be empty")]
    EmptyFilename,
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub struct UploadPaste<'a, P, O>
where
    P: PasteRepository + ?Sized,
    O: OwnerRepository + ?Sized,
{
    pub upload_dir: &'a Path,
    pub pastes: &'a P,
    pub owners: &'a O,
}

impl<'a, P, O> UploadPaste<'a, P, O>
where
    P: PasteRepository + ?Sized,
    O: OwnerRepository + ?Sized,
{
    /// Writes `content` to `upload_dir/filename` and keeps a private copy as a paste.
    /// `filename` is joined as given, so `../` escapes the upload directory.
    pub async fn execute(&self, filename: &str, content: &str) -> Result<String, UploadError> {
        if filename.is_empty() {
            return Err(UploadError::EmptyFilename);
        }
        let path = self.upload_dir.join(filename);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| UploadError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        tokio::fs::write(&path, content)
            .await
            .map_err(|source| UploadError::Io {
                path: path.clone(),
                source,
            })?;
        tracing::info!(path = %path.display(), bytes = content.len(), "paste_uploaded");

        let owner_id = resolve_owner_id(self.owners, None).await?;
        self.pastes
            .create(&NewPaste {
                title: format!("Imported Paste from File - {filename}"),
                content: content.to_string(),
                public: false,
                burn: false,
                user_agent: None,
                ip_addr: None,
                owner_id,
            })
            .await?;
        Ok(content.to_string())
    }
}
