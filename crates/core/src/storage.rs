//! Object storage for uploaded photos, banners and media files.
//!
//! Objects live in named buckets and are addressed by a relative path.
//! Every stored object is publicly readable at
//! `{public_base_url}/storage/{bucket}/{path}`.

use std::path::PathBuf;

use async_trait::async_trait;

/// Errors raised by a [`StorageProvider`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Object already exists: {bucket}/{path}")]
    AlreadyExists { bucket: String, path: String },

    #[error("Invalid object path '{0}'")]
    InvalidPath(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backend that stores and serves uploaded objects.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Write `bytes` to `bucket/path`.
    ///
    /// When `upsert` is false an existing object is left untouched and
    /// [`StorageError::AlreadyExists`] is returned.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
        upsert: bool,
    ) -> Result<(), StorageError>;

    /// Delete the given objects. Objects that do not exist are skipped.
    async fn remove(&self, bucket: &str, paths: &[&str]) -> Result<(), StorageError>;

    /// Public URL at which `bucket/path` is served.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}

/// Validate a bucket name or object path: relative, no `..`, no empty
/// segments.
pub fn validate_object_path(path: &str) -> Result<(), StorageError> {
    let bad_segment = path.split('/').any(|segment| {
        segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\')
    });
    if path.is_empty() || bad_segment {
        return Err(StorageError::InvalidPath(path.to_string()));
    }
    Ok(())
}

/// Filesystem-backed storage rooted at a single directory.
///
/// Bucket `b` and path `p` map to `{root}/{b}/{p}`. The HTTP layer serves
/// `{root}` under `/storage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn object_file(&self, bucket: &str, path: &str) -> Result<PathBuf, StorageError> {
        validate_object_path(bucket)?;
        validate_object_path(path)?;
        Ok(self.root.join(bucket).join(path))
    }
}

#[async_trait]
impl StorageProvider for LocalStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: &[u8],
        upsert: bool,
    ) -> Result<(), StorageError> {
        let file = self.object_file(bucket, path)?;

        if !upsert && tokio::fs::try_exists(&file).await? {
            return Err(StorageError::AlreadyExists {
                bucket: bucket.to_string(),
                path: path.to_string(),
            });
        }

        if let Some(parent) = file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&file, bytes).await?;

        tracing::debug!(bucket, path, size = bytes.len(), "Stored object");
        Ok(())
    }

    async fn remove(&self, bucket: &str, paths: &[&str]) -> Result<(), StorageError> {
        for path in paths {
            let file = self.object_file(bucket, path)?;
            match tokio::fs::remove_file(&file).await {
                Ok(()) => tracing::debug!(bucket, path, "Removed object"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/{bucket}/{path}", self.public_base_url)
    }
}
