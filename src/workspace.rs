//! Host boundary: resolves project-relative file references, snapshots their
//! text and runs the annotation pipeline over the snapshot.
//!
//! The core never touches the file system. Every request reads its file
//! exactly once into an immutable [`Arc<str>`], so tokenizing and rendering
//! always see the same text even if the file changes on disk meanwhile.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::annotator::annotate_source;
use crate::config::AnnotatorConfig;
use crate::{AnnotateError, AnnotateResult};

/// Outcome of one annotation request. Exactly one field is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnnotateResponse {
    pub fn success(rendered: String) -> Self {
        Self {
            status: Some(rendered),
            error: None,
        }
    }

    pub fn failure(error: &AnnotateError) -> Self {
        Self {
            status: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl From<AnnotateResult<String>> for AnnotateResponse {
    fn from(result: AnnotateResult<String>) -> Self {
        match result {
            Ok(rendered) => AnnotateResponse::success(rendered),
            Err(error) => AnnotateResponse::failure(&error),
        }
    }
}

/// A project root plus the settings used to annotate files below it.
///
/// # Thread Safety
///
/// Clones share one limiter, so at most `max_parallel_files` files are read
/// and annotated at a time across all clones.
#[derive(Debug, Clone)]
pub struct Workspace {
    config: AnnotatorConfig,
    limiter: Arc<Semaphore>,
}

impl Workspace {
    pub fn new(config: AnnotatorConfig) -> Self {
        let permits = config.max_parallel_files.max(1);
        Self {
            config,
            limiter: Arc::new(Semaphore::new(permits)),
        }
    }

    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Maps a project-relative reference to an existing file.
    ///
    /// # Arguments
    /// * `file_path` - Path relative to the project base path. A leading `/`
    ///   is treated as relative too.
    ///
    /// # Returns
    /// * `AnnotateResult<PathBuf>` - The full path, or a resolution error naming
    ///   the path that could not be found
    pub async fn resolve(&self, file_path: &str) -> AnnotateResult<PathBuf> {
        let base = &self.config.base_path;
        if !fs::try_exists(base).await.unwrap_or(false) {
            return Err(AnnotateError::BasePathNotFound { path: base.clone() });
        }

        let full_path = base.join(file_path.trim_start_matches('/'));
        match fs::metadata(&full_path).await {
            Ok(metadata) if metadata.is_file() => Ok(full_path),
            _ => Err(AnnotateError::FileNotFound { path: full_path }),
        }
    }

    /// Reads `full_path` once into an immutable snapshot.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected; the
    /// tokenizer copes with any text.
    ///
    /// # Arguments
    /// * `full_path` - Resolved path to read
    /// * `file_path` - The reference as given by the caller, used in messages
    pub async fn snapshot(&self, full_path: &Path, file_path: &str) -> AnnotateResult<Arc<str>> {
        let read_error = |source| AnnotateError::Read {
            path: file_path.to_string(),
            source,
        };

        let size = fs::metadata(full_path).await.map_err(read_error)?.len();
        if size > self.config.max_file_bytes {
            return Err(AnnotateError::FileTooLarge {
                path: file_path.to_string(),
                size,
                limit: self.config.max_file_bytes,
            });
        }

        let bytes = fs::read(full_path).await.map_err(read_error)?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(file = file_path, "file is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Ok(Arc::from(text))
    }

    /// Resolves, snapshots and annotates one file.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn annotate_file(&self, file_path: &str) -> AnnotateResponse {
        let result = self.try_annotate_file(file_path).await;
        if let Err(error) = &result {
            warn!(file = file_path, %error, "annotation failed");
        }
        result.into()
    }

    async fn try_annotate_file(&self, file_path: &str) -> AnnotateResult<String> {
        let _permit = self
            .limiter
            .acquire()
            .await
            .map_err(|e| AnnotateError::internal(format!("Annotation limiter closed: {}", e)))?;

        let full_path = self.resolve(file_path).await?;
        let snapshot = self.snapshot(&full_path, file_path).await?;
        let language = self.config.language_for(&full_path);
        debug!(file = file_path, %language, bytes = snapshot.len(), "annotating snapshot");

        let rendered = tokio::task::spawn_blocking(move || annotate_source(&snapshot, language))
            .await
            .map_err(|e| AnnotateError::internal(format!("Annotation task failed: {}", e)))?;
        Ok(rendered)
    }

    /// Annotates independent files concurrently. Results come back in the
    /// order of `file_paths`, each paired with its reference.
    pub async fn annotate_files(&self, file_paths: &[String]) -> Vec<(String, AnnotateResponse)> {
        let handles: Vec<_> = file_paths
            .iter()
            .map(|file_path| {
                let workspace = self.clone();
                let file_path = file_path.clone();
                tokio::spawn(async move { workspace.annotate_file(&file_path).await })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (file_path, handle) in file_paths.iter().zip(handles) {
            let response = handle.await.unwrap_or_else(|e| {
                AnnotateResponse::failure(&AnnotateError::internal(format!(
                    "Annotation task failed: {}",
                    e
                )))
            });
            results.push((file_path.clone(), response));
        }
        info!(
            files = results.len(),
            failed = results.iter().filter(|(_, r)| !r.is_success()).count(),
            "annotated files"
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serialization() {
        let ok = AnnotateResponse::success("1:\tx   [x:1-2]".to_string());
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"status":"1:\tx   [x:1-2]"}"#
        );

        let failed = AnnotateResponse::failure(&AnnotateError::FileNotFound {
            path: PathBuf::from("/p/a.java"),
        });
        assert_eq!(
            serde_json::to_string(&failed).unwrap(),
            r#"{"error":"File not found: /p/a.java"}"#
        );
        assert!(!failed.is_success());
    }

    #[test]
    fn test_zero_parallelism_still_makes_progress() {
        let workspace = Workspace::new(AnnotatorConfig {
            max_parallel_files: 0,
            ..AnnotatorConfig::default()
        });
        assert_eq!(workspace.limiter.available_permits(), 1);
    }
}
