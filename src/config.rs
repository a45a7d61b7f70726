use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use crate::{tokenizer::Language, AnnotateError, AnnotateResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Project root that file references are resolved against.
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,

    /// Forces one identifier grammar. When unset, it is picked per file from
    /// the extension.
    #[serde(default)]
    pub language: Option<Language>,

    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,

    #[serde(default = "default_max_parallel_files")]
    pub max_parallel_files: usize,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            language: None,
            max_file_bytes: default_max_file_bytes(),
            max_parallel_files: default_max_parallel_files(),
        }
    }
}

impl AnnotatorConfig {
    /// Loads the config from a JSON file; missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> AnnotateResult<Self> {
        from_file(path)
    }

    pub fn language_for(&self, path: impl AsRef<Path>) -> Language {
        self.language.unwrap_or_else(|| Language::from_path(path))
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> AnnotateResult<T> {
    let file = File::open(path)
        .map_err(|e| AnnotateError::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| AnnotateError::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> AnnotateResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| AnnotateError::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

// デフォルト値の定義
fn default_base_path() -> PathBuf {
    PathBuf::from(".")
}
fn default_max_file_bytes() -> u64 {
    16 * 1024 * 1024
}
fn default_max_parallel_files() -> usize {
    8
}
