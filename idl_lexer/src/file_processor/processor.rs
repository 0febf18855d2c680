//! File loading with security boundaries
//!
//! The lexer core performs no I/O; this module materializes a document as one
//! in-memory string for the CLI, enforcing the compile-time size limit and
//! UTF-8 validity before any scanning happens.

use crate::config::constants::compile_time::file_processing::{
    LARGE_FILE_THRESHOLD, MAX_FILE_SIZE,
};
use crate::config::runtime::FileProcessorPreferences;
use crate::logging::codes;
use crate::{log_debug, log_success};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// File processing errors
#[derive(Debug, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Not a regular file: {path}")]
    InvalidPath { path: String },

    #[error("File too large: {size} bytes (max {MAX_FILE_SIZE})")]
    FileTooLarge { size: u64 },

    #[error("File is not valid UTF-8: {path}")]
    InvalidEncoding { path: String },

    #[error("Invalid file extension: {path} (expected .idl)")]
    InvalidExtension { path: String },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FileProcessorError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            FileProcessorError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            FileProcessorError::InvalidPath { .. } => codes::file_processing::INVALID_PATH,
            FileProcessorError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            FileProcessorError::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            FileProcessorError::InvalidExtension { .. } => {
                codes::file_processing::INVALID_EXTENSION
            }
            FileProcessorError::Io { .. } => codes::file_processing::IO_ERROR,
        }
    }
}

/// Metadata about a processed file
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub path: PathBuf,
    pub size: u64,
    pub line_count: usize,
}

/// A loaded document ready for scanning
#[derive(Debug)]
pub struct FileProcessingResult {
    pub source: String,
    pub metadata: FileMetadata,
    pub processing_duration: Duration,
}

impl FileProcessingResult {
    pub fn char_count(&self) -> usize {
        self.source.chars().count()
    }
}

/// File processor with runtime preferences
#[derive(Debug)]
pub struct FileProcessor {
    pub require_idl_extension: bool,
    pub enable_performance_logging: bool,
}

impl FileProcessor {
    pub fn new() -> Self {
        Self::from_preferences(&FileProcessorPreferences::default())
    }

    pub fn from_preferences(prefs: &FileProcessorPreferences) -> Self {
        Self {
            require_idl_extension: prefs.require_idl_extension,
            enable_performance_logging: prefs.enable_performance_logging,
        }
    }

    /// The compile-time maximum file size
    pub fn max_file_size() -> u64 {
        MAX_FILE_SIZE
    }

    /// Load a document, enforcing size and encoding boundaries
    pub fn process(&self, file_path: &str) -> Result<FileProcessingResult, FileProcessorError> {
        let started = Instant::now();
        let path = PathBuf::from(file_path);

        if self.require_idl_extension
            && path.extension().and_then(|e| e.to_str()) != Some("idl")
        {
            return Err(FileProcessorError::InvalidExtension {
                path: file_path.to_string(),
            });
        }

        let metadata = fs::metadata(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FileProcessorError::FileNotFound {
                    path: file_path.to_string(),
                }
            } else {
                FileProcessorError::Io {
                    path: file_path.to_string(),
                    source: e,
                }
            }
        })?;

        if !metadata.is_file() {
            return Err(FileProcessorError::InvalidPath {
                path: file_path.to_string(),
            });
        }

        if metadata.len() > MAX_FILE_SIZE {
            return Err(FileProcessorError::FileTooLarge {
                size: metadata.len(),
            });
        }

        let bytes = fs::read(&path).map_err(|e| FileProcessorError::Io {
            path: file_path.to_string(),
            source: e,
        })?;

        let source =
            String::from_utf8(bytes).map_err(|_| FileProcessorError::InvalidEncoding {
                path: file_path.to_string(),
            })?;

        let line_count = source.lines().count();

        if metadata.len() > LARGE_FILE_THRESHOLD {
            log_debug!("Processing large file",
                "size_bytes" => metadata.len(),
                "threshold" => LARGE_FILE_THRESHOLD
            );
        }

        let result = FileProcessingResult {
            source,
            metadata: FileMetadata {
                path,
                size: metadata.len(),
                line_count,
            },
            processing_duration: started.elapsed(),
        };

        if self.enable_performance_logging {
            log_success!(codes::success::FILE_PROCESSING_SUCCESS, "File loaded",
                "file" => result.metadata.path.display(),
                "size_bytes" => result.metadata.size,
                "lines" => result.metadata.line_count,
                "duration_ms" => result.processing_duration.as_secs_f64() * 1000.0
            );
        }

        Ok(result)
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Process a file with default settings
pub fn process_file(file_path: &str) -> Result<FileProcessingResult, FileProcessorError> {
    FileProcessor::new().process(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn test_process_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("entities.idl");
        fs::write(&file_path, "Account 112233445566\n\tOwner Platform\n").unwrap();

        let result = FileProcessor::new()
            .process(file_path.to_str().unwrap())
            .unwrap();

        assert_eq!(result.metadata.line_count, 2);
        assert!(result.source.starts_with("Account"));
        assert_eq!(result.metadata.size, result.source.len() as u64);
    }

    #[test]
    fn test_empty_file_is_allowed() {
        // An empty document is a valid scan input (it lexes to a lone EOF)
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.idl");
        fs::write(&file_path, "").unwrap();

        let result = FileProcessor::new().process(file_path.to_str().unwrap());
        assert!(result.is_ok());
        assert_eq!(result.unwrap().source, "");
    }

    #[test]
    fn test_extension_requirement() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("entities.txt");
        fs::write(&file_path, "Group Devs\n").unwrap();

        let relaxed = FileProcessor::from_preferences(&FileProcessorPreferences {
            require_idl_extension: false,
            enable_performance_logging: false,
        });
        assert!(relaxed.process(file_path.to_str().unwrap()).is_ok());

        let strict = FileProcessor::from_preferences(&FileProcessorPreferences {
            require_idl_extension: true,
            enable_performance_logging: false,
        });
        assert_matches!(
            strict.process(file_path.to_str().unwrap()),
            Err(FileProcessorError::InvalidExtension { .. })
        );
    }

    #[test]
    fn test_directory_is_invalid_path() {
        let dir = tempdir().unwrap();
        let result = FileProcessor::new().process(dir.path().to_str().unwrap());
        assert_matches!(result, Err(FileProcessorError::InvalidPath { .. }));
    }

    #[test]
    fn test_invalid_encoding() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bad.idl");
        fs::write(&file_path, [0x47, 0x72, 0xff, 0xfe]).unwrap();

        let result = FileProcessor::new().process(file_path.to_str().unwrap());
        assert_matches!(result, Err(FileProcessorError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_error_codes() {
        let error = FileProcessorError::FileTooLarge { size: 1 };
        assert_eq!(error.error_code().as_str(), "E007");
    }
}
