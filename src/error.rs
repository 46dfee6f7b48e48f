//! Error handling for the car scene
//!
//! Simulation itself never fails. Everything fallible lives on the
//! configuration path: reading, parsing and validating scene files.

use std::path::Path;

/// Main error type for the scene
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scene config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize scene config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Type alias for Results in the scene
pub type SceneResult<T> = Result<T, SceneError>;

impl SceneError {
    /// Shorthand for a rejected configuration field
    pub fn invalid_config(
        field: impl Into<String>,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        SceneError::InvalidConfig {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Extension trait for attaching a file path to IO results
pub trait ErrorContext<T> {
    fn path_context(self, path: &Path) -> SceneResult<T>;
}

impl<T> ErrorContext<T> for Result<T, std::io::Error> {
    fn path_context(self, path: &Path) -> SceneResult<T> {
        self.map_err(|source| SceneError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SceneError::invalid_config("smoke.lifetime", -1.0, "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid config: smoke.lifetime = -1 (must be positive)"
        );
    }

    #[test]
    fn test_path_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        let err = result
            .path_context(Path::new("scene.toml"))
            .expect_err("io error should be wrapped");
        match err {
            SceneError::Io { path, .. } => assert_eq!(path, "scene.toml"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
