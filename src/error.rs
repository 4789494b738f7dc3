use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot build an identifier from an empty {context} name")]
    EmptyIdentifier { context: String },

    #[error("Failed to generate '{}': {source}", path.display())]
    Generation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl AppError {
    pub fn generation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Generation {
            path: path.into(),
            source,
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_names_path() {
        let err = AppError::generation(
            "/tmp/out/BuildConstants.cs",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/out/BuildConstants.cs"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_serializes_as_message() {
        let err = AppError::EmptyIdentifier {
            context: "platform".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Cannot build an identifier from an empty platform name\"");
    }
}
