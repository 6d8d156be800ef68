use crate::decoder::DecodeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Error while walking directory {path}: {source}")]
    Traversal {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Error reading from file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No EXIF data found in the file: {path}")]
    NoMetadata { path: String },

    #[error("Error reading EXIF data from file {path}: {source}")]
    MetadataDecode {
        path: String,
        #[source]
        source: exif::Error,
    },

    #[error("Error fetching flat EXIF data from file {path}: {reason}")]
    TagFlatten { path: String, reason: String },

    #[error("Error creating report {path}: {source}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Attaches the offending file to a decoder failure.
    pub fn from_decode(path: &str, error: DecodeError) -> Self {
        let path = path.to_string();
        match error {
            DecodeError::NoContainer => AppError::NoMetadata { path },
            DecodeError::Malformed(source) => AppError::MetadataDecode { path, source },
            DecodeError::Flatten(reason) => AppError::TagFlatten { path, reason },
        }
    }
}
