#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse standards TOML {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid standards: {message}")]
    InvalidStandards { message: String },

    #[error("duplicate region {field}: {value}")]
    DuplicateRegion { field: &'static str, value: String },

    #[error("region {region} has no members")]
    EmptyRegion { region: String },

    #[error("region {region} includes unknown or later region {include}")]
    UnknownInclude { region: String, include: String },

    #[error("item label '{label}' is both excluded and listed in the {list} taxonomy")]
    ConflictingLabel { label: String, list: &'static str },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidStandards {
            message: message.into(),
        }
    }
}
