use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading scene and tuning files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("scene {0} has no spawn points")]
    EmptyScene(String),
}
