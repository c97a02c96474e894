use std::fmt;
use std::path::PathBuf;
use tradify_types::ProductId;

/// Result type for tradify-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading the storefront
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Catalog file is not valid storefront JSON
    CatalogFormat {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },

    /// Two products share an id
    DuplicateProduct(ProductId),

    /// Product has an empty display name
    UnnamedProduct(ProductId),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::CatalogFormat {
                path: Some(path),
                source,
            } => write!(f, "Invalid catalog {}: {}", path.display(), source),
            Error::CatalogFormat { path: None, source } => {
                write!(f, "Invalid built-in catalog: {}", source)
            }
            Error::DuplicateProduct(id) => write!(f, "Duplicate product id: {}", id),
            Error::UnnamedProduct(id) => write!(f, "Product {} has an empty name", id),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::CatalogFormat { source, .. } => Some(source),
            Error::DuplicateProduct(_) | Error::UnnamedProduct(_) | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
