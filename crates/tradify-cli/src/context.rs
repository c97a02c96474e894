use anyhow::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tradify_runtime::{CatalogStore, Config};

use crate::presentation::ConsoleRenderer;
use crate::presentation::formatters::TextStyle;
use crate::types::OutputFormat;

/// Lazily loaded per-invocation state shared by handlers
pub struct ExecutionContext {
    data_dir: PathBuf,
    catalog_override: Option<PathBuf>,
    pub format: OutputFormat,
    config: OnceCell<Config>,
    catalog: OnceCell<CatalogStore>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, catalog_override: Option<PathBuf>, format: OutputFormat) -> Self {
        Self {
            data_dir,
            catalog_override,
            format,
            config: OnceCell::new(),
            catalog: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.json(), TextStyle::detect())
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Ok(Config::load_from(&self.config_path())?))
    }

    /// `--catalog` beats `catalog.path` in the config, which beats the
    /// built-in catalog
    pub fn catalog(&self) -> Result<&CatalogStore> {
        self.catalog.get_or_try_init(|| {
            let path = match &self.catalog_override {
                Some(path) => Some(path.clone()),
                None => self.config()?.catalog.path.clone(),
            };
            tracing::debug!(catalog = ?path, "loading catalog");
            Ok(CatalogStore::open(path.as_deref())?)
        })
    }
}
