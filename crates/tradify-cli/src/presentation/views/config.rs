use std::fmt;

use crate::presentation::formatters::TextStyle;
use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    style: TextStyle,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, style: TextStyle) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let source = if self.data.exists {
            self.data.path.clone()
        } else {
            format!("{} (not found, using defaults)", self.data.path)
        };
        writeln!(f, "{}", self.style.dim(&format!("# {}", source)))?;

        let toml = toml::to_string_pretty(&self.data.config).map_err(|_| fmt::Error)?;
        write!(f, "{}", toml)
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.written {
            writeln!(f, "Wrote {}", self.data.path)
        } else {
            writeln!(f, "Left {} untouched", self.data.path)
        }
    }
}
