use serde::Serialize;
use std::fmt;
use tradify_runtime::Config;

use super::CreateView;
use crate::presentation::formatters::TextStyle;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub written: bool,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::ConfigView;
        Box::new(ConfigView::new(self, style))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::ConfigInitView;
        Box::new(ConfigInitView::new(self))
    }
}
