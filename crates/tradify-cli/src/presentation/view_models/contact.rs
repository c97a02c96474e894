use serde::Serialize;
use std::fmt;

use super::CreateView;
use crate::presentation::formatters::TextStyle;

#[derive(Debug, Serialize)]
pub struct ContactResultViewModel {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub mailto: String,
    pub launched: bool,
    pub acknowledgment: String,
    pub detail: String,
}

impl CreateView for ContactResultViewModel {
    fn create_view<'a>(&'a self, style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::ContactResultView;
        Box::new(ContactResultView::new(self, style))
    }
}
