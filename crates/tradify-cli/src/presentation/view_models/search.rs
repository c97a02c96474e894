use serde::Serialize;
use std::fmt;
use tradify_types::Segment;

use super::CreateView;
use crate::presentation::formatters::TextStyle;

#[derive(Debug, Serialize)]
pub struct SearchHitViewModel {
    pub id: u32,
    pub name: String,
    pub segments: Vec<Segment>,
    pub affiliate_link: String,
}

/// Panel shown in place of results
#[derive(Debug, Serialize)]
pub struct SearchNoticeViewModel {
    pub title: String,
    pub hint: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResultViewModel {
    pub query: String,
    pub results: Vec<SearchHitViewModel>,
    /// `prompt` or `no_results` when no hits are listed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<SearchNoticeViewModel>,
}

impl CreateView for SearchResultViewModel {
    fn create_view<'a>(&'a self, style: TextStyle) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::SearchResultView;
        Box::new(SearchResultView::new(self, style))
    }
}
