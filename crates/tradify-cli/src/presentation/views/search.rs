use std::fmt;

use crate::presentation::formatters::TextStyle;
use crate::presentation::view_models::SearchResultViewModel;

pub struct SearchResultView<'a> {
    data: &'a SearchResultViewModel,
    style: TextStyle,
}

impl<'a> SearchResultView<'a> {
    pub fn new(data: &'a SearchResultViewModel, style: TextStyle) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for SearchResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(notice) = &self.data.notice {
            writeln!(f, "{}", self.style.heading(&notice.title))?;
            if let Some(hint) = &notice.hint {
                writeln!(f, "{}", self.style.dim(hint))?;
            }
            return Ok(());
        }

        for hit in &self.data.results {
            writeln!(
                f,
                "{:<4} {}",
                hit.id,
                self.style.segments(&hit.segments)
            )?;
        }
        Ok(())
    }
}
