use std::fmt;

use crate::presentation::formatters::TextStyle;
use crate::presentation::view_models::ContactResultViewModel;

pub struct ContactResultView<'a> {
    data: &'a ContactResultViewModel,
    style: TextStyle,
}

impl<'a> ContactResultView<'a> {
    pub fn new(data: &'a ContactResultViewModel, style: TextStyle) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for ContactResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "To:      {}", self.data.recipient)?;
        writeln!(f, "Subject: {}", self.data.subject)?;
        writeln!(f)?;
        for line in self.data.body.lines() {
            writeln!(f, "  {}", line)?;
        }
        writeln!(f)?;
        if !self.data.launched {
            writeln!(f, "{}", self.data.mailto)?;
            writeln!(f)?;
        }
        writeln!(f, "{}", self.style.heading(&self.data.acknowledgment))?;
        writeln!(f, "{}", self.data.detail)
    }
}
