use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Bottom line: last status message on the left, key help on the right
pub struct StatusBarView<'a> {
    status: Option<&'a str>,
    help: &'a [(&'a str, &'a str)],
}

impl<'a> StatusBarView<'a> {
    pub fn new(status: Option<&'a str>, help: &'a [(&'a str, &'a str)]) -> Self {
        Self { status, help }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(area);

        if let Some(status) = self.status {
            Paragraph::new(Span::styled(status, Style::default().fg(Color::Green)))
                .render(left, buf);
        }

        let mut spans = Vec::new();
        for (key, action) in self.help {
            spans.push(Span::styled(format!("[{}]", key), Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(format!("{} ", action)));
        }
        Paragraph::new(Line::from(spans))
            .right_aligned()
            .render(right, buf);
    }
}
