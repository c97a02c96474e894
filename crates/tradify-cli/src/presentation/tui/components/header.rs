use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tradify_types::{NAV_LINKS, Section};

/// Brand, numbered navigation links and the search hint
pub struct HeaderView {
    section: Section,
    menu_open: bool,
}

impl HeaderView {
    pub fn new(section: Section, menu_open: bool) -> Self {
        Self { section, menu_open }
    }
}

impl Widget for HeaderView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                "Tradify",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
        ];

        for (i, link) in NAV_LINKS.iter().enumerate() {
            let style = if link.section == self.section {
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!("[{}]", i + 1), Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(link.label, style));
            spans.push(Span::raw("  "));
        }

        spans.push(Span::styled("[/]", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw("Search  "));
        spans.push(Span::styled("[m]", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(if self.menu_open { "Close" } else { "Menu" }));

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}
