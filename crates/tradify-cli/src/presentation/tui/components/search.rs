use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use tradify_engine::highlight;
use tradify_runtime::PanelMessage;
use tradify_types::{Product, Segment};

use super::segment_spans;

/// Full-screen search panel: input line, then results or a message
pub struct SearchOverlayView<'a> {
    query: &'a str,
    results: &'a [&'a Product],
    message: Option<PanelMessage>,
    selected: usize,
}

impl<'a> SearchOverlayView<'a> {
    pub fn new(
        query: &'a str,
        results: &'a [&'a Product],
        message: Option<PanelMessage>,
        selected: usize,
    ) -> Self {
        Self {
            query,
            results,
            message,
            selected,
        }
    }

    /// Cursor cell after the typed query, kept inside the input box
    pub fn input_cursor(area: Rect, query: &str) -> Position {
        let text_width = area.width.saturating_sub(4);
        let typed = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
        let offset = typed.min(text_width.saturating_sub(1));
        Position::new(
            area.x.saturating_add(2).saturating_add(offset),
            area.y.saturating_add(2),
        )
    }
}

impl<'a> Widget for SearchOverlayView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(" Search ")
            .title_bottom(" [Esc] close  [↑/↓] select  [Enter] open ")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(area);
        block.render(area, buf);

        let [input_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);

        Paragraph::new(self.query)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(input_area, buf);

        if let Some(message) = self.message {
            let mut lines = vec![Line::from(Span::styled(
                message.title(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            if let Some(hint) = message.hint() {
                lines.push(Line::from(Span::styled(
                    hint,
                    Style::default().fg(Color::DarkGray),
                )));
            }
            Paragraph::new(lines).centered().render(body_area, buf);
            return;
        }

        let highlighted: Vec<Vec<Segment>> = self
            .results
            .iter()
            .map(|p| highlight(&p.name, self.query))
            .collect();

        let items: Vec<ListItem> = highlighted
            .iter()
            .map(|segments| ListItem::new(Line::from(segment_spans(segments))))
            .collect();

        let list = List::new(items)
            .highlight_symbol("▶ ")
            .highlight_style(Style::default().bg(Color::DarkGray));
        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, body_area, buf, &mut state);
    }
}
