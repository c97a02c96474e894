use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};
use tradify_types::NAV_LINKS;

/// Collapsible navigation menu drawn over the page
pub struct MenuPopup {
    cursor: usize,
}

impl MenuPopup {
    pub fn new(cursor: usize) -> Self {
        Self { cursor }
    }

    /// Anchor below the header at the right edge
    pub fn area(frame_area: Rect) -> Rect {
        let width = 22u16.min(frame_area.width);
        let height = (NAV_LINKS.len() as u16 + 2).min(frame_area.height.saturating_sub(3));
        Rect {
            x: frame_area.x + frame_area.width - width,
            y: frame_area.y + 2,
            width,
            height,
        }
    }
}

impl Widget for MenuPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let items: Vec<ListItem> = NAV_LINKS
            .iter()
            .enumerate()
            .map(|(i, link)| ListItem::new(format!("{} {}", i + 1, link.label)))
            .collect();

        let list = List::new(items)
            .block(Block::default().title(" Menu ").borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = ListState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
