//! Ratatui widgets for the storefront page.
//!
//! Each widget borrows the controller state it draws; none of them mutate
//! anything.

mod contact;
mod header;
mod menu;
mod page;
mod search;
mod status_bar;

pub use contact::ContactView;
pub use header::HeaderView;
pub use menu::MenuPopup;
pub use page::{AboutView, ProductsView, TestimonialsView};
pub use search::SearchOverlayView;
pub use status_bar::StatusBarView;

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
};
use tradify_types::Segment;

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [v_area] = vertical.areas(area);
    let [h_area] = horizontal.areas(v_area);
    h_area
}

/// Highlight segments as spans; matches are drawn bold yellow
pub(crate) fn segment_spans(segments: &[Segment]) -> Vec<Span<'_>> {
    segments
        .iter()
        .map(|s| {
            if s.emphasized {
                Span::styled(
                    s.text.as_str(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(s.text.as_str())
            }
        })
        .collect()
}
