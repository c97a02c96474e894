use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap,
    },
};
use tradify_types::{Benefit, GridFilterState, Hero, Product, Testimonial, TrustBadge};

use crate::presentation::formatters::{format_rating, stars};

// --------------------------------------------------------
// Hero + Product Grid
// --------------------------------------------------------

pub struct ProductsView<'a> {
    hero: &'a Hero,
    products: &'a [&'a Product],
    filter: &'a GridFilterState,
    selected: usize,
}

impl<'a> ProductsView<'a> {
    pub fn new(
        hero: &'a Hero,
        products: &'a [&'a Product],
        filter: &'a GridFilterState,
        selected: usize,
    ) -> Self {
        Self {
            hero,
            products,
            filter,
            selected,
        }
    }

    fn title(&self) -> String {
        let mut title = format!(" Top Picks ({}) ", self.products.len());
        if let Some(rating) = self.filter.rating_filter {
            title.push_str(&format!("rated {} ", format_rating(rating)));
        }
        if !self.filter.query.trim().is_empty() {
            title.push_str(&format!("matching \"{}\" ", self.filter.query.trim()));
        }
        title
    }
}

impl<'a> Widget for ProductsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [hero_area, grid_area] =
            Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);

        let hero = vec![
            Line::from(Span::styled(
                self.hero.headline.as_str(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(self.hero.tagline.as_str()),
            Line::from(vec![
                Span::styled("[t] ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    self.hero.call_to_action.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
        ];
        Paragraph::new(hero)
            .wrap(Wrap { trim: true })
            .render(hero_area, buf);

        let block = Block::default().title(self.title()).borders(Borders::ALL);

        if self.products.is_empty() {
            Paragraph::new("No products to show. Press [x] to clear the rating filter.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(grid_area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .products
            .iter()
            .map(|p| {
                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        format!("{:<30}", p.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(stars(p.star_count()), Style::default().fg(Color::Yellow)),
                ])];
                if !p.benefits.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", p.benefits.join(" · ")),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol("▶ ")
            .highlight_style(Style::default().bg(Color::DarkGray));

        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, grid_area, buf, &mut state);
    }
}

// --------------------------------------------------------
// Reviews
// --------------------------------------------------------

pub struct TestimonialsView<'a> {
    testimonials: &'a [Testimonial],
}

impl<'a> TestimonialsView<'a> {
    pub fn new(testimonials: &'a [Testimonial]) -> Self {
        Self { testimonials }
    }
}

impl<'a> Widget for TestimonialsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        for t in self.testimonials {
            lines.push(Line::from(Span::styled(
                stars(t.rating.round().clamp(0.0, 5.0) as usize),
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(format!("\"{}\"", t.quote)));
            lines.push(Line::from(Span::styled(
                format!("  - {}", t.author),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
            lines.push(Line::default());
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(" Reviews ").borders(Borders::ALL))
            .render(area, buf);
    }
}

// --------------------------------------------------------
// Why Us?
// --------------------------------------------------------

pub struct AboutView<'a> {
    benefits: &'a [Benefit],
    trust_badges: &'a [TrustBadge],
}

impl<'a> AboutView<'a> {
    pub fn new(benefits: &'a [Benefit], trust_badges: &'a [TrustBadge]) -> Self {
        Self {
            benefits,
            trust_badges,
        }
    }
}

fn titled_lines<'a>(items: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (title, description) in items {
        lines.push(Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(description));
        lines.push(Line::default());
    }
    lines
}

impl<'a> Widget for AboutView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        let benefits = titled_lines(
            self.benefits
                .iter()
                .map(|b| (b.title.as_str(), b.description.as_str())),
        );
        Paragraph::new(benefits)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Why Us? ").borders(Borders::ALL))
            .render(left, buf);

        let badges = titled_lines(
            self.trust_badges
                .iter()
                .map(|b| (b.title.as_str(), b.description.as_str())),
        );
        Paragraph::new(badges)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Shop With Confidence ").borders(Borders::ALL))
            .render(right, buf);
    }
}
