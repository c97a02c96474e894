use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use tradify_runtime::{ACKNOWLEDGMENT, ACKNOWLEDGMENT_DETAIL, ContactForm};
use tradify_types::ContactField;

/// Contact section: the three-field form, or the acknowledgment once sent
pub struct ContactView<'a> {
    form: &'a ContactForm,
    field: ContactField,
    editing: bool,
}

impl<'a> ContactView<'a> {
    pub fn new(form: &'a ContactForm, field: ContactField, editing: bool) -> Self {
        Self {
            form,
            field,
            editing,
        }
    }
}

impl<'a> Widget for ContactView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(" Contact ").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.form.is_submitted() {
            let lines = vec![
                Line::from(Span::styled(
                    ACKNOWLEDGMENT,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(ACKNOWLEDGMENT_DETAIL),
            ];
            Paragraph::new(lines).centered().render(inner, buf);
            return;
        }

        let [name_area, email_area, message_area, hint_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        let draft = self.form.draft();
        for (field, field_area) in ContactField::ALL
            .into_iter()
            .zip([name_area, email_area, message_area])
        {
            let value = draft.field(field);
            let border = if self.editing && field == self.field {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let text = if value.is_empty() {
                Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(value)
            };
            Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .title(format!(" {} ", field.label()))
                        .borders(Borders::ALL)
                        .border_style(border),
                )
                .render(field_area, buf);
        }

        let hint = if self.editing {
            "[Tab] next field  [Enter] send  [Esc] stop editing"
        } else {
            "[e] write a message"
        };
        Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .render(hint_area, buf);
    }
}
