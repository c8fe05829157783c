use crate::i18n::LocaleContext;
use crate::ui::theme::{ACCENT, ACCENT_SOFT, GLOBAL_BORDER, SEPARATOR, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    total: usize,
}

impl Header {
    pub fn new(total: usize) -> Self {
        Self { total }
    }

    pub fn widget(&self, locale: &LocaleContext) -> Paragraph<'static> {
        let title_style = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", title_style),
            Span::styled(locale.t("app.title").to_string(), title_style),
        ];
        if self.total > 0 {
            let count = self.total.to_string();
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                locale.t_with("app.subtitle", &[("count", &count)]),
                Style::default().fg(ACCENT_SOFT),
            ));
        }
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(
            locale.t("language.name").to_string(),
            Style::default().fg(ACCENT),
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
