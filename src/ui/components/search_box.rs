use crate::i18n::LocaleContext;
use crate::ui::theme::{ACCENT, MUTED, TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct SearchBox<'a> {
    text: &'a str,
}

impl<'a> SearchBox<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn widget(&self, locale: &LocaleContext) -> Paragraph<'static> {
        let mut spans = vec![Span::styled(" 🔍 ", Style::default().fg(MUTED))];
        if self.text.is_empty() {
            spans.push(Span::styled(
                locale.t("search.placeholder").to_string(),
                Style::default().fg(MUTED),
            ));
        } else {
            spans.push(Span::styled(self.text.to_string(), Style::default().fg(TEXT)));
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
            spans.push(Span::styled(
                format!("   ({})", locale.t("search.clearHint")),
                Style::default().fg(MUTED),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        )
    }
}
