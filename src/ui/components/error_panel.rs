use crate::i18n::LocaleContext;
use crate::ui::theme::{MUTED, STATUS_ERROR, TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub struct ErrorPanel<'a> {
    title: &'a str,
    message: &'a str,
}

impl<'a> ErrorPanel<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }

    pub fn widget(&self, locale: &LocaleContext) -> Paragraph<'static> {
        let lines = vec![
            Line::from(Span::styled(
                self.message.to_string(),
                Style::default().fg(TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                locale.t("error.retry").to_string(),
                Style::default().fg(MUTED),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {} ", self.title),
                        Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(STATUS_ERROR)),
            )
    }
}
