use crate::i18n::LocaleContext;
use crate::ui::theme::{ACCENT, MUTED, STATUS_OK};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct LoadMoreControl {
    loaded: usize,
    total: usize,
    loading: bool,
}

impl LoadMoreControl {
    pub fn new(loaded: usize, total: usize, loading: bool) -> Self {
        Self {
            loaded,
            total,
            loading,
        }
    }

    pub fn has_more(&self) -> bool {
        self.loaded < self.total
    }

    pub fn text(&self, locale: &LocaleContext) -> String {
        let loaded = self.loaded.to_string();
        let total = self.total.to_string();
        if self.loading {
            locale.t("loading").to_string()
        } else if self.has_more() {
            format!(
                "{} (Tab)  ·  {}",
                locale.t("loadMore"),
                locale.t_with("pagination.progress", &[("loaded", &loaded), ("total", &total)])
            )
        } else {
            locale.t_with("pagination.end", &[("total", &total)])
        }
    }

    pub fn widget(&self, locale: &LocaleContext) -> Paragraph<'static> {
        let style = if self.has_more() && !self.loading {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else if self.loading {
            Style::default().fg(MUTED)
        } else {
            Style::default().fg(STATUS_OK)
        };
        Paragraph::new(Line::from(Span::styled(self.text(locale), style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(MUTED)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn shows_progress_until_exhausted() {
        let en = LocaleContext::new(Locale::En, None);
        assert_eq!(
            LoadMoreControl::new(10, 250, false).text(&en),
            "Load more (Tab)  ·  10 of 250 loaded"
        );
        assert_eq!(
            LoadMoreControl::new(250, 250, false).text(&en),
            "All 250 countries loaded"
        );
        assert_eq!(LoadMoreControl::new(10, 250, true).text(&en), "Loading...");
    }
}
