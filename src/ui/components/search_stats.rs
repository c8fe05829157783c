use crate::i18n::LocaleContext;
use crate::ui::theme::MUTED;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

/// One-line summary under the search box.
pub struct SearchStats<'a> {
    query: &'a str,
    total: usize,
    searching: bool,
}

impl<'a> SearchStats<'a> {
    pub fn new(query: &'a str, total: usize, searching: bool) -> Self {
        Self {
            query,
            total,
            searching,
        }
    }

    /// `None` when there is no query and nothing pending.
    pub fn text(&self, locale: &LocaleContext) -> Option<String> {
        if self.searching {
            return Some(locale.t("search.searching").to_string());
        }
        if self.query.is_empty() {
            return None;
        }
        let count = self.total.to_string();
        let key = match self.total {
            0 => "search.noResults",
            1 => "search.oneResult",
            _ => "search.results",
        };
        Some(locale.t_with(key, &[("query", self.query), ("count", &count)]))
    }

    pub fn widget(&self, locale: &LocaleContext) -> Option<Paragraph<'static>> {
        self.text(locale).map(|text| {
            Paragraph::new(format!(" {}", text))
                .style(Style::default().fg(MUTED).add_modifier(Modifier::ITALIC))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn hidden_without_query() {
        let en = LocaleContext::new(Locale::En, None);
        assert_eq!(SearchStats::new("", 250, false).text(&en), None);
    }

    #[test]
    fn pending_input_reads_searching() {
        let en = LocaleContext::new(Locale::En, None);
        assert_eq!(
            SearchStats::new("", 0, true).text(&en).as_deref(),
            Some("Searching...")
        );
    }

    #[test]
    fn result_counts_are_pluralized() {
        let en = LocaleContext::new(Locale::En, None);
        assert_eq!(
            SearchStats::new("zz", 0, false).text(&en).as_deref(),
            Some("No results found for \"zz\"")
        );
        assert_eq!(
            SearchStats::new("jap", 1, false).text(&en).as_deref(),
            Some("1 result found for \"jap\"")
        );
        assert_eq!(
            SearchStats::new("an", 3, false).text(&en).as_deref(),
            Some("3 results found for \"an\"")
        );
    }

    #[test]
    fn query_text_is_shown_verbatim() {
        let en = LocaleContext::new(Locale::En, None);
        assert_eq!(
            SearchStats::new("{count}", 3, false).text(&en).as_deref(),
            Some("3 results found for \"{count}\"")
        );
    }
}
