use crate::api::model::format_population;
use crate::api::Country;
use crate::i18n::LocaleContext;
use crate::ui::theme::{MUTED, SEPARATOR, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

/// Two-line list row: name and code, then capital, region and population.
pub struct CountryCard<'a> {
    country: &'a Country,
}

impl<'a> CountryCard<'a> {
    pub fn new(country: &'a Country) -> Self {
        Self { country }
    }

    pub fn summary(&self, locale: &LocaleContext) -> String {
        let capital = self
            .country
            .primary_capital()
            .unwrap_or_else(|| locale.t("country.notAvailable"));
        format!(
            "{}: {}  ·  {}  ·  {}: {}",
            locale.t("country.capital"),
            capital,
            self.country.region,
            locale.t("country.population"),
            format_population(self.country.population)
        )
    }

    pub fn item(&self, locale: &LocaleContext) -> ListItem<'static> {
        let title = Line::from(vec![
            Span::styled(
                self.country.name.common.clone(),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", self.country.cca3), Style::default().fg(SEPARATOR)),
        ]);
        let details = Line::from(Span::styled(
            format!("  {}", self.summary(locale)),
            Style::default().fg(MUTED),
        ));
        ListItem::new(vec![title, details])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::mock_countries;
    use crate::i18n::Locale;

    #[test]
    fn summary_is_localized() {
        let spain = mock_countries().remove(0);
        let card = CountryCard::new(&spain);
        let en = LocaleContext::new(Locale::En, None);
        let es = LocaleContext::new(Locale::Es, None);
        assert_eq!(
            card.summary(&en),
            "Capital: Madrid  ·  Europe  ·  Population: 47.4M"
        );
        assert!(card.summary(&es).contains("Población: 47.4M"));
    }

    #[test]
    fn missing_capital_shows_placeholder() {
        let mut country = mock_countries().remove(0);
        country.capital.clear();
        let en = LocaleContext::new(Locale::En, None);
        assert!(CountryCard::new(&country).summary(&en).starts_with("Capital: N/A"));
    }
}
