use crate::i18n::Locale;
use crate::ui::theme::{GLOBAL_BORDER, MUTED, TEXT};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Bottom bar: key hints on the left, language tag and version on the right.
pub struct Footer<'a> {
    hints: &'a str,
    locale: Locale,
}

impl<'a> Footer<'a> {
    pub fn new(hints: &'a str, locale: Locale) -> Self {
        Self { hints, locale }
    }

    pub fn status(&self) -> String {
        format!(
            "{} · v{}",
            self.locale.tag().to_uppercase(),
            env!("CARGO_PKG_VERSION")
        )
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status = self.status();
        let status_width = status.chars().count() as u16 + 1;
        let [hints_area, status_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)])
                .areas(inner);

        let dim = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        frame.render_widget(Paragraph::new(format!(" {}", self.hints)).style(dim), hints_area);
        frame.render_widget(
            Paragraph::new(format!("{} ", status))
                .style(Style::default().fg(MUTED))
                .alignment(Alignment::Right),
            status_area,
        );
    }
}
